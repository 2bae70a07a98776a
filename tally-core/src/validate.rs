//! Read-only summary statistics over a parsed transaction table.

use chrono::NaiveDate;

use crate::transaction::{Category, TransactionTable};

/// Aggregate over one table: reporting only, never round-tripped.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSummary {
    pub total_transactions: usize,
    /// Distinct category labels in first-seen order — whatever the model
    /// actually produced, canonical or not.
    pub categories_found: Vec<String>,
    /// Subset of `categories_found` outside the canonical set.
    pub unknown_categories: Vec<String>,
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
    /// Sign-aware sum; no currency normalization.
    pub total_amount: f64,
}

impl ValidationSummary {
    /// Inclusive range rendered "earliest to latest", ISO dates.
    pub fn date_range(&self) -> Option<String> {
        match (self.earliest, self.latest) {
            (Some(e), Some(l)) => Some(format!("{} to {}", e, l)),
            _ => None,
        }
    }
}

pub fn validate(table: &TransactionTable) -> ValidationSummary {
    let mut categories_found: Vec<String> = Vec::new();
    let mut unknown_categories: Vec<String> = Vec::new();

    for record in &table.records {
        if !categories_found.iter().any(|c| c == &record.category) {
            categories_found.push(record.category.clone());
            if Category::from_label(&record.category).is_none() {
                unknown_categories.push(record.category.clone());
            }
        }
    }

    ValidationSummary {
        total_transactions: table.len(),
        categories_found,
        unknown_categories,
        earliest: table.records.iter().map(|r| r.date).min(),
        latest: table.records.iter().map(|r| r.date).max(),
        total_amount: table.records.iter().map(|r| r.amount).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionRecord;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_table() -> TransactionTable {
        TransactionTable::new(vec![
            TransactionRecord::new(d(2024, 1, 2), "Uber", 12.30, "Local Travel (Car + Cabs)"),
            TransactionRecord::new(d(2024, 1, 5), "Coffee Shop", 4.50, "Eat + Drink Out"),
            TransactionRecord::new(d(2024, 1, 9), "Amazon", 45.00, "Shopping Home"),
        ])
    }

    #[test]
    fn test_summary_of_example_table() {
        let summary = validate(&sample_table());
        assert_eq!(summary.total_transactions, 3);
        assert_eq!(summary.date_range().as_deref(), Some("2024-01-02 to 2024-01-09"));
        assert!((summary.total_amount - 61.80).abs() < 1e-9);
        assert_eq!(
            summary.categories_found,
            vec!["Local Travel (Car + Cabs)", "Eat + Drink Out", "Shopping Home"]
        );
        assert!(summary.unknown_categories.is_empty());
    }

    #[test]
    fn test_out_of_set_categories_are_flagged() {
        let mut table = sample_table();
        table.records.push(TransactionRecord::new(d(2024, 1, 10), "Venmo", 20.0, "Transfers"));
        table.records.push(TransactionRecord::new(d(2024, 1, 11), "Venmo", 5.0, "Transfers"));

        let summary = validate(&table);
        assert_eq!(summary.unknown_categories, vec!["Transfers"]);
        // Still reported among the observed categories.
        assert!(summary.categories_found.iter().any(|c| c == "Transfers"));
        // Distinct means distinct: the duplicate label counts once.
        assert_eq!(summary.categories_found.len(), 4);
    }

    #[test]
    fn test_empty_table() {
        let summary = validate(&TransactionTable::default());
        assert_eq!(summary.total_transactions, 0);
        assert_eq!(summary.date_range(), None);
        assert_eq!(summary.total_amount, 0.0);
        assert!(summary.categories_found.is_empty());
    }

    #[test]
    fn test_sum_is_sign_aware() {
        let mut table = sample_table();
        table.records.push(TransactionRecord::new(d(2024, 1, 12), "Refund", -10.0, "Misc"));
        let summary = validate(&table);
        assert!((summary.total_amount - 51.80).abs() < 1e-9);
    }
}
