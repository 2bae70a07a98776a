//! Transaction record types and the canonical category set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Header line the model is instructed to emit and the parser searches for.
/// This literal is the payload-delimiter contract between prompt and parser.
pub const CSV_HEADER: &str = "Date,Description,Amount,Category";

/// One categorized statement line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    /// Transaction date (rendered YYYY-MM-DD on output)
    pub date: NaiveDate,
    /// Merchant / description text as the model returned it
    pub description: String,
    /// Signed amount; sign convention follows the statement (positive = charge)
    pub amount: f64,
    /// Category label, free text at the record level.
    /// Membership in the canonical set is checked by the validator, not here.
    pub category: String,
}

impl TransactionRecord {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }
}

/// Ordered set of records parsed from one model reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionTable {
    pub records: Vec<TransactionRecord>,
}

impl TransactionTable {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sort ascending by date. Stable: rows sharing a date keep reply order.
    pub fn sort_by_date(&mut self) {
        self.records.sort_by_key(|r| r.date);
    }
}

/// The canonical categories the prompt enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Travel,
    LocalTravel,
    ShoppingHome,
    PersonalShopping,
    PersonalServices,
    Subscriptions,
    SubscriptionsHome,
    EatDrinkOut,
    Medical,
    Fitness,
    Misc,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Travel,
        Category::LocalTravel,
        Category::ShoppingHome,
        Category::PersonalShopping,
        Category::PersonalServices,
        Category::Subscriptions,
        Category::SubscriptionsHome,
        Category::EatDrinkOut,
        Category::Medical,
        Category::Fitness,
        Category::Misc,
    ];

    /// Label exactly as it appears in the prompt and the output CSV.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Travel => "Travel",
            Category::LocalTravel => "Local Travel (Car + Cabs)",
            Category::ShoppingHome => "Shopping Home",
            Category::PersonalShopping => "Personal Shopping",
            Category::PersonalServices => "Personal Services",
            Category::Subscriptions => "Subscriptions",
            Category::SubscriptionsHome => "Subscriptions Home",
            Category::EatDrinkOut => "Eat + Drink Out",
            Category::Medical => "Medical",
            Category::Fitness => "Work-outs/Fitness",
            Category::Misc => "Misc",
        }
    }

    /// Worked examples shown next to the label in the prompt.
    /// Empty for categories the prompt lists bare.
    pub fn hint(&self) -> &'static str {
        match self {
            Category::Travel => "Flights, Hotels, Any transactions in non-US currencies",
            Category::LocalTravel => "Uber, Lyft, Gas, Automobile Service, Car Cleaning",
            Category::ShoppingHome => "Grocery Chains, Indian stores, Amazon transactions",
            Category::PersonalShopping => "Hair cuts, smoke shop, retail brands",
            Category::PersonalServices => "Trade Subscriptions",
            Category::Subscriptions => "Other subscriptions",
            Category::SubscriptionsHome => "Trash",
            Category::EatDrinkOut => "Restaurants, Bars, Doordash, Uber Eats",
            Category::Medical => "",
            Category::Fitness => "",
            Category::Misc => "Any refunds, uncategorizable transactions",
        }
    }

    /// Resolve a label back to its category. Returns `None` for anything
    /// outside the canonical set — the model is not guaranteed to stay in it.
    pub fn from_label(label: &str) -> Option<Category> {
        let label = label.trim();
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_label(cat.label()), Some(cat));
        }
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        assert_eq!(Category::from_label("Groceries"), None);
        assert_eq!(Category::from_label(""), None);
    }

    #[test]
    fn test_from_label_trims() {
        assert_eq!(
            Category::from_label("  Eat + Drink Out "),
            Some(Category::EatDrinkOut)
        );
    }

    #[test]
    fn test_sort_is_stable_on_equal_dates() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        let mut table = TransactionTable::new(vec![
            TransactionRecord::new(d(2024, 1, 5), "second", 2.0, "Misc"),
            TransactionRecord::new(d(2024, 1, 2), "first", 1.0, "Misc"),
            TransactionRecord::new(d(2024, 1, 5), "third", 3.0, "Misc"),
        ]);

        table.sort_by_date();
        let descs: Vec<_> = table.records.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descs, vec!["first", "second", "third"]);

        // Sorting again must not reorder equal-date rows.
        let once = table.clone();
        table.sort_by_date();
        assert_eq!(table, once);
    }
}
