//! Parse the model reply into a transaction table.
//!
//! The reply is free-form text; the CSV payload starts at the first
//! occurrence of the literal header line. Commentary before the header is
//! discarded, and everything from the header on must be well-formed
//! four-column CSV (a closing code fence or blank record ends the payload).

use chrono::NaiveDate;

use tally_core::{CSV_HEADER, Result, TallyError, TransactionRecord, TransactionTable};

/// Date renderings the model has been seen to use. ISO first; the rest are
/// the usual US statement forms.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
];

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Parse an amount cell. Tolerates a leading `$`, thousands separators,
/// and a sign before the currency symbol ("- $14.05").
pub fn parse_amount(s: &str) -> Option<f64> {
    let cleaned = s.trim().replace(',', "");
    let trimmed = cleaned.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim()),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').map(str::trim).unwrap_or(rest);
    let value: f64 = rest.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Locate the CSV payload in `reply` and parse it.
///
/// Fails with `MalformedReply` when the header literal is absent and with
/// `MalformedRow` when any data row breaks the four-column/date/amount
/// contract. Rows keep reply order; sorting is the caller's move.
pub fn parse_reply(reply: &str) -> Result<TransactionTable> {
    let start = reply.find(CSV_HEADER).ok_or(TallyError::MalformedReply)?;
    if start > 0 {
        log::debug!("discarding {start} bytes of preamble before CSV header");
    }
    parse_payload(&reply[start..])
}

fn parse_payload(payload: &str) -> Result<TransactionTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(payload.as_bytes());

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        // Header is payload line 1.
        let line = i + 2;
        let row = row.map_err(|e| TallyError::MalformedRow {
            line,
            reason: e.to_string(),
        })?;

        // Models that fence the CSV block close it with ``` on its own line;
        // treat that (or a stray blank record) as end of payload.
        if row.len() == 1 {
            let only = row.get(0).unwrap_or("").trim();
            if only.is_empty() || only == "```" {
                break;
            }
        }

        if row.len() != 4 {
            return Err(TallyError::MalformedRow {
                line,
                reason: format!("expected 4 columns, got {}", row.len()),
            });
        }

        let date_raw = row.get(0).unwrap_or("");
        let date = parse_date(date_raw).ok_or_else(|| TallyError::MalformedRow {
            line,
            reason: format!("unrecognized date `{}`", date_raw.trim()),
        })?;

        let amount_raw = row.get(2).unwrap_or("");
        let amount = parse_amount(amount_raw).ok_or_else(|| TallyError::MalformedRow {
            line,
            reason: format!("non-numeric amount `{}`", amount_raw.trim()),
        })?;

        records.push(TransactionRecord::new(
            date,
            row.get(1).unwrap_or("").trim(),
            amount,
            row.get(3).unwrap_or("").trim(),
        ));
    }

    log::info!("parsed {} transaction row(s) from reply", records.len());
    Ok(TransactionTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        for raw in ["2024-01-05", "01/05/2024", "1/5/24", "Jan 5, 2024", "January 5, 2024"] {
            assert_eq!(parse_date(raw), Some(expected), "failed on {raw}");
        }
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-05"), None);
    }

    #[test]
    fn test_parse_amount_variants() {
        assert_eq!(parse_amount("4.50"), Some(4.5));
        assert_eq!(parse_amount("$4.50"), Some(4.5));
        assert_eq!(parse_amount("-14.05"), Some(-14.05));
        assert_eq!(parse_amount("- $14.05"), Some(-14.05));
        assert_eq!(parse_amount("1,234.56"), Some(1234.56));
        assert_eq!(parse_amount("twelve"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let table = parse_reply(CSV_HEADER).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_header_is_malformed_reply() {
        let err = parse_reply("Sorry, I could not find any transactions.").unwrap_err();
        assert!(matches!(err, TallyError::MalformedReply));
    }

    #[test]
    fn test_preamble_is_discarded() {
        let reply = "Here are your categorized transactions:\n\n\
                     Date,Description,Amount,Category\n\
                     2024-01-05,Coffee Shop,4.50,Eat + Drink Out\n";
        let table = parse_reply(reply).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].description, "Coffee Shop");
        assert_eq!(table.records[0].amount, 4.5);
    }

    #[test]
    fn test_closing_fence_ends_payload() {
        let reply = "```\nDate,Description,Amount,Category\n\
                     2024-01-05,Coffee Shop,4.50,Eat + Drink Out\n\
                     ```\n";
        let table = parse_reply(reply).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_wrong_column_count_is_malformed_row() {
        let reply = "Date,Description,Amount,Category\n2024-01-05,Coffee Shop,4.50\n";
        let err = parse_reply(reply).unwrap_err();
        match err {
            TallyError::MalformedRow { line, .. } => assert_eq!(line, 2),
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_amount_is_malformed_row() {
        let reply = "Date,Description,Amount,Category\n2024-01-05,Coffee Shop,free,Eat + Drink Out\n";
        let err = parse_reply(reply).unwrap_err();
        assert!(matches!(err, TallyError::MalformedRow { .. }));
    }

    #[test]
    fn test_bad_date_is_malformed_row() {
        let reply = "Date,Description,Amount,Category\nsometime,Coffee Shop,4.50,Eat + Drink Out\n";
        let err = parse_reply(reply).unwrap_err();
        assert!(matches!(err, TallyError::MalformedRow { .. }));
    }

    #[test]
    fn test_quoted_description_with_comma() {
        let reply = "Date,Description,Amount,Category\n\
                     2024-01-05,\"Starbucks, Market St\",4.50,Eat + Drink Out\n";
        let table = parse_reply(reply).unwrap();
        assert_eq!(table.records[0].description, "Starbucks, Market St");
    }
}
