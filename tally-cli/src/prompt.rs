//! The categorization prompt. This template is the only specification the
//! model ever sees: the category set, the no-summing/no-clubbing rules, and
//! the output header contract all live here. Whether a row really came from
//! the purchases section, and whether rows get merged or duplicated, is up
//! to the model — nothing downstream can check that against the source PDF.

use tally_core::{CSV_HEADER, Category};

/// Embed the extracted statement text into the fixed instruction template.
/// Input size is passed through unchecked; an oversized statement fails at
/// the service boundary, not here.
pub fn categorization_prompt(statement_text: &str) -> String {
    let mut categories = String::new();
    for cat in Category::ALL {
        categories.push('-');
        categories.push(' ');
        categories.push_str(cat.label());
        if !cat.hint().is_empty() {
            categories.push_str(": ");
            categories.push_str(cat.hint());
        }
        categories.push('\n');
    }

    format!(
        "Can you read this bank statement and classify each transaction in categories \
mentioned below, give it in a CSV format. Below are categories and the kind of \
transactions to be classified in those categories. Avoid summing the transaction \
amount. Avoid clubbing transactions in a single row. Look at transactions only in \
the purchases sections. Account for all the transactions in the statement. Sort \
the transactions chronologically.

Categories:
{categories}
Here's the bank statement:

{statement_text}

Please provide the output as exactly one CSV block with the following columns:
{CSV_HEADER}"
    )
}
