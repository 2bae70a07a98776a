//! tally-core: transaction types, the canonical category set, and the
//! validation summary shared across the tally pipeline.

pub mod error;
pub mod transaction;
pub mod validate;

pub use error::{Result, TallyError};
pub use transaction::{CSV_HEADER, Category, TransactionRecord, TransactionTable};
pub use validate::{ValidationSummary, validate};
