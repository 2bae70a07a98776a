//! tally-table: locate and parse the CSV payload in a model reply, and
//! serialize the resulting transaction table.

pub mod reply;
pub mod writer;

pub use reply::parse_reply;
pub use writer::{read_table, write_table};
