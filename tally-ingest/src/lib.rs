//! tally-ingest: statement document ingestion (PDF text extraction).

pub mod statement;

pub use statement::extract_statement_text;
