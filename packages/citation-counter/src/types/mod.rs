//! Data types for the counting pipeline.

pub mod config;
pub mod document;
pub mod record;
pub mod report;
pub mod table;
