//! Data models for conversion results and invoice records.

pub mod config;
pub mod invoice;
