//! Data ingestion layer for the QTY dashboard.
//!
//! Responsible for opening workbooks, reading each sheet's cells into raw
//! rows the core normalizer understands, and caching normalized sheets
//! keyed by the workbook's modification time.

pub mod cache;
pub mod workbook;

pub use dashboard_core as core;
