//! Report aggregation engine for a staffing and time-sheet system.
//!
//! This crate computes, normalizes and proportionally redistributes employee
//! work-hour figures across report date ranges that do not align with the
//! weekly/monthly assignment granularity, and renders the results into
//! tabular documents (a word-processing table document and a spreadsheet
//! workbook).

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
pub mod workcal;
