//! Parse module - Argument line interpretation
//!
//! This module provides:
//! - Token extraction (integer / phone / email) from free text
//! - Sort arguments and the fixed sort catalog
//! - Classification of argument lines into keywords and sort arguments
//! - Index and field value parsers

pub mod catalog;
pub mod classify;
pub mod extract;
pub mod sort_argument;
pub mod values;
