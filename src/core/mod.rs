//! Core module - Contains the fundamental data structures
//!
//! This module provides:
//! - Error types shared by every parser
//! - Unified result model (ResultItem)
//! - Rendering functions for different output formats

pub mod error;
pub mod model;
pub mod render;
