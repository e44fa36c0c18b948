//! Common utilities for the quire markup parser.
//!
//! This crate provides shared infrastructure used by all quire components:
//! - **Warning System** - colored, deduplicated terminal output for lenient
//!   recoveries the parser performs without failing

pub mod warning;
