//! Core module - Contains the traversal and selection building blocks
//!
//! This module provides:
//! - File selection rules (suffix set + literal allow-list)
//! - Directory traversal yielding (directory, files) listings
//! - Tolerant text reading that never fails on invalid UTF-8

pub mod file_reader;
pub mod selector;
pub mod walker;
