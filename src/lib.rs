//! lucidshark-sloc - Source line counter
//!
//! Classifies every line of a set of source files as blank, comment or code
//! and aggregates the counts per language.
//!
//! The two entry points for callers that bring their own input are
//! [`resolve_and_classify`], called once per decoded file, and
//! [`aggregate`], called once per run.

pub mod cli;
pub mod config;
pub mod core;
pub mod discovery;
pub mod error;
pub mod export;
pub mod language;

pub use crate::core::{
    aggregate, resolve_and_classify, FileStats, LanguageStats, LineCounts, Report,
};
pub use error::{Result, SlocError};
