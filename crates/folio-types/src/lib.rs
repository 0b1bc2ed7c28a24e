//! Foundation types for folio.
//!
//! This crate contains the presentation-agnostic types shared by all folio
//! crates: output lines, input events, theme names, the portfolio profile,
//! configuration, and error types.

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod profile;
pub mod theme;
