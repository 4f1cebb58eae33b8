//! # dewey-core: Dewey Decimal Call Numbers
//!
//! Parses, normalizes, ranges and compares Dewey Decimal Classification call
//! numbers such as `514.123 A997x` or `DVD 791.4372`.
//!
//! ## Operations
//!
//! - [`parse_call_number`] splits a raw string into prestamp,
//!   classification, cutter and additional text.
//! - [`calculate_range`] expands a wildcard pattern (`74x`, `7xx.2x`) into
//!   a half-open `[min, max)` pair.
//! - [`compare`] / [`compare_str`] order two call numbers: numerically on
//!   the classification, then on zero-padded cutters.
//! - [`in_range`] tests membership in the range a pattern denotes.
//!
//! ## Design
//!
//! 1. **Operands are a sum type.** [`Input`] is either raw text or a parsed
//!    [`CallNumber`]; every entry point normalizes it once.
//!
//! 2. **Operators are a closed enum.** Text operators are parsed into
//!    [`Operator`] at the boundary and rejected there.
//!
//! 3. **No shared mutable state.** The grammar is compiled once into an
//!    immutable regex; every function is safe to call from any thread.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Logging goes through `tracing`; installing a subscriber is left to the
//!   application.

pub mod call_number;
pub mod compare;
pub mod config;
pub mod error;
pub mod parser;
pub mod range;

// Re-export primary types for ergonomic imports.
pub use call_number::CallNumber;
pub use compare::{compare, compare_str, in_range, Input, Operator};
pub use config::RangeConfig;
pub use error::DeweyError;
pub use parser::parse_call_number;
pub use range::{calculate_range, RangeCalculator};
