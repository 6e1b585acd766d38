//! Core data structures for column-arithmetic applications.
//!
//! This crate provides the fundamental types for representing multi-digit
//! numbers the way a learner writes them on paper: one decimal digit per
//! place-value column, entered (or erased) one column at a time.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Place-value columns** - [`column`]: the four supported columns
//!    (units through thousands), totally ordered from low to high weight.
//! 2. **Digits** - [`digit`]: type-safe representation of decimal digits 0-9.
//! 3. **Partially entered numbers** - [`digit_state`]: a per-column map of
//!    optional digits, distinguishing "not yet entered" from zero, with the
//!    parsing and splitting rules shared by generation and verification.
//!
//! # Examples
//!
//! ```
//! use colsum_core::{Column, Digit, DigitState};
//!
//! let mut state = DigitState::new();
//! state.set(Column::Tens, Digit::D2);
//! state.set(Column::Units, Digit::D3);
//! assert_eq!(state.value(), 23);
//!
//! // Splitting an integer produces the digits a learner would write.
//! let split = DigitState::from_value(407);
//! assert_eq!(split.get(Column::Hundreds), Some(Digit::D4));
//! assert_eq!(split.get(Column::Tens), Some(Digit::D0));
//! assert_eq!(split.get(Column::Units), Some(Digit::D7));
//! assert_eq!(split.get(Column::Thousands), None);
//! ```

pub mod column;
pub mod digit;
pub mod digit_state;

// Re-export commonly used types
pub use self::{column::Column, digit::Digit, digit_state::DigitState};

/// The largest value representable in the four supported columns.
pub const MAX_VALUE: u32 = 9999;
