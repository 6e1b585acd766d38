//! Per-column digit entry state.

use std::fmt::{self, Display};

use crate::{Column, Digit, MAX_VALUE};

/// A partially entered multi-digit number, one optional digit per column.
///
/// This is the atomic unit every input field of the tutor is built from.
/// An absent digit means "not yet entered", never zero: a learner who has
/// written nothing has not written `0`.
///
/// # Parsing rule
///
/// [`value`](Self::value) concatenates the present digits from thousands
/// down to units, skipping absent columns entirely. `{tens: 2, units: 3}`
/// reads as 23, `{units: 3}` alone reads as 3, and a fully blank state
/// reads as 0 - never as an error.
///
/// # Examples
///
/// ```
/// use colsum_core::{Column, Digit, DigitState};
///
/// let mut state = DigitState::new();
/// assert!(state.is_blank());
/// assert_eq!(state.value(), 0);
///
/// state.set(Column::Units, Digit::D3);
/// assert_eq!(state.value(), 3);
///
/// state.set(Column::Tens, Digit::D2);
/// assert_eq!(state.value(), 23);
///
/// assert_eq!(state.clear(Column::Units), Some(Digit::D3));
/// assert_eq!(state.value(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitState {
    cells: [Option<Digit>; 4],
}

impl DigitState {
    /// Creates an empty state with no digits entered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits an integer into per-column digits, as written on paper.
    ///
    /// The units digit is always present (zero is written as `0`); higher
    /// columns are present only when the value reaches them, so no leading
    /// zeros are produced.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`MAX_VALUE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use colsum_core::{Column, Digit, DigitState};
    ///
    /// let state = DigitState::from_value(90);
    /// assert_eq!(state.get(Column::Tens), Some(Digit::D9));
    /// assert_eq!(state.get(Column::Units), Some(Digit::D0));
    /// assert_eq!(state.get(Column::Hundreds), None);
    /// ```
    #[must_use]
    pub fn from_value(n: u32) -> Self {
        assert!(n <= MAX_VALUE, "value out of column range: {n}");
        let mut state = Self::new();
        for column in Column::ALL {
            if column == Column::Units || n >= column.weight() {
                state.set(column, Digit::from_value(column.digit_of(n)));
            }
        }
        state
    }

    /// Returns the digit entered in `column`, if any.
    #[must_use]
    pub fn get(&self, column: Column) -> Option<Digit> {
        self.cells[column.index()]
    }

    /// Writes `digit` into `column`, replacing any previous digit.
    pub fn set(&mut self, column: Column, digit: Digit) {
        self.cells[column.index()] = Some(digit);
    }

    /// Erases the digit in `column`, returning what was there.
    pub fn clear(&mut self, column: Column) -> Option<Digit> {
        self.cells[column.index()].take()
    }

    /// Returns `true` if no column has a digit entered.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Parses the entered digits into an integer.
    ///
    /// Present digits are concatenated from thousands down to units; absent
    /// columns are skipped. A fully blank state parses to 0.
    #[must_use]
    pub fn value(&self) -> u32 {
        let mut acc = 0;
        for column in Column::ALL.iter().rev() {
            if let Some(digit) = self.get(*column) {
                acc = acc * 10 + u32::from(digit.value());
            }
        }
        acc
    }
}

impl Display for DigitState {
    /// Formats the entered digits thousands-first, with `_` for blanks.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in Column::ALL.iter().rev() {
            match self.get(*column) {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str("_")?,
            }
        }
        Ok(())
    }
}
