//! Decimal digit representation.

use std::fmt::{self, Display};

/// A decimal digit in the range 0-9.
///
/// This enum provides type-safe representation of the digits a learner can
/// write into a column, preventing invalid values at compile time.
///
/// # Examples
///
/// ```
/// use colsum_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value
/// let digit = Digit::from_value(7);
/// assert_eq!(digit, Digit::D7);
///
/// // Keypad input arrives as characters
/// assert_eq!(Digit::from_char('3'), Some(Digit::D3));
/// assert_eq!(Digit::from_char('x'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 0.
    D0 = 0,
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 0 to 9.
    pub const ALL: [Self; 10] = [
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 0-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 0-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use colsum_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(0), Digit::D0);
    /// assert_eq!(Digit::from_value(9), Digit::D9);
    /// ```
    ///
    /// ```should_panic
    /// use colsum_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(10);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            0 => Self::D0,
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("Invalid digit value: {value}"),
        }
    }

    /// Creates a digit from an ASCII character, or `None` if it is not `0`-`9`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let value = c.to_digit(10)?;
        #[expect(clippy::cast_possible_truncation)]
        Some(Self::from_value(value as u8))
    }

    /// Returns the numeric value of this digit (0-9).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the ASCII character for this digit.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.value()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
