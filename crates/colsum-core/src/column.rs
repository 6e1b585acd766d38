//! Place-value column representation.

use std::fmt::{self, Display};

/// A place-value column of a vertically written number.
///
/// Columns are totally ordered from low to high weight, so `Units < Tens <
/// Hundreds < Thousands`. This ordering matches the direction of manual
/// column addition (compute units first, propagate carries leftwards).
///
/// # Examples
///
/// ```
/// use colsum_core::Column;
///
/// assert!(Column::Units < Column::Thousands);
/// assert_eq!(Column::Tens.weight(), 10);
/// assert_eq!(Column::Hundreds.higher(), Some(Column::Thousands));
/// assert_eq!(Column::Units.lower(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    /// The units (ones) column, weight 1.
    Units,
    /// The tens column, weight 10.
    Tens,
    /// The hundreds column, weight 100.
    Hundreds,
    /// The thousands column, weight 1000.
    Thousands,
}

impl Column {
    /// Array containing all columns from lowest to highest weight.
    ///
    /// # Examples
    ///
    /// ```
    /// use colsum_core::Column;
    ///
    /// assert_eq!(Column::ALL.len(), 4);
    /// assert_eq!(Column::ALL[0], Column::Units);
    /// assert_eq!(Column::ALL[3], Column::Thousands);
    /// ```
    pub const ALL: [Self; 4] = [Self::Units, Self::Tens, Self::Hundreds, Self::Thousands];

    /// Returns the positional weight of this column (1, 10, 100, or 1000).
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Units => 1,
            Self::Tens => 10,
            Self::Hundreds => 100,
            Self::Thousands => 1000,
        }
    }

    /// Returns the next column of higher weight, or `None` at thousands.
    #[must_use]
    pub const fn higher(self) -> Option<Self> {
        match self {
            Self::Units => Some(Self::Tens),
            Self::Tens => Some(Self::Hundreds),
            Self::Hundreds => Some(Self::Thousands),
            Self::Thousands => None,
        }
    }

    /// Returns the next column of lower weight, or `None` at units.
    #[must_use]
    pub const fn lower(self) -> Option<Self> {
        match self {
            Self::Units => None,
            Self::Tens => Some(Self::Units),
            Self::Hundreds => Some(Self::Tens),
            Self::Thousands => Some(Self::Hundreds),
        }
    }

    /// Extracts the decimal digit of `n` at this column.
    ///
    /// # Examples
    ///
    /// ```
    /// use colsum_core::Column;
    ///
    /// assert_eq!(Column::Units.digit_of(1234), 4);
    /// assert_eq!(Column::Tens.digit_of(1234), 3);
    /// assert_eq!(Column::Thousands.digit_of(34), 0);
    /// ```
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn digit_of(self, n: u32) -> u8 {
        ((n / self.weight()) % 10) as u8
    }

    /// Returns the highest column populated when `n` is written out.
    ///
    /// Zero is written as a single digit in the units column.
    ///
    /// # Examples
    ///
    /// ```
    /// use colsum_core::Column;
    ///
    /// assert_eq!(Column::highest_for(7), Column::Units);
    /// assert_eq!(Column::highest_for(23), Column::Tens);
    /// assert_eq!(Column::highest_for(1000), Column::Thousands);
    /// ```
    #[must_use]
    pub const fn highest_for(n: u32) -> Self {
        if n >= 1000 {
            Self::Thousands
        } else if n >= 100 {
            Self::Hundreds
        } else if n >= 10 {
            Self::Tens
        } else {
            Self::Units
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Units => 0,
            Self::Tens => 1,
            Self::Hundreds => 2,
            Self::Thousands => 3,
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Units => "units",
            Self::Tens => "tens",
            Self::Hundreds => "hundreds",
            Self::Thousands => "thousands",
        };
        f.write_str(name)
    }
}
