//! Difficulty tiers and their arithmetic constraints.

use std::fmt::{self, Display};

/// A difficulty tier of the tutor.
///
/// Each tier fixes the operand count, the sampling ranges, and the carry
/// predicate the generated operands must satisfy. The exact rules live in
/// [`ProblemGenerator`](crate::ProblemGenerator); this enum is the menu-level
/// selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Two single-digit operands, no carry constraint.
    SingleDigit,
    /// A two-digit operand plus a one-digit operand, units column must not carry.
    DoublePlusSingle,
    /// Two two-digit operands with no carry in any column.
    DoubleNoCarry,
    /// Two two-digit operands with a forced carry out of the units column.
    DoubleCarry,
    /// Two three-digit operands; carries occur naturally at this magnitude.
    TripleDigit,
    /// Three single-digit operands summed in two stages.
    ChainSingle,
    /// Two two-digit operands plus a small third operand, summed in two stages.
    ChainDouble,
}

impl Difficulty {
    /// Array containing all difficulty tiers, easiest first.
    pub const ALL: [Self; 7] = [
        Self::SingleDigit,
        Self::DoublePlusSingle,
        Self::DoubleNoCarry,
        Self::DoubleCarry,
        Self::TripleDigit,
        Self::ChainSingle,
        Self::ChainDouble,
    ];

    /// Returns the number of operands problems of this tier have (2 or 3).
    #[must_use]
    pub const fn operand_count(self) -> usize {
        if self.is_chain() { 3 } else { 2 }
    }

    /// Returns `true` for the two-stage chained-addition tiers.
    #[must_use]
    pub const fn is_chain(self) -> bool {
        matches!(self, Self::ChainSingle | Self::ChainDouble)
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SingleDigit => "single-digit",
            Self::DoublePlusSingle => "double-plus-single",
            Self::DoubleNoCarry => "double-no-carry",
            Self::DoubleCarry => "double-carry",
            Self::TripleDigit => "triple-digit",
            Self::ChainSingle => "chain-single",
            Self::ChainDouble => "chain-double",
        };
        f.write_str(name)
    }
}
