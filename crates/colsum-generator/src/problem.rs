//! Problem value objects.

use std::fmt::{self, Display};

use colsum_core::MAX_VALUE;
use tinyvec::ArrayVec;

/// The arithmetic operation of a problem.
///
/// The tutor's shipped flows only exercise addition; subtraction is a
/// latent capability of the generator (with borrow predicates mirroring
/// the carry predicates) that the session layer never requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Column addition, with carries.
    Add,
    /// Column subtraction, with borrows.
    Subtract,
}

impl Operation {
    /// Returns the operator symbol written next to the bottom operand.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }
}

/// Error returned when constructing a [`Problem`] from invalid parts.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ProblemError {
    /// Problems have exactly two or three operands.
    #[display("expected 2 or 3 operands, got {_0}")]
    InvalidOperandCount(#[error(not(source))] usize),
    /// An operand does not fit the four supported columns.
    #[display("operand {_0} exceeds the supported column range")]
    OperandOutOfRange(#[error(not(source))] u32),
    /// The answer does not fit the four supported columns.
    #[display("answer {_0} exceeds the supported column range")]
    AnswerOutOfRange(#[error(not(source))] u32),
    /// Subtraction with a minuend smaller than the subtrahend.
    #[display("subtraction would produce a negative answer")]
    NegativeDifference,
    /// Three-operand chains are always addition.
    #[display("chained problems do not support subtraction")]
    ChainSubtraction,
}

/// A fully determined arithmetic problem.
///
/// Immutable once constructed. The answer and (for three operands) the
/// intermediate answer are computed by the constructor, so they can never
/// disagree with the operands.
///
/// # Examples
///
/// ```
/// use colsum_generator::{Operation, Problem};
///
/// let problem = Problem::new(&[6, 7, 8], Operation::Add).unwrap();
/// assert_eq!(problem.intermediate_answer(), Some(13));
/// assert_eq!(problem.answer(), 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    operands: ArrayVec<[u32; 3]>,
    operation: Operation,
    answer: u32,
    intermediate_answer: Option<u32>,
}

impl Problem {
    /// Creates a problem from its operands, computing the answer(s).
    ///
    /// For three operands the intermediate answer is the sum of the first
    /// two, matching the two-stage worked solution the tutor walks through.
    ///
    /// # Errors
    ///
    /// Returns a [`ProblemError`] if the operand count is not 2 or 3, an
    /// operand or the answer exceeds the four supported columns, a
    /// subtraction would go negative, or subtraction is requested for a
    /// three-operand chain.
    pub fn new(operands: &[u32], operation: Operation) -> Result<Self, ProblemError> {
        if !(2..=3).contains(&operands.len()) {
            return Err(ProblemError::InvalidOperandCount(operands.len()));
        }
        if let Some(&out_of_range) = operands.iter().find(|&&n| n > MAX_VALUE) {
            return Err(ProblemError::OperandOutOfRange(out_of_range));
        }

        let (answer, intermediate_answer) = match (operands, operation) {
            ([top, bottom], Operation::Add) => (top + bottom, None),
            ([top, bottom], Operation::Subtract) => {
                let answer = top
                    .checked_sub(*bottom)
                    .ok_or(ProblemError::NegativeDifference)?;
                (answer, None)
            }
            ([first, second, third], Operation::Add) => {
                let intermediate = first + second;
                (intermediate + third, Some(intermediate))
            }
            ([_, _, _], Operation::Subtract) => return Err(ProblemError::ChainSubtraction),
            _ => unreachable!("operand count checked above"),
        };
        if answer > MAX_VALUE {
            return Err(ProblemError::AnswerOutOfRange(answer));
        }

        Ok(Self {
            operands: operands.iter().copied().collect(),
            operation,
            answer,
            intermediate_answer,
        })
    }

    /// Returns the operands in written order (top row first).
    #[must_use]
    pub fn operands(&self) -> &[u32] {
        &self.operands
    }

    /// Returns the number of operands (2 or 3).
    #[must_use]
    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// Returns the operation of this problem.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the final answer.
    #[must_use]
    pub const fn answer(&self) -> u32 {
        self.answer
    }

    /// Returns the sum of the first two operands, present iff there are
    /// three operands.
    #[must_use]
    pub const fn intermediate_answer(&self) -> Option<u32> {
        self.intermediate_answer
    }
}

impl Display for Problem {
    /// Formats the problem horizontally, e.g. `23 + 4 = ?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.operation.symbol();
        let mut operands = self.operands.iter();
        if let Some(first) = operands.next() {
            write!(f, "{first}")?;
        }
        for operand in operands {
            write!(f, " {symbol} {operand}")?;
        }
        write!(f, " = ?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_addition() {
        let problem = Problem::new(&[23, 4], Operation::Add).unwrap();
        assert_eq!(problem.operands(), &[23, 4]);
        assert_eq!(problem.answer(), 27);
        assert_eq!(problem.intermediate_answer(), None);
        assert_eq!(problem.to_string(), "23 + 4 = ?");
    }

    #[test]
    fn test_chain_addition_computes_intermediate() {
        let problem = Problem::new(&[15, 12, 10], Operation::Add).unwrap();
        assert_eq!(problem.intermediate_answer(), Some(27));
        assert_eq!(problem.answer(), 37);
        assert_eq!(problem.to_string(), "15 + 12 + 10 = ?");
    }

    #[test]
    fn test_subtraction() {
        let problem = Problem::new(&[42, 17], Operation::Subtract).unwrap();
        assert_eq!(problem.answer(), 25);
        assert_eq!(problem.to_string(), "42 - 17 = ?");

        assert_eq!(
            Problem::new(&[17, 42], Operation::Subtract),
            Err(ProblemError::NegativeDifference)
        );
    }

    #[test]
    fn test_invalid_parts_are_rejected() {
        assert_eq!(
            Problem::new(&[1], Operation::Add),
            Err(ProblemError::InvalidOperandCount(1))
        );
        assert_eq!(
            Problem::new(&[1, 2, 3, 4], Operation::Add),
            Err(ProblemError::InvalidOperandCount(4))
        );
        assert_eq!(
            Problem::new(&[10_000, 1], Operation::Add),
            Err(ProblemError::OperandOutOfRange(10_000))
        );
        assert_eq!(
            Problem::new(&[9999, 9999], Operation::Add),
            Err(ProblemError::AnswerOutOfRange(19_998))
        );
        assert_eq!(
            Problem::new(&[6, 7, 8], Operation::Subtract),
            Err(ProblemError::ChainSubtraction)
        );
    }
}
