//! Rejection-sampling problem generator.

use colsum_core::Column;
use log::debug;
use rand::RngExt as _;
use rand_pcg::Pcg64Mcg;

use crate::{Difficulty, Operation, Problem, ProblemSeed};

/// Retry budget for one rejection-sampling run.
///
/// Every tier's predicate is satisfied well within this budget with
/// overwhelming probability; exhausting it switches to the tier's fixed
/// fallback pair so generation terminates unconditionally.
pub const MAX_SAMPLE_ATTEMPTS: usize = 1_000;

/// A generated problem together with the seed that produced it.
///
/// Feeding the seed back through
/// [`ProblemGenerator::generate_with_seed`] reproduces the problem exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProblem {
    /// The generated problem.
    pub problem: Problem,
    /// The seed that deterministically produced `problem`.
    pub seed: ProblemSeed,
}

/// Generates problems satisfying per-difficulty arithmetic constraints.
///
/// The generator is pure: given a difficulty and a seed, the output is
/// fully determined. [`generate`](Self::generate) draws a fresh random
/// seed and reports it in the result for reproduction.
///
/// # Examples
///
/// ```
/// use colsum_generator::{Difficulty, ProblemGenerator, ProblemSeed};
///
/// let generator = ProblemGenerator::new();
/// let seed = ProblemSeed::from_bytes([42; 32]);
/// let a = generator.generate_with_seed(Difficulty::DoubleNoCarry, seed);
/// let b = generator.generate_with_seed(Difficulty::DoubleNoCarry, seed);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemGenerator {}

impl ProblemGenerator {
    /// Creates a new generator.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Generates an addition problem from a fresh random seed.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedProblem {
        self.generate_op_with_seed(difficulty, Operation::Add, ProblemSeed::new_random())
    }

    /// Generates an addition problem reproducibly from `seed`.
    #[must_use]
    pub fn generate_with_seed(
        &self,
        difficulty: Difficulty,
        seed: ProblemSeed,
    ) -> GeneratedProblem {
        self.generate_op_with_seed(difficulty, Operation::Add, seed)
    }

    /// Generates a problem for an explicit operation from a fresh seed.
    ///
    /// Chained tiers ignore the requested operation and always produce
    /// addition problems.
    #[must_use]
    pub fn generate_op(&self, difficulty: Difficulty, operation: Operation) -> GeneratedProblem {
        self.generate_op_with_seed(difficulty, operation, ProblemSeed::new_random())
    }

    /// Generates a problem for an explicit operation reproducibly from `seed`.
    ///
    /// Chained tiers ignore the requested operation and always produce
    /// addition problems.
    #[must_use]
    #[expect(clippy::missing_panics_doc)] // sampled operands always satisfy problem invariants
    pub fn generate_op_with_seed(
        &self,
        difficulty: Difficulty,
        operation: Operation,
        seed: ProblemSeed,
    ) -> GeneratedProblem {
        let mut rng = seed.rng();
        let problem = if difficulty.is_chain() {
            let operands = sample_chain(&mut rng, difficulty);
            Problem::new(&operands, Operation::Add)
        } else {
            let (top, bottom) = sample_pair(&mut rng, difficulty, operation);
            Problem::new(&[top, bottom], operation)
        };
        let problem = problem.expect("sampled operands satisfy problem invariants");
        GeneratedProblem { problem, seed }
    }
}

fn units(n: u32) -> u32 {
    u32::from(Column::Units.digit_of(n))
}

fn tens(n: u32) -> u32 {
    u32::from(Column::Tens.digit_of(n))
}

/// Orders a subtraction pair so the difference stays non-negative.
fn ordered(top: u32, bottom: u32) -> (u32, u32) {
    if top < bottom { (bottom, top) } else { (top, bottom) }
}

/// Samples an operand pair until the tier's predicate holds.
///
/// Falls back to the tier's fixed pair when the retry budget is exhausted,
/// which keeps generation terminating even if a predicate were to become
/// unsatisfiable under a future range tweak.
fn sample_pair(rng: &mut Pcg64Mcg, difficulty: Difficulty, operation: Operation) -> (u32, u32) {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let (top, bottom) = propose_pair(rng, difficulty, operation);
        if accepts(difficulty, operation, top, bottom) {
            return (top, bottom);
        }
    }
    let (top, bottom) = fallback_pair(difficulty, operation);
    debug!("sampling budget exhausted for {difficulty} {operation:?}; using fallback {top}/{bottom}");
    (top, bottom)
}

/// Draws one candidate pair from the tier's operand ranges.
fn propose_pair(rng: &mut Pcg64Mcg, difficulty: Difficulty, operation: Operation) -> (u32, u32) {
    match (difficulty, operation) {
        (Difficulty::SingleDigit, _) => {
            let top = rng.random_range(1..=9);
            let bottom = rng.random_range(1..=9);
            match operation {
                Operation::Add => (top, bottom),
                Operation::Subtract => ordered(top, bottom),
            }
        }
        (Difficulty::DoublePlusSingle, Operation::Add) => {
            let top = rng.random_range(10..=89);
            // Bound the addend so the units column cannot overflow; the
            // floor of 1 avoids a degenerate zero addend when units(top)
            // is already 9 (that proposal fails the predicate instead).
            let bound = (9 - units(top)).max(1);
            let bottom = rng.random_range(1..=bound);
            (top, bottom)
        }
        (Difficulty::DoublePlusSingle, Operation::Subtract) => {
            let top = rng.random_range(10..=89);
            let bound = units(top).max(1);
            let bottom = rng.random_range(1..=bound);
            (top, bottom)
        }
        (Difficulty::DoubleNoCarry, _) => {
            let top = rng.random_range(10..=89);
            let bottom = rng.random_range(10..=89);
            match operation {
                Operation::Add => (top, bottom),
                Operation::Subtract => ordered(top, bottom),
            }
        }
        (Difficulty::DoubleCarry, _) => {
            let top = rng.random_range(15..=94);
            let bottom = rng.random_range(10..=89);
            match operation {
                Operation::Add => (top, bottom),
                Operation::Subtract => ordered(top, bottom),
            }
        }
        (Difficulty::TripleDigit, _) => {
            let top = rng.random_range(100..=899);
            let bottom = rng.random_range(100..=899);
            match operation {
                Operation::Add => (top, bottom),
                Operation::Subtract => ordered(top, bottom),
            }
        }
        (Difficulty::ChainSingle | Difficulty::ChainDouble, _) => {
            unreachable!("chain tiers are sampled by sample_chain")
        }
    }
}

/// The tier predicate a proposed pair must satisfy to be accepted.
fn accepts(difficulty: Difficulty, operation: Operation, top: u32, bottom: u32) -> bool {
    match (difficulty, operation) {
        (Difficulty::SingleDigit | Difficulty::TripleDigit, _) => true,
        // No carry out of the units column.
        (Difficulty::DoublePlusSingle, Operation::Add) => units(top) + bottom < 10,
        // No borrow into the units column.
        (Difficulty::DoublePlusSingle, Operation::Subtract) => bottom <= units(top),
        // No place-value overflow anywhere.
        (Difficulty::DoubleNoCarry, Operation::Add) => {
            units(top) + units(bottom) < 10 && tens(top) + tens(bottom) < 10
        }
        // No borrow in any column.
        (Difficulty::DoubleNoCarry, Operation::Subtract) => {
            units(top) >= units(bottom) && tens(top) >= tens(bottom)
        }
        // At least one carry, forced out of the units column.
        (Difficulty::DoubleCarry, Operation::Add) => units(top) + units(bottom) >= 10,
        // A borrow, forced into the units column.
        (Difficulty::DoubleCarry, Operation::Subtract) => units(top) < units(bottom),
        (Difficulty::ChainSingle | Difficulty::ChainDouble, _) => {
            unreachable!("chain tiers are sampled by sample_chain")
        }
    }
}

/// Fixed per-tier pair used when the retry budget runs out.
fn fallback_pair(difficulty: Difficulty, operation: Operation) -> (u32, u32) {
    match (difficulty, operation) {
        (Difficulty::SingleDigit, _) => (7, 2),
        (Difficulty::DoublePlusSingle, Operation::Add) => (23, 4),
        (Difficulty::DoublePlusSingle, Operation::Subtract) => (23, 3),
        (Difficulty::DoubleNoCarry, Operation::Add) => (12, 34),
        (Difficulty::DoubleNoCarry, Operation::Subtract) => (34, 12),
        (Difficulty::DoubleCarry, Operation::Add) => (18, 17),
        (Difficulty::DoubleCarry, Operation::Subtract) => (42, 17),
        (Difficulty::TripleDigit, Operation::Add) => (345, 234),
        (Difficulty::TripleDigit, Operation::Subtract) => (345, 234),
        (Difficulty::ChainSingle | Difficulty::ChainDouble, _) => {
            unreachable!("chain tiers are sampled by sample_chain")
        }
    }
}

/// Samples a three-operand chain; chains have no rejection predicate.
fn sample_chain(rng: &mut Pcg64Mcg, difficulty: Difficulty) -> [u32; 3] {
    match difficulty {
        Difficulty::ChainSingle => [
            rng.random_range(1..=9),
            rng.random_range(1..=9),
            rng.random_range(1..=9),
        ],
        Difficulty::ChainDouble => [
            rng.random_range(10..=49),
            rng.random_range(10..=49),
            rng.random_range(5..=14),
        ],
        _ => unreachable!("pair tiers are sampled by sample_pair"),
    }
}
