//! Constraint-driven problem generation for the column-addition tutor.
//!
//! A [`ProblemGenerator`] turns a [`Difficulty`] into a fully determined
//! [`Problem`]: the operands, the final answer, and (for three-operand
//! chains) the intermediate answer of the first pair. Each difficulty tier
//! is a predicate the sampled operands must satisfy - carry required, carry
//! forbidden, digit-count bounds - enforced by rejection sampling with a
//! bounded retry budget and a deterministic fallback pair, so generation
//! always terminates.
//!
//! Generation is reproducible: every problem is derived from a
//! [`ProblemSeed`], and the same seed with the same difficulty always
//! produces the same operands.
//!
//! # Examples
//!
//! ```
//! use colsum_generator::{Difficulty, ProblemGenerator};
//!
//! let generator = ProblemGenerator::new();
//! let generated = generator.generate(Difficulty::DoubleCarry);
//! let problem = &generated.problem;
//!
//! // Carry-required tier: the units column must overflow.
//! let units_sum = problem.operands()[0] % 10 + problem.operands()[1] % 10;
//! assert!(units_sum >= 10);
//! assert_eq!(problem.answer(), problem.operands().iter().sum());
//! ```

pub mod difficulty;
pub mod generator;
pub mod problem;
pub mod seed;

// Re-export commonly used types
pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedProblem, MAX_SAMPLE_ATTEMPTS, ProblemGenerator},
    problem::{Operation, Problem, ProblemError},
    seed::{ParseSeedError, ProblemSeed},
};
