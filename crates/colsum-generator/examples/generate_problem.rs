//! Example demonstrating problem generation.
//!
//! This example shows how to:
//! - Generate a problem for a chosen difficulty tier
//! - Reproduce a problem from its seed
//! - Sample a batch of problems and report carry statistics
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_problem -- --difficulty double-carry
//! ```
//!
//! Reproduce a specific problem from its seed:
//!
//! ```sh
//! cargo run --example generate_problem -- --difficulty double-carry \
//!     --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Sample many problems and report how often each column carries:
//!
//! ```sh
//! cargo run --example generate_problem -- --difficulty double-no-carry --stats 10000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use colsum_generator::{Difficulty, GeneratedProblem, Operation, ProblemGenerator, ProblemSeed};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    SingleDigit,
    DoublePlusSingle,
    DoubleNoCarry,
    DoubleCarry,
    TripleDigit,
    ChainSingle,
    ChainDouble,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::SingleDigit => Difficulty::SingleDigit,
            DifficultyArg::DoublePlusSingle => Difficulty::DoublePlusSingle,
            DifficultyArg::DoubleNoCarry => Difficulty::DoubleNoCarry,
            DifficultyArg::DoubleCarry => Difficulty::DoubleCarry,
            DifficultyArg::TripleDigit => Difficulty::TripleDigit,
            DifficultyArg::ChainSingle => Difficulty::ChainSingle,
            DifficultyArg::ChainDouble => Difficulty::ChainDouble,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OperationArg {
    Add,
    Subtract,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier to generate.
    #[arg(long, value_name = "TIER", default_value = "double-carry")]
    difficulty: DifficultyArg,

    /// Operation to generate (subtraction is a latent generator capability).
    #[arg(long, value_name = "OP", default_value = "add")]
    operation: OperationArg,

    /// Reproduce a problem from a 64-character hex seed.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Sample this many problems and print carry statistics instead.
    #[arg(long, value_name = "COUNT")]
    stats: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let difficulty = Difficulty::from(args.difficulty);
    let operation = match args.operation {
        OperationArg::Add => Operation::Add,
        OperationArg::Subtract => Operation::Subtract,
    };
    let generator = ProblemGenerator::new();

    if let Some(count) = args.stats {
        if count == 0 {
            eprintln!("--stats must be at least 1.");
            process::exit(1);
        }
        print_stats(&generator, difficulty, operation, count);
        return;
    }

    let generated = match args.seed {
        Some(seed) => match seed.parse::<ProblemSeed>() {
            Ok(seed) => generator.generate_op_with_seed(difficulty, operation, seed),
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        },
        None => generator.generate_op(difficulty, operation),
    };
    print_problem(&generated);
}

fn print_problem(generated: &GeneratedProblem) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Problem:");
    println!("  {}", generated.problem);
    println!();
    if let Some(intermediate) = generated.problem.intermediate_answer() {
        println!("Intermediate answer:");
        println!("  {intermediate}");
        println!();
    }
    println!("Answer:");
    println!("  {}", generated.problem.answer());
}

fn print_stats(
    generator: &ProblemGenerator,
    difficulty: Difficulty,
    operation: Operation,
    count: usize,
) {
    let carries = (0..count)
        .into_par_iter()
        .filter(|_| {
            let problem = generator.generate_op(difficulty, operation).problem;
            let operands = problem.operands();
            operands[0] % 10 + operands[1] % 10 >= 10
        })
        .count();

    println!("Sampled: {count}");
    println!("Units-column carry rate: {:.1}%", percentage(carries, count));
}

#[expect(clippy::cast_precision_loss)]
fn percentage(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64 * 100.0
}
