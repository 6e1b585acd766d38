//! A play session: a stream of attempts with score and streak tallies.

use colsum_core::{Column, Digit};
use colsum_generator::{Difficulty, ProblemGenerator, ProblemSeed};
use log::debug;

use crate::{
    attempt::{Attempt, SubmitOutcome},
    field::{EntryMode, FieldId},
};

/// Score awarded for each completed problem.
pub const SCORE_PER_PROBLEM: u32 = 10;

/// Errors from driving a [`Session`] out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// [`Session::advance_to_next_problem`] was called with no completed
    /// attempt pending.
    #[display("no completed attempt is awaiting the next problem")]
    NotAwaitingNextProblem,
}

/// One sitting at one difficulty tier and entry mode.
///
/// A session owns the generator, the current [`Attempt`], and the score and
/// streak tallies. It forwards the three host entry points
/// ([`input_digit`](Self::input_digit), [`delete`](Self::delete),
/// [`submit`](Self::submit)) to the current attempt and layers the
/// cross-attempt bookkeeping on top.
///
/// Completing an attempt does not replace it immediately. It raises a
/// pending-next latch so the host can keep the finished work on screen for
/// as long as it likes, then either calls
/// [`advance_to_next_problem`](Self::advance_to_next_problem) or tears the
/// session down with [`abandon`](Self::abandon), which cancels the latch.
///
/// Starting a new game means constructing a new session; the score always
/// starts at zero.
#[derive(Debug)]
pub struct Session {
    generator: ProblemGenerator,
    difficulty: Difficulty,
    mode: EntryMode,
    attempt: Attempt,
    problem_seed: ProblemSeed,
    score: u32,
    streak: u32,
    awaiting_next: bool,
}

impl Session {
    /// Starts a session with a freshly generated first problem.
    #[must_use]
    pub fn new(difficulty: Difficulty, mode: EntryMode) -> Self {
        let generator = ProblemGenerator::new();
        let generated = generator.generate(difficulty);
        Self::from_parts(generator, difficulty, mode, generated.problem, generated.seed)
    }

    /// Starts a session whose first problem is generated from `seed`.
    ///
    /// Problems after the first are freshly generated.
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, mode: EntryMode, seed: ProblemSeed) -> Self {
        let generator = ProblemGenerator::new();
        let generated = generator.generate_with_seed(difficulty, seed);
        Self::from_parts(generator, difficulty, mode, generated.problem, generated.seed)
    }

    fn from_parts(
        generator: ProblemGenerator,
        difficulty: Difficulty,
        mode: EntryMode,
        problem: colsum_generator::Problem,
        seed: ProblemSeed,
    ) -> Self {
        Self {
            generator,
            difficulty,
            mode,
            attempt: Attempt::new(problem, mode),
            problem_seed: seed,
            score: 0,
            streak: 0,
            awaiting_next: false,
        }
    }

    /// Forwards a digit keystroke to the current attempt.
    ///
    /// Ignored while a completed attempt awaits the next problem.
    pub fn input_digit(&mut self, digit: Digit) {
        if self.awaiting_next {
            return;
        }
        self.attempt.input_digit(digit);
    }

    /// Forwards a delete keystroke to the current attempt.
    ///
    /// Ignored while a completed attempt awaits the next problem.
    pub fn delete(&mut self) {
        if self.awaiting_next {
            return;
        }
        self.attempt.delete();
    }

    /// Moves the cursor of the current attempt, if the target is valid.
    ///
    /// Returns `false` while a completed attempt awaits the next problem.
    pub fn select(&mut self, field: FieldId, column: Column) -> bool {
        if self.awaiting_next {
            return false;
        }
        self.attempt.select(field, column)
    }

    /// Submits the current attempt and applies score and streak effects.
    ///
    /// Completion awards the reported score, extends the streak, and raises
    /// the pending-next latch; a wrong outcome resets the streak. Repeated
    /// submits after completion award nothing further.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.attempt.submit();
        match outcome {
            SubmitOutcome::Complete { score_awarded } => {
                if !self.awaiting_next {
                    self.score += score_awarded;
                    self.streak += 1;
                    self.awaiting_next = true;
                    debug!(
                        "attempt complete; score {}, streak {}",
                        self.score, self.streak
                    );
                }
            }
            SubmitOutcome::Wrong { .. } => self.streak = 0,
            SubmitOutcome::Advanced { .. } => {}
        }
        outcome
    }

    /// Replaces the completed attempt with a freshly generated problem and
    /// lowers the pending-next latch.
    ///
    /// The score and streak carry over.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAwaitingNextProblem`] if the current
    /// attempt has not been completed.
    pub fn advance_to_next_problem(&mut self) -> Result<(), SessionError> {
        if !self.awaiting_next {
            return Err(SessionError::NotAwaitingNextProblem);
        }
        let generated = self.generator.generate(self.difficulty);
        debug!("next problem: {} (seed {})", generated.problem, generated.seed);
        self.attempt = Attempt::new(generated.problem, self.mode);
        self.problem_seed = generated.seed;
        self.awaiting_next = false;
        Ok(())
    }

    /// Ends the session, cancelling any pending next problem, and returns
    /// the final score for the host to hand to its leaderboard.
    #[must_use]
    pub fn abandon(self) -> u32 {
        self.score
    }

    /// Returns the current attempt.
    #[must_use]
    pub const fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    /// Returns the seed the current problem was generated from.
    #[must_use]
    pub const fn problem_seed(&self) -> ProblemSeed {
        self.problem_seed
    }

    /// Returns the difficulty tier of this session.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the entry mode of this session.
    #[must_use]
    pub const fn mode(&self) -> EntryMode {
        self.mode
    }

    /// Returns the accumulated score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the current run of consecutive clean completions.
    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    /// Returns `true` if a completed attempt is waiting for
    /// [`advance_to_next_problem`](Self::advance_to_next_problem).
    #[must_use]
    pub const fn is_awaiting_next_problem(&self) -> bool {
        self.awaiting_next
    }
}
