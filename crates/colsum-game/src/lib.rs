//! Attempt state, navigation, and verification for the column-addition
//! tutor.
//!
//! An [`Attempt`] holds everything about one problem being worked: the
//! operand transcription rows, carry marks, sum fields, the horizontal
//! restatement buffer, the cursor, and the current [`Stage`]. Keystrokes
//! route through [`Attempt::input_digit`] and [`Attempt::delete`], which
//! move the cursor per each field's entry direction; [`Attempt::submit`]
//! runs the ordered verification checks and reports a [`SubmitOutcome`].
//!
//! A [`Session`] strings attempts together: it generates problems at a
//! fixed [`Difficulty`](colsum_generator::Difficulty), keeps score and
//! streak tallies, and holds a completed attempt on screen until the host
//! asks for the next problem. Final scores go to a [`Leaderboard`].
//!
//! # Examples
//!
//! ```
//! use colsum_core::Digit;
//! use colsum_game::{EntryMode, Session, SubmitOutcome};
//! use colsum_generator::Difficulty;
//!
//! let mut session = Session::new(Difficulty::SingleDigit, EntryMode::Fast);
//! let answer = session.attempt().problem().answer();
//!
//! // Enter the units digit of the answer and submit the vertical stage.
//! let units = u8::try_from(answer % 10).unwrap();
//! session.input_digit(Digit::from_value(units));
//! if answer < 10 {
//!     assert!(matches!(
//!         session.submit(),
//!         SubmitOutcome::Advanced { .. }
//!     ));
//! }
//! ```

pub mod attempt;
pub mod field;
pub mod leaderboard;
pub mod session;

// Re-export commonly used types
pub use self::{
    attempt::{Attempt, MAX_HORIZONTAL_DIGITS, SubmitOutcome},
    field::{Cursor, EntryDirection, EntryMode, FieldId, FieldKind, Stage},
    leaderboard::{Leaderboard, LeaderboardEntry, MAX_LEADERBOARD_ENTRIES},
    session::{SCORE_PER_PROBLEM, Session, SessionError},
};
