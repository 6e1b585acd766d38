//! A single worked attempt at one problem.

use colsum_core::{Column, Digit, DigitState};
use colsum_generator::Problem;
use log::debug;

use crate::field::{Cursor, EntryDirection, EntryMode, FieldId, Stage};

/// Maximum number of characters the horizontal-answer buffer accepts.
pub const MAX_HORIZONTAL_DIGITS: usize = 5;

/// The result of submitting the current state of an attempt.
///
/// Wrong answers are ordinary, recoverable values: nothing outside the
/// flagged field is touched, and the learner corrects in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A verification stage passed and the attempt moved to `stage`.
    Advanced {
        /// The stage the attempt advanced to.
        stage: Stage,
    },
    /// The horizontal restatement matched; the attempt is complete.
    Complete {
        /// The score increment earned by completing the attempt.
        score_awarded: u32,
    },
    /// A check failed; `field` is flagged for local correction.
    Wrong {
        /// The stage the attempt was in when the check failed.
        stage: Stage,
        /// The field whose contents failed the check.
        field: FieldId,
    },
}

/// All state of one attempt at one problem.
///
/// An attempt owns the problem, every input field, the cursor, the current
/// stage, and the wrong-field flag. It is created wholesale when a problem
/// starts and replaced wholesale when the next one does; no state crosses
/// attempt boundaries.
///
/// Digit input and deletion route through [`input_digit`](Self::input_digit)
/// and [`delete`](Self::delete), which both mutate the addressed field and
/// decide the next cursor position. [`submit`](Self::submit) runs the staged
/// verification protocol.
///
/// # Examples
///
/// ```
/// use colsum_core::Digit;
/// use colsum_game::{Attempt, EntryMode, SubmitOutcome};
/// use colsum_generator::{Operation, Problem};
///
/// let problem = Problem::new(&[2, 3], Operation::Add).unwrap();
/// let mut attempt = Attempt::new(problem, EntryMode::Fast);
///
/// attempt.input_digit(Digit::D5);
/// assert!(matches!(
///     attempt.submit(),
///     SubmitOutcome::Advanced { .. }
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    problem: Problem,
    mode: EntryMode,
    rows: [DigitState; 3],
    carry: DigitState,
    carry2: DigitState,
    intermediate: DigitState,
    answer: DigitState,
    horizontal: String,
    cursor: Cursor,
    stage: Stage,
    wrong_field: Option<FieldId>,
}

impl Attempt {
    /// Creates a fresh attempt for `problem`.
    ///
    /// In copy mode the operand rows start empty and the cursor seeds on
    /// the first row at the operand's highest column. In fast mode the rows
    /// are pre-filled read-only and the cursor seeds on the first sum field
    /// at the units column.
    #[must_use]
    pub fn new(problem: Problem, mode: EntryMode) -> Self {
        let mut rows: [DigitState; 3] = Default::default();
        let cursor = match mode {
            EntryMode::Copy => Cursor {
                field: FieldId::Row(0),
                column: Column::highest_for(problem.operands()[0]),
            },
            EntryMode::Fast => {
                for (row, &operand) in rows.iter_mut().zip(problem.operands()) {
                    *row = DigitState::from_value(operand);
                }
                let field = if problem.operand_count() == 3 {
                    FieldId::Intermediate
                } else {
                    FieldId::Answer
                };
                Cursor {
                    field,
                    column: Column::Units,
                }
            }
        };
        Self {
            problem,
            mode,
            rows,
            carry: DigitState::new(),
            carry2: DigitState::new(),
            intermediate: DigitState::new(),
            answer: DigitState::new(),
            horizontal: String::new(),
            cursor,
            stage: Stage::FirstSum,
            wrong_field: None,
        }
    }

    /// Routes one digit keystroke to the active field and advances the
    /// cursor per the field's traversal rule.
    ///
    /// Copy rows traverse high to low and auto-advance to the next required
    /// field when the units digit lands; sum fields traverse low to high;
    /// carry marks hop to their sum field; the horizontal buffer appends up
    /// to [`MAX_HORIZONTAL_DIGITS`] characters. In fast mode keystrokes
    /// routed to the read-only rows are no-ops.
    pub fn input_digit(&mut self, digit: Digit) {
        self.wrong_field = None;
        let column = self.cursor.column;
        match self.cursor.field {
            FieldId::HorizontalAnswer => {
                if self.horizontal.len() < MAX_HORIZONTAL_DIGITS {
                    self.horizontal.push(digit.to_char());
                }
            }
            FieldId::Carry => {
                self.carry.set(column, digit);
                self.cursor.field = if self.problem.operand_count() == 3 {
                    FieldId::Intermediate
                } else {
                    FieldId::Answer
                };
            }
            FieldId::Carry2 => {
                self.carry2.set(column, digit);
                self.cursor.field = FieldId::Answer;
            }
            FieldId::Intermediate => {
                self.intermediate.set(column, digit);
                self.advance_sum_cursor();
            }
            FieldId::Answer => {
                self.answer.set(column, digit);
                self.advance_sum_cursor();
            }
            FieldId::Row(i) => {
                if self.mode.is_fast() {
                    return;
                }
                self.rows[i].set(column, digit);
                match EntryDirection::HighToLow.advance(column) {
                    Some(next) => self.cursor.column = next,
                    // Units digit landed: this row is finished.
                    None => self.advance_past_row(i),
                }
            }
        }
    }

    fn advance_sum_cursor(&mut self) {
        if let Some(next) = EntryDirection::LowToHigh.advance(self.cursor.column) {
            self.cursor.column = next;
        }
    }

    fn advance_past_row(&mut self, finished: usize) {
        let next_row = finished + 1;
        if next_row < self.required_rows() {
            self.cursor = Cursor {
                field: FieldId::Row(next_row),
                column: Column::highest_for(self.problem.operands()[next_row]),
            };
        } else {
            let field = if self.stage == Stage::FirstSum && self.problem.operand_count() == 3 {
                FieldId::Intermediate
            } else {
                FieldId::Answer
            };
            self.cursor = Cursor {
                field,
                column: Column::Units,
            };
        }
    }

    /// Handles one delete (backspace) keystroke.
    ///
    /// For copy and sum fields: a digit under the cursor is cleared in
    /// place; an empty cell moves the cursor one column against the field's
    /// entry direction and clears what is found there, so repeated deletes
    /// walk back through already entered digits instead of sticking on
    /// blanks. Carry marks only clear in place, the horizontal buffer only
    /// drops its last character, and read-only rows ignore deletes.
    pub fn delete(&mut self) {
        let column = self.cursor.column;
        match self.cursor.field {
            FieldId::HorizontalAnswer => {
                self.horizontal.pop();
            }
            FieldId::Carry => {
                self.carry.clear(column);
            }
            FieldId::Carry2 => {
                self.carry2.clear(column);
            }
            field @ (FieldId::Row(_) | FieldId::Intermediate | FieldId::Answer) => {
                if matches!(field, FieldId::Row(_)) && self.mode.is_fast() {
                    return;
                }
                let direction = field
                    .entry_direction()
                    .unwrap_or(EntryDirection::HighToLow);
                let state = self.state_mut(field);
                if state.clear(column).is_none()
                    && let Some(previous) = direction.retreat(column)
                {
                    state.clear(previous);
                    self.cursor.column = previous;
                }
            }
        }
    }

    /// Moves the cursor to `(field, column)` if that combination exists for
    /// the current problem shape, mode, and stage.
    ///
    /// Returns `false` (leaving the cursor untouched) for combinations the
    /// host should never offer: rows beyond the operand count or in fast
    /// mode, carry marks on the units column (a units carry has no column
    /// to its right), second-stage fields on two-operand problems, and the
    /// horizontal buffer before the restatement stage.
    pub fn select(&mut self, field: FieldId, column: Column) -> bool {
        let selectable = match field {
            FieldId::Row(i) => self.mode.is_copy() && i < self.problem.operand_count(),
            FieldId::Carry => column != Column::Units,
            FieldId::Carry2 => self.problem.operand_count() == 3 && column != Column::Units,
            FieldId::Intermediate => self.problem.operand_count() == 3,
            FieldId::Answer => true,
            FieldId::HorizontalAnswer => self.stage == Stage::Restate,
        };
        if selectable {
            self.cursor = Cursor { field, column };
        }
        selectable
    }

    /// Runs the staged verification protocol against the entered values.
    ///
    /// Checks run in a fixed order and stop at the first failure: copy
    /// accuracy of the required rows (copy mode only), the intermediate sum
    /// (three operands, first stage only), the vertical answer, and finally
    /// the horizontal restatement. Later stages are not evaluated once one
    /// fails, and failures never discard entered data outside the flagged
    /// field.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.mode.is_copy() {
            for i in 0..self.required_rows() {
                if self.rows[i].value() != self.problem.operands()[i] {
                    return self.fail(FieldId::Row(i));
                }
            }
        }

        if self.problem.operand_count() == 3 && self.stage == Stage::FirstSum {
            if Some(self.intermediate.value()) == self.problem.intermediate_answer() {
                self.stage = Stage::SecondSum;
                self.cursor = match self.mode {
                    EntryMode::Copy => Cursor {
                        field: FieldId::Row(2),
                        column: Column::highest_for(self.problem.operands()[2]),
                    },
                    EntryMode::Fast => Cursor {
                        field: FieldId::Answer,
                        column: Column::Units,
                    },
                };
                debug!("intermediate sum accepted; stage {}", self.stage.number());
                return SubmitOutcome::Advanced { stage: self.stage };
            }
            return self.fail(FieldId::Intermediate);
        }

        if self.cursor.field != FieldId::HorizontalAnswer {
            if self.answer.value() == self.problem.answer() {
                self.stage = Stage::Restate;
                self.cursor.field = FieldId::HorizontalAnswer;
                debug!("vertical answer accepted; stage {}", self.stage.number());
                return SubmitOutcome::Advanced { stage: self.stage };
            }
            // Cursor deliberately stays put so the learner edits in place.
            return self.fail(FieldId::Answer);
        }

        if self.horizontal.parse::<u32>() == Ok(self.problem.answer()) {
            debug!("horizontal restatement accepted; attempt complete");
            return SubmitOutcome::Complete {
                score_awarded: crate::session::SCORE_PER_PROBLEM,
            };
        }
        self.fail(FieldId::HorizontalAnswer)
    }

    fn fail(&mut self, field: FieldId) -> SubmitOutcome {
        self.wrong_field = Some(field);
        SubmitOutcome::Wrong {
            stage: self.stage,
            field,
        }
    }

    /// Rows that must be transcribed before the current stage's sums are
    /// checked: the first two in stage one, all of them afterwards.
    fn required_rows(&self) -> usize {
        match self.stage {
            Stage::FirstSum => self.problem.operand_count().min(2),
            Stage::SecondSum | Stage::Restate => self.problem.operand_count(),
        }
    }

    fn state_mut(&mut self, field: FieldId) -> &mut DigitState {
        match field {
            FieldId::Row(i) => &mut self.rows[i],
            FieldId::Carry => &mut self.carry,
            FieldId::Carry2 => &mut self.carry2,
            FieldId::Intermediate => &mut self.intermediate,
            FieldId::Answer => &mut self.answer,
            FieldId::HorizontalAnswer => unreachable!("horizontal answer is not a digit state"),
        }
    }

    /// Returns the problem this attempt works on.
    #[must_use]
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Returns the entry mode of this attempt.
    #[must_use]
    pub const fn mode(&self) -> EntryMode {
        self.mode
    }

    /// Returns the transcription state of operand row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below the problem's operand count.
    #[must_use]
    pub fn row(&self, i: usize) -> &DigitState {
        assert!(i < self.problem.operand_count(), "row out of range: {i}");
        &self.rows[i]
    }

    /// Returns the first carry-mark row.
    #[must_use]
    pub const fn carry(&self) -> &DigitState {
        &self.carry
    }

    /// Returns the second carry-mark row (meaningful for three operands).
    #[must_use]
    pub const fn carry2(&self) -> &DigitState {
        &self.carry2
    }

    /// Returns the intermediate-sum field (meaningful for three operands).
    #[must_use]
    pub const fn intermediate(&self) -> &DigitState {
        &self.intermediate
    }

    /// Returns the vertical-answer field.
    #[must_use]
    pub const fn answer(&self) -> &DigitState {
        &self.answer
    }

    /// Returns the horizontal-answer buffer.
    #[must_use]
    pub fn horizontal(&self) -> &str {
        &self.horizontal
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the field flagged by the last failed submit, if any.
    ///
    /// The flag clears on the next digit keystroke anywhere.
    #[must_use]
    pub const fn wrong_field(&self) -> Option<FieldId> {
        self.wrong_field
    }
}

#[cfg(test)]
mod tests {
    use colsum_generator::Operation;
    use proptest::prelude::*;

    use super::*;

    fn pair(top: u32, bottom: u32) -> Problem {
        Problem::new(&[top, bottom], Operation::Add).unwrap()
    }

    fn chain(a: u32, b: u32, c: u32) -> Problem {
        Problem::new(&[a, b, c], Operation::Add).unwrap()
    }

    fn digit(d: u8) -> Digit {
        Digit::from_value(d)
    }

    /// Types a number into the active field, high column first for copy
    /// rows and low column first for sum fields.
    fn type_number(attempt: &mut Attempt, n: u32, direction: EntryDirection) {
        let digits: Vec<u8> = n.to_string().bytes().map(|b| b - b'0').collect();
        match direction {
            EntryDirection::HighToLow => {
                for d in digits {
                    attempt.input_digit(digit(d));
                }
            }
            EntryDirection::LowToHigh => {
                for d in digits.into_iter().rev() {
                    attempt.input_digit(digit(d));
                }
            }
        }
    }

    #[test]
    fn test_copy_mode_seeds_cursor_on_first_row() {
        let attempt = Attempt::new(pair(23, 4), EntryMode::Copy);
        assert_eq!(
            attempt.cursor(),
            Cursor {
                field: FieldId::Row(0),
                column: Column::Tens,
            }
        );
        assert!(attempt.row(0).is_blank());
    }

    #[test]
    fn test_fast_mode_prefills_rows_and_seeds_sum_cursor() {
        let attempt = Attempt::new(pair(23, 4), EntryMode::Fast);
        assert_eq!(attempt.row(0).value(), 23);
        assert_eq!(attempt.row(1).value(), 4);
        assert_eq!(attempt.cursor().field, FieldId::Answer);
        assert_eq!(attempt.cursor().column, Column::Units);

        let attempt = Attempt::new(chain(15, 12, 10), EntryMode::Fast);
        assert_eq!(attempt.cursor().field, FieldId::Intermediate);
    }

    #[test]
    fn test_copy_row_traverses_high_to_low() {
        let mut attempt = Attempt::new(pair(345, 234), EntryMode::Copy);
        assert_eq!(attempt.cursor().column, Column::Hundreds);
        attempt.input_digit(digit(3));
        assert_eq!(attempt.cursor().column, Column::Tens);
        attempt.input_digit(digit(4));
        assert_eq!(attempt.cursor().column, Column::Units);
    }

    #[test]
    fn test_copy_row_auto_advances_through_rows_to_answer() {
        let mut attempt = Attempt::new(pair(23, 4), EntryMode::Copy);
        type_number(&mut attempt, 23, EntryDirection::HighToLow);
        // Row 0 finished at units: advance to row 1 at its highest column.
        assert_eq!(
            attempt.cursor(),
            Cursor {
                field: FieldId::Row(1),
                column: Column::Units,
            }
        );
        attempt.input_digit(digit(4));
        // Last required row finished: advance to the answer, units first.
        assert_eq!(
            attempt.cursor(),
            Cursor {
                field: FieldId::Answer,
                column: Column::Units,
            }
        );
    }

    #[test]
    fn test_sum_field_traverses_low_to_high_and_saturates() {
        let mut attempt = Attempt::new(pair(23, 4), EntryMode::Fast);
        attempt.input_digit(digit(7));
        assert_eq!(attempt.cursor().column, Column::Tens);
        attempt.input_digit(digit(2));
        assert_eq!(attempt.cursor().column, Column::Hundreds);
        attempt.input_digit(digit(0));
        attempt.input_digit(digit(0));
        // Saturates at thousands instead of wrapping or leaving the field.
        assert_eq!(attempt.cursor().column, Column::Thousands);
        attempt.input_digit(digit(1));
        assert_eq!(attempt.cursor().column, Column::Thousands);
    }

    #[test]
    fn test_carry_input_hops_to_its_sum_field() {
        // Two operands: the carry row sits above the answer.
        let mut attempt = Attempt::new(pair(18, 17), EntryMode::Fast);
        assert!(attempt.select(FieldId::Carry, Column::Tens));
        attempt.input_digit(digit(1));
        assert_eq!(attempt.carry().get(Column::Tens), Some(Digit::D1));
        assert_eq!(attempt.cursor().field, FieldId::Answer);
        assert_eq!(attempt.cursor().column, Column::Tens);

        // Three operands: the first carry row belongs to the intermediate sum.
        let mut attempt = Attempt::new(chain(15, 12, 10), EntryMode::Fast);
        assert!(attempt.select(FieldId::Carry, Column::Tens));
        attempt.input_digit(digit(1));
        assert_eq!(attempt.cursor().field, FieldId::Intermediate);

        assert!(attempt.select(FieldId::Carry2, Column::Tens));
        attempt.input_digit(digit(1));
        assert_eq!(attempt.cursor().field, FieldId::Answer);
    }

    #[test]
    fn test_fast_mode_rows_are_read_only() {
        let mut attempt = Attempt::new(pair(23, 4), EntryMode::Fast);
        // The host never offers row cells in fast mode.
        assert!(!attempt.select(FieldId::Row(0), Column::Tens));
        assert_eq!(attempt.cursor().field, FieldId::Answer);
        assert_eq!(attempt.row(0).value(), 23);
    }

    #[test]
    fn test_horizontal_buffer_caps_length() {
        let mut attempt = Attempt::new(pair(2, 3), EntryMode::Fast);
        attempt.input_digit(digit(5));
        assert!(matches!(attempt.submit(), SubmitOutcome::Advanced { .. }));
        assert_eq!(attempt.cursor().field, FieldId::HorizontalAnswer);

        for d in [1, 2, 3, 4, 5, 6, 7] {
            attempt.input_digit(digit(d));
        }
        // Appends beyond the cap are ignored.
        assert_eq!(attempt.horizontal(), "12345");

        attempt.delete();
        assert_eq!(attempt.horizontal(), "1234");
    }

    #[test]
    fn test_delete_clears_in_place_then_walks_back() {
        let mut attempt = Attempt::new(pair(23, 4), EntryMode::Copy);
        type_number(&mut attempt, 23, EntryDirection::HighToLow);
        assert!(attempt.select(FieldId::Row(0), Column::Units));

        // Occupied cell: clear in place, cursor stays.
        attempt.delete();
        assert_eq!(attempt.row(0).get(Column::Units), None);
        assert_eq!(attempt.cursor().column, Column::Units);

        // Empty cell: walk back against the entry direction and clear the
        // tens digit the learner never revisited.
        attempt.delete();
        assert_eq!(attempt.cursor().column, Column::Tens);
        assert_eq!(attempt.row(0).get(Column::Tens), None);
        assert!(attempt.row(0).is_blank());

        // Nothing left to walk back to.
        attempt.delete();
        attempt.delete();
        assert_eq!(attempt.cursor().column, Column::Thousands);
    }

    #[test]
    fn test_delete_walks_down_in_sum_fields() {
        let mut attempt = Attempt::new(pair(23, 4), EntryMode::Fast);
        attempt.input_digit(digit(7));
        attempt.input_digit(digit(2));
        // Cursor is now on the empty hundreds cell; sum fields enter low to
        // high, so the walk-back direction is towards units.
        attempt.delete();
        assert_eq!(attempt.cursor().column, Column::Tens);
        assert_eq!(attempt.answer().get(Column::Tens), None);
        attempt.delete();
        assert_eq!(attempt.cursor().column, Column::Units);
        assert_eq!(attempt.answer().get(Column::Units), None);
    }

    #[test]
    fn test_delete_on_carry_clears_in_place_only() {
        let mut attempt = Attempt::new(pair(18, 17), EntryMode::Fast);
        assert!(attempt.select(FieldId::Carry, Column::Tens));
        attempt.input_digit(digit(1));
        assert!(attempt.select(FieldId::Carry, Column::Tens));
        attempt.delete();
        assert_eq!(attempt.carry().get(Column::Tens), None);
        // No cascading walk-back on carry rows.
        attempt.delete();
        assert_eq!(attempt.cursor().column, Column::Tens);
    }

    #[test]
    fn test_select_rejects_combinations_outside_the_field_set() {
        let mut attempt = Attempt::new(pair(23, 4), EntryMode::Copy);
        // No units carry column exists.
        assert!(!attempt.select(FieldId::Carry, Column::Units));
        // Two-operand problems have no third row, second carry, or
        // intermediate sum.
        assert!(!attempt.select(FieldId::Row(2), Column::Units));
        assert!(!attempt.select(FieldId::Carry2, Column::Tens));
        assert!(!attempt.select(FieldId::Intermediate, Column::Units));
        // The horizontal buffer is unreachable before the restatement stage.
        assert!(!attempt.select(FieldId::HorizontalAnswer, Column::Units));
        // The cursor never moved.
        assert_eq!(attempt.cursor().field, FieldId::Row(0));

        let mut attempt = Attempt::new(chain(6, 7, 8), EntryMode::Copy);
        assert!(attempt.select(FieldId::Row(2), Column::Units));
        assert!(attempt.select(FieldId::Carry2, Column::Tens));
        assert!(attempt.select(FieldId::Intermediate, Column::Units));
    }

    #[test]
    fn test_copy_check_flags_transposed_row() {
        let mut attempt = Attempt::new(pair(23, 4), EntryMode::Copy);
        // Transcribe 23 transposed as 32.
        attempt.input_digit(digit(3));
        attempt.input_digit(digit(2));
        attempt.input_digit(digit(4));

        let outcome = attempt.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Wrong {
                stage: Stage::FirstSum,
                field: FieldId::Row(0),
            }
        );
        assert_eq!(attempt.wrong_field(), Some(FieldId::Row(0)));
        assert_eq!(attempt.stage(), Stage::FirstSum);

        // Correcting the row lets the copy check pass.
        assert!(attempt.select(FieldId::Row(0), Column::Tens));
        attempt.input_digit(digit(2));
        attempt.input_digit(digit(3));
        assert_eq!(attempt.wrong_field(), None);
        assert!(matches!(
            attempt.submit(),
            SubmitOutcome::Wrong {
                field: FieldId::Answer,
                ..
            }
        ));
    }

    #[test]
    fn test_chain_walkthrough() {
        let mut attempt = Attempt::new(chain(6, 7, 8), EntryMode::Copy);
        assert_eq!(attempt.problem().intermediate_answer(), Some(13));

        attempt.input_digit(digit(6));
        assert_eq!(attempt.cursor().field, FieldId::Row(1));
        attempt.input_digit(digit(7));
        // Stage one only requires the first two rows.
        assert_eq!(attempt.cursor().field, FieldId::Intermediate);

        type_number(&mut attempt, 13, EntryDirection::LowToHigh);
        let outcome = attempt.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Advanced {
                stage: Stage::SecondSum,
            }
        );
        // The cursor seeds onto the third operand's row.
        assert_eq!(
            attempt.cursor(),
            Cursor {
                field: FieldId::Row(2),
                column: Column::Units,
            }
        );

        attempt.input_digit(digit(8));
        assert_eq!(attempt.cursor().field, FieldId::Answer);
        type_number(&mut attempt, 21, EntryDirection::LowToHigh);
        assert_eq!(
            attempt.submit(),
            SubmitOutcome::Advanced {
                stage: Stage::Restate,
            }
        );
        assert_eq!(attempt.cursor().field, FieldId::HorizontalAnswer);

        attempt.input_digit(digit(2));
        attempt.input_digit(digit(1));
        assert_eq!(
            attempt.submit(),
            SubmitOutcome::Complete {
                score_awarded: crate::session::SCORE_PER_PROBLEM,
            }
        );
    }

    #[test]
    fn test_wrong_intermediate_keeps_stage_and_flags_field() {
        let mut attempt = Attempt::new(chain(6, 7, 8), EntryMode::Fast);
        type_number(&mut attempt, 14, EntryDirection::LowToHigh);
        assert_eq!(
            attempt.submit(),
            SubmitOutcome::Wrong {
                stage: Stage::FirstSum,
                field: FieldId::Intermediate,
            }
        );
        assert_eq!(attempt.stage(), Stage::FirstSum);
        assert_eq!(attempt.cursor().field, FieldId::Intermediate);
    }

    #[test]
    fn test_wrong_vertical_answer_leaves_cursor_in_place() {
        let mut attempt = Attempt::new(pair(23, 4), EntryMode::Fast);
        attempt.input_digit(digit(8));
        let before = attempt.cursor();
        assert_eq!(
            attempt.submit(),
            SubmitOutcome::Wrong {
                stage: Stage::FirstSum,
                field: FieldId::Answer,
            }
        );
        assert_eq!(attempt.cursor(), before);
        assert_eq!(attempt.stage(), Stage::FirstSum);

        // Correct in place and advance.
        attempt.delete();
        type_number(&mut attempt, 27, EntryDirection::LowToHigh);
        assert!(matches!(attempt.submit(), SubmitOutcome::Advanced { .. }));
    }

    #[test]
    fn test_wrong_horizontal_restatement_stays_editable() {
        let mut attempt = Attempt::new(pair(2, 3), EntryMode::Fast);
        attempt.input_digit(digit(5));
        attempt.submit();

        attempt.input_digit(digit(8));
        assert_eq!(
            attempt.submit(),
            SubmitOutcome::Wrong {
                stage: Stage::Restate,
                field: FieldId::HorizontalAnswer,
            }
        );
        attempt.delete();
        attempt.input_digit(digit(5));
        assert!(matches!(attempt.submit(), SubmitOutcome::Complete { .. }));
    }

    #[test]
    fn test_empty_horizontal_buffer_is_wrong_not_an_error() {
        let mut attempt = Attempt::new(pair(2, 3), EntryMode::Fast);
        attempt.input_digit(digit(5));
        attempt.submit();
        assert!(matches!(
            attempt.submit(),
            SubmitOutcome::Wrong {
                field: FieldId::HorizontalAnswer,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_flag_clears_on_next_keystroke() {
        let mut attempt = Attempt::new(pair(23, 4), EntryMode::Fast);
        attempt.submit();
        assert_eq!(attempt.wrong_field(), Some(FieldId::Answer));
        attempt.input_digit(digit(7));
        assert_eq!(attempt.wrong_field(), None);
    }

    fn cursor_is_valid(attempt: &Attempt) -> bool {
        let count = attempt.problem().operand_count();
        let cursor = attempt.cursor();
        match cursor.field {
            FieldId::Row(i) => i < count,
            FieldId::Carry => cursor.column != Column::Units,
            FieldId::Carry2 => count == 3 && cursor.column != Column::Units,
            FieldId::Intermediate => count == 3,
            FieldId::Answer => true,
            FieldId::HorizontalAnswer => attempt.stage() == Stage::Restate,
        }
    }

    #[derive(Debug, Clone)]
    enum Op {
        Digit(u8),
        Delete,
        Submit,
        Select(FieldId, Column),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let field = prop_oneof![
            (0usize..3).prop_map(FieldId::Row),
            Just(FieldId::Carry),
            Just(FieldId::Carry2),
            Just(FieldId::Intermediate),
            Just(FieldId::Answer),
            Just(FieldId::HorizontalAnswer),
        ];
        let column = prop_oneof![
            Just(Column::Units),
            Just(Column::Tens),
            Just(Column::Hundreds),
            Just(Column::Thousands),
        ];
        prop_oneof![
            (0u8..10).prop_map(Op::Digit),
            Just(Op::Delete),
            Just(Op::Submit),
            (field, column).prop_map(|(f, c)| Op::Select(f, c)),
        ]
    }

    proptest! {
        /// The cursor never points at a field/column combination outside
        /// the current problem's field set, whatever the input sequence.
        #[test]
        fn prop_cursor_stays_inside_field_set(
            ops in proptest::collection::vec(op_strategy(), 0..200),
            three_operands: bool,
            copy_mode: bool,
        ) {
            let problem = if three_operands {
                chain(15, 12, 10)
            } else {
                pair(18, 17)
            };
            let mode = if copy_mode { EntryMode::Copy } else { EntryMode::Fast };
            let mut attempt = Attempt::new(problem, mode);
            prop_assert!(cursor_is_valid(&attempt));

            for op in ops {
                match op {
                    Op::Digit(d) => attempt.input_digit(digit(d)),
                    Op::Delete => attempt.delete(),
                    Op::Submit => {
                        let _ = attempt.submit();
                    }
                    Op::Select(field, column) => {
                        let _ = attempt.select(field, column);
                    }
                }
                prop_assert!(cursor_is_valid(&attempt));
            }
        }
    }
}
