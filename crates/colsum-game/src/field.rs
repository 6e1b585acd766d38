//! The logical field set of a worked solution and its traversal rules.

use colsum_core::Column;

/// A named logical input slot of the vertical layout.
///
/// The field set varies with the problem shape: `Row(2)`, [`Carry2`] and
/// [`Intermediate`] exist only for three-operand problems, and operand rows
/// accept input only in copy mode. Which fields are reachable is decided by
/// [`Attempt::select`](crate::Attempt::select); the identifiers themselves
/// are shape-independent.
///
/// [`Carry2`]: Self::Carry2
/// [`Intermediate`]: Self::Intermediate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Transcription row for operand `i` (copy mode only).
    Row(usize),
    /// Carry marks above the first (or only) sum row.
    Carry,
    /// Carry marks above the second sum row of a three-operand problem.
    Carry2,
    /// The sum of the first two operands of a three-operand problem.
    Intermediate,
    /// The final vertical answer.
    Answer,
    /// The horizontal restatement of the answer, a free-text buffer.
    HorizontalAnswer,
}

impl FieldId {
    /// Returns the kind of this field, which determines its traversal rule.
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Row(_) => FieldKind::Copy,
            Self::Carry | Self::Carry2 => FieldKind::CarryMark,
            Self::Intermediate | Self::Answer => FieldKind::Sum,
            Self::HorizontalAnswer => FieldKind::FreeText,
        }
    }

    /// Returns the column traversal direction of this field, if it has one.
    ///
    /// Carry marks and the horizontal buffer have no in-field traversal.
    #[must_use]
    pub const fn entry_direction(self) -> Option<EntryDirection> {
        self.kind().entry_direction()
    }
}

/// The behavioural kind of a field.
///
/// The per-kind traversal direction is the single data-driven lookup that
/// keeps the copy/sum direction rules from being duplicated per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Operand transcription: digits are written left to right, so columns
    /// are traversed high to low.
    Copy,
    /// Free-standing carry marks: one digit per column, no auto-advance
    /// within the row.
    CarryMark,
    /// A computed sum: columns are traversed low to high, the direction of
    /// manual column addition.
    Sum,
    /// A single free-text buffer with no columns.
    FreeText,
}

impl FieldKind {
    /// Returns the column traversal direction of this kind, if any.
    #[must_use]
    pub const fn entry_direction(self) -> Option<EntryDirection> {
        match self {
            Self::Copy => Some(EntryDirection::HighToLow),
            Self::Sum => Some(EntryDirection::LowToHigh),
            Self::CarryMark | Self::FreeText => None,
        }
    }
}

/// The direction digits are entered across columns within a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDirection {
    /// Thousands towards units, mirroring left-to-right handwriting.
    HighToLow,
    /// Units towards thousands, mirroring manual column addition.
    LowToHigh,
}

impl EntryDirection {
    /// Returns the next column in entry order, or `None` at the end.
    #[must_use]
    pub const fn advance(self, column: Column) -> Option<Column> {
        match self {
            Self::HighToLow => column.lower(),
            Self::LowToHigh => column.higher(),
        }
    }

    /// Returns the previous column in entry order, or `None` at the start.
    ///
    /// This is the direction the delete action walks back towards
    /// previously entered digits.
    #[must_use]
    pub const fn retreat(self, column: Column) -> Option<Column> {
        match self {
            Self::HighToLow => column.higher(),
            Self::LowToHigh => column.lower(),
        }
    }
}

/// Whether the learner transcribes the operands or gets them pre-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum EntryMode {
    /// Operands must be transcribed into the vertical layout first.
    Copy,
    /// Operand rows are pre-filled and read-only.
    Fast,
}

/// An ordered phase of a multi-step attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Solving the first (or only) operand pair.
    FirstSum,
    /// Incorporating the third operand of a chain.
    SecondSum,
    /// Restating the answer horizontally.
    Restate,
}

impl Stage {
    /// Returns the 1-based stage number shown to the learner.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::FirstSum => 1,
            Self::SecondSum => 2,
            Self::Restate => 3,
        }
    }
}

/// The transient cursor position: which field and column receive input.
///
/// This is re-derived on every transition and never stored inside a field;
/// it is a back-reference, not an ownership relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// The active field.
    pub field: FieldId,
    /// The active place-value column within the field.
    ///
    /// Meaningless for [`FieldId::HorizontalAnswer`], which has no columns.
    pub column: Column,
}
