use thiserror::Error;

/// Input rejected by one of the question model's checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("question title cannot be empty")]
    EmptyTitle,

    #[error("question title is {len} characters, maximum is {max}")]
    TitleTooLong { len: usize, max: usize },

    #[error("points must be between 1 and 100, got {points}")]
    PointsOutOfRange { points: u32 },

    #[error("choice text cannot be empty")]
    EmptyChoiceText,

    #[error("choice text is {len} characters, maximum is {max}")]
    ChoiceTextTooLong { len: usize, max: usize },

    #[error("max selections must be at least 1")]
    InvalidMaxSelections,

    #[error("too many selections: {selected} selected, at most {max} allowed")]
    TooManySelections { selected: usize, max: u32 },
}
