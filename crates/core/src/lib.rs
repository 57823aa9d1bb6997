//! Quiz question model: questions owning multiple-choice answers, sequential
//! choice ids and selection checking against a correct set.

#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod sequence;

#[cfg(test)]
mod test_harness;

pub use error::Error;
pub use model::{
    Choice, ChoiceId, Question, QuestionDraft, QuestionError, QuestionId, ValidationError,
};
pub use sequence::QuestionIds;
