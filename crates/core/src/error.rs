use thiserror::Error;

use crate::model::QuestionError;
use crate::model::ValidationError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
