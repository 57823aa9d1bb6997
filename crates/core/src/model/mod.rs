mod choice;
mod ids;
mod question;
mod text;
mod validation;

pub use ids::{ChoiceId, ParseIdError, QuestionId};
pub use text::{ChoiceText, MAX_CHOICE_TEXT_LEN, MAX_TITLE_LEN, QuestionTitle};

pub use choice::Choice;
pub use question::{
    DEFAULT_MAX_SELECTIONS, DEFAULT_POINTS, MAX_POINTS, MIN_POINTS, Question, QuestionDraft,
    QuestionError, ValidatedQuestion,
};
pub use validation::ValidationError;
