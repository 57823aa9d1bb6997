use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::model::choice::Choice;
use crate::model::ids::{ChoiceId, QuestionId};
use crate::model::text::{ChoiceText, QuestionTitle};
use crate::model::validation::ValidationError;
use crate::sequence::QuestionIds;

pub const MIN_POINTS: u32 = 1;
pub const MAX_POINTS: u32 = 100;
pub const DEFAULT_POINTS: u32 = 1;
pub const DEFAULT_MAX_SELECTIONS: u32 = 1;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("choice {0} not found")]
    ChoiceNotFound(ChoiceId),

    #[error("no question ids left to assign")]
    QuestionIdsExhausted,

    #[error("no choice ids left to assign for question {0}")]
    ChoiceIdsExhausted(QuestionId),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question input, with defaults for points and max selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub title: String,
    pub points: u32,
    pub max_selections: u32,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            points: DEFAULT_POINTS,
            max_selections: DEFAULT_MAX_SELECTIONS,
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_max_selections(mut self, max_selections: u32) -> Self {
        self.max_selections = max_selections;
        self
    }

    /// Checks title, points and max selections.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, checking the title first.
    pub fn validate(self) -> Result<ValidatedQuestion, ValidationError> {
        let title = QuestionTitle::parse(self.title)?;
        if !(MIN_POINTS..=MAX_POINTS).contains(&self.points) {
            return Err(ValidationError::PointsOutOfRange {
                points: self.points,
            });
        }
        if self.max_selections == 0 {
            return Err(ValidationError::InvalidMaxSelections);
        }

        Ok(ValidatedQuestion {
            title,
            points: self.points,
            max_selections: self.max_selections,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuestion {
    title: QuestionTitle,
    points: u32,
    max_selections: u32,
}

impl ValidatedQuestion {
    #[must_use]
    pub fn assign_id(self, id: QuestionId) -> Question {
        debug!(question_id = %id, title = %self.title, "question created");
        Question {
            id,
            title: self.title,
            points: self.points,
            max_selections: self.max_selections,
            choices: Vec::new(),
            next_choice_id: Some(ChoiceId::new(1)),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A prompt with an ordered set of choices, a point value and a selection limit.
///
/// Choice ids start at 1 and are never reissued, even after removals.
///
/// `Question` is not `Clone`: each instance owns its id.
///
/// ```compile_fail
/// let question = quiz_core::Question::new("q", 1, 1).unwrap();
/// let copy = question.clone();
/// ```
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    title: QuestionTitle,
    points: u32,
    max_selections: u32,
    choices: Vec<Choice>,
    // None once the id space is used up.
    #[serde(skip)]
    next_choice_id: Option<ChoiceId>,
}

impl Question {
    /// Creates a question with an id from the process-wide `QuestionIds` source.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::Validation` if the title is blank or too long, if
    /// `points` is outside 1..=100, or if `max_selections` is zero. No id is
    /// consumed on failure.
    pub fn new(
        title: impl Into<String>,
        points: u32,
        max_selections: u32,
    ) -> Result<Self, QuestionError> {
        let draft = QuestionDraft::new(title)
            .with_points(points)
            .with_max_selections(max_selections);
        QuestionIds::global().create(draft)
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn max_selections(&self) -> u32 {
        self.max_selections
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id() == id)
    }

    /// Ids of the choices currently marked correct, in choice order.
    #[must_use]
    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|choice| choice.is_correct())
            .map(Choice::id)
            .collect()
    }

    /// # Errors
    ///
    /// Returns `ValidationError::InvalidMaxSelections` for zero; the current
    /// limit is kept.
    pub fn set_max_selections(&mut self, max_selections: u32) -> Result<(), ValidationError> {
        if max_selections == 0 {
            let err = ValidationError::InvalidMaxSelections;
            debug!(question_id = %self.id, error = %err, "max selections rejected");
            return Err(err);
        }
        self.max_selections = max_selections;
        Ok(())
    }

    /// Appends a new choice with the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::Validation` if the text is blank or too long, and
    /// `QuestionError::ChoiceIdsExhausted` once every id has been issued. The
    /// choice list and the id sequence are left untouched in both cases.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, QuestionError> {
        let text = ChoiceText::parse(text).inspect_err(|err| {
            debug!(question_id = %self.id, error = %err, "choice rejected");
        })?;

        let Some(id) = self.next_choice_id else {
            debug!(question_id = %self.id, "choice rejected, ids exhausted");
            return Err(QuestionError::ChoiceIdsExhausted(self.id));
        };
        self.next_choice_id = id.next();
        debug!(question_id = %self.id, choice_id = %id, "choice added");

        let index = self.choices.len();
        self.choices.push(Choice::new(id, text, is_correct));
        Ok(&self.choices[index])
    }

    /// Removes the choice with the given id, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::ChoiceNotFound` if no choice has that id.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Result<Choice, QuestionError> {
        let Some(index) = self.choices.iter().position(|choice| choice.id() == id) else {
            debug!(question_id = %self.id, choice_id = %id, "choice to remove not found");
            return Err(QuestionError::ChoiceNotFound(id));
        };
        debug!(question_id = %self.id, choice_id = %id, "choice removed");
        Ok(self.choices.remove(index))
    }

    /// Drops every choice. The id sequence continues where it was.
    pub fn remove_all_choices(&mut self) {
        debug!(question_id = %self.id, removed = self.choices.len(), "choices cleared");
        self.choices.clear();
    }

    /// Replaces the correct set: listed choices become correct, all others
    /// incorrect. Unknown ids are ignored.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) {
        for choice in &mut self.choices {
            let is_correct = ids.contains(&choice.id());
            choice.set_correct(is_correct);
        }
        debug!(question_id = %self.id, correct = ?self.correct_choice_ids(), "correct choices set");
    }

    /// Returns the selected ids that point at correct choices, in selection order.
    ///
    /// Unknown ids and incorrect choices are left out. An empty selection always
    /// yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooManySelections` if more than
    /// `max_selections` ids are given.
    pub fn correct_selected_choices(
        &self,
        selected: &[ChoiceId],
    ) -> Result<Vec<ChoiceId>, ValidationError> {
        let max = usize::try_from(self.max_selections).unwrap_or(usize::MAX);
        if selected.len() > max {
            debug!(
                question_id = %self.id,
                selected = selected.len(),
                max_selections = self.max_selections,
                "selection rejected"
            );
            return Err(ValidationError::TooManySelections {
                selected: selected.len(),
                max: self.max_selections,
            });
        }

        Ok(selected
            .iter()
            .copied()
            .filter(|id| self.choice(*id).is_some_and(Choice::is_correct))
            .collect())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
