use serde::{Deserialize, Serialize};

use crate::model::validation::ValidationError;

/// Longest accepted question title, in characters.
pub const MAX_TITLE_LEN: usize = 50;

/// Longest accepted choice text, in characters.
pub const MAX_CHOICE_TEXT_LEN: usize = 100;

/// Validated question title (non-blank, at most `MAX_TITLE_LEN` characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionTitle(String);

impl QuestionTitle {
    /// Parses a question title.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyTitle` for blank input and
    /// `ValidationError::TitleTooLong` past `MAX_TITLE_LEN` characters.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let len = value.chars().count();
        if len > MAX_TITLE_LEN {
            return Err(ValidationError::TitleTooLong {
                len,
                max: MAX_TITLE_LEN,
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated choice text (non-blank, at most `MAX_CHOICE_TEXT_LEN` characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChoiceText(String);

impl ChoiceText {
    /// Parses choice text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyChoiceText` for blank input and
    /// `ValidationError::ChoiceTextTooLong` past `MAX_CHOICE_TEXT_LEN` characters.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyChoiceText);
        }
        let len = value.chars().count();
        if len > MAX_CHOICE_TEXT_LEN {
            return Err(ValidationError::ChoiceTextTooLong {
                len,
                max: MAX_CHOICE_TEXT_LEN,
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for QuestionTitle {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<QuestionTitle> for String {
    fn from(title: QuestionTitle) -> Self {
        title.0
    }
}

impl TryFrom<String> for ChoiceText {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ChoiceText> for String {
    fn from(text: ChoiceText) -> Self {
        text.0
    }
}

impl std::fmt::Display for QuestionTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ChoiceText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
