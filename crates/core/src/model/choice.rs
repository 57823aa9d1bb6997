use serde::Serialize;

use crate::model::ids::ChoiceId;
use crate::model::text::ChoiceText;

/// One selectable answer option of a `Question`.
///
/// Choices are only created by `Question::add_choice`, which supplies the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: ChoiceText,
    is_correct: bool,
}

impl Choice {
    pub(crate) fn new(id: ChoiceId, text: ChoiceText, is_correct: bool) -> Self {
        Self {
            id,
            text,
            is_correct,
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub(crate) fn set_correct(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_exposes_fields() {
        let text = ChoiceText::parse("Paris").unwrap();
        let choice = Choice::new(ChoiceId::new(1), text, true);

        assert_eq!(choice.id(), ChoiceId::new(1));
        assert_eq!(choice.text(), "Paris");
        assert!(choice.is_correct());
    }

    #[test]
    fn choice_serializes_flat() {
        let choice = Choice::new(ChoiceId::new(2), ChoiceText::parse("b").unwrap(), false);
        let json = serde_json::to_value(&choice).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 2, "text": "b", "is_correct": false })
        );
    }
}
