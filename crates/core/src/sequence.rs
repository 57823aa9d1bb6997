use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::model::{Question, QuestionDraft, QuestionError, QuestionId};

/// Source of question ids, monotonically increasing from its starting value.
///
/// Services and tests can own an instance for isolated, deterministic ids;
/// `Question::new` draws from the process-wide [`QuestionIds::global`].
#[derive(Debug)]
pub struct QuestionIds {
    // 0 once `u64::MAX` has been handed out.
    next: AtomicU64,
}

static GLOBAL: QuestionIds = QuestionIds::new();

impl QuestionIds {
    /// Returns a source whose first id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(NonZeroU64::MIN)
    }

    /// Returns a source whose first id is `first`.
    #[must_use]
    pub const fn starting_at(first: NonZeroU64) -> Self {
        Self {
            next: AtomicU64::new(first.get()),
        }
    }

    /// The process-wide source.
    #[must_use]
    pub fn global() -> &'static QuestionIds {
        &GLOBAL
    }

    /// Hands out the next id, or `None` once `u64::MAX` has been issued.
    /// Safe to call from several threads at once.
    pub fn next_id(&self) -> Option<QuestionId> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                (current != 0).then_some(current.wrapping_add(1))
            })
            .ok()
            .map(QuestionId::new)
    }

    /// Validates the draft, then assigns it the next id.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::Validation` for a rejected draft (no id is
    /// consumed) and `QuestionError::QuestionIdsExhausted` when the source has
    /// no ids left.
    pub fn create(&self, draft: QuestionDraft) -> Result<Question, QuestionError> {
        let validated = draft.validate().inspect_err(|err| {
            debug!(error = %err, "question rejected");
        })?;
        let Some(id) = self.next_id() else {
            debug!("question rejected, ids exhausted");
            return Err(QuestionError::QuestionIdsExhausted);
        };
        Ok(validated.assign_id(id))
    }
}

impl Default for QuestionIds {
    fn default() -> Self {
        Self::new()
    }
}
