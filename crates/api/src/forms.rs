//! Request bodies for question and answer writes and their mapping to drafts.
//!
//! Only the listed fields are read; anything else a client submits (an `id`, a
//! `user_id`) is ignored, so ownership always comes from the principal.

use qna_core::answer::AnswerDraft;
use qna_core::question::QuestionDraft;
use qna_db::models::question::Question;
use serde::{Deserialize, Deserializer};

/// `{ "question": { ... } }`
#[derive(Debug, Deserialize)]
pub struct QuestionForm {
    pub question: QuestionParams,
}

/// Submitted question fields.
///
/// The outer `Option` records whether the field was submitted at all, the
/// inner one whether it was `null`.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionParams {
    #[serde(default, deserialize_with = "submitted")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "submitted")]
    pub body: Option<Option<String>>,
}

impl QuestionParams {
    /// Draft for a new question; unsubmitted fields are blank.
    pub fn into_draft(self) -> QuestionDraft {
        QuestionDraft {
            title: self.title.flatten(),
            body: self.body.flatten(),
        }
    }

    /// Draft for an update; unsubmitted fields keep their stored value.
    pub fn apply_to(self, question: &Question) -> QuestionDraft {
        QuestionDraft {
            title: self.title.unwrap_or_else(|| Some(question.title.clone())),
            body: self.body.unwrap_or_else(|| Some(question.body.clone())),
        }
    }
}

/// `{ "answer": { "body": ... } }`
#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    pub answer: AnswerParams,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnswerParams {
    #[serde(default)]
    pub body: Option<String>,
}

impl AnswerParams {
    pub fn into_draft(self) -> AnswerDraft {
        AnswerDraft { body: self.body }
    }
}

/// Wrap a present value (including `null`) in `Some`, so a missing field
/// (`#[serde(default)]`) can be told apart from an explicit `null`.
fn submitted<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
