//! Rule-based botanical chat
//!
//! `answer` is the single entry point: off-topic text gets the refusal with a
//! `warning` type, everything else is routed to an intent and answered from
//! the canned paragraphs.

pub mod responses;
pub mod router;

use rand::Rng;
use serde::Serialize;

pub use router::{classify_intent, is_botanical_question, route, CareTopic, Intent, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Success,
    Warning,
}

/// Chat response as serialized by the HTTP layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    pub intent: Option<Intent>,
}

impl ChatReply {
    pub fn refusal() -> Self {
        Self {
            response: responses::REFUSAL.to_string(),
            kind: ReplyKind::Warning,
            intent: None,
        }
    }
}

/// Answer an already trimmed message
pub fn answer<R: Rng + ?Sized>(message: &str, rng: &mut R) -> ChatReply {
    match route(message) {
        Route::OutOfDomain => {
            tracing::debug!("Off-topic chat message refused");
            ChatReply::refusal()
        }
        Route::InDomain { intent, topic } => {
            tracing::debug!("Chat intent {:?} (topic {:?})", intent, topic);
            ChatReply {
                response: responses::synthesize(intent, topic, rng),
                kind: ReplyKind::Success,
                intent: Some(intent),
            }
        }
    }
}
