//! Flora Plant Identifier
//!
//! Heuristic plant identification from photos plus a rule-based botanical
//! chat, with an optional Axum HTTP surface.
//!
//! - `identify/`: color profile extraction, category rules, plant selection
//! - `chat/`: domain gate, intent routing, canned answers
//! - `care_tips`: care tips per identified plant
//! - `encyclopedia`: Wikipedia enrichment (client behind the `api` feature)
//! - `uploads`: upload staging area
//! - `api_server` + `web/`: HTTP routes and pages (`api` feature)

pub mod care_tips;
pub mod chat;
pub mod config;
pub mod encyclopedia;
pub mod error;
pub mod identify;
pub mod uploads;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use care_tips::generate_care_tips;
pub use chat::{answer, ChatReply, Intent, ReplyKind};
pub use config::{Capabilities, RandomSource, ServerConfig};
pub use error::IdentifyError;
pub use identify::{identify_bytes, identify_path, ColorProfile, IdentificationResult, Specificity};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
