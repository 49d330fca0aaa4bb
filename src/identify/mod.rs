//! Heuristic plant identification
//!
//! No model weights and no learning: an image is reduced to gross color
//! statistics, matched against a fixed rule table and mapped to a plausible
//! plant from the matched pool.
//!
//! ## Pipeline
//! 1. `features` - decode, downsample to 224x224, bucket pixels into a `ColorProfile`
//! 2. `rules` - evaluate category predicates, tie-break by priority, or fall back
//! 3. `selector` - random draw from the pool plus a tiered confidence score
//! 4. `engine` - glue, care tips, and recovery to the default pool

pub mod catalog;
pub mod engine;
pub mod features;
pub mod rules;
pub mod selector;

pub use catalog::PlantRecord;
pub use engine::{default_identification, identify_bytes, identify_path, identify_profile, IdentificationResult};
pub use features::ColorProfile;
pub use rules::{match_profile, Category, CategoryMatch, FallbackTier};
pub use selector::{Specificity, CONFIDENCE_MAX, CONFIDENCE_MIN};
