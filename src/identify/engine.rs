//! Identification pipeline: profile -> match -> select -> care tips.
//!
//! `identify_*` never fails. Decode errors and empty pools degrade to the
//! default pool at low confidence and are logged.

use std::path::Path;

use rand::Rng;
use serde::Serialize;

use super::catalog::PlantRecord;
use super::features::ColorProfile;
use super::rules::{match_profile, Category, CategoryMatch};
use super::selector::{estimate_confidence, select_default, select_plant, Specificity};
use crate::care_tips::generate_care_tips;
use crate::error::{IdentifyError, Result};

/// Result handed back to the HTTP layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentificationResult {
    pub plant_name: String,
    pub confidence: f64,
    pub description: String,
    pub care_tips: Vec<String>,
    pub category: Option<Category>,
    pub specificity: Specificity,
}

impl IdentificationResult {
    fn new(record: &PlantRecord, confidence: f64, category: Option<Category>, specificity: Specificity) -> Self {
        Self {
            plant_name: record.name.to_string(),
            confidence,
            description: record.description.to_string(),
            care_tips: generate_care_tips(record.name).iter().map(|t| t.to_string()).collect(),
            category,
            specificity,
        }
    }
}

/// Identify from an already computed profile. Fails only on an empty pool.
pub fn identify_profile<R: Rng + ?Sized>(profile: &ColorProfile, rng: &mut R) -> Result<IdentificationResult> {
    let matched = match_profile(profile);
    let specificity = match &matched {
        CategoryMatch::Single(_) => Specificity::SingleCategory,
        CategoryMatch::Multiple { .. } => Specificity::MultiCategory,
        CategoryMatch::NoMatch(_) => Specificity::Fallback,
    };

    match &matched {
        CategoryMatch::Multiple { chosen, matched } => {
            tracing::debug!("Categories {:?} matched, chose {}", matched, chosen.as_str());
        }
        CategoryMatch::Single(c) => tracing::debug!("Single category match: {}", c.as_str()),
        CategoryMatch::NoMatch(tier) => tracing::debug!("No category matched, fallback tier {:?}", tier),
    }

    let record = select_plant(matched.pool(), rng)
        .ok_or_else(|| IdentifyError::empty_pool(matched.category()))?;
    let confidence = estimate_confidence(specificity, rng);

    Ok(IdentificationResult::new(record, confidence, matched.category(), specificity))
}

/// Identify from encoded image bytes.
pub fn identify_bytes<R: Rng + ?Sized>(bytes: &[u8], rng: &mut R) -> IdentificationResult {
    let outcome = ColorProfile::from_bytes(bytes).and_then(|profile| identify_profile(&profile, rng));
    recover(outcome, rng)
}

/// Identify from an image file on disk.
pub fn identify_path<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> IdentificationResult {
    let outcome = ColorProfile::from_path(path).and_then(|profile| identify_profile(&profile, rng));
    recover(outcome, rng)
}

/// Low-confidence result drawn from the default pool
pub fn default_identification<R: Rng + ?Sized>(rng: &mut R) -> IdentificationResult {
    let record = select_default(rng);
    let confidence = estimate_confidence(Specificity::Default, rng);
    IdentificationResult::new(record, confidence, None, Specificity::Default)
}

fn recover<R: Rng + ?Sized>(outcome: Result<IdentificationResult>, rng: &mut R) -> IdentificationResult {
    match outcome {
        Ok(result) => result,
        Err(e) if e.is_decode_failure() => {
            tracing::warn!("Image analysis failed, using default pool: {}", e);
            default_identification(rng)
        }
        Err(e) => {
            tracing::error!("Plant catalog misconfigured, using default pool: {}", e);
            default_identification(rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identify::catalog::{DEFAULT_POOL, FLOWERING_PLANTS, TROPICAL_HOUSEPLANTS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile(green: f64, red: f64, yellow: f64) -> ColorProfile {
        ColorProfile {
            green_ratio: green,
            red_ratio: red,
            yellow_ratio: yellow,
            brightness: 0.5,
            aspect_ratio: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_category_result() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = identify_profile(&profile(0.48, 0.02, 0.02), &mut rng).unwrap();
        assert_eq!(result.category, Some(Category::TropicalHouseplants));
        assert_eq!(result.specificity, Specificity::SingleCategory);
        assert!(TROPICAL_HOUSEPLANTS.iter().any(|p| p.name == result.plant_name));
        assert!(result.confidence >= 0.83 - 1e-9);
        assert_eq!(result.care_tips.len(), 4);
    }

    #[test]
    fn test_multi_category_result_uses_priority_pool() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = identify_profile(&profile(0.5, 0.2, 0.0), &mut rng).unwrap();
            assert_eq!(result.specificity, Specificity::MultiCategory);
            assert!(FLOWERING_PLANTS.iter().any(|p| p.name == result.plant_name));
        }
    }

    #[test]
    fn test_undecodable_bytes_fall_back_to_default_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = identify_bytes(&[0x89, 0x50, 0x4e, 0x47, 0x00], &mut rng);
        assert_eq!(result.specificity, Specificity::Default);
        assert_eq!(result.category, None);
        assert!(DEFAULT_POOL.iter().any(|p| p.name == result.plant_name));
        assert!((result.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_missing_file_falls_back_to_default_pool() {
        let mut rng = StdRng::seed_from_u64(6);
        let result = identify_path(Path::new("/nonexistent/upload.jpg"), &mut rng);
        assert_eq!(result.specificity, Specificity::Default);
    }

    #[test]
    fn test_default_identification_covers_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let result = default_identification(&mut rng);
            assert_eq!(result.specificity, Specificity::Default);
            assert_eq!(result.care_tips.len(), 4);
            seen.insert(result.plant_name);
        }
        assert_eq!(seen.len(), DEFAULT_POOL.len());
    }

    #[test]
    fn test_description_comes_from_catalog() {
        let mut rng = StdRng::seed_from_u64(8);
        let result = identify_profile(&profile(0.48, 0.02, 0.02), &mut rng).unwrap();
        let record = TROPICAL_HOUSEPLANTS
            .iter()
            .find(|p| p.name == result.plant_name)
            .unwrap();
        assert_eq!(result.description, record.description);
    }
}
