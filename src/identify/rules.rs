//! Category rules and the fallback ladder.
//!
//! Every rule is evaluated against the profile and all matches are collected.
//! When several categories match, the one with the lowest priority value wins
//! (visually specific groups rank above generic foliage and woody plants).
//! When none match, the profile is routed down a three-step fallback ladder.

use serde::Serialize;

use super::catalog::{self, PlantRecord};
use super::features::ColorProfile;

/// Botanical grouping with its own predicate and plant pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FloweringPlants,
    SucculentsCacti,
    HerbsCulinary,
    FernsTropical,
    TropicalHouseplants,
    TreesWoody,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FloweringPlants => "flowering_plants",
            Category::SucculentsCacti => "succulents_cacti",
            Category::HerbsCulinary => "herbs_culinary",
            Category::FernsTropical => "ferns_tropical",
            Category::TropicalHouseplants => "tropical_houseplants",
            Category::TreesWoody => "trees_woody",
        }
    }

    pub fn rule(&self) -> &'static CategoryRule {
        // RULES has exactly one entry per variant
        RULES
            .iter()
            .find(|rule| rule.id == *self)
            .unwrap_or(&RULES[0])
    }
}

/// One row of the static rule table
#[derive(Debug)]
pub struct CategoryRule {
    pub id: Category,
    /// Lower wins when several categories match
    pub priority: u8,
    pub predicate: fn(&ColorProfile) -> bool,
    pub members: &'static [PlantRecord],
}

impl CategoryRule {
    pub fn matches(&self, profile: &ColorProfile) -> bool {
        (self.predicate)(profile)
    }
}

// ============================================================================
// Predicates
// ============================================================================

fn is_tropical_houseplant(p: &ColorProfile) -> bool {
    p.green_ratio > 0.4 && p.red_ratio < 0.1 && p.yellow_ratio < 0.1
}

fn is_flowering(p: &ColorProfile) -> bool {
    (p.red_ratio > 0.15 || p.yellow_ratio > 0.1) && p.green_ratio > 0.2
}

fn is_succulent(p: &ColorProfile) -> bool {
    p.green_ratio > 0.25 && p.green_ratio < 0.45 && p.red_ratio < 0.15
}

fn is_culinary_herb(p: &ColorProfile) -> bool {
    p.green_ratio > 0.35 && (p.yellow_ratio > 0.05 || p.red_ratio > 0.05)
}

fn is_woody(p: &ColorProfile) -> bool {
    p.green_ratio > 0.3 && (p.red_ratio > 0.1 || p.yellow_ratio > 0.08)
}

fn is_tropical_fern(p: &ColorProfile) -> bool {
    p.green_ratio > 0.5 && p.red_ratio < 0.05 && p.yellow_ratio < 0.05
}

/// Rule table in declaration order. Selection uses `priority`, not position.
pub static RULES: &[CategoryRule] = &[
    CategoryRule {
        id: Category::TropicalHouseplants,
        priority: 4,
        predicate: is_tropical_houseplant,
        members: catalog::TROPICAL_HOUSEPLANTS,
    },
    CategoryRule {
        id: Category::FloweringPlants,
        priority: 0,
        predicate: is_flowering,
        members: catalog::FLOWERING_PLANTS,
    },
    CategoryRule {
        id: Category::SucculentsCacti,
        priority: 1,
        predicate: is_succulent,
        members: catalog::SUCCULENTS_CACTI,
    },
    CategoryRule {
        id: Category::HerbsCulinary,
        priority: 2,
        predicate: is_culinary_herb,
        members: catalog::HERBS_CULINARY,
    },
    CategoryRule {
        id: Category::TreesWoody,
        priority: 5,
        predicate: is_woody,
        members: catalog::TREES_WOODY,
    },
    CategoryRule {
        id: Category::FernsTropical,
        priority: 3,
        predicate: is_tropical_fern,
        members: catalog::FERNS_TROPICAL,
    },
];

// ============================================================================
// Fallback ladder
// ============================================================================

/// Brightness above which a green-tinged image counts as healthy foliage
pub const FALLBACK_BRIGHTNESS: f64 = 0.6;
pub const FALLBACK_GREEN: f64 = 0.2;
pub const FALLBACK_COLOR: f64 = 0.1;

/// Generic pool chosen when no category predicate holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackTier {
    Leafy,
    Colorful,
    Houseplant,
}

impl FallbackTier {
    pub fn for_profile(p: &ColorProfile) -> Self {
        if p.brightness > FALLBACK_BRIGHTNESS && p.green_ratio > FALLBACK_GREEN {
            FallbackTier::Leafy
        } else if p.red_ratio > FALLBACK_COLOR || p.yellow_ratio > FALLBACK_COLOR {
            FallbackTier::Colorful
        } else {
            FallbackTier::Houseplant
        }
    }

    pub fn members(&self) -> &'static [PlantRecord] {
        match self {
            FallbackTier::Leafy => catalog::FALLBACK_LEAFY,
            FallbackTier::Colorful => catalog::FALLBACK_COLORFUL,
            FallbackTier::Houseplant => catalog::FALLBACK_HOUSEPLANTS,
        }
    }
}

// ============================================================================
// Matching
// ============================================================================

/// Outcome of running the rule table against a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryMatch {
    /// Exactly one category matched
    Single(Category),
    /// Several matched; `chosen` is the highest-priority one
    Multiple { chosen: Category, matched: Vec<Category> },
    /// Nothing matched; routed to a fallback pool
    NoMatch(FallbackTier),
}

impl CategoryMatch {
    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryMatch::Single(c) => Some(*c),
            CategoryMatch::Multiple { chosen, .. } => Some(*chosen),
            CategoryMatch::NoMatch(_) => None,
        }
    }

    /// Plant pool the selector draws from
    pub fn pool(&self) -> &'static [PlantRecord] {
        match self {
            CategoryMatch::Single(c) | CategoryMatch::Multiple { chosen: c, .. } => c.rule().members,
            CategoryMatch::NoMatch(tier) => tier.members(),
        }
    }
}

/// All categories whose predicate holds, in rule table order
pub fn matching_categories(profile: &ColorProfile) -> Vec<Category> {
    RULES
        .iter()
        .filter(|rule| rule.matches(profile))
        .map(|rule| rule.id)
        .collect()
}

/// Highest-priority category among `matched`
pub fn resolve_priority(matched: &[Category]) -> Option<Category> {
    matched.iter().copied().min_by_key(|c| c.rule().priority)
}

/// Run the full matcher: collect, tie-break, or fall back.
pub fn match_profile(profile: &ColorProfile) -> CategoryMatch {
    let matched = matching_categories(profile);

    match resolve_priority(&matched) {
        None => CategoryMatch::NoMatch(FallbackTier::for_profile(profile)),
        Some(chosen) if matched.len() == 1 => CategoryMatch::Single(chosen),
        Some(chosen) => CategoryMatch::Multiple { chosen, matched },
    }
}
