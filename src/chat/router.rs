//! Intent routing for botanical questions.
//!
//! Two steps, both plain case-insensitive substring membership:
//! 1. Domain gate: at least one botanical vocabulary term must appear.
//! 2. Intent: keyword groups are tested in a fixed order, first hit wins.

use serde::Serialize;

/// Terms that make a message in-domain
pub const BOTANICAL_VOCABULARY: &[&str] = &[
    "plant", "flower", "tree", "leaf", "leaves", "garden", "gardening", "botany", "botanical",
    "grow", "growing", "care", "water", "watering", "soil", "fertilizer", "pruning", "propagate",
    "succulent", "cactus", "herb", "vegetable", "fruit", "seed", "seeds", "bloom", "blooming",
    "houseplant", "indoor", "outdoor", "photosynthesis", "chlorophyll", "roots", "stem", "stems",
    "petal", "petals", "pollen", "pollination", "species", "variety", "cultivar", "hybrid",
    "perennial", "annual", "biennial", "evergreen", "deciduous", "tropical", "temperate",
    "light", "sunlight", "shade", "humidity", "temperature", "climate", "season", "seasonal",
    "repot", "repotting", "transplant", "mulch", "compost", "organic", "disease", "pest",
    "fungus", "bacteria", "virus", "nutrient", "nitrogen", "phosphorus", "potassium",
    "respiration", "transpiration", "germination", "phototropism",
];

/// Topic of an in-domain question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Care,
    Identify,
    Water,
    Light,
    Soil,
    Fertilize,
    Propagate,
    Problem,
    Season,
    Photosynthesis,
    Hormone,
    AirQuality,
    Taxonomy,
    GeneralFact,
}

/// Plant family refinement for care questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CareTopic {
    Succulent,
    Rose,
    Orchid,
    Fern,
    General,
}

/// Intent keyword groups, in evaluation order
pub const INTENT_GROUPS: &[(Intent, &[&str])] = &[
    (Intent::Care, &["care", "how to", "growing", "grow"]),
    (Intent::Identify, &["identify", "what is", "what plant", "name", "species"]),
    (Intent::Water, &["water", "watering", "irrigation"]),
    (Intent::Light, &["light", "sun", "shade", "photosynthesis"]),
    (Intent::Soil, &["soil", "potting", "drainage", "nutrients"]),
    (Intent::Fertilize, &["fertilizer", "fertilize", "feed", "nutrients", "nitrogen"]),
    (Intent::Propagate, &["propagate", "propagation", "cutting", "cuttings", "seeds"]),
    (Intent::Problem, &["problem", "disease", "pest", "dying", "yellow", "brown", "sick"]),
    (Intent::Season, &["winter", "summer", "spring", "fall", "season", "dormancy"]),
    (Intent::Photosynthesis, &["photosynthesis", "chlorophyll", "leaves", "biology"]),
    (Intent::Hormone, &["hormone", "growth", "pruning", "pinching"]),
    (Intent::AirQuality, &["air", "purify", "clean", "oxygen", "pollution"]),
    (Intent::Taxonomy, &["family", "taxonomy", "classification"]),
];

/// Care sub-topic keyword groups, in evaluation order
pub const CARE_TOPIC_GROUPS: &[(CareTopic, &[&str])] = &[
    (CareTopic::Succulent, &["succulent", "cactus", "desert"]),
    (CareTopic::Rose, &["rose", "roses"]),
    (CareTopic::Orchid, &["orchid", "orchids"]),
    (CareTopic::Fern, &["fern", "ferns"]),
];

/// Routing decision for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    OutOfDomain,
    InDomain { intent: Intent, topic: Option<CareTopic> },
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// True if the message mentions any botanical vocabulary term
pub fn is_botanical_question(message: &str) -> bool {
    contains_any(&message.to_lowercase(), BOTANICAL_VOCABULARY)
}

/// First matching intent group, or `GeneralFact`
pub fn classify_intent(message: &str) -> Intent {
    let text = message.to_lowercase();
    INTENT_GROUPS
        .iter()
        .find(|(_, keywords)| contains_any(&text, keywords))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::GeneralFact)
}

/// Sub-topic for a care question
pub fn classify_care_topic(message: &str) -> CareTopic {
    let text = message.to_lowercase();
    CARE_TOPIC_GROUPS
        .iter()
        .find(|(_, keywords)| contains_any(&text, keywords))
        .map(|(topic, _)| *topic)
        .unwrap_or(CareTopic::General)
}

pub fn route(message: &str) -> Route {
    if !is_botanical_question(message) {
        return Route::OutOfDomain;
    }

    let intent = classify_intent(message);
    let topic = match intent {
        Intent::Care => Some(classify_care_topic(message)),
        _ => None,
    };

    Route::InDomain { intent, topic }
}
