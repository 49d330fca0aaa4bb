//! Canned botanical answers.
//!
//! Every intent maps to one fixed paragraph, except `GeneralFact` which draws
//! from a small fact pool and appends a follow-up prompt.

use rand::seq::SliceRandom;
use rand::Rng;

use super::router::{CareTopic, Intent};

pub const REFUSAL: &str = "I'm Flora, your botanical expert! I can only help with plant and gardening questions. Please ask me about plant care, identification, botanical facts, or gardening advice. 🌱";

pub const FOLLOW_UP_PROMPT: &str = " What specific aspect of plant biology interests you most?";

pub const SUCCULENT_CARE: &str = "Succulents employ CAM (Crassulacean Acid Metabolism) photosynthesis, opening stomata at night to conserve water. They need bright light (2000-3000 foot-candles), well-draining soil with 50%+ inorganic material, and water only when soil is completely dry. Most prefer temperatures 65-80°F with low humidity (30-50%). Overwatering causes root rot - their #1 killer.";

pub const ROSE_CARE: &str = "Roses (Rosa spp.) require 6+ hours direct sunlight for optimal photosynthesis and disease prevention. Plant in well-draining soil with pH 6.0-7.0, rich in organic matter. Water at soil level to prevent black spot (Diplocarpon rosae). Apply balanced fertilizer (10-10-10) monthly during growing season. Prune in late winter to promote air circulation and remove diseased canes.";

pub const ORCHID_CARE: &str = "Orchids are epiphytes requiring excellent drainage and air circulation around roots. Use orchid bark mix with chunky materials. Water weekly via soaking method, then drain completely - standing water causes root rot. Maintain 40-70% humidity and temperatures 65-85°F. Feed weakly (1/4 strength) with balanced fertilizer monthly during active growth.";

pub const FERN_CARE: &str = "Ferns reproduce via spores and prefer humid environments (50-80% humidity). They need consistent moisture but not waterlogged soil. Provide bright, indirect light - direct sun scorches fronds. Use well-draining potting mix rich in organic matter. Mist regularly and place on humidity trays during dry periods.";

pub const GENERAL_CARE: &str = "Plant care basics: Light drives photosynthesis - match intensity to species needs. Water when top 1-2 inches of soil dry (finger test). Ensure drainage to prevent anaerobic soil conditions. Feed during active growth with appropriate N-P-K ratios. Monitor for pests and diseases. Each species has evolved specific environmental requirements.";

pub const IDENTIFY: &str = "For accurate plant identification, I analyze leaf morphology, growth habit, flower structure, and botanical features. Upload a clear photo showing leaves, stems, and any flowers/fruits. I'll identify the species using taxonomic classification and provide scientific names, common names, and detailed care information.";

pub const WATER: &str = "Watering science: Plants absorb water through root hairs via osmosis. Frequency depends on transpiration rate, pot size, soil composition, humidity, and temperature. Check soil moisture 1-2 inches deep. Water thoroughly until drainage occurs - shallow watering encourages surface roots. Morning watering reduces fungal diseases by allowing leaves to dry.";

pub const LIGHT: &str = "Light requirements vary by photosynthetic pathway: C3 plants (most houseplants) need bright, indirect light. C4 plants (grasses) tolerate intense light. CAM plants (succulents) are highly light-efficient. Measure: Full sun (6+ hours direct), partial (3-6 hours), shade (<3 hours). Indoor plants need 1000-3000 foot-candles depending on species.";

pub const SOIL: &str = "Soil provides mechanical support, water, air, and nutrients. Good potting mix contains 40% organic matter (peat/compost), 30% drainage material (perlite/vermiculite), 30% structure (bark/coir). pH affects nutrient availability - most plants prefer 6.0-7.0. Essential nutrients: NPK (macronutrients) plus calcium, magnesium, sulfur, and micronutrients.";

pub const FERTILIZE: &str = "Plant nutrition: Nitrogen (N) promotes leaf growth and chlorophyll. Phosphorus (P) aids root development and flowering. Potassium (K) improves disease resistance and overall vigor. Apply balanced fertilizer (10-10-10 or 20-20-20) at 1/4 strength bi-weekly during growing season. Organic options include compost, fish emulsion, or kelp meal.";

pub const PROPAGATE: &str = "Propagation methods: Stem cuttings - take 4-6\" below node, remove lower leaves, place in water or rooting medium. Leaf cuttings work for succulents. Division separates root systems. Air layering for difficult species. Seeds require proper temperature and moisture. Rooting hormones (auxins) accelerate root development. Success rates vary by species and season.";

pub const PROBLEM: &str = "Plant diagnostics: Yellow leaves = overwatering, nutrient deficiency, or natural senescence. Brown tips = low humidity, fluoride toxicity, or overfertilization. Wilting = water stress or root damage. Common pests: aphids, spider mites, scale insects. Fungal diseases thrive in poor air circulation and overwatering. Prevention is better than treatment.";

pub const SEASON: &str = "Seasonal adaptations: Plants respond to photoperiod and temperature changes. Spring triggers active growth - increase water/fertilizer. Summer stress requires adequate water and heat protection. Fall signals dormancy preparation - reduce fertilizing. Winter dormancy conserves energy - minimal water, no fertilizer. Some plants require cold stratification for flowering.";

pub const PHOTOSYNTHESIS: &str = "Photosynthesis converts CO2 + H2O + light energy into glucose + O2. Chlorophyll absorbs red and blue light, reflecting green. Stomata regulate gas exchange and water loss. Transpiration creates negative pressure for water uptake. Different leaf shapes optimize light capture and water conservation for specific environments.";

pub const HORMONE: &str = "Plant hormones regulate growth: Auxins promote root development and apical dominance. Cytokinins stimulate cell division and lateral growth. Gibberellins cause stem elongation. Abscisic acid triggers dormancy and stress responses. Pruning removes apical dominance, encouraging bushy growth through lateral bud activation.";

pub const AIR_QUALITY: &str = "Plants improve air quality through photosynthesis (producing oxygen) and phytoremediation (removing pollutants). NASA studies show plants like snake plants, pothos, and peace lilies remove formaldehyde, benzene, and xylene. Stomata absorb airborne chemicals. One plant per 100 square feet provides measurable air purification benefits.";

pub const TAXONOMY: &str = "Plant taxonomy organizes species by evolutionary relationships. Major families: Araceae (aroids like pothos, monstera), Arecaceae (palms), Cactaceae (cacti), Orchidaceae (orchids), Rosaceae (roses, fruit trees). Each family shares similar characteristics, care requirements, and growth patterns. Understanding plant families helps predict care needs.";

pub const BOTANICAL_FACTS: &[&str] = &[
    "Plants evolved from algae ~500 million years ago, developing vascular systems to transport water and nutrients. Root systems can extend 2-3x the canopy spread underground.",
    "Carnivorous plants like Venus flytraps supplement poor soil nutrients by digesting insects. They still photosynthesize but gain nitrogen from prey.",
    "Mycorrhizal fungi form symbiotic relationships with 90% of plant species, extending root networks and improving nutrient uptake in exchange for sugars.",
    "Plant communication occurs through chemical signals (pheromones), electrical impulses, and mycorrhizal networks - the 'wood wide web'.",
    "Epiphytes like orchids and bromeliads grow on other plants for support but aren't parasitic. They absorb moisture and nutrients from air and debris.",
];

/// Fixed paragraph for a care sub-topic
pub fn care_response(topic: CareTopic) -> &'static str {
    match topic {
        CareTopic::Succulent => SUCCULENT_CARE,
        CareTopic::Rose => ROSE_CARE,
        CareTopic::Orchid => ORCHID_CARE,
        CareTopic::Fern => FERN_CARE,
        CareTopic::General => GENERAL_CARE,
    }
}

/// Fixed paragraph for every intent except `GeneralFact`
pub fn intent_response(intent: Intent, topic: Option<CareTopic>) -> Option<&'static str> {
    let text = match intent {
        Intent::Care => care_response(topic.unwrap_or(CareTopic::General)),
        Intent::Identify => IDENTIFY,
        Intent::Water => WATER,
        Intent::Light => LIGHT,
        Intent::Soil => SOIL,
        Intent::Fertilize => FERTILIZE,
        Intent::Propagate => PROPAGATE,
        Intent::Problem => PROBLEM,
        Intent::Season => SEASON,
        Intent::Photosynthesis => PHOTOSYNTHESIS,
        Intent::Hormone => HORMONE,
        Intent::AirQuality => AIR_QUALITY,
        Intent::Taxonomy => TAXONOMY,
        Intent::GeneralFact => return None,
    };
    Some(text)
}

/// Random fact from the pool followed by the follow-up prompt
pub fn general_fact<R: Rng + ?Sized>(rng: &mut R) -> String {
    let fact = BOTANICAL_FACTS.choose(rng).copied().unwrap_or(BOTANICAL_FACTS[0]);
    format!("{}{}", fact, FOLLOW_UP_PROMPT)
}

pub fn synthesize<R: Rng + ?Sized>(intent: Intent, topic: Option<CareTopic>, rng: &mut R) -> String {
    match intent_response(intent, topic) {
        Some(text) => text.to_string(),
        None => general_fact(rng),
    }
}
