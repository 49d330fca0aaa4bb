//! Care tips for an identified plant.
//!
//! Plant names are matched by case-insensitive substring against keyword
//! groups. Group order matters: the first group with a hit wins.

const SUCCULENT_KEYWORDS: &[&str] = &["succulent", "cactus", "aloe", "jade"];
const ORCHID_KEYWORDS: &[&str] = &["orchid"];
const FERN_KEYWORDS: &[&str] = &["fern", "boston fern"];
const LILY_KEYWORDS: &[&str] = &["peace lily", "lily"];

pub const SUCCULENT_TIPS: &[&str] = &[
    "Water only when soil is completely dry",
    "Provide bright, indirect light",
    "Use well-draining soil",
    "Avoid overwatering - less is more",
];

pub const ORCHID_TIPS: &[&str] = &[
    "Water weekly by soaking method",
    "Provide bright, indirect light",
    "Use orchid bark mix",
    "Maintain 40-70% humidity",
];

pub const FERN_TIPS: &[&str] = &[
    "Keep soil consistently moist",
    "Provide high humidity",
    "Avoid direct sunlight",
    "Mist regularly but avoid waterlogged soil",
];

pub const LILY_TIPS: &[&str] = &[
    "Water when soil surface is dry",
    "Tolerates low to bright light",
    "Flowers indicate good care",
    "Drooping leaves signal watering time",
];

pub const GENERIC_TIPS: &[&str] = &[
    "Provide appropriate light for species",
    "Water when topsoil feels dry",
    "Ensure good drainage",
    "Feed during growing season",
];

/// Keyword groups in match order
const TIP_GROUPS: &[(&[&str], &[&str])] = &[
    (SUCCULENT_KEYWORDS, SUCCULENT_TIPS),
    (ORCHID_KEYWORDS, ORCHID_TIPS),
    (FERN_KEYWORDS, FERN_TIPS),
    (LILY_KEYWORDS, LILY_TIPS),
];

pub fn generate_care_tips(plant_name: &str) -> &'static [&'static str] {
    let name = plant_name.to_lowercase();

    TIP_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
        .map(|(_, tips)| *tips)
        .unwrap_or(GENERIC_TIPS)
}
