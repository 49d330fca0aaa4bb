//! Static plant catalog.
//!
//! Every pool here is read-only for the lifetime of the process and must stay
//! non-empty; `tests::test_all_pools_non_empty` guards that.

use serde::Serialize;

/// A plant the engine can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlantRecord {
    pub name: &'static str,
    pub description: &'static str,
}

const fn plant(name: &'static str, description: &'static str) -> PlantRecord {
    PlantRecord { name, description }
}

// ============================================================================
// Category pools
// ============================================================================

pub const TROPICAL_HOUSEPLANTS: &[PlantRecord] = &[
    plant("Monstera deliciosa", "Split-leaf philodendron native to Central American rainforests, known for its fenestrated leaves."),
    plant("Epipremnum aureum", "Golden pothos from Southeast Asia, excellent air purifier with heart-shaped variegated leaves."),
    plant("Philodendron hederaceum", "Heartleaf philodendron, fast-growing vine with glossy green heart-shaped foliage."),
    plant("Ficus lyrata", "Fiddle-leaf fig from western Africa, featuring large violin-shaped leaves and upright growth."),
    plant("Ficus elastica", "Indian rubber tree with thick, glossy leaves and natural latex production capabilities."),
    plant("Dracaena trifasciata", "Snake plant (Sansevieria) from West Africa, extremely drought-tolerant with sword-like leaves."),
    plant("Zamioculcas zamiifolia", "ZZ plant from eastern Africa, waxy dark green leaves, extremely low maintenance."),
];

pub const FLOWERING_PLANTS: &[PlantRecord] = &[
    plant("Saintpaulia ionantha", "African violet from Tanzania, compact rosette with velvety leaves and colorful flowers."),
    plant("Spathiphyllum wallisii", "Peace lily from tropical Americas, white spathes and excellent air purification."),
    plant("Anthurium andraeanum", "Flamingo flower from Colombia, heart-shaped red bracts and glossy foliage."),
    plant("Phalaenopsis orchid", "Moth orchid from Southeast Asia, long-lasting blooms in various colors."),
    plant("Cyclamen persicum", "Persian cyclamen with heart-shaped leaves and reflexed petals."),
    plant("Begonia rex", "Rex begonia with colorful asymmetrical leaves and small pink flowers."),
    plant("Hibiscus rosa-sinensis", "Chinese hibiscus with large trumpet-shaped flowers in bright colors."),
];

pub const SUCCULENTS_CACTI: &[PlantRecord] = &[
    plant("Aloe barbadensis", "True aloe vera from Arabian Peninsula, medicinal gel-filled thick leaves."),
    plant("Crassula ovata", "Jade plant from South Africa, thick oval leaves and tree-like growth pattern."),
    plant("Echeveria elegans", "Mexican snowball succulent with blue-green rosettes and pink flower spikes."),
    plant("Sedum morganianum", "Burro's tail from Mexico, trailing succulent with plump blue-green leaves."),
    plant("Haworthia fasciata", "Zebra plant from South Africa, distinctive white stripes on dark green leaves."),
    plant("Opuntia microdasys", "Bunny ears cactus from Mexico, flat oval pads with golden glochids."),
    plant("Schlumbergera x buckleyi", "Christmas cactus hybrid, segmented leaves and winter blooms."),
];

pub const HERBS_CULINARY: &[PlantRecord] = &[
    plant("Ocimum basilicum", "Sweet basil from India, aromatic leaves essential for Mediterranean cuisine."),
    plant("Mentha x piperita", "Peppermint hybrid, cooling menthol-rich leaves for teas and cooking."),
    plant("Rosmarinus officinalis", "Rosemary from Mediterranean, needle-like aromatic leaves, drought tolerant."),
    plant("Lavandula angustifolia", "English lavender with fragrant purple spikes, attracts beneficial insects."),
    plant("Thymus vulgaris", "Common thyme from Mediterranean, small aromatic leaves for seasoning."),
    plant("Salvia officinalis", "Garden sage with grey-green velvety leaves and culinary uses."),
    plant("Petroselinum crispum", "Curly parsley, biennial herb rich in vitamins and minerals."),
];

pub const TREES_WOODY: &[PlantRecord] = &[
    plant("Acer palmatum", "Japanese maple with palmate leaves, spectacular autumn color changes."),
    plant("Buxus sempervirens", "Common boxwood, dense evergreen shrub ideal for topiary and hedging."),
    plant("Rhododendron ponticum", "Pontian rhododendron with large flower clusters in spring."),
    plant("Camellia japonica", "Japanese camellia, evergreen with waxy flowers in winter and spring."),
    plant("Hydrangea macrophylla", "Bigleaf hydrangea with pH-dependent flower color changes."),
    plant("Magnolia grandiflora", "Southern magnolia with large fragrant white flowers and glossy leaves."),
    plant("Prunus serrulata", "Japanese cherry with pink spring blossoms and serrated leaves."),
];

pub const FERNS_TROPICAL: &[PlantRecord] = &[
    plant("Nephrolepis exaltata", "Boston fern with arching fronds, excellent for humid environments."),
    plant("Adiantum raddianum", "Maidenhair fern with delicate fan-shaped leaflets on black stems."),
    plant("Pteris cretica", "Cretan brake fern with variegated fronds and easy care requirements."),
    plant("Asplenium nidus", "Bird's nest fern with glossy strap-like fronds arranged in rosette."),
    plant("Platycerium bifurcatum", "Staghorn fern, epiphytic with antler-shaped fertile fronds."),
];

// ============================================================================
// Fallback ladder pools
// ============================================================================

/// Bright, green image without a category match: likely a healthy foliage plant
pub const FALLBACK_LEAFY: &[PlantRecord] = &[
    plant("Chlorophytum comosum", "Spider plant from South Africa, easy-care with long arching leaves and plantlets."),
    plant("Pothos aureus", "Golden pothos, heart-shaped leaves with natural air purifying qualities."),
    plant("Dracaena marginata", "Dragon tree with narrow pointed leaves and red edges, low maintenance."),
];

/// Red or yellow heavy image: likely flowering or autumn foliage
pub const FALLBACK_COLORFUL: &[PlantRecord] = &[
    plant("Rosa hybrid", "Garden rose with fragrant blooms, requires regular care and pruning."),
    plant("Tulipa gesneriana", "Garden tulip with cup-shaped flowers, spring blooming bulb."),
    plant("Impatiens walleriana", "Busy lizzie with continuous blooms in shade conditions."),
];

pub const FALLBACK_HOUSEPLANTS: &[PlantRecord] = &[
    plant("Ficus benjamina", "Weeping fig with glossy leaves, popular indoor tree species."),
    plant("Philodendron scandens", "Heartleaf philodendron, trailing vine perfect for hanging baskets."),
    plant("Sansevieria trifasciata", "Snake plant with upright sword-like leaves, extremely drought tolerant."),
];

/// Used when the image cannot be analysed at all
pub const DEFAULT_POOL: &[PlantRecord] = &[
    plant("Pothos", "Hardy trailing vine perfect for beginners, tolerates low light conditions."),
    plant("Snake Plant", "Architectural succulent with upright leaves, extremely low maintenance."),
    plant("Peace Lily", "Elegant flowering plant that indicates when it needs water by drooping."),
    plant("Spider Plant", "Easy-care plant that produces baby plants, great for propagation."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pools_non_empty() {
        let pools: [&[PlantRecord]; 10] = [
            TROPICAL_HOUSEPLANTS,
            FLOWERING_PLANTS,
            SUCCULENTS_CACTI,
            HERBS_CULINARY,
            TREES_WOODY,
            FERNS_TROPICAL,
            FALLBACK_LEAFY,
            FALLBACK_COLORFUL,
            FALLBACK_HOUSEPLANTS,
            DEFAULT_POOL,
        ];
        for pool in pools {
            assert!(!pool.is_empty());
            for record in pool {
                assert!(!record.name.is_empty());
                assert!(!record.description.is_empty());
            }
        }
    }

    #[test]
    fn test_fallback_pools_have_three_entries() {
        assert_eq!(FALLBACK_LEAFY.len(), 3);
        assert_eq!(FALLBACK_COLORFUL.len(), 3);
        assert_eq!(FALLBACK_HOUSEPLANTS.len(), 3);
    }
}
