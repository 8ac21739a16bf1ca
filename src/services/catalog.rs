//! Static gift catalog
//!
//! Entries are defined at compile time and never mutated. Catalog order is
//! significant: the filter preserves it and the ranker breaks ties with it.

use crate::models::{BudgetBucket, CatalogEntry, Category, Sentiment};

use crate::models::AgeGroup::{Adults, All, Seniors, Teens};

pub static GIFT_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Wireless Noise-Cancelling Earbuds",
        category: Category::Electronics,
        subcategory: "Audio",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[Teens, Adults],
        occasions: &["birthday", "graduation", "christmas", "promotion"],
        interests: &["tech", "music", "gadgets", "travel"],
        sentiment: Sentiment::Positive,
        popularity: 0.92,
        base_price: 3_500,
        description: "Premium wireless earbuds with active noise cancellation",
    },
    CatalogEntry {
        name: "Smart Fitness Watch",
        category: Category::Electronics,
        subcategory: "Wearables",
        price_range: BudgetBucket::TenToTwentyFiveThousand,
        age_groups: &[Adults, Seniors],
        occasions: &["birthday", "anniversary", "promotion", "christmas"],
        interests: &["tech", "fitness", "health", "running"],
        sentiment: Sentiment::Practical,
        popularity: 0.88,
        base_price: 15_000,
        description: "Smartwatch with health monitoring and GPS tracking",
    },
    CatalogEntry {
        name: "Bluetooth Speaker Premium",
        category: Category::Electronics,
        subcategory: "Audio",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[All],
        occasions: &["birthday", "christmas", "just-because", "graduation"],
        interests: &["music", "party", "tech"],
        sentiment: Sentiment::Positive,
        popularity: 0.85,
        base_price: 2_500,
        description: "Portable speaker with rich, room-filling sound",
    },
    CatalogEntry {
        name: "E-Reader with Premium Case",
        category: Category::Electronics,
        subcategory: "Reading",
        price_range: BudgetBucket::FiveToTenThousand,
        age_groups: &[Adults, Seniors],
        occasions: &["birthday", "graduation", "christmas"],
        interests: &["reading", "books", "learning", "tech"],
        sentiment: Sentiment::Practical,
        popularity: 0.80,
        base_price: 8_000,
        description: "Glare-free digital reader with a leather protective case",
    },
    CatalogEntry {
        name: "Smart Home Starter Bundle",
        category: Category::Electronics,
        subcategory: "Smart Home",
        price_range: BudgetBucket::AboveTwentyFiveThousand,
        age_groups: &[Adults],
        occasions: &["christmas", "promotion", "anniversary"],
        interests: &["tech", "home", "gadgets"],
        sentiment: Sentiment::Luxury,
        popularity: 0.72,
        base_price: 26_000,
        description: "Voice assistant, smart bulbs and plugs ready to pair",
    },
    CatalogEntry {
        name: "Gaming Headset Pro",
        category: Category::Gaming,
        subcategory: "Accessories",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[Teens, Adults],
        occasions: &["birthday", "christmas"],
        interests: &["gaming", "tech", "music"],
        sentiment: Sentiment::Positive,
        popularity: 0.78,
        base_price: 4_200,
        description: "Surround-sound headset with a detachable boom mic",
    },
    CatalogEntry {
        name: "Mechanical Keyboard",
        category: Category::Gaming,
        subcategory: "Accessories",
        price_range: BudgetBucket::FiveToTenThousand,
        age_groups: &[Teens, Adults],
        occasions: &["birthday", "graduation", "promotion"],
        interests: &["gaming", "tech", "coding", "typing"],
        sentiment: Sentiment::Practical,
        popularity: 0.70,
        base_price: 5_500,
        description: "Hot-swappable mechanical keyboard with RGB backlight",
    },
    CatalogEntry {
        name: "Retro Handheld Console",
        category: Category::Gaming,
        subcategory: "Consoles",
        price_range: BudgetBucket::FiveToTenThousand,
        age_groups: &[Teens, Adults],
        occasions: &["birthday", "christmas", "just-because"],
        interests: &["gaming", "retro", "tech"],
        sentiment: Sentiment::Positive,
        popularity: 0.74,
        base_price: 6_500,
        description: "Pocket console preloaded with classic arcade titles",
    },
    CatalogEntry {
        name: "Curated Book Collection",
        category: Category::Books,
        subcategory: "Bundles",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[All],
        occasions: &["birthday", "graduation", "christmas", "just-because"],
        interests: &["reading", "books", "learning"],
        sentiment: Sentiment::Positive,
        popularity: 0.76,
        base_price: 2_000,
        description: "Handpicked books matched to their tastes",
    },
    CatalogEntry {
        name: "Online Masterclass Subscription",
        category: Category::Books,
        subcategory: "Courses",
        price_range: BudgetBucket::FiveToTenThousand,
        age_groups: &[Adults, Seniors],
        occasions: &["graduation", "promotion", "birthday"],
        interests: &["learning", "cooking", "writing", "photography"],
        sentiment: Sentiment::Practical,
        popularity: 0.65,
        base_price: 7_500,
        description: "A year of video lessons from world-class instructors",
    },
    CatalogEntry {
        name: "Premium Yoga Mat Set",
        category: Category::Fitness,
        subcategory: "Yoga",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[Adults, Seniors],
        occasions: &["birthday", "just-because", "christmas"],
        interests: &["fitness", "yoga", "wellness", "health"],
        sentiment: Sentiment::Practical,
        popularity: 0.83,
        base_price: 2_800,
        description: "Eco-friendly yoga mat with blocks, strap and carry bag",
    },
    CatalogEntry {
        name: "Resistance Band Training Kit",
        category: Category::Fitness,
        subcategory: "Home Workout",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[Teens, Adults],
        occasions: &["birthday", "just-because"],
        interests: &["fitness", "sports", "health", "gym"],
        sentiment: Sentiment::Practical,
        popularity: 0.72,
        base_price: 1_200,
        description: "Complete resistance training system for home workouts",
    },
    CatalogEntry {
        name: "Running Shoes Voucher",
        category: Category::Fitness,
        subcategory: "Footwear",
        price_range: BudgetBucket::FiveToTenThousand,
        age_groups: &[Teens, Adults],
        occasions: &["birthday", "christmas", "graduation"],
        interests: &["running", "fitness", "sports"],
        sentiment: Sentiment::Practical,
        popularity: 0.70,
        base_price: 6_000,
        description: "Voucher for a professional gait analysis and a new pair",
    },
    CatalogEntry {
        name: "Acoustic Ukulele Starter Kit",
        category: Category::Music,
        subcategory: "Instruments",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[Teens, Adults],
        occasions: &["birthday", "christmas", "just-because"],
        interests: &["music", "instrument", "singing", "creative"],
        sentiment: Sentiment::Positive,
        popularity: 0.69,
        base_price: 3_200,
        description: "Ukulele with tuner, gig bag and a beginner songbook",
    },
    CatalogEntry {
        name: "Vinyl Record Player",
        category: Category::Music,
        subcategory: "Audio",
        price_range: BudgetBucket::TenToTwentyFiveThousand,
        age_groups: &[Adults, Seniors],
        occasions: &["anniversary", "birthday", "christmas"],
        interests: &["music", "vintage", "retro"],
        sentiment: Sentiment::Luxury,
        popularity: 0.73,
        base_price: 12_000,
        description: "Belt-drive turntable with built-in speakers",
    },
    CatalogEntry {
        name: "Professional Art Supply Kit",
        category: Category::ArtsAndCrafts,
        subcategory: "Painting",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[All],
        occasions: &["birthday", "christmas", "graduation"],
        interests: &["art", "painting", "creative", "drawing"],
        sentiment: Sentiment::Positive,
        popularity: 0.71,
        base_price: 5_000,
        description: "Premium supplies for watercolour, acrylic and sketching",
    },
    CatalogEntry {
        name: "Pottery Starter Kit",
        category: Category::ArtsAndCrafts,
        subcategory: "Pottery",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[Teens, Adults],
        occasions: &["birthday", "just-because"],
        interests: &["art", "creative", "crafts", "pottery"],
        sentiment: Sentiment::Positive,
        popularity: 0.62,
        base_price: 3_200,
        description: "Air-dry clay, tools and glazes to start pottery at home",
    },
    CatalogEntry {
        name: "Gourmet Spice Collection",
        category: Category::Food,
        subcategory: "Pantry",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[Adults, Seniors],
        occasions: &["birthday", "christmas", "anniversary", "just-because"],
        interests: &["cooking", "food", "culinary"],
        sentiment: Sentiment::Positive,
        popularity: 0.68,
        base_price: 1_800,
        description: "Spices from around the world with recipe cards",
    },
    CatalogEntry {
        name: "Professional Knife Set",
        category: Category::Food,
        subcategory: "Kitchen Tools",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[Adults, Seniors],
        occasions: &["anniversary", "christmas", "promotion"],
        interests: &["cooking", "culinary", "food"],
        sentiment: Sentiment::Practical,
        popularity: 0.66,
        base_price: 4_000,
        description: "High-carbon steel kitchen knives in a wooden block",
    },
    CatalogEntry {
        name: "Chai Lover's Tea Sampler",
        category: Category::Food,
        subcategory: "Beverages",
        price_range: BudgetBucket::UnderOneThousand,
        age_groups: &[Adults, Seniors],
        occasions: &["birthday", "christmas", "just-because"],
        interests: &["tea", "food", "relaxation"],
        sentiment: Sentiment::Neutral,
        popularity: 0.60,
        base_price: 750,
        description: "Eight single-estate teas with a brass infuser",
    },
    CatalogEntry {
        name: "Travel Organizer Set",
        category: Category::Travel,
        subcategory: "Luggage",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[Adults],
        occasions: &["birthday", "graduation", "just-because"],
        interests: &["travel", "adventure", "organizing"],
        sentiment: Sentiment::Practical,
        popularity: 0.64,
        base_price: 2_200,
        description: "Packing cubes, toiletry bag and passport wallet",
    },
    CatalogEntry {
        name: "Instant Camera Travel Kit",
        category: Category::Travel,
        subcategory: "Photography",
        price_range: BudgetBucket::FiveToTenThousand,
        age_groups: &[Teens, Adults],
        occasions: &["birthday", "graduation", "valentines-day"],
        interests: &["travel", "photography", "adventure", "memories"],
        sentiment: Sentiment::Positive,
        popularity: 0.80,
        base_price: 8_000,
        description: "Instant camera with film packs for capturing adventures",
    },
    CatalogEntry {
        name: "Aromatherapy Diffuser Set",
        category: Category::Wellness,
        subcategory: "Relaxation",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[Adults, Seniors],
        occasions: &["birthday", "anniversary", "just-because", "christmas"],
        interests: &["wellness", "relaxation", "self-care", "health"],
        sentiment: Sentiment::Positive,
        popularity: 0.77,
        base_price: 3_200,
        description: "Essential oil diffuser with a collection of calming oils",
    },
    CatalogEntry {
        name: "Luxury Spa Day Package",
        category: Category::Wellness,
        subcategory: "Spa",
        price_range: BudgetBucket::TenToTwentyFiveThousand,
        age_groups: &[Adults, Seniors],
        occasions: &["anniversary", "valentines-day", "birthday"],
        interests: &["wellness", "relaxation", "self-care", "beauty"],
        sentiment: Sentiment::Luxury,
        popularity: 0.82,
        base_price: 11_000,
        description: "A full day of treatments at a five-star spa",
    },
    CatalogEntry {
        name: "Silk Scarf",
        category: Category::Fashion,
        subcategory: "Accessories",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[Adults, Seniors],
        occasions: &["birthday", "anniversary", "christmas"],
        interests: &["fashion", "style"],
        sentiment: Sentiment::Luxury,
        popularity: 0.60,
        base_price: 2_400,
        description: "Hand-printed pure silk scarf",
    },
    CatalogEntry {
        name: "Designer Leather Handbag",
        category: Category::Fashion,
        subcategory: "Bags",
        price_range: BudgetBucket::AboveTwentyFiveThousand,
        age_groups: &[Adults],
        occasions: &["anniversary", "valentines-day", "birthday"],
        interests: &["fashion", "style", "luxury"],
        sentiment: Sentiment::Luxury,
        popularity: 0.79,
        base_price: 28_000,
        description: "Full-grain leather handbag from a heritage label",
    },
    CatalogEntry {
        name: "Scented Candle Gift Set",
        category: Category::Home,
        subcategory: "Decor",
        price_range: BudgetBucket::UnderOneThousand,
        age_groups: &[All],
        occasions: &["birthday", "christmas", "just-because", "valentines-day"],
        interests: &["home", "relaxation", "decor", "wellness"],
        sentiment: Sentiment::Positive,
        popularity: 0.75,
        base_price: 900,
        description: "Three soy candles in seasonal fragrances",
    },
    CatalogEntry {
        name: "Indoor Herb Garden Kit",
        category: Category::Home,
        subcategory: "Gardening",
        price_range: BudgetBucket::UnderOneThousand,
        age_groups: &[All],
        occasions: &["birthday", "just-because", "christmas"],
        interests: &["gardening", "cooking", "plants"],
        sentiment: Sentiment::Practical,
        popularity: 0.58,
        base_price: 850,
        description: "Self-watering planter with basil, mint and coriander seeds",
    },
    CatalogEntry {
        name: "Personalized Photo Frame Collection",
        category: Category::Home,
        subcategory: "Personalized",
        price_range: BudgetBucket::OneToFiveThousand,
        age_groups: &[All],
        occasions: &["birthday", "anniversary", "valentines-day"],
        interests: &["memories", "photography", "family"],
        sentiment: Sentiment::Positive,
        popularity: 0.70,
        base_price: 1_500,
        description: "Custom frames for displaying favourite memories",
    },
    CatalogEntry {
        name: "Hot Air Balloon Experience",
        category: Category::Experiences,
        subcategory: "Adventure",
        price_range: BudgetBucket::AboveTwentyFiveThousand,
        age_groups: &[Adults],
        occasions: &["anniversary", "birthday", "valentines-day"],
        interests: &["adventure", "travel", "experiences"],
        sentiment: Sentiment::Luxury,
        popularity: 0.68,
        base_price: 30_000,
        description: "Sunrise balloon flight for two with breakfast",
    },
];

/// Returns the static catalog in its canonical order
pub fn catalog() -> &'static [CatalogEntry] {
    GIFT_CATALOG
}

/// Returned when no catalog entry survives the filter stage
pub struct FallbackGift {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub base_price: u32,
}

pub static FALLBACK_GIFTS: &[FallbackGift] = &[
    FallbackGift {
        name: "Personalized Gift Box",
        description: "Curated collection of items tailored to their interests",
        category: "Personalized",
        base_price: 2_500,
    },
    FallbackGift {
        name: "Experience Voucher",
        description: "Memorable experience they can enjoy and cherish",
        category: "Experiences",
        base_price: 3_000,
    },
    FallbackGift {
        name: "Premium Subscription Box",
        description: "Monthly delivery of items matching their hobbies",
        category: "Subscriptions",
        base_price: 1_500,
    },
    FallbackGift {
        name: "Artisan Craft Collection",
        description: "Handmade items supporting local artisans",
        category: "Handmade",
        base_price: 2_000,
    },
    FallbackGift {
        name: "Wellness Care Package",
        description: "Self-care items for relaxation and well-being",
        category: "Wellness",
        base_price: 2_800,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entries_are_well_formed() {
        for entry in catalog() {
            assert!((0.0..=1.0).contains(&entry.popularity), "{}", entry.name);
            assert!(!entry.age_groups.is_empty(), "{}", entry.name);
            assert!(!entry.occasions.is_empty(), "{}", entry.name);
            assert!(!entry.interests.is_empty(), "{}", entry.name);
            assert!(
                entry.price_range.range().contains(entry.base_price),
                "{} priced outside its bucket",
                entry.name
            );
        }
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<&str> = catalog().iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog().len());
    }

    #[test]
    fn test_occasions_and_interests_are_lower_case() {
        for entry in catalog() {
            for tag in entry.occasions.iter().chain(entry.interests.iter()) {
                assert_eq!(*tag, tag.to_lowercase());
            }
        }
    }

    #[test]
    fn test_every_bucket_has_stock() {
        for bucket in BudgetBucket::ALL {
            let range = bucket.range();
            assert!(
                catalog().iter().any(|e| range.contains(e.base_price)),
                "no entries for {}",
                bucket
            );
        }
    }
}
