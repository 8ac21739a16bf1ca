//! Turns ranked candidates into display-ready recommendations

use rand::Rng;

use crate::models::{GiftRequest, IntentAnalysis, Recommendation, ScoredCandidate, Sentiment};

const JITTER_MIN: f64 = 0.8;
const JITTER_MAX: f64 = 1.2;

const AMAZON_SEARCH: &str = "https://www.amazon.in/s?k=";
const FLIPKART_SEARCH: &str = "https://www.flipkart.com/search?q=";

/// Formats whole rupees with Indian digit grouping, e.g. `₹1,23,456`
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("₹{},{}", groups.join(","), last_three)
}

/// Applies a uniform ±20% jitter to a base price
pub fn jitter_price<R: Rng>(base_price: u32, rng: &mut R) -> u32 {
    let factor = rng.random_range(JITTER_MIN..=JITTER_MAX);
    (f64::from(base_price) * factor).round() as u32
}

/// Amazon and Flipkart search URLs for a product name
pub fn shopping_links(product_name: &str) -> (String, String) {
    let query = urlencoding::encode(product_name);
    (
        format!("{}{}", AMAZON_SEARCH, query),
        format!("{}{}", FLIPKART_SEARCH, query),
    )
}

fn recipient(request: &GiftRequest) -> String {
    let name = request.recipient_name.trim();
    if name.is_empty() {
        format!("your {}", request.relationship)
    } else {
        name.to_string()
    }
}

fn tone_phrase(tone: &str) -> &'static str {
    match tone {
        "enthusiastic" => "sure to get an excited reaction",
        "warm" => "a warm, heartfelt touch",
        _ => "a considered, meaningful choice",
    }
}

/// Card description built from the catalog text and the detected tone
pub fn describe(candidate: &ScoredCandidate<'_>, intent: &IntentAnalysis) -> String {
    format!(
        "{}, {}.",
        candidate.entry.description,
        tone_phrase(&intent.emotional_tone)
    )
}

/// "Why this fits" text keyed by the entry's sentiment
pub fn reason(candidate: &ScoredCandidate<'_>, request: &GiftRequest) -> String {
    let who = recipient(request);
    let occasion = request.occasion.trim();
    let interests = request.interests.trim();

    match candidate.entry.sentiment {
        Sentiment::Positive => format!(
            "A joyful pick for {}'s {} that plays to their love of {}.",
            who, occasion, interests
        ),
        Sentiment::Practical => format!(
            "Something {} will use every day after the {}, matched to their interest in {}.",
            who, occasion, interests
        ),
        Sentiment::Luxury => format!(
            "An indulgent treat to make this {} special for {}, who enjoys {}.",
            occasion, who, interests
        ),
        Sentiment::Neutral => format!(
            "A versatile {} gift for a {}-year-old {} who likes {}.",
            occasion, request.age, request.relationship, interests
        ),
    }
}

/// Builds the externally visible recommendations for ranked candidates
///
/// Ids are `ai-hybrid-{n}` counted from 1 in rank order.
pub fn enrich<R: Rng>(
    ranked: &[ScoredCandidate<'_>],
    request: &GiftRequest,
    intent: &IntentAnalysis,
    rng: &mut R,
) -> Vec<Recommendation> {
    ranked
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            let entry = candidate.entry;
            let numeric_price = jitter_price(entry.base_price, rng);
            let (amazon_link, flipkart_link) = shopping_links(entry.name);

            let mut tags: Vec<String> = entry.interests.iter().map(|t| t.to_string()).collect();
            tags.push(entry.sentiment.as_str().to_string());

            Recommendation {
                id: format!("ai-hybrid-{}", index + 1),
                name: entry.name.to_string(),
                description: describe(candidate, intent),
                price: format_inr(numeric_price),
                category: entry.category.name().to_string(),
                reason: reason(candidate, request),
                image: entry.category.emoji().to_string(),
                amazon_link,
                flipkart_link,
                numeric_price,
                relevance_score: candidate.relevance_score,
                tags,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::catalog;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn request() -> GiftRequest {
        GiftRequest {
            recipient_name: "Kabir".to_string(),
            age: 24,
            relationship: "friend".to_string(),
            occasion: "birthday".to_string(),
            budget: "₹1,000 - ₹5,000".to_string(),
            interests: "music, fitness".to_string(),
        }
    }

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(1_000), "₹1,000");
        assert_eq!(format_inr(25_000), "₹25,000");
        assert_eq!(format_inr(123_456), "₹1,23,456");
        assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn test_jitter_stays_within_twenty_percent() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..1_000 {
            let price = jitter_price(2_500, &mut rng);
            assert!((2_000..=3_000).contains(&price), "{}", price);
        }
    }

    #[test]
    fn test_shopping_links_encode_name() {
        let (amazon, flipkart) = shopping_links("Chai Lover's Tea Sampler & More");
        assert_eq!(
            amazon,
            "https://www.amazon.in/s?k=Chai%20Lover%27s%20Tea%20Sampler%20%26%20More"
        );
        assert!(flipkart.starts_with("https://www.flipkart.com/search?q=Chai%20Lover"));
    }

    #[test]
    fn test_reason_mentions_occasion_for_every_sentiment() {
        let req = request();
        for entry in catalog() {
            let candidate = ScoredCandidate::new(entry, 0.5, 0.5);
            let text = reason(&candidate, &req);
            assert!(text.contains("birthday"), "{}", text);
        }
    }

    #[test]
    fn test_reason_falls_back_to_relationship() {
        let mut req = request();
        req.recipient_name = "  ".to_string();
        let candidate = ScoredCandidate::new(&catalog()[0], 0.5, 0.5);
        assert!(reason(&candidate, &req).contains("your friend"));
    }

    #[test]
    fn test_enrich_builds_cards() {
        let req = request();
        let intent = IntentAnalysis::fallback();
        let entries = catalog();
        let ranked = vec![
            ScoredCandidate::new(&entries[2], 0.8, 0.6),
            ScoredCandidate::new(&entries[0], 0.7, 0.5),
        ];
        let mut rng = SmallRng::seed_from_u64(11);

        let cards = enrich(&ranked, &req, &intent, &mut rng);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "ai-hybrid-1");
        assert_eq!(cards[1].id, "ai-hybrid-2");
        assert_eq!(cards[0].name, entries[2].name);
        assert_eq!(cards[0].image, entries[2].category.emoji());
        assert_eq!(cards[0].price, format_inr(cards[0].numeric_price));
        assert!(cards[0].description.contains("excited reaction"));
        assert!(cards[0].tags.contains(&"music".to_string()));
        for card in &cards {
            let encoded = urlencoding::encode(&card.name).into_owned();
            assert!(card.amazon_link.contains(&encoded));
            assert!(card.flipkart_link.contains(&encoded));
        }
    }
}
