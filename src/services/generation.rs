//! Recommendations from an external text generator
//!
//! The generator is asked for a JSON array of gift ideas. Its output is free
//! text, so the array is located by pattern and parsed opportunistically.

use regex::Regex;
use std::sync::LazyLock;

use crate::{
    error::{AppError, AppResult},
    models::{GeneratedGift, GiftRequest, Recommendation},
    services::{enrichment, providers::TextGenerator},
};

static JSON_ARRAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[\s\S]*\]").unwrap());
static PRICE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"₹?[\d,]*\d").unwrap());

const DEFAULT_PRICE: u32 = 2_000;

/// Structured prompt describing the recipient
pub fn format_prompt(request: &GiftRequest) -> String {
    let interests = request.interest_list().join(", ");

    format!(
        r#"You are an AI gift recommendation assistant.
The recipient details are:

Age: {age}
Relationship: {relationship}
Occasion: {occasion}
Budget: {budget}
Interests: {interests}

Suggest 5 unique and personalized gift ideas (not from a predefined list or catalog).
Each idea should include:
1. The gift idea name
2. A short explanation why it fits this recipient
3. Make sure it respects the budget and occasion.

Format your response as a JSON array with objects containing:
- name: string
- description: string
- reason: string
- category: string
- estimatedPrice: string

Example format:
[
  {{
    "name": "Custom Photo Album",
    "description": "A personalized photo album with their favorite memories",
    "reason": "Perfect for preserving precious moments and shows thoughtfulness",
    "category": "Personalized",
    "estimatedPrice": "₹1,500"
  }}
]"#,
        age = request.age,
        relationship = request.relationship,
        occasion = request.occasion,
        budget = request.budget,
        interests = interests,
    )
}

/// Pulls the first-to-last bracketed span out of generated text and parses it
pub fn extract_gifts(text: &str) -> AppResult<Vec<GeneratedGift>> {
    let matched = JSON_ARRAY
        .find(text)
        .ok_or_else(|| AppError::ExternalApi("No JSON array in generated text".to_string()))?;

    Ok(serde_json::from_str(matched.as_str())?)
}

/// First rupee amount in a price string, ignoring grouping commas
pub fn extract_numeric_price(price: &str) -> u32 {
    PRICE
        .find(price)
        .and_then(|m| m.as_str().replace(['₹', ','], "").parse().ok())
        .unwrap_or(DEFAULT_PRICE)
}

/// Numeric price a generated gift will be shown with
fn gift_price(gift: &GeneratedGift) -> u32 {
    gift.estimated_price
        .as_deref()
        .map(extract_numeric_price)
        .unwrap_or(DEFAULT_PRICE)
}

/// Keeps the generated gifts whose price lies inside the request's budget
pub fn within_budget(gifts: Vec<GeneratedGift>, request: &GiftRequest) -> Vec<GeneratedGift> {
    let budget = request.budget_bucket().range();
    gifts
        .into_iter()
        .filter(|gift| budget.contains(gift_price(gift)))
        .collect()
}

/// Prompts the generator and parses its answer
///
/// Fails when the generator is unavailable or errors, or when its text holds
/// no parsable gift array with at least one idea inside the budget.
pub async fn generate_gifts(
    generator: &dyn TextGenerator,
    request: &GiftRequest,
) -> AppResult<Vec<GeneratedGift>> {
    if !generator.is_available().await {
        return Err(AppError::ExternalApi(format!(
            "{} is not available",
            generator.name()
        )));
    }

    let text = generator.generate(&format_prompt(request)).await?;
    let parsed = extract_gifts(&text)?;
    let total = parsed.len();
    let gifts = within_budget(parsed, request);

    if gifts.is_empty() {
        return Err(AppError::ExternalApi(format!(
            "Generator returned no gifts within {}",
            request.budget_bucket()
        )));
    }

    tracing::info!(
        provider = generator.name(),
        gifts = gifts.len(),
        dropped = total - gifts.len(),
        "Parsed generated gift ideas"
    );

    Ok(gifts)
}

/// Converts generated ideas into cards, keeping at most `limit`
pub fn into_recommendations(
    gifts: Vec<GeneratedGift>,
    request: &GiftRequest,
    limit: usize,
) -> Vec<Recommendation> {
    let tags = request.interest_list();

    gifts
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, gift)| {
            let (amazon_link, flipkart_link) = enrichment::shopping_links(&gift.name);
            let numeric_price = gift_price(&gift);

            Recommendation {
                id: format!("ai-gift-{}", index + 1),
                description: gift.description.unwrap_or_else(|| {
                    format!(
                        "A wonderful {} perfect for your {}",
                        gift.name.to_lowercase(),
                        request.relationship
                    )
                }),
                price: gift
                    .estimated_price
                    .unwrap_or_else(|| enrichment::format_inr(DEFAULT_PRICE)),
                category: gift.category.unwrap_or_else(|| "General".to_string()),
                reason: gift.reason.unwrap_or_else(|| {
                    format!(
                        "AI-recommended based on their interests in {} and the {} occasion",
                        request.interests, request.occasion
                    )
                }),
                image: format!(
                    "https://images.unsplash.com/400x300/?{}",
                    urlencoding::encode(&gift.name)
                ),
                amazon_link,
                flipkart_link,
                numeric_price,
                relevance_score: (0.95 - 0.1 * index as f64).max(0.0),
                tags: tags.clone(),
                name: gift.name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockTextGenerator;

    fn request() -> GiftRequest {
        GiftRequest {
            recipient_name: "Nisha".to_string(),
            age: 29,
            relationship: "best-friend".to_string(),
            occasion: "graduation".to_string(),
            budget: "₹1,000 - ₹5,000".to_string(),
            interests: "travel, photography".to_string(),
        }
    }

    const GENERATED: &str = r#"Here are some ideas:
[
  {"name": "Travel Journal", "description": "Leather journal", "reason": "For trip notes", "category": "Stationery", "estimatedPrice": "₹1,800"},
  {"name": "Camera Strap"}
]
Enjoy!"#;

    #[test]
    fn test_prompt_contains_request_details() {
        let prompt = format_prompt(&request());
        assert!(prompt.contains("Age: 29"));
        assert!(prompt.contains("Relationship: best-friend"));
        assert!(prompt.contains("Budget: ₹1,000 - ₹5,000"));
        assert!(prompt.contains("Interests: travel, photography"));
        assert!(prompt.contains("\"estimatedPrice\": \"₹1,500\""));
    }

    #[test]
    fn test_extract_gifts_from_chatty_text() {
        let gifts = extract_gifts(GENERATED).unwrap();
        assert_eq!(gifts.len(), 2);
        assert_eq!(gifts[0].estimated_price.as_deref(), Some("₹1,800"));
        assert!(gifts[1].description.is_none());
    }

    #[test]
    fn test_extract_gifts_failures() {
        assert!(extract_gifts("I cannot help with that").is_err());
        assert!(extract_gifts("[not json]").is_err());
    }

    #[test]
    fn test_extract_numeric_price() {
        assert_eq!(extract_numeric_price("₹1,800"), 1_800);
        assert_eq!(extract_numeric_price("around ₹12,500 total"), 12_500);
        assert_eq!(extract_numeric_price("3500"), 3_500);
        assert_eq!(extract_numeric_price("priceless"), DEFAULT_PRICE);
    }

    #[test]
    fn test_into_recommendations_fills_defaults() {
        let gifts = extract_gifts(GENERATED).unwrap();
        let cards = into_recommendations(gifts, &request(), 4);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "ai-gift-1");
        assert_eq!(cards[0].numeric_price, 1_800);
        assert_eq!(cards[0].relevance_score, 0.95);

        let strap = &cards[1];
        assert_eq!(strap.price, "₹2,000");
        assert_eq!(strap.numeric_price, 2_000);
        assert_eq!(strap.category, "General");
        assert!(strap.description.contains("camera strap"));
        assert!(strap.reason.contains("graduation"));
        assert!(strap.amazon_link.ends_with("Camera%20Strap"));
        assert_eq!(strap.tags, vec!["travel", "photography"]);
    }

    #[test]
    fn test_into_recommendations_respects_limit() {
        let gifts: Vec<GeneratedGift> = (0..6)
            .map(|i| GeneratedGift {
                name: format!("Idea {}", i),
                description: None,
                reason: None,
                category: None,
                estimated_price: None,
            })
            .collect();
        assert_eq!(into_recommendations(gifts, &request(), 4).len(), 4);
    }

    #[test]
    fn test_unavailable_generator_is_not_called() {
        let mut generator = MockTextGenerator::new();
        generator.expect_is_available().returning(|| false);
        generator.expect_generate().never();
        generator.expect_name().return_const("mock");

        let result = tokio_test::block_on(generate_gifts(&generator, &request()));
        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_generate_gifts_parses_output() {
        let mut generator = MockTextGenerator::new();
        generator.expect_is_available().returning(|| true);
        generator
            .expect_generate()
            .withf(|prompt| prompt.contains("Occasion: graduation"))
            .returning(|_| Ok(GENERATED.to_string()));
        generator.expect_name().return_const("mock");

        let gifts = generate_gifts(&generator, &request()).await.unwrap();
        assert_eq!(gifts[0].name, "Travel Journal");
    }

    #[test]
    fn test_within_budget_drops_out_of_range_ideas() {
        let gifts = extract_gifts(
            r#"[
                {"name": "Diamond Necklace", "estimatedPrice": "₹40,000"},
                {"name": "Travel Journal", "estimatedPrice": "₹1,800"},
                {"name": "Keychain", "estimatedPrice": "₹300"},
                {"name": "Mystery Box"}
            ]"#,
        )
        .unwrap();

        let kept: Vec<String> = within_budget(gifts, &request())
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(kept, vec!["Travel Journal", "Mystery Box"]);
    }

    #[tokio::test]
    async fn test_only_out_of_budget_ideas_is_an_error() {
        let mut generator = MockTextGenerator::new();
        generator.expect_is_available().returning(|| true);
        generator.expect_generate().returning(|_| {
            Ok(r#"[{"name": "Diamond Necklace", "estimatedPrice": "₹40,000"}]"#.to_string())
        });
        generator.expect_name().return_const("mock");

        let result = generate_gifts(&generator, &request()).await;
        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_empty_array_is_an_error() {
        let mut generator = MockTextGenerator::new();
        generator.expect_is_available().returning(|| true);
        generator
            .expect_generate()
            .returning(|_| Ok("[]".to_string()));
        generator.expect_name().return_const("mock");

        assert!(generate_gifts(&generator, &request()).await.is_err());
    }
}
