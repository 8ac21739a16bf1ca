use serde::{Deserialize, Serialize};

use super::BudgetBucket;

/// Recipient details collected by the gift finder form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GiftRequest {
    #[serde(default)]
    pub recipient_name: String,
    pub age: u32,
    pub relationship: String,
    pub occasion: String,
    pub budget: String,
    /// Comma-separated free text, e.g. "music, fitness"
    #[serde(default)]
    pub interests: String,
}

/// Age bucket shared by requests and catalog entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Teens,
    Adults,
    Seniors,
    /// Sentinel matching every age
    All,
}

impl AgeGroup {
    pub fn for_age(age: u32) -> Self {
        match age {
            0..=17 => AgeGroup::Teens,
            18..=60 => AgeGroup::Adults,
            _ => AgeGroup::Seniors,
        }
    }
}

impl GiftRequest {
    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::for_age(self.age)
    }

    pub fn budget_bucket(&self) -> BudgetBucket {
        BudgetBucket::resolve(&self.budget)
    }

    /// Lower-cased interest tokens split on commas and whitespace
    pub fn interest_tokens(&self) -> Vec<String> {
        self.interests
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Interests as the user typed them, split on commas only
    pub fn interest_list(&self) -> Vec<String> {
        self.interests
            .split(',')
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect()
    }

    pub fn occasion_key(&self) -> String {
        self.occasion.trim().to_lowercase()
    }

    /// Text handed to the intent classifier
    pub fn intent_text(&self) -> String {
        format!(
            "Gift for {} who loves {} for {}",
            self.relationship, self.interests, self.occasion
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(age: u32, interests: &str) -> GiftRequest {
        GiftRequest {
            recipient_name: "Asha".to_string(),
            age,
            relationship: "friend".to_string(),
            occasion: "Birthday".to_string(),
            budget: "₹1,000 - ₹5,000".to_string(),
            interests: interests.to_string(),
        }
    }

    #[test]
    fn test_age_group_boundaries() {
        assert_eq!(AgeGroup::for_age(17), AgeGroup::Teens);
        assert_eq!(AgeGroup::for_age(18), AgeGroup::Adults);
        assert_eq!(AgeGroup::for_age(60), AgeGroup::Adults);
        assert_eq!(AgeGroup::for_age(61), AgeGroup::Seniors);
    }

    #[test]
    fn test_interest_tokens_split_on_commas_and_whitespace() {
        let req = request(24, "Music,  Fitness, board games");
        assert_eq!(
            req.interest_tokens(),
            vec!["music", "fitness", "board", "games"]
        );
    }

    #[test]
    fn test_interest_list_keeps_phrases() {
        let req = request(24, "Music,  board games,");
        assert_eq!(req.interest_list(), vec!["Music", "board games"]);
    }

    #[test]
    fn test_occasion_key_is_lower_cased() {
        assert_eq!(request(30, "").occasion_key(), "birthday");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "recipientName": "Ravi",
            "age": 65,
            "relationship": "parent",
            "occasion": "anniversary",
            "budget": "Above ₹25,000",
            "interests": "gardening"
        }"#;

        let req: GiftRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.recipient_name, "Ravi");
        assert_eq!(req.age_group(), AgeGroup::Seniors);
        assert_eq!(req.budget_bucket(), BudgetBucket::AboveTwentyFiveThousand);
    }
}
