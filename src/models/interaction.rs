use serde::{Deserialize, Serialize};

/// Synthetic peer group used to simulate collaborative ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSegment {
    TechEnthusiast,
    FashionLover,
    WellnessSeeker,
}

impl UserSegment {
    pub const ALL: [UserSegment; 3] = [
        UserSegment::TechEnthusiast,
        UserSegment::FashionLover,
        UserSegment::WellnessSeeker,
    ];

    /// Identifier accepted as `userId` on feedback
    pub fn key(&self) -> &'static str {
        match self {
            UserSegment::TechEnthusiast => "tech_enthusiast",
            UserSegment::FashionLover => "fashion_lover",
            UserSegment::WellnessSeeker => "wellness_seeker",
        }
    }

    /// Substring looked for in the request's interests
    pub fn keyword(&self) -> &'static str {
        match self {
            UserSegment::TechEnthusiast => "tech",
            UserSegment::FashionLover => "fashion",
            UserSegment::WellnessSeeker => "wellness",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// One recorded rating inside a segment's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub item_name: String,
    /// 1 to 5
    pub rating: u8,
    pub purchased: bool,
}

impl Interaction {
    pub fn new(item_name: impl Into<String>, rating: u8, purchased: bool) -> Self {
        Self {
            item_name: item_name.into(),
            rating: rating.clamp(1, 5),
            purchased,
        }
    }
}

/// Like/dislike submitted from a recommendation card
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub gift_id: String,
    /// Display name of the gift; preferred over the id when recording
    #[serde(default)]
    pub gift_name: Option<String>,
    pub liked: bool,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl FeedbackRequest {
    pub fn item_name(&self) -> &str {
        self.gift_name.as_deref().unwrap_or(&self.gift_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_from_key() {
        assert_eq!(
            UserSegment::from_key("Tech_Enthusiast"),
            Some(UserSegment::TechEnthusiast)
        );
        assert_eq!(UserSegment::from_key("guest"), None);
    }

    #[test]
    fn test_interaction_rating_is_clamped() {
        assert_eq!(Interaction::new("Yoga Mat", 9, false).rating, 5);
        assert_eq!(Interaction::new("Yoga Mat", 0, false).rating, 1);
    }

    #[test]
    fn test_feedback_prefers_gift_name() {
        let json = r#"{"giftId": "ai-hybrid-1", "giftName": "Yoga Mat", "liked": true}"#;
        let feedback: FeedbackRequest = serde_json::from_str(json).unwrap();
        assert_eq!(feedback.item_name(), "Yoga Mat");
        assert!(feedback.user_id.is_none());

        let json = r#"{"giftId": "ai-hybrid-2", "liked": false, "userId": "fashion_lover"}"#;
        let feedback: FeedbackRequest = serde_json::from_str(json).unwrap();
        assert_eq!(feedback.item_name(), "ai-hybrid-2");
    }
}
