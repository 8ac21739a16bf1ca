use crate::{
    error::AppResult,
    models::{GiftRequest, IntentAnalysis},
    services::providers::IntentClassifier,
};

/// Sentiment confidence above which a positive request reads as enthusiastic
const ENTHUSIASM_THRESHOLD: f64 = 0.9;

/// Analyses the free-text parts of a request
///
/// Delegates to the classifier when one is configured. A missing classifier
/// or any classifier error yields [`IntentAnalysis::fallback`]; this function
/// never fails.
pub async fn analyze_intent(
    classifier: Option<&dyn IntentClassifier>,
    request: &GiftRequest,
) -> IntentAnalysis {
    let Some(classifier) = classifier else {
        return IntentAnalysis::fallback();
    };

    match classify(classifier, &request.intent_text()).await {
        Ok(analysis) => {
            tracing::info!(
                provider = classifier.name(),
                sentiment = %analysis.sentiment_label,
                intent = %analysis.primary_intent,
                confidence = analysis.intent_confidence,
                "Intent analysed"
            );
            analysis
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                provider = classifier.name(),
                "Intent classification failed, using fallback"
            );
            IntentAnalysis::fallback()
        }
    }
}

async fn classify(classifier: &dyn IntentClassifier, text: &str) -> AppResult<IntentAnalysis> {
    let sentiment = classifier.sentiment(text).await?;
    let intent = classifier.classify_intent(text).await?;

    let sentiment_label = sentiment.label.to_uppercase();
    let emotional_tone = emotional_tone(&sentiment_label, sentiment.score).to_string();

    Ok(IntentAnalysis {
        sentiment_label,
        sentiment_score: sentiment.score,
        primary_intent: intent.label.to_lowercase(),
        intent_confidence: intent.score,
        emotional_tone,
    })
}

fn emotional_tone(sentiment_label: &str, score: f64) -> &'static str {
    match sentiment_label {
        "POSITIVE" if score > ENTHUSIASM_THRESHOLD => "enthusiastic",
        "POSITIVE" => "warm",
        _ => "thoughtful",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::providers::{LabelScore, MockIntentClassifier};

    fn request() -> GiftRequest {
        GiftRequest {
            recipient_name: "Meera".to_string(),
            age: 34,
            relationship: "spouse".to_string(),
            occasion: "anniversary".to_string(),
            budget: "Above ₹25,000".to_string(),
            interests: "spa, jewellery".to_string(),
        }
    }

    fn label(label: &str, score: f64) -> LabelScore {
        LabelScore {
            label: label.to_string(),
            score,
        }
    }

    #[tokio::test]
    async fn test_missing_classifier_uses_fallback() {
        let analysis = analyze_intent(None, &request()).await;
        assert_eq!(analysis, IntentAnalysis::fallback());
    }

    #[tokio::test]
    async fn test_classifier_error_uses_fallback() {
        let mut classifier = MockIntentClassifier::new();
        classifier
            .expect_sentiment()
            .returning(|_| Err(AppError::ExternalApi("model loading".to_string())));
        classifier.expect_classify_intent().never();
        classifier.expect_name().return_const("mock");

        let analysis = analyze_intent(Some(&classifier as &dyn IntentClassifier), &request()).await;
        assert_eq!(analysis.sentiment_label, "POSITIVE");
        assert_eq!(analysis.sentiment_score, 0.8);
        assert_eq!(analysis.primary_intent, "practical");
        assert_eq!(analysis.intent_confidence, 0.8);
        assert_eq!(analysis.emotional_tone, "enthusiastic");
    }

    #[tokio::test]
    async fn test_zero_shot_error_uses_fallback() {
        let mut classifier = MockIntentClassifier::new();
        classifier
            .expect_sentiment()
            .returning(|_| Ok(label("POSITIVE", 0.99)));
        classifier
            .expect_classify_intent()
            .returning(|_| Err(AppError::Internal("timeout".to_string())));
        classifier.expect_name().return_const("mock");

        let analysis = analyze_intent(Some(&classifier as &dyn IntentClassifier), &request()).await;
        assert_eq!(analysis, IntentAnalysis::fallback());
    }

    #[tokio::test]
    async fn test_classifier_result_is_used() {
        let mut classifier = MockIntentClassifier::new();
        classifier
            .expect_sentiment()
            .withf(|text| text.contains("spa, jewellery") && text.contains("anniversary"))
            .returning(|_| Ok(label("positive", 0.75)));
        classifier
            .expect_classify_intent()
            .returning(|_| Ok(label("Luxury", 0.66)));
        classifier.expect_name().return_const("mock");

        let analysis = analyze_intent(Some(&classifier as &dyn IntentClassifier), &request()).await;
        assert_eq!(analysis.sentiment_label, "POSITIVE");
        assert_eq!(analysis.sentiment_score, 0.75);
        assert_eq!(analysis.primary_intent, "luxury");
        assert_eq!(analysis.intent_confidence, 0.66);
        assert_eq!(analysis.emotional_tone, "warm");
    }

    #[test]
    fn test_emotional_tone() {
        assert_eq!(emotional_tone("POSITIVE", 0.95), "enthusiastic");
        assert_eq!(emotional_tone("POSITIVE", 0.9), "warm");
        assert_eq!(emotional_tone("NEGATIVE", 0.99), "thoughtful");
    }
}
