use axum::{extract::State, Json};
use rand::{rngs::SmallRng, SeedableRng};

use super::AppState;
use crate::models::{GiftRequest, Recommendation};

/// Handler for the recommendations endpoint
///
/// Always answers 200 with one to four gifts; collaborator failures are
/// absorbed by the engine.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<GiftRequest>,
) -> Json<Vec<Recommendation>> {
    tracing::info!(
        age = request.age,
        relationship = %request.relationship,
        occasion = %request.occasion,
        budget = %request.budget,
        "Recommendation request"
    );

    // Unseeded here; engine tests pass a seeded SmallRng
    let mut rng = SmallRng::from_os_rng();
    let recommendations = state
        .engine
        .generate_recommendations(&request, &mut rng)
        .await;

    Json(recommendations)
}
