use axum::Json;

use crate::{
    error::AppResult,
    models::{GroupGiftRequest, GroupGiftResponse, ShareRequest, ShareResponse},
    services::sharing,
};

/// Handler for sharing a gift idea with friends
pub async fn share(Json(request): Json<ShareRequest>) -> Json<ShareResponse> {
    Json(sharing::share_gift(&request.gift, &request.recipient_name))
}

/// Handler for splitting a gift between friends
pub async fn group_gift(
    Json(request): Json<GroupGiftRequest>,
) -> AppResult<Json<GroupGiftResponse>> {
    // Fewer than two participants is rejected with 400
    let response =
        sharing::group_gift(&request.gift, &request.recipient_name, request.participants)?;
    Ok(Json(response))
}
