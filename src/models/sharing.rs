use serde::{Deserialize, Serialize};

use super::Recommendation;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    pub gift: Recommendation,
    pub recipient_name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub message: String,
    pub whatsapp_link: String,
    pub email_link: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupGiftRequest {
    pub gift: Recommendation,
    pub recipient_name: String,
    pub participants: u32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupGiftResponse {
    pub participants: u32,
    pub amount_per_person: u32,
    pub message: String,
    pub whatsapp_link: String,
    pub email_link: String,
}
