use serde::{Deserialize, Serialize};

/// Incoming travel-plan request body.
///
/// `prompt` defaults to empty so a body without the field reaches the
/// handler's own validation instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct TravelPlanRequest {
    pub user_id: Option<String>,
    #[serde(default)]
    pub prompt: String,
}

/// Successful response carrying the Markdown itinerary.
#[derive(Debug, Serialize)]
pub struct TravelPlanResponse {
    pub message: String,
}
