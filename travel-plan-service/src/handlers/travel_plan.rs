use crate::models::{TravelPlanRequest, TravelPlanResponse};
use crate::services::itinerary;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Generates a budget travel itinerary for the submitted prompt.
///
/// The raw model output is reformatted into a Markdown itinerary before it
/// is returned; see [`itinerary::format_itinerary`].
pub async fn travel_plan(
    State(state): State<AppState>,
    payload: Result<Json<TravelPlanRequest>, JsonRejection>,
) -> Result<Json<TravelPlanResponse>, AppError> {
    // Any body that did not deserialize counts as a missing payload
    let Json(request) =
        payload.map_err(|_| AppError::BadRequest(anyhow::anyhow!("No JSON payload provided")))?;

    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Input prompt is missing in the request"
        )));
    }

    let user_id = request.user_id.as_deref().unwrap_or("-");
    tracing::info!(
        user_id = %user_id,
        prompt_len = prompt.len(),
        "Generating travel plan"
    );

    let params = GenerationParams {
        temperature: Some(state.config.models.temperature),
        ..GenerationParams::default()
    };
    let full_prompt = itinerary::compose_prompt(prompt);

    let response = state.text_provider.generate(&full_prompt, &params).await?;

    let text = response
        .text
        .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("Model returned no text")))?;

    tracing::info!(
        user_id = %user_id,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Generated travel plan"
    );

    Ok(Json(TravelPlanResponse {
        message: itinerary::format_itinerary(&text),
    }))
}
