use axum::body::Bytes;
use axum::extract::State;
use axum::http::{
	HeaderMap, Method, StatusCode,
	header::{self, HeaderName},
};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use time::UtcOffset;
use tower_http::cors::{Any, CorsLayer};

use revos_domain::windows;
use revos_service::GoalsResponse;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/goals/today", post(todays_goals))
		.layer(cors_layer())
		.with_state(state)
}

// Browser dashboards call this API directly, so pre-flight requests must see the
// store-client headers they send along.
fn cors_layer() -> CorsLayer {
	CorsLayer::new()
		.allow_origin(Any)
		.allow_methods([Method::GET, Method::POST, Method::OPTIONS])
		.allow_headers([
			header::AUTHORIZATION,
			header::CONTENT_TYPE,
			HeaderName::from_static("x-client-info"),
			HeaderName::from_static("apikey"),
		])
}

async fn health() -> StatusCode {
	StatusCode::OK
}

#[derive(Debug, Default, Deserialize)]
struct GoalsRequest {
	utc_offset: Option<String>,
}

async fn todays_goals(
	State(state): State<AppState>,
	headers: HeaderMap,
	body: Bytes,
) -> Result<Json<GoalsResponse>, ApiError> {
	let token = bearer_token(&headers).ok_or_else(|| {
		json_error(StatusCode::UNAUTHORIZED, "Missing Authorization header.")
	})?;
	// The body is optional; an absent or empty one means "UTC, no overrides".
	let request = if body.is_empty() {
		GoalsRequest::default()
	} else {
		serde_json::from_slice::<GoalsRequest>(&body)
			.map_err(|err| json_error(StatusCode::BAD_REQUEST, format!("Invalid request body: {err}.")))?
	};
	let offset = match request.utc_offset.as_deref() {
		Some(raw) => windows::parse_utc_offset(raw).ok_or_else(|| {
			json_error(StatusCode::BAD_REQUEST, format!("Invalid utc_offset {raw:?}."))
		})?,
		None => UtcOffset::UTC,
	};
	let response = state.service.todays_goals(token, offset).await;

	Ok(Json(response))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
	let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
	let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

	if token.is_empty() { None } else { Some(token) }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> ApiError {
	ApiError { status, message: message.into() }
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error: self.message };

		(self.status, Json(body)).into_response()
	}
}
