//! Pastry HTTP handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use pastry_types::{PastryId, PastryRecord};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::response::Envelope;
use crate::state::AppState;

const MISSING_CREATE_BODY: &str = "New pastry needs to be included as JSON in the body.";
const MISSING_UPDATE_BODY: &str = "Pastry update needs to be included as JSON in the body.";

type JsonBody = Result<Json<Value>, JsonRejection>;

pub(crate) async fn list_pastries(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<PastryRecord>>>, ApiError> {
    let records = state.lock_store()?.list()?.to_vec();
    debug!(count = records.len(), "listed pastries");
    Ok(Json(Envelope::new(
        "Successfully retrieved the pastries.",
        records,
    )))
}

pub(crate) async fn create_pastry(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Envelope<PastryRecord>>), ApiError> {
    let payload = require_body(body, MISSING_CREATE_BODY)?;
    let input = state.schema().validate_create(&payload)?;
    let record = state.lock_store()?.create(input)?;

    info!(id = %record.id, name = %record.name, "pastry created");
    let message = format!("Successfully added {} to your pastries.", record.name);
    Ok((StatusCode::CREATED, Json(Envelope::new(message, record))))
}

pub(crate) async fn get_pastry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Envelope<PastryRecord>>, ApiError> {
    let id = parse_id(&raw_id)?;
    let record = state.lock_store()?.find_by_id(id)?.clone();
    Ok(Json(Envelope::new(
        format!("Successfully retrieved pastry with id: {id}."),
        record,
    )))
}

/// The id is looked up before the body is validated, so an unknown id wins
/// over a bad payload.
pub(crate) async fn update_pastry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: JsonBody,
) -> Result<Json<Envelope<PastryRecord>>, ApiError> {
    let id = parse_id(&raw_id)?;
    let mut store = state.lock_store()?;
    store.find_by_id(id)?;

    let payload = require_body(body, MISSING_UPDATE_BODY)?;
    let update = state.schema().validate_update(&payload)?;
    let record = store.update(id, update)?;
    drop(store);

    info!(%id, "pastry updated");
    Ok(Json(Envelope::new(
        format!("Pastry with id: {id} updated successfully!"),
        record,
    )))
}

pub(crate) async fn delete_pastry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Envelope<PastryRecord>>, ApiError> {
    let id = parse_id(&raw_id)?;
    let record = state.lock_store()?.delete(id)?;

    info!(%id, name = %record.name, "pastry deleted");
    Ok(Json(Envelope::new(
        format!("Pastry with id: {id} deleted successfully!"),
        record,
    )))
}

pub(crate) async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

pub(crate) async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{method} {}", uri.path()))
}

/// Reads the path id as a number, so `1`, `01`, `1.0` and `1e0` all name
/// pastry 1. Anything that is not a whole number of at least 1 matches nothing.
fn parse_id(raw: &str) -> Result<PastryId, ApiError> {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 1.0 && n.fract() == 0.0 => Ok(PastryId::new(n as u64)),
        _ => Err(ApiError::UnknownId(raw.to_string())),
    }
}

fn require_body(body: JsonBody, missing: &str) -> Result<Value, ApiError> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "unusable request body");
            Err(ApiError::BadRequest(missing.to_string()))
        }
    }
}
