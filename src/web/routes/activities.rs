use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::models::Activity;
use crate::registry::{ActivityRegistry, RegistryError};

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: Option<String>,
}

pub async fn activities_handler(
    State(registry): State<ActivityRegistry>,
) -> Json<BTreeMap<String, Activity>> {
    Json(registry.list_activities())
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let Some(email) = query.email else {
        return Err(missing_email());
    };

    registry
        .signup(&activity_name, &email)
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            error_response(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let Some(email) = query.email else {
        return Err(missing_email());
    };

    registry
        .unregister(&activity_name, &email)
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
            error_response(e)
        })
}

// The email parameter is the handler's problem, not the registry's.
fn missing_email() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": "email query parameter is required" })),
    )
}

fn error_response(err: RegistryError) -> (StatusCode, Json<Value>) {
    let status = match err {
        RegistryError::UnknownActivity => StatusCode::NOT_FOUND,
        RegistryError::AlreadyRegistered
        | RegistryError::NotRegistered
        | RegistryError::ActivityFull => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "detail": err.to_string() })))
}
