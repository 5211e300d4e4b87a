use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use models::property;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// Wire shape for create/update bodies. An incoming `id` is decoded and
/// ignored; the path parameter is authoritative.
#[derive(Debug, Deserialize, Serialize)]
pub struct PropertyInput {
    #[serde(default)]
    pub id: Option<i64>,
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub size: f64,
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<property::Model>>, JsonApiError> {
    match state.properties.list().await {
        Ok(list) => {
            info!(count = list.len(), "list properties");
            Ok(Json(list))
        }
        Err(e) => Err(JsonApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "List Failed",
            Some(e.to_string()),
        )),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<PropertyInput>,
) -> Result<Json<property::Model>, JsonApiError> {
    info!(address = %input.address, price = input.price, size = input.size, "property_create_request");

    match state
        .properties
        .create(input.address, input.description, input.price, input.size)
        .await
    {
        Ok(m) => {
            info!(id = m.id, address = %m.address, "created property");
            Ok(Json(m))
        }
        Err(e) => {
            error!(err = %e, "create property failed");
            Err(JsonApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Create Failed",
                Some(e.to_string()),
            ))
        }
    }
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<property::Model>, StatusCode> {
    match state.properties.get(id).await {
        Ok(Some(m)) => Ok(Json(m)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<PropertyInput>,
) -> Result<Json<property::Model>, StatusCode> {
    match state
        .properties
        .update(id, input.address, input.description, input.price, input.size)
        .await
    {
        Ok(Some(m)) => {
            info!(id = m.id, "updated property");
            Ok(Json(m))
        }
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!(err = %e, "update property failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> StatusCode {
    match state.properties.delete(id).await {
        Ok(true) => {
            info!(id, "deleted property");
            StatusCode::OK
        }
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            error!(err = %e, "delete property failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
