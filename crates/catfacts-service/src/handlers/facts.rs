//! Cat fact handlers.
//!
//! Wire names follow the public API: the random-fact and listing routes use the Spanish
//! `hecho_en`/`hecho_es` keys, the single-fact routes use `fact_en`/`fact_es`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use catfacts_core::{CatFact, FactId, FactPatch};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// A fact as shown by the random-fact and listing routes.
#[derive(Debug, Serialize)]
pub struct HechoResponse {
    /// Fact ID.
    pub id: FactId,
    /// English text.
    pub hecho_en: String,
    /// Spanish text.
    pub hecho_es: String,
}

impl From<CatFact> for HechoResponse {
    fn from(fact: CatFact) -> Self {
        Self {
            id: fact.id,
            hecho_en: fact.fact_en,
            hecho_es: fact.fact_es,
        }
    }
}

/// Manual creation request.
#[derive(Debug, Deserialize)]
pub struct CreateFactRequest {
    /// English text (required, non-empty).
    pub fact_en: Option<String>,
    /// Spanish text; translated from `fact_en` when absent or empty.
    pub fact_es: Option<String>,
}

/// Partial update request. Absent and empty fields are treated the same.
#[derive(Debug, Deserialize)]
pub struct UpdateFactRequest {
    /// Replacement English text.
    pub fact_en: Option<String>,
    /// Replacement Spanish text.
    pub fact_es: Option<String>,
}

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListFactsQuery {
    /// Maximum number of facts to return (default: 100).
    pub limit: Option<u32>,
    /// Number of facts to skip (default: 0).
    pub offset: Option<u32>,
}

/// Listing response.
#[derive(Debug, Serialize)]
pub struct ListFactsResponse {
    /// Number of stored facts, regardless of the window.
    pub total: u64,
    /// Requested page size.
    pub limit: u32,
    /// Number of facts skipped.
    pub offset: u32,
    /// Facts in the window, newest first.
    pub hechos: Vec<HechoResponse>,
}

/// Single delete response.
#[derive(Debug, Serialize)]
pub struct DeleteFactResponse {
    /// Confirmation message.
    pub mensaje: String,
    /// ID of the deleted fact.
    pub id: FactId,
}

/// Bulk delete response.
#[derive(Debug, Serialize)]
pub struct DeleteAllResponse {
    /// Confirmation message.
    pub mensaje: String,
    /// Number of facts removed.
    pub total_eliminados: u64,
}

/// Fetch a random fact, translate it and store it.
pub async fn random_fact(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HechoResponse>, ApiError> {
    let fact = state.facts.fetch_random_and_store().await?;
    Ok(Json(fact.into()))
}

/// Create a fact manually.
pub async fn create_fact(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreateFactRequest>,
) -> Result<(StatusCode, Json<CatFact>), ApiError> {
    let fact = state.facts.create_manual(body.fact_en, body.fact_es).await?;
    Ok((StatusCode::CREATED, Json(fact)))
}

/// List stored facts, newest first.
pub async fn list_facts(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ListFactsQuery>,
) -> Result<Json<ListFactsResponse>, ApiError> {
    let page = state.facts.list(query.limit, query.offset).await?;

    Ok(Json(ListFactsResponse {
        total: page.total,
        limit: page.limit,
        offset: page.offset,
        hechos: page.facts.into_iter().map(HechoResponse::from).collect(),
    }))
}

/// Get one fact by ID.
pub async fn get_fact(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<FactId>,
) -> Result<Json<CatFact>, ApiError> {
    Ok(Json(state.facts.get(id).await?))
}

/// Update one fact.
pub async fn update_fact(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<FactId>,
    ApiJson(body): ApiJson<UpdateFactRequest>,
) -> Result<Json<CatFact>, ApiError> {
    let patch = FactPatch::new(body.fact_en, body.fact_es);
    Ok(Json(state.facts.update(id, patch).await?))
}

/// Delete one fact.
pub async fn delete_fact(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<FactId>,
) -> Result<Json<DeleteFactResponse>, ApiError> {
    let id = state.facts.delete(id).await?;

    Ok(Json(DeleteFactResponse {
        mensaje: format!("Hecho con ID {id} eliminado exitosamente"),
        id,
    }))
}

/// Delete every fact.
pub async fn delete_all_facts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DeleteAllResponse>, ApiError> {
    let removed = state.facts.delete_all().await?;

    Ok(Json(DeleteAllResponse {
        mensaje: format!("Se eliminaron {removed} hechos exitosamente"),
        total_eliminados: removed,
    }))
}
