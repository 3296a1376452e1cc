//! Company resource handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::db::{
    Company, CompanyRepository, CompanySummary, Database, DbError, InvoiceRepository, NewCompany,
};

// =============================================================================
// DTOs
// =============================================================================

/// Company detail with the ids of its invoices.
#[derive(Serialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// Invoice ids billed to this company; empty when there are none.
    pub invoices: Vec<i64>,
}

#[derive(Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<CompanySummary>,
}

#[derive(Serialize)]
pub struct CompanyResponse<T: Serialize> {
    pub company: T,
}

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    pub name: String,
    pub description: Option<String>,
}

/// `{"status": "deleted"}` body shared by the delete handlers.
#[derive(Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
}

impl DeletedResponse {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /companies - list all companies as `{code, name}` pairs.
#[instrument(skip(state))]
pub async fn list_companies<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<CompaniesResponse>, ApiError> {
    let companies = state.db().companies().list().await?;
    Ok(Json(CompaniesResponse { companies }))
}

/// GET /companies/{code} - fetch one company with its invoice ids.
#[instrument(skip(state))]
pub async fn get_company<D: Database>(
    State(state): State<AppState<D>>,
    Path(code): Path<String>,
) -> Result<Json<CompanyResponse<CompanyDetail>>, ApiError> {
    let company = state.db().companies().get(&code).await.map_err(|e| match e {
        DbError::NotFound { .. } => ApiError::not_found("Company not found"),
        other => ApiError::from(other),
    })?;

    let invoices = state.db().invoices().ids_for_company(&code).await?;

    Ok(Json(CompanyResponse {
        company: CompanyDetail {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices,
        },
    }))
}

/// POST /companies - create a company. Duplicate codes are a 409.
#[instrument(skip(state))]
pub async fn create_company<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse<Company>>), ApiError> {
    let new_company = NewCompany {
        code: req.code,
        name: req.name,
        description: req.description,
    };
    let company = state.db().companies().create(&new_company).await?;
    Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// PATCH /companies/{code} - update name and description; code is immutable.
#[instrument(skip(state))]
pub async fn update_company<D: Database>(
    State(state): State<AppState<D>>,
    Path(code): Path<String>,
    Json(req): Json<UpdateCompanyRequest>,
) -> Result<Json<CompanyResponse<Company>>, ApiError> {
    let company = state
        .db()
        .companies()
        .update(&code, &req.name, req.description.as_deref())
        .await
        .map_err(|e| match e {
            DbError::NotFound { .. } => ApiError::not_found("Company not found"),
            other => ApiError::from(other),
        })?;

    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/{code} - delete a company. Does not cascade.
#[instrument(skip(state))]
pub async fn delete_company<D: Database>(
    State(state): State<AppState<D>>,
    Path(code): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.db().companies().delete(&code).await.map_err(|e| match e {
        DbError::NotFound { .. } => ApiError::not_found("Company not found"),
        other => ApiError::from(other),
    })?;

    Ok(Json(DeletedResponse::deleted()))
}
