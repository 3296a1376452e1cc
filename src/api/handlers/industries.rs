//! Industry resource handlers.

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
    CompanyRepository, Database, DbError, Industry, IndustryCompanies, IndustryRepository,
};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize)]
pub struct IndustriesResponse {
    pub industries: Vec<IndustryCompanies>,
}

#[derive(Serialize)]
pub struct IndustryResponse {
    pub industry: Industry,
}

#[derive(Debug, Deserialize)]
pub struct CreateIndustryRequest {
    pub code: String,
    pub industry: String,
}

#[derive(Debug, Deserialize)]
pub struct AssociateCompanyRequest {
    pub comp_code: String,
}

/// Body of a successful association.
#[derive(Serialize)]
pub struct IndustryCompanyResponse {
    pub industry_company: IndustryCompany,
}

#[derive(Serialize)]
pub struct IndustryCompany {
    pub code: String,
    pub industry: String,
    pub comp_code: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /industries - list all industries with their associated company
/// codes. Industries with no associations come back with `companies: []`.
#[instrument(skip(state))]
pub async fn list_industries<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<IndustriesResponse>, ApiError> {
    let industries = state.db().industries().list_with_companies().await?;
    Ok(Json(IndustriesResponse { industries }))
}

/// POST /industries - create an industry. Duplicate codes are a 409.
#[instrument(skip(state))]
pub async fn create_industry<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateIndustryRequest>,
) -> Result<(StatusCode, Json<IndustryResponse>), ApiError> {
    let industry = state
        .db()
        .industries()
        .create(&req.code, &req.industry)
        .await
        .map_err(|e| match e {
            DbError::AlreadyExists { .. } => ApiError::conflict("Industry code already exists"),
            other => ApiError::from(other),
        })?;

    Ok((StatusCode::CREATED, Json(IndustryResponse { industry })))
}

/// POST /industries/{code} - associate a company with an industry.
///
/// Repeated calls create repeated join rows; the table carries no
/// uniqueness constraint.
#[instrument(skip(state))]
pub async fn associate_company<D: Database>(
    State(state): State<AppState<D>>,
    Path(code): Path<String>,
    Json(req): Json<AssociateCompanyRequest>,
) -> Result<(StatusCode, Json<IndustryCompanyResponse>), ApiError> {
    let industry = state.db().industries().get(&code).await.map_err(|e| match e {
        DbError::NotFound { .. } => ApiError::not_found("Industry code is not valid"),
        other => ApiError::from(other),
    })?;

    state
        .db()
        .companies()
        .get(&req.comp_code)
        .await
        .map_err(|e| match e {
            DbError::NotFound { .. } => ApiError::not_found("Company code is not valid"),
            other => ApiError::from(other),
        })?;

    let association = state
        .db()
        .industries()
        .associate(&req.comp_code, &code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(IndustryCompanyResponse {
            industry_company: IndustryCompany {
                code: industry.code,
                industry: industry.industry,
                comp_code: association.comp_code,
            },
        }),
    ))
}
