//! Invoice resource handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::api::error::ApiError;
use crate::api::handlers::companies::DeletedResponse;
use crate::api::state::AppState;
use crate::db::{Company, CompanyRepository, Database, DbError, Invoice, InvoiceRepository};

// =============================================================================
// DTOs
// =============================================================================

/// Invoice detail with the owning company nested in place of `comp_code`.
#[derive(Serialize)]
pub struct InvoiceDetail {
    pub id: i64,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

#[derive(Serialize)]
pub struct InvoicesResponse {
    pub invoices: Vec<Invoice>,
}

#[derive(Serialize)]
pub struct InvoiceResponse<T: Serialize> {
    pub invoice: T,
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub comp_code: String,
    pub amt: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub amt: f64,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /invoices - list all invoices with the full column set.
#[instrument(skip(state))]
pub async fn list_invoices<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<InvoicesResponse>, ApiError> {
    let invoices = state.db().invoices().list().await?;
    Ok(Json(InvoicesResponse { invoices }))
}

/// GET /invoices/{id} - fetch one invoice with its owning company.
///
/// Deletes do not cascade, so the company row can be gone; that surfaces
/// as an explicit orphaned-reference error instead of a crash.
#[instrument(skip(state))]
pub async fn get_invoice<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
) -> Result<Json<InvoiceResponse<InvoiceDetail>>, ApiError> {
    let invoice = state.db().invoices().get(id).await.map_err(|e| match e {
        DbError::NotFound { .. } => ApiError::not_found("Invoice not found"),
        other => ApiError::from(other),
    })?;

    let company = state
        .db()
        .companies()
        .get(&invoice.comp_code)
        .await
        .map_err(|e| match e {
            DbError::NotFound { .. } => ApiError::from(DbError::OrphanedReference {
                entity_type: "Invoice".to_string(),
                id: id.to_string(),
                missing: format!("company '{}'", invoice.comp_code),
            }),
            other => ApiError::from(other),
        })?;

    Ok(Json(InvoiceResponse {
        invoice: InvoiceDetail {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        },
    }))
}

/// POST /invoices - create an invoice for an existing company.
///
/// The existence check and the insert are separate statements; a company
/// delete can land between them.
#[instrument(skip(state))]
pub async fn create_invoice<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceResponse<Invoice>>), ApiError> {
    state
        .db()
        .companies()
        .get(&req.comp_code)
        .await
        .map_err(|e| match e {
            DbError::NotFound { .. } => ApiError::not_found("Company code is not valid"),
            other => ApiError::from(other),
        })?;

    let invoice = state.db().invoices().create(&req.comp_code, req.amt).await?;
    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// PATCH /invoices/{id} - update the amount only. `paid` and the dates
/// are not part of this surface.
#[instrument(skip(state))]
pub async fn update_invoice<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateInvoiceRequest>,
) -> Result<Json<InvoiceResponse<Invoice>>, ApiError> {
    let invoice = state
        .db()
        .invoices()
        .update_amount(id, req.amt)
        .await
        .map_err(|e| match e {
            DbError::NotFound { .. } => ApiError::not_found("Invoice not found"),
            other => ApiError::from(other),
        })?;

    Ok(Json(InvoiceResponse { invoice }))
}

/// DELETE /invoices/{id} - delete an invoice.
#[instrument(skip(state))]
pub async fn delete_invoice<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    state.db().invoices().delete(id).await.map_err(|e| match e {
        DbError::NotFound { .. } => ApiError::not_found("Invoice not found"),
        other => ApiError::from(other),
    })?;

    Ok(Json(DeletedResponse::deleted()))
}
