//! Domain models for the bookkeeping database.
//!
//! These models are storage-agnostic and represent the entities used
//! throughout the application.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A company that can be billed. `code` is the caller-assigned primary key
/// and is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Abbreviated company row returned by list queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

/// Input for creating a company.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// An invoice issued to a company.
///
/// `id` and the dates are database-assigned; `paid` defaults to false and
/// `paid_date` stays null until the invoice is settled. `comp_code` must
/// reference an existing company at creation time, but deletes do not
/// cascade, so an invoice can outlive its company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i64,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// An industry companies can be associated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Industry {
    pub code: String,
    pub industry: String,
}

/// An industry together with the codes of its associated companies.
/// Industries with no associations carry an empty vec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryCompanies {
    pub code: String,
    pub industry: String,
    pub companies: Vec<String>,
}

/// A company-industry association (join row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CompanyIndustry {
    pub comp_code: String,
    pub ind_code: String,
}
