//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing handler logic. Methods
//! return `impl Future + Send` so handlers generic over [`Database`] stay
//! usable from multi-threaded servers.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Company, CompanyIndustry, CompanySummary, Industry, IndustryCompanies, Invoice,
             NewCompany},
};

/// Repository for Company operations.
pub trait CompanyRepository {
    /// Get all companies as `(code, name)` summaries.
    fn list(&self) -> impl Future<Output = DbResult<Vec<CompanySummary>>> + Send;

    /// Get a company by code.
    fn get(&self, code: &str) -> impl Future<Output = DbResult<Company>> + Send;

    /// Create a new company. Fails with `AlreadyExists` on a duplicate code.
    fn create(&self, company: &NewCompany) -> impl Future<Output = DbResult<Company>> + Send;

    /// Update a company's name and description. The code is immutable.
    fn update(
        &self,
        code: &str,
        name: &str,
        description: Option<&str>,
    ) -> impl Future<Output = DbResult<Company>> + Send;

    /// Delete a company by code. Does not cascade to invoices or
    /// industry associations.
    fn delete(&self, code: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for Invoice operations.
pub trait InvoiceRepository {
    /// Get all invoices with the full column set.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Invoice>>> + Send;

    /// Get an invoice by id.
    fn get(&self, id: i64) -> impl Future<Output = DbResult<Invoice>> + Send;

    /// Get the ids of all invoices billed to a company.
    fn ids_for_company(&self, comp_code: &str) -> impl Future<Output = DbResult<Vec<i64>>> + Send;

    /// Create an invoice. `paid`, `add_date` and `paid_date` are
    /// database-assigned defaults.
    fn create(&self, comp_code: &str, amt: f64) -> impl Future<Output = DbResult<Invoice>> + Send;

    /// Update an invoice's amount only.
    fn update_amount(&self, id: i64, amt: f64) -> impl Future<Output = DbResult<Invoice>> + Send;

    /// Delete an invoice by id.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for Industry operations.
pub trait IndustryRepository {
    /// Get all industries, each with the codes of its associated companies.
    fn list_with_companies(&self)
    -> impl Future<Output = DbResult<Vec<IndustryCompanies>>> + Send;

    /// Get an industry by code.
    fn get(&self, code: &str) -> impl Future<Output = DbResult<Industry>> + Send;

    /// Create a new industry. Fails with `AlreadyExists` on a duplicate code.
    fn create(&self, code: &str, industry: &str)
    -> impl Future<Output = DbResult<Industry>> + Send;

    /// Associate a company with an industry. Duplicate associations are
    /// not rejected here; the join table carries no uniqueness constraint.
    fn associate(
        &self,
        comp_code: &str,
        ind_code: &str,
    ) -> impl Future<Output = DbResult<CompanyIndustry>> + Send;
}

/// Combined database interface.
///
/// Repositories are exposed via associated types, avoiding dynamic dispatch.
pub trait Database: Send + Sync {
    type Companies<'a>: CompanyRepository + Send + Sync
    where
        Self: 'a;
    type Invoices<'a>: InvoiceRepository + Send + Sync
    where
        Self: 'a;
    type Industries<'a>: IndustryRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the company repository.
    fn companies(&self) -> Self::Companies<'_>;

    /// Get the invoice repository.
    fn invoices(&self) -> Self::Invoices<'_>;

    /// Get the industry repository.
    fn industries(&self) -> Self::Industries<'_>;
}
