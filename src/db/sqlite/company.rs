//! SQLite CompanyRepository implementation.

use sqlx::SqlitePool;

use super::helpers::{map_err, map_insert_err};
use crate::db::{Company, CompanyRepository, CompanySummary, DbError, DbResult, NewCompany};

/// SQLx-backed company repository.
pub struct SqliteCompanyRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl CompanyRepository for SqliteCompanyRepository<'_> {
    async fn list(&self) -> DbResult<Vec<CompanySummary>> {
        sqlx::query_as::<_, CompanySummary>("SELECT code, name FROM companies")
            .fetch_all(self.pool)
            .await
            .map_err(map_err)
    }

    async fn get(&self, code: &str) -> DbResult<Company> {
        sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = ?",
        )
        .bind(code)
        .fetch_optional(self.pool)
        .await
        .map_err(map_err)?
        .ok_or_else(|| DbError::not_found("Company", code))
    }

    async fn create(&self, company: &NewCompany) -> DbResult<Company> {
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies (code, name, description) \
             VALUES (?, ?, ?) \
             RETURNING code, name, description",
        )
        .bind(&company.code)
        .bind(&company.name)
        .bind(&company.description)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_insert_err(e, "Company", &company.code))
    }

    async fn update(&self, code: &str, name: &str, description: Option<&str>) -> DbResult<Company> {
        sqlx::query_as::<_, Company>(
            "UPDATE companies SET name = ?, description = ? \
             WHERE code = ? \
             RETURNING code, name, description",
        )
        .bind(name)
        .bind(description)
        .bind(code)
        .fetch_optional(self.pool)
        .await
        .map_err(map_err)?
        .ok_or_else(|| DbError::not_found("Company", code))
    }

    async fn delete(&self, code: &str) -> DbResult<()> {
        // Rows-affected instead of a separate existence check keeps the
        // not-found detection atomic with the delete.
        let result = sqlx::query("DELETE FROM companies WHERE code = ?")
            .bind(code)
            .execute(self.pool)
            .await
            .map_err(map_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Company", code));
        }
        Ok(())
    }
}
