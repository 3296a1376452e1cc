//! SQLite IndustryRepository implementation.

use std::collections::HashMap;

use sqlx::{FromRow, SqlitePool};

use super::helpers::{map_err, map_insert_err};
use crate::db::{
    CompanyIndustry, DbError, DbResult, Industry, IndustryCompanies, IndustryRepository,
};

/// One row of the industries left-join; `comp_code` is null for
/// industries with no associated companies.
#[derive(FromRow)]
struct AssociationRow {
    code: String,
    industry: String,
    comp_code: Option<String>,
}

/// SQLx-backed industry repository.
pub struct SqliteIndustryRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl IndustryRepository for SqliteIndustryRepository<'_> {
    async fn list_with_companies(&self) -> DbResult<Vec<IndustryCompanies>> {
        let rows = sqlx::query_as::<_, AssociationRow>(
            "SELECT i.code, i.industry, ci.comp_code \
             FROM industries AS i \
             LEFT JOIN companies_industries AS ci ON i.code = ci.ind_code \
             LEFT JOIN companies AS c ON c.code = ci.comp_code",
        )
        .fetch_all(self.pool)
        .await
        .map_err(map_err)?;

        // Single accumulation pass keyed by industry code, preserving
        // first-seen row order.
        let mut industries: Vec<IndustryCompanies> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for row in rows {
            let idx = *index.entry(row.code.clone()).or_insert_with(|| {
                industries.push(IndustryCompanies {
                    code: row.code.clone(),
                    industry: row.industry.clone(),
                    companies: Vec::new(),
                });
                industries.len() - 1
            });
            if let Some(comp_code) = row.comp_code {
                industries[idx].companies.push(comp_code);
            }
        }
        Ok(industries)
    }

    async fn get(&self, code: &str) -> DbResult<Industry> {
        sqlx::query_as::<_, Industry>("SELECT code, industry FROM industries WHERE code = ?")
            .bind(code)
            .fetch_optional(self.pool)
            .await
            .map_err(map_err)?
            .ok_or_else(|| DbError::not_found("Industry", code))
    }

    async fn create(&self, code: &str, industry: &str) -> DbResult<Industry> {
        sqlx::query_as::<_, Industry>(
            "INSERT INTO industries (code, industry) VALUES (?, ?) \
             RETURNING code, industry",
        )
        .bind(code)
        .bind(industry)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_insert_err(e, "Industry", code))
    }

    async fn associate(&self, comp_code: &str, ind_code: &str) -> DbResult<CompanyIndustry> {
        sqlx::query_as::<_, CompanyIndustry>(
            "INSERT INTO companies_industries (comp_code, ind_code) VALUES (?, ?) \
             RETURNING comp_code, ind_code",
        )
        .bind(comp_code)
        .bind(ind_code)
        .fetch_one(self.pool)
        .await
        .map_err(map_err)
    }
}
