//! SQLite InvoiceRepository implementation.

use sqlx::SqlitePool;

use super::helpers::map_err;
use crate::db::{DbError, DbResult, Invoice, InvoiceRepository};

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

/// SQLx-backed invoice repository.
pub struct SqliteInvoiceRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl InvoiceRepository for SqliteInvoiceRepository<'_> {
    async fn list(&self) -> DbResult<Vec<Invoice>> {
        sqlx::query_as::<_, Invoice>(&format!("SELECT {INVOICE_COLUMNS} FROM invoices"))
            .fetch_all(self.pool)
            .await
            .map_err(map_err)
    }

    async fn get(&self, id: i64) -> DbResult<Invoice> {
        sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_err)?
        .ok_or_else(|| DbError::not_found("Invoice", id.to_string()))
    }

    async fn ids_for_company(&self, comp_code: &str) -> DbResult<Vec<i64>> {
        sqlx::query_scalar("SELECT id FROM invoices WHERE comp_code = ?")
            .bind(comp_code)
            .fetch_all(self.pool)
            .await
            .map_err(map_err)
    }

    async fn create(&self, comp_code: &str, amt: f64) -> DbResult<Invoice> {
        // paid, add_date and paid_date come from the column defaults.
        sqlx::query_as::<_, Invoice>(&format!(
            "INSERT INTO invoices (comp_code, amt) VALUES (?, ?) \
             RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(comp_code)
        .bind(amt)
        .fetch_one(self.pool)
        .await
        .map_err(map_err)
    }

    async fn update_amount(&self, id: i64, amt: f64) -> DbResult<Invoice> {
        sqlx::query_as::<_, Invoice>(&format!(
            "UPDATE invoices SET amt = ? WHERE id = ? RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(amt)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_err)?
        .ok_or_else(|| DbError::not_found("Invoice", id.to_string()))
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Invoice", id.to_string()));
        }
        Ok(())
    }
}
