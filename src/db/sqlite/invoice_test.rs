//! Repository tests for invoices.

use crate::db::{
    CompanyRepository, Database, DbError, InvoiceRepository, NewCompany, SqliteDatabase,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db.companies()
        .create(&NewCompany {
            code: "ibm".to_string(),
            name: "IBM".to_string(),
            description: Some("Big blue.".to_string()),
        })
        .await
        .expect("Create company should succeed");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_id_and_defaults() {
    let db = setup_db().await;

    let invoice = db
        .invoices()
        .create("ibm", 49.99)
        .await
        .expect("Create should succeed");

    assert!(invoice.id > 0);
    assert_eq!(invoice.comp_code, "ibm");
    assert_eq!(invoice.amt, 49.99);
    assert!(!invoice.paid);
    assert_eq!(invoice.paid_date, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_missing_invoice_is_not_found() {
    let db = setup_db().await;

    let err = db.invoices().get(999).await.expect_err("Get should fail");
    assert!(matches!(err, DbError::NotFound { .. }), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn ids_for_company_is_empty_without_invoices() {
    let db = setup_db().await;

    let ids = db
        .invoices()
        .ids_for_company("ibm")
        .await
        .expect("Query should succeed");
    assert!(ids.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn ids_for_company_returns_only_that_company() {
    let db = setup_db().await;
    db.companies()
        .create(&NewCompany {
            code: "apple".to_string(),
            name: "Apple".to_string(),
            description: None,
        })
        .await
        .expect("Create company should succeed");

    let first = db.invoices().create("ibm", 100.0).await.expect("Create should succeed");
    let second = db.invoices().create("ibm", 200.0).await.expect("Create should succeed");
    db.invoices().create("apple", 300.0).await.expect("Create should succeed");

    let ids = db
        .invoices()
        .ids_for_company("ibm")
        .await
        .expect("Query should succeed");
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_amount_changes_nothing_else() {
    let db = setup_db().await;
    let invoice = db.invoices().create("ibm", 100.0).await.expect("Create should succeed");

    let updated = db
        .invoices()
        .update_amount(invoice.id, 250.5)
        .await
        .expect("Update should succeed");

    assert_eq!(updated.id, invoice.id);
    assert_eq!(updated.amt, 250.5);
    assert_eq!(updated.paid, invoice.paid);
    assert_eq!(updated.add_date, invoice.add_date);
    assert_eq!(updated.paid_date, invoice.paid_date);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_amount_missing_invoice_is_not_found() {
    let db = setup_db().await;

    let err = db
        .invoices()
        .update_amount(999, 10.0)
        .await
        .expect_err("Update should fail");
    assert!(matches!(err, DbError::NotFound { .. }), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_row_and_second_delete_is_not_found() {
    let db = setup_db().await;
    let invoice = db.invoices().create("ibm", 100.0).await.expect("Create should succeed");

    db.invoices().delete(invoice.id).await.expect("Delete should succeed");

    let err = db
        .invoices()
        .delete(invoice.id)
        .await
        .expect_err("Second delete should fail");
    assert!(matches!(err, DbError::NotFound { .. }), "got {err:?}");
}
