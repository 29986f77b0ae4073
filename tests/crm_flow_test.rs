//! Integration tests for the cross-entity operations: lead conversion,
//! invoice creation with the customer-history cascade, custom invoices,
//! and payment recording.

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;

use crm_web_server::error::AppError;
use crm_web_server::services::{invoice_service, lead_service, payment_service};
use crm_web_server::store::JsonStore;

fn open_store(dir: &TempDir) -> Arc<JsonStore> {
    Arc::new(JsonStore::new(dir.path()))
}

#[tokio::test]
async fn converting_a_lead_creates_a_customer_and_marks_it_won() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store
        .save(
            "leads",
            &json!({"leads": [{
                "id": 1,
                "name": "A",
                "company": "B",
                "status": "new",
                "notes": "met at expo"
            }]}),
        )
        .await
        .unwrap();
    store.save("customers", &json!({"customers": []})).await.unwrap();

    let customer = lead_service::convert_to_customer(&store, 1).await.unwrap();

    assert_eq!(customer.id, 1);
    assert_eq!(customer.name, "A");
    assert_eq!(customer.company, "B");
    assert_eq!(customer.total_invoices, 0);
    assert_eq!(customer.total_amount, 0.0);
    assert!(customer.invoices.is_empty());
    assert_eq!(
        customer.notes,
        "Converted from lead. Original notes: met at expo"
    );

    // The lead is kept, flipped to "won"
    let leads = lead_service::list(&store).await.unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].status, "won");
}

#[tokio::test]
async fn converting_an_unknown_lead_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.save("leads", &json!({"leads": []})).await.unwrap();
    store.save("customers", &json!({"customers": []})).await.unwrap();

    let err = lead_service::convert_to_customer(&store, 7).await.unwrap_err();
    assert!(matches!(err, AppError::LeadNotFound));
}

#[tokio::test]
async fn invoice_for_a_customer_updates_its_cached_history() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.save("invoices", &json!({"invoices": []})).await.unwrap();
    store
        .save(
            "customers",
            &json!({"customers": [{
                "id": 7,
                "name": "John",
                "company": "Globex",
                "totalInvoices": 0,
                "totalAmount": 0,
                "invoices": []
            }]}),
        )
        .await
        .unwrap();

    let request = serde_json::from_value(json!({
        "customer_id": 7,
        "date": "2026-08-07",
        "due_date": "2026-09-06",
        "total": 250.0
    }))
    .unwrap();

    let invoice = invoice_service::add(&store, request).await.unwrap();

    assert_eq!(invoice.id, 1);
    assert_eq!(invoice.number, "INV-0001");
    assert_eq!(invoice.customer, "Globex - John");
    assert_eq!(invoice.customer_id, Some(7));
    assert_eq!(invoice.status, "draft");

    // Second phase: the customer's history and caches were recomputed
    let customers = crm_web_server::services::customer_service::list(&store)
        .await
        .unwrap();
    assert_eq!(customers[0].total_invoices, 1);
    assert_eq!(customers[0].total_amount, 250.0);
    assert_eq!(customers[0].invoices[0].number, "INV-0001");
    assert_eq!(customers[0].invoices[0].amount, 250.0);
}

#[tokio::test]
async fn invoice_with_the_custom_sentinel_touches_no_customer_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.save("invoices", &json!({"invoices": []})).await.unwrap();

    let request = serde_json::from_value(json!({
        "customer_id": "custom",
        "customer_name": "Walk-in",
        "total": 99.0
    }))
    .unwrap();

    let invoice = invoice_service::add(&store, request).await.unwrap();

    assert_eq!(invoice.customer_id, None);
    assert_eq!(invoice.customer, "Walk-in");

    // No customers document was ever created
    assert!(!dir.path().join("customers.json").exists());
}

#[tokio::test]
async fn invoice_for_an_unknown_customer_stays_unlinked() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.save("invoices", &json!({"invoices": []})).await.unwrap();
    store.save("customers", &json!({"customers": []})).await.unwrap();

    let request = serde_json::from_value(json!({
        "customer_id": 99,
        "customer_name": "Fallback Label",
        "total": 10.0
    }))
    .unwrap();

    let invoice = invoice_service::add(&store, request).await.unwrap();

    assert_eq!(invoice.customer_id, None);
    assert_eq!(invoice.customer, "Fallback Label");
}

#[tokio::test]
async fn invoice_numbers_derive_from_collection_length() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.save("invoices", &json!({"invoices": []})).await.unwrap();

    for _ in 0..2 {
        let request = serde_json::from_value(json!({"customer_id": "custom"})).unwrap();
        invoice_service::add(&store, request).await.unwrap();
    }
    invoice_service::delete(&store, 1).await.unwrap();

    // One invoice remains, so the next number restarts from the count - the
    // historical numbering contract, ids keep counting up regardless
    let request = serde_json::from_value(json!({"customer_id": "custom"})).unwrap();
    let third = invoice_service::add(&store, request).await.unwrap();

    assert_eq!(third.id, 3);
    assert_eq!(third.number, "INV-0002");
}

#[tokio::test]
async fn custom_invoice_creates_a_brand_new_customer() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.save("invoices", &json!({"invoices": []})).await.unwrap();
    store.save("customers", &json!({"customers": []})).await.unwrap();

    let request = serde_json::from_value(json!({
        "custom_details": {
            "companyName": "Initech",
            "contactPerson": "Peter",
            "email": "peter@initech.example",
            "trnNumber": "TRN-12345"
        },
        "date": "2026-08-07",
        "status": "sent",
        "total": 480.0
    }))
    .unwrap();

    let invoice = invoice_service::add_custom(&store, request).await.unwrap();

    assert_eq!(invoice.number, "INV-CUST-0001");
    assert_eq!(invoice.customer, "Initech - Peter");
    assert_eq!(invoice.customer_id, None);
    assert!(invoice.custom_details.is_some());

    let customers = crm_web_server::services::customer_service::list(&store)
        .await
        .unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].name, "Peter");
    assert_eq!(customers[0].company, "Initech");
    assert_eq!(customers[0].trn.as_deref(), Some("TRN-12345"));
    assert_eq!(customers[0].notes, "Added from custom invoice");
    assert_eq!(customers[0].total_invoices, 1);
    assert_eq!(customers[0].total_amount, 480.0);
    assert_eq!(customers[0].invoices[0].number, "INV-CUST-0001");
}

#[tokio::test]
async fn custom_invoice_can_opt_out_of_customer_creation() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.save("invoices", &json!({"invoices": []})).await.unwrap();

    let request = serde_json::from_value(json!({
        "custom_details": {"companyName": "Initech", "contactPerson": "Peter"},
        "add_as_customer": false,
        "total": 480.0
    }))
    .unwrap();

    invoice_service::add_custom(&store, request).await.unwrap();

    assert!(!dir.path().join("customers.json").exists());
}

#[tokio::test]
async fn recording_a_payment_marks_the_invoice_paid() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store
        .save(
            "invoices",
            &json!({"invoices": [{
                "id": 5,
                "number": "INV-0005",
                "status": "sent",
                "total": 525.0
            }]}),
        )
        .await
        .unwrap();
    store.save("payments", &json!({"payments": []})).await.unwrap();

    let request = serde_json::from_value(json!({
        "invoice_id": 5,
        "invoice_number": "INV-0005",
        "amount": 525.0,
        "reference": "TRX-4471"
    }))
    .unwrap();

    let payment = payment_service::add(&store, request).await.unwrap();

    assert_eq!(payment.id, 1);
    assert_eq!(payment.method, "bank_transfer");

    let invoices = invoice_service::list(&store).await.unwrap();
    assert_eq!(invoices[0].status, "paid");
}

#[tokio::test]
async fn payment_against_an_unknown_invoice_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.save("invoices", &json!({"invoices": []})).await.unwrap();
    store.save("payments", &json!({"payments": []})).await.unwrap();

    let request = serde_json::from_value(json!({"invoice_id": 99, "amount": 10.0})).unwrap();

    // The cascade is best-effort; the payment is the primary fact
    let payment = payment_service::add(&store, request).await.unwrap();
    assert_eq!(payment.invoice_id, 99);

    let payments = payment_service::list(&store).await.unwrap();
    assert_eq!(payments.len(), 1);
}

#[tokio::test]
async fn partial_payment_still_flips_the_status() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store
        .save(
            "invoices",
            &json!({"invoices": [{"id": 1, "number": "INV-0001", "status": "sent", "total": 100.0}]}),
        )
        .await
        .unwrap();
    store.save("payments", &json!({"payments": []})).await.unwrap();

    let request = serde_json::from_value(json!({"invoice_id": 1, "amount": 25.0})).unwrap();
    payment_service::add(&store, request).await.unwrap();

    // No reconciliation against the invoice total
    let invoices = invoice_service::list(&store).await.unwrap();
    assert_eq!(invoices[0].status, "paid");
}
