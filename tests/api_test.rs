//! Integration tests for the HTTP surface: routing, status codes, error
//! bodies, and the contact form.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};
use tempfile::TempDir;

use crm_web_server::services::email_service::Mailer;
use crm_web_server::store::JsonStore;
use crm_web_server::{AppState, build_router};

fn test_server(dir: &TempDir) -> (TestServer, Arc<JsonStore>) {
    let store = Arc::new(JsonStore::new(dir.path()));
    let state = AppState {
        store: Arc::clone(&store),
        mailer: Arc::new(Mailer::disabled()),
    };

    (
        TestServer::new(build_router(state)).expect("router builds"),
        store,
    )
}

#[tokio::test]
async fn health_reports_healthy() {
    let dir = tempfile::tempdir().unwrap();
    let (server, _store) = test_server(&dir);

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "accessible");
}

#[tokio::test]
async fn lead_crud_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let (server, store) = test_server(&dir);
    store.save("leads", &json!({"leads": []})).await.unwrap();

    // Create
    let response = server
        .post("/api/leads/add")
        .json(&json!({"name": "Jane Smith", "company": "Acme LLC"}))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "new");
    assert_eq!(created["email"], "");

    // List
    let response = server.get("/api/leads").await;
    response.assert_status_ok();
    let leads: Value = response.json();
    assert_eq!(leads.as_array().unwrap().len(), 1);

    // Partial edit
    let response = server
        .post("/api/leads/edit")
        .json(&json!({"id": 1, "status": "contacted"}))
        .await;
    response.assert_status_ok();
    let edited: Value = response.json();
    assert_eq!(edited["status"], "contacted");
    assert_eq!(edited["name"], "Jane Smith");

    // Delete, then delete again
    let response = server.delete("/api/leads/1/delete").await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let response = server.delete("/api/leads/1/delete").await;
    response.assert_status_not_found();
    let error: Value = response.json();
    assert_eq!(error["error"]["code"], "lead_not_found");
}

#[tokio::test]
async fn editing_an_unknown_lead_echoes_the_payload() {
    let dir = tempfile::tempdir().unwrap();
    let (server, store) = test_server(&dir);
    store.save("leads", &json!({"leads": []})).await.unwrap();

    let payload = json!({"id": 42, "notes": "never lands"});
    let response = server.post("/api/leads/edit").json(&payload).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, payload);
}

#[tokio::test]
async fn unknown_fields_are_rejected_at_the_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let (server, store) = test_server(&dir);
    store.save("leads", &json!({"leads": []})).await.unwrap();

    let response = server
        .post("/api/leads/add")
        .json(&json!({"name": "Jane", "company": "Acme", "bogus": true}))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn invoice_summary_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let (server, store) = test_server(&dir);
    store.save("invoices", &json!({"invoices": []})).await.unwrap();

    server
        .post("/api/invoices/add")
        .json(&json!({"customer_id": "custom", "total": 100.0}))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
    server
        .post("/api/invoices/add")
        .json(&json!({"customer_id": "custom", "total": 50.0}))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    // Pay the first one
    server.post("/api/invoices/1/mark-paid").await.assert_status_ok();

    let response = server.get("/api/invoices/summary").await;
    response.assert_status_ok();

    let summary: Value = response.json();
    assert_eq!(summary["totalSales"], 150.0);
    assert_eq!(summary["totalReceivables"], 50.0);
    assert_eq!(summary["totalCashCollected"], 100.0);
}

#[tokio::test]
async fn marking_an_unknown_invoice_is_still_acknowledged() {
    let dir = tempfile::tempdir().unwrap();
    let (server, store) = test_server(&dir);
    store.save("invoices", &json!({"invoices": []})).await.unwrap();

    let response = server.post("/api/invoices/99/mark-sent").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "Invoice marked as sent");
}

#[tokio::test]
async fn dashboard_metrics_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let (server, store) = test_server(&dir);
    store.save("leads", &json!({"leads": []})).await.unwrap();
    store.save("customers", &json!({"customers": []})).await.unwrap();
    store.save("invoices", &json!({"invoices": []})).await.unwrap();

    server
        .post("/api/leads/add")
        .json(&json!({"name": "Jane", "company": "Acme"}))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
    server
        .post("/api/customers/add")
        .json(&json!({"name": "John", "company": "Globex"}))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
    server
        .post("/api/invoices/add")
        .json(&json!({"customer_id": 1, "total": 40.0, "status": "sent"}))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.get("/api/dashboard/metrics").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["metrics"]["totalLeads"], 1);
    assert_eq!(body["metrics"]["activeCustomers"], 1);
    assert_eq!(body["metrics"]["outstandingInvoices"], 40.0);
    assert_eq!(body["metrics"]["cashReceivedMTD"], 0.0);
    assert_eq!(body["metrics"]["salesMTD"], 40.0);
    assert_eq!(body["quickStats"]["conversionRate"], 0.0);
    assert_eq!(body["quickStats"]["avgInvoiceValue"], 40.0);
    assert_eq!(body["trends"]["salesTrend"], 12.5);
    assert_eq!(body["recentLeads"].as_array().unwrap().len(), 1);
    assert_eq!(body["unpaidInvoices"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["charts"]["salesTrendData"],
        json!([15000, 18000, 21000])
    );
}

#[tokio::test]
async fn account_endpoints_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let (server, _store) = test_server(&dir);

    // The chart works without any pre-existing document
    let response = server
        .post("/api/accounts/add")
        .json(&json!({
            "accountCode": "4000",
            "accountName": "Sales Revenue",
            "accountType": "Revenue",
            "vatApplicable": true
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(created["id"], 1);
    assert_eq!(created["vatApplicable"], "Yes");

    // Edit overwrites every field and acknowledges with a message
    let response = server
        .post("/api/accounts/1/edit")
        .json(&json!({
            "accountCode": "4100",
            "accountName": "Service Revenue",
            "accountType": "Revenue"
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Account updated successfully");

    let listed: Value = server.get("/api/accounts").await.json();
    assert_eq!(listed[0]["accountCode"], "4100");
    assert_eq!(listed[0]["vatApplicable"], "No");

    // Unlike the other entities, editing a missing account is a 404
    let response = server
        .post("/api/accounts/99/edit")
        .json(&json!({
            "accountCode": "9",
            "accountName": "x",
            "accountType": "Expense"
        }))
        .await;
    response.assert_status_not_found();

    let response = server.delete("/api/accounts/1/delete").await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn contact_form_requires_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let (server, _store) = test_server(&dir);

    let response = server
        .post("/submit-form")
        .json(&json!({"name": "Jane"}))
        .await;

    // The form endpoint always answers 200 and carries the outcome
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "All fields required");
}

#[tokio::test]
async fn contact_form_reports_delivery_failure_without_smtp() {
    let dir = tempfile::tempdir().unwrap();
    let (server, _store) = test_server(&dir);

    let response = server
        .post("/submit-form")
        .json(&json!({
            "name": "Jane Smith",
            "company": "Acme LLC",
            "email": "jane@acme.example",
            "phone": "555-0100",
            "message": "Interested in early access"
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Email failed:")
    );
}
