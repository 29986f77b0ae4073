//! Integration tests for the document store and the generic repository:
//! id assignment, partial edits, removal semantics and round-tripping.

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;

use crm_web_server::models::lead::{Lead, UpdateLeadRequest};
use crm_web_server::repository::Repository;
use crm_web_server::services::{account_service, lead_service};
use crm_web_server::store::JsonStore;

fn open_store(dir: &TempDir) -> Arc<JsonStore> {
    Arc::new(JsonStore::new(dir.path()))
}

fn lead(id: i64, name: &str) -> Lead {
    Lead {
        id,
        name: name.to_string(),
        company: "Acme LLC".to_string(),
        title: String::new(),
        email: format!("{}@acme.example", name.to_lowercase()),
        phone: "555-0100".to_string(),
        address: String::new(),
        source: "referral".to_string(),
        status: "new".to_string(),
        added_date: "August 01, 2026".to_string(),
        last_contact: String::new(),
        industry: String::new(),
        annual_revenue: String::new(),
        notes: "first contact pending".to_string(),
    }
}

async fn seed_empty_leads(store: &Arc<JsonStore>) {
    store
        .save("leads", &json!({"leads": []}))
        .await
        .expect("seed leads document");
}

#[tokio::test]
async fn insert_assigns_sequential_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    seed_empty_leads(&store).await;

    let repo = Repository::<Lead>::new(&store);

    let first = repo.insert(|id| lead(id, "First")).await.unwrap();
    let second = repo.insert(|id| lead(id, "Second")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    seed_empty_leads(&store).await;

    let repo = Repository::<Lead>::new(&store);
    for name in ["First", "Second", "Third"] {
        repo.insert(|id| lead(id, name)).await.unwrap();
    }

    assert!(repo.remove(2).await.unwrap());

    // The gap left by id 2 is never refilled; the next id comes from the max
    let fourth = repo.insert(|id| lead(id, "Fourth")).await.unwrap();
    assert_eq!(fourth.id, 4);
}

#[tokio::test]
async fn remove_of_absent_id_reports_not_found_and_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    seed_empty_leads(&store).await;

    let repo = Repository::<Lead>::new(&store);
    repo.insert(|id| lead(id, "Only")).await.unwrap();

    assert!(!repo.remove(99).await.unwrap());
    assert_eq!(repo.list().await.unwrap().len(), 1);

    // Removal is idempotent: the second attempt reports not-found
    assert!(repo.remove(1).await.unwrap());
    assert!(!repo.remove(1).await.unwrap());
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_touches_only_the_provided_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    seed_empty_leads(&store).await;

    let created = Repository::<Lead>::new(&store)
        .insert(|id| lead(id, "Jane"))
        .await
        .unwrap();

    let request = UpdateLeadRequest {
        id: created.id,
        phone: Some("555-0199".to_string()),
        status: Some("contacted".to_string()),
        ..Default::default()
    };

    let updated = lead_service::update(&store, &request)
        .await
        .unwrap()
        .expect("lead exists");

    assert_eq!(updated.phone, "555-0199");
    assert_eq!(updated.status, "contacted");

    // Everything not named in the request is bit-identical
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.company, created.company);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.added_date, created.added_date);
    assert_eq!(updated.notes, created.notes);
}

#[tokio::test]
async fn update_of_absent_id_is_a_silent_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    seed_empty_leads(&store).await;

    let request = UpdateLeadRequest {
        id: 42,
        notes: Some("never lands".to_string()),
        ..Default::default()
    };

    let outcome = lead_service::update(&store, &request).await.unwrap();

    assert!(outcome.is_none());
    assert!(
        Repository::<Lead>::new(&store)
            .list()
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn documents_round_trip_without_reordering_or_field_loss() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let seeded = json!({"leads": [
        {
            "id": 1,
            "name": "Jane Smith",
            "company": "Acme LLC",
            "title": "CTO",
            "email": "jane@acme.example",
            "phone": "555-0100",
            "address": "1 Main St",
            "source": "website",
            "status": "contacted",
            "addedDate": "July 04, 2026",
            "lastContact": "July 20, 2026",
            "industry": "Manufacturing",
            "annualRevenue": "2M",
            "notes": "asked for a demo"
        },
        {
            "id": 2,
            "name": "John Doe",
            "company": "Globex",
            "title": "",
            "email": "",
            "phone": "",
            "address": "",
            "source": "",
            "status": "new",
            "addedDate": "",
            "lastContact": "",
            "industry": "",
            "annualRevenue": "",
            "notes": ""
        }
    ]});

    store.save("leads", &seeded).await.unwrap();

    let repo = Repository::<Lead>::new(&store);
    let loaded = repo.list().await.unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].name, "Jane Smith");
    assert_eq!(loaded[1].name, "John Doe");

    // A no-op mutation rewrites the document through the typed layer
    repo.mutate(|_| ()).await.unwrap();

    let rewritten = store.load("leads").await.unwrap();
    assert_eq!(rewritten, seeded);
}

#[tokio::test]
async fn missing_operational_document_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    // No leads.json was ever written
    assert!(Repository::<Lead>::new(&store).list().await.is_err());
}

#[tokio::test]
async fn account_chart_tolerates_a_missing_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    // Reading an absent chart is an empty chart, not an error
    assert!(account_service::list(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn accounts_loaded_without_ids_are_numbered_positionally() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let seeded = json!({"COA": [
        {
            "accountCode": "4000",
            "accountName": "Sales Revenue",
            "accountType": "Revenue",
            "description": "",
            "vatApplicable": "Yes"
        },
        {
            "accountCode": "5000",
            "accountName": "Office Costs",
            "accountType": "Expense",
            "description": "",
            "vatApplicable": "No"
        }
    ]});

    store.save("chart_of_accounts", &seeded).await.unwrap();

    let accounts = account_service::list(&store).await.unwrap();
    assert_eq!(accounts[0].id, 1);
    assert_eq!(accounts[1].id, 2);

    // Backfill is read-side only; the stored document keeps its shape
    assert_eq!(store.load("chart_of_accounts").await.unwrap(), seeded);
}
