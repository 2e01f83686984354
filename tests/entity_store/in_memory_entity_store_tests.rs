use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use entity_fixtures::entity_store::{
    domain::{
        model::{
            enums::entity_store_error::EntityStoreError, queries::scan_query::ScanQuery,
            value_objects::credential::Credential,
        },
        services::{
            entity_class::EntityClass,
            entity_component::{EntityComponent, EntityRow, ScanHandler},
        },
    },
    infrastructure::persistence::repositories::{
        in_memory::{
            in_memory_entity_class_impl::InMemoryEntityClassImpl,
            in_memory_entity_store::InMemoryEntityStore,
        },
        resource_administration_repository::ResourceAdministrationRepository,
    },
};
use serde_json::json;

use crate::support::{create_harness, resource_name, scoped_credential, setup_options};

#[derive(Default)]
struct CollectingHandler {
    row_keys: Vec<String>,
}

#[async_trait]
impl ScanHandler for CollectingHandler {
    async fn handle(&mut self, row: Box<dyn EntityRow>) -> Result<(), EntityStoreError> {
        self.row_keys.push(row.row_key().value().to_string());
        Ok(())
    }
}

#[tokio::test]
async fn setup_with_ambient_credentials_does_not_create_resource() {
    let harness = create_harness(true);

    let component = harness
        .entity_class
        .setup(setup_options("widgets"))
        .await
        .expect("setup should succeed");

    assert!(!harness.store.has_resource(&resource_name("widgets")).await);
    assert!(matches!(
        component.count().await,
        Err(EntityStoreError::ResourceNotFound(_))
    ));

    component
        .ensure_resource_exists()
        .await
        .expect("ensure should succeed");
    component
        .ensure_resource_exists()
        .await
        .expect("ensure should be idempotent");
    assert_eq!(component.count().await, Ok(0));
}

#[tokio::test]
async fn scoped_setup_auto_provisions_when_enabled() {
    let harness = create_harness(true);

    harness
        .entity_class
        .setup(
            setup_options("widgets")
                .with_credentials(scoped_credential("widgets", Duration::minutes(5))),
        )
        .await
        .expect("setup should succeed");

    assert!(harness.store.has_resource(&resource_name("widgets")).await);
}

#[tokio::test]
async fn default_store_provisions_resources_for_scoped_setup() {
    let store = Arc::new(InMemoryEntityStore::new());
    let entity_class =
        InMemoryEntityClassImpl::new("Widgets", store.clone()).expect("class key should be valid");
    assert!(store.auto_provisions_scoped());

    let component = entity_class
        .setup(
            setup_options("widgets")
                .with_credentials(scoped_credential("widgets", Duration::minutes(5))),
        )
        .await
        .expect("setup should succeed");

    assert!(store.has_resource(&resource_name("widgets")).await);
    assert_eq!(component.count().await, Ok(0));
}

#[tokio::test]
async fn scoped_setup_rejects_credential_for_another_resource() {
    let harness = create_harness(true);

    let result = harness
        .entity_class
        .setup(
            setup_options("widgets")
                .with_credentials(scoped_credential("gadgets", Duration::minutes(5))),
        )
        .await;

    assert!(matches!(result, Err(EntityStoreError::Unauthorized(name)) if name == "widgets"));
    assert!(
        harness
            .store
            .list_resources()
            .await
            .expect("listing should succeed")
            .is_empty()
    );
}

#[tokio::test]
async fn scoped_setup_rejects_expired_credential() {
    let harness = create_harness(false);

    let result = harness
        .entity_class
        .setup(
            setup_options("widgets")
                .with_credentials(scoped_credential("widgets", Duration::minutes(-1))),
        )
        .await;

    assert!(matches!(result, Err(EntityStoreError::Unauthorized(_))));
}

#[tokio::test]
async fn scan_visits_matching_rows_in_key_order() {
    let harness = create_harness(false);
    let component = harness
        .entity_class
        .setup(setup_options("widgets").with_credentials(Credential::InMemory))
        .await
        .expect("setup should succeed");
    component
        .ensure_resource_exists()
        .await
        .expect("ensure should succeed");
    component
        .insert("b", json!({ "color": "red" }))
        .await
        .expect("insert should succeed");
    component
        .insert("a", json!({ "color": "red" }))
        .await
        .expect("insert should succeed");
    component
        .insert("c", json!({ "color": "blue" }))
        .await
        .expect("insert should succeed");

    let mut handler = CollectingHandler::default();
    component
        .scan(
            &ScanQuery::all().with_condition("color", json!("red")),
            &mut handler,
        )
        .await
        .expect("scan should succeed");

    assert_eq!(handler.row_keys, vec!["a", "b"]);
    assert_eq!(component.load("c").await, Ok(Some(json!({ "color": "blue" }))));
}

#[tokio::test]
async fn deleting_a_resource_twice_reports_not_found() {
    let harness = create_harness(false);
    let name = resource_name("widgets");
    assert!(harness.store.create_resource(&name).await);
    assert!(!harness.store.create_resource(&name).await);

    harness
        .store
        .delete_resource(&name)
        .await
        .expect("delete should succeed");

    assert!(matches!(
        harness.store.delete_resource(&name).await,
        Err(EntityStoreError::ResourceNotFound(_))
    ));
}
