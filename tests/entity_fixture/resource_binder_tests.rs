use entity_fixtures::{
    entity_fixture::domain::model::enums::{
        credential_injection::CredentialInjection, entity_fixture_error::EntityFixtureError,
        storage_mode::StorageMode,
    },
    entity_store::domain::{
        model::{
            enums::entity_store_error::EntityStoreError, value_objects::credential::Credential,
        },
        services::{entity_class::EntityClass, entity_component::EntityComponent},
    },
};

use crate::support::{
    create_failing_harness, create_harness, runtime_config_without_account,
    shared_runtime_config, widgets_options,
};

#[tokio::test]
async fn bind_once_suffixes_name_and_scopes_credentials_in_shared_mode() {
    let harness = create_harness(StorageMode::Shared, shared_runtime_config());

    let component = harness
        .services
        .binder
        .bind_once(
            harness.entity_class.as_ref(),
            StorageMode::Shared,
            CredentialInjection::Scoped,
            widgets_options(),
            &shared_runtime_config(),
        )
        .await
        .expect("bind should succeed");

    assert_eq!(
        component.resource_name().value(),
        "widgetsT20240115Tabcdefgh"
    );
    let options = harness.entity_class.setup_options();
    assert_eq!(options.len(), 1);
    let scoped = options[0]
        .credentials()
        .scoped()
        .expect("credential should be scoped");
    assert_eq!(scoped.resource_name(), component.resource_name());
    assert_eq!(scoped.account_id(), "acct1");
}

#[tokio::test]
async fn bind_once_keeps_name_and_uses_in_memory_credential_in_isolated_mode() {
    let harness = create_harness(StorageMode::Isolated, runtime_config_without_account());

    let component = harness
        .services
        .binder
        .bind_once(
            harness.entity_class.as_ref(),
            StorageMode::Isolated,
            CredentialInjection::Scoped,
            widgets_options(),
            &runtime_config_without_account(),
        )
        .await
        .expect("bind should succeed");

    assert_eq!(component.resource_name().value(), "widgets");
    assert_eq!(component.credentials(), &Credential::InMemory);
    assert!(harness.issuer.requests().is_empty());
}

#[tokio::test]
async fn override_is_removed_before_real_setup_runs() {
    let harness = create_harness(StorageMode::Shared, shared_runtime_config());
    let class_key = harness.entity_class.class_key();

    harness
        .services
        .binder
        .bind_once(
            harness.entity_class.as_ref(),
            StorageMode::Shared,
            CredentialInjection::Scoped,
            widgets_options(),
            &shared_runtime_config(),
        )
        .await
        .expect("bind should succeed");

    assert_eq!(harness.entity_class.override_installed_during_setup(), vec![false]);
    assert!(!harness.services.binder.registry().is_installed(&class_key).await);
}

#[tokio::test]
async fn failed_setup_still_leaves_no_override_installed() {
    let harness = create_failing_harness(StorageMode::Shared, shared_runtime_config());
    let class_key = harness.entity_class.class_key();

    let result = harness
        .services
        .binder
        .bind_once(
            harness.entity_class.as_ref(),
            StorageMode::Shared,
            CredentialInjection::Scoped,
            widgets_options(),
            &shared_runtime_config(),
        )
        .await;

    assert!(matches!(
        result,
        Err(EntityFixtureError::Binding(EntityStoreError::InfrastructureError(message))) if message == "setup failed"
    ));
    assert_eq!(harness.entity_class.override_installed_during_setup(), vec![false]);
    assert!(!harness.services.binder.registry().is_installed(&class_key).await);
}

#[tokio::test]
async fn configuration_failure_skips_setup_and_clears_override() {
    let harness = create_harness(StorageMode::Shared, runtime_config_without_account());
    let class_key = harness.entity_class.class_key();

    let result = harness
        .services
        .binder
        .bind_once(
            harness.entity_class.as_ref(),
            StorageMode::Shared,
            CredentialInjection::Scoped,
            widgets_options(),
            &runtime_config_without_account(),
        )
        .await;

    assert!(matches!(result, Err(EntityFixtureError::Configuration(_))));
    assert_eq!(harness.entity_class.setup_calls(), 0);
    assert!(!harness.services.binder.registry().is_installed(&class_key).await);
}

#[tokio::test]
async fn binding_the_same_class_twice_never_double_suffixes() {
    let harness = create_harness(StorageMode::Shared, shared_runtime_config());

    for _ in 0..2 {
        harness
            .services
            .binder
            .bind_once(
                harness.entity_class.as_ref(),
                StorageMode::Shared,
                CredentialInjection::Scoped,
                widgets_options(),
                &shared_runtime_config(),
            )
            .await
            .expect("bind should succeed");
    }

    let names = harness
        .entity_class
        .setup_options()
        .iter()
        .map(|options| options.resource_name().value().to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "widgetsT20240115Tabcdefgh".to_string(),
            "widgetsT20240115Tabcdefgh".to_string(),
        ]
    );
}

#[tokio::test]
async fn setup_without_installed_override_passes_options_through() {
    let harness = create_harness(StorageMode::Shared, shared_runtime_config());

    let component = harness
        .services
        .binder
        .registry()
        .dispatch_setup(harness.entity_class.as_ref(), widgets_options())
        .await
        .expect("setup should succeed");

    assert_eq!(component.resource_name().value(), "widgets");
    assert_eq!(component.credentials(), &Credential::Ambient);
}
