//! Parameter Store project store tests

use super::common::InMemorySsm;
use param_teller::{
    Error, KeyLayout, KeyValueStore, Namespace, ParameterStore, ProjectStore, StoreOptions,
};

fn seeded_store() -> InMemorySsm {
    InMemorySsm::seeded(
        3,
        &[
            ("proj1-prod-service1_key1", "value1_prod_1_1_no_path"),
            ("proj1-prod-service1.key1", "value1_prod_1_1_no_path"),
            ("/proj1-prod-service1/key1", "value1_prod_1_1"),
            ("/proj1-prod-service1/key2", "value1_prod_1_2"),
            ("proj1-prod-service1/key2", "value1_prod_1_2"),
            ("/proj1-test-service1/key3", "value1_test_1_3"),
            ("/proj1-prod-service2/key1", "value1_prod_2_1"),
            ("/proj2-prod-service1/key1", "value2_prod_1_1"),
        ],
    )
}

fn project_store(
    ssm: InMemorySsm,
    options: &StoreOptions,
) -> ProjectStore<ParameterStore<InMemorySsm>> {
    ProjectStore::new(
        ParameterStore::new(ssm, options),
        Namespace::new("proj1", "prod", "service1"),
        KeyLayout::from_options(options),
    )
    .expect("parameter store supports every layout")
}

#[tokio::test]
async fn test_service_parameters_by_path() {
    let store = project_store(seeded_store(), &StoreOptions::default());

    let values = store.get_service_parameters().await.unwrap();

    assert_eq!(values.len(), 2);
    assert_eq!(values["/proj1-prod-service1/key1"], "value1_prod_1_1");
    assert_eq!(values["/proj1-prod-service1/key2"], "value1_prod_1_2");
}

#[tokio::test]
async fn test_service_parameter_by_path_resolves_full_key() {
    let store = project_store(seeded_store(), &StoreOptions::default());

    let value = store.get_service_parameter("key2").await.unwrap();

    assert_eq!(value.as_deref(), Some("value1_prod_1_2"));
    let requests = store.store().client().requests.lock().unwrap().clone();
    assert_eq!(requests, vec!["get_parameter proj1-prod-service1/key2"]);
}

#[tokio::test]
async fn test_service_parameters_by_separator() {
    let options = StoreOptions::default().with_key_separator(".");
    let store = project_store(seeded_store(), &options);

    let values = store.get_service_parameters().await.unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values["proj1-prod-service1.key1"], "value1_prod_1_1_no_path");

    let value = store.get_service_parameter("key1").await.unwrap();
    assert_eq!(value.as_deref(), Some("value1_prod_1_1_no_path"));
}

#[tokio::test]
async fn test_pagination_merges_every_page() {
    let ssm = InMemorySsm::new(5);
    for i in 1..=12 {
        ssm.put(&format!("service1_key{i}"), &format!("value1_{i}"));
        ssm.put(&format!("/service1/key{i}"), &format!("value1_{i}"));
    }
    let store = ParameterStore::new(ssm, &StoreOptions::default());

    let by_prefix = store.get_values_by_prefix("service1").await.unwrap();
    let by_path = store.get_values_by_path("service1").await.unwrap();

    assert_eq!(by_prefix.len(), 12);
    assert_eq!(by_path.len(), 12);
    for i in 1..=12 {
        assert_eq!(by_prefix[&format!("service1_key{i}")], format!("value1_{i}"));
        assert_eq!(by_path[&format!("/service1/key{i}")], format!("value1_{i}"));
    }
    assert_eq!(store.client().request_count("describe_parameters"), 3);
    assert_eq!(store.client().request_count("get_parameters_by_path"), 3);
    // 12 names fetched in batches of at most 10
    assert_eq!(store.client().request_count("get_parameters "), 2);
}

#[tokio::test]
async fn test_write_then_read_round_trip() {
    let ssm = InMemorySsm::new(10);
    ssm.put("/app/token", "abc123");
    let store = ParameterStore::new(ssm, &StoreOptions::default());

    assert_eq!(
        store.get_value("/app/token").await.unwrap().as_deref(),
        Some("abc123")
    );
    assert_eq!(store.get_value("/app/never-written").await.unwrap(), None);
}

#[tokio::test]
async fn test_blank_path_is_a_validation_failure() {
    let store = ParameterStore::new(seeded_store(), &StoreOptions::default());

    let err = store.get_values_by_path("   ").await.unwrap_err();

    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(store.client().request_count("get_parameters_by_path"), 0);
}

#[tokio::test]
async fn test_empty_key_list_makes_no_calls() {
    let store = ParameterStore::new(seeded_store(), &StoreOptions::default());

    let values = store.get_values(&[]).await.unwrap();

    assert!(values.is_empty());
    assert!(store.client().requests.lock().unwrap().is_empty());
}
