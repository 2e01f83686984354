use chrono::{NaiveDate, Utc};
use entity_fixtures::entity_fixture::domain::model::{
    enums::entity_fixture_error::EntityFixtureError, value_objects::run_suffix::RunSuffix,
};
use regex::Regex;
use uuid::Uuid;

use crate::support::{FIXED_SUFFIX, fixed_suffix};

#[test]
fn allocate_produces_dated_alphanumeric_suffix() {
    let pattern = Regex::new(r"^T\d{8}T[A-Za-z0-9]{8}$").expect("valid regex");

    let suffix = RunSuffix::allocate();

    assert!(pattern.is_match(suffix.value()), "{}", suffix);
    assert_eq!(suffix.date(), Utc::now().date_naive());
}

#[test]
fn allocate_on_zero_pads_the_date() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");

    let suffix = RunSuffix::allocate_on(date);

    assert!(suffix.value().starts_with("T20240307T"));
    assert_eq!(suffix.value().len(), FIXED_SUFFIX.len());
}

#[test]
fn allocations_do_not_collide() {
    let first = RunSuffix::allocate();
    let second = RunSuffix::allocate();

    assert_ne!(first, second);
}

#[test]
fn process_suffix_is_shared_across_calls() {
    assert_eq!(RunSuffix::for_process(), RunSuffix::for_process());
}

#[test]
fn new_rejects_malformed_suffixes() {
    for raw in ["", "T2024011Tabcdefgh", "T20240115Tabc-efgh", "T20241301Tabcdefgh"] {
        assert!(matches!(
            RunSuffix::new(raw.to_string()),
            Err(EntityFixtureError::InvalidRunSuffix(_))
        ));
    }
}

#[test]
fn extract_from_splits_base_name_and_suffix() {
    let (base, suffix) =
        RunSuffix::extract_from("widgetsT20240115Tabcdefgh").expect("name should carry a suffix");

    assert_eq!(base, "widgets");
    assert_eq!(suffix, fixed_suffix());
    assert_eq!(
        suffix.date(),
        NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
    );
    assert!(RunSuffix::extract_from("widgets").is_none());
}

#[test]
fn random_component_ignores_version_and_variant_bytes() {
    let mut versioned = [0u8; 16];
    versioned[6] = 0x4f;
    versioned[8] = 0xbf;

    let plain = RunSuffix::random_component_from(&Uuid::from_bytes([0u8; 16]));
    let marked = RunSuffix::random_component_from(&Uuid::from_bytes(versioned));

    assert_eq!(plain.as_deref(), Some("AAAAAAAA"));
    assert_eq!(marked, plain);
}

#[test]
fn random_component_skips_stripped_characters() {
    let mut bytes = [0u8; 16];
    bytes[..6].fill(0xff);

    let component = RunSuffix::random_component_from(&Uuid::from_bytes(bytes));

    assert_eq!(component.as_deref(), Some("AAAAAAAA"));
}

#[test]
fn random_component_is_none_when_too_few_alphanumerics_remain() {
    let component = RunSuffix::random_component_from(&Uuid::from_bytes([0xff; 16]));

    assert_eq!(component, None);
}
