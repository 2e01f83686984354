use std::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::entity_fixture::domain::model::enums::entity_fixture_error::EntityFixtureError;

const RANDOM_COMPONENT_LENGTH: usize = 8;

lazy_static! {
    static ref RUN_SUFFIX_PATTERN: Regex =
        Regex::new(r"^T(\d{8})T[A-Za-z0-9]{8}$").expect("valid regex");
    static ref SUFFIXED_NAME_PATTERN: Regex =
        Regex::new(r"^(.+)(T\d{8}T[A-Za-z0-9]{8})$").expect("valid regex");
    static ref PROCESS_RUN_SUFFIX: RunSuffix = RunSuffix::allocate();
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RunSuffix {
    value: String,
    date: NaiveDate,
}

impl RunSuffix {
    pub fn new(value: String) -> Result<Self, EntityFixtureError> {
        let trimmed = value.trim();
        let captures = RUN_SUFFIX_PATTERN
            .captures(trimmed)
            .ok_or_else(|| EntityFixtureError::InvalidRunSuffix(trimmed.to_string()))?;

        let date = NaiveDate::parse_from_str(&captures[1], "%Y%m%d")
            .map_err(|_| EntityFixtureError::InvalidRunSuffix(trimmed.to_string()))?;

        Ok(Self {
            value: trimmed.to_string(),
            date,
        })
    }

    pub fn allocate() -> Self {
        Self::allocate_on(Utc::now().date_naive())
    }

    pub fn allocate_on(date: NaiveDate) -> Self {
        Self {
            value: format!("T{}T{}", date.format("%Y%m%d"), random_component()),
            date,
        }
    }

    pub fn for_process() -> Self {
        PROCESS_RUN_SUFFIX.clone()
    }

    /// Builds the random component from the fully random bytes of a v4 uuid,
    /// skipping the version and variant bytes (6..=9). Each kept character is
    /// uniform over 62 alphanumerics, so 8 of them carry about 47.6 bits.
    /// Returns `None` when fewer than 8 alphanumerics survive stripping.
    pub fn random_component_from(uuid: &Uuid) -> Option<String> {
        let bytes = uuid.as_bytes();
        let random_bytes = bytes[..6]
            .iter()
            .chain(&bytes[10..])
            .copied()
            .collect::<Vec<_>>();

        let stripped = URL_SAFE_NO_PAD
            .encode(random_bytes)
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(RANDOM_COMPONENT_LENGTH)
            .collect::<String>();

        (stripped.len() == RANDOM_COMPONENT_LENGTH).then_some(stripped)
    }

    pub fn extract_from(resource_name: &str) -> Option<(String, RunSuffix)> {
        let captures = SUFFIXED_NAME_PATTERN.captures(resource_name)?;
        let suffix = Self::new(captures[2].to_string()).ok()?;
        Some((captures[1].to_string(), suffix))
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for RunSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

fn random_component() -> String {
    loop {
        if let Some(component) = RunSuffix::random_component_from(&Uuid::new_v4()) {
            return component;
        }
    }
}
