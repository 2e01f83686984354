use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StorageMode {
    Isolated,
    Shared,
}

impl StorageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Isolated => "isolated",
            Self::Shared => "shared",
        }
    }
}

impl FromStr for StorageMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "isolated" | "mock" => Ok(Self::Isolated),
            "shared" | "real" => Ok(Self::Shared),
            _ => Err(()),
        }
    }
}
