use crate::entity_fixture::domain::model::enums::{
    credential_injection::CredentialInjection, storage_mode::StorageMode,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ResourceProvisioning {
    #[default]
    Inferred,
    Explicit,
    Automatic,
}

impl ResourceProvisioning {
    pub fn requires_explicit_creation(
        &self,
        storage_mode: StorageMode,
        credential_injection: CredentialInjection,
    ) -> bool {
        match self {
            Self::Explicit => true,
            Self::Automatic => false,
            Self::Inferred => {
                storage_mode == StorageMode::Isolated || credential_injection.is_skipped()
            }
        }
    }
}
