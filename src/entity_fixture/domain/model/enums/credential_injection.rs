#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CredentialInjection {
    #[default]
    Scoped,
    Skipped,
}

impl CredentialInjection {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}
