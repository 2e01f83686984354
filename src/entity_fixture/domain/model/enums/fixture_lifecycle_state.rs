#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FixtureLifecycleState {
    Unbound,
    Bound,
    Clean,
    Dirty,
    TornDown,
}

impl FixtureLifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unbound => "unbound",
            Self::Bound => "bound",
            Self::Clean => "clean",
            Self::Dirty => "dirty",
            Self::TornDown => "torn_down",
        }
    }
}
