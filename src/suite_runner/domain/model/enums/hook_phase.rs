#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HookPhase {
    SuiteSetup,
    Setup,
    Teardown,
    SuiteTeardown,
}

impl HookPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuiteSetup => "suite_setup",
            Self::Setup => "setup",
            Self::Teardown => "teardown",
            Self::SuiteTeardown => "suite_teardown",
        }
    }
}
