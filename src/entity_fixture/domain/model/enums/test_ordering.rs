#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TestOrdering {
    #[default]
    Unordered,
    Ordered,
}

impl TestOrdering {
    pub fn cleans_before_each_test(&self) -> bool {
        matches!(self, Self::Unordered)
    }
}
