/// Per-call encoding configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Emit attributes in ascending key order instead of map order
    pub sort_attribute_keys: bool,
}

impl EncodeOptions {
    pub const fn new() -> Self {
        Self {
            sort_attribute_keys: false,
        }
    }

    #[must_use]
    pub const fn sort_attribute_keys(mut self, sort: bool) -> Self {
        self.sort_attribute_keys = sort;
        self
    }
}
