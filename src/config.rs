/// Settings for deriving a prefix from a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixConfig {
    /// Pads single-word names shorter than the prefix. Must be in `A-Z0-9`.
    pub fill: char,
}

impl PrefixConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self { fill: 'X' }
    }

    #[must_use]
    pub const fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self::new()
    }
}
