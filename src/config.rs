//! Bar configuration.

pub const DEFAULT_BAR_NAME: &str = "Rubik Sandwich bar";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarConfig {
    /// Shown in the welcome message.
    pub name: String,
}

impl BarConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BAR_NAME)
    }
}
