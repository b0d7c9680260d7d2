//! Tunable form constants.

use crate::catalog::DietaryCatalog;

/// Configuration for one form instance.
///
/// The defaults match the production form: 1..=10 guests and the standard
/// dietary catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormConfig {
    pub min_guests: u8,
    pub max_guests: u8,
    pub catalog: DietaryCatalog,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_guests: 1,
            max_guests: 10,
            catalog: DietaryCatalog::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_one_to_ten() {
        let config = FormConfig::default();
        assert_eq!(config.min_guests, 1);
        assert_eq!(config.max_guests, 10);
    }
}
