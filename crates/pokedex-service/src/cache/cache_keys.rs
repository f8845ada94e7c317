//! Cache keys for the catalog views.

/// Full catalog snapshot.
pub const CATALOG_KEY: &str = "pokemon:all";

/// Sorted distinct category list.
pub const CATEGORIES_KEY: &str = "pokemon:types";

/// Both derived entries, invalidated together.
#[must_use]
pub fn all_keys() -> Vec<String> {
    vec![CATALOG_KEY.to_string(), CATEGORIES_KEY.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_share_namespace() {
        assert!(CATALOG_KEY.starts_with("pokemon:"));
        assert!(CATEGORIES_KEY.starts_with("pokemon:"));
        assert_eq!(all_keys(), vec!["pokemon:all", "pokemon:types"]);
    }
}
