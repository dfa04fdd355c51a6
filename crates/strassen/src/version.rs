//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line with the default engine settings.
#[must_use]
pub fn full_version() -> String {
    format!(
        "strassen {} (parallel threshold {}, leaf order {})",
        version(),
        strassen_core::DEFAULT_PARALLEL_THRESHOLD,
        strassen_core::DEFAULT_LEAF_ORDER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn full_version_names_binary() {
        assert!(full_version().starts_with("strassen "));
    }
}
