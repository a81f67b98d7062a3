//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line printed by `chronicles --version`.
pub fn version_line() -> String {
    format!(
        "chronicles {} ({}, built {}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE,
        BUILD_PROFILE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_commit_format() {
        // 7 chars or "unknown"
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_line() {
        let line = version_line();
        assert!(line.starts_with("chronicles "));
        assert!(line.contains(BUILD_COMMIT));
        assert!(line.ends_with(&format!("{})", BUILD_PROFILE)));
    }

    #[test]
    fn test_build_profile_known() {
        assert!(["debug", "release", "unknown"].contains(&BUILD_PROFILE));
    }
}
