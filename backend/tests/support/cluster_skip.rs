//! Helpers for controlling embedded test cluster behaviour.
//!
//! Integration tests that depend on embedded PostgreSQL fail when the cluster
//! cannot start. Environments without a usable cluster opt out with
//! `SKIP_TEST_CLUSTER`, which turns the failure into a `SKIP-TEST-CLUSTER`
//! marker on stderr.

/// Returns true when the `SKIP_TEST_CLUSTER` environment variable is set to a
/// truthy value.
///
/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Handles embedded cluster setup failures consistently across suites.
///
/// Prints a skip marker and returns `None` when skipping is enabled; panics
/// otherwise so a broken cluster never passes silently.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("1"), true)]
    #[case(Some("YES"), true)]
    #[case(Some("0"), false)]
    #[case(None, false)]
    fn skip_flag_is_opt_in(#[case] value: Option<&str>, #[case] expected: bool) {
        let _guard = env_lock::lock_env([("SKIP_TEST_CLUSTER", value)]);
        assert_eq!(should_skip_test_cluster(), expected);
    }

    #[rstest]
    #[should_panic(expected = "Test cluster setup failed")]
    fn setup_failure_panics_by_default() {
        let _guard = env_lock::lock_env([("SKIP_TEST_CLUSTER", None::<&str>)]);
        let _: Option<()> = handle_cluster_setup_failure("no cluster");
    }

    #[rstest]
    fn setup_failure_skips_when_opted_out() {
        let _guard = env_lock::lock_env([("SKIP_TEST_CLUSTER", Some("true"))]);
        assert!(handle_cluster_setup_failure::<()>("no cluster").is_none());
    }
}
