//! Process-wide embedded PostgreSQL cluster shared by every integration test.
//!
//! `pg-embed-setup-unpriv` starts the cluster lazily and keeps it for the
//! process lifetime. Startup can fail transiently while another test binary
//! holds the data directory, so attempts are retried before giving up, and
//! a library panic (for example a missing `pg_worker` helper) is reported as
//! an ordinary setup error so `SKIP_TEST_CLUSTER` still applies.

use std::any::Any;
use std::panic;
use std::time::Duration;

use pg_embedded_setup_unpriv::ClusterHandle;

const SHARED_CLUSTER_RETRIES: usize = 5;
const SHARED_CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Returns the shared cluster handle, starting the cluster on first use.
///
/// # Examples
///
/// ```rust,ignore
/// let cluster = shared_cluster_handle().expect("embedded postgres available");
/// let database = cluster
///     .temporary_database("test_example")
///     .expect("temporary database should be created");
/// println!("connection URL: {}", database.url());
/// ```
pub fn shared_cluster_handle() -> Result<&'static ClusterHandle, String> {
    ensure_stable_password();
    let mut attempt = 1;
    loop {
        match start_cluster() {
            Ok(handle) => return Ok(handle),
            Err(error) if attempt >= SHARED_CLUSTER_RETRIES => {
                return Err(format!(
                    "start embedded cluster: attempt {attempt}/{SHARED_CLUSTER_RETRIES}: {error}"
                ));
            }
            Err(_) => {
                std::thread::sleep(SHARED_CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
        }
    }
}

fn start_cluster() -> Result<&'static ClusterHandle, String> {
    match panic::catch_unwind(pg_embedded_setup_unpriv::test_support::shared_cluster_handle) {
        Ok(Ok(handle)) => Ok(handle),
        Ok(Err(error)) => Err(error.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_owned()))
        .unwrap_or_else(|| "cluster bootstrap panicked".to_owned())
}

/// Pins `PG_PASSWORD` so a reused data directory keeps accepting the
/// password it was initialised with.
fn ensure_stable_password() {
    if std::env::var_os("PG_PASSWORD").is_none() {
        // SAFETY: runs before the library spawns threads; the shared cluster
        // singleton serialises startup, so this happens at most once.
        unsafe {
            std::env::set_var("PG_PASSWORD", "users_backend_embedded_test");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_reads_string_payloads() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("pg_worker missing"));
        assert_eq!(panic_message(payload.as_ref()), "pg_worker missing");
    }

    #[test]
    fn panic_message_reads_static_str_payloads() {
        let payload: Box<dyn Any + Send> = Box::new("worker not found");
        assert_eq!(panic_message(payload.as_ref()), "worker not found");
    }

    #[test]
    fn ensure_stable_password_does_not_overwrite_existing_value() {
        let _guard = env_lock::lock_env([("PG_PASSWORD", Some("custom_value"))]);
        ensure_stable_password();
        assert_eq!(
            std::env::var("PG_PASSWORD").expect("PG_PASSWORD should be set"),
            "custom_value"
        );
    }
}
