use std::time::Duration;

use devfolio_domain::DevfolioError;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` (default `info`). Output is JSON lines
/// when `DEVFOLIO_LOG_FORMAT=json`, human-readable otherwise. Calling this
/// twice is harmless; the second install is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("DEVFOLIO_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    let _ = if json {
        registry.with(fmt::layer().json().with_current_span(false)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };
}

/// Log the outcome of an HTTP operation with structured fields.
///
/// `operation` is a stable identifier such as `"profile::upsert"`; callers
/// must not put request data in it.
#[inline]
pub fn log_operation_execution(
    operation: &str,
    elapsed: Duration,
    failure: Option<&DevfolioError>,
) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match failure {
        None => info!(operation, duration_ms, "operation_success"),
        Some(err) => warn!(
            operation,
            duration_ms,
            kind = %err.kind(),
            "operation_failure"
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use devfolio_domain::FieldViolation;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failures_are_logged_with_their_kind() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(move || writer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let err = DevfolioError::InvalidInput(vec![FieldViolation::new(
                "status",
                "Status is required",
            )]);
            log_operation_execution("profile::upsert", Duration::from_millis(3), Some(&err));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("operation_failure"));
        assert!(output.contains("kind=validation_failed"));
        assert!(!output.contains("error_type"));
    }

    #[test]
    fn init_tracing_twice_does_not_panic() {
        init_tracing();
        init_tracing();
    }
}
