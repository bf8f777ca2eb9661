//! Logging integration.
//!
//! Provides a helper for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and a span constructor for CRUD
//! operations.

use crate::settings::Settings;

/// Installs the process-wide subscriber for the admin dashboard and CLI.
///
/// `settings.log_level` is an [`EnvFilter`](tracing_subscriber::EnvFilter)
/// directive such as `"info"` or `"leafy_client=debug,info"`; an unparseable
/// directive falls back to `info`. With `settings.debug` set, events print as
/// multi-line text with source locations, which is what you want while
/// clicking through the dashboard locally. Otherwise each event is one JSON
/// line, ready for a log shipper.
///
/// Only the first call installs anything. Later calls, including those from
/// tests that share a process, leave the existing subscriber in place.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if settings.debug {
        builder
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
    } else {
        builder.json().try_init()
    };
    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
}

/// Creates a tracing span for one CRUD operation.
///
/// # Examples
///
/// ```
/// use leafy_core::logging::crud_span;
///
/// let span = crud_span("books", "list");
/// let _guard = span.enter();
/// tracing::info!("listing books");
/// ```
pub fn crud_span(crud: &str, operation: &str) -> tracing::Span {
    tracing::info_span!("crud", crud, operation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_keeps_first_subscriber() {
        let settings = Settings {
            log_level: "not a [valid filter".to_string(),
            ..Settings::default()
        };
        setup_logging(&settings);
        setup_logging(&Settings::default());
        let span = crud_span("books", "list");
        let _guard = span.enter();
        tracing::info!("still logging");
    }
}
