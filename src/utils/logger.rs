//! Subscriber setup. `RUST_LOG` overrides the default directives in both formats.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "storefront=debug,info"
    } else {
        "storefront=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

/// JSON lines, one object per event. Events emitted while serving a page carry
/// the enclosing `http.request` span, so `method` and `path` land on every line.
pub fn json_subscriber<W>(verbose: bool, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(env_filter(verbose)).with(
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .with_target(false)
            .with_writer(writer),
    )
}

pub fn init_json_logger(verbose: bool) {
    json_subscriber(verbose, std::io::stdout).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_verbose_raises_crate_level() {
        assert_eq!(default_directive(true), "storefront=debug,info");
        assert_eq!(default_directive(false), "storefront=info");
    }

    #[test]
    fn test_json_lines_carry_request_span_fields() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = json_subscriber(false, move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("http.request", method = "GET", path = "/shop/rings");
            let _entered = span.enter();
            tracing::info!(products = 3, "rendered listing");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let line: serde_json::Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
        assert_eq!(line["message"], "rendered listing");
        assert_eq!(line["products"], 3);
        assert_eq!(line["span"]["name"], "http.request");
        assert_eq!(line["span"]["path"], "/shop/rings");
    }
}
