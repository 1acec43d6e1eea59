//! Tracing setup for the language server.
//!
//! Events go to a daily log file in the system temp directory and, at INFO
//! and above, to the client through `window/logMessage`.

use std::sync::Arc;

use tower_lsp_server::ls_types::MessageType;
use tracing::field::Visit;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::Registry;

const LOG_FILE_NAME: &str = "lqls.log";

type SendMessage = dyn Fn(MessageType, String) + Send + Sync;

/// A tracing layer that forwards event messages to the LSP client.
pub struct LspLayer {
    send_message: Arc<SendMessage>,
}

impl LspLayer {
    pub fn new<F>(send_message: F) -> Self
    where
        F: Fn(MessageType, String) + Send + Sync + 'static,
    {
        Self {
            send_message: Arc::new(send_message),
        }
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }
}

fn message_type(level: Level) -> Option<MessageType> {
    match level {
        Level::ERROR => Some(MessageType::ERROR),
        Level::WARN => Some(MessageType::WARNING),
        Level::INFO => Some(MessageType::INFO),
        Level::DEBUG => Some(MessageType::LOG),
        Level::TRACE => None,
    }
}

impl<S> Layer<S> for LspLayer
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let Some(message_type) = message_type(*event.metadata().level()) else {
            return;
        };

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        if let Some(message) = visitor.message {
            (self.send_message)(message_type, message);
        }
    }
}

/// Install the global subscriber.
///
/// The file layer honors `RUST_LOG` and defaults to `info`. The returned guard
/// flushes the file writer on drop and must outlive the server.
pub fn init_tracing<F>(send_message: F) -> WorkerGuard
where
    F: Fn(MessageType, String) + Send + Sync + 'static,
{
    let file_appender = tracing_appender::rolling::daily(std::env::temp_dir(), LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    let lsp_layer =
        LspLayer::new(send_message).with_filter(tracing_subscriber::filter::LevelFilter::INFO);

    // A subscriber may already be installed, e.g. by an embedding binary.
    if Registry::default()
        .with(file_layer)
        .with(lsp_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global tracing subscriber already set");
    }

    guard
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use tracing::subscriber::with_default;

    use super::*;

    #[test]
    fn test_levels_map_to_message_types() {
        assert_eq!(message_type(Level::ERROR), Some(MessageType::ERROR));
        assert_eq!(message_type(Level::WARN), Some(MessageType::WARNING));
        assert_eq!(message_type(Level::INFO), Some(MessageType::INFO));
        assert_eq!(message_type(Level::DEBUG), Some(MessageType::LOG));
        assert_eq!(message_type(Level::TRACE), None);
    }

    #[test]
    fn test_layer_forwards_messages() {
        let sent: Arc<Mutex<Vec<(MessageType, String)>>> = Arc::default();
        let sink = Arc::clone(&sent);
        let layer = LspLayer::new(move |kind, message| {
            sink.lock().unwrap().push((kind, message));
        });

        with_default(Registry::default().with(layer), || {
            tracing::warn!("settings file is invalid");
            tracing::info!(count = 3, "opened {} documents", 3);
            tracing::trace!("dropped");
        });

        let sent = sent.lock().unwrap();
        assert_eq!(
            *sent,
            vec![
                (MessageType::WARNING, "settings file is invalid".to_string()),
                (MessageType::INFO, "opened 3 documents".to_string()),
            ]
        );
    }
}
