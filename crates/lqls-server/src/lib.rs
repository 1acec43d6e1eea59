mod cache;
mod documents;
mod encoding;
mod ext;
mod logging;
mod server;
mod session;

use anyhow::Result;
use tower_lsp_server::LspService;
use tower_lsp_server::Server;

pub use crate::documents::Store;
pub use crate::documents::TextDocument;
pub use crate::logging::init_tracing;
pub use crate::logging::LspLayer;
pub use crate::server::LiquidLanguageServer;
pub use crate::session::Session;

/// Run the language server over stdin/stdout until the client disconnects.
pub async fn serve() -> Result<()> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| {
        let log_client = client.clone();
        let guard = init_tracing(move |message_type, message| {
            let client = log_client.clone();
            if let Ok(handle) = tokio::runtime::Handle::try_current() {
                handle.spawn(async move {
                    client.log_message(message_type, message).await;
                });
            }
        });

        LiquidLanguageServer::new(client, Some(guard))
    });

    Server::new(stdin, stdout, socket).serve(service).await;

    Ok(())
}
