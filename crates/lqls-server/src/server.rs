use std::sync::Arc;

use camino::Utf8PathBuf;
use lqls_conf::SETTINGS_SECTION;
use serde_json::Value;
use tokio::sync::RwLock;
use tower_lsp_server::jsonrpc::Result as LspResult;
use tower_lsp_server::ls_types;
use tower_lsp_server::Client;
use tower_lsp_server::LanguageServer;
use tracing_appender::non_blocking::WorkerGuard;

use crate::encoding::negotiate_position_encoding;
use crate::ext::PositionEncodingExt;
use crate::ext::UriExt;
use crate::session::Session;

const SERVER_NAME: &str = "Liquid Language Server";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct LiquidLanguageServer {
    client: Client,
    session: Arc<RwLock<Session>>,
    _guard: Option<WorkerGuard>,
}

impl LiquidLanguageServer {
    #[must_use]
    pub fn new(client: Client, guard: Option<WorkerGuard>) -> Self {
        Self {
            client,
            session: Arc::new(RwLock::new(Session::default())),
            _guard: guard,
        }
    }

    pub async fn with_session<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        let session = self.session.read().await;
        f(&session)
    }

    pub async fn with_session_mut<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut session = self.session.write().await;
        f(&mut session)
    }
}

impl LanguageServer for LiquidLanguageServer {
    async fn initialize(
        &self,
        params: ls_types::InitializeParams,
    ) -> LspResult<ls_types::InitializeResult> {
        tracing::info!("Initializing server...");

        let encoding = negotiate_position_encoding(&params);
        let project_root = project_root(&params);
        let overrides = params
            .initialization_options
            .as_ref()
            .map(settings_section)
            .filter(|value| !value.is_null());

        self.with_session_mut(|session| {
            session.set_position_encoding(encoding);
            session.set_project_root(project_root);
            session.set_client_overrides(overrides);
            session.set_client_capabilities(params.capabilities);
        })
        .await;

        Ok(ls_types::InitializeResult {
            capabilities: ls_types::ServerCapabilities {
                position_encoding: Some(encoding.to_lsp()),
                hover_provider: Some(ls_types::HoverProviderCapability::Simple(true)),
                text_document_sync: Some(ls_types::TextDocumentSyncCapability::Kind(
                    ls_types::TextDocumentSyncKind::FULL,
                )),
                ..Default::default()
            },
            server_info: Some(ls_types::ServerInfo {
                name: SERVER_NAME.to_string(),
                version: Some(SERVER_VERSION.to_string()),
            }),
            ..Default::default()
        })
    }

    async fn initialized(&self, _params: ls_types::InitializedParams) {
        let root = self
            .with_session_mut(|session| {
                session.reload_settings();
                session.project_root().cloned()
            })
            .await;

        let message = match root {
            Some(root) => format!("Loaded settings for project at {root}"),
            None => "No project root; using default settings".to_string(),
        };
        self.client
            .log_message(ls_types::MessageType::INFO, &message)
            .await;
    }

    async fn shutdown(&self) -> LspResult<()> {
        tracing::info!("Shutting down");
        Ok(())
    }

    async fn did_open(&self, params: ls_types::DidOpenTextDocumentParams) {
        tracing::debug!("Opened document: {}", params.text_document.uri.as_str());

        self.with_session_mut(|session| {
            session.invalidate_document(&params.text_document.uri);
            session.documents_mut().handle_did_open(params);
        })
        .await;
    }

    async fn did_change(&self, params: ls_types::DidChangeTextDocumentParams) {
        tracing::debug!("Changed document: {}", params.text_document.uri.as_str());

        self.with_session_mut(|session| {
            session.invalidate_document(&params.text_document.uri);
            session.documents_mut().handle_did_change(params);
        })
        .await;
    }

    async fn did_close(&self, params: ls_types::DidCloseTextDocumentParams) {
        tracing::debug!("Closed document: {}", params.text_document.uri.as_str());

        self.with_session_mut(|session| {
            session.invalidate_document(&params.text_document.uri);
            session.documents_mut().handle_did_close(&params);
        })
        .await;
    }

    async fn did_change_configuration(&self, params: ls_types::DidChangeConfigurationParams) {
        tracing::info!("Configuration change detected. Reloading settings...");

        let overrides = settings_section(&params.settings);
        self.with_session_mut(|session| {
            session.set_client_overrides((!overrides.is_null()).then_some(overrides));
            session.reload_settings();
        })
        .await;
    }

    async fn hover(&self, params: ls_types::HoverParams) -> LspResult<Option<ls_types::Hover>> {
        let position = params.text_document_position_params.position;
        let uri = params.text_document_position_params.text_document.uri;

        Ok(self
            .with_session_mut(|session| session.hover(&uri, position))
            .await)
    }
}

/// The client settings object, unwrapped from its section key when the client
/// sends the whole configuration tree.
fn settings_section(value: &Value) -> Value {
    value
        .get(SETTINGS_SECTION)
        .unwrap_or(value)
        .clone()
}

/// The first workspace folder, falling back to the current directory.
fn project_root(params: &ls_types::InitializeParams) -> Option<Utf8PathBuf> {
    let workspace_root = params
        .workspace_folders
        .as_ref()
        .and_then(|folders| folders.first())
        .and_then(|folder| folder.uri.to_utf8_path_buf());

    if let Some(root) = workspace_root {
        tracing::info!("Using workspace folder as project root: {root}");
        return Some(root);
    }

    let current_dir = std::env::current_dir()
        .ok()
        .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok());
    match &current_dir {
        Some(dir) => tracing::info!("No workspace folders, using current directory: {dir}"),
        None => tracing::warn!("No workspace folders and current directory unavailable"),
    }
    current_dir
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_settings_section_unwraps_key() {
        let value = json!({ "liquidInspector": { "enabled": false } });
        assert_eq!(settings_section(&value), json!({ "enabled": false }));
    }

    #[test]
    fn test_settings_section_passes_bare_object() {
        let value = json!({ "showTypes": false });
        assert_eq!(settings_section(&value), value);
    }

    #[test]
    fn test_project_root_prefers_workspace_folder() {
        let params = ls_types::InitializeParams {
            workspace_folders: Some(vec![ls_types::WorkspaceFolder {
                uri: "file:///home/me/theme".parse().unwrap(),
                name: "theme".to_string(),
            }]),
            ..Default::default()
        };
        assert_eq!(
            project_root(&params),
            Some(Utf8PathBuf::from("/home/me/theme"))
        );
    }

    #[test]
    fn test_project_root_falls_back_to_current_dir() {
        let params = ls_types::InitializeParams::default();
        let expected = std::env::current_dir()
            .ok()
            .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok());
        assert_eq!(project_root(&params), expected);
    }
}
