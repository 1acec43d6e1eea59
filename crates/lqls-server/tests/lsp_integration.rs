//! Drive the language server through its `LanguageServer` methods.

use lqls_server::LiquidLanguageServer;
use serde_json::json;
use tempfile::TempDir;
use tower_lsp_server::ls_types::ClientCapabilities;
use tower_lsp_server::ls_types::DidChangeConfigurationParams;
use tower_lsp_server::ls_types::DidChangeTextDocumentParams;
use tower_lsp_server::ls_types::DidCloseTextDocumentParams;
use tower_lsp_server::ls_types::DidOpenTextDocumentParams;
use tower_lsp_server::ls_types::GeneralClientCapabilities;
use tower_lsp_server::ls_types::Hover;
use tower_lsp_server::ls_types::HoverContents;
use tower_lsp_server::ls_types::HoverParams;
use tower_lsp_server::ls_types::HoverProviderCapability;
use tower_lsp_server::ls_types::InitializeParams;
use tower_lsp_server::ls_types::InitializeResult;
use tower_lsp_server::ls_types::InitializedParams;
use tower_lsp_server::ls_types::Position;
use tower_lsp_server::ls_types::PositionEncodingKind;
use tower_lsp_server::ls_types::Range;
use tower_lsp_server::ls_types::TextDocumentContentChangeEvent;
use tower_lsp_server::ls_types::TextDocumentIdentifier;
use tower_lsp_server::ls_types::TextDocumentItem;
use tower_lsp_server::ls_types::TextDocumentPositionParams;
use tower_lsp_server::ls_types::TextDocumentSyncCapability;
use tower_lsp_server::ls_types::TextDocumentSyncKind;
use tower_lsp_server::ls_types::Uri;
use tower_lsp_server::ls_types::VersionedTextDocumentIdentifier;
use tower_lsp_server::ls_types::WorkDoneProgressParams;
use tower_lsp_server::ls_types::WorkspaceFolder;
use tower_lsp_server::ClientSocket;
use tower_lsp_server::LanguageServer;
use tower_lsp_server::LspService;

struct TestServer {
    service: LspService<LiquidLanguageServer>,
    _socket: ClientSocket,
    workspace: TempDir,
}

impl TestServer {
    fn new() -> Self {
        let (service, socket) = LspService::new(|client| LiquidLanguageServer::new(client, None));
        Self {
            service,
            _socket: socket,
            workspace: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn server(&self) -> &LiquidLanguageServer {
        self.service.inner()
    }

    fn workspace_uri(&self) -> Uri {
        format!("file://{}", self.workspace.path().display())
            .parse()
            .unwrap()
    }

    fn uri(&self, name: &str) -> Uri {
        format!("file://{}/{name}", self.workspace.path().display())
            .parse()
            .unwrap()
    }

    async fn initialize_with(&self, params: InitializeParams) -> InitializeResult {
        let params = InitializeParams {
            workspace_folders: Some(vec![WorkspaceFolder {
                uri: self.workspace_uri(),
                name: "theme".to_string(),
            }]),
            ..params
        };
        let result = self
            .server()
            .initialize(params)
            .await
            .expect("Failed to initialize");
        self.server().initialized(InitializedParams {}).await;
        result
    }

    async fn initialize(&self) -> InitializeResult {
        self.initialize_with(InitializeParams::default()).await
    }

    async fn open(&self, name: &str, language_id: &str, text: &str, version: i32) {
        self.server()
            .did_open(DidOpenTextDocumentParams {
                text_document: TextDocumentItem {
                    uri: self.uri(name),
                    language_id: language_id.to_string(),
                    version,
                    text: text.to_string(),
                },
            })
            .await;
    }

    async fn change(&self, name: &str, text: &str, version: i32) {
        self.server()
            .did_change(DidChangeTextDocumentParams {
                text_document: VersionedTextDocumentIdentifier {
                    uri: self.uri(name),
                    version,
                },
                content_changes: vec![TextDocumentContentChangeEvent {
                    range: None,
                    range_length: None,
                    text: text.to_string(),
                }],
            })
            .await;
    }

    async fn close(&self, name: &str) {
        self.server()
            .did_close(DidCloseTextDocumentParams {
                text_document: TextDocumentIdentifier { uri: self.uri(name) },
            })
            .await;
    }

    async fn hover(&self, name: &str, line: u32, character: u32) -> Option<Hover> {
        self.server()
            .hover(HoverParams {
                text_document_position_params: TextDocumentPositionParams {
                    text_document: TextDocumentIdentifier { uri: self.uri(name) },
                    position: Position::new(line, character),
                },
                work_done_progress_params: WorkDoneProgressParams::default(),
            })
            .await
            .expect("hover request failed")
    }

    async fn cached_hovers(&self) -> usize {
        self.server()
            .with_session(lqls_server::Session::cached_hovers)
            .await
    }
}

fn markdown(hover: &Hover) -> &str {
    match &hover.contents {
        HoverContents::Markup(markup) => &markup.value,
        other => panic!("expected markup, got {other:?}"),
    }
}

#[tokio::test]
async fn test_initialize_advertises_hover_and_full_sync() {
    let server = TestServer::new();
    let result = server.initialize().await;

    assert_eq!(
        result.capabilities.hover_provider,
        Some(HoverProviderCapability::Simple(true))
    );
    assert_eq!(
        result.capabilities.text_document_sync,
        Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL))
    );
    assert_eq!(
        result.capabilities.position_encoding,
        Some(PositionEncodingKind::new("utf-16"))
    );
    assert!(result.server_info.is_some());
}

#[tokio::test]
async fn test_initialize_negotiates_utf8() {
    let server = TestServer::new();
    let result = server
        .initialize_with(InitializeParams {
            capabilities: ClientCapabilities {
                general: Some(GeneralClientCapabilities {
                    position_encodings: Some(vec![
                        PositionEncodingKind::new("utf-16"),
                        PositionEncodingKind::new("utf-8"),
                    ]),
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        })
        .await;

    assert_eq!(
        result.capabilities.position_encoding,
        Some(PositionEncodingKind::new("utf-8"))
    );
}

#[tokio::test]
async fn test_hover_on_filter() {
    let server = TestServer::new();
    server.initialize().await;
    server
        .open("price.liquid", "liquid", "<p>{{ product.price | money }}</p>", 1)
        .await;

    let hover = server.hover("price.liquid", 0, 25).await.unwrap();
    assert!(markdown(&hover).contains("money"));
    assert_eq!(
        hover.range,
        Some(Range::new(Position::new(0, 22), Position::new(0, 27)))
    );
}

#[tokio::test]
async fn test_hover_on_object_and_tag() {
    let server = TestServer::new();
    server.initialize().await;
    server
        .open(
            "product.liquid",
            "liquid",
            "{% if product.available %}\n{{ product.title }}\n{% endif %}",
            1,
        )
        .await;

    let variable = server.hover("product.liquid", 1, 5).await.unwrap();
    assert!(markdown(&variable).contains("product"));

    let closer = server.hover("product.liquid", 2, 4).await.unwrap();
    assert!(markdown(&closer).contains("if"));
}

#[tokio::test]
async fn test_non_liquid_documents_are_ignored() {
    let server = TestServer::new();
    server.initialize().await;
    server
        .open("script.js", "javascript", "const s = '{{ price | money }}';", 1)
        .await;

    assert!(server.hover("script.js", 0, 23).await.is_none());
}

#[tokio::test]
async fn test_plain_text_has_no_hover() {
    let server = TestServer::new();
    server.initialize().await;
    server.open("page.liquid", "liquid", "<h1>Welcome</h1>", 1).await;

    assert!(server.hover("page.liquid", 0, 5).await.is_none());
}

#[tokio::test]
async fn test_change_invalidates_cached_hover() {
    let server = TestServer::new();
    server.initialize().await;
    server
        .open("price.liquid", "liquid", "{{ price | money }}", 1)
        .await;

    let before = server.hover("price.liquid", 0, 12).await.unwrap();
    assert!(markdown(&before).contains("money"));
    assert_eq!(server.cached_hovers().await, 1);

    server
        .change("price.liquid", "{{ price | upcase }}", 2)
        .await;
    assert_eq!(server.cached_hovers().await, 0);

    let after = server.hover("price.liquid", 0, 12).await.unwrap();
    assert!(markdown(&after).contains("upcase"));
}

#[tokio::test]
async fn test_close_drops_document() {
    let server = TestServer::new();
    server.initialize().await;
    server
        .open("price.liquid", "liquid", "{{ price | money }}", 1)
        .await;
    server.hover("price.liquid", 0, 12).await;

    server.close("price.liquid").await;
    assert_eq!(server.cached_hovers().await, 0);
    assert!(server.hover("price.liquid", 0, 12).await.is_none());
}

#[tokio::test]
async fn test_configuration_change_disables_hover() {
    let server = TestServer::new();
    server.initialize().await;
    server
        .open("price.liquid", "liquid", "{{ price | money }}", 1)
        .await;
    assert!(server.hover("price.liquid", 0, 12).await.is_some());

    server
        .server()
        .did_change_configuration(DidChangeConfigurationParams {
            settings: json!({ "liquidInspector": { "enableFilterHover": false } }),
        })
        .await;

    assert_eq!(server.cached_hovers().await, 0);
    assert!(server.hover("price.liquid", 0, 12).await.is_none());
}

#[tokio::test]
async fn test_project_config_file_is_applied() {
    let server = TestServer::new();
    std::fs::write(server.workspace.path().join("lqls.toml"), "enabled = false\n").unwrap();
    server.initialize().await;
    server
        .open("price.liquid", "liquid", "{{ price | money }}", 1)
        .await;

    assert!(server.hover("price.liquid", 0, 12).await.is_none());
}

#[tokio::test]
async fn test_initialization_options_override_config_file() {
    let server = TestServer::new();
    std::fs::write(server.workspace.path().join("lqls.toml"), "enabled = false\n").unwrap();
    server
        .initialize_with(InitializeParams {
            initialization_options: Some(json!({ "enabled": true })),
            ..Default::default()
        })
        .await;
    server
        .open("price.liquid", "liquid", "{{ price | money }}", 1)
        .await;

    assert!(server.hover("price.liquid", 0, 12).await.is_some());
}
