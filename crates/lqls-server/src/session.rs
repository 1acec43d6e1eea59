use camino::Utf8PathBuf;
use lqls_catalog::Catalog;
use lqls_conf::Settings;
use lqls_ide::hover_for_line;
use lqls_ide::hover_to_lsp;
use lqls_source::PositionEncoding;
use serde_json::Value;
use tower_lsp_server::ls_types::ClientCapabilities;
use tower_lsp_server::ls_types::Hover;
use tower_lsp_server::ls_types::Position;
use tower_lsp_server::ls_types::Uri;

use crate::cache::HoverCache;
use crate::cache::HoverKey;
use crate::documents::Store;

/// Server state shared across LSP requests.
#[derive(Debug, Default)]
pub struct Session {
    project_root: Option<Utf8PathBuf>,
    settings: Settings,
    /// Raw settings object last sent by the client, applied over config files.
    client_overrides: Option<Value>,
    documents: Store,
    hover_cache: HoverCache,
    position_encoding: PositionEncoding,
    client_capabilities: Option<ClientCapabilities>,
}

impl Session {
    #[must_use]
    pub fn project_root(&self) -> Option<&Utf8PathBuf> {
        self.project_root.as_ref()
    }

    pub fn set_project_root(&mut self, root: Option<Utf8PathBuf>) {
        self.project_root = root;
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_client_overrides(&mut self, overrides: Option<Value>) {
        self.client_overrides = overrides;
    }

    #[must_use]
    pub fn documents(&self) -> &Store {
        &self.documents
    }

    pub fn documents_mut(&mut self) -> &mut Store {
        &mut self.documents
    }

    #[must_use]
    pub fn position_encoding(&self) -> PositionEncoding {
        self.position_encoding
    }

    pub fn set_position_encoding(&mut self, encoding: PositionEncoding) {
        self.position_encoding = encoding;
    }

    #[must_use]
    pub fn client_capabilities(&self) -> Option<&ClientCapabilities> {
        self.client_capabilities.as_ref()
    }

    pub fn set_client_capabilities(&mut self, capabilities: ClientCapabilities) {
        self.client_capabilities = Some(capabilities);
    }

    /// Number of cached hover results.
    #[must_use]
    pub fn cached_hovers(&self) -> usize {
        self.hover_cache.len()
    }

    pub fn invalidate_document(&mut self, uri: &Uri) {
        self.hover_cache.invalidate_document(uri.as_str());
    }

    /// Rebuild settings from config files and client overrides and drop every
    /// cached hover. Load errors fall back to the defaults.
    pub fn reload_settings(&mut self) {
        let result = match (&self.project_root, &self.client_overrides) {
            (Some(root), overrides) => Settings::new(root, overrides.as_ref()),
            (None, Some(overrides)) => Settings::from_overrides(overrides),
            (None, None) => Ok(Settings::default()),
        };

        self.settings = result.unwrap_or_else(|err| {
            tracing::warn!("Failed to load settings, using defaults: {err}");
            Settings::default()
        });
        self.hover_cache.clear();

        tracing::debug!(settings = ?self.settings, "Settings reloaded");
    }

    /// Hover for `position` in the document at `uri`, served from the cache
    /// when the same document version was asked before.
    pub fn hover(&mut self, uri: &Uri, position: Position) -> Option<Hover> {
        let document = self.documents.get(uri.as_str())?;
        let key = HoverKey {
            uri: uri.as_str().to_string(),
            version: document.version(),
            line: position.line,
            character: position.character,
        };

        if let Some(hover) = self.hover_cache.get(&key) {
            tracing::trace!("Hover cache hit for {}:{}", position.line, position.character);
            return Some(hover.clone());
        }

        let line = document.line(position.line)?;
        let offset = self
            .position_encoding
            .column_to_char_offset(line, position.character)?;

        let info = hover_for_line(line, offset, &self.settings, Catalog::shopify())?;
        if self.settings.debug {
            tracing::info!(
                "Hover at {}:{} covers characters {}..{}",
                position.line,
                position.character,
                info.range.start(),
                info.range.end()
            );
        }

        let hover = hover_to_lsp(&info, line, position.line, self.position_encoding);
        self.hover_cache.insert(key, hover.clone());
        Some(hover)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tower_lsp_server::ls_types::DidOpenTextDocumentParams;
    use tower_lsp_server::ls_types::HoverContents;
    use tower_lsp_server::ls_types::Range;
    use tower_lsp_server::ls_types::TextDocumentItem;

    use super::*;

    fn uri() -> Uri {
        "file:///theme/snippets/price.liquid".parse().unwrap()
    }

    fn session_with(text: &str) -> Session {
        let mut session = Session::default();
        session.documents_mut().handle_did_open(DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri(),
                language_id: "liquid".to_string(),
                version: 1,
                text: text.to_string(),
            },
        });
        session
    }

    fn markdown(hover: &Hover) -> &str {
        match &hover.contents {
            HoverContents::Markup(markup) => &markup.value,
            other => panic!("expected markup, got {other:?}"),
        }
    }

    #[test]
    fn test_hover_on_filter() {
        let mut session = session_with("<p>{{ product.price | money }}</p>");
        let hover = session.hover(&uri(), Position::new(0, 25)).unwrap();

        assert!(markdown(&hover).contains("money"));
        assert_eq!(
            hover.range,
            Some(Range::new(Position::new(0, 22), Position::new(0, 27)))
        );
    }

    #[test]
    fn test_hover_is_cached() {
        let mut session = session_with("{{ price | money }}");
        let first = session.hover(&uri(), Position::new(0, 12));
        assert_eq!(session.cached_hovers(), 1);
        let second = session.hover(&uri(), Position::new(0, 12));
        assert_eq!(first, second);
        assert_eq!(session.cached_hovers(), 1);
    }

    #[test]
    fn test_misses_are_not_cached() {
        let mut session = session_with("plain text");
        assert!(session.hover(&uri(), Position::new(0, 3)).is_none());
        assert_eq!(session.cached_hovers(), 0);
    }

    #[test]
    fn test_unknown_document_or_line() {
        let mut session = session_with("{{ price | money }}");
        let other: Uri = "file:///theme/other.liquid".parse().unwrap();
        assert!(session.hover(&other, Position::new(0, 12)).is_none());
        assert!(session.hover(&uri(), Position::new(4, 0)).is_none());
    }

    #[test]
    fn test_column_past_line_end() {
        let mut session = session_with("{{ product.title }}");
        assert!(session.hover(&uri(), Position::new(0, 500)).is_none());
        assert!(session.hover(&uri(), Position::new(0, 20)).is_none());
        assert_eq!(session.cached_hovers(), 0);
    }

    #[test]
    fn test_utf16_columns() {
        // The emoji is two UTF-16 code units but a single character.
        let mut session = session_with("😀 {{ price | money }}");
        let hover = session.hover(&uri(), Position::new(0, 15)).unwrap();
        assert_eq!(
            hover.range,
            Some(Range::new(Position::new(0, 14), Position::new(0, 19)))
        );
    }

    #[test]
    fn test_overrides_disable_hover() {
        let mut session = session_with("{{ price | money }}");
        session.set_client_overrides(Some(json!({ "enabled": false })));
        session.reload_settings();

        assert!(!session.settings().enabled);
        assert!(session.hover(&uri(), Position::new(0, 12)).is_none());
    }

    #[test]
    fn test_reload_clears_cache() {
        let mut session = session_with("{{ price | money }}");
        session.hover(&uri(), Position::new(0, 12));
        session.reload_settings();
        assert_eq!(session.cached_hovers(), 0);
    }

    #[test]
    fn test_invalid_overrides_fall_back_to_defaults() {
        let mut session = Session::default();
        session.set_client_overrides(Some(json!({ "maxPropertiesInHover": "lots" })));
        session.reload_settings();
        assert_eq!(session.settings(), &Settings::default());
    }
}
