use lqls_source::LineIndex;
use rustc_hash::FxHashMap;
use tower_lsp_server::ls_types::DidChangeTextDocumentParams;
use tower_lsp_server::ls_types::DidCloseTextDocumentParams;
use tower_lsp_server::ls_types::DidOpenTextDocumentParams;
use tower_lsp_server::ls_types::Uri;

use crate::ext::UriExt;

const LANGUAGE_ID: &str = "liquid";

/// An open Liquid document, kept in sync with the client.
#[derive(Clone, Debug)]
pub struct TextDocument {
    text: String,
    version: i32,
    index: LineIndex,
}

impl TextDocument {
    fn new(text: String, version: i32) -> Self {
        let index = LineIndex::new(&text);
        Self {
            text,
            version,
            index,
        }
    }

    #[must_use]
    pub fn version(&self) -> i32 {
        self.version
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text of the 0-based `line`, without its terminator.
    #[must_use]
    pub fn line(&self, line: u32) -> Option<&str> {
        self.index.line(&self.text, line)
    }

    fn replace(&mut self, text: String, version: i32) {
        self.index = LineIndex::new(&text);
        self.text = text;
        self.version = version;
    }
}

/// Documents keyed by URI.
#[derive(Debug, Default)]
pub struct Store {
    documents: FxHashMap<String, TextDocument>,
}

impl Store {
    /// Track a newly opened document. Returns `false` for non-Liquid documents,
    /// which are ignored.
    pub fn handle_did_open(&mut self, params: DidOpenTextDocumentParams) -> bool {
        let item = params.text_document;
        if !is_liquid(&item.uri, &item.language_id) {
            tracing::debug!(
                "Ignoring {} document: {}",
                item.language_id,
                item.uri.as_str()
            );
            return false;
        }

        tracing::debug!(version = item.version, "Opening document: {}", item.uri.as_str());
        self.documents.insert(
            item.uri.as_str().to_string(),
            TextDocument::new(item.text, item.version),
        );
        true
    }

    /// Apply a full-text change. Returns `false` if the document is not tracked.
    pub fn handle_did_change(&mut self, params: DidChangeTextDocumentParams) -> bool {
        let uri = params.text_document.uri.as_str();
        let Some(document) = self.documents.get_mut(uri) else {
            return false;
        };

        // With full sync the last change carries the whole document.
        let Some(change) = params.content_changes.into_iter().last() else {
            return true;
        };
        if change.range.is_some() {
            tracing::warn!("Ignoring ranged change for {uri}; the server expects full sync");
            return true;
        }

        document.replace(change.text, params.text_document.version);
        true
    }

    pub fn handle_did_close(&mut self, params: &DidCloseTextDocumentParams) -> bool {
        self.documents
            .remove(params.text_document.uri.as_str())
            .is_some()
    }

    #[must_use]
    pub fn get(&self, uri: &str) -> Option<&TextDocument> {
        self.documents.get(uri)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn is_liquid(uri: &Uri, language_id: &str) -> bool {
    language_id == LANGUAGE_ID || uri.is_liquid_file()
}

#[cfg(test)]
mod tests {
    use tower_lsp_server::ls_types::TextDocumentContentChangeEvent;
    use tower_lsp_server::ls_types::TextDocumentIdentifier;
    use tower_lsp_server::ls_types::TextDocumentItem;
    use tower_lsp_server::ls_types::VersionedTextDocumentIdentifier;

    use super::*;

    const URI: &str = "file:///theme/sections/header.liquid";

    fn open(store: &mut Store, uri: &str, language_id: &str, text: &str) -> bool {
        store.handle_did_open(DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: uri.parse().unwrap(),
                language_id: language_id.to_string(),
                version: 1,
                text: text.to_string(),
            },
        })
    }

    fn change(store: &mut Store, uri: &str, text: &str, version: i32) -> bool {
        store.handle_did_change(DidChangeTextDocumentParams {
            text_document: VersionedTextDocumentIdentifier {
                uri: uri.parse().unwrap(),
                version,
            },
            content_changes: vec![TextDocumentContentChangeEvent {
                range: None,
                range_length: None,
                text: text.to_string(),
            }],
        })
    }

    #[test]
    fn test_open_liquid_by_language_id() {
        let mut store = Store::default();
        assert!(open(&mut store, "file:///theme/page.html", "liquid", "{{ shop.name }}"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_open_liquid_by_extension() {
        let mut store = Store::default();
        assert!(open(&mut store, URI, "html", "{{ shop.name }}"));
        assert_eq!(store.get(URI).unwrap().line(0), Some("{{ shop.name }}"));
    }

    #[test]
    fn test_other_documents_are_ignored() {
        let mut store = Store::default();
        assert!(!open(&mut store, "file:///theme/app.js", "javascript", "let x;"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_full_change_replaces_text_and_version() {
        let mut store = Store::default();
        open(&mut store, URI, "liquid", "old");
        assert!(change(&mut store, URI, "line one\r\nline two", 7));

        let document = store.get(URI).unwrap();
        assert_eq!(document.version(), 7);
        assert_eq!(document.text(), "line one\r\nline two");
        assert_eq!(document.line(0), Some("line one"));
        assert_eq!(document.line(1), Some("line two"));
        assert_eq!(document.line(2), None);
    }

    #[test]
    fn test_change_unknown_document() {
        let mut store = Store::default();
        assert!(!change(&mut store, URI, "text", 2));
    }

    #[test]
    fn test_close_removes_document() {
        let mut store = Store::default();
        open(&mut store, URI, "liquid", "text");
        let params = DidCloseTextDocumentParams {
            text_document: TextDocumentIdentifier {
                uri: URI.parse().unwrap(),
            },
        };
        assert!(store.handle_did_close(&params));
        assert!(!store.handle_did_close(&params));
        assert!(store.get(URI).is_none());
    }
}
