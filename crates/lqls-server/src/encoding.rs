use lqls_source::PositionEncoding;
use tower_lsp_server::ls_types;

use crate::ext::PositionEncodingKindExt;

/// Negotiate the best encoding with the client based on their capabilities.
/// Prefers UTF-8 > UTF-32 > UTF-16.
pub(crate) fn negotiate_position_encoding(params: &ls_types::InitializeParams) -> PositionEncoding {
    let client_encodings: &[ls_types::PositionEncodingKind] = params
        .capabilities
        .general
        .as_ref()
        .and_then(|general| general.position_encodings.as_ref())
        .map_or(&[], |encodings| encodings.as_slice());

    for preferred in [
        PositionEncoding::Utf8,
        PositionEncoding::Utf32,
        PositionEncoding::Utf16,
    ] {
        if client_encodings
            .iter()
            .any(|kind| kind.to_position_encoding() == Some(preferred))
        {
            return preferred;
        }
    }

    PositionEncoding::Utf16
}

#[cfg(test)]
mod tests {
    use tower_lsp_server::ls_types::ClientCapabilities;
    use tower_lsp_server::ls_types::GeneralClientCapabilities;

    use super::*;

    fn params_with(encodings: Option<Vec<&'static str>>) -> ls_types::InitializeParams {
        ls_types::InitializeParams {
            capabilities: ClientCapabilities {
                general: Some(GeneralClientCapabilities {
                    position_encodings: encodings.map(|kinds| {
                        kinds
                            .into_iter()
                            .map(ls_types::PositionEncodingKind::new)
                            .collect()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_negotiate_prefers_utf8() {
        let params = params_with(Some(vec!["utf-16", "utf-32", "utf-8"]));
        assert_eq!(negotiate_position_encoding(&params), PositionEncoding::Utf8);
    }

    #[test]
    fn test_negotiate_utf32_over_utf16() {
        let params = params_with(Some(vec!["utf-16", "utf-32"]));
        assert_eq!(negotiate_position_encoding(&params), PositionEncoding::Utf32);
    }

    #[test]
    fn test_negotiate_fallback() {
        assert_eq!(
            negotiate_position_encoding(&params_with(None)),
            PositionEncoding::Utf16
        );
        assert_eq!(
            negotiate_position_encoding(&params_with(Some(vec!["unknown"]))),
            PositionEncoding::Utf16
        );
        assert_eq!(
            negotiate_position_encoding(&ls_types::InitializeParams::default()),
            PositionEncoding::Utf16
        );
    }
}
