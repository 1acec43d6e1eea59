use camino::Utf8PathBuf;
use lqls_source::PositionEncoding;
use percent_encoding::percent_decode_str;
use tower_lsp_server::ls_types;

pub(crate) trait PositionEncodingExt {
    fn to_lsp(&self) -> ls_types::PositionEncodingKind;
}

impl PositionEncodingExt for PositionEncoding {
    fn to_lsp(&self) -> ls_types::PositionEncodingKind {
        match self {
            PositionEncoding::Utf8 => ls_types::PositionEncodingKind::new("utf-8"),
            PositionEncoding::Utf16 => ls_types::PositionEncodingKind::new("utf-16"),
            PositionEncoding::Utf32 => ls_types::PositionEncodingKind::new("utf-32"),
        }
    }
}

pub(crate) trait PositionEncodingKindExt {
    fn to_position_encoding(&self) -> Option<PositionEncoding>;
}

impl PositionEncodingKindExt for ls_types::PositionEncodingKind {
    fn to_position_encoding(&self) -> Option<PositionEncoding> {
        match self.as_str() {
            "utf-8" => Some(PositionEncoding::Utf8),
            "utf-16" => Some(PositionEncoding::Utf16),
            "utf-32" => Some(PositionEncoding::Utf32),
            _ => None,
        }
    }
}

pub(crate) trait UriExt {
    /// Convert a `file:` URI to a path. Other schemes yield `None`.
    fn to_utf8_path_buf(&self) -> Option<Utf8PathBuf>;

    /// Whether the URI names a `.liquid` file.
    fn is_liquid_file(&self) -> bool;
}

impl UriExt for ls_types::Uri {
    fn to_utf8_path_buf(&self) -> Option<Utf8PathBuf> {
        let Some(encoded_path) = self.as_str().strip_prefix("file://") else {
            tracing::trace!(
                "URI conversion to path failed for: {} (non-file scheme)",
                self.as_str()
            );
            return None;
        };

        let decoded = percent_decode_str(encoded_path).decode_utf8_lossy();
        let path = decoded.as_ref();

        #[cfg(windows)]
        let path = path.strip_prefix('/').unwrap_or(path);

        Some(Utf8PathBuf::from(path))
    }

    fn is_liquid_file(&self) -> bool {
        let path = self.as_str();
        let path = path.split(['?', '#']).next().unwrap_or(path);
        path.rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("liquid"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> ls_types::Uri {
        s.parse().unwrap()
    }

    #[test]
    fn test_position_encoding_kind_unknown_returns_none() {
        assert_eq!(
            ls_types::PositionEncodingKind::new("unknown").to_position_encoding(),
            None
        );
    }

    #[test]
    fn test_position_encoding_round_trip() {
        for encoding in [
            PositionEncoding::Utf8,
            PositionEncoding::Utf16,
            PositionEncoding::Utf32,
        ] {
            assert_eq!(encoding.to_lsp().to_position_encoding(), Some(encoding));
        }
    }

    #[test]
    fn test_file_uri_to_path() {
        assert_eq!(
            uri("file:///home/user/my%20theme").to_utf8_path_buf(),
            Some(Utf8PathBuf::from("/home/user/my theme"))
        );
    }

    #[test]
    fn test_non_file_uri_returns_none() {
        assert!(uri("untitled:Untitled-1").to_utf8_path_buf().is_none());
    }

    #[test]
    fn test_liquid_extension() {
        assert!(uri("file:///theme/sections/header.liquid").is_liquid_file());
        assert!(uri("file:///theme/snippets/Card.LIQUID").is_liquid_file());
        assert!(!uri("file:///theme/assets/app.js").is_liquid_file());
        assert!(!uri("file:///theme/liquid").is_liquid_file());
    }
}
