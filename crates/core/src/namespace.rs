//! Namespace URIs the formatter knows about and their canonical prefixes.

pub const ANDROID: &str = "http://schemas.android.com/apk/res/android";
pub const APP: &str = "http://schemas.android.com/apk/res-auto";
pub const TOOLS: &str = "http://schemas.android.com/tools";
pub const XLIFF: &str = "urn:oasis:names:tc:xliff:document:1.2";
pub const AAPT: &str = "http://schemas.android.com/aapt";

/// The namespace reserved for `xmlns:*` declarations.
pub const XMLNS: &str = "http://www.w3.org/2000/xmlns/";

const SHORT_PREFIXES: [(&str, &str); 5] = [
    (ANDROID, "android"),
    (APP, "app"),
    (TOOLS, "tools"),
    (XLIFF, "xliff"),
    (AAPT, "aapt"),
];

/// Returns the canonical prefix for a known namespace URI.
pub fn short_prefix(uri: &str) -> Option<&'static str> {
    SHORT_PREFIXES
        .iter()
        .find(|(known, _)| *known == uri)
        .map(|(_, prefix)| *prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_prefix() {
        assert_eq!(short_prefix(ANDROID), Some("android"));
        assert_eq!(short_prefix(APP), Some("app"));
        assert_eq!(short_prefix(TOOLS), Some("tools"));
        assert_eq!(short_prefix(XLIFF), Some("xliff"));
        assert_eq!(short_prefix(AAPT), Some("aapt"));
        assert_eq!(short_prefix("http://schemas.android.com/apk/custom"), None);
        assert_eq!(short_prefix(""), None);
    }
}
