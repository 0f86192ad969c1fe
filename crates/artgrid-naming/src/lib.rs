//! Filesystem-safe document naming.
//!
//! Composes a document name from user-chosen fields (season, collection,
//! platform, version) so the result is safe as a filename on macOS and
//! Windows. The transform is total: any input string, including empty ones
//! or ones made entirely of reserved characters, produces a valid output.

/// Characters that are invalid in filenames on macOS or Windows.
const RESERVED: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Sanitize one name field.
///
/// Leading and trailing whitespace is trimmed, internal whitespace is
/// deleted (not replaced with a separator), and each reserved character is
/// replaced with `_`. An empty or all-whitespace field sanitizes to the
/// empty string; no placeholder is substituted.
pub fn sanitize_part(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect()
}

/// Sanitize each field and join them with `_`, preserving field order.
///
/// Empty fields contribute empty segments, so an all-empty input
/// degenerates to a string of bare separators; callers treat that as an
/// undesirable name, not as an error.
pub fn format_name<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let parts: Vec<String> = fields.into_iter().map(sanitize_part).collect();
    parts.join("_")
}

/// The four naming fields chosen in the host dialog.
///
/// No persisted entity; the host rebuilds this from widget state and the
/// name is recomputed on every preview tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingFields {
    pub season: String,
    pub collection: String,
    pub platform: String,
    pub version: String,
}

impl NamingFields {
    /// Create naming fields from raw user input.
    pub fn new(
        season: impl Into<String>,
        collection: impl Into<String>,
        platform: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            season: season.into(),
            collection: collection.into(),
            platform: platform.into(),
            version: version.into(),
        }
    }

    /// The composite document name: all four fields sanitized and joined
    /// with `_`, in season/collection/platform/version order.
    pub fn document_name(&self) -> String {
        format_name([
            self.season.as_str(),
            self.collection.as_str(),
            self.platform.as_str(),
            self.version.as_str(),
        ])
    }
}

impl Default for NamingFields {
    /// The host dialog's initial choices.
    fn default() -> Self {
        Self::new("SPRING2026", "TheEssentialEdit", "SALE", "V1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_trims_and_deletes_whitespace() {
        assert_eq!(sanitize_part("  Spring 2026  "), "Spring2026");
        assert_eq!(sanitize_part("a\tb c\nd"), "abcd");
    }

    #[test]
    fn test_sanitize_replaces_reserved_characters() {
        assert_eq!(sanitize_part("A/B:C"), "A_B_C");
        assert_eq!(sanitize_part(r#"\/:*?"<>|"#), "_________");
    }

    #[test]
    fn test_sanitize_empty_stays_empty() {
        assert_eq!(sanitize_part(""), "");
        assert_eq!(sanitize_part("   "), "");
    }

    #[test]
    fn test_format_name_joins_in_order() {
        assert_eq!(
            format_name(["  Spring 2026  ", "A/B:C", ""]),
            "Spring2026_A_B_C_"
        );
    }

    #[test]
    fn test_format_name_all_empty_degenerates_to_separators() {
        assert_eq!(format_name(["", "", "", ""]), "___");
    }

    #[test]
    fn test_document_name_field_order() {
        let fields = NamingFields::new("FALL2026", "SpringBreakHits", "BLOG", "V3");
        assert_eq!(fields.document_name(), "FALL2026_SpringBreakHits_BLOG_V3");
    }

    #[test]
    fn test_default_fields() {
        assert_eq!(
            NamingFields::default().document_name(),
            "SPRING2026_TheEssentialEdit_SALE_V1"
        );
    }

    proptest! {
        #[test]
        fn prop_sanitized_never_contains_reserved_or_whitespace(raw in ".*") {
            let sanitized = sanitize_part(&raw);
            prop_assert!(!sanitized.chars().any(|c| c.is_whitespace()));
            prop_assert!(!sanitized.chars().any(|c| RESERVED.contains(&c)));
        }

        #[test]
        fn prop_format_name_only_underscore_separators_added(
            fields in proptest::collection::vec(".*", 0..6)
        ) {
            let name = format_name(fields.iter().map(String::as_str));
            prop_assert!(!name.chars().any(|c| c.is_whitespace()));
            prop_assert!(!name.contains('/'));
            prop_assert!(!name.contains('\\'));
        }
    }
}
