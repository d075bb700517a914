use crate::core::postal::detect_format;
use crate::domain::model::{WidgetInstance, WidgetSettings};
use regex::Regex;
use std::sync::LazyLock;

// 註解，或以字母、/、!、? 開頭的標籤；沒有結尾的標籤吃到字串尾
static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|$)|<[A-Za-z/!?][^>]*(?:>|$)").expect("Invalid regex")
});

/// Remove HTML tags and comments. A `<` that does not open a tag is kept.
///
/// Stripping repeats until nothing changes, so `<<b>i>` cannot leave a new
/// tag behind.
pub fn strip_tags(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let stripped = MARKUP.replace_all(&current, "");
        if stripped == current {
            return current;
        }
        current = stripped.into_owned();
    }
}

pub fn sanitize_title(raw_title: &str) -> String {
    let title = strip_tags(raw_title);
    if title != raw_title {
        tracing::debug!("Removed markup from widget title");
    }
    title
}

/// Keep a postal code only if it is a Canadian postal code or a US ZIP code,
/// exactly as typed. Anything else becomes empty.
pub fn sanitize_postal_code(raw_postal_code: Option<&str>) -> String {
    match raw_postal_code {
        Some(code) if !code.is_empty() => match detect_format(code) {
            Some(format) => {
                tracing::debug!("Accepted postal code as {:?}", format);
                code.to_string()
            }
            None => {
                tracing::debug!("Discarded unrecognized postal code {:?}", code);
                String::new()
            }
        },
        _ => String::new(),
    }
}

/// Save-time transform from raw form input to storable settings. Never fails:
/// invalid input is cleared.
pub fn sanitize(raw_title: &str, raw_postal_code: Option<&str>) -> WidgetSettings {
    WidgetSettings {
        title: sanitize_title(raw_title),
        postal_code: sanitize_postal_code(raw_postal_code),
    }
}

/// Host-shaped variant of [`sanitize`]. The previous settings do not
/// influence the result.
pub fn sanitize_instance(new: &WidgetInstance, _old: Option<&WidgetSettings>) -> WidgetSettings {
    sanitize(new.title.as_deref().unwrap_or_default(), new.postal_code.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>My</b> Pets"), "My Pets");
        assert_eq!(strip_tags("Pets<script>alert(1)</script>"), "Petsalert(1)");
        assert_eq!(strip_tags("a <!-- hidden --> b"), "a  b");
        assert_eq!(strip_tags("Cats < Dogs"), "Cats < Dogs");
        assert_eq!(strip_tags("Pets <img src=x"), "Pets ");
        assert_eq!(strip_tags("<<b>i>x"), "x");
    }

    #[test]
    fn test_strip_tags_multiline_comment() {
        assert_eq!(strip_tags("a<!--\nmulti\nline-->b"), "ab");
    }

    #[test]
    fn test_sanitize_postal_code() {
        assert_eq!(sanitize_postal_code(Some("90210")), "90210");
        assert_eq!(sanitize_postal_code(Some("k1a 0b1")), "k1a 0b1");
        assert_eq!(sanitize_postal_code(Some("K1A0B1")), "K1A0B1");
        assert_eq!(sanitize_postal_code(Some("ABCDE")), "");
        assert_eq!(sanitize_postal_code(Some(" 90210")), "");
        assert_eq!(sanitize_postal_code(Some("")), "");
        assert_eq!(sanitize_postal_code(None), "");
    }

    #[test]
    fn test_sanitize_instance_ignores_old_settings() {
        let old = WidgetSettings {
            title: "Old".to_string(),
            postal_code: "12345".to_string(),
        };
        let new = WidgetInstance {
            title: None,
            postal_code: Some("bogus".to_string()),
        };

        let settings = sanitize_instance(&new, Some(&old));
        assert_eq!(settings, WidgetSettings::default());
    }
}
