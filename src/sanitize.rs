use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on a sanitized chat message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("valid regex"));

static JS_PROTO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)javascript:").expect("valid regex"));

static EVENT_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bon\w+\s*=").expect("valid regex"));

static DOM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:document|window)\s*\.\s*\w+").expect("valid regex"));

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Cleans one raw chat message before it reaches the classifier.
///
/// Strips script tags, `javascript:` prefixes, inline event-handler
/// attributes, `document.*`/`window.*` references and all angle brackets,
/// drops ASCII control characters, collapses whitespace runs and truncates
/// to [`MAX_MESSAGE_CHARS`] characters.
///
/// The unsafe-substring removal runs to a fixed point, so the function is
/// idempotent even on nested payloads like `javajavascript:script:`.
/// The result never contains `<` or `>`. An empty result means the caller
/// should reject the request rather than classify it.
pub fn sanitize(raw: &str) -> String {
    // Control characters go first so that stripping them cannot splice a
    // payload back together after the unsafe-substring pass. Whitespace
    // controls become plain spaces for the collapse below.
    let mut text: String = raw
        .chars()
        .map(|c| if c.is_ascii_whitespace() { ' ' } else { c })
        .filter(|c| !c.is_ascii_control())
        .collect();
    loop {
        let stripped = strip_unsafe(&text);
        if stripped == text {
            break;
        }
        text = stripped;
    }
    let text = WHITESPACE_RE.replace_all(&text, " ");
    let text: String = text.trim().chars().take(MAX_MESSAGE_CHARS).collect();
    text.trim().to_string()
}

/// One pass of unsafe-substring removal. Looped by [`sanitize`] until stable,
/// since a single pass can splice two halves of a payload back together.
fn strip_unsafe(text: &str) -> String {
    let text = SCRIPT_RE.replace_all(text, "");
    let text = JS_PROTO_RE.replace_all(&text, "");
    let text = EVENT_ATTR_RE.replace_all(&text, "");
    let text = DOM_RE.replace_all(&text, "");
    text.replace(['<', '>'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(sanitize("I want pizza"), "I want pizza");
    }

    #[test]
    fn strips_script_tags() {
        let out = sanitize("hello <script>alert('hi')</script> world");
        assert_eq!(out, "hello world");
    }

    #[test]
    fn strips_nested_payloads() {
        assert_eq!(sanitize("javajavascript:script:alert"), "alert");
        assert_eq!(sanitize("java<>script:boom"), "boom");
    }

    #[test]
    fn strips_event_handlers_and_dom_refs() {
        let out = sanitize("click onerror= document.cookie now");
        assert!(!out.contains("onerror"));
        assert!(!out.contains("document"));
    }

    #[test]
    fn no_angle_brackets_survive() {
        for raw in ["<b>bold</b>", "a < b > c", "<<<>>>"] {
            let out = sanitize(raw);
            assert!(!out.contains('<') && !out.contains('>'), "{raw:?} -> {out:?}");
        }
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(sanitize("  where   is\tmy\n\norder  "), "where is my order");
    }

    #[test]
    fn drops_control_characters() {
        assert_eq!(sanitize("or\x00der \x07status"), "order status");
    }

    #[test]
    fn truncates_to_limit() {
        let long = "a".repeat(2000);
        assert_eq!(sanitize(&long).chars().count(), MAX_MESSAGE_CHARS);
    }

    #[test]
    fn idempotent() {
        let samples = [
            "hello",
            "javajavascript:script:alert",
            "<script>x</script> order   status",
            "java<>script:deep",
            &"word ".repeat(200),
        ];
        for raw in samples {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(sanitize("   \t\n  "), "");
        assert_eq!(sanitize("<script>only</script>"), "");
    }
}
