//! Heuristic extraction of an embedded JSON object from noisy text.
//!
//! Kept separate from the structured parse path so the span heuristics
//! stay independently testable.

/// Find the span of the first `{` through the last `}` in `text`.
///
/// Greedy on purpose: reviewers wrap their JSON in prose, and the widest
/// span is the one that survives nested objects in the payload. Returns
/// `None` when there is no plausible object span.
pub fn extract_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_with_surrounding_noise() {
        let text = "Here is the result: {\"status\":\"ok\"} hope that helps!";
        assert_eq!(extract_object_span(text), Some("{\"status\":\"ok\"}"));
    }

    #[test]
    fn spans_nested_objects_greedily() {
        let text = "x {\"a\": {\"b\": 1}} y {\"c\": 2} z";
        assert_eq!(extract_object_span(text), Some("{\"a\": {\"b\": 1}} y {\"c\": 2}"));
    }

    #[test]
    fn no_braces() {
        assert_eq!(extract_object_span("plain prose"), None);
    }

    #[test]
    fn only_opening_brace() {
        assert_eq!(extract_object_span("stuff { more stuff"), None);
    }

    #[test]
    fn closing_before_opening() {
        assert_eq!(extract_object_span("} nothing here {"), None);
    }

    #[test]
    fn multibyte_text_around_object() {
        let text = "résumé → {\"status\":\"ok\"} ← fin";
        assert_eq!(extract_object_span(text), Some("{\"status\":\"ok\"}"));
    }
}
