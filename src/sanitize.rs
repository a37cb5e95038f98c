//! Display-name sanitization applied before a player is stored.

/// Turns operator-supplied text into a name that is safe to store and show.
pub trait NameSanitizer: Send + Sync {
    /// Returns the cleaned name. An empty result means the name is unusable.
    fn sanitize(&self, raw: &str) -> String;
}

/// Strips markup tags and control characters, then normalizes whitespace.
///
/// Text between tags is kept, so `"<b>Ann</b>"` becomes `"Ann"`. An
/// unterminated `<` drops the rest of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripMarkup;

impl NameSanitizer for StripMarkup {
    fn sanitize(&self, raw: &str) -> String {
        let mut text = String::with_capacity(raw.len());
        let mut in_tag = false;
        for ch in raw.chars() {
            match ch {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if in_tag => {}
                c if c.is_control() => text.push(' '),
                c => text.push(c),
            }
        }

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Passes names through with only surrounding whitespace trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimOnly;

impl NameSanitizer for TrimOnly {
    fn sanitize(&self, raw: &str) -> String {
        raw.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_keeps_inner_text() {
        assert_eq!(StripMarkup.sanitize("<b>Bruno</b> Walton"), "Bruno Walton");
        assert_eq!(
            StripMarkup.sanitize("<script>alert(1)</script>Boots"),
            "alert(1)Boots"
        );
    }

    #[test]
    fn collapses_whitespace_and_controls() {
        assert_eq!(StripMarkup.sanitize("  Cathy\t\n  Burton "), "Cathy Burton");
        assert_eq!(StripMarkup.sanitize("Diane\u{0}Grant"), "Diane Grant");
    }

    #[test]
    fn unterminated_tag_drops_tail() {
        assert_eq!(StripMarkup.sanitize("Lucy <img src=x"), "Lucy");
        assert_eq!(StripMarkup.sanitize("<>"), "");
    }

    #[test]
    fn keeps_stray_closing_bracket_and_unicode() {
        assert_eq!(StripMarkup.sanitize("a > b"), "a > b");
        assert_eq!(StripMarkup.sanitize("Ólafur Arnalds"), "Ólafur Arnalds");
    }
}
