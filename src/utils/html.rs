//! Minimal HTML text helpers.

/// Escape angle brackets only.
///
/// Code snippets are shown inside `<pre><code>`; `&` and quotes pass through
/// untouched so pre-escaped entities in front matter still render.
pub fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_tags() {
        assert_eq!(
            escape_angle_brackets("Vec<Box<dyn Fn()>>"),
            "Vec&lt;Box&lt;dyn Fn()&gt;&gt;"
        );
    }

    #[test]
    fn test_leaves_other_entities() {
        assert_eq!(escape_angle_brackets(r#"a && "b" 'c'"#), r#"a && "b" 'c'"#);
        assert_eq!(escape_angle_brackets("&lt;"), "&lt;");
    }
}
