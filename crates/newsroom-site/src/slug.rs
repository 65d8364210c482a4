//! URL slug generation.

/// Convert text to a URL-friendly slug.
///
/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single dash, with no leading or trailing dash.
/// Non-ASCII letters are dropped like any other separator, so slugs are
/// always safe path segments.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true; // Prevents leading dash
    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            result.push('-');
            last_was_dash = true;
        }
    }
    if result.ends_with('-') {
        result.pop();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Launch Day!"), "launch-day");
    }

    #[test]
    fn test_slugify_collapses_separator_runs() {
        assert_eq!(slugify("a -- b___c"), "a-b-c");
    }

    #[test]
    fn test_slugify_trims_dashes() {
        assert_eq!(slugify("  --Hello--  "), "hello");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("ĚSĚGAMES news"), "s-games-news");
        assert_eq!(slugify("Über cool"), "ber-cool");
    }

    #[test]
    fn test_slugify_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Version 2.0 released"), "version-2-0-released");
    }
}
