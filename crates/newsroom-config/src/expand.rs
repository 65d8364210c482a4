//! Environment variable expansion for configuration strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::ConfigError;

/// `${VAR:-default}` references; plain `${VAR}` is left to shellexpand.
static ENV_DEFAULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*):-([^}]*)\}").expect("invalid env default regex")
});

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// A `${VAR:-default}` reference takes the default when the variable is
/// unset or empty. A plain `${VAR}` reference to an unset variable is an
/// error; `field` names the offending config key in the message. Text
/// without references passes through unchanged.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Defaulted references are resolved before shellexpand runs: its own
    // `${VAR:-default}` handling falls back only when the variable is
    // unset, while a set-but-empty variable must also take the default.
    let with_defaults =
        ENV_DEFAULT_PATTERN.replace_all(value, |caps: &regex::Captures| {
            match std::env::var(&caps[1]) {
                Ok(v) if !v.is_empty() => v,
                _ => caps[2].to_owned(),
            }
        });

    let context = |name: &str| -> Result<Option<String>, String> {
        match std::env::var(name) {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(format!("${{{name}}} not set")),
        }
    };

    match shellexpand::env_with_context(with_defaults.as_ref(), context) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(e) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: e.cause,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_text_unchanged() {
        assert_eq!(expand_env("plain-value", "f").unwrap(), "plain-value");
    }

    #[test]
    fn test_expand_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NEWSROOM_EXPAND_SET", "abc123");
        }

        assert_eq!(
            expand_env("${NEWSROOM_EXPAND_SET}", "f").unwrap(),
            "abc123"
        );
        assert_eq!(
            expand_env("pre-${NEWSROOM_EXPAND_SET}-post", "f").unwrap(),
            "pre-abc123-post"
        );

        unsafe {
            std::env::remove_var("NEWSROOM_EXPAND_SET");
        }
    }

    #[test]
    fn test_expand_missing_variable_errors() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NEWSROOM_EXPAND_MISSING");
        }

        let err = expand_env("${NEWSROOM_EXPAND_MISSING}", "contentful.access_token").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("NEWSROOM_EXPAND_MISSING"));
        assert!(msg.contains("contentful.access_token"));
    }

    #[test]
    fn test_expand_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NEWSROOM_EXPAND_DEFAULT");
        }

        assert_eq!(
            expand_env("${NEWSROOM_EXPAND_DEFAULT:-fallback}", "f").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_expand_default_ignored_when_set() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NEWSROOM_EXPAND_PRESENT", "real");
        }

        assert_eq!(
            expand_env("${NEWSROOM_EXPAND_PRESENT:-fallback}", "f").unwrap(),
            "real"
        );

        unsafe {
            std::env::remove_var("NEWSROOM_EXPAND_PRESENT");
        }
    }

    #[test]
    fn test_expand_empty_value_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NEWSROOM_EXPAND_EMPTY", "");
        }

        assert_eq!(
            expand_env("${NEWSROOM_EXPAND_EMPTY:-fallback}", "f").unwrap(),
            "fallback"
        );

        unsafe {
            std::env::remove_var("NEWSROOM_EXPAND_EMPTY");
        }
    }

    #[test]
    fn test_expand_empty_value_without_default_stays_empty() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NEWSROOM_EXPAND_EMPTY_PLAIN", "");
        }

        assert_eq!(expand_env("${NEWSROOM_EXPAND_EMPTY_PLAIN}", "f").unwrap(), "");

        unsafe {
            std::env::remove_var("NEWSROOM_EXPAND_EMPTY_PLAIN");
        }
    }

    #[test]
    fn test_expand_mixed_defaulted_and_plain_references() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NEWSROOM_EXPAND_MIX_SET", "space");
            std::env::remove_var("NEWSROOM_EXPAND_MIX_UNSET");
        }

        assert_eq!(
            expand_env(
                "${NEWSROOM_EXPAND_MIX_SET}/${NEWSROOM_EXPAND_MIX_UNSET:-master}",
                "f"
            )
            .unwrap(),
            "space/master"
        );

        unsafe {
            std::env::remove_var("NEWSROOM_EXPAND_MIX_SET");
        }
    }
}
