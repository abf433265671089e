//! Terminal capability detection
//!
//! Decides whether human output gets color and unicode icons.

use is_terminal::IsTerminal;

use super::cli::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stderr().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
        is_ci: is_ci_env(&get_env),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["CI", "GITHUB_ACTIONS", "BUILDKITE", "CIRCLECI", "GITLAB_CI"];
    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Some(val) = get_env(key) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
        }
    }

    // Modern terminals default to UTF-8.
    !cfg!(windows)
}

/// Resolve `--color` against the detected capabilities
pub fn color_enabled(when: Option<ColorWhen>, caps: &TerminalCapabilities) -> bool {
    match when {
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps_with(env: &[(&str, &str)], is_tty: bool) -> TerminalCapabilities {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_capabilities_impl(move |key: &str| env.get(key).cloned(), is_tty)
    }

    #[test]
    fn no_color_disables_color() {
        let caps = caps_with(&[("NO_COLOR", "1")], true);
        assert!(!caps.supports_color);
    }

    #[test]
    fn dumb_terminal_disables_unicode() {
        let caps = caps_with(&[("TERM", "dumb")], true);
        assert!(!caps.supports_color);
        assert!(!caps.supports_unicode);
    }

    #[test]
    fn pipe_has_no_color() {
        let caps = caps_with(&[("LANG", "en_US.UTF-8")], false);
        assert!(!caps.supports_color);
        assert!(caps.supports_unicode);
    }

    #[test]
    fn ci_suppresses_auto_color() {
        let caps = caps_with(&[("CI", "true")], true);
        assert!(caps.is_ci);
        assert!(!color_enabled(None, &caps));
        assert!(color_enabled(Some(ColorWhen::Always), &caps));
    }
}
