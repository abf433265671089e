//! Unknown keys found while reading `serverlessui.toml`.

use std::fmt;
use std::path::PathBuf;

/// A config key that serde skipped.
///
/// Loading still succeeds; the CLI prints one of these per stray key so a
/// typo like `functons` does not silently fall back to the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Last segment of the ignored path, e.g. `functons` for `deploy.functons`
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed
    pub line: Option<usize>,
    /// Closest known key, when one is near enough
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(line: Option<usize>) -> ConfigWarning {
        ConfigWarning {
            key: "functons".to_string(),
            file: PathBuf::from("serverlessui.toml"),
            line,
            suggestion: Some("functions".to_string()),
        }
    }

    #[test]
    fn display_points_at_file_and_line() {
        assert_eq!(
            warning(Some(3)).to_string(),
            "Unknown config key 'functons' in serverlessui.toml:3"
        );
    }

    #[test]
    fn display_without_line_names_file_only() {
        assert_eq!(
            warning(None).to_string(),
            "Unknown config key 'functons' in serverlessui.toml"
        );
    }
}
