//! Configuration loading and persistence

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::DomainConfig;
use crate::error::{ServerlessUiError, ServerlessUiResult};
use crate::infrastructure::fs::atomic_write;

use super::types::Config;

pub use crate::domain::value_objects::ConfigWarning;

/// File name of the project config, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "serverlessui.toml";

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "SERVERLESSUI_";

/// A config plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// The file that was loaded, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ServerlessUiResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ServerlessUiError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config for a command.
///
/// An explicit path must exist and parse. Otherwise the first existing
/// candidate (project, then user) is loaded; parse errors are reported
/// rather than skipped. Environment overrides are applied last.
pub fn discover(
    project_root: Option<&Path>,
    explicit: Option<&Path>,
) -> ServerlessUiResult<LoadedConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => candidate_paths(project_root).into_iter().find(|p| p.exists()),
    };

    let Some(path) = path else {
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            ..Default::default()
        });
    };

    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source: Some(path),
        warnings,
    })
}

fn candidate_paths(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(root) = project_root {
        paths.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user) = user_config_path() {
        paths.push(user);
    }
    paths
}

/// `{config_dir}/serverlessui/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("serverlessui").join("config.toml"))
}

/// Apply environment variable overrides (SERVERLESSUI_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`, so tests need not touch the process env
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

    // Any domain variable replaces the file's triple as a whole
    let env_domain = DomainConfig {
        domain_name: var("DOMAIN_NAME"),
        hosted_zone_id: var("HOSTED_ZONE_ID"),
        certificate_arn: var("CERTIFICATE_ARN"),
    };
    config.domain = config.domain.superseded_by(env_domain);

    if let Some(dir) = var("OUT_DIR") {
        config.provision.out_dir = PathBuf::from(dir);
    }

    if let Some(attempts) = var("MAX_ATTEMPTS").and_then(|v| v.trim().parse::<u32>().ok()) {
        config.provision.max_attempts = attempts;
    }

    config
}

/// Save the domain triple into the `[domain]` table of a config file.
///
/// Other tables are preserved; comments are not.
pub fn save_domain(config_path: &Path, domain: &DomainConfig) -> ServerlessUiResult<()> {
    let existing = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let mut document: toml::Table =
        toml::from_str(&existing).map_err(|e| ServerlessUiError::InvalidConfig {
            file: config_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut table = toml::Table::new();
    let fields = [
        ("domain_name", &domain.domain_name),
        ("hosted_zone_id", &domain.hosted_zone_id),
        ("certificate_arn", &domain.certificate_arn),
    ];
    for (key, value) in fields {
        if let Some(value) = value {
            table.insert(key.to_string(), toml::Value::String(value.clone()));
        }
    }
    document.insert("domain".to_string(), toml::Value::Table(table));

    let rendered = toml::to_string(&document).map_err(|e| ServerlessUiError::InvalidConfig {
        file: config_path.to_path_buf(),
        message: e.to_string(),
    })?;
    atomic_write(config_path, rendered.as_bytes())?;
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "domain",
        "domain_name",
        "hosted_zone_id",
        "certificate_arn",
        "deploy",
        "functions",
        "dir",
        "next_app",
        "private_s3",
        "duplicate_routes",
        "api",
        "environment",
        "provision",
        "out_dir",
        "max_attempts",
        "retry_delay_ms",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
