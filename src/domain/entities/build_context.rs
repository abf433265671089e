//! BuildContext entity - every compile-time input in one value
//!
//! Built once by the caller and handed to `TopologyCompiler::compile` by
//! reference. The compiler never mutates it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::value_objects::{BuildId, DomainConfig, DuplicateRoutePolicy};

/// Default directory of the built UI bundle
pub const DEFAULT_UI_ENTRY: &str = "./dist";

/// Compile-time inputs for one deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Raw API entry file paths, in declaration order
    pub api_entries: Vec<PathBuf>,
    /// Directory holding the built UI assets
    pub ui_entry: PathBuf,
    /// Preview build token; absent for production
    pub build_id: Option<BuildId>,
    /// Stable production deployment
    pub is_prod: bool,
    /// Custom domain triple, possibly incomplete
    pub domain: Option<DomainConfig>,
    pub is_next_app: bool,
    pub is_private_s3: bool,
    /// Environment passed to every function
    pub api_environment: BTreeMap<String, String>,
    pub duplicate_routes: DuplicateRoutePolicy,
}

impl Default for BuildContext {
    fn default() -> Self {
        Self {
            api_entries: Vec::new(),
            ui_entry: PathBuf::from(DEFAULT_UI_ENTRY),
            build_id: None,
            is_prod: false,
            domain: None,
            is_next_app: false,
            is_private_s3: false,
            api_environment: BTreeMap::new(),
            duplicate_routes: DuplicateRoutePolicy::default(),
        }
    }
}

impl BuildContext {
    /// A preview build with the given id
    pub fn preview(build_id: BuildId) -> Self {
        Self {
            build_id: Some(build_id),
            ..Self::default()
        }
    }

    /// A production build (no build id)
    pub fn production() -> Self {
        Self {
            is_prod: true,
            ..Self::default()
        }
    }

    pub fn with_api_entries<I, P>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.api_entries = entries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ui_entry(mut self, ui_entry: impl Into<PathBuf>) -> Self {
        self.ui_entry = ui_entry.into();
        self
    }

    pub fn with_domain(mut self, domain: DomainConfig) -> Self {
        self.domain = Some(domain);
        self
    }

    pub fn with_next_app(mut self, enabled: bool) -> Self {
        self.is_next_app = enabled;
        self
    }

    pub fn with_private_s3(mut self, enabled: bool) -> Self {
        self.is_private_s3 = enabled;
        self
    }

    pub fn with_api_environment(mut self, environment: BTreeMap<String, String>) -> Self {
        self.api_environment = environment;
        self
    }

    pub fn with_duplicate_routes(mut self, policy: DuplicateRoutePolicy) -> Self {
        self.duplicate_routes = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_carries_build_id() {
        let ctx = BuildContext::preview(BuildId::parse("ab12cd34").unwrap());
        assert!(!ctx.is_prod);
        assert_eq!(ctx.build_id.unwrap().as_str(), "ab12cd34");
    }

    #[test]
    fn production_has_no_build_id() {
        let ctx = BuildContext::production();
        assert!(ctx.is_prod);
        assert!(ctx.build_id.is_none());
        assert_eq!(ctx.ui_entry, PathBuf::from("./dist"));
    }

    #[test]
    fn builder_sets_entries_in_order() {
        let ctx = BuildContext::production().with_api_entries(["b.js", "a.ts"]);
        assert_eq!(
            ctx.api_entries,
            vec![PathBuf::from("b.js"), PathBuf::from("a.ts")]
        );
    }
}
