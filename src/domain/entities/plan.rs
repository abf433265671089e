//! DeploymentPlan entity - the provider-agnostic output of the compiler
//!
//! Everything here is a flat value. Cross references (route → function,
//! alias → distribution) are by name, never by handle; the provisioner owns
//! the real resource graph.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DeployMode;

/// Path pattern of the catch-all route
pub const DEFAULT_PATH_PATTERN: &str = "*";

/// Object served for `/`
pub const DEFAULT_ROOT_OBJECT: &str = "index.html";

/// Entry point symbol every function exports
pub const FUNCTION_HANDLER: &str = "handler";

/// Runtime every function is deployed on
pub const FUNCTION_RUNTIME: &str = "nodejs14.x";

/// Who may read the storage bucket directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageAccess {
    Public,
    /// Only the distribution's origin identity may read
    DistributionOnly,
}

/// How the storage node takes part in routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageRole {
    /// Target of the default route
    RoutingTarget,
    /// Read by the app function, not routed to
    InternalAssetSource,
}

/// The static asset sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageNode {
    /// UI bundle uploaded into the bucket
    pub asset_source: PathBuf,
    pub access: StorageAccess,
    pub role: StorageRole,
    /// Deny any request not made over TLS
    pub https_only: bool,
    pub default_root_object: String,
}

/// What a compute node is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComputeRole {
    /// Serves exactly `/api/{route_name}`
    Api,
    /// Serves every path of a full-stack app
    App,
}

/// A serverless function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeNode {
    pub route_name: String,
    pub source_path: PathBuf,
    pub role: ComputeRole,
    pub handler: String,
    pub runtime: String,
    pub environment: BTreeMap<String, String>,
}

/// Where a route sends requests
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "kebab-case")]
pub enum RouteTarget {
    Storage,
    /// Compute node, by route name
    Compute(String),
}

/// Edge caching for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CachePolicy {
    Optimized,
    Disabled,
}

/// HTTP methods a route forwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AllowedMethods {
    GetHead,
    AllowAll,
}

/// Handling of plain HTTP requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewerProtocol {
    RedirectToHttps,
    HttpsOnly,
}

/// One row of the ranked routing table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path_pattern: String,
    pub target: RouteTarget,
    /// Higher rank wins; the default route is always rank 0
    pub rank: u32,
    pub cache: CachePolicy,
    pub methods: AllowedMethods,
    pub viewer_protocol: ViewerProtocol,
    pub compress: bool,
}

impl RouteEntry {
    pub fn is_default(&self) -> bool {
        self.path_pattern == DEFAULT_PATH_PATTERN
    }
}

/// DNS record family for an alias
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DnsRecordKind {
    A,
    #[serde(rename = "AAAA")]
    Aaaa,
}

/// An alias record pointing at the distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub kind: DnsRecordKind,
    /// Record name relative to the zone (`www` or the build id)
    pub name: String,
}

/// Custom hostname binding for the distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainAlias {
    pub hostnames: Vec<String>,
    pub zone_name: String,
    pub hosted_zone_id: String,
    pub certificate_arn: String,
    pub records: Vec<DnsRecord>,
}

impl DomainAlias {
    /// The hostname outputs are rendered against
    pub fn primary_hostname(&self) -> Option<&str> {
        self.hostnames.first().map(String::as_str)
    }
}

/// The resolved deployment plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentPlan {
    pub stack_name: String,
    pub mode: DeployMode,
    pub storage: StorageNode,
    pub compute: Vec<ComputeNode>,
    /// Sorted by rank, highest first
    pub routes: Vec<RouteEntry>,
    pub domain_alias: Option<DomainAlias>,
}

impl DeploymentPlan {
    /// Compute nodes serving `/api/{route}` paths, in plan order
    pub fn api_nodes(&self) -> impl Iterator<Item = &ComputeNode> {
        self.compute.iter().filter(|n| n.role == ComputeRole::Api)
    }

    /// The catch-all route
    pub fn default_route(&self) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| r.is_default())
    }

    /// Look up a route by its exact path pattern
    pub fn route(&self, path_pattern: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| r.path_pattern == path_pattern)
    }

    pub fn is_website_only(&self) -> bool {
        self.compute.is_empty()
    }
}
