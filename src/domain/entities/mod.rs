//! Domain Entities
//!
//! - `ApiEntry` - A resolved API route and its source file
//! - `BuildContext` - Inputs for one compilation
//! - `DeploymentPlan` - Storage, compute and routing produced by the compiler
//! - `NamedOutput` - A rendered output URL
//! - `DomainBootstrapPlan` - Zone and certificate for a custom domain

mod api_entry;
mod build_context;
mod domain_bootstrap;
mod named_output;
mod plan;

pub use api_entry::{api_path, ApiEntry, API_PREFIX};
pub use build_context::{BuildContext, DEFAULT_UI_ENTRY};
pub use domain_bootstrap::{CertificateValidation, DomainBootstrapPlan, DomainBootstrapResult};
pub use named_output::{NamedOutput, BASE_URL_OUTPUT, FUNCTION_PATH_OUTPUT};
pub use plan::{
    AllowedMethods, CachePolicy, ComputeNode, ComputeRole, DeploymentPlan, DnsRecord,
    DnsRecordKind, DomainAlias, RouteEntry, RouteTarget, StorageAccess, StorageNode, StorageRole,
    ViewerProtocol, DEFAULT_PATH_PATTERN, DEFAULT_ROOT_OBJECT, FUNCTION_HANDLER, FUNCTION_RUNTIME,
};
