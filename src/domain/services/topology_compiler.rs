//! Topology compilation service
//!
//! Combines resolved entries, the domain decision and the mode flags into a
//! `DeploymentPlan`. Compilation is all-or-nothing and deterministic: equal
//! contexts always yield equal plans.
//!
//! Routing precedence is explicit. The catch-all route has rank 0 and every
//! `/api/{route}` entry has a rank above it, whatever order the entries were
//! declared in.

use std::collections::HashMap;

use crate::domain::entities::{
    api_path, AllowedMethods, ApiEntry, BuildContext, CachePolicy, ComputeNode, ComputeRole,
    DeploymentPlan, RouteEntry, RouteTarget, StorageAccess, StorageNode, StorageRole,
    ViewerProtocol, DEFAULT_PATH_PATTERN, DEFAULT_ROOT_OBJECT, FUNCTION_HANDLER,
    FUNCTION_RUNTIME,
};
use crate::domain::value_objects::{BuildId, DeployMode, DuplicateRoutePolicy};
use crate::error::CompileError;

use super::domain_resolver::DomainResolver;
use super::entry_resolver::EntryResolver;

/// Rank of the catch-all route
pub const DEFAULT_ROUTE_RANK: u32 = 0;

/// Route name of the single function in next-app mode
pub const NEXT_APP_FUNCTION: &str = "next";

/// Stack name used for production deployments
pub const PRODUCTION_STACK_NAME: &str = "ServerlessUIAppProduction";

/// Prefix of preview stack names (followed by the build id)
pub const PREVIEW_STACK_PREFIX: &str = "ServerlessUIAppPreview";

/// Pure topology compiler
pub struct TopologyCompiler;

impl TopologyCompiler {
    /// Compile a build context into a deployment plan
    pub fn compile(ctx: &BuildContext) -> Result<DeploymentPlan, CompileError> {
        let mode = DeployMode::from_flags(ctx.is_next_app, ctx.is_private_s3)?;
        let stack_name = Self::stack_name(ctx.build_id.as_ref(), ctx.is_prod)?;

        let domain_alias =
            DomainResolver::resolve(ctx.domain.as_ref(), ctx.build_id.as_ref(), ctx.is_prod)
                .into_alias();

        let (storage, compute, mut routes) = match mode {
            DeployMode::Static | DeployMode::PrivateStorage => {
                let entries = EntryResolver::resolve(&ctx.api_entries)?;
                let entries = Self::apply_duplicate_policy(entries, ctx.duplicate_routes)?;
                Self::static_topology(ctx, mode, &entries)
            }
            DeployMode::NextApp => Self::next_app_topology(ctx),
        };

        routes.sort_by(|a, b| b.rank.cmp(&a.rank));

        Ok(DeploymentPlan {
            stack_name,
            mode,
            storage,
            compute,
            routes,
            domain_alias,
        })
    }

    /// Stack name for a deployment.
    ///
    /// A build id must be present exactly when the build is not production.
    pub fn stack_name(build_id: Option<&BuildId>, is_prod: bool) -> Result<String, CompileError> {
        match (build_id, is_prod) {
            (None, true) => Ok(PRODUCTION_STACK_NAME.to_string()),
            (Some(id), false) => Ok(format!("{}{}", PREVIEW_STACK_PREFIX, id)),
            (Some(id), true) => Err(CompileError::configuration(format!(
                "production builds must not carry a build id (got '{}')",
                id
            ))),
            (None, false) => Err(CompileError::configuration(
                "preview builds require a build id",
            )),
        }
    }

    /// Collapse entries sharing a route name according to `policy`.
    ///
    /// With `LastWins` the surviving entry keeps the position of the first
    /// occurrence and the source of the last.
    pub fn apply_duplicate_policy(
        entries: Vec<ApiEntry>,
        policy: DuplicateRoutePolicy,
    ) -> Result<Vec<ApiEntry>, CompileError> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut unique: Vec<ApiEntry> = Vec::with_capacity(entries.len());

        for entry in entries {
            match index.get(entry.route_name()) {
                None => {
                    index.insert(entry.route_name().to_string(), unique.len());
                    unique.push(entry);
                }
                Some(&pos) => match policy {
                    DuplicateRoutePolicy::Reject => {
                        return Err(CompileError::configuration(format!(
                            "route '{}' is declared by both '{}' and '{}'",
                            entry.route_name(),
                            unique[pos].source_path().display(),
                            entry.source_path().display()
                        )));
                    }
                    DuplicateRoutePolicy::LastWins => unique[pos] = entry,
                },
            }
        }

        Ok(unique)
    }

    fn static_topology(
        ctx: &BuildContext,
        mode: DeployMode,
        entries: &[ApiEntry],
    ) -> (StorageNode, Vec<ComputeNode>, Vec<RouteEntry>) {
        let access = match mode {
            DeployMode::PrivateStorage => StorageAccess::DistributionOnly,
            _ => StorageAccess::Public,
        };
        let storage = Self::storage_node(ctx, access, StorageRole::RoutingTarget);

        let compute = entries
            .iter()
            .map(|entry| ComputeNode {
                route_name: entry.route_name().to_string(),
                source_path: entry.source_path().to_path_buf(),
                role: ComputeRole::Api,
                handler: FUNCTION_HANDLER.to_string(),
                runtime: FUNCTION_RUNTIME.to_string(),
                environment: ctx.api_environment.clone(),
            })
            .collect();

        let count = entries.len() as u32;
        let mut routes: Vec<RouteEntry> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| RouteEntry {
                path_pattern: api_path(entry.route_name()),
                target: RouteTarget::Compute(entry.route_name().to_string()),
                rank: count - i as u32,
                cache: CachePolicy::Disabled,
                methods: AllowedMethods::AllowAll,
                viewer_protocol: ViewerProtocol::RedirectToHttps,
                compress: false,
            })
            .collect();
        routes.push(Self::default_route(RouteTarget::Storage, CachePolicy::Optimized));

        (storage, compute, routes)
    }

    fn next_app_topology(ctx: &BuildContext) -> (StorageNode, Vec<ComputeNode>, Vec<RouteEntry>) {
        let storage = Self::storage_node(
            ctx,
            StorageAccess::DistributionOnly,
            StorageRole::InternalAssetSource,
        );

        let app = ComputeNode {
            route_name: NEXT_APP_FUNCTION.to_string(),
            source_path: ctx.ui_entry.clone(),
            role: ComputeRole::App,
            handler: FUNCTION_HANDLER.to_string(),
            runtime: FUNCTION_RUNTIME.to_string(),
            environment: ctx.api_environment.clone(),
        };

        let routes = vec![Self::default_route(
            RouteTarget::Compute(NEXT_APP_FUNCTION.to_string()),
            CachePolicy::Disabled,
        )];

        (storage, vec![app], routes)
    }

    fn storage_node(ctx: &BuildContext, access: StorageAccess, role: StorageRole) -> StorageNode {
        StorageNode {
            asset_source: ctx.ui_entry.clone(),
            access,
            role,
            https_only: true,
            default_root_object: DEFAULT_ROOT_OBJECT.to_string(),
        }
    }

    fn default_route(target: RouteTarget, cache: CachePolicy) -> RouteEntry {
        RouteEntry {
            path_pattern: DEFAULT_PATH_PATTERN.to_string(),
            target,
            rank: DEFAULT_ROUTE_RANK,
            cache,
            methods: AllowedMethods::AllowAll,
            viewer_protocol: ViewerProtocol::RedirectToHttps,
            compress: true,
        }
    }
}
