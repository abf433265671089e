//! Output formatting service
//!
//! Renders the user-facing URLs of a deployment. The base is the alias
//! hostname when one was resolved, otherwise the domain the CDN assigned.
//! Every URL is scheme-qualified.

use crate::domain::entities::{api_path, DeploymentPlan, NamedOutput, BASE_URL_OUTPUT};
use crate::domain::ports::ProvisionerResult;

use super::domain_resolver::DomainDecision;

/// Pure output formatter
pub struct OutputFormatter;

impl OutputFormatter {
    /// `Base Url` followed by one `Function Path - {route}` per API function
    pub fn format(
        plan: &DeploymentPlan,
        decision: &DomainDecision,
        provisioned: &ProvisionerResult,
    ) -> Vec<NamedOutput> {
        let base = Self::base_url(decision, provisioned);

        let mut outputs = Vec::with_capacity(1 + plan.compute.len());
        outputs.push(NamedOutput::new(BASE_URL_OUTPUT, base.clone()));
        outputs.extend(plan.api_nodes().map(|node| {
            NamedOutput::new(
                NamedOutput::function_path_name(&node.route_name),
                format!("{}{}", base, api_path(&node.route_name)),
            )
        }));
        outputs
    }

    /// `https://{host}` for the alias or the assigned domain
    pub fn base_url(decision: &DomainDecision, provisioned: &ProvisionerResult) -> String {
        let host = decision
            .hostname()
            .unwrap_or_else(|| bare_host(&provisioned.assigned_domain));
        format!("https://{}", host)
    }
}

/// Strip any scheme or trailing slash a provisioner may have included
fn bare_host(domain: &str) -> &str {
    let domain = domain.trim();
    let domain = domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain);
    domain.trim_end_matches('/')
}
