//! Deploy Result

use crate::domain::entities::{DeploymentPlan, NamedOutput};
use crate::domain::ports::ProvisionerResult;
use crate::domain::services::DomainDecision;

/// Result of a deploy operation
#[derive(Debug, Clone)]
pub struct DeployResult {
    /// The compiled plan
    pub plan: DeploymentPlan,
    pub decision: DomainDecision,
    /// Provisioner response; `None` on a dry run
    pub provisioned: Option<ProvisionerResult>,
    /// Named outputs, `Base Url` first. Empty on a dry run.
    pub outputs: Vec<NamedOutput>,
    /// Provisioning attempts made
    pub attempts: u32,
    pub warnings: Vec<String>,
    pub dry_run: bool,
}

impl DeployResult {
    /// Value of the `Base Url` output, if provisioned
    pub fn base_url(&self) -> Option<&str> {
        self.outputs.first().map(|o| o.value.as_str())
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
