//! Configure Domain Use Case
//!
//! One-time bootstrap of a custom domain: plan the hosted zone and the
//! wildcard certificate, hand the plan to the provisioner, and return the
//! triple later deploys need.

use crate::domain::entities::{DomainBootstrapPlan, DomainBootstrapResult};
use crate::domain::ports::Provisioner;
use crate::domain::services::DomainBootstrapPlanner;
use crate::domain::value_objects::DomainConfig;
use crate::error::ServerlessUiResult;

/// Result of bootstrapping a domain
#[derive(Debug, Clone)]
pub struct ConfigureDomainResult {
    pub plan: DomainBootstrapPlan,
    pub bootstrap: DomainBootstrapResult,
}

impl ConfigureDomainResult {
    /// The complete triple to store for deploys
    pub fn domain_config(&self) -> DomainConfig {
        DomainConfig::new(
            self.plan.zone_name.clone(),
            self.bootstrap.hosted_zone_id.clone(),
            self.bootstrap.certificate_arn.clone(),
        )
    }
}

pub struct ConfigureDomainUseCase<P: Provisioner> {
    provisioner: P,
}

impl<P: Provisioner> ConfigureDomainUseCase<P> {
    pub fn new(provisioner: P) -> Self {
        Self { provisioner }
    }

    pub fn execute(&self, domain_name: &str) -> ServerlessUiResult<ConfigureDomainResult> {
        let plan = DomainBootstrapPlanner::plan(domain_name)?;
        let bootstrap = self.provisioner.provision_domain(&plan)?;
        Ok(ConfigureDomainResult { plan, bootstrap })
    }
}
