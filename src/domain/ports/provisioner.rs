//! Provisioner Port
//!
//! The boundary to real infrastructure. Everything before this point is a
//! pure value transformation; implementations perform I/O and may fail.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::{DeploymentPlan, DomainBootstrapPlan, DomainBootstrapResult};

/// Failure reported by a provisioner
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProvisionError {
    /// Worth retrying (throttling, network, partial writes)
    #[error("provisioning error: {0}")]
    Transient(String),

    /// Retrying cannot help (e.g. unknown hosted zone)
    #[error("permanent configuration error: {0}")]
    Permanent(String),
}

impl ProvisionError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

/// Runtime values known only after provisioning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionerResult {
    /// Domain name assigned by the CDN (e.g. `d123.cloudfront.net`)
    pub assigned_domain: String,
    /// Route name → provider endpoint reference
    pub resource_refs: BTreeMap<String, String>,
}

impl ProvisionerResult {
    pub fn new(assigned_domain: impl Into<String>) -> Self {
        Self {
            assigned_domain: assigned_domain.into(),
            resource_refs: BTreeMap::new(),
        }
    }

    pub fn with_ref(mut self, route_name: impl Into<String>, reference: impl Into<String>) -> Self {
        self.resource_refs.insert(route_name.into(), reference.into());
        self
    }
}

/// Turns plans into live infrastructure
pub trait Provisioner: Send + Sync {
    /// Create or update everything described by the plan
    fn provision(&self, plan: &DeploymentPlan) -> Result<ProvisionerResult, ProvisionError>;

    /// Create the hosted zone and wildcard certificate for a domain
    fn provision_domain(
        &self,
        plan: &DomainBootstrapPlan,
    ) -> Result<DomainBootstrapResult, ProvisionError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}
