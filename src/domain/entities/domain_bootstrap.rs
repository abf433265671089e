//! Domain bootstrap entities - hosted zone and wildcard certificate
//!
//! Created once per apex domain, before any deployment can alias to it.

use serde::{Deserialize, Serialize};

/// Certificate validation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateValidation {
    Dns,
}

/// Resources needed to host previews under a custom domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainBootstrapPlan {
    pub stack_name: String,
    /// CDN certificates must live in this region
    pub region: String,
    pub zone_name: String,
    /// `*.{zone_name}`, covering `www` and every build id
    pub certificate_domain: String,
    pub validation: CertificateValidation,
}

/// Identifiers reported back once the zone and certificate exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainBootstrapResult {
    pub hosted_zone_id: String,
    pub certificate_arn: String,
    pub name_servers: Vec<String>,
}
