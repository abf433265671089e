//! Domain bootstrap planning service
//!
//! Plans the hosted zone and wildcard certificate a custom domain needs
//! before deployments can alias to it.

use crate::domain::entities::{CertificateValidation, DomainBootstrapPlan};
use crate::error::CompileError;

/// CDN certificates are only accepted from this region
pub const CERTIFICATE_REGION: &str = "us-east-1";

/// Prefix of domain bootstrap stack names
pub const DOMAIN_STACK_PREFIX: &str = "ServerlessUIDomain-";

/// Pure domain bootstrap planner
pub struct DomainBootstrapPlanner;

impl DomainBootstrapPlanner {
    pub fn plan(domain_name: &str) -> Result<DomainBootstrapPlan, CompileError> {
        let domain = Self::validate(domain_name)?;

        Ok(DomainBootstrapPlan {
            stack_name: Self::stack_name(domain),
            region: CERTIFICATE_REGION.to_string(),
            zone_name: domain.to_string(),
            certificate_domain: format!("*.{}", domain),
            validation: CertificateValidation::Dns,
        })
    }

    /// `example.com` → `ServerlessUIDomain-exampledotcom`
    pub fn stack_name(domain_name: &str) -> String {
        format!("{}{}", DOMAIN_STACK_PREFIX, domain_name.replace('.', "dot"))
    }

    fn validate(domain_name: &str) -> Result<&str, CompileError> {
        let domain = domain_name.trim().trim_end_matches('.');
        if domain.is_empty() {
            return Err(CompileError::configuration("domain name is empty"));
        }
        let malformed = !domain.contains('.')
            || domain.starts_with('.')
            || domain.starts_with('*')
            || domain.contains("..")
            || domain
                .chars()
                .any(|c| c.is_whitespace() || c == '/' || c == ':');
        if malformed {
            return Err(CompileError::configuration(format!(
                "'{}' is not an apex domain name",
                domain_name
            )));
        }
        Ok(domain)
    }
}
