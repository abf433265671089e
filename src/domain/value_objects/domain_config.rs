//! DomainConfig value object - the custom-domain triple
//!
//! The three fields only mean something together. A partially filled
//! config is kept as-is so callers can report what is missing, but it
//! never produces an alias.

use serde::{Deserialize, Serialize};

/// Custom domain settings: apex domain, Route53 zone and ACM certificate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainConfig {
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(default)]
    pub hosted_zone_id: Option<String>,
    #[serde(default)]
    pub certificate_arn: Option<String>,
}

/// A DomainConfig with every field present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteDomain<'a> {
    pub domain_name: &'a str,
    pub hosted_zone_id: &'a str,
    pub certificate_arn: &'a str,
}

impl DomainConfig {
    pub fn new(
        domain_name: impl Into<String>,
        hosted_zone_id: impl Into<String>,
        certificate_arn: impl Into<String>,
    ) -> Self {
        Self {
            domain_name: Some(domain_name.into()),
            hosted_zone_id: Some(hosted_zone_id.into()),
            certificate_arn: Some(certificate_arn.into()),
        }
    }

    /// Borrow the triple if all three fields are non-blank
    pub fn complete(&self) -> Option<CompleteDomain<'_>> {
        Some(CompleteDomain {
            domain_name: non_blank(&self.domain_name)?,
            hosted_zone_id: non_blank(&self.hosted_zone_id)?,
            certificate_arn: non_blank(&self.certificate_arn)?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.complete().is_some()
    }

    /// True when no field carries a value
    pub fn is_empty(&self) -> bool {
        non_blank(&self.domain_name).is_none()
            && non_blank(&self.hosted_zone_id).is_none()
            && non_blank(&self.certificate_arn).is_none()
    }

    /// Names of the fields that are missing or blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if non_blank(&self.domain_name).is_none() {
            missing.push("domain_name");
        }
        if non_blank(&self.hosted_zone_id).is_none() {
            missing.push("hosted_zone_id");
        }
        if non_blank(&self.certificate_arn).is_none() {
            missing.push("certificate_arn");
        }
        missing
    }

    /// The triple from a higher-precedence source, taken whole.
    ///
    /// If `other` sets any field it replaces `self` entirely, so a zone or
    /// certificate never carries over to a different domain name.
    pub fn superseded_by(self, other: DomainConfig) -> Self {
        if other.is_empty() {
            self
        } else {
            other
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
