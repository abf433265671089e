//! Domain alias resolution service
//!
//! Decides whether the distribution gets a custom hostname. Only a complete
//! domain triple produces an alias; anything partial falls back to the
//! CDN-assigned domain after provisioning.
//!
//! Hostnames:
//! - preview: `{build_id}.{domain_name}`
//! - production: `www.{domain_name}`

use crate::domain::entities::{DnsRecord, DnsRecordKind, DomainAlias};
use crate::domain::value_objects::{BuildId, DomainConfig};

/// Host label used for production deployments
pub const PRODUCTION_HOST_LABEL: &str = "www";

/// Outcome of domain resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainDecision {
    /// Bind the distribution to a custom hostname
    Alias(DomainAlias),
    /// Use the provisioner-assigned domain
    Absent,
}

impl DomainDecision {
    pub fn is_alias(&self) -> bool {
        matches!(self, Self::Alias(_))
    }

    /// The alias hostname, if any
    pub fn hostname(&self) -> Option<&str> {
        match self {
            Self::Alias(alias) => alias.primary_hostname(),
            Self::Absent => None,
        }
    }

    pub fn into_alias(self) -> Option<DomainAlias> {
        match self {
            Self::Alias(alias) => Some(alias),
            Self::Absent => None,
        }
    }
}

/// Pure domain resolver
pub struct DomainResolver;

impl DomainResolver {
    /// Resolve the alias for a deployment.
    ///
    /// Production always uses the `www` label; a preview uses its build id,
    /// or `www` when none was supplied.
    pub fn resolve(
        domain: Option<&DomainConfig>,
        build_id: Option<&BuildId>,
        is_prod: bool,
    ) -> DomainDecision {
        let Some(complete) = domain.and_then(DomainConfig::complete) else {
            return DomainDecision::Absent;
        };

        let label = Self::host_label(build_id, is_prod);
        let hostname = format!("{}.{}", label, complete.domain_name);

        DomainDecision::Alias(DomainAlias {
            hostnames: vec![hostname],
            zone_name: complete.domain_name.to_string(),
            hosted_zone_id: complete.hosted_zone_id.to_string(),
            certificate_arn: complete.certificate_arn.to_string(),
            records: vec![
                DnsRecord {
                    kind: DnsRecordKind::A,
                    name: label.clone(),
                },
                DnsRecord {
                    kind: DnsRecordKind::Aaaa,
                    name: label,
                },
            ],
        })
    }

    /// Leftmost DNS label of the alias hostname.
    ///
    /// A production build is always `www`, even if a build id is passed;
    /// `TopologyCompiler::compile` rejects that pairing before it gets here.
    pub fn host_label(build_id: Option<&BuildId>, is_prod: bool) -> String {
        match build_id {
            Some(id) if !is_prod => id.to_string(),
            _ => PRODUCTION_HOST_LABEL.to_string(),
        }
    }
}
