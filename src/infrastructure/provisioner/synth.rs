//! Synth Provisioner
//!
//! Offline provisioner: validates what the cloud would reject, writes each
//! plan as a JSON document under an output directory, and reports values
//! derived from the stack name in place of the ones the CDN would assign.
//! Downstream tooling deploys the written documents.

use std::path::PathBuf;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::domain::entities::{DeploymentPlan, DomainBootstrapPlan, DomainBootstrapResult};
use crate::domain::ports::{ProvisionError, Provisioner, ProvisionerResult};
use crate::infrastructure::fs::atomic_write;

/// Suffix of CDN-assigned domains
pub const CDN_DOMAIN_SUFFIX: &str = "cloudfront.net";

/// Format version of the written documents
pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Serialize)]
struct Document<'a, T: Serialize> {
    version: u32,
    kind: &'static str,
    generated_at: String,
    body: &'a T,
}

/// Writes plan documents to `out_dir`
#[derive(Debug, Clone)]
pub struct SynthProvisioner {
    out_dir: PathBuf,
}

impl SynthProvisioner {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Path of the document written for a stack
    pub fn document_path(&self, stack_name: &str) -> PathBuf {
        self.out_dir.join(format!("{}.plan.json", stack_name))
    }

    /// `d{13 hex}.cloudfront.net`, stable per stack name
    pub fn assigned_domain(stack_name: &str) -> String {
        format!("d{}.{}", &digest_hex(stack_name)[..13], CDN_DOMAIN_SUFFIX)
    }

    fn write<T: Serialize>(
        &self,
        stack_name: &str,
        kind: &'static str,
        body: &T,
    ) -> Result<PathBuf, ProvisionError> {
        let document = Document {
            version: DOCUMENT_VERSION,
            kind,
            generated_at: chrono::Utc::now().to_rfc3339(),
            body,
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| ProvisionError::Permanent(format!("cannot serialize plan: {}", e)))?;

        let path = self.document_path(stack_name);
        atomic_write(&path, json.as_bytes()).map_err(|e| {
            ProvisionError::Transient(format!("cannot write {}: {}", path.display(), e))
        })?;
        Ok(path)
    }

    fn validate(plan: &DeploymentPlan) -> Result<(), ProvisionError> {
        let Some(alias) = &plan.domain_alias else {
            return Ok(());
        };

        if !is_hosted_zone_id(&alias.hosted_zone_id) {
            return Err(ProvisionError::Permanent(format!(
                "invalid hosted zone id '{}'",
                alias.hosted_zone_id
            )));
        }
        if !alias.certificate_arn.starts_with("arn:aws:acm:") {
            return Err(ProvisionError::Permanent(format!(
                "invalid certificate arn '{}'",
                alias.certificate_arn
            )));
        }
        Ok(())
    }
}

impl Provisioner for SynthProvisioner {
    fn provision(&self, plan: &DeploymentPlan) -> Result<ProvisionerResult, ProvisionError> {
        Self::validate(plan)?;
        self.write(&plan.stack_name, "deployment", plan)?;

        let result = plan.compute.iter().fold(
            ProvisionerResult::new(Self::assigned_domain(&plan.stack_name)),
            |result, node| {
                result.with_ref(
                    node.route_name.clone(),
                    format!("{}-{}", plan.stack_name, node.route_name),
                )
            },
        );
        Ok(result)
    }

    fn provision_domain(
        &self,
        plan: &DomainBootstrapPlan,
    ) -> Result<DomainBootstrapResult, ProvisionError> {
        self.write(&plan.stack_name, "domain", plan)?;

        let digest = digest_hex(&plan.zone_name);
        let hosted_zone_id = format!("Z{}", digest[..20].to_uppercase());
        let certificate_arn = format!(
            "arn:aws:acm:{}:000000000000:certificate/{}-{}-{}-{}-{}",
            plan.region,
            &digest[0..8],
            &digest[8..12],
            &digest[12..16],
            &digest[16..20],
            &digest[20..32]
        );
        let name_servers = (1..=4)
            .map(|n| format!("ns-{}.awsdns-{:02}.net", &digest[32 + n..36 + n], n))
            .collect();

        Ok(DomainBootstrapResult {
            hosted_zone_id,
            certificate_arn,
            name_servers,
        })
    }

    fn name(&self) -> &'static str {
        "synth"
    }
}

fn digest_hex(input: &str) -> String {
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

fn is_hosted_zone_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}
