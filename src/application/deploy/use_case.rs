//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Collect API entries (explicit list or discovery)
//! 2. Draw a build id for previews
//! 3. Compile the `DeploymentPlan`
//! 4. Provision it, retrying transient failures
//! 5. Format the named outputs
//!
//! All topology rules live in the domain services; this is orchestration only.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{BuildContext, DeploymentPlan};
use crate::domain::ports::{
    BuildIdGenerator, DeployEvent, DeployEventSink, EntryDiscovery, NoopEventSink, Provisioner,
    ProvisionerResult,
};
use crate::domain::services::{DomainResolver, OutputFormatter, TopologyCompiler};
use crate::domain::value_objects::DeployMode;
use crate::error::{ServerlessUiError, ServerlessUiResult};

use super::options::DeployOptions;
use super::result::DeployResult;

/// Deploy use case, parameterized by its ports
pub struct DeployUseCase<P, G, D>
where
    P: Provisioner,
    G: BuildIdGenerator,
    D: EntryDiscovery,
{
    provisioner: P,
    build_ids: G,
    discovery: D,
}

impl<P, G, D> DeployUseCase<P, G, D>
where
    P: Provisioner,
    G: BuildIdGenerator,
    D: EntryDiscovery,
{
    pub fn new(provisioner: P, build_ids: G, discovery: D) -> Self {
        Self {
            provisioner,
            build_ids,
            discovery,
        }
    }

    pub fn provisioner(&self) -> &P {
        &self.provisioner
    }

    /// Execute the deploy use case
    pub fn execute(&self, options: &DeployOptions) -> ServerlessUiResult<DeployResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> ServerlessUiResult<DeployResult> {
        let mut warnings = Vec::new();

        let mode = DeployMode::from_flags(options.next_app, options.private_s3)?;
        let build_id = (!options.production).then(|| self.build_ids.generate());
        let stack_name = TopologyCompiler::stack_name(build_id.as_ref(), options.production)?;

        event_sink.on_event(DeployEvent::Started {
            stack_name,
            mode,
            production: options.production,
            provisioner: self.provisioner.name().to_string(),
        });

        // Step 1: Collect entries
        let entries = self.collect_entries(options, mode, &mut warnings)?;
        event_sink.on_event(DeployEvent::EntriesResolved {
            count: entries.len(),
        });

        if let Some(domain) = &options.domain {
            if !domain.is_empty() && !domain.is_complete() {
                warnings.push(format!(
                    "custom domain ignored, missing {}",
                    domain.missing_fields().join(", ")
                ));
            }
        }

        for message in &warnings {
            event_sink.on_event(DeployEvent::Warning {
                message: message.clone(),
            });
        }

        // Step 2: Compile
        let ctx = BuildContext {
            api_entries: entries,
            ui_entry: options.ui_entry.clone(),
            build_id,
            is_prod: options.production,
            domain: options.domain.clone(),
            is_next_app: options.next_app,
            is_private_s3: options.private_s3,
            api_environment: options.api_environment.clone(),
            duplicate_routes: options.duplicate_routes,
        };
        let plan = TopologyCompiler::compile(&ctx)?;
        let decision =
            DomainResolver::resolve(ctx.domain.as_ref(), ctx.build_id.as_ref(), ctx.is_prod);

        event_sink.on_event(DeployEvent::Compiled {
            compute_count: plan.compute.len(),
            route_count: plan.routes.len(),
            alias: decision.hostname().map(str::to_string),
        });

        if options.dry_run {
            event_sink.on_event(DeployEvent::Completed {
                output_count: 0,
                dry_run: true,
            });
            return Ok(DeployResult {
                plan,
                decision,
                provisioned: None,
                outputs: Vec::new(),
                attempts: 0,
                warnings,
                dry_run: true,
            });
        }

        // Step 3: Provision
        let (provisioned, attempts) = self.provision_with_retry(&plan, options, &event_sink)?;
        event_sink.on_event(DeployEvent::Provisioned {
            assigned_domain: provisioned.assigned_domain.clone(),
        });

        // Step 4: Outputs
        let outputs = OutputFormatter::format(&plan, &decision, &provisioned);
        event_sink.on_event(DeployEvent::Completed {
            output_count: outputs.len(),
            dry_run: false,
        });

        Ok(DeployResult {
            plan,
            decision,
            provisioned: Some(provisioned),
            outputs,
            attempts,
            warnings,
            dry_run: false,
        })
    }

    fn collect_entries(
        &self,
        options: &DeployOptions,
        mode: DeployMode,
        warnings: &mut Vec<String>,
    ) -> ServerlessUiResult<Vec<PathBuf>> {
        if !mode.routes_api_entries() {
            if options.api_entries.as_ref().is_some_and(|e| !e.is_empty()) {
                warnings.push(format!("api entries are ignored in {} mode", mode));
            }
            return Ok(Vec::new());
        }

        match &options.api_entries {
            Some(entries) => Ok(entries.clone()),
            None => Ok(self.discovery.discover(&options.functions_dir)?),
        }
    }

    /// Call the provisioner until it succeeds, fails permanently, or the
    /// attempt budget runs out. The pause grows linearly with the attempt.
    fn provision_with_retry(
        &self,
        plan: &DeploymentPlan,
        options: &DeployOptions,
        event_sink: &Arc<dyn DeployEventSink>,
    ) -> ServerlessUiResult<(ProvisionerResult, u32)> {
        let max_attempts = options.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            if event_sink.wants_detailed_events() {
                event_sink.on_event(DeployEvent::ProvisionAttempt {
                    attempt,
                    max_attempts,
                });
            }

            match self.provisioner.provision(plan) {
                Ok(result) => return Ok((result, attempt)),
                Err(err) if !err.is_retryable() => return Err(err.into()),
                Err(err) if attempt >= max_attempts => {
                    return Err(ServerlessUiError::RetriesExhausted {
                        attempts: attempt,
                        last: err,
                    })
                }
                Err(err) => {
                    event_sink.on_event(DeployEvent::ProvisionRetry {
                        attempt,
                        error: err.to_string(),
                    });
                    let pause = retry_pause(options.retry_delay, attempt);
                    if !pause.is_zero() {
                        std::thread::sleep(pause);
                    }
                }
            }
        }
    }
}

/// Linear backoff, saturating instead of overflowing for huge configured delays
pub(super) fn retry_pause(delay: Duration, attempt: u32) -> Duration {
    delay.checked_mul(attempt).unwrap_or(Duration::MAX)
}
