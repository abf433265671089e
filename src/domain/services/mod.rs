//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod domain_bootstrap;
mod domain_resolver;
mod entry_resolver;
mod output_formatter;
mod topology_compiler;

pub use domain_bootstrap::{DomainBootstrapPlanner, CERTIFICATE_REGION, DOMAIN_STACK_PREFIX};
pub use domain_resolver::{DomainDecision, DomainResolver, PRODUCTION_HOST_LABEL};
pub use entry_resolver::EntryResolver;
pub use output_formatter::OutputFormatter;
pub use topology_compiler::{
    TopologyCompiler, DEFAULT_ROUTE_RANK, NEXT_APP_FUNCTION, PREVIEW_STACK_PREFIX,
    PRODUCTION_STACK_NAME,
};
