//! Provisioner Implementations

mod synth;

pub use synth::{SynthProvisioner, CDN_DOMAIN_SUFFIX, DOCUMENT_VERSION};
