//! Deploy Module
//!
//! Orchestrates one deployment: discover entries, compile the plan,
//! provision it (retrying transient failures) and format the outputs.
//!
//! ## Structure
//!
//! - `options` - Inputs (`DeployOptions`)
//! - `result` - Outputs (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use serverlessui::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(provisioner, build_ids, discovery);
//! let result = use_case.execute(&DeployOptions::new())?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployResult;
pub use use_case::DeployUseCase;
