pub mod args;
pub mod audit;
pub mod aws;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod start;
pub mod utils {
    pub mod log_utils;
}

pub use args::Args;
pub use start::{run_app, run_audit, run_audit_blocking};
