pub mod check;
pub mod ci;
pub mod config;
mod context;
pub mod init;
pub mod visual;

pub use check::{run_check, run_check_impl};
pub use ci::{run_ci, run_ci_impl};
pub use config::run_config;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use visual::{run_visual, run_visual_impl};
