pub mod check;
pub mod config;
pub mod context;
pub mod init;
pub mod stats;

pub use check::run_check;
pub use config::run_config;
pub use context::color_choice_to_mode;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use stats::run_stats;
