mod app_context;
mod backend;
mod config_warnings;

pub use app_context::AppContext;
pub use backend::Backend;
pub use config_warnings::warn_unconfigured;
