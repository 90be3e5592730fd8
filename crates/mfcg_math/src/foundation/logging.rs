//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Installs `env_logger`, honouring `RUST_LOG`. Returns `false` if a logger
/// was already installed, so calling this more than once is harmless.
pub fn init() -> bool {
    env_logger::builder().is_test(cfg!(test)).try_init().is_ok()
}
