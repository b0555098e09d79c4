//! Initialises logging for binaries and tooling built on the crate.
//!
//! The filter is read from `RUST_LOG`, which may be provided
//! through a `.env` file in the working directory:
//! ```bash
//! RUST_LOG=shadepath=debug
//! ```

use log::debug;

/// Initialises the `env_logger` backend for the `log` facade.
/// This is optional, not calling this function will simply
/// not emit logs.
///
/// Returns whether this call installed the logger. Later calls leave the
/// installed logger in place and return `false`.
pub fn init_logger() -> bool {
    let dotenv = dotenv::dotenv();

    let installed = match env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            debug!("Logger already installed, keeping it: {err}");
            false
        }
    };

    // A missing `.env` file is not an error, the environment is used as-is.
    if dotenv.is_err() {
        debug!("No .env file found, using the process environment");
    }

    installed
}
