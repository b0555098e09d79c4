//! The optimisation entry point.
//!
//! An [`Optimiser`] borrows the scene's collaborators and runs a configured
//! number of rounds: generating candidate routes, scoring their shadow
//! coverage, and selecting among them under the configured
//! [`SelectionPolicy`]. The chosen route is then encoded per road segment.
//!
//! All state lives within a single call to [`Optimiser::run`], so the
//! optimiser may be invoked repeatedly without interference.

#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod optimiser;
#[doc(hidden)]
pub mod result;

#[doc(inline)]
pub use config::{OptimisationConfig, SelectionPolicy};
#[doc(inline)]
pub use optimiser::Optimiser;
#[doc(inline)]
pub use result::Optimisation;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimiseError {
    #[error("no viable path after {rounds} rounds")]
    EmptyCandidatePool { rounds: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
