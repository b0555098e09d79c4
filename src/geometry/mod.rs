//! Geometric primitives: world positions and the arc-length
//! parameterised [`Route`] built from navigable-surface corners.

#[doc(hidden)]
pub mod point;
#[doc(hidden)]
pub mod route;

#[doc(inline)]
pub use point::Point3;
#[doc(inline)]
pub use route::{path_length, Route};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("a route requires at least one corner")]
    NoCorners,

    #[error("corner {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}
