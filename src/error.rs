use crate::geometry::RouteError;
use crate::impl_err;
use crate::optimise::OptimiseError;
use crate::scene::NavigationError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("route error: {0}")]
    Route(RouteError),

    #[error("navigation error: {0}")]
    Navigation(NavigationError),

    #[error("optimisation error: {0}")]
    Optimise(OptimiseError),
}

impl_err! {
    RouteError => Route,
    NavigationError => Navigation,
    OptimiseError => Optimise,
}
