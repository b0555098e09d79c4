pub mod err;
pub mod logging;

#[doc(inline)]
pub use logging::init_logger;
