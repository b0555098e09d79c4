/// Lifts module errors into [`shadepath::Error`](crate::Error), one
/// `From` implementation per `Type => Variant` pair.
///
/// ```rust,ignore
/// use shadepath::geometry::RouteError;
/// use shadepath::scene::NavigationError;
///
/// shadepath::impl_err! {
///     RouteError => Route,
///     NavigationError => Navigation,
/// }
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($($source:ty => $variant:ident),+ $(,)?) => {
            $(
                impl From<$source> for $crate::Error {
                    fn from(error: $source) -> Self {
                        $crate::Error::$variant(error)
                    }
                }
            )+
        };
    }

    pub use impl_err;
}
