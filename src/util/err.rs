/// Lifts a submodule's error type into a variant of [`route_planner::Error`](crate::Error),
/// or of any other error enum when the target is named explicitly.
///
/// ```rust,ignore
/// use route_planner::graph::GraphError;
/// route_planner::impl_err!(GraphError, Graph);
/// ```
pub mod err_macro {
    #[macro_export]
    macro_rules! impl_err {
        ($from:ty, $target:ty, $variant:ident) => {
            impl From<$from> for $target {
                fn from(value: $from) -> Self {
                    Self::$variant(value)
                }
            }
        };
        ($from:ty, $variant:ident) => {
            $crate::impl_err!($from, $crate::Error, $variant);
        };
    }
}
