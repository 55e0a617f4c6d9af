#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod engine;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod frontier;
pub mod heuristic;
#[doc(hidden)]
pub mod query;
#[doc(hidden)]
pub mod route;
#[doc(hidden)]
pub mod state;
#[doc(hidden)]
pub mod status;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use config::{PlannerConfig, Relaxation, TieBreak};
#[doc(inline)]
pub use engine::RoutePlanner;
#[doc(inline)]
pub use error::{ConfigError, PlannerError};
#[doc(inline)]
pub use frontier::{Frontier, Popped};
#[doc(inline)]
pub use query::Query;
#[doc(inline)]
pub use route::Route;
#[doc(inline)]
pub use state::{SearchRecord, SearchState};
#[doc(inline)]
pub use status::SearchStatus;
