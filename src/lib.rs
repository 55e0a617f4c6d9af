#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

#[doc(hidden)]
pub mod error;
pub mod graph;
pub mod planner;
pub mod primitive;
pub mod util;

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use graph::{Graph, GraphBuilder, Model};
#[doc(inline)]
pub use planner::{PlannerConfig, Query, Route, RoutePlanner, SearchStatus};
#[doc(inline)]
pub use primitive::{Entry, Node};
