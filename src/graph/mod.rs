#[doc(hidden)]
pub mod builder;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod item;
pub mod traits;


#[doc(inline)]
pub use builder::GraphBuilder;
#[doc(inline)]
pub use error::GraphError;
#[doc(inline)]
pub use item::{Graph, GraphStructure};
#[doc(inline)]
pub use traits::{Model, Neighbors};
