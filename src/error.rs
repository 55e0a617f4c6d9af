use thiserror::Error;

use crate::graph::GraphError;
use crate::impl_err;
use crate::planner::{ConfigError, PlannerError};

/// Crate-level error, wrapping the error of whichever module failed.
///
/// A search which exhausts its frontier is not an error; it is reported
/// as the absence of a route.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Graph(GraphError),

    #[error(transparent)]
    Planner(PlannerError),

    #[error(transparent)]
    Config(ConfigError),
}

impl_err!(GraphError, Graph);
impl_err!(PlannerError, Planner);
impl_err!(ConfigError, Config);

pub type Result<T> = std::result::Result<T, Error>;
