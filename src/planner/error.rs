use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PlannerError {
    /// The graph offered no node for a query coordinate,
    /// which happens when the graph is empty.
    #[error("no graph node could be resolved near ({x}%, {y}%)")]
    Unresolvable { x: f64, y: f64 },
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key} has an unrecognised value {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
