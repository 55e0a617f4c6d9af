use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("segment references node {0}, which was never declared")]
    UnknownNode(i64),

    #[error("node {0} has a non-finite position")]
    InvalidPosition(i64),

    #[error("metric scale must be finite and positive, got {0}")]
    InvalidScale(f64),
}
