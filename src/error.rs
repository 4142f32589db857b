use crate::{attribute::AttributeSet, fd::Fd};
use thiserror::Error;

/// Errors reported by the public normalization entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A dependency references attributes outside the relation it is
    /// checked against.
    #[error("dependency ({fd}) refers to attributes outside the relation ({relation})")]
    InvalidInput { fd: Fd, relation: AttributeSet },
}

pub type Result<T> = std::result::Result<T, Error>;
