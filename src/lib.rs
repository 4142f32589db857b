#[macro_use]
extern crate tracing;

use std::collections::BTreeSet;

pub mod attribute;
pub mod error;
pub mod fd;
pub mod normalize;
pub mod utils;

#[cfg(test)]
pub(crate) mod tests;

pub use attribute::{Attribute, AttributeSet};
pub use error::{Error, Result};
pub use fd::{attribute_closure, fd_set_closure, Fd, FdSet};
pub use normalize::{decompose, find_superkeys, is_bcnf};

/// The result shape shared by superkey search and decomposition.
pub type SchemaSet = BTreeSet<AttributeSet>;
