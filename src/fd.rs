//! Functional dependencies, their attribute closure, and the semantic
//! closure F+ of a dependency set.
#![allow(clippy::module_inception)]

mod closure;
mod fd;
mod fd_set;

pub use closure::{attribute_closure, fd_set_closure};
pub use fd::Fd;
pub use fd_set::FdSet;
