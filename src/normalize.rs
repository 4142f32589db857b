//! Superkey derivation, the BCNF membership test, and the recursive BCNF
//! decomposition.

mod bcnf;
mod decompose;
mod superkeys;

pub use bcnf::is_bcnf;
pub use decompose::decompose;
pub use superkeys::find_superkeys;

use crate::{
    attribute::AttributeSet,
    error::{Error, Result},
    fd::FdSet,
};

/// Every dependency must draw both of its sides from the relation's
/// attributes. Checked eagerly by all public entry points, before any
/// closure computation.
pub(crate) fn validate(relation: &AttributeSet, fds: &FdSet) -> Result<()> {
    for fd in fds.iter() {
        if !fd.attributes().is_subset(relation) {
            return Err(Error::InvalidInput {
                fd: fd.clone(),
                relation: relation.clone(),
            });
        }
    }
    Ok(())
}
