use super::validate;
use crate::{
    attribute::AttributeSet,
    error::Result,
    fd::{fd_set_closure, Fd, FdSet},
    utils::power_set,
    SchemaSet,
};
use rayon::prelude::*;

/// Find every superkey of `relation` under `fds`, minimal or not.
pub fn find_superkeys(relation: &AttributeSet, fds: &FdSet) -> Result<SchemaSet> {
    validate(relation, fds)?;
    Ok(superkeys(relation, fds))
}

/// Power-set scan against the closure of the reflexively augmented
/// dependency set: a subset qualifies iff some derived dependency whose
/// determinant it covers yields the whole relation.
pub(crate) fn superkeys(relation: &AttributeSet, fds: &FdSet) -> SchemaSet {
    let mut augmented = fds.clone();
    augmented.insert(Fd::new(relation.clone(), relation.clone()));
    let closure = fd_set_closure(&augmented);

    power_set(relation)
        .par_bridge()
        .filter(|subset| {
            closure
                .iter()
                .any(|fd| fd.left().is_subset(subset) && fd.right() == relation)
        })
        .collect()
}
