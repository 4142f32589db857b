use super::{superkeys::superkeys, validate};
use crate::{
    attribute::AttributeSet,
    error::Result,
    fd::{fd_set_closure, FdSet},
};

/// Test whether `relation` is in Boyce-Codd normal form under `fds`.
pub fn is_bcnf(relation: &AttributeSet, fds: &FdSet) -> Result<bool> {
    validate(relation, fds)?;
    Ok(bcnf(relation, fds))
}

/// A relation is in BCNF iff every non-trivial derived dependency has a
/// superkey determinant. Stops at the first counterexample.
pub(crate) fn bcnf(relation: &AttributeSet, fds: &FdSet) -> bool {
    let keys = superkeys(relation, fds);
    fd_set_closure(fds)
        .iter()
        .all(|fd| fd.is_trivial() || keys.contains(fd.left()))
}
