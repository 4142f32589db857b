use super::{Fd, FdSet};
use crate::{attribute::AttributeSet, utils::power_set};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Compute the attribute closure of `attrs` under `fds`.
///
/// Fixed point of a single saturation pass; the accumulated set only ever
/// grows and is bounded by the mentioned attributes, so the loop
/// terminates, and the result does not depend on iteration order.
pub fn attribute_closure(attrs: &AttributeSet, fds: &FdSet) -> AttributeSet {
    let mut closure = attrs.clone();
    while let Some(grown) = saturate(&closure, fds) {
        debug_assert!(closure.len() < grown.len(), "infinite loop detected");
        closure = grown;
    }
    closure
}

/// One saturation pass: fire every dependency whose determinant is already
/// covered. Return `None` when the pass adds nothing.
fn saturate(current: &AttributeSet, fds: &FdSet) -> Option<AttributeSet> {
    let mut next = current.clone();
    for fd in fds.iter() {
        if fd.left().is_subset(&next) {
            next.extend(fd.right().iter().cloned());
        }
    }
    (next.len() != current.len()).then_some(next)
}

/// Compute the semantic closure F+ of a dependency set.
///
/// Every non-empty subset X of the mentioned attributes contributes the
/// strongest dependency derivable from it, `X -> X+`; any implied
/// dependency `X -> Y` then has `Y` inside the dependent of the entry for
/// X. Exponential in the attribute count.
pub fn fd_set_closure(fds: &FdSet) -> FdSet {
    let universe = fds.all_attributes();
    let closure: BTreeSet<Fd> = power_set(&universe)
        .par_bridge()
        .filter(|subset| !subset.is_empty())
        .map(|subset| {
            let right = attribute_closure(&subset, fds);
            Fd::new(subset, right)
        })
        .collect();
    FdSet::from(closure)
}
