use super::{bcnf::bcnf, superkeys::superkeys, validate};
use crate::{
    attribute::AttributeSet,
    error::Result,
    fd::{fd_set_closure, Fd, FdSet},
    SchemaSet,
};

/// Decompose `relation` into sub-schemas that are each in BCNF with
/// respect to the dependencies redistributed to them.
///
/// The union of the returned schemas equals `relation`; a relation that
/// already complies comes back unchanged as a singleton. The result is
/// lossless but not guaranteed to preserve every dependency.
pub fn decompose(relation: &AttributeSet, fds: &FdSet) -> Result<SchemaSet> {
    validate(relation, fds)?;
    Ok(split_recursive(relation, fds)
        .into_iter()
        .map(|(schema, _)| schema)
        .collect())
}

/// Recursive splitting. Terminal schemas are returned together with the
/// dependency set redistributed to them. Each split strictly shrinks both
/// halves, so the recursion depth is bounded by the attribute count.
pub(crate) fn split_recursive(relation: &AttributeSet, fds: &FdSet) -> Vec<(AttributeSet, FdSet)> {
    debug!("decompose schema [{relation}]");

    if bcnf(relation, fds) {
        return vec![(relation.clone(), fds.clone())];
    }

    let keys = superkeys(relation, fds);
    let violator = find_violator(fds, &keys);
    debug!("split on [{violator}]");

    let (schema_a, schema_b) = split(relation, violator);
    debug!("left schema [{schema_a}], right schema [{schema_b}]");
    let (fds_a, fds_b) = redistribute(fds, &schema_a, &schema_b);

    let mut ans = split_recursive(&schema_a, &fds_a);
    ans.extend(split_recursive(&schema_b, &fds_b));
    ans
}

/// The first non-trivial dependency, in the set's deterministic order,
/// whose determinant is not a superkey.
fn find_violator<'a>(fds: &'a FdSet, superkeys: &SchemaSet) -> &'a Fd {
    fds.iter()
        .find(|fd| !fd.is_trivial() && !superkeys.contains(fd.left()))
        .expect("a relation that is not in BCNF must contain a violating dependency")
}

/// Split on the violator (L, R): one schema carries the violator's own
/// attributes, the other keeps the rest of the relation with R removed
/// and L retained.
fn split(relation: &AttributeSet, violator: &Fd) -> (AttributeSet, AttributeSet) {
    let schema_a = violator.attributes();
    let schema_b = &(relation - violator.right()) | violator.left();
    (schema_a, schema_b)
}

/// Redistribute the closure of the parent dependencies: a derived
/// dependency goes to every sub-schema that contains all of its
/// attributes, and is dropped when neither does.
fn redistribute(
    fds: &FdSet,
    schema_a: &AttributeSet,
    schema_b: &AttributeSet,
) -> (FdSet, FdSet) {
    let mut fds_a = FdSet::new();
    let mut fds_b = FdSet::new();
    for fd in fd_set_closure(fds) {
        let mentioned = fd.attributes();
        if mentioned.is_subset(schema_a) {
            fds_a.insert(fd.clone());
        }
        if mentioned.is_subset(schema_b) {
            fds_b.insert(fd);
        }
    }
    (fds_a, fds_b)
}
