use crate::{
    attribute::AttributeSet,
    attrs,
    fd::{Fd, FdSet},
    fds,
};
use once_cell::sync::Lazy;
use proptest::prelude::*;

/// The textbook chain: R = {A, B, C}, F = {A -> B, B -> C}.
pub(crate) static CHAIN_RELATION: Lazy<AttributeSet> = Lazy::new(|| attrs!("A" "B" "C"));
pub(crate) static CHAIN_FDS: Lazy<FdSet> = Lazy::new(|| fds!("A" -> "B", "B" -> "C"));

/// The attribute universe the generated inputs draw from.
pub(crate) const UNIVERSE: [&str; 5] = ["A", "B", "C", "D", "E"];

pub(crate) fn arb_attribute_set() -> impl Strategy<Value = AttributeSet> {
    proptest::sample::subsequence(UNIVERSE.to_vec(), 0..=UNIVERSE.len())
        .prop_map(AttributeSet::from_iter)
}

fn arb_nonempty_attribute_set() -> impl Strategy<Value = AttributeSet> {
    proptest::sample::subsequence(UNIVERSE.to_vec(), 1..=UNIVERSE.len())
        .prop_map(AttributeSet::from_iter)
}

pub(crate) fn arb_fd() -> impl Strategy<Value = Fd> {
    (arb_nonempty_attribute_set(), arb_nonempty_attribute_set())
        .prop_map(|(left, right)| Fd::new(left, right))
}

pub(crate) fn arb_fd_set(max_fds: usize) -> impl Strategy<Value = FdSet> {
    proptest::collection::btree_set(arb_fd(), 0..=max_fds).prop_map(FdSet::from)
}
