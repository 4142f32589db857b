use crate::attribute::AttributeSet;
use anyhow::{Error, Result};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

pub fn init_tracing_subscriber(default_filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(Error::msg)
}

/// Enumerate every subset of `attrs`, the empty set included.
pub fn power_set(attrs: &AttributeSet) -> impl Iterator<Item = AttributeSet> + '_ {
    attrs
        .iter()
        .cloned()
        .powerset()
        .map(AttributeSet::from_iter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    #[test]
    fn test_power_set() {
        let subsets: Vec<_> = power_set(&attrs!("A" "B" "C")).collect();
        assert_eq!(subsets.len(), 8);
        assert!(subsets.contains(&attrs!()));
        assert!(subsets.contains(&attrs!("A" "C")));
        assert!(subsets.contains(&attrs!("A" "B" "C")));
    }

    #[test]
    fn test_power_set_of_empty() {
        let subsets: Vec<_> = power_set(&attrs!()).collect();
        assert_eq!(subsets, [attrs!()]);
    }
}
