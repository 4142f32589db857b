use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fmt,
    ops::{BitOr, Sub},
};

/// A named column of a relation schema.
#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Constructor,
    derive_more::Deref,
    derive_more::AsRef,
    derive_more::From,
    derive_more::Into,
)]
#[as_ref(forward)]
pub struct Attribute(pub String);

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// A set of attributes.
#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Constructor,
    derive_more::Deref,
    derive_more::DerefMut,
    derive_more::AsRef,
    derive_more::AsMut,
    derive_more::From,
    derive_more::IntoIterator,
)]
#[from(forward)]
#[as_ref(forward)]
#[as_mut(forward)]
pub struct AttributeSet(pub BTreeSet<Attribute>);

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for AttributeSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self(iter.into_iter().map(Attribute::from).collect())
    }
}

impl PartialOrd for AttributeSet {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AttributeSet {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // The order puts smaller sets first, so dependencies with small
        // determinants sort first in an `FdSet`.
        self.len()
            .cmp(&other.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, a) in self.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{a}")?;
        }
        Ok(())
    }
}

impl BitOr for AttributeSet {
    type Output = AttributeSet;

    fn bitor(self, rhs: AttributeSet) -> Self::Output {
        let (mut to_mutate, mut to_consume) = if self.len() < rhs.len() {
            (rhs, self)
        } else {
            (self, rhs)
        };
        to_mutate.append(&mut to_consume);
        to_mutate
    }
}

impl<'a, 'b> BitOr<&'b AttributeSet> for &'a AttributeSet {
    type Output = AttributeSet;

    fn bitor(self, rhs: &'b AttributeSet) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<'a, 'b> Sub<&'b AttributeSet> for &'a AttributeSet {
    type Output = AttributeSet;

    fn sub(self, rhs: &'b AttributeSet) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

#[macro_export]
macro_rules! attrs {
    () => {
        $crate::attribute::AttributeSet::default()
    };
    ($($x: literal)+) => {{
        let mut set = $crate::attribute::AttributeSet::default();
        $(
            set.insert($crate::attribute::Attribute::from($x));
        )+
        set
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    #[test]
    fn test_display() {
        assert_eq!("A", format!("{}", attrs!("A")));
        assert_eq!("A B", format!("{}", attrs!("B" "A")));
        assert_eq!("A B C", format!("{}", attrs!("A" "B" "C" "A")));
    }

    #[test]
    fn test_order() {
        assert!(attrs!("Z") < attrs!("A" "B"));
        assert!(attrs!("A" "B") < attrs!("A" "C"));
        assert_eq!(attrs!("A" "B"), attrs!("B" "A"));
    }

    #[test]
    fn test_set_algebra() {
        assert_eq!(attrs!("A" "B" "C"), attrs!("A" "B") | attrs!("B" "C"));
        assert_eq!(attrs!("A" "B" "C"), &attrs!("A" "B") | &attrs!("C"));
        assert_eq!(attrs!("A"), &attrs!("A" "B" "C") - &attrs!("B" "C"));
        assert_eq!(attrs!(), &attrs!("A") - &attrs!("A"));
    }

    #[test]
    fn test_from_iter() {
        let set = AttributeSet::from_iter(["B", "A"]);
        assert_eq!(set, attrs!("A" "B"));
    }
}
