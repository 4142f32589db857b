use super::Fd;
use crate::attribute::AttributeSet;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fmt,
    ops::{BitOr, BitOrAssign},
};

/// A deduplicated set of functional dependencies.
///
/// The underlying ordered set gives every scan over the collection a
/// deterministic order: determinant first (smaller sets up front), then
/// dependent.
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
pub struct FdSet(pub BTreeSet<Fd>);

impl FdSet {
    pub fn new() -> Self {
        Default::default()
    }

    /// The union of all attributes mentioned across the contained
    /// dependencies.
    pub fn all_attributes(&self) -> AttributeSet {
        let mut ans = AttributeSet::default();
        for fd in self.iter() {
            ans.extend(fd.left().iter().cloned());
            ans.extend(fd.right().iter().cloned());
        }
        ans
    }
}

impl FromIterator<Fd> for FdSet {
    fn from_iter<I: IntoIterator<Item = Fd>>(iter: I) -> Self {
        Self(BTreeSet::from_iter(iter))
    }
}

impl fmt::Display for FdSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fd) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{fd}")?;
        }
        Ok(())
    }
}

impl BitOr for FdSet {
    type Output = FdSet;

    fn bitor(self, rhs: FdSet) -> Self::Output {
        let (mut to_mutate, mut to_consume) = if self.len() < rhs.len() {
            (rhs, self)
        } else {
            (self, rhs)
        };
        to_mutate.append(&mut to_consume);
        to_mutate
    }
}

impl<'a, 'b> BitOr<&'b FdSet> for &'a FdSet {
    type Output = FdSet;

    fn bitor(self, rhs: &'b FdSet) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl BitOrAssign for FdSet {
    fn bitor_assign(&mut self, mut rhs: FdSet) {
        self.append(&mut rhs);
    }
}

#[macro_export]
macro_rules! fds {
    () => {
        $crate::fd::FdSet::new()
    };
    ($($l: literal)+ -> $($r: literal)+ $(, $($l2: literal)+ -> $($r2: literal)+)*) => {{
        let mut set = $crate::fd::FdSet::new();
        set.insert($crate::fd!($($l)+ -> $($r)+));
        $(
            set.insert($crate::fd!($($l2)+ -> $($r2)+));
        )*
        set
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attrs, fd, fds};

    #[test]
    fn test_display() {
        assert_eq!("", format!("{}", fds!()));
        assert_eq!("A -> B", format!("{}", fds!("A" -> "B")));
        assert_eq!("A -> B, B -> C", format!("{}", fds!("B" -> "C", "A" -> "B")));
    }

    #[test]
    fn test_dedup() {
        let mut set = fds!("A" -> "B");
        set.insert(fd!("A" -> "B"));
        assert_eq!(set.len(), 1);
        set.insert(fd!("B" "A" -> "C"));
        set.insert(fd!("A" "B" -> "C"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_union() {
        let a = fds!("A" -> "B", "B" -> "C");
        let b = fds!("B" -> "C", "C" -> "D");
        let expect = fds!("A" -> "B", "B" -> "C", "C" -> "D");
        assert_eq!(expect, &a | &b);
        assert_eq!(expect, &b | &a);
        assert_eq!(expect, a | b);
    }

    #[test]
    fn test_all_attributes() {
        let set = fds!("A" -> "B", "B" "C" -> "D");
        assert_eq!(attrs!("A" "B" "C" "D"), set.all_attributes());
        assert_eq!(attrs!(), fds!().all_attributes());
    }

    #[test]
    fn test_iteration_order() {
        let set = fds!("B" "C" -> "D", "B" -> "A", "A" -> "B");
        let rendered: Vec<String> = set.iter().map(|fd| fd.to_string()).collect();
        assert_eq!(rendered, ["A -> B", "B -> A", "B C -> D"]);
    }
}
