//! Recompute policies.
//!
//! A policy is the decision hook a host asks before redoing work:
//! given the last input and the next one, should the work be redone?
//!
//! The default policy is [`Shallow`].
//! Closures of the form `Fn(&R, &R) -> bool` can be used as a custom policy.

use crate::Record;

/// Decision hook for redoing work derived from an input.
pub trait ShouldRecompute<R: ?Sized> {
    /// Returns `true` if work derived from `old` should be redone for `new`.
    fn should_recompute(&self, old: &R, new: &R) -> bool;
}

impl<R: ?Sized, F> ShouldRecompute<R> for F
where
    F: Fn(&R, &R) -> bool,
{
    fn should_recompute(&self, old: &R, new: &R) -> bool {
        self(old, new)
    }
}

/// Recompute unless the inputs are shallowly equal.
///
/// See [`shallow_equal`](crate::shallow_equal) for more.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shallow;

impl<R: Record + ?Sized> ShouldRecompute<R> for Shallow {
    fn should_recompute(&self, old: &R, new: &R) -> bool {
        crate::should_recompute(old, new)
    }
}

/// Recompute unless the inputs are equal by [`PartialEq`].
///
/// Nested values are compared however the input's `PartialEq` compares them.
/// [`Props`](crate::Props) and [`Value`](crate::Value) implement `PartialEq` with shallow
/// equality, so for them this policy behaves like [`Shallow`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Structural;

impl<R: PartialEq + ?Sized> ShouldRecompute<R> for Structural {
    fn should_recompute(&self, old: &R, new: &R) -> bool {
        old != new
    }
}

/// Always recompute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Always;

impl<R: ?Sized> ShouldRecompute<R> for Always {
    fn should_recompute(&self, old: &R, new: &R) -> bool {
        let _ = (old, new);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{props, Value};
    use alloc::rc::Rc;

    #[test]
    fn it_uses_policies() {
        let old = props! { a: 1 };
        let new = props! { a: 1 };

        assert!(!Shallow.should_recompute(&old, &new));
        assert!(Always.should_recompute(&old, &new));

        let x = Rc::new(1);
        assert!(!Structural.should_recompute(&Rc::new(1), &x));

        let shared = Value::new_shared(vec![1]);
        let old = props! { x: Value::new_shared(vec![1]) };
        let new = props! { x: shared.clone() };
        assert!(Structural.should_recompute(&old, &new));
        assert!(!Structural.should_recompute(&new, &props! { x: shared }));

        let by_len = |old: &Vec<i32>, new: &Vec<i32>| old.len() != new.len();
        assert!(!by_len.should_recompute(&vec![1], &vec![2]));
        assert!(by_len.should_recompute(&vec![1], &vec![]));
    }
}
