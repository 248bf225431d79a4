//! # memogate
//! Memogate skips recomputation of work whose input hasn't changed.
//!
//! A [`MemoGate`] guards a pure computation of a [`Record`] (for example, the props of a view).
//! It remembers the last input and output, and only calls the computation again when a
//! recompute policy reports that the new input differs from the last one.
//! The default policy is shallow equality ([`shallow_equal`]):
//! records are equal if they have the same keys, scalars compare by value,
//! and shared composites compare by identity.
//!
//! ```
//! use memogate::prelude::*;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let mut gate = memo(|props: &Props| {
//!     calls.set(calls.get() + 1);
//!     props.get_as::<i64>("counter").unwrap_or_default() * 2
//! });
//!
//! assert_eq!(*gate.invoke(props! { counter: 1 }), 2);
//! assert_eq!(*gate.invoke(props! { counter: 1 }), 2);
//! assert_eq!(*gate.invoke(props! { counter: 2 }), 4);
//! assert_eq!(calls.get(), 2);
//! ```
//!
//! ## Records
//! Statically known records can derive [`Record`], comparing each field with [`ShallowEq`].
//! Records only known at runtime can use [`Props`], a map of string keys to [`Value`]s.
//!
//! ## Hosts
//! Rendering hosts can ask [`should_recompute`] (or any [`ShouldRecompute`] policy) before
//! redoing work for a node, or mount views as a [`PureNode`] that only re-renders when
//! [`PureView::should_recompute`] says so.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

extern crate alloc;

/// Prelude of commonly-used traits and functions.
/// `use memogate::prelude::*;`
pub mod prelude {
    pub use crate::{
        memo, memo_with, props, shallow_equal, should_recompute, try_memo, MemoGate, Props,
        PureNode, PureView, Record, Shallow, ShallowEq, ShouldRecompute, Value,
    };
}

mod memo;
pub use self::memo::{memo, memo_with, try_memo, MemoGate};

pub mod policy;
pub use self::policy::{Always, Shallow, ShouldRecompute, Structural};

mod props;
pub use self::props::{PropError, Props};

mod pure;
pub use self::pure::{PureNode, PureView};

pub mod record;
pub use self::record::{shallow_equal, should_recompute, Record, ShallowEq};

mod value;
pub use self::value::{FromValue, Value};

type HashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Short type name of `T`, without its module path or generics.
#[cfg(feature = "tracing")]
fn name<T: ?Sized>() -> &'static str {
    let name = core::any::type_name::<T>();
    name.split('<')
        .next()
        .unwrap_or(name)
        .split("::")
        .last()
        .unwrap_or(name)
}
