//! Structural representation trees.
//!
//! Every conforming record converts to and from a tree built from exactly
//! five node kinds. The grammar is closed: the walkers in [`combine`],
//! [`broadcast`] and [`remap`] are defined by one impl per node kind, and
//! no other shape has any impl at all. A sum type or a field outside the
//! wrapper pattern has no spelling in this grammar, which is what makes
//! rejection a compile-time fact rather than a runtime check.
//!
//! Trees are call-scoped ephemera: produced by
//! [`Structural::into_repr`](crate::structural::Structural) immediately
//! before a walk and consumed by `from_repr` immediately after. Nothing
//! stores one.
//!
//! [`combine`]: crate::combine
//! [`broadcast`]: crate::broadcast
//! [`remap`]: crate::remap

use std::marker::PhantomData;

use crate::slot::Slot;

/// Constructor metadata wrapper. Exactly one child, no payload of its own;
/// every derived representation has one at the root. Constructor and field
/// *names* live in the shape descriptor, not here.
pub struct Meta<C>(pub C);

/// A zero-field constructor. Terminal.
pub struct Nil;

/// Binary product of two subtrees. Constructors with two or more fields
/// nest their fields pairwise to the right.
pub struct Pair<L, R>(pub L, pub R);

/// Direct leaf: one field value, the wrapper applied to the payload type.
pub struct Leaf<F: Slot, A>(pub F::Of<A>);

/// Indirect leaf: a field whose value is itself a capability-bearing
/// record clothed in the same slot. Walkers do not look inside; they
/// delegate to the inner record's own operations.
pub struct Nested<F: Slot, B>(pub B, pub PhantomData<F>);

impl<F: Slot, B> Nested<F, B> {
    pub fn new(inner: B) -> Self {
        Nested(inner, PhantomData)
    }
}
