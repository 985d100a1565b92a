//! Representation walker for broadcast, and the filler contract.
//!
//! Broadcast is the unary mirror of combine: instead of pairing two trees
//! it builds one tree from a [`Fill`] witness, instantiating the filler
//! independently at every leaf's payload type. A `Pair` node calls the
//! filler once per subtree; the two instantiations may have different
//! payload types, so this is not a shared monomorphic value.

use crate::repr::{Leaf, Meta, Nested, Nil, Pair};
use crate::slot::{Fixed, Maybe, Paired, Slot};
use crate::wearable::Broadcast;

/// A value usable at every field type: produces an `F`-wrapped value at
/// any payload type on demand.
///
/// This is the engine's rendition of a polymorphic field value. `Plain`
/// has no filler (there is no value of every type); `Maybe` has
/// [`Absent`]; `Fixed<T>` has [`Everywhere`]; a pair of fillers fills
/// [`Paired`].
pub trait Fill<F: Slot> {
    fn fill<A>(&self) -> F::Of<A>;
}

/// Fills every field of a [`Maybe`]-clothed record with `None`.
pub struct Absent;

impl Fill<Maybe> for Absent {
    fn fill<A>(&self) -> Option<A> {
        None
    }
}

/// Fills every field of a [`Fixed`]-clothed record with a clone of one
/// value.
pub struct Everywhere<T>(pub T);

impl<T: Clone> Fill<Fixed<T>> for Everywhere<T> {
    fn fill<A>(&self) -> T {
        self.0.clone()
    }
}

impl<F, G, P, Q> Fill<Paired<F, G>> for (P, Q)
where
    F: Slot,
    G: Slot,
    P: Fill<F>,
    Q: Fill<G>,
{
    fn fill<A>(&self) -> (F::Of<A>, G::Of<A>) {
        (self.0.fill(), self.1.fill())
    }
}

// ──────────────────────────────────────────────
// Walker
// ──────────────────────────────────────────────

/// Build a representation tree of this shape by instantiating a filler at
/// every leaf.
pub trait BroadcastRepr<F: Slot>: Sized {
    fn broadcast_repr<P: Fill<F>>(fill: &P) -> Self;
}

impl<F: Slot, C: BroadcastRepr<F>> BroadcastRepr<F> for Meta<C> {
    fn broadcast_repr<P: Fill<F>>(fill: &P) -> Self {
        Meta(C::broadcast_repr(fill))
    }
}

impl<F: Slot> BroadcastRepr<F> for Nil {
    fn broadcast_repr<P: Fill<F>>(_fill: &P) -> Self {
        Nil
    }
}

impl<F: Slot, L, R> BroadcastRepr<F> for Pair<L, R>
where
    L: BroadcastRepr<F>,
    R: BroadcastRepr<F>,
{
    fn broadcast_repr<P: Fill<F>>(fill: &P) -> Self {
        Pair(L::broadcast_repr(fill), R::broadcast_repr(fill))
    }
}

impl<F: Slot, A> BroadcastRepr<F> for Leaf<F, A> {
    fn broadcast_repr<P: Fill<F>>(fill: &P) -> Self {
        Leaf(fill.fill::<A>())
    }
}

impl<F: Slot, B: Broadcast<F>> BroadcastRepr<F> for Nested<F, B> {
    fn broadcast_repr<P: Fill<F>>(fill: &P) -> Self {
        Nested::new(B::broadcast(fill))
    }
}
