//! Representation walker for remap, and the retagger contract.
//!
//! Same induction as combine, but unary over one tree with a
//! wrapper-to-wrapper transformation: each leaf's value is rewritten from
//! `F::Of<A>` to `G::Of<A>` at that leaf's own payload type, nested
//! records delegate to their own remap, and everything else recurses.
//!
//! The provided retaggers close the loop with combine and broadcast:
//! [`TakeLeft`]/[`TakeRight`] project a combined record back into its
//! operands, and [`Overwrite`] rewrites every leaf from a filler, which is
//! exactly the constant-function mapping the broadcast uniqueness law is
//! stated against.

use crate::broadcast::Fill;
use crate::repr::{Leaf, Meta, Nested, Nil, Pair};
use crate::slot::{Paired, Slot};
use crate::wearable::{Remap, Wearable};

/// A uniform transformation from `F`-wrapped values to `G`-wrapped
/// values, applicable at every payload type.
///
/// Takes `&mut self` so a retagger may carry state across leaves (a
/// counter, a collector); the walkers visit leaves left to right.
pub trait Retag<F: Slot, G: Slot> {
    fn retag<A>(&mut self, value: F::Of<A>) -> G::Of<A>;
}

/// Projects the first component out of every paired leaf.
pub struct TakeLeft;

impl<F: Slot, G: Slot> Retag<Paired<F, G>, F> for TakeLeft {
    fn retag<A>(&mut self, value: (F::Of<A>, G::Of<A>)) -> F::Of<A> {
        value.0
    }
}

/// Projects the second component out of every paired leaf.
pub struct TakeRight;

impl<F: Slot, G: Slot> Retag<Paired<F, G>, G> for TakeRight {
    fn retag<A>(&mut self, value: (F::Of<A>, G::Of<A>)) -> G::Of<A> {
        value.1
    }
}

/// Discards every leaf and fills from the given filler instead: the
/// constant transformation.
pub struct Overwrite<P>(pub P);

impl<F, G, P> Retag<F, G> for Overwrite<P>
where
    F: Slot,
    G: Slot,
    P: Fill<G>,
{
    fn retag<A>(&mut self, _value: F::Of<A>) -> G::Of<A> {
        self.0.fill::<A>()
    }
}

// ──────────────────────────────────────────────
// Walker
// ──────────────────────────────────────────────

/// Rewrite a representation tree clothed in `F` into the same tree
/// clothed in `G`, leaf by leaf.
pub trait RemapRepr<F: Slot, G: Slot>: Sized {
    type Output;

    fn remap_repr<T: Retag<F, G>>(self, tag: &mut T) -> Self::Output;
}

impl<F: Slot, G: Slot, C: RemapRepr<F, G>> RemapRepr<F, G> for Meta<C> {
    type Output = Meta<C::Output>;

    fn remap_repr<T: Retag<F, G>>(self, tag: &mut T) -> Self::Output {
        Meta(self.0.remap_repr(tag))
    }
}

impl<F: Slot, G: Slot> RemapRepr<F, G> for Nil {
    type Output = Nil;

    fn remap_repr<T: Retag<F, G>>(self, _tag: &mut T) -> Self::Output {
        Nil
    }
}

impl<F: Slot, G: Slot, L, R> RemapRepr<F, G> for Pair<L, R>
where
    L: RemapRepr<F, G>,
    R: RemapRepr<F, G>,
{
    type Output = Pair<L::Output, R::Output>;

    fn remap_repr<T: Retag<F, G>>(self, tag: &mut T) -> Self::Output {
        Pair(self.0.remap_repr(tag), self.1.remap_repr(tag))
    }
}

impl<F: Slot, G: Slot, A> RemapRepr<F, G> for Leaf<F, A> {
    type Output = Leaf<G, A>;

    fn remap_repr<T: Retag<F, G>>(self, tag: &mut T) -> Self::Output {
        Leaf(tag.retag::<A>(self.0))
    }
}

impl<F: Slot, G: Slot, B: Remap<F>> RemapRepr<F, G> for Nested<F, B> {
    type Output = Nested<G, <B as Wearable<F>>::Wearing<G>>;

    fn remap_repr<T: Retag<F, G>>(self, tag: &mut T) -> Self::Output {
        Nested::new(self.0.remap(tag))
    }
}
