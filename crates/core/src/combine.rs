//! Representation walker for combine.
//!
//! Structural induction over the node grammar: one impl per node kind,
//! both operands guaranteed shape-identical by conformance. The only
//! place new data is formed is the leaf case, which pairs the two field
//! values; every other case is pure recursion. Left subtrees are walked
//! before right ones, which is unobservable (no effects anywhere).

use crate::repr::{Leaf, Meta, Nested, Nil, Pair};
use crate::slot::{Paired, Slot};
use crate::wearable::{Combine, Wearable};

/// Combine two representation trees of identical shape, one clothed in
/// `F` and one in `Rhs`'s slot, into the tree of the pairing.
pub trait CombineRepr<Rhs>: Sized {
    type Output;

    fn combine_repr(self, rhs: Rhs) -> Self::Output;
}

impl<C1, C2> CombineRepr<Meta<C2>> for Meta<C1>
where
    C1: CombineRepr<C2>,
{
    type Output = Meta<C1::Output>;

    fn combine_repr(self, rhs: Meta<C2>) -> Self::Output {
        Meta(self.0.combine_repr(rhs.0))
    }
}

impl CombineRepr<Nil> for Nil {
    type Output = Nil;

    fn combine_repr(self, _rhs: Nil) -> Self::Output {
        Nil
    }
}

impl<L1, R1, L2, R2> CombineRepr<Pair<L2, R2>> for Pair<L1, R1>
where
    L1: CombineRepr<L2>,
    R1: CombineRepr<R2>,
{
    type Output = Pair<L1::Output, R1::Output>;

    fn combine_repr(self, rhs: Pair<L2, R2>) -> Self::Output {
        Pair(self.0.combine_repr(rhs.0), self.1.combine_repr(rhs.1))
    }
}

impl<F: Slot, G: Slot, A> CombineRepr<Leaf<G, A>> for Leaf<F, A> {
    type Output = Leaf<Paired<F, G>, A>;

    fn combine_repr(self, rhs: Leaf<G, A>) -> Self::Output {
        Leaf((self.0, rhs.0))
    }
}

impl<F, G, B, C> CombineRepr<Nested<G, C>> for Nested<F, B>
where
    F: Slot,
    G: Slot,
    B: Combine<F> + Wearable<F, Wearing<G> = C>,
    C: Wearable<G>,
{
    type Output = Nested<Paired<F, G>, <B as Wearable<F>>::Wearing<Paired<F, G>>>;

    fn combine_repr(self, rhs: Nested<G, C>) -> Self::Output {
        Nested::new(self.0.combine(rhs.0))
    }
}
