//! The derivation facade: value <-> representation bijection and the
//! convert/walk/convert-back entry points.
//!
//! This is a thin orchestrator: each entry point converts its operand(s)
//! to representation trees, runs the matching walker, and converts the
//! result back. Derived impls produced by [`wardrobe!`](crate::wardrobe)
//! delegate straight here; a hand-written instance with an equivalent
//! bijection can call the same entry points and get the same semantics.

use crate::broadcast::{BroadcastRepr, Fill};
use crate::combine::CombineRepr;
use crate::conform::Conforming;
use crate::remap::{RemapRepr, Retag};
use crate::slot::Slot;

/// Conversion between a record value and its representation tree.
///
/// The two functions must form a bijection: `from_repr(into_repr(x)) == x`
/// and `into_repr(from_repr(t)) == t` for every value and tree. This is an
/// **unchecked contract**. The engine cannot detect a bijection that drops
/// or invents data outside the wrapper pattern -- such an instance passes
/// conformance and still breaks the projection and uniqueness laws.
/// Implementations generated by [`wardrobe!`](crate::wardrobe) are
/// faithful by construction; write one by hand only when the automatic
/// shape walk cannot express your type, and keep it lossless.
pub trait Structural: Sized {
    type Repr;

    fn into_repr(self) -> Self::Repr;
    fn from_repr(repr: Self::Repr) -> Self;
}

/// Combine two structurally convertible values: convert both operands,
/// walk the trees, convert the paired tree back.
pub fn combine_via_repr<X, Y, Z>(left: X, right: Y) -> Z
where
    X: Structural,
    Y: Structural,
    X::Repr: Conforming + CombineRepr<Y::Repr>,
    Y::Repr: Conforming,
    Z: Structural<Repr = <X::Repr as CombineRepr<Y::Repr>>::Output>,
{
    Z::from_repr(left.into_repr().combine_repr(right.into_repr()))
}

/// Broadcast a filler into a structurally convertible value: build the
/// tree from the filler, convert it to the concrete record.
pub fn broadcast_via_repr<F, P, Z>(fill: &P) -> Z
where
    F: Slot,
    P: Fill<F>,
    Z: Structural,
    Z::Repr: Conforming + BroadcastRepr<F>,
{
    Z::from_repr(<Z::Repr as BroadcastRepr<F>>::broadcast_repr(fill))
}

/// Remap a structurally convertible value: convert, rewrite every leaf
/// through the retagger, convert back at the target slot.
pub fn remap_via_repr<F, G, T, X, Z>(value: X, tag: &mut T) -> Z
where
    F: Slot,
    G: Slot,
    T: Retag<F, G>,
    X: Structural,
    X::Repr: Conforming + RemapRepr<F, G>,
    Z: Structural<Repr = <X::Repr as RemapRepr<F, G>>::Output>,
{
    Z::from_repr(value.into_repr().remap_repr(tag))
}
