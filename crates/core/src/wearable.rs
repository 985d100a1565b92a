//! The capability contract: records that can be reclothed, combined,
//! broadcast and remapped.
//!
//! A *wearable* is a record family generic over one [`Slot`], considered at
//! the slot it currently wears. The three operation traits refine it:
//!
//! | Operation | Signature (informally) | Provided by |
//! |-----------|------------------------|-------------|
//! | combine   | `B(F) x B(G) -> B(Paired(F, G))` | [`Combine`] |
//! | broadcast | `(forall A. F(A)) -> B(F)`       | [`Broadcast`] |
//! | remap     | `(forall A. F(A) -> G(A)) -> B(F) -> B(G)` | [`Remap`] |
//!
//! # Laws
//!
//! Lawful instances satisfy, for all `x: B(F)`, `y: B(G)` and fillers `v`:
//!
//! | Law | Statement |
//! |-----|-----------|
//! | PROJ-LEFT  | `combine(x, y).remap(TakeLeft) == x` |
//! | PROJ-RIGHT | `combine(x, y).remap(TakeRight) == y` |
//! | UNIQ | `broadcast(v) == z.remap(Overwrite(v))` for any `z` of shape `B` |
//! | SHAPE | combine/broadcast/remap never change the node arrangement |
//!
//! Derived instances (via [`wardrobe!`](crate::wardrobe)) satisfy these by
//! construction, provided the underlying [`Structural`] bijection is
//! faithful; see the unchecked contract documented there.
//!
//! [`Structural`]: crate::structural::Structural

use crate::broadcast::Fill;
use crate::remap::Retag;
use crate::slot::{Paired, Slot};

/// A record family at the slot it currently wears.
///
/// `Wearing<G>` names the same family reclothed in `G`: for a family
/// `B`, the implementation on `B<F>` sets `Wearing<G> = B<G>`. Only the
/// slot changes; the shape is shared by all clothings.
pub trait Wearable<F: Slot>: Sized {
    /// The same record family wearing `G` instead of `F`.
    type Wearing<G: Slot>: Wearable<G>;
}

/// Pairwise merge: zip two clothings of one family into a pairing of both.
///
/// Field-wise and shape-preserving: every leaf of the result holds the
/// corresponding `F` value and `G` value as a pair, and nothing else about
/// the record changes.
pub trait Combine<F: Slot>: Wearable<F> {
    fn combine<G: Slot>(self, other: Self::Wearing<G>) -> Self::Wearing<Paired<F, G>>;
}

/// Uniform fill: build a whole record from one polymorphic field value.
///
/// The filler is instantiated afresh at every leaf's own payload type, so
/// the shape alone determines the result (the UNIQ law above).
pub trait Broadcast<F: Slot>: Wearable<F> {
    fn broadcast<P: Fill<F>>(fill: &P) -> Self;
}

/// Field-wise reclothing: apply one wrapper-to-wrapper transformation at
/// every leaf, producing the family in the target slot.
pub trait Remap<F: Slot>: Wearable<F> {
    fn remap<G: Slot, T: Retag<F, G>>(self, tag: &mut T) -> Self::Wearing<G>;
}
