//! wardrobe-core: slot-generic record derivation.
//!
//! A record family here is a struct generic over one type-constructor
//! "slot" applied uniformly to every field (`Profile<Maybe>` holds
//! options, `Profile<Plain>` holds payloads, and so on). Given such a
//! family, this crate mechanically derives three shape-preserving
//! operations with no field-specific code:
//!
//! - **combine** -- zip two clothings into a pairing of both
//! - **broadcast** -- build a whole record from one polymorphic value
//! - **remap** -- rewrite every field through one uniform transformation
//!
//! Derivation works by converting a value to a structural representation
//! tree (a closed five-node grammar), walking the tree by structural
//! induction, and converting back. A type qualifies iff it has exactly
//! one constructor and every field is either a wrapped value or a nested
//! record that itself carries the capability; anything else is rejected
//! at compile time. The whole pipeline is pure and total: no I/O, no
//! state, no failure paths inside the operations themselves.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root:
//!
//! - [`wardrobe!`](wardrobe) -- derive the capability set for a record
//! - [`Slot`], [`Plain`], [`Maybe`], [`Fixed`], [`Paired`] -- slots
//! - [`Wearable`], [`Combine`], [`Broadcast`], [`Remap`] -- capabilities
//! - [`Fill`] / [`Retag`] -- the polymorphic value and transformation
//!   contracts, with [`Absent`], [`Everywhere`], [`TakeLeft`],
//!   [`TakeRight`], [`Overwrite`]
//! - [`Structural`] and the facade entry points -- the derivation bridge
//! - [`Blank`], [`Both`] -- primitive base-case instances
//! - [`ShapeNode`], [`RawShape`], [`Reflect`], [`conform`] -- descriptors
//!   and the value-level conformance check

pub mod broadcast;
pub mod combine;
pub mod conform;
pub mod macros;
pub mod primitive;
pub mod remap;
pub mod repr;
pub mod shape;
pub mod slot;
pub mod structural;
pub mod wearable;

// ── Convenience re-exports: key types ────────────────────────────────

pub use broadcast::{Absent, BroadcastRepr, Everywhere, Fill};
pub use combine::CombineRepr;
pub use conform::{conform, ConformError, Conforming};
pub use primitive::{Blank, Both};
pub use remap::{Overwrite, RemapRepr, Retag, TakeLeft, TakeRight};
pub use repr::{Leaf, Meta, Nested, Nil, Pair};
pub use shape::{RawShape, Reflect, ShapeNode};
pub use slot::{Fixed, Maybe, Paired, Plain, Slot};
pub use structural::{broadcast_via_repr, combine_via_repr, remap_via_repr, Structural};
pub use wearable::{Broadcast, Combine, Remap, Wearable};
