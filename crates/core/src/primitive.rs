//! Primitive base-case instances.
//!
//! Two hand-written wearables that let composite records obtain the
//! capability without bespoke code: [`Blank`], the zero-field
//! placeholder, and [`Both`], the pairing of two capability-bearing
//! records. `Both` is also what terminates recursion through nested
//! leaves whose inner type is itself a composite.

use std::fmt;
use std::marker::PhantomData;

use crate::broadcast::Fill;
use crate::remap::Retag;
use crate::slot::{Paired, Slot};
use crate::wearable::{Broadcast, Combine, Remap, Wearable};

// ──────────────────────────────────────────────
// Blank: the zero-field placeholder
// ──────────────────────────────────────────────

/// A record with no fields, clothed in `F` only nominally.
///
/// All three operations are trivial and the laws hold vacuously: there
/// are no leaves to project or fill.
pub struct Blank<F: Slot>(PhantomData<F>);

impl<F: Slot> Blank<F> {
    pub fn new() -> Self {
        Blank(PhantomData)
    }
}

impl<F: Slot> Default for Blank<F> {
    fn default() -> Self {
        Self::new()
    }
}

// Derives would bound `F` itself; the slot is phantom here, so the
// impls are unconditional.
impl<F: Slot> Clone for Blank<F> {
    fn clone(&self) -> Self {
        Blank::new()
    }
}

impl<F: Slot> fmt::Debug for Blank<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Blank")
    }
}

impl<F: Slot> PartialEq for Blank<F> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<F: Slot> Wearable<F> for Blank<F> {
    type Wearing<G: Slot> = Blank<G>;
}

impl<F: Slot> Combine<F> for Blank<F> {
    fn combine<G: Slot>(self, _other: Blank<G>) -> Blank<Paired<F, G>> {
        Blank::new()
    }
}

impl<F: Slot> Broadcast<F> for Blank<F> {
    fn broadcast<P: Fill<F>>(_fill: &P) -> Self {
        Blank::new()
    }
}

impl<F: Slot> Remap<F> for Blank<F> {
    fn remap<G: Slot, T: Retag<F, G>>(self, _tag: &mut T) -> Blank<G> {
        Blank::new()
    }
}

// ──────────────────────────────────────────────
// Both: two wearables stacked together
// ──────────────────────────────────────────────

/// Two capability-bearing records clothed in the same slot, side by side.
///
/// Each operation applies the corresponding operation of each side
/// independently; broadcast hands the one filler to both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct Both<X, Y>(pub X, pub Y);

impl<F, X, Y> Wearable<F> for Both<X, Y>
where
    F: Slot,
    X: Wearable<F>,
    Y: Wearable<F>,
{
    type Wearing<G: Slot> = Both<X::Wearing<G>, Y::Wearing<G>>;
}

impl<F, X, Y> Combine<F> for Both<X, Y>
where
    F: Slot,
    X: Combine<F>,
    Y: Combine<F>,
{
    fn combine<G: Slot>(
        self,
        other: Both<X::Wearing<G>, Y::Wearing<G>>,
    ) -> Both<X::Wearing<Paired<F, G>>, Y::Wearing<Paired<F, G>>> {
        Both(self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<F, X, Y> Broadcast<F> for Both<X, Y>
where
    F: Slot,
    X: Broadcast<F>,
    Y: Broadcast<F>,
{
    fn broadcast<P: Fill<F>>(fill: &P) -> Self {
        Both(X::broadcast(fill), Y::broadcast(fill))
    }
}

impl<F, X, Y> Remap<F> for Both<X, Y>
where
    F: Slot,
    X: Remap<F>,
    Y: Remap<F>,
{
    fn remap<G: Slot, T: Retag<F, G>>(
        self,
        tag: &mut T,
    ) -> Both<X::Wearing<G>, Y::Wearing<G>> {
        Both(self.0.remap(tag), self.1.remap(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broadcast::Absent;
    use crate::remap::TakeLeft;
    use crate::slot::{Fixed, Maybe};

    #[test]
    fn blank_combine_is_blank() {
        let left: Blank<Maybe> = Blank::new();
        let right: Blank<Fixed<u8>> = Blank::new();
        let combined: Blank<Paired<Maybe, Fixed<u8>>> = left.combine(right);
        assert_eq!(combined, Blank::new());
    }

    #[test]
    fn blank_broadcast_ignores_filler() {
        let blank: Blank<Maybe> = Blank::broadcast(&Absent);
        assert_eq!(blank, Blank::new());
    }

    #[test]
    fn both_of_blanks_combines_componentwise() {
        let left: Both<Blank<Maybe>, Blank<Maybe>> = Both(Blank::new(), Blank::new());
        let right: Both<Blank<Fixed<u8>>, Blank<Fixed<u8>>> = Both(Blank::new(), Blank::new());
        let combined = left.combine(right);
        let projected: Both<Blank<Maybe>, Blank<Maybe>> = combined.remap(&mut TakeLeft);
        assert_eq!(projected, Both(Blank::new(), Blank::new()));
    }

    #[test]
    fn both_broadcast_fills_both_sides() {
        let both: Both<Blank<Maybe>, Blank<Maybe>> = Both::broadcast(&Absent);
        assert_eq!(both, Both(Blank::new(), Blank::new()));
    }
}
