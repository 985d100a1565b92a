//! wardrobe-combinators: zip-style conveniences over the derivation core.
//!
//! Everything here is a pure call-through to the primitive operations of
//! `wardrobe-core` -- no walker of its own, no new laws. `zip` is
//! combine under its everyday name, `unzip` projects a paired record
//! back into its two operands, and the `zip_with` family combines and
//! then remaps in one call. The n-ary variants nest pairings to the
//! left: three records zip into `Paired<Paired<F, G>, H>`.

use wardrobe_core::{
    Combine, Paired, Remap, Retag, Slot, TakeLeft, TakeRight, Wearable,
};

/// Zip two clothings of one family into a pairing of both. Combine,
/// under the name call sites tend to use.
pub fn zip<F, G, B>(left: B, right: B::Wearing<G>) -> B::Wearing<Paired<F, G>>
where
    F: Slot,
    G: Slot,
    B: Combine<F>,
{
    left.combine(right)
}

/// Split a paired record back into its two operands by projecting each
/// leaf's components.
///
/// Needs `Clone` because both projections consume the record; every leaf
/// is visited twice, once per side.
pub fn unzip<F, G, B>(zipped: B) -> (B::Wearing<F>, B::Wearing<G>)
where
    F: Slot,
    G: Slot,
    B: Remap<Paired<F, G>> + Clone,
{
    let left = zipped.clone().remap(&mut TakeLeft);
    let right = zipped.remap(&mut TakeRight);
    (left, right)
}

/// Zip two records and rewrite each paired leaf through `tag` in one
/// call.
pub fn zip_with<F, G, H, B, T>(tag: &mut T, left: B, right: B::Wearing<G>) -> B::Wearing<H>
where
    F: Slot,
    G: Slot,
    H: Slot,
    B: Combine<F>,
    B::Wearing<Paired<F, G>>: Remap<Paired<F, G>>,
    B::Wearing<Paired<F, G>>: Wearable<Paired<F, G>, Wearing<H> = B::Wearing<H>>,
    T: Retag<Paired<F, G>, H>,
{
    left.combine(right).remap(tag)
}

/// Zip three clothings; the result pairs to the left.
pub fn zip3<F, G, H, B>(
    first: B,
    second: B::Wearing<G>,
    third: B::Wearing<H>,
) -> B::Wearing<Paired<Paired<F, G>, H>>
where
    F: Slot,
    G: Slot,
    H: Slot,
    B: Combine<F>,
    B::Wearing<Paired<F, G>>: Combine<Paired<F, G>>,
    B::Wearing<Paired<F, G>>: Wearable<Paired<F, G>, Wearing<H> = B::Wearing<H>>,
    B::Wearing<Paired<F, G>>: Wearable<
        Paired<F, G>,
        Wearing<Paired<Paired<F, G>, H>> = B::Wearing<Paired<Paired<F, G>, H>>,
    >,
{
    first.combine(second).combine(third)
}

/// Zip three records and rewrite each `((f, g), h)` leaf through `tag`.
pub fn zip_with3<F, G, H, I, B, T>(
    tag: &mut T,
    first: B,
    second: B::Wearing<G>,
    third: B::Wearing<H>,
) -> B::Wearing<I>
where
    F: Slot,
    G: Slot,
    H: Slot,
    I: Slot,
    B: Combine<F>,
    B::Wearing<Paired<F, G>>: Combine<Paired<F, G>>,
    B::Wearing<Paired<F, G>>: Wearable<Paired<F, G>, Wearing<H> = B::Wearing<H>>,
    B::Wearing<Paired<F, G>>: Wearable<
        Paired<F, G>,
        Wearing<Paired<Paired<F, G>, H>> = B::Wearing<Paired<Paired<F, G>, H>>,
    >,
    B::Wearing<Paired<Paired<F, G>, H>>: Remap<Paired<Paired<F, G>, H>>,
    B::Wearing<Paired<Paired<F, G>, H>>:
        Wearable<Paired<Paired<F, G>, H>, Wearing<I> = B::Wearing<I>>,
    T: Retag<Paired<Paired<F, G>, H>, I>,
{
    zip3(first, second, third).remap(tag)
}
