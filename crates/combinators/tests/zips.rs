//! Combinator behavior on a concrete derived record.

use wardrobe_combinators::{unzip, zip, zip3, zip_with, zip_with3};
use wardrobe_core::{wardrobe, Fixed, Maybe, Paired, Retag};

wardrobe! {
    pub struct Stats {
        hits: u32,
        label: String,
    }
}

fn maybe_stats() -> Stats<Maybe> {
    Stats {
        hits: Some(12),
        label: Some("run".to_string()),
    }
}

fn fixed_stats(n: u8) -> Stats<Fixed<u8>> {
    Stats {
        hits: n,
        label: n,
    }
}

/// Adds the two sides of a paired `Fixed<u32>` leaf.
struct AddPair;

impl Retag<Paired<Fixed<u32>, Fixed<u32>>, Fixed<u32>> for AddPair {
    fn retag<A>(&mut self, value: (u32, u32)) -> u32 {
        value.0 + value.1
    }
}

/// Adds all three sides of a `((u32, u32), u32)` leaf.
struct AddTriple;

impl Retag<Paired<Paired<Fixed<u32>, Fixed<u32>>, Fixed<u32>>, Fixed<u32>> for AddTriple {
    fn retag<A>(&mut self, value: ((u32, u32), u32)) -> u32 {
        value.0 .0 + value.0 .1 + value.1
    }
}

fn fixed32_stats(n: u32) -> Stats<Fixed<u32>> {
    Stats {
        hits: n,
        label: n,
    }
}

#[test]
fn zip_pairs_fields() {
    let zipped = zip(maybe_stats(), fixed_stats(3));
    assert_eq!(zipped.hits, (Some(12), 3));
    assert_eq!(zipped.label, (Some("run".to_string()), 3));
}

#[test]
fn unzip_inverts_zip() {
    let zipped = zip(maybe_stats(), fixed_stats(3));
    let (left, right) = unzip(zipped);
    assert_eq!(left, maybe_stats());
    assert_eq!(right, fixed_stats(3));
}

#[test]
fn zip_with_rewrites_each_pair() {
    let summed: Stats<Fixed<u32>> =
        zip_with(&mut AddPair, fixed32_stats(10), fixed32_stats(5));
    assert_eq!(summed.hits, 15);
    assert_eq!(summed.label, 15);
}

#[test]
fn zip3_nests_pairings_to_the_left() {
    let zipped = zip3(fixed32_stats(1), fixed32_stats(2), fixed32_stats(4));
    assert_eq!(zipped.hits, ((1, 2), 4));
    assert_eq!(zipped.label, ((1, 2), 4));
}

#[test]
fn zip_with3_rewrites_each_triple() {
    let summed: Stats<Fixed<u32>> = zip_with3(
        &mut AddTriple,
        fixed32_stats(1),
        fixed32_stats(2),
        fixed32_stats(4),
    );
    assert_eq!(summed.hits, 7);
    assert_eq!(summed.label, 7);
}
