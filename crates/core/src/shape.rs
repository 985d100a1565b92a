//! Shape descriptors: serializable mirrors of the representation grammar.
//!
//! The type-level representation in [`repr`](crate::repr) is what the
//! walkers run on; the descriptors here are what tests and tooling look
//! at. [`ShapeNode`] is the validated descriptor -- it can only spell the
//! five supported node kinds. [`RawShape`] is the candidate grammar a
//! conformance check inspects: it can additionally spell a sum
//! ([`RawShape::Choice`]) and an unwrapped field ([`RawShape::Bare`]),
//! both of which exist only to be rejected with a useful path.

use serde::{Deserialize, Serialize};

/// A validated shape: the five node kinds, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeNode {
    /// Constructor metadata; exactly one per derived record, at the root.
    Meta {
        constructor: String,
        inner: Box<ShapeNode>,
    },
    /// Zero-field constructor.
    Empty,
    /// Two or more fields, nested pairwise.
    Pair {
        left: Box<ShapeNode>,
        right: Box<ShapeNode>,
    },
    /// Direct leaf: a wrapped field.
    Field { name: String, payload: String },
    /// Indirect leaf: a field holding another conforming record.
    Nested {
        name: String,
        record: String,
        inner: Box<ShapeNode>,
    },
}

/// A candidate shape as reported by reflection or written by hand.
///
/// Superset of [`ShapeNode`]: the extra kinds are the ones structural
/// conformance exists to reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawShape {
    Meta {
        constructor: String,
        inner: Box<RawShape>,
    },
    Empty,
    Pair {
        left: Box<RawShape>,
        right: Box<RawShape>,
    },
    Field { name: String, payload: String },
    Nested {
        name: String,
        record: String,
        inner: Box<RawShape>,
    },
    /// More than one constructor: a sum. Never derivable.
    Choice { constructors: Vec<RawShape> },
    /// A field holding a payload with no wrapper applied. Never derivable.
    Bare { name: String, payload: String },
}

impl From<ShapeNode> for RawShape {
    fn from(node: ShapeNode) -> Self {
        match node {
            ShapeNode::Meta { constructor, inner } => RawShape::Meta {
                constructor,
                inner: Box::new((*inner).into()),
            },
            ShapeNode::Empty => RawShape::Empty,
            ShapeNode::Pair { left, right } => RawShape::Pair {
                left: Box::new((*left).into()),
                right: Box::new((*right).into()),
            },
            ShapeNode::Field { name, payload } => RawShape::Field { name, payload },
            ShapeNode::Nested {
                name,
                record,
                inner,
            } => RawShape::Nested {
                name,
                record,
                inner: Box::new((*inner).into()),
            },
        }
    }
}

/// Access to a record family's shape descriptor.
///
/// Implemented by [`wardrobe!`](crate::wardrobe) for every clothing of a
/// derived family; all clothings of one family return the same tree,
/// which is the descriptor-level face of shape preservation.
pub trait Reflect {
    fn shape() -> ShapeNode;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_field_shape() -> ShapeNode {
        ShapeNode::Meta {
            constructor: "Profile".to_string(),
            inner: Box::new(ShapeNode::Pair {
                left: Box::new(ShapeNode::Field {
                    name: "name".to_string(),
                    payload: "String".to_string(),
                }),
                right: Box::new(ShapeNode::Field {
                    name: "score".to_string(),
                    payload: "u32".to_string(),
                }),
            }),
        }
    }

    #[test]
    fn shape_serializes_with_kind_tags() {
        let json = serde_json::to_value(two_field_shape()).unwrap();
        assert_eq!(json["kind"], "meta");
        assert_eq!(json["constructor"], "Profile");
        assert_eq!(json["inner"]["kind"], "pair");
        assert_eq!(json["inner"]["left"]["name"], "name");
    }

    #[test]
    fn raw_shape_from_validated_is_lossless() {
        let raw: RawShape = two_field_shape().into();
        match raw {
            RawShape::Meta { constructor, inner } => {
                assert_eq!(constructor, "Profile");
                assert!(matches!(*inner, RawShape::Pair { .. }));
            }
            other => panic!("expected Meta root, got {:?}", other),
        }
    }
}
