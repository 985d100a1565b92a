//! Structural conformance: the predicate that gates derivation.
//!
//! A record is derivable iff its representation has exactly one
//! constructor and every field is either a wrapped value or a nested
//! record that itself carries the capability. The predicate lives at two
//! levels:
//!
//! - **Static** -- the [`Conforming`] marker trait, implemented for the
//!   five node kinds and nothing else. The facade entry points bound
//!   their representations by it, so a non-conforming type has no
//!   instance to call: rejection is a missing impl at compile time, with
//!   no fallback and no partial derivation.
//! - **Descriptor** -- [`conform`], the same predicate run over a
//!   candidate [`RawShape`]. This is where rejection becomes observable
//!   data: a sum or a bare field fails with the dotted path of the
//!   offending node. Tooling and tests use this; the walkers never do.

use thiserror::Error;

use crate::repr::{Leaf, Meta, Nested, Nil, Pair};
use crate::shape::{RawShape, ShapeNode};
use crate::slot::Slot;
use crate::wearable::Wearable;

/// Marker for representation trees built only from the supported node
/// kinds. A nested leaf conforms only if its inner record is itself a
/// wearable, which recurses the predicate through indirect fields.
pub trait Conforming {}

impl<C: Conforming> Conforming for Meta<C> {}
impl Conforming for Nil {}
impl<L: Conforming, R: Conforming> Conforming for Pair<L, R> {}
impl<F: Slot, A> Conforming for Leaf<F, A> {}
impl<F: Slot, B: Wearable<F>> Conforming for Nested<F, B> {}

/// Why a candidate shape is not derivable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConformError {
    /// The candidate has no constructor metadata where one is required
    /// (every record shape is rooted at a `Meta` node).
    #[error("no constructor at `{path}`: a record shape must be rooted at constructor metadata")]
    MissingConstructor { path: String },

    /// The candidate is a sum: more than one constructor. Derivation
    /// supports exactly one.
    #[error("{count} constructors at `{path}`: derivation requires exactly one")]
    MultipleConstructors { path: String, count: usize },

    /// A field holds its payload with no wrapper applied.
    #[error("bare field `{path}` of type {payload}: every field must be a wrapped value")]
    BareField { path: String, payload: String },
}

/// Check a candidate shape and return its validated form.
///
/// Accepts exactly the restricted grammar; the first offending node wins.
/// Nested records are checked recursively under their dotted field path.
pub fn conform(candidate: &RawShape) -> Result<ShapeNode, ConformError> {
    check_record(candidate, "")
}

/// A record shape: constructor metadata around a field tree.
fn check_record(candidate: &RawShape, path: &str) -> Result<ShapeNode, ConformError> {
    match candidate {
        RawShape::Meta { constructor, inner } => {
            let scope = if path.is_empty() {
                constructor.clone()
            } else {
                path.to_string()
            };
            Ok(ShapeNode::Meta {
                constructor: constructor.clone(),
                inner: Box::new(check_fields(inner, &scope)?),
            })
        }
        RawShape::Choice { constructors } => Err(ConformError::MultipleConstructors {
            path: root_path(path),
            count: constructors.len(),
        }),
        _ => Err(ConformError::MissingConstructor {
            path: root_path(path),
        }),
    }
}

/// The field tree inside a constructor.
fn check_fields(candidate: &RawShape, path: &str) -> Result<ShapeNode, ConformError> {
    match candidate {
        // Inner metadata is a pass-through.
        RawShape::Meta { constructor, inner } => Ok(ShapeNode::Meta {
            constructor: constructor.clone(),
            inner: Box::new(check_fields(inner, path)?),
        }),
        RawShape::Empty => Ok(ShapeNode::Empty),
        RawShape::Pair { left, right } => Ok(ShapeNode::Pair {
            left: Box::new(check_fields(left, path)?),
            right: Box::new(check_fields(right, path)?),
        }),
        RawShape::Field { name, payload } => Ok(ShapeNode::Field {
            name: name.clone(),
            payload: payload.clone(),
        }),
        RawShape::Nested {
            name,
            record,
            inner,
        } => Ok(ShapeNode::Nested {
            name: name.clone(),
            record: record.clone(),
            inner: Box::new(check_record(inner, &format!("{path}.{name}"))?),
        }),
        RawShape::Choice { constructors } => Err(ConformError::MultipleConstructors {
            path: path.to_string(),
            count: constructors.len(),
        }),
        RawShape::Bare { name, payload } => Err(ConformError::BareField {
            path: format!("{path}.{name}"),
            payload: payload.clone(),
        }),
    }
}

fn root_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, payload: &str) -> RawShape {
        RawShape::Field {
            name: name.to_string(),
            payload: payload.to_string(),
        }
    }

    fn record(constructor: &str, inner: RawShape) -> RawShape {
        RawShape::Meta {
            constructor: constructor.to_string(),
            inner: Box::new(inner),
        }
    }

    #[test]
    fn accepts_two_field_record() {
        let candidate = record(
            "Profile",
            RawShape::Pair {
                left: Box::new(field("name", "String")),
                right: Box::new(field("score", "u32")),
            },
        );
        let validated = conform(&candidate).unwrap();
        assert!(matches!(validated, ShapeNode::Meta { .. }));
    }

    #[test]
    fn accepts_empty_record() {
        let validated = conform(&record("Nothing", RawShape::Empty)).unwrap();
        assert_eq!(
            validated,
            ShapeNode::Meta {
                constructor: "Nothing".to_string(),
                inner: Box::new(ShapeNode::Empty),
            }
        );
    }

    #[test]
    fn rejects_sum_at_root() {
        let candidate = RawShape::Choice {
            constructors: vec![
                record("Circle", field("radius", "f64")),
                record("Square", field("side", "f64")),
            ],
        };
        let err = conform(&candidate).unwrap_err();
        assert_eq!(
            err,
            ConformError::MultipleConstructors {
                path: "<root>".to_string(),
                count: 2,
            }
        );
    }

    #[test]
    fn rejects_bare_field_with_path() {
        let candidate = record(
            "Account",
            RawShape::Pair {
                left: Box::new(field("label", "String")),
                right: Box::new(RawShape::Bare {
                    name: "balance".to_string(),
                    payload: "i64".to_string(),
                }),
            },
        );
        let err = conform(&candidate).unwrap_err();
        assert_eq!(
            err,
            ConformError::BareField {
                path: "Account.balance".to_string(),
                payload: "i64".to_string(),
            }
        );
    }

    #[test]
    fn rejects_sum_buried_in_nested_record() {
        let bad_inner = RawShape::Choice {
            constructors: vec![record("On", RawShape::Empty), record("Off", RawShape::Empty)],
        };
        let candidate = record(
            "Device",
            RawShape::Nested {
                name: "power".to_string(),
                record: "PowerState".to_string(),
                inner: Box::new(bad_inner),
            },
        );
        let err = conform(&candidate).unwrap_err();
        assert_eq!(
            err,
            ConformError::MultipleConstructors {
                path: "Device.power".to_string(),
                count: 2,
            }
        );
    }

    #[test]
    fn missing_constructor_reports_field_path() {
        // A nested field whose inner shape starts at the field tree
        // instead of constructor metadata.
        let candidate = record(
            "Device",
            RawShape::Nested {
                name: "power".to_string(),
                record: "PowerState".to_string(),
                inner: Box::new(RawShape::Empty),
            },
        );
        let err = conform(&candidate).unwrap_err();
        assert_eq!(
            err,
            ConformError::MissingConstructor {
                path: "Device.power".to_string(),
            }
        );
    }

    #[test]
    fn error_messages_name_the_failure() {
        let err = ConformError::BareField {
            path: "Account.balance".to_string(),
            payload: "i64".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "bare field `Account.balance` of type i64: every field must be a wrapped value"
        );
    }
}
