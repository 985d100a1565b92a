//! Descriptor-level conformance: derived shapes validate, non-conforming
//! candidates are rejected with the offending path.

use serde_json::json;
use wardrobe_core::{conform, wardrobe, ConformError, Maybe, RawShape, Reflect};

wardrobe! {
    pub struct Engine {
        cylinders: u32,
        fuel: String,
    }
}

wardrobe! {
    pub struct Car {
        model: String,
        nested engine: Engine,
    }
}

#[test]
fn derived_shape_passes_conformance() {
    let raw: RawShape = <Car<Maybe> as Reflect>::shape().into();
    let validated = conform(&raw).unwrap();
    assert_eq!(validated, <Car<Maybe> as Reflect>::shape());
}

#[test]
fn derived_shape_snapshot() {
    let shape = <Car<Maybe> as Reflect>::shape();
    let expected = json!({
        "kind": "meta",
        "constructor": "Car",
        "inner": {
            "kind": "pair",
            "left": { "kind": "field", "name": "model", "payload": "String" },
            "right": {
                "kind": "nested",
                "name": "engine",
                "record": "Engine",
                "inner": {
                    "kind": "meta",
                    "constructor": "Engine",
                    "inner": {
                        "kind": "pair",
                        "left": { "kind": "field", "name": "cylinders", "payload": "u32" },
                        "right": { "kind": "field", "name": "fuel", "payload": "String" }
                    }
                }
            }
        }
    });
    assert_eq!(serde_json::to_value(&shape).unwrap(), expected);
}

#[test]
fn shape_descriptor_round_trips_through_json() {
    let shape = <Car<Maybe> as Reflect>::shape();
    let text = serde_json::to_string(&shape).unwrap();
    let back: wardrobe_core::ShapeNode = serde_json::from_str(&text).unwrap();
    assert_eq!(back, shape);
}

#[test]
fn sum_candidate_is_rejected() {
    // What an enum's shape would look like if it could be spelled:
    // two constructors behind one name.
    let candidate = RawShape::Choice {
        constructors: vec![
            RawShape::Meta {
                constructor: "Gasoline".to_string(),
                inner: Box::new(RawShape::Empty),
            },
            RawShape::Meta {
                constructor: "Electric".to_string(),
                inner: Box::new(RawShape::Empty),
            },
        ],
    };
    assert_eq!(
        conform(&candidate).unwrap_err(),
        ConformError::MultipleConstructors {
            path: "<root>".to_string(),
            count: 2,
        }
    );
}

#[test]
fn bare_field_candidate_is_rejected_with_path() {
    // A derived shape tampered so one leaf bypasses the wrapper.
    let candidate = RawShape::Meta {
        constructor: "Car".to_string(),
        inner: Box::new(RawShape::Pair {
            left: Box::new(RawShape::Field {
                name: "model".to_string(),
                payload: "String".to_string(),
            }),
            right: Box::new(RawShape::Bare {
                name: "vin".to_string(),
                payload: "u64".to_string(),
            }),
        }),
    };
    assert_eq!(
        conform(&candidate).unwrap_err(),
        ConformError::BareField {
            path: "Car.vin".to_string(),
            payload: "u64".to_string(),
        }
    );
}
