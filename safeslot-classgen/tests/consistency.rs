//! The validator and the class generator agree on field names.
//!
//! For every slot, data keyed by the effective name passes both the JSON
//! Schema validator and class construction; data keyed by an aliased slot's
//! original name fails both. Values are judged the same way too.

use safeslot_classgen::{Module, build_module};
use safeslot_jsonschema::Validator;
use safeslot_schema::{SchemaBuilder, SchemaDefinition, SlotDefinition, bind_safe_aliases};
use serde_json::{Map, Value, json};

const SLOTS: [(&str, &str); 4] = [
    ("a", "a"),
    ("1S", "x_1S"),
    ("a/b", "a_b"),
    ("5'end", "x_5_end"),
];

fn issue_schema() -> SchemaDefinition {
    let mut schema = SchemaBuilder::new("issue_349")
        .add_class("c", SLOTS.iter().map(|(name, _)| *name), true)
        .add_defaults()
        .build();
    bind_safe_aliases(&mut schema);
    schema
}

fn single(key: &str) -> Map<String, Value> {
    let mut values = Map::new();
    values.insert(key.to_string(), json!("test"));
    values
}

fn check_both(validator: &Validator, module: &Module, key: &str) -> (bool, bool) {
    let values = single(key);
    let validated = validator.validate(&Value::Object(values.clone())).is_ok();
    let constructed = module.construct("c", &values).is_ok();
    (validated, constructed)
}

#[test]
fn test_effective_names_accepted_by_both() {
    let schema = issue_schema();
    let validator = Validator::new(&schema);
    let module = build_module(&schema);

    for (name, effective) in SLOTS {
        assert_eq!(schema.slot(name).unwrap().effective_name(), effective);
        assert_eq!(
            check_both(&validator, &module, effective),
            (true, true),
            "slot '{name}' keyed as '{effective}'"
        );
    }
}

#[test]
fn test_original_names_rejected_by_both() {
    let schema = issue_schema();
    let validator = Validator::new(&schema);
    let module = build_module(&schema);

    for (name, effective) in SLOTS {
        if name == effective {
            continue;
        }
        assert_eq!(
            check_both(&validator, &module, name),
            (false, false),
            "slot '{name}' keyed by its original name"
        );
    }
}

#[test]
fn test_instance_round_trips_through_validator() {
    let schema = issue_schema();
    let validator = Validator::new(&schema);
    let module = build_module(&schema);

    let values = json!({ "a": "1", "x_1S": "2", "a_b": null, "x_5_end": "4" });
    let instance = module
        .construct("c", values.as_object().unwrap())
        .unwrap();

    assert!(validator.validate(&instance.to_json()).is_ok());
    assert!(validator.validate_as(&instance.to_json(), "c").is_ok());
}

#[test]
fn test_integer_values_judged_alike() {
    let mut schema = SchemaBuilder::new("numbers")
        .add_slot(SlotDefinition::new("1N").range("integer"))
        .add_class("c", ["1N"], true)
        .add_defaults()
        .build();
    bind_safe_aliases(&mut schema);
    let validator = Validator::new(&schema);
    let module = build_module(&schema);

    let cases = [
        (json!(7), true),
        (json!(7.0), true),
        (json!(i64::MAX), true),
        (json!(i64::MIN), true),
        (json!(7.5), false),
        (json!(u64::MAX), false),
        (json!(1e300), false),
        (json!(-1e300), false),
    ];

    for (n, accepted) in cases {
        let mut values = Map::new();
        values.insert("x_1N".to_string(), n.clone());
        let validated = validator.validate(&Value::Object(values.clone())).is_ok();
        let constructed = module.construct("c", &values).is_ok();
        assert_eq!((validated, constructed), (accepted, accepted), "value {n}");
    }
}

#[test]
fn test_binding_twice_changes_nothing() {
    let once = issue_schema();
    let mut twice = once.clone();
    bind_safe_aliases(&mut twice);

    assert_eq!(
        Validator::new(&once).document(),
        Validator::new(&twice).document()
    );
    assert_eq!(
        build_module(&once).to_source(),
        build_module(&twice).to_source()
    );
}
