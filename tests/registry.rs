use inlay::schema::app::*;
use inlay::schema::{Name, PrefixBehavior, Registry, Resolver};
use inlay::value;

use std::sync::Arc;

const PERSON: ModelId = ModelId(0);
const ORDER: ModelId = ModelId(1);
const ADDRESS: ModelId = ModelId(2);

fn scalar_field(model: ModelId, index: usize, name: &str) -> Field {
    Field {
        id: model.field(index),
        name: FieldName {
            app_name: name.to_string(),
            storage_name: None,
        },
        ty: FieldTy::Scalar(FieldScalar {
            ty: value::Type::String,
        }),
        nullable: false,
    }
}

fn embedded_field(model: ModelId, index: usize, name: &str, target: ModelId) -> Field {
    Field {
        id: model.field(index),
        name: FieldName {
            app_name: name.to_string(),
            storage_name: None,
        },
        ty: FieldTy::Embedded(Embedded::new(target)),
        nullable: true,
    }
}

fn schema() -> Schema {
    let address = embeddable_address();
    let person = Model {
        id: PERSON,
        name: Name::new("Person"),
        kind: ModelKind::Entity,
        fields: vec![
            scalar_field(PERSON, 0, "id"),
            embedded_field(PERSON, 1, "address", ADDRESS),
        ],
    };
    let order = Model {
        id: ORDER,
        name: Name::new("Order"),
        kind: ModelKind::Entity,
        fields: vec![
            scalar_field(ORDER, 0, "id"),
            embedded_field(ORDER, 1, "shipping", ADDRESS),
        ],
    };

    Schema::from_models(&[person, order, address]).unwrap()
}

fn embeddable_address() -> Model {
    Model {
        id: ADDRESS,
        name: Name::new("Address"),
        kind: ModelKind::Embeddable,
        fields: vec![scalar_field(ADDRESS, 0, "city")],
    }
}

#[test]
fn register_then_get_returns_the_same_metadata() {
    let s = schema();
    let registry = Registry::new();

    let registered = registry.register(&s, PERSON).unwrap();
    let fetched = registry.get(PERSON).unwrap();

    assert!(Arc::ptr_eq(&registered, &fetched));
    assert_eq!(fetched.name.upper_camel_case(), "Person");
}

#[test]
fn register_is_idempotent_per_entity() {
    let s = schema();
    let registry = Registry::new();

    let first = registry.register(&s, PERSON).unwrap();
    let second = registry.register(&s, PERSON).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 1);
}

#[test]
fn get_before_register_fails() {
    let registry = Registry::new();
    let err = registry.get(PERSON).unwrap_err();

    assert!(err.is_not_registered());
    assert!(err.to_string().contains("ModelId(0)"), "got: {err}");
}

#[test]
fn get_is_recoverable_by_registering() {
    let s = schema();
    let registry = Registry::new();

    assert!(registry.get(PERSON).unwrap_err().is_not_registered());

    registry.register(&s, PERSON).unwrap();
    assert!(registry.get(PERSON).is_ok());
}

#[test]
fn clear_tears_down_all_registrations() {
    let s = schema();
    let registry = Registry::new();

    registry.register(&s, PERSON).unwrap();
    registry.register(&s, ORDER).unwrap();
    assert_eq!(registry.len(), 2);

    registry.clear();

    assert!(registry.is_empty());
    assert!(registry.get(PERSON).unwrap_err().is_not_registered());
}

#[test]
fn reconfiguration_requires_clearing_first() {
    // Registering again without clearing returns the stored metadata, even
    // if the declarations have since changed.
    let s = schema();
    let registry = Registry::new();
    let first = registry.register(&s, PERSON).unwrap();

    let again = registry.register(&s, PERSON).unwrap();
    assert!(Arc::ptr_eq(&first, &again));

    registry.clear();
    let fresh = registry.register(&s, PERSON).unwrap();
    assert!(!Arc::ptr_eq(&first, &fresh));
}

#[test]
fn registry_carries_resolver_configuration() {
    let s = schema();

    let mut resolver = Resolver::new();
    resolver.default_prefix_behavior(PrefixBehavior::Relative);
    let registry = Registry::with_resolver(resolver);

    // No embedding in the fixture has an explicit prefix, so the configured
    // default changes nothing here; it is simply carried through.
    let meta = registry.register(&s, PERSON).unwrap();
    assert_eq!(
        meta.columns().collect::<Vec<_>>(),
        vec!["id", "address", "address_city"]
    );
}

#[test]
fn independent_entities_register_in_parallel() {
    let s = schema();
    let registry = Registry::new();

    std::thread::scope(|scope| {
        scope.spawn(|| registry.register(&s, PERSON).unwrap());
        scope.spawn(|| registry.register(&s, ORDER).unwrap());
    });

    assert_eq!(registry.len(), 2);
    assert!(registry.get(PERSON).is_ok());
    assert!(registry.get(ORDER).is_ok());
}

#[test]
fn racing_registrations_agree() {
    let s = schema();
    let registry = Registry::new();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| registry.register(&s, PERSON).unwrap());
        }
    });

    assert_eq!(registry.len(), 1);
    let meta = registry.get(PERSON).unwrap();
    assert_eq!(
        meta.columns().collect::<Vec<_>>(),
        vec!["id", "address", "address_city"]
    );
}
