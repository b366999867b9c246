use inlay::schema::app::*;
use inlay::schema::{Name, PrefixBehavior, Registry, Resolver};
use inlay::value;

const PERSON: ModelId = ModelId(0);
const ADDRESS: ModelId = ModelId(1);
const COMPANY: ModelId = ModelId(2);

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

fn embedded_field(model: ModelId, index: usize, name: &str, embedded: Embedded) -> Field {
    Field {
        id: model.field(index),
        name: FieldName {
            app_name: name.to_string(),
            storage_name: None,
        },
        ty: FieldTy::Embedded(embedded),
        nullable: true,
    }
}

fn entity(id: ModelId, name: &str, fields: Vec<Field>) -> Model {
    Model {
        id,
        name: Name::new(name),
        kind: ModelKind::Entity,
        fields,
    }
}

fn embeddable(id: ModelId, name: &str, fields: Vec<Field>) -> Model {
    Model {
        id,
        name: Name::new(name),
        kind: ModelKind::Embeddable,
        fields,
    }
}

/// Person { id, addr: Address, company: Company } where Company embeds
/// Address with an absolute `addr_` prefix: both `addr.city` and
/// `company.address.city` resolve to the column `addr_city`.
fn colliding_schema() -> Schema {
    let address = embeddable(ADDRESS, "Address", vec![scalar_field(ADDRESS, 0, "city")]);
    let company = embeddable(
        COMPANY,
        "Company",
        vec![
            scalar_field(COMPANY, 0, "name"),
            embedded_field(
                COMPANY,
                1,
                "address",
                Embedded {
                    target: ADDRESS,
                    prefix: Some("addr_".to_string()),
                    prefix_behavior: Some(PrefixBehavior::Absolute),
                },
            ),
        ],
    );
    let person = entity(
        PERSON,
        "Person",
        vec![
            scalar_field(PERSON, 0, "id"),
            embedded_field(PERSON, 1, "addr", Embedded::new(ADDRESS)),
            embedded_field(PERSON, 2, "company", Embedded::new(COMPANY)),
        ],
    );

    Schema::from_models(&[person, address, company]).unwrap()
}

#[test]
fn colliding_columns_fail_resolution() {
    let s = colliding_schema();
    let err = Resolver::new().resolve(&s, PERSON).unwrap_err();

    assert!(err.is_duplicate_column());

    let msg = err.to_string();
    assert!(msg.contains("addr_city"), "got: {msg}");
    assert!(msg.contains("Person"), "got: {msg}");
    assert!(msg.contains("addr.city"), "got: {msg}");
    assert!(msg.contains("company.address.city"), "got: {msg}");
}

#[test]
fn nested_leaf_may_collide_with_root_scalar() {
    // A nested scalar's prefixed column can land on a root scalar's name;
    // that is a collision like any other.
    let address = embeddable(ADDRESS, "Address", vec![scalar_field(ADDRESS, 0, "city")]);
    let person = entity(
        PERSON,
        "Person",
        vec![
            scalar_field(PERSON, 0, "address_city"),
            embedded_field(PERSON, 1, "address", Embedded::new(ADDRESS)),
        ],
    );

    let s = Schema::from_models(&[person, address]).unwrap();
    let err = Resolver::new().resolve(&s, PERSON).unwrap_err();

    assert!(err.is_duplicate_column());
    let msg = err.to_string();
    assert!(msg.contains("address_city"), "got: {msg}");
    assert!(msg.contains("address.city"), "got: {msg}");
}

#[test]
fn failed_registration_publishes_nothing() {
    let s = colliding_schema();
    let registry = Registry::new();

    let err = registry.register(&s, PERSON).unwrap_err();
    assert!(err.is_duplicate_column());

    // No partial registration is visible afterwards.
    assert!(registry.get(PERSON).unwrap_err().is_not_registered());
    assert!(registry.is_empty());
}

#[test]
fn relative_nesting_resolves_the_collision() {
    // The same declarations with a relative inner prefix produce
    // `company_addr_city` for the nested path, and registration succeeds.
    let address = embeddable(ADDRESS, "Address", vec![scalar_field(ADDRESS, 0, "city")]);
    let company = embeddable(
        COMPANY,
        "Company",
        vec![
            scalar_field(COMPANY, 0, "name"),
            embedded_field(
                COMPANY,
                1,
                "address",
                Embedded {
                    target: ADDRESS,
                    prefix: Some("addr_".to_string()),
                    prefix_behavior: Some(PrefixBehavior::Relative),
                },
            ),
        ],
    );
    let person = entity(
        PERSON,
        "Person",
        vec![
            scalar_field(PERSON, 0, "id"),
            embedded_field(PERSON, 1, "addr", Embedded::new(ADDRESS)),
            embedded_field(PERSON, 2, "company", Embedded::new(COMPANY)),
        ],
    );

    let s = Schema::from_models(&[person, address, company]).unwrap();
    let meta = Resolver::new().resolve(&s, PERSON).unwrap();

    let nested = meta
        .field_by_path(&inlay::path!["company", "address", "city"])
        .unwrap();
    assert_eq!(nested.column, "company_addr_city");

    let sibling = meta.field_by_path(&inlay::path!["addr", "city"]).unwrap();
    assert_eq!(sibling.column, "addr_city");
}

#[test]
fn duplicate_local_property_names_are_rejected_at_declaration() {
    let person = entity(
        PERSON,
        "Person",
        vec![
            scalar_field(PERSON, 0, "id"),
            scalar_field(PERSON, 1, "id"),
        ],
    );

    let err = Schema::from_models(&[person]).unwrap_err();
    assert!(err.is_invalid_schema());
    assert!(err.to_string().contains("`id`"), "got: {err}");
}
