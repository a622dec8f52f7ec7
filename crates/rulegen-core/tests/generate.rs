//! End-to-end generation tests against an in-memory schema.

use rulegen_core::{
    GenerateError, GeneratorConfig, ProviderError, SchemaWalker, TableSelection, generate,
};
use rulegen_model::{ColumnDescriptor, LogicalType, SchemaSnapshot, TableDescriptor};

fn tokens(catalog: &rulegen_model::RuleCatalog, table: &str, column: &str) -> Vec<String> {
    catalog
        .column(table, column)
        .unwrap_or_else(|| panic!("missing rules for {table}.{column}"))
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn shop_schema() -> SchemaSnapshot {
    SchemaSnapshot::new(vec![
        TableDescriptor::new(
            "customers",
            vec![
                ColumnDescriptor::new("id", LogicalType::Bigint)
                    .with_precision(20, 0)
                    .unsigned(true),
                ColumnDescriptor::new("age", LogicalType::Integer)
                    .with_precision(3, 0)
                    .nullable(true)
                    .unsigned(true),
                ColumnDescriptor::new("user_email", LogicalType::String).with_length(255),
                ColumnDescriptor::new("password", LogicalType::String).with_length(60),
                ColumnDescriptor::new("created_at", LogicalType::Datetime).nullable(true),
                ColumnDescriptor::new("updated_at", LogicalType::Datetime).nullable(true),
            ],
        ),
        TableDescriptor::new(
            "order_items",
            vec![
                ColumnDescriptor::new("id", LogicalType::Integer).with_precision(10, 0),
                ColumnDescriptor::new("price", LogicalType::Decimal).with_precision(8, 2),
                ColumnDescriptor::new("shipped_on", LogicalType::Date).nullable(true),
                ColumnDescriptor::new("meta", LogicalType::Json).nullable(true),
                ColumnDescriptor::new("gift", LogicalType::Boolean),
                ColumnDescriptor::new("location", LogicalType::Other),
            ],
        ),
        TableDescriptor::new(
            "orders",
            vec![ColumnDescriptor::new("note", LogicalType::Text).nullable(true)],
        ),
    ])
}

#[test]
fn scenario_tokens() {
    let catalog = generate(&shop_schema(), &GeneratorConfig::new()).unwrap();

    assert_eq!(
        tokens(&catalog, "customers", "age"),
        vec!["nullable", "integer", "digits_between:0,6"]
    );
    assert_eq!(
        tokens(&catalog, "customers", "user_email"),
        vec!["required", "string", "email", "max:255"]
    );
    assert_eq!(
        tokens(&catalog, "orderItems", "price"),
        vec!["required", "numeric", r"regex:/^\d{1,8}(\.\d{1,2})?$/"]
    );
    assert_eq!(tokens(&catalog, "orderItems", "location"), vec!["required"]);
}

#[test]
fn table_keys_are_camel_case_and_columns_raw() {
    let catalog = generate(&shop_schema(), &GeneratorConfig::new()).unwrap();

    assert!(catalog.contains_table("orderItems"));
    assert!(!catalog.contains_table("order_items"));
    let columns: Vec<&str> = catalog
        .table("orderItems")
        .unwrap()
        .column_names()
        .collect();
    assert_eq!(columns, vec!["price", "shipped_on", "meta", "gift", "location"]);
}

#[test]
fn system_columns_never_appear() {
    let catalog = generate(&shop_schema(), &GeneratorConfig::new()).unwrap();

    for (_, rules) in catalog.iter() {
        for name in ["id", "created_at", "updated_at", "deleted_at"] {
            assert!(!rules.contains(name), "{name} should be excluded");
        }
    }
}

#[test]
fn ignored_columns_are_dropped_everywhere() {
    let config = GeneratorConfig::new().ignore_columns(["password", "meta"]);
    let catalog = generate(&shop_schema(), &config).unwrap();

    assert!(catalog.column("customers", "password").is_none());
    assert!(catalog.column("orderItems", "meta").is_none());
    assert!(catalog.column("customers", "user_email").is_some());
}

#[test]
fn ignored_table_has_no_key() {
    let config = GeneratorConfig::new().ignore_tables(["orders"]);
    let catalog = generate(&shop_schema(), &config).unwrap();

    assert!(!catalog.contains_table("orders"));
    assert!(catalog.contains_table("customers"));
}

#[test]
fn ignored_table_matches_raw_name_only() {
    let config = GeneratorConfig::new().ignore_tables(["orderItems"]);
    let catalog = generate(&shop_schema(), &config).unwrap();

    assert!(catalog.contains_table("orderItems"));
}

#[test]
fn explicit_tables_are_resolved_individually() {
    let config = GeneratorConfig::new().with_tables(TableSelection::Explicit(vec![
        "orders".to_string(),
        "customers".to_string(),
    ]));
    let catalog = generate(&shop_schema(), &config).unwrap();

    let keys: Vec<&str> = catalog.table_names().collect();
    assert_eq!(keys, vec!["customers", "orders"]);
}

#[test]
fn explicit_ignored_table_is_not_fetched() {
    let config = GeneratorConfig::new()
        .with_tables(TableSelection::Explicit(vec![
            "customers".to_string(),
            "legacy".to_string(),
        ]))
        .ignore_tables(["legacy"]);
    let catalog = generate(&shop_schema(), &config).unwrap();

    assert_eq!(catalog.table_count(), 1);
}

#[test]
fn missing_explicit_table_fails_the_run() {
    let config = GeneratorConfig::new().with_tables(TableSelection::Explicit(vec![
        "customers".to_string(),
        "invoices".to_string(),
    ]));
    let err = generate(&shop_schema(), &config).unwrap_err();

    let GenerateError::MetadataUnavailable { table, source } = err;
    assert_eq!(table.as_deref(), Some("invoices"));
    assert_eq!(
        source,
        ProviderError::TableNotFound {
            table: "invoices".to_string()
        }
    );
}

#[test]
fn tables_normalizing_to_same_key_merge() {
    let schema = SchemaSnapshot::new(vec![
        TableDescriptor::new(
            "user_roles",
            vec![ColumnDescriptor::new("role", LogicalType::String).with_length(32)],
        ),
        TableDescriptor::new(
            "user-roles",
            vec![ColumnDescriptor::new("scope", LogicalType::Text)],
        ),
    ]);
    let catalog = generate(&schema, &GeneratorConfig::new()).unwrap();

    assert_eq!(catalog.table_count(), 1);
    let columns: Vec<&str> = catalog
        .table("userRoles")
        .unwrap()
        .column_names()
        .collect();
    assert_eq!(columns, vec!["role", "scope"]);
}

#[test]
fn per_table_entry_point() {
    let schema = shop_schema();
    let walker = SchemaWalker::new(&schema);
    let config = GeneratorConfig::new();

    let rules = walker.resolve_table("orders", &config).unwrap();
    assert_eq!(rules.len(), 1);
    assert!(walker.resolve_table("nope", &config).is_err());
}

#[test]
fn generation_is_repeatable() {
    let schema = shop_schema();
    let config = GeneratorConfig::new().ignore_columns(["password"]);

    let first = serde_json::to_string(&generate(&schema, &config).unwrap()).unwrap();
    let second = serde_json::to_string(&generate(&schema, &config).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn catalog_json_snapshot() {
    let config = GeneratorConfig::new().ignore_columns(["password"]);
    let catalog = generate(&shop_schema(), &config).unwrap();

    insta::assert_json_snapshot!(catalog, @r#"
    {
      "customers": {
        "age": [
          "nullable",
          "integer",
          "digits_between:0,6"
        ],
        "user_email": [
          "required",
          "string",
          "email",
          "max:255"
        ]
      },
      "orderItems": {
        "price": [
          "required",
          "numeric",
          "regex:/^\\d{1,8}(\\.\\d{1,2})?$/"
        ],
        "shipped_on": [
          "nullable",
          "date_format:Y-m-d"
        ],
        "meta": [
          "nullable",
          "json"
        ],
        "gift": [
          "required",
          "boolean"
        ],
        "location": [
          "required"
        ]
      },
      "orders": {
        "note": [
          "nullable",
          "string"
        ]
      }
    }
    "#);
}
