//! Property tests for rule derivation and schema traversal.

use proptest::prelude::*;
use rulegen_core::{GeneratorConfig, SYSTEM_COLUMNS, column_rules, generate};
use rulegen_model::{ColumnDescriptor, LogicalType, RuleToken, SchemaSnapshot, TableDescriptor};

fn logical_type() -> impl Strategy<Value = LogicalType> {
    prop_oneof![
        Just(LogicalType::Integer),
        Just(LogicalType::Bigint),
        Just(LogicalType::String),
        Just(LogicalType::Text),
        Just(LogicalType::Date),
        Just(LogicalType::Datetime),
        Just(LogicalType::Time),
        Just(LogicalType::Float),
        Just(LogicalType::Decimal),
        Just(LogicalType::Json),
        Just(LogicalType::Boolean),
        Just(LogicalType::Other),
    ]
}

fn column_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z_]{0,12}",
        proptest::sample::select(SYSTEM_COLUMNS).prop_map(str::to_string),
    ]
}

prop_compose! {
    fn column()(
        name in column_name(),
        logical_type in logical_type(),
        length in proptest::option::of(0u32..70_000),
        precision in proptest::option::of(0u32..70),
        scale in proptest::option::of(0u32..30),
        nullable in any::<bool>(),
        unsigned in any::<bool>(),
    ) -> ColumnDescriptor {
        ColumnDescriptor { name, logical_type, length, precision, scale, nullable, unsigned }
    }
}

prop_compose! {
    fn table()(
        name in "[a-z][a-z_]{0,10}",
        columns in proptest::collection::vec(column(), 0..8),
    ) -> TableDescriptor {
        TableDescriptor::new(name, columns)
    }
}

proptest! {
    #[test]
    fn first_token_is_nullability(column in column()) {
        let rules = column_rules(&column);
        let expected = if column.nullable { RuleToken::Nullable } else { RuleToken::Required };
        prop_assert_eq!(&rules[0], &expected);
        prop_assert_eq!(rules.iter().filter(|token| token.is_nullability()).count(), 1);
    }

    #[test]
    fn integer_digit_bound_formula(
        mut column in column(),
        logical_type in prop_oneof![Just(LogicalType::Integer), Just(LogicalType::Bigint)],
    ) {
        column.logical_type = logical_type;
        let precision = u64::from(column.precision.unwrap_or(0));
        let expected = if column.unsigned { precision * 2 } else { precision + 1 };
        let rules = column_rules(&column);
        prop_assert_eq!(rules.len(), 3);
        prop_assert_eq!(&rules[2], &RuleToken::DigitsBetween(expected));
    }

    #[test]
    fn fractional_pattern_bounds(
        mut column in column(),
        logical_type in prop_oneof![Just(LogicalType::Float), Just(LogicalType::Decimal)],
    ) {
        column.logical_type = logical_type;
        let precision = column.precision.unwrap_or(0);
        let scale = column.scale.unwrap_or(0);
        let rules = column_rules(&column);
        let pattern = rules[2].to_string();
        let prefix = format!(r"regex:/^\d{{1,{precision}}}");
        prop_assert!(pattern.starts_with(&prefix), "{}", pattern);
        if scale > 0 {
            let fraction = format!(r"(\.\d{{1,{scale}}})?$/");
            prop_assert!(pattern.ends_with(&fraction), "{}", pattern);
        } else {
            prop_assert_eq!(pattern, format!("{prefix}$/"));
        }
    }

    #[test]
    fn sized_types_carry_a_bound(column in column()) {
        let rules = column_rules(&column);
        let ty = column.logical_type;
        if ty.is_integral() || ty.is_fractional() {
            prop_assert_eq!(rules.len(), 3);
        } else if ty == LogicalType::Other {
            prop_assert_eq!(rules.len(), 1);
        } else {
            prop_assert!(rules.len() <= 4);
        }
    }

    #[test]
    fn excluded_columns_never_appear(
        tables in proptest::collection::vec(table(), 0..5),
        ignored in proptest::collection::btree_set("[a-z][a-z_]{0,12}", 0..4),
    ) {
        let schema = SchemaSnapshot::new(tables);
        let config = GeneratorConfig::new().ignore_columns(ignored.iter().cloned());
        let catalog = generate(&schema, &config).unwrap();

        for (_, rules) in catalog.iter() {
            for name in rules.column_names() {
                prop_assert!(!SYSTEM_COLUMNS.contains(&name));
                prop_assert!(!ignored.contains(name));
            }
        }
    }

    #[test]
    fn generation_is_idempotent(tables in proptest::collection::vec(table(), 0..5)) {
        let schema = SchemaSnapshot::new(tables);
        let config = GeneratorConfig::new();
        let first = generate(&schema, &config).unwrap();
        let second = generate(&schema, &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
