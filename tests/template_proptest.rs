//! Property-based tests over generated templates
//!
//! Generated statements stick to what the grammar reads back unambiguously:
//! string values start with a letter, keys and names use letters, `-` and `_`.

use infra_template::template::ast::{Cidr, Node};
use infra_template::template::grammar::{ActionKeyword, EntityKeyword};
use infra_template::template::{parse, Ast, Fills, Value};
use proptest::prelude::*;
use std::net::Ipv4Addr;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z_-]{0,8}"
}

fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9.-]{0,10}",
        (0i64..100_000).prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..1000).prop_map(|(a, b)| format!("{}-{}", a, b)),
        any::<u32>().prop_map(|n| Ipv4Addr::from(n).to_string()),
        (any::<u32>(), 0u8..=32).prop_map(|(n, prefix)| {
            format!("{}/{}", Ipv4Addr::from(n), prefix)
        }),
    ]
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => literal_strategy(),
        1 => name_strategy().prop_map(|n| format!("${}", n)),
        1 => name_strategy().prop_map(|n| format!("@{}", n)),
        1 => name_strategy().prop_map(|n| format!("{{{}}}", n)),
    ]
}

fn expression_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(ActionKeyword::ALL.to_vec()),
        prop::sample::select(EntityKeyword::ALL.to_vec()),
        prop::collection::vec((name_strategy(), value_strategy()), 0..5),
    )
        .prop_map(|(action, entity, params)| {
            let mut line = format!("{} {}", action.as_str(), entity.as_str());
            for (key, value) in params {
                line.push_str(&format!(" {}={}", key, value));
            }
            line
        })
}

fn statement_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => expression_strategy(),
        1 => (name_strategy(), expression_strategy())
            .prop_map(|(name, expr)| format!("{} = {}", name, expr)),
        1 => (name_strategy(), literal_strategy())
            .prop_map(|(name, value)| format!("var {} = {}", name, value)),
        1 => (name_strategy(), name_strategy())
            .prop_map(|(name, hole)| format!("var {} = {{{}}}", name, hole)),
        1 => "[a-z ]{0,12}".prop_map(|text| format!("# {}", text)),
    ]
}

fn template_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(statement_strategy(), 1..8).prop_map(|lines| lines.join("\n"))
}

fn fills_strategy() -> impl Strategy<Value = Fills> {
    prop::collection::btree_map(
        name_strategy(),
        prop_oneof![
            "[a-z]{1,6}".prop_map(Value::from),
            any::<i64>().prop_map(Value::Int),
        ],
        0..6,
    )
}

fn assert_keys_exclusive(ast: &Ast) {
    for statement in &ast.statements {
        if let Ok(expr) = statement.expression() {
            let keys = expr
                .params
                .keys()
                .chain(expr.refs.keys())
                .chain(expr.aliases.keys())
                .chain(expr.holes.keys());
            for key in keys {
                assert_eq!(expr.key_occurrences(key), 1, "key '{}' in '{}'", key, expr);
            }
        }
    }
}

proptest! {
    #[test]
    fn test_rendering_round_trips(source in template_strategy()) {
        let ast = parse(&source).unwrap();
        // a template of comments renders to nothing, which is not a template
        prop_assume!(!ast.is_empty());
        let rendered = ast.to_string();

        let reparsed = parse(&rendered).unwrap();
        prop_assert_eq!(reparsed.to_string(), rendered);
    }

    #[test]
    fn test_cidrs_parse_masked(n in any::<u32>(), prefix in 0u8..=32) {
        let source = format!("create vpc cidr={}/{}", Ipv4Addr::from(n), prefix);
        let ast = parse(&source).unwrap();

        let expected = Cidr::new(Ipv4Addr::from(n), prefix).unwrap();
        let params = ast.statements[0].params().unwrap();
        prop_assert_eq!(&params["cidr"], &Value::Cidr(expected));
    }

    #[test]
    fn test_clone_leaves_source_untouched(source in template_strategy(), fills in fills_strategy()) {
        let template = parse(&source).unwrap();
        let snapshot = template.to_string();

        let mut instance = template.clone();
        instance.process_holes(&fills);
        instance.process_refs(&fills);

        prop_assert_eq!(template.to_string(), snapshot);
        prop_assert_eq!(parse(&source).unwrap(), template);
    }

    #[test]
    fn test_keys_stay_exclusive(source in template_strategy(), fills in fills_strategy()) {
        let mut ast = parse(&source).unwrap();
        assert_keys_exclusive(&ast);

        ast.process_holes(&fills);
        assert_keys_exclusive(&ast);

        let values = ast.var_values();
        ast.process_refs(&values);
        ast.process_refs(&fills);
        assert_keys_exclusive(&ast);
    }

    #[test]
    fn test_processed_holes_are_gone(source in template_strategy(), fills in fills_strategy()) {
        let mut ast = parse(&source).unwrap();
        ast.process_holes(&fills);

        for statement in &ast.statements {
            match &statement.node {
                Node::Var(var) => {
                    if let Some(hole) = &var.hole {
                        prop_assert!(!fills.contains_key(hole));
                    }
                }
                _ => {
                    let expr = statement.expression().unwrap();
                    for hole in expr.holes.values() {
                        prop_assert!(!fills.contains_key(hole));
                    }
                }
            }
        }
    }

    #[test]
    fn test_execution_statements_exclude_vars(source in template_strategy()) {
        let ast = parse(&source).unwrap();
        let executed = ast.execution_statements();

        let expected: Vec<&_> = ast.statements.iter().filter(|s| !s.is_var()).collect();
        prop_assert_eq!(executed, expected);
    }
}
