use std::sync::Arc;

use serde_json::{Value, json};
use taskbind_core::graph::InMemoryDag;
use taskbind_core::models::{Task, TaskId};
use taskbind_core::operators::{EmptyOperator, GenericOperator, Operator};
use taskbind_core::registry::OperatorRegistry;
use taskbind_core::resolution::{ConfigSource, TaskResolver};

fn resolver() -> TaskResolver {
    let mut registry = OperatorRegistry::new();
    registry
        .register_namespace("pkg.mod", |namespace| {
            namespace
                .with_operator(
                    EmptyOperator::descriptor_named("NoOpOp"),
                    EmptyOperator::factory(),
                )
                .with_operator(
                    GenericOperator::descriptor_named("RealOp"),
                    GenericOperator::factory(),
                )
        })
        .unwrap();
    TaskResolver::new(Arc::new(registry))
}

fn object(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn no_op_operator_receives_empty_configuration() {
    let resolver = resolver();
    let dag = InMemoryDag::new("merge");
    let task = Task::new("t1", "pkg.mod.NoOpOp").with_extra_context(json!({"x": 1}));

    let merged = resolver.merged_config(&task).unwrap();
    assert!(merged.is_empty());

    let operator = resolver.resolve(&task, &dag, None).unwrap();
    assert!(operator.params().is_empty());
    assert!(operator.extra_context().is_none());
    assert!(dag.operator(&TaskId::from("t1")).unwrap().is_some());
}

#[test]
fn regular_operator_receives_extra_context() {
    let resolver = resolver();
    let dag = InMemoryDag::new("merge");
    let task = Task::new("t1", "pkg.mod.RealOp").with_extra_context(json!({"x": 1}));

    let operator = resolver.resolve(&task, &dag, None).unwrap();

    assert_eq!(
        operator.params(),
        &object(json!({"extra_context": {"x": 1}}))
    );
    assert_eq!(operator.extra_context(), Some(&json!({"x": 1})));
}

#[test]
fn task_config_overrides_owner_and_arguments_override_task_config() {
    let resolver = resolver();
    let dag = InMemoryDag::new("merge");
    let task = Task::new("t1", "pkg.mod.NoOpOp")
        .with_owner("alice")
        .with_task_config("owner", json!("bob"))
        .with_task_config("retries", json!(3))
        .with_argument("retries", json!(5));

    let merged = resolver.merged_config(&task).unwrap();
    assert_eq!(merged.source("owner"), Some(ConfigSource::TaskConfig));
    assert_eq!(merged.source("retries"), Some(ConfigSource::Arguments));

    let operator = resolver.resolve(&task, &dag, None).unwrap();
    assert_eq!(
        operator.params(),
        &object(json!({"owner": "bob", "retries": 5}))
    );
    assert_eq!(operator.owner(), Some("bob"));
    assert_eq!(operator.retries(), 5);
}

#[test]
fn precedence_holds_for_every_overlapping_key() {
    let resolver = resolver();
    let keys = ["owner", "retries", "pool", "queue", "extra_context"];

    let mut task = Task::new("t1", "pkg.mod.RealOp")
        .with_owner("identity")
        .with_extra_context(json!("context"));
    for key in keys {
        task = task.with_task_config(key, json!(format!("config-{key}")));
    }
    for key in &keys[1..] {
        task = task.with_argument(*key, json!(format!("argument-{key}")));
    }

    let merged = resolver.merged_config(&task).unwrap();

    assert_eq!(merged.get("owner"), Some(&json!("config-owner")));
    for key in &keys[1..] {
        assert_eq!(merged.get(key), Some(&json!(format!("argument-{key}"))));
        assert_eq!(merged.source(key), Some(ConfigSource::Arguments));
    }
}

#[test]
fn extra_context_layer_overrides_task_config_entry_of_same_name() {
    let resolver = resolver();
    let task = Task::new("t1", "pkg.mod.RealOp")
        .with_task_config("extra_context", json!("from-config"))
        .with_extra_context(json!({"from": "task"}));

    let merged = resolver.merged_config(&task).unwrap();
    assert_eq!(merged.get("extra_context"), Some(&json!({"from": "task"})));
    assert_eq!(merged.source("extra_context"), Some(ConfigSource::ExtraContext));
}

#[test]
fn empty_owner_never_produces_owner_key() {
    let resolver = resolver();
    for operator_class in ["pkg.mod.NoOpOp", "pkg.mod.RealOp"] {
        let merged = resolver
            .merged_config(&Task::new("t1", operator_class))
            .unwrap();
        assert!(!merged.contains_key("owner"), "{operator_class}");
    }
}

#[test]
fn no_op_suppression_ignores_extra_context_value() {
    let resolver = resolver();
    for extra_context in [
        json!(null),
        json!({}),
        json!({"x": 1}),
        json!([1, 2, 3]),
        json!("text"),
    ] {
        let task = Task::new("t1", "pkg.mod.NoOpOp").with_extra_context(extra_context);
        let merged = resolver.merged_config(&task).unwrap();
        assert!(!merged.contains_key("extra_context"));
    }
}

#[test]
fn repeated_merges_are_identical() {
    let resolver = resolver();
    let task = Task::new("t1", "pkg.mod.RealOp")
        .with_owner("alice")
        .with_task_config("retries", json!(3))
        .with_task_config("pool", json!("default"))
        .with_extra_context(json!({"vars": {"a": 1}}))
        .with_argument("queue", json!("q"));

    let first = resolver.merged_config(&task).unwrap();
    for _ in 0..16 {
        assert_eq!(resolver.merged_config(&task).unwrap(), first);
    }
}

#[test]
fn same_task_against_independent_graphs_gets_identical_configuration() {
    let resolver = resolver();
    let first_dag = InMemoryDag::new("first");
    let second_dag = InMemoryDag::new("second");
    let task = Task::new("t1", "pkg.mod.RealOp")
        .with_owner("alice")
        .with_argument("retries", json!(2));

    let first = resolver.resolve(&task, &first_dag, None).unwrap();
    let second = resolver.resolve(&task, &second_dag, None).unwrap();

    assert_eq!(first.params(), second.params());
    assert_eq!(first.dag_id(), "first");
    assert_eq!(second.dag_id(), "second");
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn tasks_deserialized_from_json_merge_like_built_tasks() {
    let resolver = resolver();
    let task: Task = serde_json::from_value(json!({
        "id": "t1",
        "operator_class": "pkg.mod.NoOpOp",
        "owner": "alice",
        "airflow_task_config": {"owner": "bob", "retries": 3},
        "extra_context": {"x": 1},
        "arguments": {"retries": 5}
    }))
    .unwrap();

    let params = resolver.merged_config(&task).unwrap().into_params();
    assert_eq!(params, object(json!({"owner": "bob", "retries": 5})));
}
