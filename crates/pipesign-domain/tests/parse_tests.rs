use pipesign_domain::{CommandStep, GroupStep, Pipeline, Plugin, Signature, Step, UnknownStep};
use serde_json::json;

#[test]
fn command_object_parses_as_command_step() {
    let step: Step = serde_json::from_value(json!({
        "command": "make test",
        "env": {"FOO": "bar", "BAZ": "qux"},
        "plugins": ["docker#v5.0.0", {"cache#v1.0.0": {"paths": ["target"]}}],
        "matrix": {"setup": {"os": ["linux", "macos"]}},
    }))
    .unwrap();

    let cmd = match step {
        Step::Command(cmd) => cmd,
        other => panic!("expected command step, got {other:?}"),
    };
    assert_eq!(cmd.command, "make test");
    // env preserves source order
    let keys: Vec<&str> = cmd.env.keys().map(String::as_str).collect();
    assert_eq!(keys, ["FOO", "BAZ"]);
    assert_eq!(cmd.plugins.len(), 2);
    assert_eq!(cmd.plugins[0], Plugin::new("docker#v5.0.0", None));
    assert!(!cmd.matrix.unwrap().is_empty());
    assert!(cmd.signature.is_none());
}

#[test]
fn group_object_parses_recursively() {
    let step: Step = serde_json::from_value(json!({
        "group": "checks",
        "steps": [
            {"command": "lint"},
            {"group": null, "steps": [{"command": "unit"}]},
        ],
    }))
    .unwrap();

    let group = match step {
        Step::Group(g) => g,
        other => panic!("expected group step, got {other:?}"),
    };
    assert_eq!(group.group.as_deref(), Some("checks"));
    assert_eq!(group.steps.len(), 2);
    assert!(matches!(group.steps[0], Step::Command(_)));
    assert!(matches!(&group.steps[1], Step::Group(inner) if inner.steps.len() == 1));
}

#[test]
fn unrecognized_shape_degrades_to_unknown_and_round_trips() {
    // "wait" steps and bare strings are shapes this model does not interpret.
    for raw in [json!({"wait": null}), json!("wait"), json!({"block": "deploy?"})] {
        let step: Step = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(step, Step::Unknown(UnknownStep::new(raw.clone())), "dispatch of {raw}");
        let back = serde_json::to_value(&step).unwrap();
        assert_eq!(back, raw, "round-trip of {raw}");
    }
}

#[test]
fn malformed_command_step_is_a_parse_error() {
    // Recognized shape (has "command") but env is not a map.
    let err = serde_json::from_value::<Step>(json!({"command": "x", "env": ["A=1"]}));
    assert!(err.is_err());
}

#[test]
fn signature_serializes_only_when_present() {
    let mut cmd = CommandStep::new("echo hi");
    let unsigned = serde_json::to_value(Step::Command(cmd.clone())).unwrap();
    assert_eq!(unsigned, json!({"command": "echo hi"}));

    cmd.signature = Some(Signature { algorithm: "EdDSA".into(),
                                     signed_fields: vec!["command".into()],
                                     value: "abc123".into() });
    let signed = serde_json::to_value(Step::Command(cmd)).unwrap();
    assert_eq!(signed["signature"],
               json!({"algorithm": "EdDSA", "signed_fields": ["command"], "value": "abc123"}));
}

#[test]
fn pipeline_parses_object_and_bare_list_roots() {
    let from_obj = Pipeline::from_json(r#"{"steps": [{"command": "a"}]}"#).unwrap();
    let from_list = Pipeline::from_json(r#"[{"command": "a"}]"#).unwrap();
    assert_eq!(from_obj, from_list);
    assert_eq!(from_obj.steps.len(), 1);
}

#[test]
fn pipeline_rejects_non_pipeline_roots() {
    assert!(Pipeline::from_json("42").is_err());
    assert!(Pipeline::from_json(r#"{"no_steps": true}"#).is_err());
    assert!(Pipeline::from_json(r#"{"steps": "nope"}"#).is_err());
}

#[test]
fn group_step_serializes_nested_signatures_in_place() {
    let group = GroupStep::new(Some("g".into()),
                               vec![Step::Command(CommandStep::new("one")), Step::Command(CommandStep::new("two"))]);
    let value = serde_json::to_value(Step::Group(group)).unwrap();
    assert_eq!(value,
               json!({"group": "g", "steps": [{"command": "one"}, {"command": "two"}]}));
}
