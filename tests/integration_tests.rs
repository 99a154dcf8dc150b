use chartopts::options::{self, color::GRADIENT, pane::PANE, pane::PANE_BACKGROUND, wordcloud::WORDCLOUD_SERIES};
use chartopts::parser::parse_literal;
use chartopts::{Color, Input, Node, OptionError, OutputFormat, RenderOptions, Schema, SlotKind, SlotValue};
use serde_json::{json, Value};
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

/// Helper function to run the chartopts binary with a literal on stdin
fn run_chartopts(args: &[&str], input: &str) -> Result<String, String> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_chartopts"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| format!("Failed to spawn process: {}", e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input.as_bytes())
            .map_err(|e| format!("Failed to write to stdin: {}", e))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| format!("Failed to wait for process: {}", e))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).to_string())
    }
}

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("test/{}", name)).expect("Failed to read fixture")
}

// ============================================================================
// Library: construction surfaces
// ============================================================================

#[test]
fn test_three_construction_surfaces_agree() {
    let from_kwargs = Node::from_kwargs(
        &PANE_BACKGROUND,
        [("inner_radius", Input::from("60%")), ("shape", Input::from("arc")), ("border_width", Input::from(0))],
    )
    .unwrap();
    let from_dict = Node::from_value(&PANE_BACKGROUND, &json!({"innerRadius": "60%", "shape": "arc", "borderWidth": 0})).unwrap();
    let from_literal = Node::from_js_literal(&PANE_BACKGROUND, "{ innerRadius: '60%', shape: 'arc', borderWidth: 0 }").unwrap();

    assert_eq!(from_kwargs, from_dict);
    assert_eq!(from_dict, from_literal);
}

#[test]
fn test_end_to_end_width_and_unset_color() {
    let marker = Node::from_kwargs(
        &options::axis_marker::AXIS_MARKER,
        [("width", Input::from(0.01)), ("color", Input::from(None::<&str>))],
    )
    .unwrap();
    assert_eq!(Value::Object(marker.to_dict()), json!({"width": 0.01}));
}

#[test]
fn test_round_trip_every_fixture() {
    let pane = Node::from_js_literal(&PANE, &fixture("pane.js")).unwrap();
    assert_eq!(Node::from_dict(&PANE, &pane.to_dict()).unwrap(), pane);

    let cloud = Node::from_js_literal(&WORDCLOUD_SERIES, &fixture("wordcloud.js")).unwrap();
    assert_eq!(Node::from_dict(&WORDCLOUD_SERIES, &cloud.to_dict()).unwrap(), cloud);
}

/// A valid mapping for `schema` with only its first slot set.
fn sample_node(schema: &'static Schema, depth: usize) -> Value {
    let def = schema.slots().next().expect("schema has no slots");
    let mut map = serde_json::Map::new();
    map.insert(def.key.to_string(), samples(def.kind, depth)[0].clone());
    Value::Object(map)
}

/// Representative valid inputs for a slot kind; every shape the kind accepts.
fn samples(kind: SlotKind, depth: usize) -> Vec<Value> {
    assert!(depth < 16, "schema nesting does not terminate");
    let depth = depth + 1;
    match kind {
        SlotKind::Bool => vec![json!(true), json!(false)],
        SlotKind::Number => vec![json!(3), json!(0.25)],
        SlotKind::Integer { min } => vec![json!(min.unwrap_or(0).max(1))],
        SlotKind::Float { min, max } => {
            let v = if min.is_finite() { min } else if max.is_finite() { max } else { 0.5 };
            vec![json!(v)]
        }
        SlotKind::Text => vec![json!("text")],
        SlotKind::Callback => vec![json!("function () { return this.y; }")],
        SlotKind::Enum { allowed, .. } => allowed.iter().map(|a| json!(a)).collect(),
        SlotKind::NumberOrPercent => vec![json!(50), json!("50%"), json!("75")],
        SlotKind::NumberOrText => vec![json!(3), json!("auto")],
        SlotKind::Color => vec![
            json!("#123456"),
            json!({"linearGradient": {"x1": 0, "x2": 1}, "stops": [[0, "#fff"], [1, "#000"]]}),
            json!({"radialGradient": {"cx": 0.5, "r": 0.7}, "stops": [[0.5, "red"]]}),
            json!({"patternOptions": {"path": "M 0 0 L 5 5", "width": 5}, "patternIndex": 1}),
        ],
        SlotKind::Node(target) => vec![sample_node(target, depth)],
        SlotKind::NodeOrBool(target) => vec![sample_node(target, depth), json!(true), json!(false)],
        SlotKind::NodeOrList(target) => {
            let one = sample_node(target, depth);
            vec![one.clone(), json!([one.clone(), one])]
        }
        SlotKind::NodeList { schema, wrap_single } => {
            let one = sample_node(schema, depth);
            let mut out = vec![json!([one.clone(), {}])];
            if wrap_single {
                out.push(one);
            }
            out
        }
        SlotKind::DataPoints(target) => {
            let mut out = vec![json!([sample_node(target, depth), null])];
            if target.has_slot("y") {
                out.push(json!([3, 4.5]));
            }
            out
        }
        SlotKind::Strings => vec![json!(["a", "b"])],
        SlotKind::Pair => vec![json!(["50%", 100])],
        SlotKind::Stops => vec![json!([[0, "#fff"], [1, "#000"]])],
        SlotKind::Map => vec![json!({"fontSize": "12px", "textOutline": "none"})],
    }
}

#[test]
fn test_round_trip_every_slot_of_every_schema() {
    for schema in options::ALL.iter().copied() {
        let mut full = Node::new(schema);
        for def in schema.slots() {
            for input in samples(def.kind, 0) {
                let node = Node::new(schema)
                    .with(def.name, input.clone())
                    .unwrap_or_else(|e| panic!("{}.{} rejected {}: {}", schema.name, def.name, input, e));
                assert!(node.get(def.name).is_some(), "{}.{} dropped {}", schema.name, def.name, input);

                let dict = node.to_dict();
                let back = Node::from_dict(schema, &dict)
                    .unwrap_or_else(|e| panic!("{}.{} output {:?} did not read back: {}", schema.name, def.name, dict, e));
                assert_eq!(back, node, "{}.{} with {}", schema.name, def.name, input);
            }
            full.set(def.name, samples(def.kind, 0)[0].clone()).unwrap();
        }

        let back = Node::from_dict(schema, &full.to_dict()).unwrap();
        assert_eq!(back, full, "{} with every slot set", schema.name);
        assert_eq!(Node::from_js_literal(schema, &full.to_js_literal(&RenderOptions::default())).unwrap(), full);
    }
}

#[test]
fn test_literal_render_reads_back() {
    let cloud = Node::from_js_literal(&WORDCLOUD_SERIES, &fixture("wordcloud.js")).unwrap();
    let text = cloud.to_js_literal(&RenderOptions::default());
    assert!(text.contains("pointFormatter: function () {"));
    assert_eq!(parse_literal(&text).unwrap(), Value::Object(cloud.to_dict()));
    assert_eq!(Node::from_js_literal(&WORDCLOUD_SERIES, &text).unwrap(), cloud);
}

#[test]
fn test_gradient_background_resolved() {
    let pane = Node::from_js_literal(&PANE, &fixture("pane.js")).unwrap();
    let backgrounds = pane.get("background").and_then(SlotValue::as_nodes).unwrap();
    let color = backgrounds[0].get("background_color").and_then(SlotValue::as_color).unwrap();
    match color {
        Color::Gradient(node) => assert!(std::ptr::eq(node.schema(), &GRADIENT)),
        other => panic!("Expected gradient, got {:?}", other),
    }
}

#[test]
fn test_polymorphic_color_dispatch() {
    let mut bg = Node::new(&PANE_BACKGROUND);

    bg.set("background_color", json!({"patternOptions": {"path": "M 0 0 L 5 5", "width": 5}})).unwrap();
    assert!(bg.get("background_color").and_then(SlotValue::as_color).is_some_and(Color::is_pattern));

    bg.set("background_color", "#999999").unwrap();
    assert_eq!(bg.get("background_color").and_then(SlotValue::as_str), Some("#999999"));

    for unset in [json!(""), json!({}), Value::Null] {
        bg.set("background_color", unset).unwrap();
        assert!(bg.get("background_color").is_none());
    }

    assert!(matches!(
        bg.set("background_color", json!({"foo": "bar"})),
        Err(OptionError::InvalidValue { .. })
    ));
}

#[test]
fn test_trim_idempotent_on_node_output() {
    let cloud = Node::from_js_literal(&WORDCLOUD_SERIES, &fixture("wordcloud.js")).unwrap();
    let once = chartopts::trim::trim(&Value::Object(cloud.to_untrimmed_dict()));
    assert_eq!(once, Value::Object(cloud.to_dict()));
    assert_eq!(chartopts::trim::trim(&once), once);
}

#[test]
fn test_literal_syntax_error_position() {
    match Node::from_js_literal(&PANE, &fixture("syntax_error.js")) {
        Err(OptionError::LiteralSyntax { line, column, .. }) => {
            assert_eq!(line, 4);
            assert_eq!(column, 5);
        }
        other => panic!("Expected LiteralSyntax, got {:?}", other),
    }
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn test_cli_json_output() {
    let out = run_chartopts(&["Pane", "--format", "json"], &fixture("pane.js")).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        json!({
            "background": [{
                "backgroundColor": {
                    "linearGradient": {"x1": 0, "y1": 0, "x2": 0, "y2": 1},
                    "stops": [[0, "#FFF"], [1, "#333"]]
                },
                "borderWidth": 0,
                "innerRadius": "60%",
                "outerRadius": "100%",
                "shape": "arc"
            }],
            "center": ["50%", "75%"],
            "endAngle": 90,
            "size": "110%",
            "startAngle": -90
        })
    );
}

#[test]
fn test_cli_literal_output_keeps_callbacks() {
    let out = run_chartopts(&["WordcloudSeries"], &fixture("wordcloud.js")).unwrap();
    assert!(out.contains("click: (e) => { console.log(e.point.name); }"));
    assert!(out.contains("labelrank: 1"));
    let reparsed = parse_literal(&out).unwrap();
    assert_eq!(reparsed["name"], json!("Occurrences"));
}

#[test]
fn test_cli_render_options() {
    let out = run_chartopts(
        &["PaneBackground", "--options", r#"{"quote": "double", "indent": 0}"#],
        "{shape: 'solid', innerRadius: 10}",
    )
    .unwrap();
    assert_eq!(out.trim(), r#"{ innerRadius: 10, shape: "solid" }"#);
}

#[test]
fn test_cli_untrimmed_lists_every_key() {
    let out = run_chartopts(&["AxisMarker", "--format", "json", "--untrimmed"], "{width: 2}").unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value, json!({"animation": null, "color": null, "width": 2}));
}

#[test]
fn test_cli_invalid_value_fails() {
    let err = run_chartopts(&["Pane"], &fixture("bad_shape.js")).unwrap_err();
    assert!(err.contains("PaneBackground.shape"), "stderr: {}", err);
    assert!(err.contains("hexagon"));
}

#[test]
fn test_cli_unknown_schema_fails() {
    let err = run_chartopts(&["Chart"], "{}").unwrap_err();
    assert!(err.contains("Unknown schema 'Chart'"));
}

#[test]
fn test_cli_syntax_error_reports_position() {
    let err = run_chartopts(&["Pane"], &fixture("syntax_error.js")).unwrap_err();
    assert!(err.contains("line 4, column 5"), "stderr: {}", err);
}

#[test]
fn test_render_options_format_default() {
    assert_eq!(RenderOptions::default().format, OutputFormat::Literal);
}
