#![cfg(feature = "json")]

use std::path::PathBuf;

use propdoc::generators::json::{render_json, render_json_map};
use propdoc::{DocgenOptions, Docgen, DocsGenerator, GeneratedDoc, OutputVariant};
use proptest::prelude::*;

const WIDGET: &str = r#"
    interface Props {
        /** How many */
        foo?: number;
        bar: 'a' | 'b';
        label?: string;
    }

    /** Widget docs */
    export class Widget extends React.Component<Props> {
        static defaultProps = { foo: 42, label: "hello" };
    }
"#;

fn render(options: DocgenOptions, source: &str) -> serde_json::Value {
    let doc = DocsGenerator::new(options)
        .generate_from_source("Widget.tsx", source)
        .expect("generation should succeed");
    let json = render_json(&doc.docgen, false).expect("should serialize");
    serde_json::from_str(&json).expect("valid json")
}

#[test]
fn renders_named_document() {
    let value = render(DocgenOptions::default(), WIDGET);

    assert_eq!(value["displayName"], "Widget");
    assert_eq!(value["description"], "Widget docs");
    assert_eq!(value["props"]["foo"]["description"], "How many");
    assert_eq!(value["props"]["foo"]["type"]["name"], "number");
    assert_eq!(value["props"]["foo"]["required"], false);
    assert_eq!(
        value["props"]["foo"]["defaultValue"],
        serde_json::json!({ "value": "42", "computed": false })
    );
    assert_eq!(value["props"]["bar"]["required"], true);
    assert!(value["props"]["bar"]["defaultValue"].is_null());
    assert!(value["props"]["bar"]["type"].get("value").is_none());
    assert_eq!(
        value["props"]["label"]["defaultValue"]["value"],
        "\u{201c}hello\u{201d}"
    );
}

#[test]
fn classic_document_has_no_display_name() {
    let value = render(
        DocgenOptions {
            output_variant: OutputVariant::Classic,
            ..DocgenOptions::default()
        },
        WIDGET,
    );
    assert!(value.get("displayName").is_none());
    assert_eq!(value["props"]["foo"]["type"]["name"], "number");
}

#[test]
fn value_sets_render_as_literal_entries() {
    let value = render(
        DocgenOptions {
            include_value_sets: true,
            ..DocgenOptions::default()
        },
        WIDGET,
    );
    assert_eq!(
        value["props"]["bar"]["type"]["value"],
        serde_json::json!([
            { "value": "'a'", "computed": false },
            { "value": "'b'", "computed": false }
        ])
    );
}

#[test]
fn nothing_found_shapes() {
    assert_eq!(render_json(&Docgen::Absent, false).unwrap(), "null");
    assert_eq!(render_json(&Docgen::Empty, false).unwrap(), "{}");
}

#[test]
fn renders_path_keyed_map() {
    let generator = DocsGenerator::default();
    let widget = generator
        .generate_from_source("src/Widget.tsx", WIDGET)
        .expect("widget");
    let empty = GeneratedDoc {
        path: PathBuf::from("src/util.ts"),
        docgen: Docgen::Absent,
        diagnostics: Vec::new(),
    };

    let json = render_json_map(&[widget, empty], true).expect("should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["src/Widget.tsx"]["displayName"], "Widget");
    assert!(value["src/util.ts"].is_null());

    let widget_at = json.find("src/Widget.tsx").expect("widget key");
    let util_at = json.find("src/util.ts").expect("util key");
    assert!(widget_at < util_at);
}

#[test]
fn rendering_is_byte_identical_across_runs() {
    let generator = DocsGenerator::default();
    let first = generator.generate_from_source("Widget.tsx", WIDGET).unwrap();
    let second = generator.generate_from_source("Widget.tsx", WIDGET).unwrap();
    assert_eq!(
        render_json(&first.docgen, true).unwrap(),
        render_json(&second.docgen, true).unwrap()
    );
}

proptest! {
    #[test]
    fn generated_props_render_stably(
        names in proptest::collection::btree_set("prop_[a-zA-Z0-9]{0,8}", 1..6),
        optional in proptest::collection::vec(any::<bool>(), 6),
    ) {
        let members: String = names
            .iter()
            .zip(optional.iter())
            .map(|(name, optional)| {
                format!("    {name}{}: number;\n", if *optional { "?" } else { "" })
            })
            .collect();
        let source = format!(
            "interface Props {{\n{members}}}\nexport class Gen extends React.Component<Props> {{}}\n"
        );

        let generator = DocsGenerator::default();
        let first = generator.generate_from_source("Gen.tsx", &source).unwrap();
        let second = generator.generate_from_source("Gen.tsx", &source).unwrap();
        let first_json = render_json(&first.docgen, false).unwrap();
        prop_assert_eq!(&first_json, &render_json(&second.docgen, false).unwrap());

        let document = first.docgen.document().unwrap();
        let keys: Vec<&String> = document.props.keys().collect();
        let expected: Vec<&String> = names.iter().collect();
        prop_assert_eq!(keys, expected);
        for (name, optional) in names.iter().zip(optional.iter()) {
            prop_assert_eq!(document.props[name].required, !optional);
        }
    }
}
