use deep_builder::{ParseErrorKind, builder_for, parse_base, parse_partial, parse_value};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Server {
    host: String,
    port: u16,
    tls: Tls,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Tls {
    enabled: bool,
    ciphers: Vec<String>,
}

const DEFAULTS: &str = r#"
host: localhost
port: 8080
tls:
  enabled: false
  ciphers: [aes128, aes256]
"#;

#[test]
fn yaml_defaults_and_overrides_build() {
    let base: Server = parse_base(DEFAULTS).expect("defaults should parse");
    let builder = builder_for(base);

    let overrides = parse_partial::<Server>(
        r#"
tls:
  enabled: true
"#,
    )
    .expect("override should parse");

    let server = builder.build_owned(Some(&overrides)).expect("build should succeed");
    assert_eq!(server.host, "localhost");
    assert!(server.tls.enabled);
    assert_eq!(server.tls.ciphers, vec!["aes128", "aes256"]);
}

#[test]
fn json_text_is_accepted() {
    let value = parse_value(r#"{"a": {"b": [1, 2]}}"#).expect("json is yaml");
    assert_eq!(value, json!({"a": {"b": [1, 2]}}));
}

#[test]
fn empty_input_is_a_syntax_error() {
    let err = parse_value("   \n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Syntax);
}

#[test]
fn override_root_must_be_mapping() {
    let err = parse_partial::<Server>("- a\n- b\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TypeMismatch);
}

#[test]
fn base_of_wrong_shape_is_a_type_mismatch() {
    let err = parse_base::<Server>("host: localhost\n").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TypeMismatch);
    assert!(err.message.contains("port"), "got: {}", err.message);
}
