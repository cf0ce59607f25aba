//! Strict YAML decoding and defaults merging.
//!
//! Responsibilities:
//! - Parse expanded text into a YAML document, applying `<<` merge keys.
//! - Deserialize a document into the target type, rejecting keys the target
//!   does not declare.
//! - Overlay a document onto a serialized defaults value.
//!
//! Invariants:
//! - Unknown keys are collected across the whole document and reported together.
//! - Merging recurses only through mappings; any other node in the document
//!   replaces the default node wholesale.
//! - Serialized defaults must decode back into the target before the merge.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::Value;

use super::error::DecodeError;

/// Decode `text` into a fresh `T`.
pub(crate) fn decode<T: DeserializeOwned>(text: &str) -> Result<T, DecodeError> {
    strict_from_value(parse_document(text)?)
}

/// Decode `text` over the fields already set in `defaults`.
///
/// `defaults` travels through its serialized form, so it must decode back into
/// `T` on its own. Fields marked `#[serde(skip)]` come back as their
/// `Default` value.
pub(crate) fn decode_with_defaults<T>(defaults: &T, text: &str) -> Result<T, DecodeError>
where
    T: Serialize + DeserializeOwned,
{
    let document = parse_document(text)?;
    let mut merged = serde_yaml::to_value(defaults).map_err(DecodeError::Defaults)?;
    check_round_trip::<T>(&merged)?;
    merge(&mut merged, document);
    strict_from_value(merged)
}

fn check_round_trip<T: DeserializeOwned>(defaults: &Value) -> Result<(), DecodeError> {
    match strict_from_value::<T>(defaults.clone()) {
        Ok(_) => Ok(()),
        Err(DecodeError::Yaml(source)) => Err(DecodeError::DefaultsRoundTrip(source)),
        Err(other) => Err(other),
    }
}

fn parse_document(text: &str) -> Result<Value, DecodeError> {
    let mut document: Value = serde_yaml::from_str(text).map_err(DecodeError::Yaml)?;
    if document.is_null() {
        return Err(DecodeError::EmptyDocument);
    }
    document.apply_merge().map_err(DecodeError::Yaml)?;
    Ok(document)
}

fn strict_from_value<T: DeserializeOwned>(document: Value) -> Result<T, DecodeError> {
    let mut unknown = Vec::new();
    let value = serde_ignored::deserialize(document, |path| unknown.push(path.to_string()))
        .map_err(DecodeError::Yaml)?;
    if !unknown.is_empty() {
        return Err(DecodeError::UnknownFields { paths: unknown });
    }
    Ok(value)
}

pub(crate) fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    struct Server {
        host: String,
        port: u16,
        tags: Vec<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    struct App {
        name: String,
        server: Server,
    }

    #[test]
    fn test_unknown_fields_are_reported_with_paths() {
        let err = decode::<App>("name: x\nextra: 1\nserver:\n  hots: bad\n").unwrap_err();
        match err {
            DecodeError::UnknownFields { paths } => {
                assert_eq!(paths, vec!["extra".to_string(), "server.hots".to_string()]);
            }
            other => panic!("expected UnknownFields, got {other:?}"),
        }
    }

    #[test]
    fn test_null_document_is_empty() {
        assert!(matches!(
            decode::<App>("~\n"),
            Err(DecodeError::EmptyDocument)
        ));
    }

    #[test]
    fn test_merge_keys_are_applied() {
        let text = "base: &base\n  host: h\n  port: 1\nserver:\n  <<: *base\n  port: 2\n";
        let value: Value = decode(text).unwrap();
        assert_eq!(value["server"]["host"], Value::from("h"));
        assert_eq!(value["server"]["port"], Value::from(2));
    }

    #[test]
    fn test_defaults_merge_is_deep() {
        let defaults = App {
            name: "default-name".to_string(),
            server: Server {
                host: "localhost".to_string(),
                port: 8080,
                tags: vec!["a".to_string(), "b".to_string()],
            },
        };
        let text = "server:\n  port: 9090\n  tags: [c]\n";
        let merged = decode_with_defaults(&defaults, text).unwrap();
        assert_eq!(
            merged,
            App {
                name: "default-name".to_string(),
                server: Server {
                    host: "localhost".to_string(),
                    port: 9090,
                    tags: vec!["c".to_string()],
                },
            }
        );
    }

    #[test]
    fn test_defaults_do_not_hide_unknown_source_keys() {
        let err = decode_with_defaults(&App::default(), "server:\n  bind: 0.0.0.0\n").unwrap_err();
        assert!(matches!(err, DecodeError::UnknownFields { .. }));
    }

    #[test]
    fn test_merge_replaces_non_mappings() {
        let mut base: Value = serde_yaml::from_str("a: [1, 2]\nb: {c: 1}\n").unwrap();
        merge(&mut base, serde_yaml::from_str("a: [3]\nb: 5\n").unwrap());
        let expected: Value = serde_yaml::from_str("a: [3]\nb: 5\n").unwrap();
        assert_eq!(base, expected);
    }
}
