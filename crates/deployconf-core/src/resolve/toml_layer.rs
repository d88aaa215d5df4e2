//! TOML layer parsing.
//!
//! ```toml
//! locked = ["deployment.proxy.type"]
//!
//! [deployment.proxy]
//! type = 1
//! http.host = "proxy.corp"
//!
//! # Keys that are both a value and a prefix need quoting
//! [deployment]
//! "log" = true
//! "log.file" = true
//! ```

use toml::{Table, Value};

use super::errors::LayerError;

/// Top-level key holding the list of locked setting names.
const LOCKED_KEY: &str = "locked";

#[derive(Debug)]
pub(crate) struct ParsedToml {
    pub entries: Vec<(String, String)>,
    pub locked: Vec<String>,
}

pub(crate) fn parse(origin: &str, text: &str) -> Result<ParsedToml, LayerError> {
    let table: Table = text.parse().map_err(|e: toml::de::Error| LayerError::InvalidToml {
        origin: origin.to_string(),
        message: e.message().to_string(),
    })?;

    let mut parsed = ParsedToml {
        entries: Vec::new(),
        locked: Vec::new(),
    };

    for (key, value) in &table {
        if key == LOCKED_KEY {
            parsed.locked = locked_list(origin, value)?;
            continue;
        }
        flatten(origin, key, value, &mut parsed.entries)?;
    }

    Ok(parsed)
}

fn flatten(
    origin: &str,
    key: &str,
    value: &Value,
    out: &mut Vec<(String, String)>,
) -> Result<(), LayerError> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Table(table) => {
            for (child, child_value) in table {
                flatten(origin, &format!("{}.{}", key, child), child_value, out)?;
            }
            return Ok(());
        }
        Value::Array(_) => return Err(unsupported(origin, key, "array")),
        Value::Datetime(_) => return Err(unsupported(origin, key, "datetime")),
    };

    out.push((key.to_string(), text));
    Ok(())
}

fn locked_list(origin: &str, value: &Value) -> Result<Vec<String>, LayerError> {
    let Value::Array(items) = value else {
        return Err(unsupported(origin, LOCKED_KEY, value.type_str()));
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(unsupported(origin, LOCKED_KEY, other.type_str())),
        })
        .collect()
}

fn unsupported(origin: &str, key: &str, kind: &'static str) -> LayerError {
    LayerError::UnsupportedValue {
        origin: origin.to_string(),
        key: key.to_string(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(text: &str) -> Vec<(String, String)> {
        let mut entries = parse("test", text).unwrap().entries;
        entries.sort();
        entries
    }

    #[test]
    fn test_nested_tables_flatten() {
        let text = r#"
[deployment.proxy]
type = 1
same = false
http.host = "proxy.corp"
"#;
        assert_eq!(
            entries(text),
            vec![
                ("deployment.proxy.http.host".to_string(), "proxy.corp".to_string()),
                ("deployment.proxy.same".to_string(), "false".to_string()),
                ("deployment.proxy.type".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_quoted_dotted_keys() {
        let text = r#"
"deployment.log" = true
[deployment]
"log.file" = true
"#;
        assert_eq!(
            entries(text),
            vec![
                ("deployment.log".to_string(), "true".to_string()),
                ("deployment.log.file".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_locked_list() {
        let parsed = parse("test", "locked = [\"deployment.proxy.type\"]\n").unwrap();
        assert_eq!(parsed.locked, vec!["deployment.proxy.type".to_string()]);
        assert!(parsed.entries.is_empty());
    }

    #[test]
    fn test_locked_must_be_string_array() {
        let err = parse("test", "locked = \"deployment.proxy.type\"\n").unwrap_err();
        assert!(matches!(err, LayerError::UnsupportedValue { kind: "string", .. }));

        let err = parse("test", "locked = [1]\n").unwrap_err();
        assert!(matches!(err, LayerError::UnsupportedValue { kind: "integer", .. }));
    }

    #[test]
    fn test_arrays_are_rejected() {
        let err = parse("test", "[deployment]\ncache = [1, 2]\n").unwrap_err();
        assert!(matches!(
            err,
            LayerError::UnsupportedValue { ref key, kind: "array", .. } if key == "deployment.cache"
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse("user.toml", "invalid toml [[[").unwrap_err();
        assert!(matches!(err, LayerError::InvalidToml { ref origin, .. } if origin == "user.toml"));
    }
}
