// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::builtin::DefaultRenderer;
use crate::{RenderError, RenderOptions, Renderer, Value};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt::Write as _;

/// Encodes lists and maps as JSON.
///
/// Lists become arrays and maps become objects, in iteration order. By
/// default `/` and non-ASCII characters are escaped; see
/// [`RenderOptions::UNESCAPED_SLASHES`] and [`RenderOptions::UNESCAPED_UNICODE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionRenderer;

impl Renderer for CollectionRenderer {
    fn render(&self, value: &Value, options: RenderOptions) -> Result<String, RenderError> {
        let json = if options.contains(RenderOptions::PRETTY) {
            serde_json::to_string_pretty(&Json(value))?
        } else {
            serde_json::to_string(&Json(value))?
        };

        let json = if options.contains(RenderOptions::UNESCAPED_SLASHES) {
            json
        } else {
            // `/` only occurs inside string literals
            json.replace('/', "\\/")
        };

        if options.contains(RenderOptions::UNESCAPED_UNICODE) {
            Ok(json)
        } else {
            Ok(escape_non_ascii(&json))
        }
    }

    fn name(&self) -> &str {
        "collection"
    }
}

/// Order-preserving serde view of a value.
struct Json<'a>(&'a Value);

impl Serialize for Json<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&Json(item))?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, &Json(value))?;
                }
                map.end()
            }
            obj @ Value::Object(_) => serializer.serialize_str(&DefaultRenderer::render_value(obj)),
        }
    }
}

/// Replace non-ASCII characters with `\uXXXX` escapes (UTF-16 units).
fn escape_non_ascii(json: &str) -> String {
    if json.is_ascii() {
        return json.to_string();
    }
    let mut out = String::with_capacity(json.len() + 16);
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{:04x}", unit);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: &Value, options: RenderOptions) -> String {
        CollectionRenderer.render(value, options).unwrap()
    }

    #[test]
    fn test_list_and_map() {
        assert_eq!(render(&Value::list(["1", "2"]), RenderOptions::NONE), r#"["1","2"]"#);

        let map = Value::map([("b", "2"), ("a", "1")]);
        // insertion order, not sorted
        assert_eq!(render(&map, RenderOptions::NONE), r#"{"b":"2","a":"1"}"#);
    }

    #[test]
    fn test_slashes_escaped_by_default() {
        let value = Value::list(["rt/rosout"]);

        assert_eq!(render(&value, RenderOptions::NONE), r#"["rt\/rosout"]"#);
        assert_eq!(
            render(&value, RenderOptions::UNESCAPED_SLASHES),
            r#"["rt/rosout"]"#
        );
    }

    #[test]
    fn test_unicode_escaping() {
        let value = Value::list(["caf\u{e9}", "\u{1f600}"]);

        assert_eq!(
            render(&value, RenderOptions::NONE),
            r#"["caf\u00e9","\ud83d\ude00"]"#
        );
        assert_eq!(
            render(&value, RenderOptions::UNESCAPED_UNICODE),
            "[\"caf\u{e9}\",\"\u{1f600}\"]"
        );
    }

    #[test]
    fn test_pretty() {
        let out = render(&Value::map([("k", "v")]), RenderOptions::PRETTY);
        assert_eq!(out, "{\n  \"k\": \"v\"\n}");
    }

    #[test]
    fn test_raw_scalars_are_encoded() {
        let value = Value::list([Value::Int(1), Value::Null, Value::Bool(true)]);
        assert_eq!(render(&value, RenderOptions::NONE), "[1,null,true]");
    }

    #[test]
    fn test_output_is_valid_json() {
        let value = Value::map([("path", "a/b"), ("quote", "say \"hi\"")]);
        let out = render(&value, RenderOptions::NONE);

        let decoded: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(decoded["path"], "a/b");
        assert_eq!(decoded["quote"], "say \"hi\"");
    }
}
