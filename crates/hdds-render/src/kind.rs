// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Primitive kinds eligible for their own renderer.

use crate::Value;
use serde::{Deserialize, Serialize};

/// Primitive value category.
///
/// Strings deliberately have no kind: they always reach the default renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Floating point number.
    Float,
    /// Integer (also matches the legacy `long` name).
    Int,
    /// Boolean.
    Bool,
    /// List or map.
    Array,
    /// Absent value.
    Null,
}

impl Kind {
    /// All kinds, in dispatch order.
    pub const ALL: [Kind; 5] = [Kind::Float, Kind::Int, Kind::Bool, Kind::Array, Kind::Null];

    /// Get kind name as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Array => "array",
            Self::Null => "null",
        }
    }

    /// Parse kind from string (case-insensitive).
    ///
    /// Only exact kind names match, plus `long` for [`Kind::Int`]. Names such
    /// as `Integer` or `Boolean` are type keys, not kinds.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "float" => Some(Self::Float),
            "int" | "long" => Some(Self::Int),
            "bool" => Some(Self::Bool),
            "array" => Some(Self::Array),
            "null" => Some(Self::Null),
            _ => None,
        }
    }

    /// Kind of a value, if it has one.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Float(_) => Some(Self::Float),
            Value::Int(_) => Some(Self::Int),
            Value::Bool(_) => Some(Self::Bool),
            Value::List(_) | Value::Map(_) => Some(Self::Array),
            Value::Null => Some(Self::Null),
            Value::Str(_) | Value::Object(_) => None,
        }
    }

    /// Position in the dispatch order.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Float => 0,
            Self::Int => 1,
            Self::Bool => 2,
            Self::Array => 3,
            Self::Null => 4,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_case_insensitive() {
        assert_eq!(Kind::parse("Float"), Some(Kind::Float));
        assert_eq!(Kind::parse("BOOL"), Some(Kind::Bool));
        assert_eq!(Kind::parse("Int"), Some(Kind::Int));
        assert_eq!(Kind::parse("Array"), Some(Kind::Array));
        assert_eq!(Kind::parse("NULL"), Some(Kind::Null));
        assert_eq!(Kind::parse(" int "), None);
        assert_eq!(Kind::parse("Exception"), None);
        assert_eq!(Kind::parse("string"), None);
    }

    #[test]
    fn test_type_like_names_are_not_kinds() {
        assert_eq!(Kind::parse("Integer"), None);
        assert_eq!(Kind::parse("Double"), None);
        assert_eq!(Kind::parse("Boolean"), None);
    }

    #[test]
    fn test_long_is_int_alias() {
        assert_eq!(Kind::parse("long"), Some(Kind::Int));
        assert_eq!(Kind::parse("LONG"), Kind::parse("int"));
    }

    #[test]
    fn test_kind_of_values() {
        assert_eq!(Kind::of(&Value::Float(1.5)), Some(Kind::Float));
        assert_eq!(Kind::of(&Value::Int(3)), Some(Kind::Int));
        assert_eq!(Kind::of(&Value::Bool(false)), Some(Kind::Bool));
        assert_eq!(Kind::of(&Value::List(Vec::new())), Some(Kind::Array));
        assert_eq!(Kind::of(&Value::Null), Some(Kind::Null));
        assert_eq!(Kind::of(&Value::from("text")), None);
    }

    #[test]
    fn test_dispatch_order() {
        for (i, kind) in Kind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
