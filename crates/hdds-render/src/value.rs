// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Renderable values, host objects and their type lineage.

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::sync::Arc;

/// Static type identity of a host object.
///
/// `parents` lists direct base types and implemented interfaces; a type
/// "is a" key when the key names the type itself or any transitive parent.
///
/// ```rust,ignore
/// static SENSOR: TypeInfo = TypeInfo { name: "Sensor", parents: &[] };
/// static THERMO: TypeInfo = TypeInfo { name: "Thermometer", parents: &[&SENSOR] };
///
/// assert!(THERMO.is_a("Sensor"));
/// ```
#[derive(Debug)]
pub struct TypeInfo {
    /// Type key used for registration.
    pub name: &'static str,
    /// Direct ancestors.
    pub parents: &'static [&'static TypeInfo],
}

impl TypeInfo {
    /// Check whether this type equals or inherits from `key`.
    ///
    /// Each ancestor is visited once, so cyclic parent links terminate.
    pub fn is_a(&self, key: &str) -> bool {
        let mut seen: Vec<&TypeInfo> = Vec::new();
        let mut pending: Vec<&TypeInfo> = vec![self];
        while let Some(info) = pending.pop() {
            if seen.contains(&info) {
                continue;
            }
            if info.name == key {
                return true;
            }
            seen.push(info);
            pending.extend(info.parents.iter().copied());
        }
        false
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for TypeInfo {}

/// Root type of every error value.
pub static ERROR_TYPE: TypeInfo = TypeInfo {
    name: "Error",
    parents: &[],
};

/// A host object that can be rendered.
///
/// Only [`type_info`](Object::type_info) is required; the other hooks feed
/// the default renderer and the collection branch.
pub trait Object: fmt::Debug + Send + Sync {
    /// Runtime type of this object.
    fn type_info(&self) -> &'static TypeInfo;

    /// User-defined string conversion.
    fn display(&self) -> Option<String> {
        None
    }

    /// Named fields, used for structural dumps.
    fn fields(&self) -> Vec<(String, Value)> {
        Vec::new()
    }

    /// Elements of an iterable object, as a `List` or `Map`.
    ///
    /// Any other value means the object is not iterable.
    fn entries(&self) -> Option<Value> {
        None
    }
}

/// Elements of a collection value, see [`Value::elements`].
#[derive(Debug, Clone)]
pub enum Elements<'a> {
    /// Sequence elements.
    List(Cow<'a, [Value]>),
    /// Key/value pairs, in insertion order.
    Map(Cow<'a, [(String, Value)]>),
}

/// A runtime value handed to the renderer registry.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text.
    Str(String),
    /// Ordered sequence.
    List(Vec<Value>),
    /// Ordered key/value collection.
    Map(Vec<(String, Value)>),
    /// Host object.
    Object(Arc<dyn Object>),
}

impl Value {
    /// Wrap a host object.
    pub fn object(object: impl Object + 'static) -> Self {
        Self::Object(Arc::new(object))
    }

    /// Build an ordered map.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a list.
    pub fn list<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Capture an error and its source chain.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::object(ErrorValue::from_error(err))
    }

    /// Short type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Object(obj) => obj.type_info().name,
        }
    }

    /// Iterable view of a list, a map or an iterable object.
    ///
    /// Object entries that are neither a list nor a map yield `None`.
    pub fn elements(&self) -> Option<Elements<'_>> {
        match self {
            Self::List(items) => Some(Elements::List(Cow::Borrowed(items.as_slice()))),
            Self::Map(entries) => Some(Elements::Map(Cow::Borrowed(entries.as_slice()))),
            Self::Object(obj) => match obj.entries()? {
                Self::List(items) => Some(Elements::List(Cow::Owned(items))),
                Self::Map(entries) => Some(Elements::Map(Cow::Owned(entries))),
                _ => None,
            },
            _ => None,
        }
    }

    /// Coerce to a string. Never fails.
    ///
    /// Scalars use their plain form (`Null` is empty); everything else is dumped.
    pub fn coerce(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Str(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            _ => self.dump(),
        }
    }

    /// Structural dump: `[a, b]`, `{k: v}`, `Type { field: value }`.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.write_dump(&mut out);
        out
    }

    fn write_dump(&self, out: &mut String) {
        match self {
            Self::Null => out.push_str("null"),
            Self::Bool(b) => {
                let _ = write!(out, "{}", b);
            }
            Self::Int(i) => {
                let _ = write!(out, "{}", i);
            }
            Self::Float(f) => {
                let _ = write!(out, "{}", f);
            }
            Self::Str(s) => {
                let _ = write!(out, "{:?}", s);
            }
            Self::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write_dump(out);
                }
                out.push(']');
            }
            Self::Map(entries) => {
                out.push('{');
                write_fields(entries, out);
                out.push('}');
            }
            Self::Object(obj) => {
                let fields = obj.fields();
                out.push_str(obj.type_info().name);
                if fields.is_empty() {
                    out.push_str(" {}");
                } else {
                    out.push_str(" { ");
                    write_fields(&fields, out);
                    out.push_str(" }");
                }
            }
        }
    }
}

fn write_fields(fields: &[(String, Value)], out: &mut String) {
    for (i, (key, value)) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(key);
        out.push_str(": ");
        value.write_dump(out);
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Self::Int(i64::from(v))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}

impl From<Arc<dyn Object>> for Value {
    fn from(v: Arc<dyn Object>) -> Self {
        Self::Object(v)
    }
}

/// A captured error: message, source chain and error type.
#[derive(Debug, Clone)]
pub struct ErrorValue {
    type_info: &'static TypeInfo,
    message: String,
    causes: Vec<String>,
}

impl ErrorValue {
    /// Create an error value of type [`ERROR_TYPE`].
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            type_info: &ERROR_TYPE,
            message: message.into(),
            causes: Vec::new(),
        }
    }

    /// Capture an error's message and its `source()` chain.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Self {
            causes,
            ..Self::new(err.to_string())
        }
    }

    /// Declare a more specific error type (should have [`ERROR_TYPE`] in its lineage).
    pub fn with_type(mut self, type_info: &'static TypeInfo) -> Self {
        self.type_info = type_info;
        self
    }

    /// Append a cause.
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Messages of the source chain, outermost first.
    pub fn causes(&self) -> &[String] {
        &self.causes
    }
}

impl Object for ErrorValue {
    fn type_info(&self) -> &'static TypeInfo {
        self.type_info
    }

    fn display(&self) -> Option<String> {
        Some(self.message.clone())
    }

    fn fields(&self) -> Vec<(String, Value)> {
        vec![
            ("message".to_string(), Value::from(self.message.as_str())),
            ("causes".to_string(), Value::list(self.causes.iter().cloned())),
        ]
    }
}
