// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Renderer trait, options and registry entries.

use crate::{Kind, RenderError, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Converts a value into a string.
///
/// Renderers must not have side effects on the value and either return a
/// string or a [`RenderError`]; they are invoked by the registry and never
/// called recursively on nested collection elements (those arrive already
/// rendered).
pub trait Renderer: Send + Sync {
    /// Render a value.
    fn render(&self, value: &Value, options: RenderOptions) -> Result<String, RenderError>;

    /// Renderer name, used in logs and error context.
    fn name(&self) -> &str {
        "anonymous"
    }
}

/// Formatting flags passed through to the renderer untouched.
///
/// Bits not defined here are preserved for custom renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderOptions(u32);

impl RenderOptions {
    /// No flags.
    pub const NONE: Self = Self(0);
    /// Do not escape `/` in collection output.
    pub const UNESCAPED_SLASHES: Self = Self(1 << 0);
    /// Do not escape non-ASCII characters in collection output.
    pub const UNESCAPED_UNICODE: Self = Self(1 << 1);
    /// Pretty-print collection output.
    pub const PRETTY: Self = Self(1 << 2);

    /// Create options from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Check whether all flags in `other` are set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for RenderOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for RenderOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A registered renderer and its inheritance flag.
#[derive(Clone)]
pub struct RendererEntry {
    /// The renderer.
    pub renderer: Arc<dyn Renderer>,
    /// When set, a type match owns the output and stops the hierarchy walk.
    pub disable_inheritance: bool,
}

impl RendererEntry {
    /// Create an entry that takes part in inheritance concatenation.
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self {
            renderer,
            disable_inheritance: false,
        }
    }

    /// Create an entry with an explicit inheritance flag.
    pub fn with_inheritance(renderer: Arc<dyn Renderer>, disable_inheritance: bool) -> Self {
        Self {
            renderer,
            disable_inheritance,
        }
    }

    /// Name of the wrapped renderer.
    pub fn name(&self) -> &str {
        self.renderer.name()
    }

    /// Invoke the renderer, wrapping its failure with the renderer name.
    pub(crate) fn render(&self, value: &Value, options: RenderOptions) -> Result<String, RenderError> {
        self.renderer
            .render(value, options)
            .map_err(|e| RenderError::in_renderer(self.name(), e))
    }
}

impl fmt::Debug for RendererEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererEntry")
            .field("renderer", &self.name())
            .field("disable_inheritance", &self.disable_inheritance)
            .finish()
    }
}

/// What a renderer is registered for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// A primitive kind.
    Kind(Kind),
    /// A type key, matched against object lineage.
    Type(String),
}

impl Target {
    /// Parse a type name; kind names (case-insensitive) become [`Target::Kind`].
    ///
    /// Other names are kept verbatim. Returns `None` for empty names.
    pub fn parse(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        Some(match Kind::parse(name) {
            Some(kind) => Self::Kind(kind),
            None => Self::Type(name.to_string()),
        })
    }

    /// Runtime type of a sample value.
    ///
    /// Strings have neither a kind nor a type and yield `None`.
    pub fn of(sample: &Value) -> Option<Self> {
        match sample {
            Value::Object(obj) => Some(Self::Type(obj.type_info().name.to_string())),
            other => Kind::of(other).map(Self::Kind),
        }
    }
}

impl From<Kind> for Target {
    fn from(kind: Kind) -> Self {
        Self::Kind(kind)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "{}", kind),
            Self::Type(name) => write!(f, "{}", name),
        }
    }
}

/// Renderer backed by a closure.
pub struct FnRenderer<F> {
    name: String,
    func: F,
}

impl<F> Renderer for FnRenderer<F>
where
    F: Fn(&Value, RenderOptions) -> Result<String, RenderError> + Send + Sync,
{
    fn render(&self, value: &Value, options: RenderOptions) -> Result<String, RenderError> {
        (self.func)(value, options)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Create a named renderer from a closure.
pub fn renderer_fn<F>(name: impl Into<String>, func: F) -> Arc<dyn Renderer>
where
    F: Fn(&Value, RenderOptions) -> Result<String, RenderError> + Send + Sync + 'static,
{
    Arc::new(FnRenderer {
        name: name.into(),
        func,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ErrorValue, TypeInfo};

    #[test]
    fn test_options_bits() {
        let opts = RenderOptions::UNESCAPED_SLASHES | RenderOptions::PRETTY;

        assert!(opts.contains(RenderOptions::UNESCAPED_SLASHES));
        assert!(opts.contains(RenderOptions::PRETTY));
        assert!(!opts.contains(RenderOptions::UNESCAPED_UNICODE));
        assert_eq!(RenderOptions::from_bits(0x100).bits(), 0x100);
        assert_eq!(RenderOptions::default(), RenderOptions::NONE);
    }

    #[test]
    fn test_target_parse_routes_kinds() {
        assert_eq!(Target::parse("Bool"), Some(Target::Kind(Kind::Bool)));
        assert_eq!(Target::parse("LONG"), Some(Target::Kind(Kind::Int)));
        assert_eq!(Target::parse("Integer"), Some(Target::Type("Integer".into())));
        assert_eq!(Target::parse(""), None);
    }

    #[test]
    fn test_target_parse_keeps_names_verbatim() {
        assert_eq!(
            Target::parse(" Exception "),
            Some(Target::Type(" Exception ".into()))
        );
        assert_eq!(Target::parse(" bool"), Some(Target::Type(" bool".into())));
    }

    #[test]
    fn test_target_of_sample() {
        static CUSTOM: TypeInfo = TypeInfo {
            name: "CustomError",
            parents: &[&crate::ERROR_TYPE],
        };
        let err = Value::object(ErrorValue::new("x").with_type(&CUSTOM));

        assert_eq!(Target::of(&err), Some(Target::Type("CustomError".into())));
        assert_eq!(Target::of(&Value::Float(0.1)), Some(Target::Kind(Kind::Float)));
        assert_eq!(Target::of(&Value::list([1])), Some(Target::Kind(Kind::Array)));
        assert_eq!(Target::of(&Value::from("text")), None);
    }

    #[test]
    fn test_entry_wraps_failures() {
        let entry = RendererEntry::new(renderer_fn("broken", |_, _| {
            Err(RenderError::failed("cannot render"))
        }));

        let err = entry.render(&Value::Null, RenderOptions::NONE).unwrap_err();
        assert_eq!(err.renderer(), Some("broken"));
        assert_eq!(err.message(), "cannot render");
    }

    #[test]
    fn test_fn_renderer_receives_options() {
        let r = renderer_fn("bits", |_, opts| Ok(opts.bits().to_string()));
        let out = r.render(&Value::Null, RenderOptions::from_bits(42)).unwrap();
        assert_eq!(out, "42");
        assert_eq!(r.name(), "bits");
    }
}
