// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HDDS Value Rendering
//!
//! Turn arbitrary log field values into strings, with user-registered
//! renderers for primitive kinds, types and type hierarchies.
//!
//! # Features
//!
//! - **Primitive renderers**: one per kind (float, int, bool, array, null)
//! - **Type renderers**: matched against object lineage, concatenated in
//!   registration order (`"<Parent> - <Child>"`) unless an entry disables
//!   inheritance
//! - **Collections**: elements rendered bottom-up, then encoded (JSON)
//! - **Fallback**: string conversion, structural dump, coercion
//!
//! # Example
//!
//! ```rust,ignore
//! use hdds_render::{renderer_fn, RendererRegistry, Value};
//!
//! let registry = RendererRegistry::with_builtins();
//! registry.register("Parent", renderer_fn("parent", |_, _| Ok("P".into())));
//!
//! let line = registry.render(&Value::map([("a", 1), ("b", 2)]))?;
//! assert_eq!(line, r#"{"a":"1","b":"2"}"#);
//! ```

mod bootstrap;
pub mod builtin;
mod entry;
mod error;
mod kind;
mod registry;
mod renderer;
mod value;

pub use entry::{LogEntry, LogLevel, LOG_ENTRY_TYPE};
pub use error::RenderError;
pub use kind::Kind;
pub use registry::{IntoTarget, RendererRegistry, DEFAULT_MAX_DEPTH};
pub use renderer::{renderer_fn, FnRenderer, RenderOptions, Renderer, RendererEntry, Target};
pub use value::{Elements, ErrorValue, Object, TypeInfo, Value, ERROR_TYPE};

use serde::{Deserialize, Serialize};

/// Renderer registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Seed the built-in renderers.
    pub builtins: bool,
    /// Options used when the caller passes none.
    pub options: RenderOptions,
    /// Register the error renderer with inheritance disabled.
    pub error_disable_inheritance: bool,
    /// Maximum collection nesting.
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            builtins: true,
            options: RenderOptions::NONE,
            error_disable_inheritance: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Create a new builder.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

/// Builder for RenderConfig.
#[derive(Debug, Default)]
pub struct RenderConfigBuilder {
    builtins: Option<bool>,
    options: Option<RenderOptions>,
    error_disable_inheritance: Option<bool>,
    max_depth: Option<usize>,
}

impl RenderConfigBuilder {
    /// Enable or disable the built-in renderers.
    pub fn builtins(mut self, enabled: bool) -> Self {
        self.builtins = Some(enabled);
        self
    }

    /// Set default render options.
    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Let the error renderer combine with renderers of other error ancestors.
    pub fn error_inheritance(mut self, enabled: bool) -> Self {
        self.error_disable_inheritance = Some(!enabled);
        self
    }

    /// Set maximum collection nesting.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            builtins: self.builtins.unwrap_or(defaults.builtins),
            options: self.options.unwrap_or(defaults.options),
            error_disable_inheritance: self
                .error_disable_inheritance
                .unwrap_or(defaults.error_disable_inheritance),
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
        }
    }
}
