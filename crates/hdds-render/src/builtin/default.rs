// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::{RenderError, RenderOptions, Renderer, Value};

/// Fallback renderer used when nothing else matches.
///
/// Objects use their string conversion, then a structural dump; every other
/// value is coerced. `Null` renders as an empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl DefaultRenderer {
    /// Render without going through the `Result` plumbing.
    pub fn render_value(value: &Value) -> String {
        match value {
            Value::Object(obj) => obj.display().unwrap_or_else(|| value.dump()),
            other => other.coerce(),
        }
    }
}

impl Renderer for DefaultRenderer {
    fn render(&self, value: &Value, _options: RenderOptions) -> Result<String, RenderError> {
        Ok(Self::render_value(value))
    }

    fn name(&self) -> &str {
        "default"
    }
}
