// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::{RenderError, RenderOptions, Renderer, Value};

/// Renders log entries, or any object, through their own string conversion.
///
/// Objects without one are dumped field by field. Non-objects are coerced.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEntryRenderer;

impl Renderer for LogEntryRenderer {
    fn render(&self, value: &Value, _options: RenderOptions) -> Result<String, RenderError> {
        Ok(match value {
            Value::Object(obj) => obj.display().unwrap_or_else(|| value.dump()),
            other => other.coerce(),
        })
    }

    fn name(&self) -> &str {
        "log-entry"
    }
}
