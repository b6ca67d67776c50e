// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use crate::builtin::DefaultRenderer;
use crate::{RenderError, RenderOptions, Renderer, Value};

/// Renders error values as `message: cause: cause`.
///
/// Reads the `message` and `causes` fields of the object (see
/// [`ErrorValue`](crate::ErrorValue)); objects without a `message` field fall
/// back to the default renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorRenderer;

impl Renderer for ErrorRenderer {
    fn render(&self, value: &Value, _options: RenderOptions) -> Result<String, RenderError> {
        let Value::Object(obj) = value else {
            return Ok(DefaultRenderer::render_value(value));
        };

        let mut message = None;
        let mut causes = Vec::new();
        for (name, field) in obj.fields() {
            match (name.as_str(), field) {
                ("message", Value::Str(text)) => message = Some(text),
                ("causes", Value::List(items)) => {
                    causes = items.iter().map(Value::coerce).collect();
                }
                _ => {}
            }
        }

        let Some(mut out) = message else {
            return Ok(DefaultRenderer::render_value(value));
        };
        for cause in causes {
            out.push_str(": ");
            out.push_str(&cause);
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        "error"
    }
}
