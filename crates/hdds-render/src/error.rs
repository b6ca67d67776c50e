// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Render errors.

use thiserror::Error;

/// Errors produced while rendering a value.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Raised by a renderer implementation.
    #[error("{0}")]
    Failed(String),

    /// A renderer failed; wraps its error with the renderer name.
    #[error("renderer `{renderer}` failed: {source}")]
    Renderer {
        renderer: String,
        #[source]
        source: Box<RenderError>,
    },

    /// Collection nesting exceeded the configured bound.
    #[error("collection nesting exceeds {limit} levels")]
    DepthExceeded { limit: usize },

    /// Collection encoding failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderError {
    /// Create a renderer failure with a message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Wrap an error raised by the named renderer.
    pub(crate) fn in_renderer(renderer: &str, source: RenderError) -> Self {
        Self::Renderer {
            renderer: renderer.to_string(),
            source: Box::new(source),
        }
    }

    /// The original failure message, without renderer context.
    pub fn message(&self) -> String {
        match self {
            Self::Renderer { source, .. } => source.message(),
            other => other.to_string(),
        }
    }

    /// Name of the renderer that failed, if the error went through dispatch.
    pub fn renderer(&self) -> Option<&str> {
        match self {
            Self::Renderer { renderer, .. } => Some(renderer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_unwraps_renderer_context() {
        let err = RenderError::in_renderer("custom", RenderError::failed("boom"));

        assert_eq!(err.message(), "boom");
        assert_eq!(err.renderer(), Some("custom"));
        assert_eq!(err.to_string(), "renderer `custom` failed: boom");
    }

    #[test]
    fn test_depth_exceeded_display() {
        let err = RenderError::DepthExceeded { limit: 4 };
        assert_eq!(err.message(), "collection nesting exceeds 4 levels");
        assert_eq!(err.renderer(), None);
    }
}
