// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry factory seeded with the built-in renderers.

use crate::builtin::{CollectionRenderer, ErrorRenderer, LogEntryRenderer};
use crate::entry::LOG_ENTRY_TYPE;
use crate::value::ERROR_TYPE;
use crate::{Kind, RenderConfig, RendererRegistry};
use std::sync::Arc;
use tracing::debug;

impl RendererRegistry {
    /// Create a registry from the default [`RenderConfig`].
    pub fn with_builtins() -> Self {
        Self::from_config(&RenderConfig::default())
    }

    /// Create a registry from a configuration.
    ///
    /// With `builtins` enabled the registry starts with:
    ///
    /// | Target     | Renderer              | Inheritance disabled          |
    /// |------------|-----------------------|-------------------------------|
    /// | `array`    | [`CollectionRenderer`]| -                             |
    /// | `Error`    | [`ErrorRenderer`]     | `error_disable_inheritance`   |
    /// | `LogEntry` | [`LogEntryRenderer`]  | yes                           |
    pub fn from_config(config: &RenderConfig) -> Self {
        let registry = Self::new()
            .with_options(config.options)
            .with_max_depth(config.max_depth);

        if config.builtins {
            registry.register(Kind::Array, Arc::new(CollectionRenderer));
            registry.register_with(
                &ERROR_TYPE,
                Arc::new(ErrorRenderer),
                config.error_disable_inheritance,
            );
            registry.register_with(&LOG_ENTRY_TYPE, Arc::new(LogEntryRenderer), true);
            debug!(entries = registry.entries().len(), "seeded built-in renderers");
        }

        registry
    }
}
