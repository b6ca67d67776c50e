// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Built-in renderers.
//!
//! - [`DefaultRenderer`] - terminal fallback, never fails
//! - [`CollectionRenderer`] - JSON encoding of rendered lists and maps
//! - [`ErrorRenderer`] - message and cause chain of error values
//! - [`LogEntryRenderer`] - log entries and other self-describing objects

mod collection;
mod default;
mod error;
mod log_entry;

pub use collection::CollectionRenderer;
pub use default::DefaultRenderer;
pub use error::ErrorRenderer;
pub use log_entry::LogEntryRenderer;
