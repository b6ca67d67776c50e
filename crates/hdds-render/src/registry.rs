// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Renderer registry and dispatch.
//!
//! Three tables drive [`RendererRegistry::render`]:
//!
//! - **kinds**: one renderer per primitive [`Kind`];
//! - **types**: renderers keyed by type name, in registration order;
//! - **default**: the fallback renderer, always present.
//!
//! Dispatch order: collections (elements rendered first), primitive kinds,
//! type hierarchy, default.
//!
//! # Concurrency
//!
//! Tables are an immutable snapshot behind an `ArcSwap`. A render call loads
//! one snapshot and uses it for the whole value, nested elements included;
//! registrations publish a new snapshot (copy-on-write).

use crate::builtin::DefaultRenderer;
use crate::value::{Elements, TypeInfo};
use crate::{Kind, RenderError, RenderOptions, Renderer, RendererEntry, Target, Value};
use arc_swap::ArcSwap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Default bound on collection nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Separator between outputs of matching ancestor renderers.
const INHERITANCE_SEPARATOR: &str = " - ";

/// Conversion into a registration target.
///
/// Implemented for type names (`&str`, `String`), kinds, targets, static
/// type infos and sample values. `None` means the input names nothing
/// renderable; such registrations are ignored.
pub trait IntoTarget {
    /// Resolve the target.
    fn into_target(self) -> Option<Target>;
}

impl IntoTarget for Target {
    fn into_target(self) -> Option<Target> {
        Some(self)
    }
}

impl IntoTarget for Kind {
    fn into_target(self) -> Option<Target> {
        Some(Target::Kind(self))
    }
}

impl IntoTarget for &str {
    fn into_target(self) -> Option<Target> {
        Target::parse(self)
    }
}

impl IntoTarget for String {
    fn into_target(self) -> Option<Target> {
        Target::parse(&self)
    }
}

impl IntoTarget for &String {
    fn into_target(self) -> Option<Target> {
        Target::parse(self)
    }
}

impl IntoTarget for &'static TypeInfo {
    fn into_target(self) -> Option<Target> {
        Some(Target::Type(self.name.to_string()))
    }
}

impl IntoTarget for &Value {
    fn into_target(self) -> Option<Target> {
        Target::of(self)
    }
}

#[derive(Clone)]
struct Tables {
    kinds: [Option<RendererEntry>; 5],
    types: Vec<(String, RendererEntry)>,
    default: Arc<dyn Renderer>,
}

impl Tables {
    fn new() -> Self {
        Self {
            kinds: Default::default(),
            types: Vec::new(),
            default: Arc::new(DefaultRenderer),
        }
    }

    fn kind(&self, kind: Kind) -> Option<&RendererEntry> {
        self.kinds[kind.index()].as_ref()
    }

    fn get(&self, target: &Target) -> Option<&RendererEntry> {
        match target {
            Target::Kind(kind) => self.kind(*kind),
            Target::Type(name) => self
                .types
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, entry)| entry),
        }
    }

    /// Insert or overwrite; an overwritten type keeps its position.
    fn insert(&mut self, target: Target, entry: RendererEntry) {
        match target {
            Target::Kind(kind) => self.kinds[kind.index()] = Some(entry),
            Target::Type(name) => match self.types.iter_mut().find(|(key, _)| *key == name) {
                Some(slot) => slot.1 = entry,
                None => self.types.push((name, entry)),
            },
        }
    }

    fn remove(&mut self, target: &Target) -> bool {
        match target {
            Target::Kind(kind) => self.kinds[kind.index()].take().is_some(),
            Target::Type(name) => {
                let before = self.types.len();
                self.types.retain(|(key, _)| key != name);
                self.types.len() != before
            }
        }
    }
}

/// Registry of renderers and the dispatch engine.
///
/// Create one per logging subsystem and share it with `Arc`; all operations
/// take `&self`.
///
/// ```rust,ignore
/// use hdds_render::{renderer_fn, Kind, RendererRegistry, Value};
///
/// let registry = RendererRegistry::with_builtins();
/// registry.register(Kind::Bool, renderer_fn("yes-no", |v, _| {
///     Ok(if v == &Value::Bool(true) { "yes" } else { "no" }.into())
/// }));
///
/// assert_eq!(registry.render(&Value::Bool(true))?, "yes");
/// ```
pub struct RendererRegistry {
    tables: ArcSwap<Tables>,
    options: RenderOptions,
    max_depth: usize,
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererRegistry {
    /// Create a registry with empty tables and the built-in default renderer.
    pub fn new() -> Self {
        Self {
            tables: ArcSwap::from_pointee(Tables::new()),
            options: RenderOptions::NONE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the options used by [`render`](Self::render).
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the collection nesting bound.
    ///
    /// Lists, maps and iterable objects each count as one level.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Options used by [`render`](Self::render).
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Collection nesting bound.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    // ===================================================================
    // Registration
    // ===================================================================

    /// Register a renderer that takes part in inheritance concatenation.
    pub fn register(&self, target: impl IntoTarget, renderer: Arc<dyn Renderer>) {
        self.register_with(target, renderer, false);
    }

    /// Register a renderer.
    ///
    /// Type names matching a kind (case-insensitive) go to the kind table.
    /// Registering again for the same target replaces the entry. Targets that
    /// resolve to nothing (empty names, string samples) are ignored.
    pub fn register_with(
        &self,
        target: impl IntoTarget,
        renderer: Arc<dyn Renderer>,
        disable_inheritance: bool,
    ) {
        let Some(target) = target.into_target() else {
            warn!(
                renderer = renderer.name(),
                "ignoring renderer registration without a valid target"
            );
            return;
        };
        self.insert(
            target,
            RendererEntry::with_inheritance(renderer, disable_inheritance),
        );
    }

    /// Register a renderer for the runtime type of `sample`.
    pub fn register_for(
        &self,
        sample: &Value,
        renderer: Arc<dyn Renderer>,
        disable_inheritance: bool,
    ) {
        self.register_with(sample, renderer, disable_inheritance);
    }

    /// Register an entry for a primitive kind.
    pub fn register_primitive(&self, kind: Kind, entry: RendererEntry) {
        self.insert(Target::Kind(kind), entry);
    }

    fn insert(&self, target: Target, entry: RendererEntry) {
        debug!(
            %target,
            renderer = entry.name(),
            disable_inheritance = entry.disable_inheritance,
            "registering renderer"
        );
        self.tables.rcu(|tables| {
            let mut tables = Tables::clone(tables);
            tables.insert(target.clone(), entry.clone());
            tables
        });
    }

    /// Remove the renderer for a target. Returns `false` if none was registered.
    pub fn unregister(&self, target: impl IntoTarget) -> bool {
        let Some(target) = target.into_target() else {
            return false;
        };
        let mut removed = false;
        self.tables.rcu(|tables| {
            let mut tables = Tables::clone(tables);
            removed = tables.remove(&target);
            tables
        });
        if removed {
            debug!(%target, "unregistered renderer");
        }
        removed
    }

    /// Look up the entry registered for a target.
    pub fn get(&self, target: impl IntoTarget) -> Option<RendererEntry> {
        let target = target.into_target()?;
        self.tables.load().get(&target).cloned()
    }

    /// All registered entries: kinds in dispatch order, then types in
    /// registration order.
    pub fn entries(&self) -> Vec<(Target, RendererEntry)> {
        let tables = self.tables.load();
        let kinds = Kind::ALL
            .iter()
            .filter_map(|kind| tables.kind(*kind).map(|e| (Target::Kind(*kind), e.clone())));
        let types = tables
            .types
            .iter()
            .map(|(name, e)| (Target::Type(name.clone()), e.clone()));
        kinds.chain(types).collect()
    }

    /// Replace the default renderer.
    pub fn set_default_renderer(&self, renderer: Arc<dyn Renderer>) {
        debug!(renderer = renderer.name(), "setting default renderer");
        self.tables.rcu(|tables| Tables {
            default: Arc::clone(&renderer),
            ..Tables::clone(tables)
        });
    }

    /// Restore the built-in default renderer.
    pub fn reset_default_renderer(&self) {
        self.set_default_renderer(Arc::new(DefaultRenderer));
    }

    /// Current default renderer.
    pub fn default_renderer(&self) -> Arc<dyn Renderer> {
        Arc::clone(&self.tables.load().default)
    }

    // ===================================================================
    // Dispatch
    // ===================================================================

    /// Render a value with the registry's options.
    pub fn render(&self, value: &Value) -> Result<String, RenderError> {
        self.render_with(value, self.options)
    }

    /// Render a value with explicit options.
    ///
    /// Renderer failures propagate, wrapped with the renderer name; nothing
    /// is substituted for a failing renderer.
    pub fn render_with(&self, value: &Value, options: RenderOptions) -> Result<String, RenderError> {
        let tables = self.tables.load_full();
        self.dispatch(&tables, value, options, 0)
    }

    fn dispatch(
        &self,
        tables: &Tables,
        value: &Value,
        options: RenderOptions,
        depth: usize,
    ) -> Result<String, RenderError> {
        // 1. Collections: elements first, then the collection itself.
        if let Some(elements) = value.elements() {
            let collection = match elements {
                Elements::List(items) => self.render_list(tables, &items, options, depth)?,
                Elements::Map(entries) => self.render_map(tables, &entries, options, depth)?,
            };
            return match tables.kind(Kind::Array) {
                Some(entry) => {
                    trace!(renderer = entry.name(), "rendering collection");
                    entry.render(&collection, options)
                }
                None => self.render_default(tables, &collection, options),
            };
        }

        // 2. Primitive kinds.
        if let Some(kind) = Kind::of(value) {
            if let Some(entry) = tables.kind(kind) {
                trace!(%kind, renderer = entry.name(), "rendering primitive");
                return entry.render(value, options);
            }
        }

        // 3. Type hierarchy.
        if let Value::Object(obj) = value {
            if let Some(out) = render_hierarchy(tables, obj.type_info(), value, options)? {
                return Ok(out);
            }
        }

        // 4. Default.
        self.render_default(tables, value, options)
    }

    fn render_list(
        &self,
        tables: &Tables,
        items: &[Value],
        options: RenderOptions,
        depth: usize,
    ) -> Result<Value, RenderError> {
        self.check_depth(depth)?;
        let items = items
            .iter()
            .map(|item| self.dispatch(tables, item, options, depth + 1).map(Value::Str))
            .collect::<Result<_, _>>()?;
        Ok(Value::List(items))
    }

    fn render_map(
        &self,
        tables: &Tables,
        entries: &[(String, Value)],
        options: RenderOptions,
        depth: usize,
    ) -> Result<Value, RenderError> {
        self.check_depth(depth)?;
        let entries = entries
            .iter()
            .map(|(key, item)| {
                let rendered = self.dispatch(tables, item, options, depth + 1)?;
                Ok((key.clone(), Value::Str(rendered)))
            })
            .collect::<Result<_, RenderError>>()?;
        Ok(Value::Map(entries))
    }

    fn check_depth(&self, depth: usize) -> Result<(), RenderError> {
        if depth >= self.max_depth {
            warn!(limit = self.max_depth, "collection nesting too deep");
            return Err(RenderError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    fn render_default(
        &self,
        tables: &Tables,
        value: &Value,
        options: RenderOptions,
    ) -> Result<String, RenderError> {
        trace!(
            value = value.type_name(),
            renderer = tables.default.name(),
            "rendering with default"
        );
        tables
            .default
            .render(value, options)
            .map_err(|e| RenderError::in_renderer(tables.default.name(), e))
    }
}

/// Walk the type table in registration order.
///
/// Every matching entry appends its output after [`INHERITANCE_SEPARATOR`].
/// A matching entry with `disable_inheritance` replaces whatever was
/// accumulated so far and ends the walk. Returns `None` if nothing matched.
fn render_hierarchy(
    tables: &Tables,
    type_info: &TypeInfo,
    value: &Value,
    options: RenderOptions,
) -> Result<Option<String>, RenderError> {
    let mut acc: Option<String> = None;
    for (key, entry) in &tables.types {
        if !type_info.is_a(key) {
            continue;
        }
        trace!(
            type_key = %key,
            renderer = entry.name(),
            disable_inheritance = entry.disable_inheritance,
            "type renderer matched"
        );
        let out = entry.render(value, options)?;
        if entry.disable_inheritance {
            acc = Some(out);
            break;
        }
        acc = Some(match acc {
            Some(prev) => format!("{}{}{}", prev, INHERITANCE_SEPARATOR, out),
            None => out,
        });
    }
    Ok(acc)
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tables = self.tables.load();
        f.debug_struct("RendererRegistry")
            .field("entries", &self.entries())
            .field("default", &tables.default.name())
            .field("options", &self.options)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
