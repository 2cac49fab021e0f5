use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde_json::json;

use crate::error::{GridError, Result};
use crate::geometry::Thickness;
use crate::layout::{Placement, Track, TrackSize, cell_margin, refresh_spacing, synthesize};
use crate::logging::{LogEvent, LogLevel, Logger};
use crate::metrics::LayoutMetrics;

/// Default gutter magnitude in device-independent pixels.
pub const DEFAULT_SPACING: f64 = 3.0;

/// Identifier the host toolkit uses to refer to a child element.
pub type ChildId = String;

/// How the container realises its gutters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpacingStrategy {
    /// Interleave synthetic gutter tracks into the definition lists and
    /// remap child placements into the doubled index space.
    TrackInjection,
    /// Wrap each child in a margin-carrying proxy and leave the user's
    /// definition lists untouched.
    #[default]
    ItemMargins,
}

/// Structural notifications delivered by the host toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridChange {
    RowsChanged,
    ColumnsChanged,
    ChildrenChanged,
    RowSpacingChanged,
    ColumnSpacingChanged,
    ChildShown(ChildId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Rows,
    Columns,
}

/// Lifecycle of a child relative to its one-shot placement transform.
/// An unattached child has no entry at all; an entry starts in
/// `AwaitingFirstShow` and `Stable` is terminal for that child instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildPhase {
    AwaitingFirstShow,
    Stable,
}

#[derive(Debug, Clone)]
struct ChildEntry {
    /// Placement as declared by the consumer.
    authored: Placement,
    /// Doubled coordinates, derived from `authored` on the first show.
    /// Track-injection only; margin mode never rewrites coordinates.
    effective: Option<Placement>,
    phase: ChildPhase,
}

impl ChildEntry {
    fn new(authored: Placement) -> Self {
        Self {
            authored,
            effective: None,
            phase: ChildPhase::AwaitingFirstShow,
        }
    }
}

/// Single-child wrapper that carries the computed gutter margin, so the
/// wrapped element's own margin stays untouched. The proxy occupies the
/// child's grid cell and forwards the placement on its behalf.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemProxy {
    pub placement: Placement,
    pub margin: Thickness,
}

/// Grid container that injects uniform gutters between rows and columns
/// without spacer tracks declared by the consumer.
///
/// The container owns the model the host toolkit queries: the live track
/// lists per axis, the ordered child list, and (in margin mode) the proxy
/// registry. Structural notifications from the host arrive through the
/// mutation methods or [`SpacedGrid::apply_change`] and are routed to the
/// matching recompute synchronously.
pub struct SpacedGrid {
    strategy: SpacingStrategy,
    row_spacing: f64,
    column_spacing: f64,
    rows: Vec<Track>,
    columns: Vec<Track>,
    /// Child ids in paint order.
    order: Vec<ChildId>,
    children: HashMap<ChildId, ChildEntry>,
    proxies: HashMap<ChildId, ItemProxy>,
    logger: Option<Logger>,
    metrics: LayoutMetrics,
}

impl Default for SpacedGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SpacedGrid {
    /// Container using the margin strategy, spacing 3.0 on both axes.
    pub fn new() -> Self {
        Self::with_strategy(SpacingStrategy::default())
    }

    pub fn with_strategy(strategy: SpacingStrategy) -> Self {
        Self {
            strategy,
            row_spacing: DEFAULT_SPACING,
            column_spacing: DEFAULT_SPACING,
            rows: Vec::new(),
            columns: Vec::new(),
            order: Vec::new(),
            children: HashMap::new(),
            proxies: HashMap::new(),
            logger: None,
            metrics: LayoutMetrics::new(),
        }
    }

    pub fn strategy(&self) -> SpacingStrategy {
        self.strategy
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    // --- spacing properties ---

    pub fn row_spacing(&self) -> f64 {
        self.row_spacing
    }

    pub fn column_spacing(&self) -> f64 {
        self.column_spacing
    }

    pub fn set_row_spacing(&mut self, value: f64) -> Result<()> {
        validate_spacing(value)?;
        if self.row_spacing != value {
            self.row_spacing = value;
            self.apply_change(GridChange::RowSpacingChanged);
        }
        Ok(())
    }

    pub fn set_column_spacing(&mut self, value: f64) -> Result<()> {
        validate_spacing(value)?;
        if self.column_spacing != value {
            self.column_spacing = value;
            self.apply_change(GridChange::ColumnSpacingChanged);
        }
        Ok(())
    }

    // --- definition lists ---

    pub fn add_row(&mut self, size: TrackSize) -> &mut Self {
        self.rows.push(Track::user(size));
        self.apply_change(GridChange::RowsChanged);
        self
    }

    pub fn add_column(&mut self, size: TrackSize) -> &mut Self {
        self.columns.push(Track::user(size));
        self.apply_change(GridChange::ColumnsChanged);
        self
    }

    pub fn set_rows(&mut self, sizes: impl IntoIterator<Item = TrackSize>) {
        self.rows = sizes.into_iter().map(Track::user).collect();
        self.apply_change(GridChange::RowsChanged);
    }

    pub fn set_columns(&mut self, sizes: impl IntoIterator<Item = TrackSize>) {
        self.columns = sizes.into_iter().map(Track::user).collect();
        self.apply_change(GridChange::ColumnsChanged);
    }

    pub fn clear_rows(&mut self) {
        self.rows.clear();
        self.apply_change(GridChange::RowsChanged);
    }

    pub fn clear_columns(&mut self) {
        self.columns.clear();
        self.apply_change(GridChange::ColumnsChanged);
    }

    /// Live row definition list, gutter tracks included in injection mode.
    pub fn rows(&self) -> &[Track] {
        &self.rows
    }

    pub fn columns(&self) -> &[Track] {
        &self.columns
    }

    /// Row definitions as declared by the consumer, gutter tracks filtered
    /// out.
    pub fn user_rows(&self) -> impl Iterator<Item = &Track> {
        self.rows.iter().filter(|t| !t.is_spacing())
    }

    pub fn user_columns(&self) -> impl Iterator<Item = &Track> {
        self.columns.iter().filter(|t| !t.is_spacing())
    }

    fn user_row_count(&self) -> u16 {
        self.user_rows().count().min(u16::MAX as usize) as u16
    }

    fn user_column_count(&self) -> u16 {
        self.user_columns().count().min(u16::MAX as usize) as u16
    }

    // --- children ---

    pub fn push_child(&mut self, id: impl Into<ChildId>, placement: Placement) -> Result<()> {
        let index = self.order.len();
        self.insert_child(index, id, placement)
    }

    pub fn insert_child(
        &mut self,
        index: usize,
        id: impl Into<ChildId>,
        placement: Placement,
    ) -> Result<()> {
        let id = id.into();
        if self.children.contains_key(&id) {
            return Err(GridError::DuplicateChild(id));
        }
        if index > self.order.len() {
            return Err(GridError::IndexOutOfBounds {
                index,
                len: self.order.len(),
            });
        }
        self.order.insert(index, id.clone());
        self.children.insert(id, ChildEntry::new(placement));
        self.apply_change(GridChange::ChildrenChanged);
        Ok(())
    }

    pub fn remove_child(&mut self, id: &str) -> Result<()> {
        if self.children.remove(id).is_none() {
            return Err(GridError::ChildNotFound(id.to_string()));
        }
        self.order.retain(|existing| existing != id);
        self.proxies.remove(id);
        self.apply_change(GridChange::ChildrenChanged);
        Ok(())
    }

    /// Swap the child at `index` for a new one, returning the id it
    /// replaced.
    pub fn replace_child(
        &mut self,
        index: usize,
        id: impl Into<ChildId>,
        placement: Placement,
    ) -> Result<ChildId> {
        let id = id.into();
        let len = self.order.len();
        if index >= len {
            return Err(GridError::IndexOutOfBounds { index, len });
        }
        if self.children.contains_key(&id) {
            return Err(GridError::DuplicateChild(id));
        }
        let previous = std::mem::replace(&mut self.order[index], id.clone());
        self.children.remove(&previous);
        self.proxies.remove(&previous);
        self.children.insert(id, ChildEntry::new(placement));
        self.apply_change(GridChange::ChildrenChanged);
        Ok(previous)
    }

    pub fn clear_children(&mut self) {
        self.order.clear();
        self.children.clear();
        self.proxies.clear();
        self.apply_change(GridChange::ChildrenChanged);
    }

    /// Child ids in paint order.
    pub fn children(&self) -> impl Iterator<Item = &ChildId> {
        self.order.iter()
    }

    pub fn child_count(&self) -> usize {
        self.order.len()
    }

    /// Notify the container that a child became visible for the first
    /// time. Placement cannot be read off an element the host has not
    /// attached yet, so the one-shot transform is deferred to this signal;
    /// repeats after the first are ignored.
    pub fn show_child(&mut self, id: &str) -> Result<()> {
        if !self.children.contains_key(id) {
            return Err(GridError::ChildNotFound(id.to_string()));
        }
        self.apply_change(GridChange::ChildShown(id.to_string()));
        Ok(())
    }

    // --- placement accessors ---

    /// Update a child's authored placement. Derived geometry (doubled
    /// coordinates or proxy margin) follows immediately if the child has
    /// already stabilised.
    pub fn set_placement(&mut self, id: &str, placement: Placement) -> Result<()> {
        let row_count = self.user_row_count();
        let column_count = self.user_column_count();
        let row_spacing = self.row_spacing;
        let column_spacing = self.column_spacing;

        let entry = self
            .children
            .get_mut(id)
            .ok_or_else(|| GridError::ChildNotFound(id.to_string()))?;
        entry.authored = placement;
        if entry.phase != ChildPhase::Stable {
            return Ok(());
        }

        match self.strategy {
            SpacingStrategy::TrackInjection => {
                entry.effective = Some(placement.doubled());
            }
            SpacingStrategy::ItemMargins => {
                if let Some(proxy) = self.proxies.get_mut(id) {
                    proxy.placement = placement;
                    proxy.margin = cell_margin(
                        placement,
                        row_count,
                        column_count,
                        row_spacing,
                        column_spacing,
                    );
                    self.metrics.record_margin_updates(1);
                }
            }
        }
        Ok(())
    }

    /// Placement as declared by the consumer.
    pub fn placement_of(&self, id: &str) -> Option<Placement> {
        self.children.get(id).map(|child| child.authored)
    }

    /// Coordinates the host grid primitive should use for this child:
    /// doubled under track injection once the child has been shown,
    /// authored otherwise.
    pub fn effective_placement_of(&self, id: &str) -> Option<Placement> {
        self.children
            .get(id)
            .map(|child| child.effective.unwrap_or(child.authored))
    }

    /// Gutter margin carried by the child's proxy; zero when unwrapped.
    pub fn margin_of(&self, id: &str) -> Thickness {
        self.proxies
            .get(id)
            .map(|proxy| proxy.margin)
            .unwrap_or(Thickness::ZERO)
    }

    pub fn proxy_of(&self, id: &str) -> Option<&ItemProxy> {
        self.proxies.get(id)
    }

    pub fn is_wrapped(&self, id: &str) -> bool {
        self.proxies.contains_key(id)
    }

    pub fn is_stable(&self, id: &str) -> bool {
        matches!(
            self.children.get(id),
            Some(child) if child.phase == ChildPhase::Stable
        )
    }

    // --- change dispatch ---

    /// Route one structural notification to the matching recompute. The
    /// pass runs synchronously and to completion before returning.
    pub fn apply_change(&mut self, change: GridChange) {
        let applied = match &change {
            GridChange::RowsChanged => {
                self.on_axis_changed(Axis::Rows);
                true
            }
            GridChange::ColumnsChanged => {
                self.on_axis_changed(Axis::Columns);
                true
            }
            GridChange::ChildrenChanged => {
                self.on_children_changed();
                true
            }
            GridChange::RowSpacingChanged => {
                self.on_spacing_changed(Axis::Rows);
                true
            }
            GridChange::ColumnSpacingChanged => {
                self.on_spacing_changed(Axis::Columns);
                true
            }
            GridChange::ChildShown(id) => {
                let id = id.clone();
                self.on_child_shown(&id)
            }
        };
        self.metrics.record_change();
        self.log_change(&change, applied);
    }

    fn on_axis_changed(&mut self, axis: Axis) {
        match self.strategy {
            SpacingStrategy::TrackInjection => self.resynthesize(axis),
            // Boundary tests depend on the track counts, so every margin
            // is rederived when a definition list changes.
            SpacingStrategy::ItemMargins => self.recalculate_margins(),
        }
    }

    fn on_children_changed(&mut self) {
        match self.strategy {
            SpacingStrategy::TrackInjection => {
                self.resynthesize(Axis::Rows);
                self.resynthesize(Axis::Columns);
            }
            SpacingStrategy::ItemMargins => self.recalculate_margins(),
        }
    }

    fn on_spacing_changed(&mut self, axis: Axis) {
        match self.strategy {
            // Magnitude changes rewrite existing gutter tracks in place;
            // a full resynthesis would pointlessly churn the lists.
            SpacingStrategy::TrackInjection => {
                let (tracks, spacing) = match axis {
                    Axis::Rows => (&mut self.rows, self.row_spacing),
                    Axis::Columns => (&mut self.columns, self.column_spacing),
                };
                let updated = refresh_spacing(tracks, spacing);
                self.metrics.record_spacing_refresh(updated);
            }
            SpacingStrategy::ItemMargins => self.recalculate_margins(),
        }
    }

    /// Rebuild one axis from its user tracks with gutters interleaved.
    /// Child coordinates are untouched: the doubled placement is derived
    /// from the authored record, never from the live lists.
    fn resynthesize(&mut self, axis: Axis) {
        let (tracks, spacing) = match axis {
            Axis::Rows => (&mut self.rows, self.row_spacing),
            Axis::Columns => (&mut self.columns, self.column_spacing),
        };
        *tracks = synthesize(tracks, spacing);
        let gutters = tracks.len() / 2;
        self.metrics.record_synthesis(gutters);
    }

    /// One-shot transition for a freshly visible child. Returns whether
    /// the transform was applied; a child already stabilised is left
    /// alone.
    fn on_child_shown(&mut self, id: &str) -> bool {
        let row_count = self.user_row_count();
        let column_count = self.user_column_count();
        let row_spacing = self.row_spacing;
        let column_spacing = self.column_spacing;
        let strategy = self.strategy;

        let Some(entry) = self.children.get_mut(id) else {
            return false;
        };
        if entry.phase == ChildPhase::Stable {
            return false;
        }
        entry.phase = ChildPhase::Stable;

        match strategy {
            SpacingStrategy::TrackInjection => {
                entry.effective = Some(entry.authored.doubled());
                self.metrics.record_remap();
            }
            SpacingStrategy::ItemMargins => {
                let placement = entry.authored;
                let margin = cell_margin(
                    placement,
                    row_count,
                    column_count,
                    row_spacing,
                    column_spacing,
                );
                match self.proxies.entry(id.to_string()) {
                    // Already wrapped: refresh the margin only.
                    Entry::Occupied(slot) => {
                        slot.into_mut().margin = margin;
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(ItemProxy { placement, margin });
                        self.metrics.record_wrap();
                    }
                }
                self.metrics.record_margin_updates(1);
            }
        }
        true
    }

    /// Rederive every stabilised child's proxy margin from the current
    /// track counts and spacing magnitudes. Children awaiting their first
    /// show are skipped; their placement is not considered readable yet.
    fn recalculate_margins(&mut self) {
        let row_count = self.user_row_count();
        let column_count = self.user_column_count();
        let mut updates = 0;

        for id in &self.order {
            let Some(child) = self.children.get(id) else {
                continue;
            };
            if child.phase != ChildPhase::Stable {
                continue;
            }

            let proxy = match self.proxies.entry(id.clone()) {
                Entry::Occupied(slot) => slot.into_mut(),
                Entry::Vacant(slot) => {
                    self.metrics.record_wrap();
                    slot.insert(ItemProxy {
                        placement: child.authored,
                        margin: Thickness::ZERO,
                    })
                }
            };
            proxy.margin = cell_margin(
                proxy.placement,
                row_count,
                column_count,
                self.row_spacing,
                self.column_spacing,
            );
            updates += 1;
        }

        self.metrics.record_margin_updates(updates);
    }

    fn log_change(&self, change: &GridChange, applied: bool) {
        let Some(logger) = self.logger.as_ref() else {
            return;
        };
        let event = LogEvent::new(LogLevel::Debug, "spaced_grid::grid", "change_applied")
            .field("change", json!(describe_change(change)))
            .field("applied", json!(applied))
            .field("rows", json!(self.rows.len()))
            .field("columns", json!(self.columns.len()))
            .field("children", json!(self.order.len()));
        let _ = logger.log_event(event);
    }
}

fn validate_spacing(value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidSpacing(value))
    }
}

fn describe_change(change: &GridChange) -> &'static str {
    match change {
        GridChange::RowsChanged => "rows_changed",
        GridChange::ColumnsChanged => "columns_changed",
        GridChange::ChildrenChanged => "children_changed",
        GridChange::RowSpacingChanged => "row_spacing_changed",
        GridChange::ColumnSpacingChanged => "column_spacing_changed",
        GridChange::ChildShown(_) => "child_shown",
    }
}
