//! Stack layouts: single-axis distribution among children.
//!
//! A pass runs in three steps, always in child insertion order:
//!
//! 1. **Classify** each child as flexible or fixed.
//! 2. **Measure** what is left once fixed extents, flexible minimums and
//!    margins are taken from the inner extent (`size - 2 * bevel`).
//! 3. **Assign** rectangles with a cursor that starts at `position + bevel`.
//!
//! A child is flexible when its current extent on the packing axis is at
//! least its minimum (or it has no minimum) and it has no maximum on that
//! axis. Everything else, and every window flagged `FIXED`, gets exactly its
//! minimum, clamped to its maximum when one is set.

use super::base::{layout_window_contents, Layout, LayoutState};
use crate::geometry::{Axis, SizedVector2, Vector2};
use crate::window::{Window, WindowId, WindowTree};

/// Slack allowed when checking for overflow.
const EPSILON: f32 = 1e-3;

/// Insets of a stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackConfig {
    /// Inset applied on every side before distributing space.
    pub bevel: Vector2,
    /// Gap between consecutive children; only the packing-axis component
    /// is used.
    pub margin: Vector2,
}

impl StackConfig {
    /// Create a config.
    pub const fn new(bevel: Vector2, margin: Vector2) -> Self {
        Self { bevel, margin }
    }

    /// No bevel and no margin.
    pub const fn tight() -> Self {
        Self::new(Vector2::ZERO, Vector2::ZERO)
    }

    /// Replace the bevel.
    #[must_use]
    pub const fn with_bevel(mut self, bevel: Vector2) -> Self {
        self.bevel = bevel;
        self
    }

    /// Replace the margin.
    #[must_use]
    pub const fn with_margin(mut self, margin: Vector2) -> Self {
        self.margin = margin;
        self
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::new(Vector2::splat(15.0), Vector2::splat(25.0))
    }
}

/// How a child takes part in a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Flexible { min: f32 },
    Fixed { extent: f32 },
}

impl Slot {
    fn classify(window: &Window, axis: Axis) -> Self {
        let size = axis.extent(window.size);
        let min = axis.extent(window.get_min_size());
        let max = axis.extent(window.get_max_size());

        let fits_min = min == 0.0 || size >= min;
        if !window.is_fixed() && fits_min && max == 0.0 {
            Self::Flexible { min }
        } else if max > 0.0 {
            Self::Fixed { extent: min.min(max) }
        } else {
            Self::Fixed { extent: min }
        }
    }

    const fn reserved(self) -> f32 {
        match self {
            Self::Flexible { min } => min,
            Self::Fixed { extent } => extent,
        }
    }
}

/// A horizontal or vertical stack.
#[derive(Debug, Clone)]
pub struct StackLayout {
    state: LayoutState,
    axis: Axis,
    config: StackConfig,
}

impl StackLayout {
    /// Create a stack packing along `axis`.
    pub const fn new(axis: Axis, config: StackConfig) -> Self {
        Self {
            state: LayoutState::new(),
            axis,
            config,
        }
    }

    /// Left-to-right stack with default insets.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal, StackConfig::default())
    }

    /// Top-to-bottom stack with default insets.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical, StackConfig::default())
    }

    /// Replace the insets.
    #[must_use]
    pub const fn with_config(mut self, config: StackConfig) -> Self {
        self.config = config;
        self
    }

    /// Packing axis.
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Insets.
    pub const fn config(&self) -> &StackConfig {
        &self.config
    }

    fn slots(&self, tree: &WindowTree) -> Vec<(WindowId, Slot)> {
        self.state
            .children()
            .iter()
            .filter_map(|id| tree.node(*id).map(|w| (*id, Slot::classify(w, self.axis))))
            .collect()
    }

    fn margins(&self, count: usize) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let gaps = count.saturating_sub(1) as f32;
        self.axis.of(self.config.margin) * gaps
    }
}

impl Layout for StackLayout {
    fn state(&self) -> &LayoutState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut LayoutState {
        &mut self.state
    }

    fn get_min_size(&mut self, tree: &WindowTree) -> SizedVector2 {
        let axis = self.axis;
        let cross = axis.cross();
        let slots = self.slots(tree);

        let main: f32 = slots.iter().map(|(_, slot)| slot.reserved()).sum::<f32>()
            + self.margins(slots.len());
        let cross_min = slots
            .iter()
            .filter_map(|(id, _)| tree.node(*id))
            .map(|w| cross.extent(w.get_min_size()))
            .fold(0.0_f32, f32::max);

        let bevel = self.config.bevel * 2.0;
        let min = axis.size(main + axis.of(bevel), cross_min + cross.of(bevel));
        self.state.min_size = min;
        min
    }

    fn get_max_size(&mut self) -> SizedVector2 {
        let max = (self.state.size - self.config.bevel * 2.0).floor_zero();
        self.state.max_size = max;
        max
    }

    fn do_layout(&mut self, tree: &mut WindowTree) {
        if self.state.children().is_empty() || !self.state.resolve_root(tree) {
            return;
        }
        let axis = self.axis;
        let cross = axis.cross();
        let max_size = self.get_max_size();

        // Classify against a snapshot of the child list.
        let slots = self.slots(tree);
        let flexible = slots
            .iter()
            .filter(|(_, slot)| matches!(slot, Slot::Flexible { .. }))
            .count();
        let reserved: f32 = slots.iter().map(|(_, slot)| slot.reserved()).sum();
        let margins = self.margins(slots.len());

        let available = axis.extent(max_size);
        if reserved + margins > available + EPSILON {
            log::warn!(
                "stack {:?} overflows: children need {} but only {} is available",
                axis,
                reserved + margins,
                available
            );
        }
        let remaining = (available - reserved - margins).max(0.0);
        #[allow(clippy::cast_precision_loss)]
        let flexible_width = remaining / flexible.max(1) as f32;

        log::debug!(
            "stack {:?} pass over {} children at {:?}, {} flexible sharing {}",
            axis,
            slots.len(),
            self.state.rect(),
            flexible,
            remaining
        );

        let origin = self.state.position + self.config.bevel;
        let cross_position = cross.of(origin);
        let cross_extent = cross.extent(max_size);
        let margin = axis.of(self.config.margin);
        let mut cursor = axis.of(origin);

        for (id, slot) in slots {
            let extent = match slot {
                Slot::Flexible { min } => min.max(min + flexible_width),
                Slot::Fixed { extent } => extent,
            };
            if let Some(window) = tree.node_mut(id) {
                window.position = axis.point(cursor, cross_position);
                window.size = axis.size(extent, cross_extent);
                log::trace!("{} -> {:?}", window.name(), window.rect());
            }
            layout_window_contents(tree, id);
            cursor += extent + margin;
        }
    }
}
