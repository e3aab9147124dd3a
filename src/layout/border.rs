//! Border layout: five regions carved from one rectangle.
//!
//! North and south are full-width bands pinned to the top and bottom.
//! West and east are columns between them, and the center fills whatever
//! is left. Every region is its own layout and only arranges the windows
//! whose anchor names it.
//!
//! Each side's extent is the larger of its region's minimum size and the
//! configured grid value. When the bands do not fit, the available height
//! (or width) is split evenly between the two opposite sides.

use indexmap::IndexSet;

use super::base::{Layout, LayoutParent, LayoutState};
use super::kind::LayoutKind;
use super::stack::{StackConfig, StackLayout};
use crate::geometry::{Axis, Grid4, SizedVector2, Vector2};
use crate::window::{Anchor, WindowId, WindowTree};

/// Region sizing for a border layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderConfig {
    /// Minimum extent of each side region.
    pub grid: Grid4,
    /// Insets of the north band.
    pub north: StackConfig,
    /// Insets of the south band.
    pub south: StackConfig,
    /// Insets of the east column.
    pub east: StackConfig,
    /// Insets of the west column.
    pub west: StackConfig,
    /// Insets of the center region.
    pub center: StackConfig,
    /// Packing axis of the center region.
    pub center_axis: Axis,
}

impl BorderConfig {
    /// Default insets with the given grid.
    #[must_use]
    pub fn with_grid(mut self, grid: Grid4) -> Self {
        self.grid = grid;
        self
    }

    /// Same insets for every region.
    #[must_use]
    pub const fn with_regions(mut self, config: StackConfig) -> Self {
        self.north = config;
        self.south = config;
        self.east = config;
        self.west = config;
        self.center = config;
        self
    }

    /// Packing axis of the center region.
    #[must_use]
    pub const fn with_center_axis(mut self, axis: Axis) -> Self {
        self.center_axis = axis;
        self
    }
}

impl Default for BorderConfig {
    fn default() -> Self {
        let region = StackConfig::new(Vector2::splat(5.0), Vector2::splat(5.0));
        Self {
            grid: Grid4::new(0.0, 0.0, 64.0, 64.0),
            north: region,
            south: region,
            east: region,
            west: region,
            center: region.with_bevel(Vector2::new(5.0, 0.0)),
            center_axis: Axis::Horizontal,
        }
    }
}

/// Five-region compound layout.
#[derive(Debug, Clone)]
pub struct BorderLayout {
    state: LayoutState,
    grid: Grid4,
    north: StackLayout,
    south: StackLayout,
    east: StackLayout,
    west: StackLayout,
    center: Box<LayoutKind>,
    /// Children already handed to a region.
    partitioned: IndexSet<WindowId>,
}

impl BorderLayout {
    /// Create a border layout; the center is a stack.
    pub fn new(config: BorderConfig) -> Self {
        let center = StackLayout::new(config.center_axis, config.center);
        Self::with_center(config, center)
    }

    /// Create a border layout with a custom center layout, e.g. another
    /// border layout.
    pub fn with_center(config: BorderConfig, center: impl Into<LayoutKind>) -> Self {
        let region = |anchor, config| {
            let mut stack = StackLayout::new(Axis::Vertical, config);
            stack.state_mut().set_parent(Some(LayoutParent::Region(anchor)));
            stack
        };
        let mut center = Box::new(center.into());
        center.state_mut().set_parent(Some(LayoutParent::Region(Anchor::Center)));

        Self {
            state: LayoutState::new(),
            grid: config.grid,
            north: region(Anchor::North, config.north),
            south: region(Anchor::South, config.south),
            east: region(Anchor::East, config.east),
            west: region(Anchor::West, config.west),
            center,
            partitioned: IndexSet::new(),
        }
    }

    /// Configured minimum side extents.
    pub const fn grid(&self) -> Grid4 {
        self.grid
    }

    /// Top band.
    pub const fn north(&self) -> &StackLayout {
        &self.north
    }

    /// Bottom band.
    pub const fn south(&self) -> &StackLayout {
        &self.south
    }

    /// Right column.
    pub const fn east(&self) -> &StackLayout {
        &self.east
    }

    /// Left column.
    pub const fn west(&self) -> &StackLayout {
        &self.west
    }

    /// Remaining space.
    pub fn center(&self) -> &LayoutKind {
        &self.center
    }

    /// The region claiming `anchor`.
    pub fn region(&self, anchor: Anchor) -> &dyn Layout {
        match anchor {
            Anchor::North => &self.north,
            Anchor::South => &self.south,
            Anchor::East => &self.east,
            Anchor::West => &self.west,
            Anchor::Center => &*self.center,
        }
    }

    fn region_mut(&mut self, anchor: Anchor) -> &mut dyn Layout {
        match anchor {
            Anchor::North => &mut self.north,
            Anchor::South => &mut self.south,
            Anchor::East => &mut self.east,
            Anchor::West => &mut self.west,
            Anchor::Center => &mut *self.center,
        }
    }

    /// Hand every child not yet partitioned to the region its anchor names.
    /// A child's region is decided once; later anchor changes are ignored.
    fn partition(&mut self, tree: &WindowTree) {
        self.forget_departed();
        let pending: Vec<_> = self
            .state
            .children()
            .iter()
            .copied()
            .filter(|id| !self.partitioned.contains(id))
            .collect();
        if pending.is_empty() {
            return;
        }
        for id in pending {
            self.partitioned.insert(id);
            match tree.node(id).and_then(|w| w.anchor()) {
                Some(anchor) => {
                    self.region_mut(anchor).add(id);
                }
                None => log::trace!("window {id:?} has no anchor, leaving it unplaced"),
            }
        }
        log::debug!(
            "border partitioned: north={} south={} east={} west={} center={}",
            self.north.children().len(),
            self.south.children().len(),
            self.east.children().len(),
            self.west.children().len(),
            self.center.children().len()
        );
    }

    /// Drop region entries for windows no longer among this layout's
    /// children.
    fn forget_departed(&mut self) {
        let departed: Vec<_> = self
            .partitioned
            .iter()
            .copied()
            .filter(|id| !self.state.children().contains(id))
            .collect();
        for id in departed {
            self.partitioned.shift_remove(&id);
            for anchor in Anchor::ALL {
                self.region_mut(anchor).remove(id);
            }
        }
    }

    /// Side extents after applying grid minimums and the overflow split.
    fn extents(&mut self, tree: &WindowTree) -> Grid4 {
        let side = |layout: &mut StackLayout, axis: Axis, grid: f32| {
            axis.extent(layout.get_min_size(tree)).max(grid)
        };
        let mut extents = Grid4::new(
            side(&mut self.west, Axis::Horizontal, self.grid.west),
            side(&mut self.east, Axis::Horizontal, self.grid.east),
            side(&mut self.north, Axis::Vertical, self.grid.north),
            side(&mut self.south, Axis::Vertical, self.grid.south),
        );

        let SizedVector2 { width, height } = self.state.size.floor_zero();
        if extents.vertical() > height {
            extents.north = height / 2.0;
            extents.south = height / 2.0;
        }
        if extents.horizontal() > width {
            extents.west = width / 2.0;
            extents.east = width / 2.0;
        }
        extents
    }
}

impl Default for BorderLayout {
    fn default() -> Self {
        Self::new(BorderConfig::default())
    }
}

impl Layout for BorderLayout {
    fn state(&self) -> &LayoutState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut LayoutState {
        &mut self.state
    }

    fn get_min_size(&mut self, tree: &WindowTree) -> SizedVector2 {
        self.partition(tree);
        let north = self.north.get_min_size(tree);
        let south = self.south.get_min_size(tree);
        let west = self.west.get_min_size(tree);
        let east = self.east.get_min_size(tree);
        let center = self.center.get_min_size(tree);

        let width = (west.width.max(self.grid.west) + center.width + east.width.max(self.grid.east))
            .max(north.width)
            .max(south.width);
        let height = north.height.max(self.grid.north)
            + south.height.max(self.grid.south)
            + west.height.max(center.height).max(east.height);

        let min = SizedVector2::new(width, height);
        self.state.min_size = min;
        min
    }

    fn get_max_size(&mut self) -> SizedVector2 {
        self.state.max_size = self.state.size;
        self.state.size
    }

    fn on_init(&mut self, tree: &WindowTree) {
        self.partition(tree);
        self.center.on_init(tree);
    }

    fn do_layout(&mut self, tree: &mut WindowTree) {
        self.partition(tree);
        if !self.state.resolve_root(tree) {
            return;
        }
        let rect = self.state.rect();
        let extents = self.extents(tree);
        log::debug!("border pass at {rect:?} with extents {extents:?}");

        let (north, rest) = rect.split_vertical(extents.north);
        let (middle, south) = rest.split_vertical(rest.size.height - extents.south);
        let (west, rest) = middle.split_horizontal(extents.west);
        let (center, east) = rest.split_horizontal(rest.size.width - extents.east);

        self.north.set_rect(north);
        self.south.set_rect(south);
        self.west.set_rect(west);
        self.east.set_rect(east);
        self.center.set_rect(center);

        self.north.do_layout(tree);
        self.south.do_layout(tree);
        self.west.do_layout(tree);
        self.east.do_layout(tree);
        self.center.do_layout(tree);
    }

    fn remove(&mut self, id: WindowId) -> bool {
        if !self.state.remove(id) {
            return false;
        }
        self.partitioned.shift_remove(&id);
        for anchor in Anchor::ALL {
            self.region_mut(anchor).remove(id);
        }
        true
    }
}
