//! Window: a named node of the composite tree.
//!
//! A window carries the geometry its parent layout assigns, the
//! constraints that feed back into that layout, an anchor for border
//! partitioning and, when it is a container, its own layout.

use super::error::ParseAnchorError;
use crate::canvas::Canvas;
use crate::geometry::{Rect, SizedVector2, Vector2};
use crate::layout::LayoutKind;
use crate::style::WindowStyle;
use bitflags::bitflags;
use indexmap::IndexMap;
use std::str::FromStr;

/// Handle to a window stored in a [`WindowTree`](super::WindowTree).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct WindowId(pub(crate) usize);

impl WindowId {
    /// Slot index inside the tree.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Border region a window asks to be placed in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Anchor {
    /// Top band.
    North,
    /// Bottom band.
    South,
    /// Right column.
    East,
    /// Left column.
    West,
    /// Remaining space.
    #[default]
    Center,
}

impl Anchor {
    /// All anchors in partitioning order.
    pub const ALL: [Self; 5] = [Self::North, Self::South, Self::East, Self::West, Self::Center];

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Center => "center",
        }
    }
}

impl FromStr for Anchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|anchor| anchor.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseAnchorError(s.to_string()))
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Capability and behaviour flags.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct WindowFlags: u8 {
        /// Always sized to its minimum by stack layouts.
        const FIXED = 0b0000_0001;
        /// Draw a title bar along the top edge.
        const SHOW_TITLE = 0b0000_0010;
        /// May own children arranged by its own layout.
        const COMPOSITE = 0b0000_0100;
        /// Root of a managed tree; holds the screen size.
        const MANAGER = 0b0000_1000;
    }
}

/// A node in the window tree.
#[derive(Debug)]
pub struct Window {
    name: String,
    pub(crate) parent: Option<WindowId>,
    pub(crate) children: IndexMap<String, WindowId>,
    /// Top-left corner, assigned by the parent layout.
    pub position: Vector2,
    /// Extent, assigned by the parent layout.
    pub size: SizedVector2,
    /// Minimum extent per axis. Zero means unconstrained.
    pub min_size: SizedVector2,
    /// Maximum extent per axis. Zero means unconstrained.
    pub max_size: SizedVector2,
    anchor: Option<Anchor>,
    flags: WindowFlags,
    style: WindowStyle,
    layout: Option<Box<LayoutKind>>,
    initialized: bool,
    dirty: bool,
}

impl Window {
    /// Create a detached window anchored to the center.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: IndexMap::new(),
            position: Vector2::ZERO,
            size: SizedVector2::ZERO,
            min_size: SizedVector2::ZERO,
            max_size: SizedVector2::ZERO,
            anchor: Some(Anchor::Center),
            flags: WindowFlags::empty(),
            style: WindowStyle::default(),
            layout: None,
            initialized: false,
            dirty: true,
        }
    }

    /// Create the root node of a managed tree.
    pub(crate) fn manager(name: impl Into<String>) -> Self {
        let mut window = Self::new(name);
        window.anchor = None;
        window.flags = WindowFlags::MANAGER | WindowFlags::COMPOSITE;
        window
    }

    /// Set the border anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Opt out of border partitioning entirely.
    #[must_use]
    pub fn without_anchor(mut self) -> Self {
        self.anchor = None;
        self
    }

    /// Set the minimum size. The current size is raised to match.
    #[must_use]
    pub fn with_min_size(mut self, min_size: SizedVector2) -> Self {
        self.min_size = min_size;
        self.size = self.size.max(min_size);
        self
    }

    /// Set the maximum size.
    #[must_use]
    pub fn with_max_size(mut self, max_size: SizedVector2) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the initial size.
    #[must_use]
    pub fn with_size(mut self, size: SizedVector2) -> Self {
        self.size = size;
        self
    }

    /// Mark as a fixed child.
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.flags |= WindowFlags::FIXED;
        self
    }

    /// Draw a title bar.
    #[must_use]
    pub fn with_title_bar(mut self) -> Self {
        self.flags |= WindowFlags::SHOW_TITLE;
        self
    }

    /// Replace the style.
    #[must_use]
    pub fn with_style(mut self, style: WindowStyle) -> Self {
        self.style = style;
        self
    }

    /// Give the window its own layout, making it a container.
    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<LayoutKind>) -> Self {
        self.layout = Some(Box::new(layout.into()));
        self.flags |= WindowFlags::COMPOSITE;
        self
    }

    /// Unique name among siblings.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Parent window, or `None` for a root or detached window.
    pub const fn parent(&self) -> Option<WindowId> {
        self.parent
    }

    /// Check if this window has no parent.
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, WindowId)> {
        self.children.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Border anchor, if any.
    pub const fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    /// Behaviour flags.
    pub const fn flags(&self) -> WindowFlags {
        self.flags
    }

    /// Appearance settings.
    pub const fn style(&self) -> &WindowStyle {
        &self.style
    }

    /// Mutable appearance settings. Marks the window for redraw.
    pub fn style_mut(&mut self) -> &mut WindowStyle {
        self.dirty = true;
        &mut self.style
    }

    /// Check if this window can own children.
    pub const fn is_composite(&self) -> bool {
        self.flags.contains(WindowFlags::COMPOSITE)
    }

    /// Check if this window is the root of a managed tree.
    pub const fn is_windows_manager(&self) -> bool {
        self.flags.contains(WindowFlags::MANAGER)
    }

    /// Check if stacks must size this window to its minimum.
    pub const fn is_fixed(&self) -> bool {
        self.flags.contains(WindowFlags::FIXED)
    }

    /// Minimum extent offered to the parent layout.
    pub const fn get_min_size(&self) -> SizedVector2 {
        self.min_size
    }

    /// Maximum extent offered to the parent layout.
    pub const fn get_max_size(&self) -> SizedVector2 {
        self.max_size
    }

    /// Assigned rectangle.
    pub const fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Rectangle left for the window's own layout once the title bar is
    /// carved off.
    pub fn content_rect(&self) -> Rect {
        let rect = self.rect();
        if self.flags.contains(WindowFlags::SHOW_TITLE) {
            rect.split_vertical(self.style.title_height).1
        } else {
            rect
        }
    }

    /// Title text shown in the title bar.
    pub fn title(&self) -> &str {
        self.style.title.as_deref().unwrap_or(&self.name)
    }

    /// The window's own layout.
    pub fn layout(&self) -> Option<&LayoutKind> {
        self.layout.as_deref()
    }

    /// Mutable access to the window's own layout.
    pub fn layout_mut(&mut self) -> Option<&mut LayoutKind> {
        self.layout.as_deref_mut()
    }

    pub(crate) fn take_layout(&mut self) -> Option<Box<LayoutKind>> {
        self.layout.take()
    }

    pub(crate) fn restore_layout(&mut self, layout: Box<LayoutKind>) {
        self.layout = Some(layout);
    }

    /// Check if `on_init` has run.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Called once after the first layout pass.
    pub fn on_init(&mut self) {
        self.initialized = true;
        self.dirty = true;
    }

    /// Called after every host resize, once layout has been recomputed.
    pub fn on_resize(&mut self, _width: f32, _height: f32) {
        self.dirty = true;
    }

    /// Draw the background and, if enabled, the title bar.
    pub fn on_draw(&self, canvas: &mut dyn Canvas) {
        let rect = self.rect();
        if rect.is_empty() {
            return;
        }
        canvas.fill_rect(rect, self.style.background);

        if !self.flags.contains(WindowFlags::SHOW_TITLE) {
            return;
        }
        let (bar, _) = rect.split_vertical(self.style.title_height);
        canvas.fill_rect(bar, self.style.title_background);

        let mut origin = bar.position + Vector2::new(1.0, 0.0);
        let mut room = bar.size.width - 2.0;
        if let Some(icon) = self.style.title_icon {
            let mut glyph = [0u8; 4];
            canvas.draw_text(
                origin,
                icon.encode_utf8(&mut glyph),
                room,
                self.style.title_color,
                self.style.title_background,
            );
            origin.x += 2.0;
            room -= 2.0;
        }
        canvas.draw_text(
            origin,
            self.title(),
            room,
            self.style.title_color,
            self.style.title_background,
        );
    }

    /// Check if the window needs to be redrawn.
    pub const fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Mark the window for redraw.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the redraw flag after drawing.
    pub fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
