//! Layout contract and the state every layout shares.

use crate::geometry::{Rect, SizedVector2, Vector2};
use crate::window::{Anchor, WindowId, WindowTree};

/// What a layout is nested in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayoutParent {
    /// A region of a border layout.
    Region(Anchor),
    /// The content area of a container window.
    Window(WindowId),
}

/// Geometry and child list shared by all layouts.
///
/// The child list holds ids of windows owned by the tree; a layout only
/// arranges them. Each id appears at most once.
#[derive(Debug, Clone, Default)]
pub struct LayoutState {
    /// Top-left corner of the area being arranged.
    pub position: Vector2,
    /// Extent of the area being arranged.
    pub size: SizedVector2,
    /// Last value computed by `get_min_size`.
    pub min_size: SizedVector2,
    /// Last value computed by `get_max_size`.
    pub max_size: SizedVector2,
    children: Vec<WindowId>,
    parent: Option<LayoutParent>,
}

impl LayoutState {
    /// Create an empty top-level state.
    pub const fn new() -> Self {
        Self {
            position: Vector2::ZERO,
            size: SizedVector2::ZERO,
            min_size: SizedVector2::ZERO,
            max_size: SizedVector2::ZERO,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Arranged windows in insertion order.
    pub fn children(&self) -> &[WindowId] {
        &self.children
    }

    /// Add a window unless it is already present. Returns whether it was added.
    pub fn add(&mut self, id: WindowId) -> bool {
        if self.children.contains(&id) {
            return false;
        }
        self.children.push(id);
        true
    }

    /// Drop a window. Returns whether it was present.
    pub fn remove(&mut self, id: WindowId) -> bool {
        let before = self.children.len();
        self.children.retain(|child| *child != id);
        self.children.len() != before
    }

    /// Enclosing layout or window, if nested.
    pub const fn parent(&self) -> Option<LayoutParent> {
        self.parent
    }

    /// Set the enclosing layout or window.
    pub fn set_parent(&mut self, parent: Option<LayoutParent>) {
        self.parent = parent;
    }

    /// Check if this layout sizes itself from the screen.
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Area being arranged.
    pub const fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Set the area being arranged.
    pub fn set_rect(&mut self, rect: Rect) {
        self.position = rect.position;
        self.size = rect.size;
    }

    /// A top-level layout covers the whole screen of the manager that owns
    /// its first child. Returns `false` when that cannot be determined.
    pub fn resolve_root(&mut self, tree: &WindowTree) -> bool {
        if !self.is_root() {
            return true;
        }
        let screen = self
            .children
            .first()
            .and_then(|first| tree.get_manager(*first))
            .and_then(|manager| tree.node(manager))
            .map(|manager| manager.size);
        match screen {
            Some(size) => {
                self.set_rect(Rect::from_size(size));
                true
            }
            None => false,
        }
    }
}

/// Capability surface every layout provides.
pub trait Layout {
    /// Shared state.
    fn state(&self) -> &LayoutState;

    /// Mutable shared state.
    fn state_mut(&mut self) -> &mut LayoutState;

    /// Smallest extent that fits every child's minimum plus insets.
    fn get_min_size(&mut self, tree: &WindowTree) -> SizedVector2;

    /// Extent available to children.
    fn get_max_size(&mut self) -> SizedVector2;

    /// Recompute and assign a rectangle to every child.
    fn do_layout(&mut self, tree: &mut WindowTree);

    /// One-shot setup before the first pass.
    fn on_init(&mut self, _tree: &WindowTree) {}

    /// Arrange `id`. Adding a window twice is a no-op.
    fn add(&mut self, id: WindowId) -> bool {
        self.state_mut().add(id)
    }

    /// Stop arranging `id`.
    fn remove(&mut self, id: WindowId) -> bool {
        self.state_mut().remove(id)
    }

    /// Arranged windows in insertion order.
    fn children(&self) -> &[WindowId] {
        self.state().children()
    }

    /// Top-left corner.
    fn position(&self) -> Vector2 {
        self.state().position
    }

    /// Extent.
    fn size(&self) -> SizedVector2 {
        self.state().size
    }

    /// Place the layout inside its parent.
    fn set_rect(&mut self, rect: Rect) {
        self.state_mut().set_rect(rect);
    }
}

/// Run a container window's own layout against its content area.
pub(crate) fn layout_window_contents(tree: &mut WindowTree, id: WindowId) {
    let Some(window) = tree.node_mut(id) else {
        return;
    };
    let content = window.content_rect();
    let Some(mut layout) = window.take_layout() else {
        return;
    };

    layout.state_mut().set_parent(Some(LayoutParent::Window(id)));
    layout.set_rect(content);
    layout.do_layout(tree);

    if let Some(window) = tree.node_mut(id) {
        window.restore_layout(layout);
    }
}
