//! LayoutKind: the closed set of layouts a window or manager can own.

use super::base::{Layout, LayoutState};
use super::border::BorderLayout;
use super::stack::StackLayout;
use crate::geometry::SizedVector2;
use crate::window::{WindowId, WindowTree};

/// Any concrete layout.
#[derive(Debug, Clone)]
pub enum LayoutKind {
    /// Horizontal or vertical stack.
    Stack(StackLayout),
    /// Five-region border layout.
    Border(BorderLayout),
}

impl LayoutKind {
    fn inner(&self) -> &dyn Layout {
        match self {
            Self::Stack(stack) => stack,
            Self::Border(border) => border,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Layout {
        match self {
            Self::Stack(stack) => stack,
            Self::Border(border) => border,
        }
    }

    /// The stack, if this is one.
    pub const fn as_stack(&self) -> Option<&StackLayout> {
        match self {
            Self::Stack(stack) => Some(stack),
            Self::Border(_) => None,
        }
    }

    /// The border layout, if this is one.
    pub const fn as_border(&self) -> Option<&BorderLayout> {
        match self {
            Self::Border(border) => Some(border),
            Self::Stack(_) => None,
        }
    }
}

impl Layout for LayoutKind {
    fn state(&self) -> &LayoutState {
        self.inner().state()
    }

    fn state_mut(&mut self) -> &mut LayoutState {
        self.inner_mut().state_mut()
    }

    fn get_min_size(&mut self, tree: &WindowTree) -> SizedVector2 {
        self.inner_mut().get_min_size(tree)
    }

    fn get_max_size(&mut self) -> SizedVector2 {
        self.inner_mut().get_max_size()
    }

    fn do_layout(&mut self, tree: &mut WindowTree) {
        self.inner_mut().do_layout(tree);
    }

    fn on_init(&mut self, tree: &WindowTree) {
        self.inner_mut().on_init(tree);
    }

    fn add(&mut self, id: WindowId) -> bool {
        self.inner_mut().add(id)
    }

    fn remove(&mut self, id: WindowId) -> bool {
        self.inner_mut().remove(id)
    }
}

impl From<StackLayout> for LayoutKind {
    fn from(stack: StackLayout) -> Self {
        Self::Stack(stack)
    }
}

impl From<BorderLayout> for LayoutKind {
    fn from(border: BorderLayout) -> Self {
        Self::Border(border)
    }
}
