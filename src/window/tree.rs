//! WindowTree: arena-backed composite tree.
//!
//! Windows live in slots addressed by [`WindowId`]. Each window keeps an
//! insertion-ordered map of child names, and that order is the order
//! layouts distribute space in. Slots of destroyed windows are never
//! reused, so a stale id can only fail lookups.

use super::error::TreeError;
use super::naming;
use super::node::{Window, WindowId};
use crate::layout::Layout;

/// Owner of every window in a managed tree.
#[derive(Debug, Default)]
pub struct WindowTree {
    slots: Vec<Option<Window>>,
}

impl WindowTree {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Store a detached window and return its id.
    pub fn insert(&mut self, mut window: Window) -> WindowId {
        window.parent = None;
        let id = WindowId(self.slots.len());
        self.slots.push(Some(window));
        id
    }

    /// Number of live windows.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if no windows are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `id` refers to a live window.
    pub fn contains(&self, id: WindowId) -> bool {
        self.node(id).is_some()
    }

    /// Borrow a window.
    pub fn node(&self, id: WindowId) -> Option<&Window> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Mutably borrow a window.
    pub fn node_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Borrow a window, failing on stale ids.
    pub fn window(&self, id: WindowId) -> Result<&Window, TreeError> {
        self.node(id).ok_or(TreeError::UnknownWindow(id))
    }

    /// Mutably borrow a window, failing on stale ids.
    pub fn window_mut(&mut self, id: WindowId) -> Result<&mut Window, TreeError> {
        self.node_mut(id).ok_or(TreeError::UnknownWindow(id))
    }

    /// The name `name` would receive if added under `parent` now.
    pub fn unique_name(&self, parent: WindowId, name: &str) -> Result<String, TreeError> {
        let parent = self.window(parent)?;
        Ok(naming::unique_name(name, |candidate| {
            parent.children.contains_key(candidate)
        }))
    }

    /// Attach `child` under `parent` and return the name it was stored under.
    ///
    /// A name already used by a sibling is rewritten first (see
    /// [`unique_name`](Self::unique_name)).
    pub fn add(&mut self, parent: WindowId, child: WindowId) -> Result<String, TreeError> {
        self.window(parent)?;
        let node = self.window(child)?;
        if node.parent.is_some() {
            return Err(TreeError::AlreadyAttached { name: node.name().to_string() });
        }
        if child == parent || self.is_ancestor(child, parent) {
            return Err(TreeError::Cycle { name: node.name().to_string() });
        }

        let requested = node.name().to_string();
        let name = self.unique_name(parent, &requested)?;
        if name != requested {
            log::debug!("renamed window {requested} to {name} to keep siblings unique");
        }

        let node = self.window_mut(child)?;
        node.set_name(name.clone());
        node.parent = Some(parent);
        self.window_mut(parent)?.children.insert(name.clone(), child);
        Ok(name)
    }

    /// Detach `child` from `parent`.
    ///
    /// The child keeps its own subtree and becomes a detached root. It is
    /// also dropped from the parent's own layout.
    pub fn remove(&mut self, parent: WindowId, child: WindowId) -> Result<(), TreeError> {
        let name = self.window(child)?.name().to_string();
        let owner = self.window_mut(parent)?;
        if owner.children.get(&name) != Some(&child) {
            return Err(TreeError::NotFound(name));
        }
        owner.children.shift_remove(&name);
        if let Some(layout) = owner.layout_mut() {
            layout.remove(child);
        }
        self.window_mut(child)?.parent = None;
        Ok(())
    }

    /// Detach the direct child called `name` and return its id.
    pub fn remove_by_name(&mut self, parent: WindowId, name: &str) -> Result<WindowId, TreeError> {
        let child = self
            .window(parent)?
            .children
            .get(name)
            .copied()
            .ok_or_else(|| TreeError::NotFound(name.to_string()))?;
        self.remove(parent, child)?;
        Ok(child)
    }

    /// Detach `id` from its parent and free it together with its subtree.
    ///
    /// Returns the freed ids in pre-order.
    pub fn destroy(&mut self, id: WindowId) -> Result<Vec<WindowId>, TreeError> {
        if let Some(parent) = self.window(id)?.parent {
            self.remove(parent, id)?;
        }
        let freed = self.descendants(id);
        for window in &freed {
            self.slots[window.0] = None;
        }
        Ok(freed)
    }

    /// Find a window by name below `from`.
    ///
    /// Direct children are checked first, then each child's subtree in
    /// insertion order.
    pub fn get(&self, from: WindowId, name: &str) -> Option<WindowId> {
        let node = self.node(from)?;
        if let Some(id) = node.children.get(name) {
            return Some(*id);
        }
        node.children.values().find_map(|child| self.get(*child, name))
    }

    /// Check if `parent` is a composite with a direct child called `name`.
    pub fn is_exist(&self, parent: WindowId, name: &str) -> bool {
        self.node(parent)
            .is_some_and(|node| node.is_composite() && node.children.contains_key(name))
    }

    /// Walk parents up to the managing window, or to the topmost ancestor
    /// when the tree has no manager.
    pub fn get_manager(&self, id: WindowId) -> Option<WindowId> {
        let mut current = id;
        loop {
            let node = self.node(current)?;
            if node.is_windows_manager() {
                return Some(current);
            }
            match node.parent {
                Some(parent) => current = parent,
                None => return Some(current),
            }
        }
    }

    /// Direct children of `id` in insertion order.
    pub fn children(&self, id: WindowId) -> Vec<WindowId> {
        self.node(id)
            .map(|node| node.children.values().copied().collect())
            .unwrap_or_default()
    }

    /// `id` and everything below it, pre-order.
    pub fn descendants(&self, id: WindowId) -> Vec<WindowId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.node(current) else {
                continue;
            };
            out.push(current);
            stack.extend(node.children.values().rev().copied());
        }
        out
    }

    /// Check if `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: WindowId, id: WindowId) -> bool {
        let mut current = self.node(id).and_then(Window::parent);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.node(parent).and_then(Window::parent);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StackLayout;

    fn tree_with_root() -> (WindowTree, WindowId) {
        let mut tree = WindowTree::new();
        let root = tree.insert(Window::manager("WindowsManager"));
        (tree, root)
    }

    #[test]
    fn test_add_sets_parent() {
        let (mut tree, root) = tree_with_root();
        let a = tree.insert(Window::new("Panel"));

        let name = tree.add(root, a).unwrap();

        assert_eq!(name, "Panel");
        assert_eq!(tree.node(a).unwrap().parent(), Some(root));
        assert_eq!(tree.children(root), vec![a]);
    }

    #[test]
    fn test_add_renames_collisions() {
        let (mut tree, root) = tree_with_root();
        let names: Vec<String> = (0..3)
            .map(|_| {
                let id = tree.insert(Window::new("Panel"));
                tree.add(root, id).unwrap()
            })
            .collect();

        assert_eq!(names, ["Panel", "Panel_1", "Panel_2"]);
        let stored: Vec<&str> = tree.node(root).unwrap().children().map(|(n, _)| n).collect();
        assert_eq!(stored, ["Panel", "Panel_1", "Panel_2"]);
    }

    #[test]
    fn test_unique_name_does_not_mutate() {
        let (mut tree, root) = tree_with_root();
        let a = tree.insert(Window::new("Panel"));
        tree.add(root, a).unwrap();

        assert_eq!(tree.unique_name(root, "Panel").unwrap(), "Panel_1");
        assert_eq!(tree.unique_name(root, "Other").unwrap(), "Other");
        assert_eq!(tree.node(root).unwrap().child_count(), 1);
    }

    #[test]
    fn test_add_rejects_second_parent() {
        let (mut tree, root) = tree_with_root();
        let other = tree.insert(Window::new("Other"));
        let a = tree.insert(Window::new("a"));
        tree.add(root, a).unwrap();

        let err = tree.add(other, a).unwrap_err();
        assert_eq!(err, TreeError::AlreadyAttached { name: "a".to_string() });
    }

    #[test]
    fn test_add_rejects_cycles() {
        let (mut tree, root) = tree_with_root();
        let a = tree.insert(Window::new("a"));
        tree.add(root, a).unwrap();

        assert!(matches!(tree.add(a, root), Err(TreeError::Cycle { .. })));
        assert!(matches!(tree.add(a, a), Err(TreeError::AlreadyAttached { .. })));

        let lone = tree.insert(Window::new("lone"));
        assert!(matches!(tree.add(lone, lone), Err(TreeError::Cycle { .. })));
    }

    #[test]
    fn test_remove_detaches() {
        let (mut tree, root) = tree_with_root();
        let a = tree.insert(Window::new("a"));
        tree.add(root, a).unwrap();

        tree.remove(root, a).unwrap();

        assert!(tree.node(a).unwrap().is_root());
        assert!(tree.children(root).is_empty());
        assert!(tree.contains(a));
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let (mut tree, root) = tree_with_root();
        let a = tree.insert(Window::new("a"));

        assert_eq!(tree.remove(root, a), Err(TreeError::NotFound("a".to_string())));
        assert_eq!(
            tree.remove_by_name(root, "ghost"),
            Err(TreeError::NotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_remove_drops_from_parent_layout() {
        let (mut tree, root) = tree_with_root();
        let container = tree.insert(Window::new("box").with_layout(StackLayout::vertical()));
        tree.add(root, container).unwrap();
        let a = tree.insert(Window::new("a"));
        tree.add(container, a).unwrap();
        tree.node_mut(container).unwrap().layout_mut().unwrap().add(a);

        tree.remove(container, a).unwrap();

        let layout = tree.node(container).unwrap().layout().unwrap();
        assert!(layout.children().is_empty());
    }

    #[test]
    fn test_get_recurses_depth_first() {
        let (mut tree, root) = tree_with_root();
        let a = tree.insert(Window::new("a"));
        let b = tree.insert(Window::new("b"));
        let deep = tree.insert(Window::new("deep"));
        tree.add(root, a).unwrap();
        tree.add(root, b).unwrap();
        tree.add(b, deep).unwrap();

        assert_eq!(tree.get(root, "a"), Some(a));
        assert_eq!(tree.get(root, "deep"), Some(deep));
        assert_eq!(tree.get(root, "missing"), None);
        assert_eq!(tree.get(a, "deep"), None);
    }

    #[test]
    fn test_get_manager_walks_to_root() {
        let (mut tree, root) = tree_with_root();
        let a = tree.insert(Window::new("a"));
        let b = tree.insert(Window::new("b"));
        tree.add(root, a).unwrap();
        tree.add(a, b).unwrap();

        assert_eq!(tree.get_manager(b), Some(root));
        assert_eq!(tree.get_manager(root), Some(root));

        let lone = tree.insert(Window::new("lone"));
        assert_eq!(tree.get_manager(lone), Some(lone));
    }

    #[test]
    fn test_is_exist_requires_composite() {
        let (mut tree, root) = tree_with_root();
        let leaf = tree.insert(Window::new("leaf"));
        let inner = tree.insert(Window::new("inner"));
        tree.add(root, leaf).unwrap();
        tree.add(leaf, inner).unwrap();

        assert!(tree.is_exist(root, "leaf"));
        assert!(!tree.is_exist(leaf, "inner"));
    }

    #[test]
    fn test_destroy_frees_subtree() {
        let (mut tree, root) = tree_with_root();
        let a = tree.insert(Window::new("a"));
        let b = tree.insert(Window::new("b"));
        tree.add(root, a).unwrap();
        tree.add(a, b).unwrap();

        let freed = tree.destroy(a).unwrap();

        assert_eq!(freed, vec![a, b]);
        assert!(!tree.contains(a));
        assert!(!tree.contains(b));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.window(a).unwrap_err(), TreeError::UnknownWindow(a));
    }

    #[test]
    fn test_descendants_preorder() {
        let (mut tree, root) = tree_with_root();
        let a = tree.insert(Window::new("a"));
        let a1 = tree.insert(Window::new("a1"));
        let b = tree.insert(Window::new("b"));
        tree.add(root, a).unwrap();
        tree.add(a, a1).unwrap();
        tree.add(root, b).unwrap();

        assert_eq!(tree.descendants(root), vec![root, a, a1, b]);
    }
}
