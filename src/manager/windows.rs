//! `WindowsManager`: owns the tree, the top-level layout and the host.

use super::ManagerConfig;
use crate::error::Result;
use crate::geometry::{Rect, SizedVector2};
use crate::host::{Host, HostEvent};
use crate::layout::{Layout, LayoutKind};
use crate::style::WindowStyle;
use crate::window::{TreeError, Window, WindowId, WindowTree};

const ROOT_NAME: &str = "WindowsManager";

/// Root of a managed window tree.
///
/// The manager node is the tree root and holds the screen size. Windows
/// created through [`create_window`](Self::create_window) are its direct
/// children and are arranged by the top-level layout; nested windows are
/// arranged by their container's own layout.
///
/// # Example
///
/// ```
/// use paneshell::{Anchor, BorderLayout, HeadlessHost, Window, WindowsManager};
///
/// let mut manager = WindowsManager::new(HeadlessHost::new(80.0, 24.0), BorderLayout::default());
/// let status = manager.create_window(Window::new("status").with_anchor(Anchor::South))?;
/// manager.on_init()?;
/// assert!(manager.window(status)?.size.width > 0.0);
/// # Ok::<(), paneshell::Error>(())
/// ```
#[derive(Debug)]
pub struct WindowsManager<H: Host> {
    tree: WindowTree,
    root: WindowId,
    layout: LayoutKind,
    host: H,
    config: ManagerConfig,
    initialized: bool,
}

impl<H: Host> WindowsManager<H> {
    /// Create a manager with default configuration.
    pub fn new(host: H, layout: impl Into<LayoutKind>) -> Self {
        Self::with_config(host, layout, ManagerConfig::default())
    }

    /// Create a manager with custom configuration.
    pub fn with_config(host: H, layout: impl Into<LayoutKind>, config: ManagerConfig) -> Self {
        let mut tree = WindowTree::new();
        let root = tree.insert(Window::manager(ROOT_NAME));
        Self {
            tree,
            root,
            layout: layout.into(),
            host,
            config,
            initialized: false,
        }
    }

    /// Add a top-level window and return its id.
    ///
    /// The window's name may be rewritten to keep siblings unique.
    pub fn create_window(&mut self, window: Window) -> Result<WindowId> {
        let id = self.attach(self.root, window)?;
        self.layout.add(id);
        self.settle(id);
        Ok(id)
    }

    /// Add a window under the container `parent`, arranged by the
    /// container's own layout.
    pub fn create_child_window(&mut self, parent: WindowId, window: Window) -> Result<WindowId> {
        if parent == self.root {
            return self.create_window(window);
        }
        self.tree.window(parent)?;
        let id = self.attach(parent, window)?;
        match self.tree.window_mut(parent)?.layout_mut() {
            Some(layout) => {
                layout.add(id);
            }
            None => log::warn!("window {id:?} added under a container without a layout"),
        }
        self.settle(id);
        Ok(id)
    }

    /// Find the window called `name` anywhere in the tree and free it
    /// together with its subtree.
    pub fn destroy_window(&mut self, name: &str) -> Result<Vec<WindowId>> {
        let id = self
            .tree
            .get(self.root, name)
            .ok_or_else(|| TreeError::NotFound(name.to_string()))?;
        self.layout.remove(id);
        let freed = self.tree.destroy(id)?;
        log::debug!("destroyed {name} ({} windows)", freed.len());
        if self.initialized {
            self.do_layout();
        }
        self.mark_all_dirty();
        Ok(freed)
    }

    /// Detach `id` from its parent. The window survives as a detached root
    /// and is no longer arranged or drawn.
    pub fn remove_window(&mut self, id: WindowId) -> Result<()> {
        let window = self.tree.window(id)?;
        let parent = window
            .parent()
            .ok_or_else(|| TreeError::NotFound(window.name().to_string()))?;
        self.tree.remove(parent, id)?;
        if parent == self.root {
            self.layout.remove(id);
        }
        if self.initialized {
            self.do_layout();
        }
        self.mark_all_dirty();
        Ok(())
    }

    /// Find a window by name below the root.
    pub fn get(&self, name: &str) -> Option<WindowId> {
        self.tree.get(self.root, name)
    }

    /// Borrow a window.
    pub fn window(&self, id: WindowId) -> Result<&Window> {
        Ok(self.tree.window(id)?)
    }

    /// Mutably borrow a window.
    pub fn window_mut(&mut self, id: WindowId) -> Result<&mut Window> {
        Ok(self.tree.window_mut(id)?)
    }

    /// The managed tree.
    pub const fn tree(&self) -> &WindowTree {
        &self.tree
    }

    /// Id of the manager node.
    pub const fn root(&self) -> WindowId {
        self.root
    }

    /// The top-level layout.
    pub const fn layout(&self) -> &LayoutKind {
        &self.layout
    }

    /// The host.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to script events.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Configuration in use.
    pub const fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Check if `on_init` has run.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current screen size as last read from the host.
    pub fn size(&self) -> SizedVector2 {
        self.tree.node(self.root).map(|root| root.size).unwrap_or_default()
    }

    /// Read the screen size from the host.
    pub fn update_size(&mut self) -> Result<SizedVector2> {
        let size = self.host.screen_size()?;
        self.set_size(size);
        Ok(size)
    }

    /// Recompute every window rectangle from the current screen size.
    pub fn do_layout(&mut self) {
        self.layout.set_rect(Rect::from_size(self.size()));
        self.layout.do_layout(&mut self.tree);
    }

    /// Size from the host, run the first layout pass and initialize every
    /// window in pre-order.
    pub fn on_init(&mut self) -> Result<()> {
        let size = self.update_size()?;
        log::debug!("manager init at {size:?} with {} windows", self.tree.len() - 1);
        self.layout.on_init(&self.tree);
        self.do_layout();
        for id in self.tree.descendants(self.root) {
            if let Some(window) = self.tree.node_mut(id) {
                window.on_init();
            }
        }
        self.initialized = true;
        Ok(())
    }

    /// Apply a new screen size and re-run layout.
    ///
    /// Every window's `on_resize` then receives its own laid-out extent, not
    /// the screen size, so a hook sees the rect it will be drawn into.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        log::debug!("manager resize to {width}x{height}");
        self.set_size(SizedVector2::new(width, height));
        self.do_layout();
        for id in self.tree.descendants(self.root) {
            if let Some(window) = self.tree.node_mut(id) {
                let size = window.size;
                window.on_resize(size.width, size.height);
            }
        }
    }

    /// Redraw the screen if any window asked for it. Returns whether a
    /// frame was presented.
    pub fn on_draw(&mut self) -> Result<bool> {
        let windows = self.tree.descendants(self.root);
        let dirty = windows
            .iter()
            .filter_map(|id| self.tree.node(*id))
            .any(Window::needs_redraw);
        if !dirty {
            return Ok(false);
        }

        let canvas = self.host.canvas();
        canvas.clear(self.config.palette.background);
        for id in windows.iter().skip(1) {
            if let Some(window) = self.tree.node(*id) {
                window.on_draw(canvas);
            }
        }
        for id in &windows {
            if let Some(window) = self.tree.node_mut(*id) {
                window.clear_redraw();
            }
        }
        self.host.present()?;
        Ok(true)
    }

    /// Drive the event loop until the host asks to close.
    pub fn run(&mut self) -> Result<()> {
        if !self.initialized {
            self.on_init()?;
        }
        self.on_draw()?;

        loop {
            match self.host.next_event(self.config.frame_interval) {
                Some(HostEvent::Resize { width, height }) => self.on_resize(width, height),
                Some(HostEvent::CloseRequested) => break,
                Some(HostEvent::Error(message)) => log::warn!("host error: {message}"),
                None => {}
            }
            self.on_draw()?;
        }

        log::debug!("manager loop finished");
        Ok(())
    }

    fn set_size(&mut self, size: SizedVector2) {
        if let Some(root) = self.tree.node_mut(self.root) {
            root.size = size;
        }
    }

    /// Store `window` under `parent` with a palette-derived style unless
    /// the caller picked its own colours.
    fn attach(&mut self, parent: WindowId, mut window: Window) -> Result<WindowId> {
        let defaults = WindowStyle::default();
        let style = window.style_mut();
        if style.background == defaults.background
            && style.title_background == defaults.title_background
            && style.title_color == defaults.title_color
        {
            let derived = WindowStyle::from_palette(&self.config.palette);
            style.background = derived.background;
            style.title_background = derived.title_background;
            style.title_color = derived.title_color;
        }

        let id = self.tree.insert(window);
        let name = self.tree.add(parent, id)?;
        log::debug!("created window {name} as {id:?}");
        Ok(id)
    }

    /// Bring a window added after init up to date.
    fn settle(&mut self, id: WindowId) {
        if !self.initialized {
            return;
        }
        self.do_layout();
        for id in self.tree.descendants(id) {
            if let Some(window) = self.tree.node_mut(id) {
                window.on_init();
            }
        }
    }

    fn mark_all_dirty(&mut self) {
        for id in self.tree.descendants(self.root) {
            if let Some(window) = self.tree.node_mut(id) {
                window.mark_dirty();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawCommand;
    use crate::error::Error;
    use crate::geometry::{Axis, Grid4, Vector2};
    use crate::host::HeadlessHost;
    use crate::layout::{BorderConfig, BorderLayout, StackConfig, StackLayout};
    use crate::style::{Palette, Rgb};
    use crate::window::Anchor;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 0.01, "{a} != {b}");
    }

    fn border_manager(width: f32, height: f32, grid: Grid4) -> WindowsManager<HeadlessHost> {
        let layout = BorderLayout::new(
            BorderConfig::default()
                .with_grid(grid)
                .with_regions(StackConfig::tight()),
        );
        WindowsManager::new(HeadlessHost::new(width, height), layout)
    }

    #[test]
    fn test_create_window_attaches_to_root() {
        let mut manager = border_manager(80.0, 24.0, Grid4::default());
        let id = manager.create_window(Window::new("editor")).unwrap();

        assert_eq!(manager.window(id).unwrap().parent(), Some(manager.root()));
        assert_eq!(manager.get("editor"), Some(id));
        assert_eq!(manager.layout().children(), &[id]);
    }

    #[test]
    fn test_create_window_keeps_names_unique() {
        let mut manager = border_manager(80.0, 24.0, Grid4::default());
        let a = manager.create_window(Window::new("Panel")).unwrap();
        let b = manager.create_window(Window::new("Panel")).unwrap();
        let c = manager.create_window(Window::new("Panel")).unwrap();

        assert_eq!(manager.window(a).unwrap().name(), "Panel");
        assert_eq!(manager.window(b).unwrap().name(), "Panel_1");
        assert_eq!(manager.window(c).unwrap().name(), "Panel_2");
    }

    #[test]
    fn test_create_window_applies_palette() {
        let palette = Palette {
            background: Rgb::new(1, 2, 3),
            ..Palette::default()
        };
        let config = ManagerConfig::default().with_palette(palette);
        let mut manager =
            WindowsManager::with_config(HeadlessHost::new(80.0, 24.0), BorderLayout::default(), config);

        let derived = manager.create_window(Window::new("a")).unwrap();
        let custom = manager
            .create_window(
                Window::new("b").with_style(WindowStyle::default().with_background(Rgb::WHITE)),
            )
            .unwrap();

        assert_eq!(manager.window(derived).unwrap().style().background, Rgb::new(1, 2, 3));
        assert_eq!(manager.window(custom).unwrap().style().background, Rgb::WHITE);
    }

    #[test]
    fn test_border_scenario_through_manager() {
        let mut manager = border_manager(800.0, 600.0, Grid4::new(100.0, 100.0, 50.0, 50.0));
        let west = manager
            .create_window(
                Window::new("tree")
                    .with_anchor(Anchor::West)
                    .with_min_size(SizedVector2::new(100.0, 0.0)),
            )
            .unwrap();
        let center = manager.create_window(Window::new("editor")).unwrap();

        manager.on_init().unwrap();

        assert_eq!(manager.size(), SizedVector2::new(800.0, 600.0));
        assert_eq!(manager.window(west).unwrap().rect(), Rect::from_xywh(0.0, 50.0, 100.0, 500.0));
        assert_eq!(manager.window(center).unwrap().rect(), Rect::from_xywh(100.0, 50.0, 600.0, 500.0));
        assert!(manager.window(west).unwrap().is_initialized());
    }

    #[test]
    fn test_stack_scenario_through_manager() {
        let layout = StackLayout::new(
            Axis::Horizontal,
            StackConfig::new(Vector2::ZERO, Vector2::splat(10.0)),
        );
        let mut manager = WindowsManager::new(HeadlessHost::new(300.0, 100.0), layout);
        let ids: Vec<WindowId> = (0..3)
            .map(|_| manager.create_window(Window::new("pane")).unwrap())
            .collect();

        manager.on_init().unwrap();

        for (id, x) in ids.iter().zip([0.0, 103.33, 206.67]) {
            let window = manager.window(*id).unwrap();
            assert_close(window.size.width, 93.33);
            assert_close(window.size.height, 100.0);
            assert_close(window.position.x, x);
        }
    }

    #[test]
    fn test_child_window_uses_container_layout() {
        let mut manager = WindowsManager::new(HeadlessHost::new(100.0, 40.0), StackLayout::vertical().with_config(StackConfig::tight()));
        let container = manager
            .create_window(Window::new("split").with_layout(StackLayout::horizontal().with_config(StackConfig::tight())))
            .unwrap();
        let left = manager.create_child_window(container, Window::new("left")).unwrap();
        let right = manager.create_child_window(container, Window::new("right")).unwrap();

        manager.on_init().unwrap();

        assert_eq!(manager.window(container).unwrap().rect(), Rect::from_xywh(0.0, 0.0, 100.0, 40.0));
        assert_eq!(manager.window(left).unwrap().rect(), Rect::from_xywh(0.0, 0.0, 50.0, 40.0));
        assert_eq!(manager.window(right).unwrap().rect(), Rect::from_xywh(50.0, 0.0, 50.0, 40.0));
        assert_eq!(manager.get("right"), Some(right));
    }

    #[test]
    fn test_remove_window_detaches() {
        let mut manager = border_manager(80.0, 24.0, Grid4::default());
        let id = manager.create_window(Window::new("log")).unwrap();

        manager.remove_window(id).unwrap();

        assert!(manager.window(id).unwrap().is_root());
        assert!(manager.layout().children().is_empty());
        assert_eq!(manager.get("log"), None);
        assert!(matches!(
            manager.remove_window(id),
            Err(Error::Tree(TreeError::NotFound(name))) if name == "log"
        ));
    }

    #[test]
    fn test_destroy_window_frees_subtree() {
        let mut manager = WindowsManager::new(HeadlessHost::new(80.0, 24.0), StackLayout::vertical());
        let container = manager
            .create_window(Window::new("split").with_layout(StackLayout::horizontal()))
            .unwrap();
        let child = manager.create_child_window(container, Window::new("left")).unwrap();

        let freed = manager.destroy_window("split").unwrap();

        assert_eq!(freed, vec![container, child]);
        assert!(manager.window(child).is_err());
        assert!(manager.layout().children().is_empty());
        assert!(matches!(
            manager.destroy_window("split"),
            Err(Error::Tree(TreeError::NotFound(_)))
        ));
    }

    #[test]
    fn test_removal_reflows_siblings() {
        let layout = StackLayout::new(Axis::Horizontal, StackConfig::new(Vector2::ZERO, Vector2::ZERO));
        let mut manager = WindowsManager::new(HeadlessHost::new(100.0, 20.0), layout);
        let a = manager.create_window(Window::new("a")).unwrap();
        let b = manager.create_window(Window::new("b")).unwrap();
        manager.on_init().unwrap();
        assert_close(manager.window(a).unwrap().size.width, 50.0);

        manager.remove_window(b).unwrap();
        assert_close(manager.window(a).unwrap().size.width, 100.0);

        manager.create_window(Window::new("c")).unwrap();
        assert_close(manager.window(a).unwrap().size.width, 50.0);

        manager.destroy_window("c").unwrap();
        assert_close(manager.window(a).unwrap().size.width, 100.0);
        assert!(manager.window(a).unwrap().needs_redraw());
    }

    #[test]
    fn test_on_resize_passes_each_window_its_own_extent() {
        let mut manager = border_manager(800.0, 600.0, Grid4::new(100.0, 100.0, 50.0, 50.0));
        let west = manager.create_window(Window::new("tree").with_anchor(Anchor::West)).unwrap();
        manager.on_init().unwrap();

        manager.on_resize(400.0, 300.0);

        let window = manager.window(west).unwrap();
        assert_close(window.size.width, 100.0);
        assert!(window.size.height < 300.0);
        assert!(window.needs_redraw());
    }

    #[test]
    fn test_window_added_after_init_is_laid_out() {
        let mut manager = WindowsManager::new(
            HeadlessHost::new(100.0, 20.0),
            StackLayout::horizontal().with_config(StackConfig::tight()),
        );
        let a = manager.create_window(Window::new("a")).unwrap();
        manager.on_init().unwrap();
        assert_eq!(manager.window(a).unwrap().size.width, 100.0);

        let b = manager.create_window(Window::new("b")).unwrap();
        assert_eq!(manager.window(a).unwrap().size.width, 50.0);
        assert_eq!(manager.window(b).unwrap().size.width, 50.0);
        assert!(manager.window(b).unwrap().is_initialized());
    }

    #[test]
    fn test_on_resize_reflows() {
        let mut manager = border_manager(800.0, 600.0, Grid4::new(100.0, 100.0, 50.0, 50.0));
        let center = manager.create_window(Window::new("editor")).unwrap();
        manager.on_init().unwrap();
        manager.on_draw().unwrap();

        manager.on_resize(400.0, 300.0);

        assert_eq!(manager.size(), SizedVector2::new(400.0, 300.0));
        assert_eq!(manager.window(center).unwrap().rect(), Rect::from_xywh(100.0, 50.0, 200.0, 200.0));
        assert!(manager.window(center).unwrap().needs_redraw());
    }

    #[test]
    fn test_on_draw_only_when_dirty() {
        let mut manager = border_manager(80.0, 24.0, Grid4::default());
        let id = manager.create_window(Window::new("editor")).unwrap();
        manager.on_init().unwrap();

        assert!(manager.on_draw().unwrap());
        assert!(!manager.on_draw().unwrap());
        assert_eq!(manager.host().frames(), 1);

        manager.window_mut(id).unwrap().mark_dirty();
        assert!(manager.on_draw().unwrap());
        assert_eq!(manager.host().frames(), 2);

        let commands = manager.host().recording().commands();
        assert!(matches!(commands[0], DrawCommand::Clear(color) if color == Palette::default().background));
        assert!(matches!(commands[1], DrawCommand::FillRect { rect, .. }
            if rect == manager.window(id).unwrap().rect()));
    }

    #[test]
    fn test_run_handles_resize_then_close() {
        let mut manager = border_manager(80.0, 24.0, Grid4::default());
        let id = manager.create_window(Window::new("editor")).unwrap();
        manager.host_mut().push_resize(100.0, 30.0);
        manager.host_mut().push_event(HostEvent::Error("transient".into()));

        manager.run().unwrap();

        assert!(manager.is_initialized());
        assert_eq!(manager.size(), SizedVector2::new(100.0, 30.0));
        assert_eq!(manager.window(id).unwrap().size.width, 100.0);
        // Initial frame plus the resize; the error does not dirty anything.
        assert_eq!(manager.host().frames(), 2);
    }
}
