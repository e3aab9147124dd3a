//! Border Demo: a five-region terminal layout.
//!
//! Demonstrates:
//! - BorderLayout with a title bar, a status line and two side panels
//! - A nested horizontal stack in the center region
//! - Resizing the terminal re-runs layout
//!
//! Press ESC, `q` or Ctrl-C to exit. Set `RUST_LOG=debug` and redirect
//! stderr to see layout passes.

use paneshell::{
    Anchor, BorderConfig, BorderLayout, Grid4, Rgb, SizedVector2, StackConfig, StackLayout,
    TerminalHost, Vector2, Window, WindowStyle, WindowsManager,
};

fn main() -> paneshell::Result<()> {
    env_logger::init();

    let cells = StackConfig::new(Vector2::ZERO, Vector2::new(1.0, 0.0));
    let layout = BorderLayout::new(
        BorderConfig::default()
            .with_grid(Grid4::new(20.0, 16.0, 1.0, 1.0))
            .with_regions(StackConfig::tight()),
    );
    let mut manager = WindowsManager::new(TerminalHost::new()?, layout);

    manager.create_window(
        Window::new("header")
            .with_anchor(Anchor::North)
            .with_min_size(SizedVector2::new(0.0, 1.0))
            .with_style(WindowStyle::default().with_background(Rgb::new(52, 49, 42))),
    )?;
    manager.create_window(
        Window::new("files")
            .with_anchor(Anchor::West)
            .with_title_bar()
            .with_style(WindowStyle::default().with_title("Files").with_icon('▸')),
    )?;
    manager.create_window(
        Window::new("outline")
            .with_anchor(Anchor::East)
            .with_title_bar()
            .with_style(WindowStyle::default().with_title("Outline")),
    )?;
    manager.create_window(
        Window::new("status")
            .with_anchor(Anchor::South)
            .with_min_size(SizedVector2::new(0.0, 1.0))
            .with_style(WindowStyle::default().with_background(Rgb::new(127, 105, 85))),
    )?;

    let editors = manager.create_window(
        Window::new("editors").with_layout(StackLayout::horizontal().with_config(cells)),
    )?;
    for title in ["main.rs", "lib.rs"] {
        manager.create_child_window(
            editors,
            Window::new(title)
                .with_title_bar()
                .with_style(WindowStyle::default().with_background(Rgb::new(40, 38, 36))),
        )?;
    }

    manager.run()
}
