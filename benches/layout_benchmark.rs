//! Layout benchmark: measure full layout passes.
//!
//! Target: < 10µs for a 20-window border pass

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paneshell::{
    Anchor, BorderLayout, HeadlessHost, SizedVector2, StackLayout, Window, WindowsManager,
};

fn border_manager(per_region: usize) -> WindowsManager<HeadlessHost> {
    let mut manager = WindowsManager::new(HeadlessHost::new(400.0, 300.0), BorderLayout::default());
    for anchor in Anchor::ALL {
        for i in 0..per_region {
            let window = Window::new(format!("{anchor}_{i}"))
                .with_anchor(anchor)
                .with_min_size(SizedVector2::new(10.0, 4.0));
            let _ = manager.create_window(window);
        }
    }
    let _ = manager.on_init();
    manager
}

fn border_pass(c: &mut Criterion) {
    let mut manager = border_manager(4);

    c.bench_function("border_pass_20_windows", |b| {
        b.iter(|| {
            manager.do_layout();
            black_box(manager.size())
        });
    });
}

fn border_resize(c: &mut Criterion) {
    let mut manager = border_manager(4);
    let mut wide = false;

    c.bench_function("border_resize_20_windows", |b| {
        b.iter(|| {
            wide = !wide;
            let width = if wide { 400.0 } else { 320.0 };
            manager.on_resize(black_box(width), 300.0);
        });
    });
}

fn nested_stack_pass(c: &mut Criterion) {
    let mut manager = WindowsManager::new(HeadlessHost::new(400.0, 300.0), StackLayout::vertical());
    for row in 0..8 {
        let Ok(container) = manager
            .create_window(Window::new(format!("row_{row}")).with_layout(StackLayout::horizontal()))
        else {
            continue;
        };
        for column in 0..8 {
            let _ = manager.create_child_window(container, Window::new(format!("cell_{column}")));
        }
    }
    let _ = manager.on_init();

    c.bench_function("nested_stack_pass_64_windows", |b| {
        b.iter(|| {
            manager.do_layout();
            black_box(manager.size())
        });
    });
}

criterion_group!(benches, border_pass, border_resize, nested_stack_pass);
criterion_main!(benches);
