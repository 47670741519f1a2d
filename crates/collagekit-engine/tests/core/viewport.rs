use collagekit_engine::grid::{GridTree, SplitDirection};
use collagekit_engine::resolver::Layout;
use collagekit_engine::viewport::DisplayViewport;

#[test]
fn test_native_viewport_is_identity() {
    let vp = DisplayViewport::native(800.0, 600.0);
    assert_eq!(vp.scale(), 1.0);
    assert_eq!(vp.display_to_canvas(123.0, 456.0), (123.0, 456.0));
}

#[test]
fn test_resize_updates_scale() {
    let mut vp = DisplayViewport::native(1000.0, 500.0);
    vp.set_rendered(250.0, 125.0);
    assert_eq!(vp.scale(), 0.25);
    assert_eq!(vp.canvas_to_display(1000.0, 500.0), (250.0, 125.0));
}

#[test]
fn test_drop_point_resolves_through_viewport() {
    // The canvas is rendered at half size; a drop at display (150, 100)
    // must land in the right-hand cell of the native 800x600 canvas.
    let vp = DisplayViewport::new(800.0, 600.0, 400.0, 300.0);
    let mut tree = GridTree::new();
    tree.split(tree.root_id(), SplitDirection::Horizontal);
    let cells = tree.flatten();
    let layout = Layout {
        shapes: &[],
        cells: &cells,
        legacy_grid: None,
    };

    let (cx, cy) = vp.display_to_canvas(150.0, 100.0);
    assert_eq!((cx, cy), (300.0, 200.0));
    assert_eq!(layout.resolve_address(cx, cy, 800.0, 600.0), Some(0));

    let (cx, cy) = vp.display_to_canvas(350.0, 100.0);
    assert_eq!(layout.resolve_address(cx, cy, 800.0, 600.0), Some(1));
}
