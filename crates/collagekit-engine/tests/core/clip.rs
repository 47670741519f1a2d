use collagekit_engine::clip::ClipShape;
use collagekit_engine::grid::GridTree;
use collagekit_engine::overlay::{ShapeKind, ShapeOverlayStore};
use collagekit_engine::resolver::Layout;
use lyon::path::PathEvent;

#[test]
fn test_cell_clip_matches_region_exactly() {
    let tree = GridTree::new();
    let cells = tree.flatten();
    let layout = Layout {
        shapes: &[],
        cells: &cells,
        legacy_grid: None,
    };
    let bounds = layout.bounds_of(0, 640.0, 480.0).unwrap();
    let clip = ClipShape::for_bounds(&bounds);

    assert!(clip.is_absolute_positioned());
    assert_eq!(clip.size(), (640.0, 480.0));
    assert_eq!(clip.center().x, 320.0);
    assert_eq!(clip.center().y, 240.0);
}

#[test]
fn test_shape_region_produces_matching_clip_kind() {
    let mut shapes = ShapeOverlayStore::new();
    shapes.add(ShapeKind::Heart, 0.5, 0.5);
    let layout = Layout {
        shapes: shapes.regions(),
        cells: &[],
        legacy_grid: Some((1, 1)),
    };
    let bounds = layout.bounds_of(0, 400.0, 400.0).unwrap();
    assert!(matches!(
        ClipShape::for_bounds(&bounds),
        ClipShape::Heart { .. }
    ));
}

#[test]
fn test_outline_paths_are_closed() {
    let bounds = collagekit_engine::resolver::RegionBounds {
        left: 0.0,
        top: 0.0,
        center_x: 50.0,
        center_y: 50.0,
        width: 100.0,
        height: 100.0,
        shape_kind: Some(ShapeKind::Star),
    };
    let path = ClipShape::for_bounds(&bounds).to_path();
    let closed = path
        .iter()
        .any(|e| matches!(e, PathEvent::End { close: true, .. }));
    assert!(closed);
}

#[test]
fn test_clip_serializes_with_shape_tag() {
    let clip = ClipShape::Circle {
        center: collagekit_core::Point::new(100.0, 75.0),
        diameter: 150.0,
    };
    let json = serde_json::to_value(&clip).unwrap();
    assert_eq!(json["shape"], "circle");
    assert_eq!(json["diameter"], 150.0);

    let back: ClipShape = serde_json::from_value(json).unwrap();
    assert_eq!(back, clip);
}
