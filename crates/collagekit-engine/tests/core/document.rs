use collagekit_engine::document::{
    DocumentSnapshot, GridVisualConfig, LayoutDescriptor, DOCUMENT_VERSION,
};
use collagekit_engine::filters::ImageFilter;
use collagekit_engine::grid::{GridTree, SplitDirection};
use collagekit_engine::overlay::{ShapeKind, ShapeOverlayStore};
use collagekit_engine::scene::{ItemKind, ItemTransform, SceneItem};

fn sample_items() -> Vec<SceneItem> {
    let mut image = SceneItem::image("photos/cat.jpg", ItemTransform::at(200.0, 150.0), None);
    if let Some(filters) = image.filters_mut() {
        filters.apply(ImageFilter::Saturation { amount: 0.4 });
        filters.apply(ImageFilter::Sepia);
    }
    vec![
        image,
        SceneItem::text("summer 2025", ItemTransform::at(320.0, 40.0)),
    ]
}

fn round_trip(layout: LayoutDescriptor) -> DocumentSnapshot {
    let snapshot =
        DocumentSnapshot::capture(&sample_items(), layout, GridVisualConfig::default());
    let json = snapshot.to_json().unwrap();
    DocumentSnapshot::from_json(&json).unwrap()
}

#[test]
fn test_round_trip_custom_grid_with_shapes() {
    let mut tree = GridTree::new();
    tree.split(tree.root_id(), SplitDirection::Horizontal);
    tree.set_ratio(tree.root_id(), 0.3);
    let mut shapes = ShapeOverlayStore::new();
    shapes.add(ShapeKind::Heart, 0.7, 0.3);

    let layout = LayoutDescriptor::CustomGridWithShapes {
        cells: tree.flatten(),
        shapes: shapes.regions().to_vec(),
    };
    let restored = round_trip(layout.clone());

    assert_eq!(restored.layout, layout);
    assert_eq!(restored.objects.len(), 2);
    assert_eq!(restored.version, DOCUMENT_VERSION);
}

#[test]
fn test_round_trip_custom_grid_only() {
    let mut tree = GridTree::new();
    tree.split(tree.root_id(), SplitDirection::Vertical);
    let layout = LayoutDescriptor::CustomGrid {
        cells: tree.flatten(),
    };
    let restored = round_trip(layout.clone());
    assert_eq!(restored.layout, layout);
    assert_eq!(restored.objects.len(), 2);
}

#[test]
fn test_round_trip_legacy_grid() {
    let restored = round_trip(LayoutDescriptor::Legacy { rows: 3, cols: 2 });
    assert_eq!(restored.layout, LayoutDescriptor::Legacy { rows: 3, cols: 2 });
}

#[test]
fn test_round_trip_preserves_transforms_and_filters() {
    let restored = round_trip(LayoutDescriptor::Legacy { rows: 1, cols: 1 });

    let ItemKind::Image { src, filters, .. } = &restored.objects[0].kind else {
        panic!("expected image first");
    };
    assert_eq!(src, "photos/cat.jpg");
    // Saturation then Sepia, in application order.
    assert_eq!(filters.len(), 2);
    assert_eq!(
        filters.entries()[0],
        ImageFilter::Saturation { amount: 0.4 }
    );
    assert_eq!(filters.entries()[1], ImageFilter::Sepia);

    assert_eq!(restored.objects[1].transform.left, 320.0);
    assert_eq!(restored.objects[1].transform.top, 40.0);
}

#[test]
fn test_stable_field_names() {
    let mut tree = GridTree::new();
    tree.split(tree.root_id(), SplitDirection::Horizontal);
    let snapshot = DocumentSnapshot::capture(
        &sample_items(),
        LayoutDescriptor::CustomGrid {
            cells: tree.flatten(),
        },
        GridVisualConfig::default(),
    );
    let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

    assert!(value.get("objects").is_some());
    assert!(value.get("gridConfig").is_some());
    // Unused layout keys are omitted, not null.
    assert!(value.get("customShapes").is_none());
    assert!(value.get("rows").is_none());
    assert_eq!(value["objects"][0]["type"], "image");
    assert_eq!(value["customGrid"].as_array().unwrap().len(), 2);
    assert_eq!(value["customGrid"][0]["width"], 0.5);
}

#[test]
fn test_version_field_tolerated_when_absent() {
    let snapshot =
        DocumentSnapshot::from_json(r#"{"objects": [], "rows": 2, "cols": 2}"#).unwrap();
    assert_eq!(snapshot.version, DOCUMENT_VERSION);
}

#[test]
fn test_file_backed_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collage.json");

    let snapshot = DocumentSnapshot::capture(
        &sample_items(),
        LayoutDescriptor::Legacy { rows: 2, cols: 2 },
        GridVisualConfig::default(),
    );
    std::fs::write(&path, snapshot.to_json().unwrap()).unwrap();

    let reloaded = DocumentSnapshot::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded.objects.len(), 2);
    assert_eq!(reloaded.saved_at, snapshot.saved_at);
}

#[test]
fn test_malformed_envelope_is_fatal() {
    assert!(DocumentSnapshot::from_json("not json at all").is_err());
    assert!(DocumentSnapshot::from_json(r#"{"gridConfig": {}}"#).is_err());
}
