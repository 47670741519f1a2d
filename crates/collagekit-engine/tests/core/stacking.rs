use collagekit_core::FracRect;
use collagekit_engine::scene::{ItemKind, ItemTransform, SceneItem};
use collagekit_engine::stacking::{bring_to_front, enforce, Layer};

fn kinds(items: &[SceneItem]) -> Vec<Layer> {
    items.iter().map(Layer::of).collect()
}

#[test]
fn test_enforce_orders_images_borders_text_highlight() {
    let mut items = vec![
        SceneItem::text("top caption", ItemTransform::at(100.0, 40.0)),
        SceneItem::highlight(FracRect::new(0.0, 0.0, 0.5, 0.5)),
        SceneItem::image("photo.jpg", ItemTransform::at(200.0, 200.0), None),
        SceneItem::grid_border(FracRect::new(0.5, 0.0, 0.5, 1.0)),
        SceneItem::image("other.jpg", ItemTransform::at(400.0, 200.0), None),
    ];
    enforce(&mut items);
    assert_eq!(
        kinds(&items),
        vec![
            Layer::Images,
            Layer::Images,
            Layer::Borders,
            Layer::Text,
            Layer::Highlight
        ]
    );
}

#[test]
fn test_enforce_is_stable_within_a_layer() {
    let a = SceneItem::image("a.jpg", ItemTransform::at(0.0, 0.0), None);
    let b = SceneItem::image("b.jpg", ItemTransform::at(0.0, 0.0), None);
    let (a_id, b_id) = (a.id, b.id);
    let mut items = vec![a, SceneItem::highlight(FracRect::UNIT), b];

    enforce(&mut items);
    assert_eq!(items[0].id, a_id);
    assert_eq!(items[1].id, b_id);

    // Repeated enforcement changes nothing.
    let snapshot = items.clone();
    enforce(&mut items);
    assert_eq!(items, snapshot);
}

#[test]
fn test_bring_to_front_never_crosses_text() {
    let image = SceneItem::image("a.jpg", ItemTransform::at(0.0, 0.0), None);
    let image_id = image.id;
    let mut items = vec![
        image,
        SceneItem::image("b.jpg", ItemTransform::at(0.0, 0.0), None),
        SceneItem::text("caption", ItemTransform::at(0.0, 0.0)),
    ];
    bring_to_front(&mut items, image_id);

    assert_eq!(items[1].id, image_id);
    assert!(matches!(items[2].kind, ItemKind::Text { .. }));
}
