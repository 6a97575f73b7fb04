use super::*;

#[test]
fn centers_follow_row_major_layout() {
    let g = SquareGrid::new(3, 2.0).unwrap();
    assert_eq!(g.cell_count(), 9);
    assert_eq!(g.center_of(0), Point::new(0.0, 0.0));
    assert_eq!(g.center_of(1), Point::new(2.0, 0.0));
    assert_eq!(g.center_of(5), Point::new(4.0, 2.0));
    assert_eq!(g.center_of(8), Point::new(4.0, 4.0));
    assert_eq!(g.goal_index(), 8);
    assert_eq!(g.centers().len(), 9);
}

#[test]
fn bounds_cover_outer_cell_edges() {
    let g = SquareGrid::new(3, 2.0).unwrap();
    assert_eq!(g.bounds(), Rect::new(-1.0, -1.0, 5.0, 5.0));
    assert_eq!(g.center(), Point::new(2.0, 2.0));
    assert_eq!(g.cell_rect(4), Rect::new(1.0, 1.0, 3.0, 3.0));
}

#[test]
fn origin_and_translation_shift_every_center() {
    let g = SquareGrid::new(2, 1.0)
        .unwrap()
        .with_origin(Point::new(10.0, 5.0))
        .translated(Vec2::new(1.0, -1.0));
    assert_eq!(g.origin(), Point::new(11.0, 4.0));
    assert_eq!(g.center_of(3), Point::new(12.0, 5.0));
}

#[test]
fn rejects_bad_shapes() {
    assert!(matches!(
        SquareGrid::new(0, 1.0),
        Err(GridwalkError::InvalidGrid(_))
    ));
    assert!(matches!(
        SquareGrid::new(3, 0.0),
        Err(GridwalkError::InvalidGrid(_))
    ));
    assert!(SquareGrid::new(3, f64::NAN).is_err());
}

#[test]
fn dims_via_view_is_exact() {
    let g = SquareGrid::new(4, 1.5).unwrap();
    assert_eq!(GridView::dims(&g).unwrap(), 4);
    assert_eq!(g.dims(), 4);
    assert_eq!(g.cell_side(), 1.5);
}

#[test]
fn huge_dims_are_invalid_grid() {
    assert!(matches!(
        SquareGrid::new(usize::MAX, 1.0),
        Err(GridwalkError::InvalidGrid(_))
    ));
}

#[test]
fn deserialize_runs_the_same_checks_as_new() {
    let g = SquareGrid::new(3, 2.0)
        .unwrap()
        .with_origin(Point::new(1.0, 1.0));
    let mut v = serde_json::to_value(g).unwrap();
    let back: SquareGrid = serde_json::from_value(v.clone()).unwrap();
    assert_eq!(back, g);

    v["dims"] = serde_json::json!(0);
    assert!(serde_json::from_value::<SquareGrid>(v.clone()).is_err());
    v["dims"] = serde_json::json!(3);
    v["cell_side"] = serde_json::json!(-2.0);
    assert!(serde_json::from_value::<SquareGrid>(v).is_err());
}
