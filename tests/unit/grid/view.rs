use super::*;

#[test]
fn center_list_derives_dims_from_square_count() {
    let centers: Vec<Point> = (0..4)
        .map(|i| Point::new(f64::from(i % 2), f64::from(i / 2)))
        .collect();
    let g = CenterList::new(centers, 1.0).unwrap();
    assert_eq!(g.dims().unwrap(), 2);
    assert_eq!(g.center_of(3), Point::new(1.0, 1.0));
    assert_eq!(g.centers().len(), 4);
}

#[test]
fn non_square_count_is_invalid_grid() {
    let g = CenterList::new(vec![Point::ORIGIN; 6], 1.0).unwrap();
    assert!(matches!(g.dims(), Err(GridwalkError::InvalidGrid(_))));

    let empty = CenterList::new(vec![], 1.0).unwrap();
    assert!(matches!(empty.dims(), Err(GridwalkError::InvalidGrid(_))));
}

#[test]
fn center_list_rejects_bad_side() {
    assert!(matches!(
        CenterList::new(vec![Point::ORIGIN], -1.0),
        Err(GridwalkError::InvalidGrid(_))
    ));
}

#[test]
fn references_are_views_too() {
    fn count<G: GridView>(g: G) -> usize {
        g.cell_count()
    }
    let g = CenterList::new(vec![Point::ORIGIN; 9], 2.0).unwrap();
    assert_eq!(count(&g), 9);
}

#[test]
fn deserialized_center_list_checks_side() {
    let ok: CenterList =
        serde_json::from_str(r#"{"centers":[{"x":0.0,"y":0.0}],"cell_side":1.0}"#).unwrap();
    assert_eq!(ok.cell_side(), 1.0);
    assert!(
        serde_json::from_str::<CenterList>(r#"{"centers":[],"cell_side":0.0}"#).is_err()
    );
}
