use super::*;
use crate::foundation::core::{Point, Rect};

#[test]
fn grids_sit_side_by_side_with_shared_bottom() {
    let grids = layout_row(&[3, 4, 5], 2.0, 4.0).unwrap();
    assert_eq!(grids.len(), 3);

    assert_eq!(grids[0].origin(), Point::ORIGIN);
    assert_eq!(grids[0].bounds(), Rect::new(-1.0, -1.0, 5.0, 5.0));

    // 4x4: left edge at 5 + 4 = 9, bottom at 5.
    assert_eq!(grids[1].bounds(), Rect::new(9.0, -3.0, 17.0, 5.0));
    // 5x5: left edge at 17 + 4 = 21.
    assert_eq!(grids[2].bounds(), Rect::new(21.0, -5.0, 31.0, 5.0));

    for g in &grids {
        assert_eq!(g.bounds().y1, 5.0);
    }
}

#[test]
fn zero_gap_makes_grids_touch() {
    let grids = layout_row(&[2, 2], 1.0, 0.0).unwrap();
    assert_eq!(grids[0].bounds().x1, grids[1].bounds().x0);
}

#[test]
fn rejects_bad_layout_inputs() {
    assert!(matches!(
        layout_row(&[], 2.0, 1.0),
        Err(GridwalkError::InvalidGrid(_))
    ));
    assert!(matches!(
        layout_row(&[3, 0], 2.0, 1.0),
        Err(GridwalkError::InvalidGrid(_))
    ));
    assert!(layout_row(&[3], 2.0, -1.0).is_err());
    assert!(layout_row(&[3], -2.0, 1.0).is_err());
}
