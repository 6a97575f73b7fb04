use super::*;

#[test]
fn grid_coord_index_roundtrip_row_major() {
    let c = GridCoord::new(1, 2);
    assert_eq!(c.to_index(3), 5);
    assert_eq!(GridCoord::from_index(5, 3), c);
    assert!(c.in_bounds(3));
    assert!(!GridCoord::new(3, 0).in_bounds(3));
}

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn frame_range_starting_at_has_requested_len() {
    let r = FrameRange::starting_at(FrameIndex(10), 4);
    assert_eq!(r.end, FrameIndex(14));
    assert!(FrameRange::starting_at(FrameIndex(3), 0).is_empty());
}

#[test]
fn fps_rejects_zero_and_converts_seconds() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_frames_floor(0.3), 9);
    assert_eq!(fps.secs_to_frames_floor(-1.0), 0);
    assert!((fps.frames_to_secs(15) - 0.5).abs() < 1e-12);
}

#[test]
fn secs_to_frames_absorbs_float_error() {
    let fps = Fps::new(100, 1).unwrap();
    assert_eq!(fps.secs_to_frames_floor(0.29), 29);
    assert_eq!(fps.secs_to_frames_floor(0.295), 29);
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_frames_floor(0.1), 3);
}

#[test]
fn premul_scales_channels_by_alpha() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c.a, 128);
    assert_eq!(c.r, 128);
    assert_eq!(c.g, 64);
    assert_eq!(c.b, 0);
    assert_eq!(
        Rgba8Premul::from_straight_rgba(10, 20, 30, 255),
        Rgba8Premul {
            r: 10,
            g: 20,
            b: 30,
            a: 255
        }
    );
}
