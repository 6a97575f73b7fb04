use super::*;

#[test]
fn deltas_are_unit_steps() {
    assert_eq!(Move::Right.delta(), (0, 1));
    assert_eq!(Move::Down.delta(), (1, 0));
    assert_eq!(Move::Down.step(GridCoord::new(1, 1)), GridCoord::new(2, 1));
}

#[test]
fn parse_and_display_notation() {
    let seq: MoveSequence = "r, r d\tD".parse().unwrap();
    assert_eq!(
        seq.moves(),
        &[Move::Right, Move::Right, Move::Down, Move::Down]
    );
    assert_eq!(seq.to_string(), "RRDD");
    assert_eq!(seq.rights(), 2);
    assert_eq!(seq.downs(), 2);
    assert!(seq.is_corner_to_corner(3));
    assert!(!seq.is_corner_to_corner(4));
}

#[test]
fn parse_rejects_unknown_letters() {
    let err = "RRX".parse::<MoveSequence>().unwrap_err();
    assert!(matches!(err, GridwalkError::InvalidArgument(_)));
    assert!(err.to_string().contains("position 2"));
}

#[test]
fn coords_include_start_cell() {
    let seq: MoveSequence = "RD".parse().unwrap();
    let coords: Vec<_> = seq.coords().collect();
    assert_eq!(
        coords,
        vec![
            GridCoord::new(0, 0),
            GridCoord::new(0, 1),
            GridCoord::new(1, 1)
        ]
    );

    let empty = MoveSequence::new(vec![]);
    assert!(empty.is_empty());
    assert_eq!(empty.coords().count(), 1);
    assert!(empty.is_corner_to_corner(1));
}

#[test]
fn ordering_puts_right_before_down() {
    let a: MoveSequence = "RD".parse().unwrap();
    let b: MoveSequence = "DR".parse().unwrap();
    assert!(a < b);
}

#[test]
fn serializes_as_plain_array() {
    let seq: MoveSequence = "RD".parse().unwrap();
    let json = serde_json::to_string(&seq).unwrap();
    assert_eq!(json, r#"["Right","Down"]"#);
}
