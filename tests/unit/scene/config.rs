use super::*;

#[test]
fn empty_document_uses_defaults() {
    let cfg = StoryboardConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, StoryboardConfig::default());
    assert_eq!(cfg.grid_sizes, vec![3, 4, 5]);
    assert_eq!(cfg.offset_fraction, 0.35);
}

#[test]
fn partial_document_overrides_fields() {
    let cfg = StoryboardConfig::from_json_str(
        r##"{
            "grid_sizes": [2, 6],
            "fps": { "num": 60, "den": 1 },
            "palette": { "from": "#000000", "to": "#ffffff" },
            "timing": [{ "draw_secs": 0.5, "fade_secs": 0.25 }]
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.grid_sizes, vec![2, 6]);
    assert_eq!(cfg.fps, Fps::new(60, 1).unwrap());
    assert_eq!(cfg.cell_side, 2.0);
    assert_eq!(cfg.timing_for(0), StrokeTiming::new(0.5, 0.25));
    assert_eq!(cfg.timing_for(3), StrokeTiming::new(0.5, 0.25));
}

#[test]
fn timing_falls_back_to_last_entry() {
    let cfg = StoryboardConfig::default();
    assert_eq!(cfg.timing_for(1), StrokeTiming::new(0.2, 0.15));
    assert_eq!(cfg.timing_for(7), StrokeTiming::new(0.15, 0.1));
}

#[test]
fn validation_rejects_out_of_range_values() {
    let cases = [
        r#"{"grid_sizes": []}"#,
        r#"{"grid_sizes": [1]}"#,
        r#"{"grid_sizes": [11]}"#,
        r#"{"cell_side": 0}"#,
        r#"{"offset_fraction": 0.5}"#,
        r#"{"gap": -1}"#,
        r#"{"fps": {"num": 0, "den": 1}}"#,
        r#"{"timing": []}"#,
        r#"{"timing": [{"draw_secs": 0, "fade_secs": 1}]}"#,
        r#"{"threads": 0}"#,
    ];
    for c in cases {
        assert!(
            matches!(
                StoryboardConfig::from_json_str(c),
                Err(GridwalkError::Validation(_))
            ),
            "{c}"
        );
    }
}

#[test]
fn malformed_json_is_serde_error() {
    assert!(matches!(
        StoryboardConfig::from_json_str("{"),
        Err(GridwalkError::Serde(_))
    ));
    assert!(matches!(
        StoryboardConfig::from_json_str(r#"{"grid_size": [3]}"#),
        Err(GridwalkError::Serde(_))
    ));
}

#[test]
fn missing_file_is_wrapped_io_error() {
    let err = StoryboardConfig::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, GridwalkError::Other(_)));
    assert!(err.to_string().contains("open config"));
}
