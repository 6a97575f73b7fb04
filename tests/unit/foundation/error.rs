use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GridwalkError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
    assert!(
        GridwalkError::invalid_grid("x")
            .to_string()
            .contains("invalid grid:")
    );
    assert!(
        GridwalkError::degenerate_segment("x")
            .to_string()
            .contains("degenerate segment:")
    );
    assert!(
        GridwalkError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GridwalkError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GridwalkError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
