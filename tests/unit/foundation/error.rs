use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixelseqError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PixelseqError::generation("x")
            .to_string()
            .contains("generation error:")
    );
    assert!(
        PixelseqError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixelseqError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
