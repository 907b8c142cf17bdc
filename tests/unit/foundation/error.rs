use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StrataError::construction("x")
            .to_string()
            .contains("construction error:")
    );
    assert!(
        StrataError::alignment("x")
            .to_string()
            .contains("alignment error:")
    );
    assert!(
        StrataError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        StrataError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(StrataError::render("x").to_string().contains("render error:"));
    assert!(
        StrataError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StrataError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
