use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RingError::config("x")
            .to_string()
            .starts_with("config error:")
    );
    assert!(
        RingError::validation("x")
            .to_string()
            .starts_with("validation error:")
    );
    assert!(
        RingError::serde("x")
            .to_string()
            .starts_with("serialization error:")
    );
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: RingError = serde_json::from_str::<u32>("not json").unwrap_err().into();
    assert!(matches!(err, RingError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RingError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
