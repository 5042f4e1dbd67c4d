use super::*;

#[test]
fn status_line_counts_features() {
    let one = DraftState::new(
        r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#,
    );
    assert_eq!(status_line(&one), "1 feature");
    assert_eq!(status_line(&DraftState::default()), "0 features");
}

#[test]
fn status_line_prefers_recorded_error() {
    let mut state = DraftState::new("{bad");
    state.record_error("draft is not valid GeoJSON".into());
    assert_eq!(status_line(&state), "Not applied: draft is not valid GeoJSON");
}

#[test]
fn status_line_flags_unparsable_draft() {
    assert_eq!(status_line(&DraftState::new("{bad")), "Draft does not parse");
}
