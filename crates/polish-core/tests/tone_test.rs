use polish_core::Tone;

#[test]
fn canonical_labels_roundtrip() {
    for tone in Tone::all() {
        assert_eq!(Tone::from_label(tone.as_str()), tone);
    }
}

#[test]
fn legacy_sales_alias_maps_to_growth() {
    assert_eq!(Tone::from_label("sales"), Tone::Growth);
    assert_eq!(Tone::from_label("SALES"), Tone::Growth);
}

#[test]
fn unknown_label_defaults_to_executive() {
    assert_eq!(Tone::from_label("piratical"), Tone::Executive);
    assert_eq!(Tone::from_label(""), Tone::Executive);
    assert_eq!(Tone::default(), Tone::Executive);
}

#[test]
fn labels_are_trimmed_and_case_insensitive() {
    assert_eq!(Tone::from_label("  Investor "), Tone::Investor);
    assert_eq!(Tone::from_label("CLARITY"), Tone::Clarity);
}

#[test]
fn serde_uses_lowercase_labels() {
    let json = serde_json::to_string(&Tone::Growth).unwrap();
    assert_eq!(json, "\"growth\"");
    let back: Tone = serde_json::from_str("\"technical\"").unwrap();
    assert_eq!(back, Tone::Technical);
}
