use super::*;

#[test]
fn modal_settings_defaults_describe_sample_dialog() {
    let modal = ModalSettings::default();
    assert_eq!(modal.trigger_label, "Open Modal");
    assert_eq!(modal.heading, "Modal Heading");
    assert_eq!(modal.link_label, "Learn more");
    assert_eq!(modal.close_label, "Close");
    assert_eq!((modal.width, modal.height), (50, 11));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn partial_modal_section_keeps_other_defaults() {
    let settings: Settings =
        serde_json::from_str(r#"{ "modal": { "heading": "Confirm", "width": 40 } }"#).unwrap();
    assert_eq!(settings.modal.heading, "Confirm");
    assert_eq!(settings.modal.width, 40);
    assert_eq!(settings.modal.height, 11);
    assert_eq!(settings.modal.close_label, "Close");
}

#[test]
fn unset_theme_colors_are_not_serialized() {
    let json = serde_json::to_string(&ThemeSettings::default()).unwrap();
    assert!(!json.contains("backdrop_bg"));
    assert!(json.contains("panel_border"));
}
