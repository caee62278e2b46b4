use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub modal: ModalSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
}

/// Texts and geometry of the dialog and its trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalSettings {
    pub trigger_label: String,
    pub heading: String,
    pub body: String,
    pub link_label: String,
    pub link_target: String,
    pub close_label: String,
    /// Panel size in cells, clamped to the screen at render time.
    pub width: u16,
    pub height: u16,
}

impl Default for ModalSettings {
    fn default() -> Self {
        Self {
            trigger_label: "Open Modal".to_string(),
            heading: "Modal Heading".to_string(),
            body: "This is a sample paragraph inside the modal. You can add any content here."
                .to_string(),
            link_label: "Learn more".to_string(),
            link_target: "https://example.com/modal".to_string(),
            close_label: "Close".to_string(),
            width: 50,
            height: 11,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            backdrop_bg: None,
            panel_bg: None,
            panel_fg: Some("white".to_string()),
            panel_border: Some("cyan".to_string()),
            heading_fg: Some("cyan".to_string()),
            link_fg: Some("light_blue".to_string()),
            focus_bg: Some("cyan".to_string()),
            focus_fg: Some("black".to_string()),
            hover_bg: Some("dark_gray".to_string()),
            muted_fg: Some("dark_gray".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
