use serde::{Deserialize, Serialize};

/// Icon preselected when staging a new hub button.
pub const DEFAULT_BUTTON_ICON: &str = "study";

pub const PRIVACY_INTRO_EN: &str = "This website does not use cookies or tracking.";
pub const PRIVACY_DATA_PROCESSING_EN: &str = "We do not process any personal data.";
pub const PRIVACY_SERVER_LOGS_EN: &str =
    "For technical reasons, temporary connection data is stored.";

/// The single persisted document describing the whole site. Every field
/// defaults, so documents written by older schema versions deserialize
/// cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SiteContent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub subtitle_de: String,
    #[serde(default)]
    pub subtitle_en: String,
    #[serde(default)]
    pub status_de: String,
    #[serde(default)]
    pub status_en: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub vibe: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub instagram_url: String,
    #[serde(default)]
    pub hub_buttons: Vec<HubButton>,
    #[serde(default)]
    pub impressum: Impressum,
    #[serde(default)]
    pub privacy: Privacy,
}

/// One entry in the list of outbound links on the hub page. Order in
/// `SiteContent::hub_buttons` is display order; ids are not required to be
/// unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HubButton {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name_de: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub desc_de: String,
    #[serde(default)]
    pub desc_en: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Impressum {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub email: String,
    /// Always re-derived from `company` when the form is collected.
    #[serde(default)]
    pub responsible: String,
}

/// Privacy notice. The owner edits the German texts; the English texts fall
/// back to fixed strings when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Privacy {
    #[serde(default)]
    pub intro_de: String,
    #[serde(default = "default_intro_en")]
    pub intro_en: String,
    #[serde(default)]
    pub data_processing_de: String,
    #[serde(default = "default_data_processing_en")]
    pub data_processing_en: String,
    #[serde(default)]
    pub server_logs_de: String,
    #[serde(default = "default_server_logs_en")]
    pub server_logs_en: String,
}

impl Default for Privacy {
    fn default() -> Self {
        Self {
            intro_de: String::new(),
            intro_en: default_intro_en(),
            data_processing_de: String::new(),
            data_processing_en: default_data_processing_en(),
            server_logs_de: String::new(),
            server_logs_en: default_server_logs_en(),
        }
    }
}

fn default_intro_en() -> String {
    PRIVACY_INTRO_EN.to_string()
}

fn default_data_processing_en() -> String {
    PRIVACY_DATA_PROCESSING_EN.to_string()
}

fn default_server_logs_en() -> String {
    PRIVACY_SERVER_LOGS_EN.to_string()
}

/// Button id derived from the German name by stripping all whitespace.
/// Collisions are not checked.
pub fn derive_button_id(name_de: &str) -> String {
    name_de.chars().filter(|c| !c.is_whitespace()).collect()
}
