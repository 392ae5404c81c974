use serde::{Deserialize, Serialize};

use crate::models::{
    Impressum, Privacy, SiteContent, PRIVACY_DATA_PROCESSING_EN, PRIVACY_INTRO_EN,
    PRIVACY_SERVER_LOGS_EN,
};

/// Flat snapshot of every editable field of the admin form. The English
/// subtitle/status and privacy texts are not exposed for editing; they are
/// carried over from the previous document when the form is collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub subtitle_de: String,
    #[serde(default)]
    pub status_de: String,
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
    pub impressum_company: String,
    #[serde(default)]
    pub impressum_address_line1: String,
    #[serde(default)]
    pub impressum_address_line2: String,
    #[serde(default)]
    pub impressum_country: String,
    #[serde(default)]
    pub impressum_email: String,
    #[serde(default)]
    pub privacy_intro_de: String,
    #[serde(default)]
    pub privacy_data_processing_de: String,
    #[serde(default)]
    pub privacy_server_logs_de: String,
}

impl ContentForm {
    /// Populates the form from a document. Missing fields are already empty
    /// strings on the document side, so nothing can leak as null.
    pub fn from_content(content: &SiteContent) -> Self {
        Self {
            name: content.name.clone(),
            email: content.email.clone(),
            address: content.address.clone(),
            subtitle_de: content.subtitle_de.clone(),
            status_de: content.status_de.clone(),
            age: content.age.clone(),
            vibe: content.vibe.clone(),
            location: content.location.clone(),
            github_url: content.github_url.clone(),
            instagram_url: content.instagram_url.clone(),
            impressum_company: content.impressum.company.clone(),
            impressum_address_line1: content.impressum.address_line1.clone(),
            impressum_address_line2: content.impressum.address_line2.clone(),
            impressum_country: content.impressum.country.clone(),
            impressum_email: content.impressum.email.clone(),
            privacy_intro_de: content.privacy.intro_de.clone(),
            privacy_data_processing_de: content.privacy.data_processing_de.clone(),
            privacy_server_logs_de: content.privacy.server_logs_de.clone(),
        }
    }

    /// Rebuilds a complete document from the form. The button list is taken
    /// from `previous` (it is edited through the button editor, not the
    /// form), and English texts without an editable counterpart keep their
    /// previous value or fall back to the documented defaults, so a save can
    /// never drop the English translations.
    pub fn collect(&self, previous: &SiteContent) -> SiteContent {
        SiteContent {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            subtitle_de: self.subtitle_de.clone(),
            subtitle_en: previous.subtitle_en.clone(),
            status_de: self.status_de.clone(),
            status_en: previous.status_en.clone(),
            age: self.age.clone(),
            vibe: self.vibe.clone(),
            location: self.location.clone(),
            github_url: self.github_url.clone(),
            instagram_url: self.instagram_url.clone(),
            hub_buttons: previous.hub_buttons.clone(),
            impressum: Impressum {
                company: self.impressum_company.clone(),
                address_line1: self.impressum_address_line1.clone(),
                address_line2: self.impressum_address_line2.clone(),
                country: self.impressum_country.clone(),
                email: self.impressum_email.clone(),
                responsible: self.impressum_company.clone(),
            },
            privacy: Privacy {
                intro_de: self.privacy_intro_de.clone(),
                intro_en: preserved_or(&previous.privacy.intro_en, PRIVACY_INTRO_EN),
                data_processing_de: self.privacy_data_processing_de.clone(),
                data_processing_en: preserved_or(
                    &previous.privacy.data_processing_en,
                    PRIVACY_DATA_PROCESSING_EN,
                ),
                server_logs_de: self.privacy_server_logs_de.clone(),
                server_logs_en: preserved_or(&previous.privacy.server_logs_en, PRIVACY_SERVER_LOGS_EN),
            },
        }
    }
}

fn preserved_or(previous: &str, fallback: &str) -> String {
    if previous.is_empty() {
        fallback.to_string()
    } else {
        previous.to_string()
    }
}
