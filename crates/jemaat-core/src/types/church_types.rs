//! Church profile, pastoral team and landing slideshow

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChurchInfo {
    pub name: String,
    pub address: String,
    /// iframe src for the embedded map
    pub map_embed_url: String,
    pub whatsapp: String,
    /// Data URL or remote URL
    pub logo_url: String,
    pub vision: String,
    pub mission: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChurchInfoPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub map_embed_url: Option<String>,
    pub whatsapp: Option<String>,
    pub logo_url: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
}

impl ChurchInfoPatch {
    pub fn apply_to(&self, info: &mut ChurchInfo) {
        let fields = [
            (&self.name, &mut info.name),
            (&self.address, &mut info.address),
            (&self.map_embed_url, &mut info.map_embed_url),
            (&self.whatsapp, &mut info.whatsapp),
            (&self.logo_url, &mut info.logo_url),
            (&self.vision, &mut info.vision),
            (&self.mission, &mut info.mission),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pastor {
    pub id: String,
    pub name: String,
    pub role: String,
    pub photo_url: String,
}

/// Add-or-update form; an `id` naming an existing pastor updates it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PastorDraft {
    pub id: Option<String>,
    pub name: String,
    pub role: String,
    pub photo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlideshowImage {
    pub id: String,
    pub url: String,
    pub caption: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut info = ChurchInfo {
            name: "GSJA".to_string(),
            whatsapp: "62811".to_string(),
            ..Default::default()
        };
        ChurchInfoPatch {
            whatsapp: Some("62899".to_string()),
            ..Default::default()
        }
        .apply_to(&mut info);

        assert_eq!(info.name, "GSJA");
        assert_eq!(info.whatsapp, "62899");
    }
}
