//! Company branding configuration and its persisted form.
//!
//! The branding file is a flat JSON object:
//!
//! ```json
//! {
//!   "name": "Nom de Votre Entreprise",
//!   "address": "Adresse du Siège",
//!   "contact": "Téléphone | Email",
//!   "expertise": "Vos Domaines d'Expertise",
//!   "logoDataUrl": "data:image/png;base64,..."
//! }
//! ```
//!
//! Missing keys fall back to placeholder text. Saving rewrites the whole file.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default file name of the branding configuration.
pub const DEFAULT_CONFIG_FILE: &str = "branding.json";

/// Company identity stamped on every report letterhead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandingConfig {
    /// Company name
    pub name: String,
    /// Postal address
    pub address: String,
    /// Phone and e-mail line
    pub contact: String,
    /// Fields of expertise shown under the name
    pub tagline: String,
    /// Logo image bytes
    pub logo: Option<Vec<u8>>,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            name: "Nom de Votre Entreprise".to_string(),
            address: "Adresse du Siège".to_string(),
            contact: "Téléphone | Email".to_string(),
            tagline: "Vos Domaines d'Expertise".to_string(),
            logo: None,
        }
    }
}

/// On-disk shape of [`BrandingConfig`].
#[derive(Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StoredBranding {
    name: String,
    address: String,
    contact: String,
    expertise: String,
    logo_data_url: String,
}

impl Default for StoredBranding {
    fn default() -> Self {
        let defaults = BrandingConfig::default();
        Self {
            name: defaults.name,
            address: defaults.address,
            contact: defaults.contact,
            expertise: defaults.tagline,
            logo_data_url: String::new(),
        }
    }
}

impl BrandingConfig {
    /// Creates a configuration with placeholder text and no logo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the logo image.
    pub fn with_logo(mut self, data: Vec<u8>) -> Self {
        self.logo = Some(data);
        self
    }

    /// Parses the JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let stored: StoredBranding = serde_json::from_str(json)?;
        let logo = if stored.logo_data_url.trim().is_empty() {
            None
        } else {
            Some(decode_data_url(&stored.logo_data_url)?)
        };

        Ok(Self {
            name: stored.name,
            address: stored.address,
            contact: stored.contact,
            tagline: stored.expertise,
            logo,
        })
    }

    /// Serializes to the JSON form.
    pub fn to_json(&self) -> Result<String> {
        let stored = StoredBranding {
            name: self.name.clone(),
            address: self.address.clone(),
            contact: self.contact.clone(),
            expertise: self.tagline.clone(),
            logo_data_url: self.logo_data_url().unwrap_or_default(),
        };
        Ok(serde_json::to_string_pretty(&stored)?)
    }

    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!(
                "No branding file at {}, using placeholders",
                path.display()
            );
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| match e {
            Error::Config(message) => Error::Config(format!("{}: {}", path.display(), message)),
            other => other,
        })
    }

    /// Writes the configuration to `path`, replacing any previous content.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::debug!("Saved branding to {}", path.display());
        Ok(())
    }

    /// Returns the logo as a `data:` URL.
    pub fn logo_data_url(&self) -> Option<String> {
        self.logo.as_ref().map(|data| {
            let mime = image::guess_format(data)
                .map(|f| f.to_mime_type())
                .unwrap_or("application/octet-stream");
            format!("data:{};base64,{}", mime, STANDARD.encode(data))
        })
    }
}

/// Decodes a base64 `data:` URL into raw bytes.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let rest = url
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| Error::Config("logo is not a data URL".into()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::Config("data URL has no payload".into()))?;
    if !header.ends_with(";base64") {
        return Err(Error::Config(format!(
            "data URL is not base64 encoded: {}",
            header
        )));
    }
    STANDARD
        .decode(payload.trim())
        .map_err(|e| Error::Config(format!("invalid base64 in data URL: {}", e)))
}
