use crate::Result;
use postgrid_types::ConsentFlag;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONSENT_FILE_NAME: &str = "consent.json";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredConsent {
    cookie_consent: String,
}

/// Persisted cookie-consent choice.
///
/// Stored as `{"cookieConsent": "accepted"}`. No file means no choice yet.
#[derive(Debug, Clone)]
pub struct ConsentStore {
    path: PathBuf,
}

impl ConsentStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(CONSENT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<ConsentFlag> {
        if !self.path.exists() {
            return Ok(ConsentFlag::Unset);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let stored: StoredConsent = match serde_json::from_str(&content) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "unreadable consent file, treating as unset");
                return Ok(ConsentFlag::Unset);
            }
        };

        let flag = ConsentFlag::from_stored(&stored.cookie_consent);
        if flag == ConsentFlag::Unset {
            tracing::warn!(value = %stored.cookie_consent, "unknown consent value, treating as unset");
        }
        Ok(flag)
    }

    pub fn accept(&self) -> Result<()> {
        self.store(ConsentFlag::Accepted)
    }

    pub fn decline(&self) -> Result<()> {
        self.store(ConsentFlag::Declined)
    }

    fn store(&self, flag: ConsentFlag) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let stored = StoredConsent {
            cookie_consent: flag.as_str().to_string(),
        };
        std::fs::write(&self.path, serde_json::to_string(&stored)?)?;
        tracing::info!(consent = %flag, path = %self.path.display(), "consent recorded");
        Ok(())
    }
}
