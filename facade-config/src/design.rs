//! Saved designs and share codes.
//!
//! A design file wraps one `FacadeConfig` with an id, a name and the schema
//! version. Share codes are the compact JSON config in URL-safe base64, small
//! enough to put in a link.

use anyhow::Context;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::{FacadeConfig, Seed, CONFIG_SCHEMA_VERSION};

/// File extension recommended for saved designs.
pub const DESIGN_FILE_EXT: &str = "facade.json";

/// v1 design file. Save/load this as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignFileV1 {
    pub design_id: Uuid,
    pub schema_version: String,
    pub name: String,
    pub config: FacadeConfig,

    /// Seed of the last randomization, if the design came from one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<Seed>,

    pub notes: Option<String>,
}

impl DesignFileV1 {
    pub fn new(name: impl Into<String>, config: FacadeConfig) -> Self {
        Self {
            design_id: Uuid::new_v4(),
            schema_version: CONFIG_SCHEMA_VERSION.to_string(),
            name: name.into(),
            config,
            seed: None,
            notes: None,
        }
    }
}

/// Serialize a config to compact JSON.
pub fn to_json(config: &FacadeConfig) -> serde_json::Result<String> {
    serde_json::to_string(config)
}

/// Parse a config from JSON.
pub fn from_json(json: &str) -> serde_json::Result<FacadeConfig> {
    serde_json::from_str(json)
}

/// Save a design to disk as pretty JSON.
pub fn save_design(path: impl AsRef<Path>, design: &DesignFileV1) -> anyhow::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(design).context("serialize design to json")?;
    fs::write(path, json).with_context(|| format!("write design file: {}", path.display()))?;

    tracing::info!(
        design_id = %design.design_id,
        path = %path.display(),
        "design saved"
    );
    Ok(())
}

/// Load a design from disk. The embedded config must pass validation.
pub fn load_design(path: impl AsRef<Path>) -> anyhow::Result<DesignFileV1> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read design file: {}", path.display()))?;
    let design: DesignFileV1 = serde_json::from_str(&data).context("parse design json")?;

    if design.schema_version != CONFIG_SCHEMA_VERSION {
        tracing::warn!(
            found = %design.schema_version,
            expected = CONFIG_SCHEMA_VERSION,
            "design schema version differs"
        );
    }

    design
        .config
        .validate()
        .with_context(|| format!("invalid config in {}", path.display()))?;

    tracing::debug!(design_id = %design.design_id, name = %design.name, "design loaded");
    Ok(design)
}

/// Encode a config as a URL-safe share code.
pub fn share_code(config: &FacadeConfig) -> anyhow::Result<String> {
    let json = to_json(config).context("serialize config for sharing")?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Decode and validate a share code.
pub fn from_share_code(code: &str) -> anyhow::Result<FacadeConfig> {
    let bytes = URL_SAFE_NO_PAD
        .decode(code.trim())
        .context("decode share code")?;
    let json = String::from_utf8(bytes).context("share code is not utf-8")?;
    let config = from_json(&json).context("parse shared config")?;
    config.validate().context("shared config is invalid")?;
    Ok(config)
}
