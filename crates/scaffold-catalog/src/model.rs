//! Extension records.

use serde::{Deserialize, Serialize};

/// An extension as shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Display name
    pub name: String,

    /// Free-form description (may contain markdown)
    pub description: String,

    /// Repository URL
    pub github: String,

    /// `npx create-eth` command that installs the extension
    pub install_command: String,

    /// Builder address, third-party extensions only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder: Option<String>,

    /// Co-builder addresses
    #[serde(default)]
    pub co_builders: Vec<String>,

    /// Demo video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// An entry of the curated `extensions.json` in create-eth.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedEntry {
    /// Value passed to `create-eth -e`
    pub extension_flag_value: String,

    /// Repository URL
    pub repository: String,

    /// Branch, when the extension does not live on the default branch
    #[serde(default)]
    pub branch: Option<String>,

    #[serde(default)]
    pub description: String,

    /// create-eth version; latest when absent
    #[serde(default)]
    pub version: Option<String>,

    /// Human readable name; the flag value when absent
    #[serde(default)]
    pub name: Option<String>,
}

/// A build of type "extension" from the BuidlGuidl API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildEntry {
    pub name: String,

    #[serde(default)]
    pub desc: String,

    /// GitHub URL, optionally with a `/tree/<branch>` tail
    pub branch: String,

    #[serde(default)]
    pub builder: Option<String>,

    #[serde(default)]
    pub co_builders: Option<Vec<String>>,

    #[serde(default)]
    pub video_url: Option<String>,
}
