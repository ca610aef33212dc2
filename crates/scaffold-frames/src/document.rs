//! Frame documents as ordered meta tags.

use std::fmt;

use serde::Serialize;

use crate::responder::FRAME_ROUTE;
use crate::sequence::{FrameStep, StepKind};
use crate::FRAME_VERSION;

/// Public origin of the deployment, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Origin used when no deployment host is configured.
    pub const LOCAL: &'static str = "http://localhost:3000";

    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self(url.trim_end_matches('/').to_string())
    }

    /// Base URL for a deployment host such as `my-app.vercel.app`.
    ///
    /// An empty or missing host gives the local development origin.
    pub fn from_host(host: Option<&str>) -> Self {
        match host.map(str::trim).filter(|h| !h.is_empty()) {
            Some(host) => Self::new(format!("https://{host}")),
            None => Self::local(),
        }
    }

    pub fn local() -> Self {
        Self::new(Self::LOCAL)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL for a site-relative path.
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::local()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which HTML attribute names the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaKey {
    /// `<meta property="...">` (Open Graph and frame tags)
    Property,
    /// `<meta name="...">` (description and Twitter tags)
    Name,
}

/// A single `<meta>` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub key: MetaKey,
    pub property: String,
    pub content: String,
}

impl MetaTag {
    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Property,
            property: property.into(),
            content: content.into(),
        }
    }

    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Name,
            property: name.into(),
            content: content.into(),
        }
    }
}

/// Everything needed to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameDocument {
    pub title: String,
    pub tags: Vec<MetaTag>,
}

impl FrameDocument {
    /// Assemble the document for a resolved step.
    pub fn for_step(step: &FrameStep<'_>, base_url: &BaseUrl, title: &str) -> Self {
        let image_url = base_url.join(&step.spec.image);

        let mut tags = vec![
            MetaTag::property("og:image", image_url.clone()),
            MetaTag::property("fc:frame", FRAME_VERSION),
            MetaTag::property("fc:frame:image", image_url),
        ];

        match &step.spec.kind {
            StepKind::Forward { label } => {
                tags.push(MetaTag::property("fc:frame:button:1", label.clone()));
                tags.push(MetaTag::property(
                    "fc:frame:post_url",
                    format!("{}?id={}", base_url.join(FRAME_ROUTE), step.next_id),
                ));
            }
            StepKind::Terminal { links } => {
                for (i, link) in links.iter().enumerate() {
                    let button = format!("fc:frame:button:{}", i + 1);
                    tags.push(MetaTag::property(button.clone(), link.label.clone()));
                    tags.push(MetaTag::property(format!("{button}:action"), "link"));
                    tags.push(MetaTag::property(
                        format!("{button}:target"),
                        link.target.clone(),
                    ));
                }
            }
        }

        Self {
            title: title.to_string(),
            tags,
        }
    }

    /// Content of the first tag with the given property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.property == property)
            .map(|t| t.content.as_str())
    }
}
