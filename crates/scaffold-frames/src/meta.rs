//! Site-wide meta header for the landing page.
//!
//! Besides the Open Graph and Twitter tags, the header doubles as the entry
//! frame of the sequence: its last button posts to step 1.

use crate::document::{BaseUrl, MetaTag};
use crate::responder::FRAME_ROUTE;
use crate::sequence::{FrameSequence, LinkButton, StepKind};
use crate::step::StepId;
use crate::templates::{PageLink, TemplateEngine};
use crate::{DEFAULT_TITLE, FRAME_VERSION};

/// Default site description.
pub const DEFAULT_DESCRIPTION: &str = "An open-source, up-to-date toolkit for building decentralized applications (dapps) on the Ethereum blockchain. It's designed to make it easier for developers to create and deploy smart contracts and build user interfaces that interact with those contracts.";

/// Head metadata for a site page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// Page title
    pub title: String,
    /// Page description
    pub description: String,
    /// Social preview image, relative to the base URL
    pub image: String,
    /// Twitter card type
    pub twitter_card: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image: "og-image.png".to_string(),
            twitter_card: "summary_large_image".to_string(),
        }
    }
}

impl PageMeta {
    /// Meta tags for the page, entry frame included.
    pub fn tags(&self, base_url: &BaseUrl) -> Vec<MetaTag> {
        let image_url = base_url.join(&self.image);
        let mut tags = Vec::new();

        if !self.title.is_empty() {
            tags.push(MetaTag::property("og:title", &self.title));
            tags.push(MetaTag::name("twitter:title", &self.title));
        }

        if !self.description.is_empty() {
            tags.push(MetaTag::name("description", &self.description));
            tags.push(MetaTag::property("og:description", &self.description));
            tags.push(MetaTag::name("twitter:description", &self.description));
        }

        if !self.image.is_empty() {
            tags.push(MetaTag::property("og:image", image_url.clone()));
            tags.push(MetaTag::name(
                "twitter:image",
                base_url.join("twitterThumbnail.png"),
            ));

            tags.push(MetaTag::property("fc:frame", FRAME_VERSION));
            tags.push(MetaTag::property("fc:frame:image", image_url));

            for (i, link) in [LinkButton::github(), LinkButton::docs()].iter().enumerate() {
                let button = format!("fc:frame:button:{}", i + 1);
                tags.push(MetaTag::property(button.clone(), link.label.clone()));
                tags.push(MetaTag::property(format!("{button}:action"), "link"));
                tags.push(MetaTag::property(
                    format!("{button}:target"),
                    link.target.clone(),
                ));
            }

            tags.push(MetaTag::property("fc:frame:button:3", "Features →"));
            tags.push(MetaTag::property(
                "fc:frame:post_url",
                format!("{}?id={}", base_url.join(FRAME_ROUTE), StepId::FIRST),
            ));
        }

        if !self.twitter_card.is_empty() {
            tags.push(MetaTag::name("twitter:card", &self.twitter_card));
        }

        tags
    }

    /// Render the landing page.
    pub fn render(
        &self,
        engine: &TemplateEngine,
        base_url: &BaseUrl,
    ) -> Result<String, minijinja::Error> {
        let favicon = PageLink {
            rel: "icon".to_string(),
            kind: "image/png".to_string(),
            sizes: "32x32".to_string(),
            href: "/favicon.png".to_string(),
        };

        engine.render_page(&self.title, &self.tags(base_url), &[favicon])
    }
}
