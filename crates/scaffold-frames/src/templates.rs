//! Template engine for frame and page documents.

use minijinja::{context, AutoEscape, Environment};

use crate::document::MetaTag;

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();

        // minijinja's html escaping also encodes `/`; URLs in attributes go through `attr` instead
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("attr", escape_attr);

        env.add_template("head.html", HEAD_TEMPLATE)?;
        env.add_template("frame.html", FRAME_TEMPLATE)?;
        env.add_template("page.html", PAGE_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render a frame document: title and meta tags, no body.
    pub fn render_frame(&self, title: &str, tags: &[MetaTag]) -> Result<String, minijinja::Error> {
        self.render("frame.html", title, tags, &[])
    }

    /// Render a full page head with extra `<link>` tags.
    pub fn render_page(
        &self,
        title: &str,
        tags: &[MetaTag],
        links: &[PageLink],
    ) -> Result<String, minijinja::Error> {
        self.render("page.html", title, tags, links)
    }

    fn render(
        &self,
        template: &str,
        title: &str,
        tags: &[MetaTag],
        links: &[PageLink],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            title => title,
            tags => tags,
            links => links,
        })
    }
}

/// A `<link>` element in the page head.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PageLink {
    pub rel: String,
    pub kind: String,
    pub sizes: String,
    pub href: String,
}

/// Escape a value for a double-quoted HTML attribute.
pub fn escape_attr(value: String) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

const HEAD_TEMPLATE: &str = r##"<title>{{ title | attr }}</title>
{% for tag in tags %}<meta {{ tag.key }}="{{ tag.property }}" content="{{ tag.content | attr }}" />
{% endfor %}"##;

const FRAME_TEMPLATE: &str = r##"<!DOCTYPE html><html><head>
{% include "head.html" %}</head></html>"##;

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{% include "head.html" %}{% for link in links %}<link rel="{{ link.rel }}" type="{{ link.kind }}" sizes="{{ link.sizes }}" href="{{ link.href | attr }}" />
{% endfor %}</head>
<body></body>
</html>"##;
