//! Head tags for a product page.

use serde::Serialize;

use crate::meta::MetadataRecord;

/// Title and meta tags of the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadTags {
    /// Page title.
    pub title: Option<String>,
    /// `name`/`content` meta tags.
    pub meta: Vec<(String, String)>,
    /// `property`/`content` meta tags.
    pub properties: Vec<(String, String)>,
}

impl HeadTags {
    /// Create head tags with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Build the head of a product page.
    pub fn from_meta(meta: &MetadataRecord) -> Self {
        let mut head = Self::new(&meta.title)
            .with_meta("description", &meta.description)
            .with_property("og:title", &meta.title)
            .with_property("og:description", &meta.description)
            .with_property("og:type", &meta.kind)
            .with_property("og:url", &meta.url);

        if let Some(image) = &meta.image {
            head = head.with_property("og:image", image);
        }

        meta.custom
            .iter()
            .fold(head, |head, p| head.with_property(&p.property, &p.content))
    }

    /// Add a `name` meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a `property` meta tag.
    pub fn with_property(mut self, property: &str, content: &str) -> Self {
        self.properties
            .push((property.to_string(), content.to_string()));
        self
    }

    /// Content of a `property` meta tag.
    pub fn property(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, content)| content.as_str())
    }

    /// Render to HTML, one tag per line.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        for (property, content) in &self.properties {
            html.push_str(&format!(
                r#"<meta property="{}" content="{}">"#,
                html_escape(property),
                html_escape(content)
            ));
            html.push('\n');
        }

        html
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::MetaProperty;

    fn record() -> MetadataRecord {
        MetadataRecord {
            custom: vec![
                MetaProperty::new("product:price:amount", "20"),
                MetaProperty::new("product:isAvailable", "in stock"),
            ],
            description: "Soft cotton tee".to_string(),
            image: Some("https://cdn.example.com/tee.png".to_string()),
            title: "Tee".to_string(),
            kind: "product.item".to_string(),
            url: "https://shop.example.com/product/72".to_string(),
        }
    }

    #[test]
    fn test_from_meta() {
        let head = HeadTags::from_meta(&record());

        assert_eq!(head.title.as_deref(), Some("Tee"));
        assert_eq!(head.meta, vec![("description".to_string(), "Soft cotton tee".to_string())]);
        assert_eq!(head.property("og:type"), Some("product.item"));
        assert_eq!(head.property("og:image"), Some("https://cdn.example.com/tee.png"));
        assert_eq!(head.property("product:price:amount"), Some("20"));
    }

    #[test]
    fn test_no_image_tag_without_image() {
        let mut record = record();
        record.image = None;

        let head = HeadTags::from_meta(&record);
        assert_eq!(head.property("og:image"), None);
        assert!(!head.render().contains("og:image"));
    }

    #[test]
    fn test_render() {
        let html = HeadTags::from_meta(&record()).render();

        assert!(html.starts_with("<title>Tee</title>\n"));
        assert!(html.contains(r#"<meta name="description" content="Soft cotton tee">"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://shop.example.com/product/72">"#));
        assert!(html.contains(r#"<meta property="product:isAvailable" content="in stock">"#));
    }

    #[test]
    fn test_render_escapes() {
        let html = HeadTags::new("Tees & <Tops>")
            .with_meta("description", r#"The "best" tee"#)
            .render();

        assert!(html.contains("<title>Tees &amp; &lt;Tops&gt;</title>"));
        assert!(html.contains("The &quot;best&quot; tee"));
    }
}
