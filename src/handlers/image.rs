//! Image block handler.

use crate::engine::{HtmlBlockHandler, MarkdownBlockHandler};
use crate::error::Result;
use crate::model::Block;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ImagePayload {
    file: ImageFile,
    #[serde(default)]
    caption: String,
    #[serde(default, rename = "withBorder")]
    with_border: bool,
    #[serde(default, rename = "withBackground")]
    with_background: bool,
    #[serde(default)]
    stretched: bool,
}

#[derive(Debug, Deserialize)]
struct ImageFile {
    url: String,
}

/// CSS class names applied to rendered images.
///
/// Resolved once when the handler is built; every block the handler renders
/// uses the same configuration.
#[derive(Debug, Clone)]
pub struct ImageHandlerOptions {
    /// Class for images with `stretched` set.
    pub stretched_class: String,
    /// Class for images with `withBorder` set.
    pub border_class: String,
    /// Class for images with `withBackground` set.
    pub background_class: String,
}

impl Default for ImageHandlerOptions {
    fn default() -> Self {
        Self {
            stretched_class: "image-stretched".to_string(),
            border_class: "image-border".to_string(),
            background_class: "image-background".to_string(),
        }
    }
}

/// Renders `image` blocks.
///
/// Markdown output uses native image syntax when no display flags are set;
/// otherwise it falls back to the HTML fragment, since markdown cannot
/// express borders, backgrounds, or stretching.
pub struct ImageHandler {
    options: ImageHandlerOptions,
}

impl ImageHandler {
    /// Create an image handler with the preset class names.
    pub fn new() -> Self {
        Self::with_options(ImageHandlerOptions::default())
    }

    /// Create an image handler with custom class names.
    pub fn with_options(options: ImageHandlerOptions) -> Self {
        Self { options }
    }

    fn html_fragment(&self, image: &ImagePayload) -> String {
        let mut classes: Vec<&str> = Vec::new();
        if image.stretched {
            classes.push(&self.options.stretched_class);
        }
        if image.with_border {
            classes.push(&self.options.border_class);
        }
        if image.with_background {
            classes.push(&self.options.background_class);
        }

        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };

        format!(
            r#"<img src="{}" alt="{}"{}/>"#,
            image.file.url, image.caption, class_attr
        )
    }
}

impl Default for ImageHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlBlockHandler for ImageHandler {
    fn block_type(&self) -> &'static str {
        "image"
    }

    fn render_html(&self, block: &Block) -> Result<String> {
        let image: ImagePayload = block.decode()?;
        Ok(self.html_fragment(&image))
    }
}

impl MarkdownBlockHandler for ImageHandler {
    fn block_type(&self) -> &'static str {
        "image"
    }

    fn render_markdown(&self, block: &Block) -> Result<String> {
        let image: ImagePayload = block.decode()?;

        if !image.stretched && !image.with_border && !image.with_background {
            return Ok(format!(
                r#"![alt text]({} "{}")"#,
                image.file.url, image.caption
            ));
        }

        Ok(self.html_fragment(&image))
    }
}
