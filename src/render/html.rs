//! HTML page renderer.
//!
//! Renders sorted blocks into a single self-contained page using an embedded
//! Tera template. Each example is shown once with `$modifier` removed and
//! once per modifier with `$modifier` replaced by its markup class.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::{Result, StyleguideError};
use crate::types::Block;

use super::highlight::{highlight_html, style_defs};
use super::BlockView;

const TEMPLATE_NAME: &str = "styleguide.html";
const TEMPLATE: &str = include_str!("templates/styleguide.html");
const BASE_STYLE: &str = include_str!("templates/base.css");

/// Page-level settings.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    pub title: String,
    /// Stylesheet the documented components come from (used as `href`).
    pub stylesheet: Option<String>,
}

/// One example rendered with a modifier applied.
#[derive(Debug, Serialize)]
struct Variant<'a> {
    selector: &'a str,
    markup: String,
}

#[derive(Debug, Serialize)]
struct PageBlock<'a> {
    #[serde(flatten)]
    block: BlockView<'a>,
    anchor: String,
    depth: usize,
    heading: usize,
    plain_example: String,
    variants: Vec<Variant<'a>>,
    highlighted: String,
}

impl<'a> PageBlock<'a> {
    fn new(block: &'a Block) -> Self {
        let depth = block.section_key().map(|key| key.depth()).unwrap_or(1);

        let (plain_example, variants, highlighted) = if block.example().is_empty() {
            (String::new(), Vec::new(), String::new())
        } else {
            let variants = block
                .modifiers()
                .iter()
                .map(|modifier| Variant {
                    selector: modifier.selector(),
                    markup: block.example_with(modifier.markup_class()),
                })
                .collect();
            (block.example_with(""), variants, highlight_html(block.example()))
        };

        Self {
            block: BlockView::from(block),
            anchor: anchor(block.section()),
            depth,
            heading: (depth + 1).min(6),
            plain_example,
            variants,
            highlighted,
        }
    }
}

/// Render the full styleguide page.
pub fn render_html(blocks: &[Block], options: &HtmlOptions) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| render_error("Failed to load page template", &e))?;

    let pages: Vec<PageBlock<'_>> = blocks.iter().map(PageBlock::new).collect();

    let mut context = Context::new();
    context.insert("title", &options.title);
    context.insert("stylesheet", &options.stylesheet);
    context.insert("base_style", BASE_STYLE);
    context.insert("highlight_style", &style_defs(".highlight"));
    context.insert("blocks", &pages);

    tera.render(TEMPLATE_NAME, &context)
        .map_err(|e| render_error("Failed to render styleguide page", &e))
}

/// Element id for a section, e.g. `1.2` -> `section-1-2`.
fn anchor(section: &str) -> String {
    let trimmed = section.trim_end_matches('.');
    format!("section-{}", trimmed.replace('.', "-"))
}

fn render_error(context: &str, error: &tera::Error) -> StyleguideError {
    let mut message = format!("{}: {}", context, error);
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }

    StyleguideError::Render {
        message,
        help: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Modifier;

    fn options() -> HtmlOptions {
        HtmlOptions {
            title: "Acme UI".to_string(),
            stylesheet: Some("app.css".to_string()),
        }
    }

    fn button() -> Block {
        let modifiers: Vec<Modifier> = vec![
            ".primary - Main action".parse().unwrap(),
            ":hover - Hovered".parse().unwrap(),
        ];
        Block::new(
            "Button",
            "Use for actions & links",
            modifiers,
            "<button class=\"btn $modifier\">Save</button>",
            "1.2",
        )
    }

    #[test]
    fn test_anchor() {
        assert_eq!(anchor("1.2"), "section-1-2");
        assert_eq!(anchor("3."), "section-3");
    }

    #[test]
    fn test_render_page_shell() {
        let html = render_html(&[], &options()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Acme UI</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"app.css\">"));
        assert!(html.contains(".highlight .nt"));
    }

    #[test]
    fn test_render_without_stylesheet() {
        let options = HtmlOptions {
            title: "T".to_string(),
            stylesheet: None,
        };

        let html = render_html(&[], &options).unwrap();

        assert!(!html.contains("<link"));
    }

    #[test]
    fn test_render_block_with_variants() {
        let html = render_html(&[button()], &options()).unwrap();

        assert!(html.contains("id=\"section-1-2\""));
        assert!(html.contains("<h3 class=\"block-title\">1.2 Button</h3>"));
        assert!(html.contains("Use for actions &amp; links"));
        assert!(html.contains("<td>.primary</td><td>Main action</td>"));
        // plain example, then one per modifier
        assert!(html.contains("<button class=\"btn \">Save</button>"));
        assert!(html.contains("<button class=\"btn primary\">Save</button>"));
        assert!(html.contains("<button class=\"btn :hover\">Save</button>"));
        assert!(html.contains("<em class=\"block-example-modifier\">:hover</em>"));
        // highlighted source
        assert!(html.contains("<span class=\"nt\">button</span>"));
    }

    #[test]
    fn test_render_module_heading_only() {
        let module = Block::new("Forms", "", vec![], "", "2");

        let html = render_html(&[module], &options()).unwrap();

        assert!(html.contains("<h2 class=\"module-title\">2 Forms</h2>"));
        assert!(!html.contains("class=\"block\""));
        assert!(html.contains("class=\"toc-module\""));
    }

    #[test]
    fn test_render_keeps_block_order() {
        let blocks = vec![
            Block::new("First", "", vec![], "", "1"),
            Block::new("Second", "", vec![], "", "2"),
        ];

        let html = render_html(&blocks, &options()).unwrap();

        let first = html.find("module-title\">1 First").unwrap();
        let second = html.find("module-title\">2 Second").unwrap();
        assert!(first < second);
    }
}
