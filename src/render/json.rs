//! JSON export of parsed blocks.

use crate::error::{Result, StyleguideError};
use crate::types::Block;

use super::BlockView;

/// Serialize blocks as a pretty-printed JSON array, in the given order.
pub fn render_json(blocks: &[Block]) -> Result<String> {
    let views: Vec<BlockView<'_>> = blocks.iter().map(BlockView::from).collect();

    serde_json::to_string_pretty(&views).map_err(|e| StyleguideError::Render {
        message: format!("Failed to serialize blocks: {}", e),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    #[test]
    fn test_render_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_render_block_fields() {
        let block = Block::new(
            "Button",
            "Clickable",
            vec![":hover - Hovered".parse().unwrap()],
            "<a class=\"$modifier\">x</a>",
            "1.2",
        );

        let value: Value = serde_json::from_str(&render_json(&[block]).unwrap()).unwrap();

        assert_eq!(
            value,
            json!([{
                "name": "Button",
                "description": "Clickable",
                "modifiers": [{
                    "selector": ":hover",
                    "description": "Hovered",
                    "markup_class": ":hover"
                }],
                "example": "<a class=\"$modifier\">x</a>",
                "section": "1.2",
                "is_module": false
            }])
        );
    }

    #[test]
    fn test_render_module_flag() {
        let module = Block::new("Forms", "", vec![], "", "2");

        let value: Value = serde_json::from_str(&render_json(&[module]).unwrap()).unwrap();

        assert_eq!(value[0]["is_module"], Value::Bool(true));
    }
}
