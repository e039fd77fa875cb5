//! Tool result payload.
//!
//! A tool call answers with exactly one text content block, serialized the
//! way tool hosts expect it:
//!
//! ```json
//! {"content": [{"type": "text", "text": "..."}]}
//! ```

use serde::{Deserialize, Serialize};

/// One content block of a tool result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text for display.
    Text { text: String },
}

/// The result of a tool invocation.
///
/// Holds a single text block; there is no way to build one with structured,
/// binary, or multiple blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    content: [ContentBlock; 1],
}

impl ToolOutput {
    /// Wraps display text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: [ContentBlock::Text { text: text.into() }],
        }
    }

    /// Returns the display text.
    pub fn as_text(&self) -> &str {
        let [ContentBlock::Text { text }] = &self.content;
        text
    }

    /// Consumes the payload and returns the display text.
    pub fn into_text(self) -> String {
        let [ContentBlock::Text { text }] = self.content;
        text
    }

    /// Serializes the payload to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
