//! The default command: run `get_meeting_times` once.

use nextslot_providers::calendly::CalendlyConfig;
use nextslot_tool::{ToolOptions, ToolOutput, tool};
use tracing::info;

use crate::error::ClientResult;

/// Runs the tool and prints its payload.
///
/// Workflow failures are part of the payload and still succeed.
pub async fn run(config: CalendlyConfig, options: &ToolOptions, json: bool) -> ClientResult<()> {
    let output = tool::invoke(config, options).await?;
    info!(tool = tool::TOOL_NAME, "tool invocation finished");
    println!("{}", render(&output, json)?);
    Ok(())
}

/// Renders the payload as display text or as its JSON form.
pub fn render(output: &ToolOutput, json: bool) -> ClientResult<String> {
    if json {
        Ok(output.to_json()?)
    } else {
        Ok(output.as_text().to_string())
    }
}
