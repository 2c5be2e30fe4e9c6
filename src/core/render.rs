//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, text

use crate::core::model::{Kind, ResultItem, ResultSet};
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
            OutputFormat::Text => self.render_text(result_set),
        }
    }

    /// Render to a writer, ending with a newline when there is output
    pub fn render_to<W: Write>(
        &self,
        result_set: &ResultSet,
        mut writer: W,
    ) -> std::io::Result<()> {
        let output = self.render(result_set);
        writer.write_all(output.as_bytes())?;
        if !output.is_empty() && !output.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown, one section per kind
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let sections = [
            (Kind::Error, "Errors"),
            (Kind::Usage, "Usage"),
            (Kind::Classify, "Arguments"),
            (Kind::Extract, "Extracted"),
            (Kind::Record, "Records"),
        ];

        let mut output = String::new();
        for (kind, title) in sections {
            let items: Vec<&ResultItem> =
                result_set.items.iter().filter(|i| i.kind == kind).collect();
            if items.is_empty() {
                continue;
            }

            output.push_str(&format!("## {}\n\n", title));
            for item in items {
                self.render_item_md(&mut output, item);
            }
            output.push('\n');
        }
        output
    }

    fn render_item_md(&self, output: &mut String, item: &ResultItem) {
        for error in &item.errors {
            output.push_str(&format!("- **{}**: {}\n", error.code, error.message));
        }

        if let Some(text) = &item.text {
            output.push_str(&format!("- {}\n", text));
        }

        if item.kind != Kind::Record {
            if let Some(data) = &item.data {
                output.push_str("\n```json\n");
                output.push_str(&serde_json::to_string_pretty(data).unwrap_or_default());
                output.push_str("\n```\n");
            }
        }
    }

    /// Render as plain text: item text, or error messages
    fn render_text(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .flat_map(|item| {
                let errors = item.errors.iter().map(|e| e.message.clone());
                item.text.clone().into_iter().chain(errors)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ItemError;
    use serde_json::json;

    fn sample() -> ResultSet {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::record("Alice Phone: 123", json!({"name": "Alice"})));
        result_set.push(ResultItem::usage("[n/] [p/]"));
        result_set
    }

    #[test]
    fn test_render_jsonl() {
        let renderer = Renderer::new(OutputFormat::Jsonl);
        let output = renderer.render(&sample());

        assert!(output.contains("Alice"));
        assert!(output.contains("[n/] [p/]"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_render_json() {
        let renderer = Renderer::new(OutputFormat::Json);
        let output = renderer.render(&sample());

        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSONL".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("MARKDOWN".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);

        let result = "invalid".parse::<OutputFormat>();
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_render_json_pretty() {
        let config = RenderConfig::with_pretty(OutputFormat::Json, true);
        let output = Renderer::with_config(config).render(&sample());
        assert!(output.contains("  "));
    }

    #[test]
    fn test_render_markdown_sections() {
        let mut result_set = sample();
        result_set.push(ResultItem::error(ItemError::new("MALFORMED_SORT", "bad order")));

        let output = Renderer::new(OutputFormat::Markdown).render(&result_set);

        assert!(output.starts_with("## Errors"));
        assert!(output.contains("**MALFORMED_SORT**: bad order"));
        assert!(output.contains("## Usage"));
        assert!(output.contains("## Records\n\n- Alice Phone: 123"));
        assert!(!output.contains("## Extracted"));
    }

    #[test]
    fn test_render_markdown_empty() {
        let output = Renderer::new(OutputFormat::Markdown).render(&ResultSet::new());
        assert!(output.is_empty());
    }

    #[test]
    fn test_render_text() {
        let mut result_set = sample();
        result_set.push(ResultItem::error(ItemError::new("NOT_FOUND", "No email found")));

        let output = Renderer::new(OutputFormat::Text).render(&result_set);
        assert_eq!(output, "Alice Phone: 123\n[n/] [p/]\nNo email found");
    }

    #[test]
    fn test_render_to_writer_adds_newline() {
        let mut buffer = Vec::new();
        Renderer::new(OutputFormat::Text)
            .render_to(&sample(), &mut buffer)
            .unwrap();
        assert!(String::from_utf8(buffer).unwrap().ends_with("[n/] [p/]\n"));
    }
}
