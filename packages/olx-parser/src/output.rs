//! Rendering of parse results for the command line.

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::error::Result;
use crate::types::ParsedOlx;

/// Output format for a parsed problem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, the shape the editor consumes.
    #[default]
    Json,
    /// YAML, for reading by eye.
    Yaml,
}

/// Render a parse result in the given format.
///
/// # Examples
/// ```
/// use olx_parser::output::{render, OutputFormat};
/// use olx_parser::ParsedOlx;
///
/// assert_eq!(render(&ParsedOlx::Unset {}, OutputFormat::Json).unwrap(), "{}\n");
/// ```
pub fn render(parsed: &ParsedOlx, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(parsed)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(parsed)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Render a parse result and write it to a file.
pub fn save(parsed: &ParsedOlx, format: OutputFormat, path: &Path) -> Result<()> {
    let rendered = render(parsed, format)?;
    fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_olx;
    use tempfile::tempdir;

    const OLX: &str = r#"<problem>
        <multiplechoiceresponse>
            <p>Pick</p>
            <choicegroup><choice correct="true">A</choice></choicegroup>
        </multiplechoiceresponse>
    </problem>"#;

    #[test]
    fn test_render_json_camel_case() {
        let parsed = parse_olx(OLX).unwrap();
        let json = render(&parsed, OutputFormat::Json).unwrap();

        assert!(json.contains(r#""problemType": "multiplechoiceresponse""#));
        assert!(json.contains(r#""groupFeedbackList": []"#));
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_render_yaml_is_valid() {
        let parsed = parse_olx(OLX).unwrap();
        let yaml = render(&parsed, OutputFormat::Yaml).unwrap();

        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(
            value.get("problemType").and_then(|v| v.as_str()),
            Some("multiplechoiceresponse")
        );
        assert!(value.get("answers").unwrap().is_sequence());
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        save(&ParsedOlx::advanced(), OutputFormat::Json, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains(r#""problemType": "advanced""#));
    }
}
