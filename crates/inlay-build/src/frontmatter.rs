//! Frontmatter extraction for documentation pages.

use serde::Deserialize;

/// Parsed frontmatter from a documentation page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Component name override for this page
    #[serde(default)]
    pub component: Option<String>,

    /// Whether to generate a props table for this page
    #[serde(default = "default_true", rename = "propsTable")]
    pub props_table: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self {
            component: None,
            props_table: true,
        }
    }
}

/// Extract frontmatter from page content.
///
/// Pages without a leading `---` block yield `None`.
pub fn extract_frontmatter(source: &str) -> Result<Option<Frontmatter>, FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok(None);
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = after_open[..close_pos].trim();

    let frontmatter: Frontmatter = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok(Some(frontmatter))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_component_override() {
        let source = r#"---
title: Text Field
component: TextField
---

# Text Field
"#;

        let fm = extract_frontmatter(source).unwrap().unwrap();

        assert_eq!(fm.component, Some("TextField".to_string()));
        assert!(fm.props_table);
    }

    #[test]
    fn parses_props_table_opt_out() {
        let source = "---\npropsTable: false\n---\n";

        let fm = extract_frontmatter(source).unwrap().unwrap();

        assert!(!fm.props_table);
    }

    #[test]
    fn ignores_unknown_fields() {
        let source = "---\ntitle: Button\ndescription: A button\n---\n# Button";

        let fm = extract_frontmatter(source).unwrap().unwrap();

        assert_eq!(fm, Frontmatter::default());
    }

    #[test]
    fn handles_no_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter here.";

        let fm = extract_frontmatter(source).unwrap();

        assert!(fm.is_none());
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let source = "---\ncomponent: Test\n# No closing";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::Unclosed)));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let source = "---\ncomponent: [invalid yaml\n---\n";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }
}
