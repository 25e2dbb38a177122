//! Prop metadata as emitted by type extraction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Props of one component or type declaration, keyed by prop name.
pub type Properties = BTreeMap<String, Property>;

/// Metadata for a single prop. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Prop name as written in the source declaration
    pub name: String,

    /// Type as source-like text, rendered verbatim in a code fence
    #[serde(rename = "type")]
    pub ty: String,

    /// Doc text, possibly split into tagged sections
    #[serde(default)]
    pub description: Description,

    /// Category label, normally the declaring type's name
    pub category: String,

    /// Whether the prop carried an optional marker
    pub is_optional: bool,
}

/// A prop description.
///
/// Extractors emit either a plain string or a map of doc-tag sections
/// (`description`, `deprecated`, ...). Either form deserializes here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    /// Plain doc text
    Text(String),

    /// Doc text split by tag; the `description` key holds the main text
    Sections(BTreeMap<String, String>),
}

impl Description {
    /// The main doc text, or an empty string when there is none.
    pub fn text(&self) -> &str {
        match self {
            Description::Text(text) => text,
            Description::Sections(sections) => sections
                .get("description")
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }

    /// Whether any main doc text exists.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

impl Default for Description {
    fn default() -> Self {
        Description::Text(String::new())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserializes_camel_case_prop() {
        let json = r#"{
            "name": "isDisabled",
            "type": "boolean",
            "description": "Disables the button",
            "category": "ButtonProps",
            "isOptional": false
        }"#;

        let prop: Property = serde_json::from_str(json).unwrap();

        assert_eq!(prop.name, "isDisabled");
        assert_eq!(prop.ty, "boolean");
        assert_eq!(prop.description.text(), "Disables the button");
        assert_eq!(prop.category, "ButtonProps");
        assert!(!prop.is_optional);
    }

    #[test]
    fn deserializes_sectioned_description() {
        let json = r#"{
            "name": "size",
            "type": "string",
            "description": { "description": "Control size", "deprecated": "use scale" },
            "category": "ButtonProps",
            "isOptional": true
        }"#;

        let prop: Property = serde_json::from_str(json).unwrap();

        assert_eq!(prop.description.text(), "Control size");
    }

    #[test]
    fn defaults_missing_description() {
        let json = r#"{
            "name": "width",
            "type": "string",
            "category": "BaseStyleProps",
            "isOptional": true
        }"#;

        let prop: Property = serde_json::from_str(json).unwrap();

        assert!(prop.description.is_empty());
    }

    #[test]
    fn sections_without_main_text_are_empty() {
        let description = Description::Sections(BTreeMap::from([(
            "deprecated".to_string(),
            "gone in v2".to_string(),
        )]));

        assert_eq!(description.text(), "");
        assert!(description.is_empty());
    }
}
