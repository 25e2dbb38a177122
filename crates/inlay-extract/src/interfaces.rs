//! Regex extraction of TypeScript prop declarations.
//!
//! Recognizes exported `interface` declarations (with extends clauses) and
//! object `type` aliases. Members are parsed line by line: a preceding
//! `/** ... */` block becomes the prop description, `@tag` lines become
//! description sections, and a `?` marker makes the prop optional.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use inlay_catalog::{Description, Properties, Property};

/// A parsed `interface` or object `type` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    /// Declared type name
    pub name: String,

    /// Referenced base types, generic arguments stripped
    pub extends: Vec<String>,

    /// Own props, each categorized under this declaration's name
    pub props: Properties,
}

static INTERFACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*(?:export\s+)?interface\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?:<[^>{]*>)?\s*(?:extends\s+([^{]+?))?\s*\{([^}]*)\}",
    )
    .expect("Invalid interface regex")
});

static TYPE_ALIAS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*(?:export\s+)?type\s+([A-Za-z_][A-Za-z0-9_]*)\s*(?:<[^=]*>)?\s*=\s*\{([^}]*)\}",
    )
    .expect("Invalid type alias regex")
});

static MEMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Match: name?: type  with optional readonly, quoted names, and a
    // ; or , separator (type literals may use comma-separated members)
    Regex::new(r#"^(?:readonly\s+)?([A-Za-z_$][A-Za-z0-9_$]*|'[^']+'|"[^"]+")\s*(\?)?\s*:\s*(.+?)[;,]?\s*$"#)
        .expect("Invalid member regex")
});

/// Parse every type declaration found in a source string.
///
/// Declaration bodies stop at the first closing brace, so members with
/// nested object literal types are not extracted.
pub fn parse_declarations(source: &str) -> Vec<TypeDecl> {
    let mut decls = Vec::new();

    for caps in INTERFACE_RE.captures_iter(source) {
        let name = caps[1].to_string();
        let extends = caps
            .get(2)
            .map(|m| parse_extends(m.as_str()))
            .unwrap_or_default();
        let props = parse_members(&caps[3], &name);
        decls.push(TypeDecl {
            name,
            extends,
            props,
        });
    }

    for caps in TYPE_ALIAS_RE.captures_iter(source) {
        let name = caps[1].to_string();
        let props = parse_members(&caps[2], &name);
        decls.push(TypeDecl {
            name,
            extends: Vec::new(),
            props,
        });
    }

    decls
}

/// Split an extends clause on top-level commas and strip generic arguments.
fn parse_extends(raw: &str) -> Vec<String> {
    let mut refs = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();

    for ch in raw.chars() {
        match ch {
            '<' => {
                depth += 1;
                current.push(ch);
            }
            '>' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => refs.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    refs.push(current);

    refs.iter()
        .map(|r| base_name(r).to_string())
        .filter(|r| !r.is_empty())
        .collect()
}

/// The type name without generic arguments: `Pick<Base, 'a'>` -> `Pick`.
fn base_name(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.find('<') {
        Some(idx) => trimmed[..idx].trim_end(),
        None => trimmed,
    }
}

/// Parse the members of a declaration body.
fn parse_members(body: &str, category: &str) -> Properties {
    let mut props = Properties::new();
    let mut doc: Vec<String> = Vec::new();
    let mut in_doc = false;

    for raw in body.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if in_doc {
            let (text, closes) = match line.strip_suffix("*/") {
                Some(inner) => (inner, true),
                None => (line, false),
            };
            let text = text.trim_start_matches('*').trim();
            if !text.is_empty() {
                doc.push(text.to_string());
            }
            if closes {
                in_doc = false;
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("/**") {
            doc.clear();
            match rest.strip_suffix("*/") {
                Some(inner) => {
                    let text = inner.trim();
                    if !text.is_empty() {
                        doc.push(text.to_string());
                    }
                }
                None => {
                    in_doc = true;
                    let text = rest.trim();
                    if !text.is_empty() {
                        doc.push(text.to_string());
                    }
                }
            }
            continue;
        }

        if line.starts_with("//") || line.starts_with("/*") {
            continue;
        }

        if let Some(caps) = MEMBER_RE.captures(line) {
            let name = caps[1]
                .trim_matches(|c| c == '\'' || c == '"')
                .to_string();
            let property = Property {
                name: name.clone(),
                ty: caps[3].trim().to_string(),
                description: doc_to_description(&doc),
                category: category.to_string(),
                is_optional: caps.get(2).is_some(),
            };
            props.entry(name).or_insert(property);
        }
        doc.clear();
    }

    props
}

/// Fold collected doc lines into a description.
///
/// Untagged lines form the main text; `@tag` lines open a named section.
/// A doc block with only main text stays a plain string.
fn doc_to_description(lines: &[String]) -> Description {
    if lines.is_empty() {
        return Description::default();
    }

    let mut sections: BTreeMap<String, String> = BTreeMap::new();
    let mut current = "description".to_string();

    for line in lines {
        let text = match line.strip_prefix('@') {
            Some(rest) => {
                let (tag, text) = match rest.split_once(char::is_whitespace) {
                    Some((tag, text)) => (tag, text.trim()),
                    None => (rest, ""),
                };
                current = tag.to_string();
                sections.entry(current.clone()).or_default();
                text
            }
            None => line.as_str(),
        };

        if !text.is_empty() {
            let entry = sections.entry(current.clone()).or_default();
            if !entry.is_empty() {
                entry.push(' ');
            }
            entry.push_str(text);
        }
    }

    if sections.len() == 1 && sections.contains_key("description") {
        Description::Text(sections.remove("description").unwrap_or_default())
    } else {
        Description::Sections(sections)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_interface_members() {
        let source = r#"
export interface ButtonProps {
  /** Changes the visual weight of the button */
  variation?: ButtonVariations;
  isDisabled: boolean;
}
        "#;

        let decls = parse_declarations(source);

        assert_eq!(decls.len(), 1);
        let decl = &decls[0];
        assert_eq!(decl.name, "ButtonProps");
        assert!(decl.extends.is_empty());

        let variation = &decl.props["variation"];
        assert_eq!(variation.ty, "ButtonVariations");
        assert!(variation.is_optional);
        assert_eq!(
            variation.description.text(),
            "Changes the visual weight of the button"
        );

        assert!(!decl.props["isDisabled"].is_optional);
    }

    #[test]
    fn categorizes_under_declaring_type() {
        let source = "interface FieldProps { label?: string; }";

        let decls = parse_declarations(source);

        assert_eq!(decls[0].props["label"].category, "FieldProps");
    }

    #[test]
    fn parses_extends_list() {
        let source = r#"
export interface ButtonProps extends BaseComponentProps, BaseStyleProps {
  size?: ButtonSizes;
}
        "#;

        let decls = parse_declarations(source);

        assert_eq!(
            decls[0].extends,
            vec!["BaseComponentProps".to_string(), "BaseStyleProps".to_string()]
        );
    }

    #[test]
    fn strips_generic_arguments_from_extends() {
        let source = "interface FieldProps extends Pick<BaseProps, 'id' | 'className'>, AriaProps { name: string; }";

        let decls = parse_declarations(source);

        assert_eq!(
            decls[0].extends,
            vec!["Pick".to_string(), "AriaProps".to_string()]
        );
    }

    #[test]
    fn parses_multiline_doc_comment() {
        let source = r#"
interface AlertProps {
  /**
   * Controls whether the alert can
   * be dismissed by the user
   */
  isDismissible?: boolean;
}
        "#;

        let decls = parse_declarations(source);

        assert_eq!(
            decls[0].props["isDismissible"].description.text(),
            "Controls whether the alert can be dismissed by the user"
        );
    }

    #[test]
    fn doc_tags_become_sections() {
        let source = r#"
interface AlertProps {
  /**
   * Visual variation of the alert
   * @deprecated use colorTheme instead
   */
  variation?: string;
}
        "#;

        let decls = parse_declarations(source);
        let description = &decls[0].props["variation"].description;

        assert_eq!(description.text(), "Visual variation of the alert");
        match description {
            Description::Sections(sections) => {
                assert_eq!(sections["deprecated"], "use colorTheme instead");
            }
            Description::Text(_) => panic!("expected sectioned description"),
        }
    }

    #[test]
    fn parses_type_alias() {
        let source = r#"
export type BadgeProps = {
  variation?: BadgeVariations;
};
        "#;

        let decls = parse_declarations(source);

        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "BadgeProps");
        assert!(decls[0].props.contains_key("variation"));
    }

    #[test]
    fn strips_trailing_comma_separators() {
        let source = r#"
export type BadgeProps = {
  variation?: BadgeVariations,
  size?: BadgeSizes,
};
        "#;

        let decls = parse_declarations(source);

        assert_eq!(decls[0].props["variation"].ty, "BadgeVariations");
        assert_eq!(decls[0].props["size"].ty, "BadgeSizes");
    }

    #[test]
    fn parses_quoted_member_names() {
        let source = "interface FieldProps { 'aria-label'?: string; }";

        let decls = parse_declarations(source);

        assert!(decls[0].props["aria-label"].is_optional);
    }

    #[test]
    fn ignores_unparseable_lines_without_leaking_docs() {
        let source = r#"
interface SliderProps {
  /** Only documents the line right below */
  size?:
    | 'small'
    | 'large';
  step: number;
}
        "#;

        let decls = parse_declarations(source);
        let props = &decls[0].props;

        // The wrapped union member is not extracted, and its doc comment
        // must not attach to the next member.
        assert!(!props.contains_key("size"));
        assert!(props["step"].description.is_empty());
    }

    #[test]
    fn handles_function_typed_members() {
        let source = "interface FieldProps { onChange?: (event: ChangeEvent) => void; }";

        let decls = parse_declarations(source);

        assert_eq!(decls[0].props["onChange"].ty, "(event: ChangeEvent) => void");
    }
}
