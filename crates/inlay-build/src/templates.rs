//! MDX rendering for props-table pages.

use std::cmp::Ordering;

use minijinja::{context, Environment};

use inlay_catalog::Properties;

/// A rendered table row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Row {
    /// Prop name
    pub name: String,
    /// Whether the required marker is rendered
    pub required: bool,
    /// Type text, rendered as a fenced code block
    #[serde(rename = "type")]
    pub ty: String,
    /// Description text, `-` when the prop has none
    pub description: String,
}

/// A collapsible section below the main table.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Section {
    /// Expander title and value
    pub title: String,
    /// Sorted rows
    pub rows: Vec<Row>,
}

/// Context for rendering a props-table page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Component display name for the trailing note
    pub component: String,
    /// Import source for the table components; the import line is omitted
    /// when absent
    pub import_source: Option<String>,
    /// Sorted rows of the primary table
    pub main_rows: Vec<Row>,
    /// Collapsible sections in bucket order
    pub sections: Vec<Section>,
}

/// Order prop names the way `localeCompare` orders ASCII identifiers:
/// case-insensitive, lowercase before uppercase on ties.
pub fn compare_prop_names(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => b.cmp(a),
        other => other,
    }
}

/// Build sorted table rows for a bucket's properties.
pub fn table_rows(properties: &Properties) -> Vec<Row> {
    let mut rows: Vec<Row> = properties
        .values()
        .map(|prop| {
            let description = prop.description.text();
            Row {
                name: prop.name.clone(),
                required: !prop.is_optional,
                ty: prop.ty.clone(),
                description: if description.is_empty() {
                    "-".to_string()
                } else {
                    description.to_string()
                },
            }
        })
        .collect();

    rows.sort_by(|a, b| compare_prop_names(&a.name, &b.name));
    rows
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in page template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("props-table.mdx".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add props table template");

        Self { env }
    }

    /// Render the full props-table page.
    pub fn render_page(&self, context: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("props-table.mdx")?;

        tmpl.render(context! {
            component => &context.component,
            import_source => &context.import_source,
            main_rows => &context.main_rows,
            sections => &context.sections,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"{%- macro props_table(rows) -%}
<Table
  highlightOnHover={true}
  className="props-table"
  >
  <TableHead>
    <TableRow>
      <TableCell as="th">Name</TableCell>
      <TableCell as="th">Type</TableCell>
      <TableCell as="th">Description</TableCell>
    </TableRow>
  </TableHead>
  <TableBody>
{%- for row in rows %}
    <TableRow>
      <TableCell className="props-table__tr-name">{{ row.name }}{% if row.required %}<sup>*</sup>{% endif %}</TableCell>
      <TableCell>
```jsx
{{ row.type }}
```
</TableCell>
      <TableCell className="props-table__tr-description">{{ row.description }}</TableCell>
    </TableRow>
{%- endfor %}
  </TableBody>
</Table>
{%- endmacro -%}
{/* DO NOT EDIT DIRECTLY */}
{/* This file is autogenerated. Run the props table generator to update it. */}
{% if import_source %}import { Expander, ExpanderItem, Table, TableBody, TableCell, TableHead, TableRow } from '{{ import_source }}';
{% endif %}
{{ props_table(main_rows) }}
{% if sections %}
<Expander type="multiple" className="props-table-expander">
{%- for section in sections %}
<ExpanderItem title="{{ section.title }}" value="{{ section.title }}">
{{ props_table(section.rows) }}
</ExpanderItem>
{%- endfor %}
</Expander>
{% endif %}
`*` indicates required props.

The {{ component }} will accept any of the standard HTML attributes that a HTML element accepts. Standard element attributes can be found in the [MDN Documentation](https://developer.mozilla.org/en-US/docs/Web/HTML/Element).
"##;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use inlay_catalog::{Description, Property};

    use super::*;

    fn prop(name: &str, ty: &str, is_optional: bool) -> Property {
        Property {
            name: name.to_string(),
            ty: ty.to_string(),
            description: Description::default(),
            category: "TestProps".to_string(),
            is_optional,
        }
    }

    fn rows_of(entries: Vec<Property>) -> Vec<Row> {
        let properties: Properties = entries
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();
        table_rows(&properties)
    }

    fn context_with(main_rows: Vec<Row>) -> PageContext {
        PageContext {
            component: "Button".to_string(),
            import_source: None,
            main_rows,
            sections: vec![],
        }
    }

    #[test]
    fn orders_names_case_insensitively_lowercase_first() {
        assert_eq!(compare_prop_names("alignItems", "width"), Ordering::Less);
        assert_eq!(compare_prop_names("width", "Width"), Ordering::Less);
        assert_eq!(compare_prop_names("Width", "width"), Ordering::Greater);
        assert_eq!(compare_prop_names("gap", "gap"), Ordering::Equal);
    }

    #[test]
    fn sorts_rows_by_prop_name() {
        let rows = rows_of(vec![
            prop("width", "string", true),
            prop("alignItems", "string", true),
            prop("Width", "string", true),
        ]);

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alignItems", "width", "Width"]);
    }

    #[test]
    fn missing_description_renders_placeholder() {
        let rows = rows_of(vec![prop("size", "ButtonSizes", true)]);

        assert_eq!(rows[0].description, "-");
    }

    #[test]
    fn marks_required_props() {
        let engine = TemplateEngine::new();
        let rows = rows_of(vec![
            prop("isDisabled", "boolean", false),
            prop("size", "ButtonSizes", true),
        ]);

        let mdx = engine.render_page(&context_with(rows)).unwrap();

        assert!(mdx.contains("isDisabled<sup>*</sup>"));
        assert!(mdx.contains(">size</TableCell>"));
        assert!(!mdx.contains("size<sup>"));
    }

    #[test]
    fn renders_type_as_code_fence() {
        let engine = TemplateEngine::new();
        let rows = rows_of(vec![prop("variation", "ButtonVariations", true)]);

        let mdx = engine.render_page(&context_with(rows)).unwrap();

        assert!(mdx.contains("```jsx\nButtonVariations\n```"));
    }

    #[test]
    fn header_marks_file_as_autogenerated() {
        let engine = TemplateEngine::new();
        let mdx = engine
            .render_page(&context_with(rows_of(vec![prop("size", "string", true)])))
            .unwrap();

        assert!(mdx.starts_with("{/* DO NOT EDIT DIRECTLY */}"));
        assert!(mdx.contains("`*` indicates required props."));
        assert!(mdx.contains("The Button will accept any of the standard HTML attributes"));
    }

    #[test]
    fn omits_import_line_by_default() {
        let engine = TemplateEngine::new();
        let mdx = engine
            .render_page(&context_with(rows_of(vec![prop("size", "string", true)])))
            .unwrap();

        assert!(!mdx.contains("import {"));
    }

    #[test]
    fn renders_configured_import_line() {
        let engine = TemplateEngine::new();
        let mut context = context_with(rows_of(vec![prop("size", "string", true)]));
        context.import_source = Some("@emberlight/components".to_string());

        let mdx = engine.render_page(&context).unwrap();

        assert!(mdx.contains(
            "import { Expander, ExpanderItem, Table, TableBody, TableCell, TableHead, TableRow } from '@emberlight/components';"
        ));
    }

    #[test]
    fn renders_sections_as_expander_items() {
        let engine = TemplateEngine::new();
        let mut context = context_with(rows_of(vec![prop("size", "string", true)]));
        context.sections = vec![Section {
            title: "Styling".to_string(),
            rows: rows_of(vec![prop("width", "string", true)]),
        }];

        let mdx = engine.render_page(&context).unwrap();

        assert!(mdx.contains(r#"<Expander type="multiple" className="props-table-expander">"#));
        assert!(mdx.contains(r#"<ExpanderItem title="Styling" value="Styling">"#));
        assert!(mdx.contains("width"));
    }

    #[test]
    fn omits_expander_without_sections() {
        let engine = TemplateEngine::new();
        let mdx = engine
            .render_page(&context_with(rows_of(vec![prop("size", "string", true)])))
            .unwrap();

        assert!(!mdx.contains("<Expander"));
    }
}
