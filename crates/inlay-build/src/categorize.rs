//! Category grouping, special-component augmentation, and bucket assembly.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use inlay_catalog::{caseless_get, Catalog, Properties, TypeIndex};

static PROPS_OR_OPTIONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)props|options").expect("Invalid category pattern"));

/// Target platform, selecting which bucket scheme applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    #[default]
    React,
    ReactNative,
}

impl Platform {
    /// The bucket scheme for this platform.
    pub fn scheme(&self) -> BucketScheme {
        match self {
            Platform::React => BucketScheme::react(),
            Platform::ReactNative => BucketScheme::react_native(),
        }
    }
}

/// An ordered set of table buckets and the category labels each claims.
///
/// Main is always the first bucket; the fixed buckets follow in declaration
/// order. A label claimed by a fixed bucket never qualifies for Main through
/// the props/options pattern.
#[derive(Debug, Clone)]
pub struct BucketScheme {
    /// Category labels always merged into Main
    main_seed: Vec<&'static str>,

    /// Labels barred from Main's props/options pattern rule
    main_exclusions: Vec<&'static str>,

    /// Buckets rendered after Main, each with its fixed label list
    fixed: Vec<(&'static str, Vec<&'static str>)>,

    /// Per-component labels forced into Main, keyed by lowercase component
    custom_main: BTreeMap<&'static str, Vec<&'static str>>,
}

impl BucketScheme {
    /// Scheme for React component libraries.
    pub fn react() -> Self {
        Self {
            main_seed: vec!["BaseComponentProps", "Base"],
            main_exclusions: vec![],
            fixed: vec![
                (
                    "Layout",
                    vec![
                        "CSSLayoutStyleProps",
                        "FlexContainerStyleProps",
                        "FlexItemStyleProps",
                        "GridContainerStyleProps",
                        "GridItemStyleProps",
                    ],
                ),
                ("Styling", vec!["BaseStyleProps"]),
            ],
            custom_main: BTreeMap::from([("link", vec!["AnchorHTMLAttributes"])]),
        }
    }

    /// Scheme for React Native component libraries.
    ///
    /// Style and aria prop types are native to the web variant, so they
    /// never qualify for Main here.
    pub fn react_native() -> Self {
        Self {
            main_seed: vec!["BaseComponentProps"],
            main_exclusions: vec!["BaseStyleProps", "AriaProps"],
            ..Self::react()
        }
    }

    /// The ordered labels merged into Main: the seed plus every grouped
    /// category the main rules claim.
    fn main_categories(
        &self,
        by_category: &BTreeMap<String, Properties>,
        component: &str,
    ) -> Vec<String> {
        let mut categories: Vec<String> =
            self.main_seed.iter().map(|s| s.to_string()).collect();

        for category in by_category.keys() {
            if self.belongs_in_main(category, component) && !categories.contains(category) {
                categories.push(category.clone());
            }
        }

        categories
    }

    /// Whether a grouped category label belongs in the Main bucket.
    fn belongs_in_main(&self, category: &str, component: &str) -> bool {
        let component_lower = component.to_lowercase();

        if category.to_lowercase().contains(&component_lower) {
            return true;
        }

        if PROPS_OR_OPTIONS_RE.is_match(category)
            && !self.is_fixed(category)
            && !self.main_exclusions.contains(&category)
        {
            return true;
        }

        self.custom_main
            .get(component_lower.as_str())
            .is_some_and(|labels| labels.iter().any(|label| *label == category))
    }

    /// Whether a fixed bucket claims this category label.
    fn is_fixed(&self, category: &str) -> bool {
        self.fixed
            .iter()
            .any(|(_, labels)| labels.iter().any(|label| *label == category))
    }

    fn fixed_buckets(&self) -> impl Iterator<Item = (&'static str, &[&'static str])> {
        self.fixed.iter().map(|(name, labels)| (*name, labels.as_slice()))
    }
}

/// Built-in special components whose tables also pull props from auxiliary
/// type sources. The first source names the category the props land in.
pub fn default_special_sources() -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([
        (
            "view".to_string(),
            vec!["View".to_string(), "Input".to_string()],
        ),
        (
            "textfield".to_string(),
            vec![
                "TextField".to_string(),
                "TextInputField".to_string(),
                "TextArea".to_string(),
                "Input".to_string(),
                "Field".to_string(),
            ],
        ),
        ("text".to_string(), vec!["Text".to_string()]),
    ])
}

/// A named bucket with its merged properties.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket {
    /// Bucket display name
    pub name: String,

    /// Merged properties, keyed by prop name
    pub properties: Properties,
}

/// The bucket sequence for one component: Main first, then the non-empty
/// fixed buckets in declaration order.
#[derive(Debug, Clone)]
pub struct CategorizedProps {
    /// Resolved component display name
    pub component: String,

    /// The primary bucket, never empty
    pub main: CategoryBucket,

    /// Remaining buckets, rendered as collapsible sections
    pub sections: Vec<CategoryBucket>,
}

/// Errors from categorization.
#[derive(Debug, thiserror::Error)]
pub enum CategorizeError {
    #[error("No properties found for component: {0}")]
    NoProperties(String),

    #[error("No main props resolved for component: {0}")]
    EmptyMain(String),
}

/// Groups a component's props by category and assembles the table buckets.
#[derive(Debug)]
pub struct Categorizer {
    scheme: BucketScheme,
    special: BTreeMap<String, Vec<String>>,
    types: TypeIndex,
}

impl Categorizer {
    /// Create a categorizer with the built-in special-component table.
    pub fn new(platform: Platform, types: TypeIndex) -> Self {
        Self {
            scheme: platform.scheme(),
            special: default_special_sources(),
            types,
        }
    }

    /// Extend the special-component source table.
    pub fn with_special_sources(mut self, extra: BTreeMap<String, Vec<String>>) -> Self {
        self.special.extend(extra);
        self
    }

    /// Resolve a page's props from the catalog and sort them into buckets.
    ///
    /// Runs the full sequence: group by category, pull in auxiliary sources
    /// for special components, classify categories into buckets, merge each
    /// bucket, and drop empty ones.
    pub fn sort_by_category(
        &self,
        catalog: &Catalog,
        page_name: &str,
    ) -> Result<CategorizedProps, CategorizeError> {
        let Some((canonical, properties)) = catalog.get(page_name) else {
            return Err(CategorizeError::NoProperties(page_name.to_string()));
        };

        let mut by_category = group_by_category(properties);
        self.augment_special(page_name, &mut by_category);

        let component = resolve_component_name(&by_category, canonical, page_name);

        let main_categories = self.scheme.main_categories(&by_category, &component);
        let main_props =
            combine_categories(&by_category, main_categories.iter().map(String::as_str));

        if main_props.is_empty() {
            return Err(CategorizeError::EmptyMain(component));
        }

        let main = CategoryBucket {
            name: "Main".to_string(),
            properties: main_props,
        };

        let mut sections = Vec::new();
        for (name, labels) in self.scheme.fixed_buckets() {
            let properties = combine_categories(&by_category, labels.iter().copied());
            if properties.is_empty() {
                continue;
            }
            sections.push(CategoryBucket {
                name: name.to_string(),
                properties,
            });
        }

        Ok(CategorizedProps {
            component,
            main,
            sections,
        })
    }

    /// Union configured auxiliary sources into the category named by the
    /// first source. Catalog props already grouped there are kept; sources
    /// absent from the type index are skipped.
    fn augment_special(&self, page_name: &str, by_category: &mut BTreeMap<String, Properties>) {
        let Some((_, sources)) = caseless_get(&self.special, page_name) else {
            return;
        };
        let Some(target) = sources.first() else {
            return;
        };

        let bucket = by_category.entry(target.clone()).or_default();
        for source in sources {
            let Some(props) = self.types.get(source) else {
                continue;
            };
            for (name, prop) in props {
                bucket.entry(name.clone()).or_insert_with(|| prop.clone());
            }
        }
    }
}

/// Group a component's props by their category label.
fn group_by_category(properties: &Properties) -> BTreeMap<String, Properties> {
    let mut by_category: BTreeMap<String, Properties> = BTreeMap::new();

    for (name, prop) in properties {
        by_category
            .entry(prop.category.clone())
            .or_default()
            .insert(name.clone(), prop.clone());
    }

    by_category
}

/// Merge the props of the given category labels, first-wins per prop name.
fn combine_categories<'a>(
    by_category: &BTreeMap<String, Properties>,
    labels: impl Iterator<Item = &'a str>,
) -> Properties {
    let mut merged = Properties::new();

    for label in labels {
        let Some((_, props)) = caseless_get(by_category, label) else {
            continue;
        };
        for (name, prop) in props {
            merged.entry(name.clone()).or_insert_with(|| prop.clone());
        }
    }

    merged
}

/// The display name for a page: the category key matching the page name
/// case-insensitively, else the canonical catalog key.
fn resolve_component_name(
    by_category: &BTreeMap<String, Properties>,
    canonical: &str,
    page_name: &str,
) -> String {
    let page_lower = page_name.to_lowercase();

    by_category
        .keys()
        .find(|category| category.to_lowercase() == page_lower)
        .cloned()
        .unwrap_or_else(|| canonical.to_string())
}
