//! Initialize a props-table setup in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing inlay...");

    // Create default config
    let config_path = Path::new("inlay.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write inlay.toml")?;
        tracing::info!("Created inlay.toml");
    } else {
        tracing::warn!("inlay.toml already exists. Use --yes to overwrite.");
    }

    // Create an example component page
    let button_dir = Path::new("docs/components/button");
    if !button_dir.exists() {
        fs::create_dir_all(button_dir).context("Failed to create docs directories")?;
    }

    let page_path = button_dir.join("index.page.mdx");
    if !page_path.exists() || yes {
        fs::write(&page_path, DEFAULT_BUTTON_PAGE).context("Failed to write index.page.mdx")?;
        tracing::info!("Created {}", page_path.display());
    }

    // Create a starter catalog
    let catalog_path = Path::new("catalog.json");
    if !catalog_path.exists() || yes {
        fs::write(catalog_path, DEFAULT_CATALOG).context("Failed to write catalog.json")?;
        tracing::info!("Created catalog.json");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'inlay generate' to create props tables.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Inlay Configuration

[docs]
# Directory scanned for component pages
dir = "docs"

# Pattern a page path must match; capture 1 is the page id
pattern = 'components/([A-Za-z0-9_-]+)/(?:[^/]+/)*index\.page\.mdx$'

[catalog]
# Prop catalog produced by `inlay extract` or an upstream extractor
file = "catalog.json"

# Auxiliary type index for special components (optional)
# types = "types.json"

# Component sources scanned by `inlay extract`
source_dir = "src/components"

[generate]
# Abort on the first unresolved component
strict = false

# Bucket scheme: "react" or "react-native"
platform = "react"

[output]
# File written next to each matched page
name = "props-table.mdx"

# Uncomment to add an import line to generated files
# components_import = "@my-scope/components"
"#;

const DEFAULT_BUTTON_PAGE: &str = r#"---
component: Button
---

# Button

A clickable button component.
"#;

const DEFAULT_CATALOG: &str = r#"{
  "Button": {
    "size": {
      "name": "size",
      "type": "ButtonSizes",
      "description": "Changes the size of the button",
      "category": "ButtonProps",
      "isOptional": true
    },
    "isDisabled": {
      "name": "isDisabled",
      "type": "boolean",
      "description": "Disables the button and blocks interaction",
      "category": "ButtonProps",
      "isOptional": false
    },
    "width": {
      "name": "width",
      "type": "StyleToken<Property.Width>",
      "description": "",
      "category": "BaseStyleProps",
      "isOptional": true
    }
  }
}
"#;
