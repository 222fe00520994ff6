//! Site configuration file (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use pedestal_records::ExampleGroup;
use pedestal_site::{LibraryConfig, SiteConfig};

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    site: SiteSection,
    #[serde(default)]
    library: LibrarySection,
    #[serde(default)]
    scripts: ScriptsSection,
    #[serde(default)]
    homepage: HomepageSection,
    #[serde(default)]
    groups: Vec<ExampleGroup>,
}

#[derive(Debug, Deserialize)]
struct SiteSection {
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_templates")]
    templates: String,
    #[serde(default = "default_examples")]
    examples: String,
    #[serde(default = "default_docs_data")]
    docs_data: String,
    #[serde(default = "default_dist")]
    dist: String,
    #[serde(default)]
    local_script: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            output: default_output(),
            templates: default_templates(),
            examples: default_examples(),
            docs_data: default_docs_data(),
            dist: default_dist(),
            local_script: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LibrarySection {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default = "default_version")]
    version: String,
    js: Option<String>,
    css: Option<String>,
    #[serde(default)]
    author: String,
    #[serde(default = "default_license")]
    license: String,
}

impl Default for LibrarySection {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            js: None,
            css: None,
            author: String::new(),
            license: default_license(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct ScriptsSection {
    /// Hosted, versioned script tag for the library.
    #[serde(default)]
    cdn: String,

    /// Script tag integration examples need on their detail page.
    #[serde(default)]
    integration: String,
}

#[derive(Debug, Deserialize, Default)]
struct HomepageSection {
    #[serde(default)]
    snippet: String,
}

fn default_output() -> String {
    "website".to_string()
}
fn default_templates() -> String {
    "templates".to_string()
}
fn default_examples() -> String {
    "examples".to_string()
}
fn default_docs_data() -> String {
    "data/docs.json".to_string()
}
fn default_dist() -> String {
    "dist".to_string()
}
fn default_name() -> String {
    "widget".to_string()
}
fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_license() -> String {
    "MIT".to_string()
}

/// Load configuration from site.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

impl ConfigFile {
    /// Path of the documentation records JSON file.
    pub fn docs_data(&self) -> PathBuf {
        PathBuf::from(&self.site.docs_data)
    }

    /// Directory the `.example` files are loaded from.
    pub fn examples_dir(&self) -> PathBuf {
        PathBuf::from(&self.site.examples)
    }

    /// Assemble the generation config, applying CLI overrides.
    pub fn site_config(&self, output: Option<PathBuf>, local: bool) -> SiteConfig {
        let name = &self.library.name;

        SiteConfig {
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.site.output)),
            templates_dir: PathBuf::from(&self.site.templates),
            dist_dir: PathBuf::from(&self.site.dist),
            library: LibraryConfig {
                name: name.clone(),
                version: self.library.version.clone(),
                js: self
                    .library
                    .js
                    .clone()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(format!("lib/{name}.js"))),
                css: self
                    .library
                    .css
                    .clone()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(format!("lib/{name}.css"))),
                author: self.library.author.clone(),
                license: self.library.license.clone(),
            },
            cdn_script: self.scripts.cdn.clone(),
            integration_script: self.scripts.integration.clone(),
            homepage_snippet: self.homepage.snippet.clone(),
            local_script: local || self.site.local_script,
            groups: self.groups.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_round_trips_into_site_config() {
        let toml_text = r#"
[site]
output = "public"
local_script = true

[library]
name = "squareline"
version = "1.2.0"
author = "A. Maintainer"

[scripts]
cdn = '<script src="https://cdn.example/squareline-1.2.0.min.js"></script>'
integration = '<script src="https://cdn.example/interop.js"></script>'

[homepage]
snippet = "var board = Squareline('board')"

[[groups]]
name = "Basic Usage"
examples = ["1000", "1001"]

[[groups]]
name = "Integration"
examples = ["5000"]
"#;

        let file: ConfigFile = toml::from_str(toml_text).unwrap();
        let config = file.site_config(None, false);

        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.library.name, "squareline");
        assert_eq!(config.library.js, PathBuf::from("lib/squareline.js"));
        assert!(config.local_script);
        assert_eq!(config.groups.len(), 2);
        assert_eq!(config.groups[0].name, "Basic Usage");
        assert_eq!(config.groups[1].examples, vec!["5000"]);
        assert_eq!(file.docs_data(), PathBuf::from("data/docs.json"));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        let config = file.site_config(None, false);

        assert_eq!(config.output_dir, PathBuf::from("website"));
        assert_eq!(config.templates_dir, PathBuf::from("templates"));
        assert_eq!(config.library.name, "widget");
        assert!(!config.local_script);
        assert!(config.groups.is_empty());
    }

    #[test]
    fn cli_overrides_win() {
        let file: ConfigFile = toml::from_str("").unwrap();
        let config = file.site_config(Some(PathBuf::from("out")), true);

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.local_script);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(toml::from_str::<ConfigFile>("[site\noutput = ").is_err());
    }
}
