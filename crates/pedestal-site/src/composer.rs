//! Page composition and site assembly.
//!
//! All fragments are built once from the immutable catalog, then every output
//! page is composed from the shared head/header/footer plus its own model.
//! No page depends on another page's output.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use pedestal_records::{Catalog, DocEntry, Example, ExampleGroup};

use crate::examples::{data_block, global_name, navigation};
use crate::tables::{config_row, error_row, method_row};
use crate::templates::TemplateSet;

/// The widget library a site documents.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Artifact name; also names the copied source files (`js/{name}.js`).
    pub name: String,
    pub version: String,

    /// Path to the library's JavaScript source.
    pub js: PathBuf,

    /// Path to the library's stylesheet.
    pub css: PathBuf,

    pub author: String,
    pub license: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: "widget".to_string(),
            version: "0.0.0".to_string(),
            js: PathBuf::from("lib/widget.js"),
            css: PathBuf::from("lib/widget.css"),
            author: String::new(),
            license: "MIT".to_string(),
        }
    }
}

/// Configuration for one site generation run. Loaded once at process start
/// and treated as immutable for the run.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Destination directory for the generated site.
    pub output_dir: PathBuf,

    /// Directory holding the page templates.
    pub templates_dir: PathBuf,

    /// Destination directory for versioned library release artifacts.
    pub dist_dir: PathBuf,

    pub library: LibraryConfig,

    /// Hosted, versioned script tag used when `local_script` is off.
    pub cdn_script: String,

    /// Extra script tag integration examples need on their detail page.
    pub integration_script: String,

    /// Canned usage snippet shown on the homepage.
    pub homepage_snippet: String,

    /// Reference the local `js/{name}.js` copy instead of the hosted artifact,
    /// uniformly on every page that embeds the runnable script.
    pub local_script: bool,

    /// Ordered example groups for the navigation.
    pub groups: Vec<ExampleGroup>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("website"),
            templates_dir: PathBuf::from("templates"),
            dist_dir: PathBuf::from("dist"),
            library: LibraryConfig::default(),
            cdn_script: String::new(),
            integration_script: String::new(),
            homepage_snippet: String::new(),
            local_script: false,
            groups: Vec::new(),
        }
    }
}

/// Errors that can occur while generating the site.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to load templates: {0}")]
    Template(String),

    #[error("Failed to render {page}: {message}")]
    Render { page: String, message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },

    #[error("Failed to minify {path}: {message}")]
    Minify { path: String, message: String },

    #[error("Example catalog is empty")]
    EmptyCatalog,
}

/// Result of a generation run.
#[derive(Debug)]
pub struct BuildStats {
    /// Number of HTML pages written.
    pub pages: usize,

    /// Total build time in milliseconds.
    pub duration_ms: u64,

    /// Output directory.
    pub output_dir: PathBuf,
}

/// Shared fragments, built once per run and reused across pages. Read-only
/// after construction.
struct Fragments {
    script_tag: String,
    nav: String,
    examples_js: String,
    config_rows: String,
    method_rows: String,
    error_rows: String,
}

impl Fragments {
    fn build(config: &SiteConfig, catalog: &Catalog) -> Self {
        let docs = catalog.docs();

        Self {
            script_tag: script_tag(config),
            nav: navigation(&config.groups, catalog),
            examples_js: data_block(&global_name(&config.library.name), catalog.examples()),
            config_rows: docs
                .config
                .iter()
                .filter_map(DocEntry::record)
                .map(|prop| config_row("config", prop, catalog))
                .collect(),
            method_rows: docs
                .methods
                .iter()
                .filter_map(DocEntry::record)
                .map(|method| method_row(method, catalog))
                .collect(),
            error_rows: docs
                .errors
                .iter()
                .filter_map(DocEntry::record)
                .map(error_row)
                .collect(),
        }
    }
}

/// Static site builder.
pub struct SiteBuilder {
    config: SiteConfig,
}

impl SiteBuilder {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Generate the complete site.
    ///
    /// Fails before writing anything if a template or library source is
    /// unreadable, or if the example catalog is empty; a partially generated
    /// site would dangle cross-page links.
    pub async fn build(&self, catalog: &Catalog) -> Result<BuildStats, BuildError> {
        let start = Instant::now();

        if catalog.examples().is_empty() {
            return Err(BuildError::EmptyCatalog);
        }

        let templates = TemplateSet::load(&self.config.templates_dir)
            .map_err(|e| BuildError::Template(e.to_string()))?;
        let library_js = read_text(&self.config.library.js)?;
        let library_css = read_text(&self.config.library.css)?;

        let fragments = Fragments::build(&self.config, catalog);

        self.write_library_copies(&library_js, &library_css)?;
        self.write_homepage(&templates, &fragments)?;
        self.write_examples_page(&templates, &fragments)?;
        self.write_example_pages(&templates, &fragments, catalog)?;
        self.write_docs_page(&templates, &fragments)?;
        self.write_download_page(&templates)?;
        self.write_license_page(&templates)?;

        Ok(BuildStats {
            pages: 5 + catalog.examples().len(),
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Copy the library source and stylesheet under their fixed subpaths.
    fn write_library_copies(&self, js: &str, css: &str) -> Result<(), BuildError> {
        let name = &self.config.library.name;
        let js_dir = self.config.output_dir.join("js");
        let css_dir = self.config.output_dir.join("css");

        ensure_dir(&js_dir)?;
        ensure_dir(&css_dir)?;
        write_text(&js_dir.join(format!("{name}.js")), js)?;
        write_text(&css_dir.join(format!("{name}.css")), css)
    }

    fn write_homepage(&self, templates: &TemplateSet, fragments: &Fragments) -> Result<(), BuildError> {
        let mut vars = BTreeMap::new();
        vars.insert("head", self.render_head(templates, "Homepage")?);
        vars.insert("footer", self.render_footer(templates)?);
        vars.insert("script_tag", fragments.script_tag.clone());
        vars.insert("snippet", self.config.homepage_snippet.clone());

        let html = render(templates, "homepage.html", &vars)?;
        write_text(&self.config.output_dir.join("index.html"), &html)
    }

    fn write_examples_page(
        &self,
        templates: &TemplateSet,
        fragments: &Fragments,
    ) -> Result<(), BuildError> {
        let mut vars = BTreeMap::new();
        vars.insert("head", self.render_head(templates, "Examples")?);
        vars.insert("header", self.render_header(templates, "examples")?);
        vars.insert("footer", self.render_footer(templates)?);
        vars.insert("script_tag", fragments.script_tag.clone());
        vars.insert("nav", fragments.nav.clone());
        vars.insert("examples_js", fragments.examples_js.clone());

        let html = render(templates, "examples.html", &vars)?;
        write_text(&self.config.output_dir.join("examples.html"), &html)
    }

    /// Write one detail page per example. The inputs are immutable, so the
    /// writes run in parallel.
    fn write_example_pages(
        &self,
        templates: &TemplateSet,
        fragments: &Fragments,
        catalog: &Catalog,
    ) -> Result<(), BuildError> {
        ensure_dir(&self.config.output_dir.join("examples"))?;

        let results: Vec<Result<(), BuildError>> = catalog
            .examples()
            .par_iter()
            .map(|example| self.write_example_page(templates, fragments, example))
            .collect();

        results.into_iter().collect()
    }

    fn write_example_page(
        &self,
        templates: &TemplateSet,
        fragments: &Fragments,
        example: &Example,
    ) -> Result<(), BuildError> {
        let integration_script = if example.is_integration() {
            self.config.integration_script.clone()
        } else {
            String::new()
        };

        let mut vars = BTreeMap::new();
        vars.insert("head", self.render_head(templates, &example.name)?);
        vars.insert("footer", self.render_footer(templates)?);
        vars.insert("script_tag", fragments.script_tag.clone());
        vars.insert("integration_script", integration_script);
        vars.insert("id", example.id.clone());
        vars.insert("name", example.name.clone());
        vars.insert("description", example.description.clone());
        vars.insert("markup", example.markup.clone());
        vars.insert("source", example.source.clone());

        let html = render(templates, "single-example.html", &vars)?;
        let path = self
            .config
            .output_dir
            .join("examples")
            .join(format!("{}.html", example.id));
        write_text(&path, &html)
    }

    fn write_docs_page(&self, templates: &TemplateSet, fragments: &Fragments) -> Result<(), BuildError> {
        let mut vars = BTreeMap::new();
        vars.insert("head", self.render_head(templates, "Documentation")?);
        vars.insert("header", self.render_header(templates, "docs")?);
        vars.insert("footer", self.render_footer(templates)?);
        vars.insert("config_rows", fragments.config_rows.clone());
        vars.insert("method_rows", fragments.method_rows.clone());
        vars.insert("error_rows", fragments.error_rows.clone());

        let html = render(templates, "docs.html", &vars)?;
        write_text(&self.config.output_dir.join("docs.html"), &html)
    }

    fn write_download_page(&self, templates: &TemplateSet) -> Result<(), BuildError> {
        let mut vars = BTreeMap::new();
        vars.insert("head", self.render_head(templates, "Download")?);
        vars.insert("header", self.render_header(templates, "download")?);
        vars.insert("footer", self.render_footer(templates)?);

        let html = render(templates, "download.html", &vars)?;
        write_text(&self.config.output_dir.join("download.html"), &html)
    }

    fn write_license_page(&self, templates: &TemplateSet) -> Result<(), BuildError> {
        let mut vars = BTreeMap::new();
        vars.insert("head", self.render_head(templates, "License")?);
        vars.insert("footer", self.render_footer(templates)?);

        let html = render(templates, "license.html", &vars)?;
        write_text(&self.config.output_dir.join("license.html"), &html)
    }

    fn render_head(&self, templates: &TemplateSet, title: &str) -> Result<String, BuildError> {
        let mut vars = BTreeMap::new();
        vars.insert("page_title", title.to_string());
        render(templates, "_head.html", &vars)
    }

    fn render_header(&self, templates: &TemplateSet, active: &str) -> Result<String, BuildError> {
        let mut vars = BTreeMap::new();
        vars.insert("active", active.to_string());
        render(templates, "_header.html", &vars)
    }

    fn render_footer(&self, templates: &TemplateSet) -> Result<String, BuildError> {
        render(templates, "_footer.html", &BTreeMap::new())
    }
}

/// The one script-reference decision for the whole run: hosted, versioned
/// artifact or the local copy written next to the site.
fn script_tag(config: &SiteConfig) -> String {
    if config.local_script {
        format!("<script src=\"/js/{}.js\"></script>", config.library.name)
    } else {
        config.cdn_script.clone()
    }
}

fn render(
    templates: &TemplateSet,
    page: &str,
    vars: &BTreeMap<&str, String>,
) -> Result<String, BuildError> {
    templates.render(page, vars).map_err(|e| BuildError::Render {
        page: page.to_string(),
        message: e.to_string(),
    })
}

pub(crate) fn read_text(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|e| BuildError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

pub(crate) fn write_text(path: &Path, text: &str) -> Result<(), BuildError> {
    fs::write(path, text).map_err(|e| BuildError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn ensure_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).map_err(|e| BuildError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
