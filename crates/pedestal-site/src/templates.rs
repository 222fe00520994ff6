//! Page template loading and rendering.
//!
//! Templates are plain files in one directory, rendered with a flat mapping of
//! placeholder names to strings. Fragment values are generated HTML and are
//! marked `| safe` inside the templates; everything else is auto-escaped by
//! the engine.

use std::collections::BTreeMap;
use std::path::Path;

use minijinja::{path_loader, Environment};

/// The fixed template set a site is composed from.
pub const TEMPLATE_NAMES: &[&str] = &[
    "homepage.html",
    "examples.html",
    "single-example.html",
    "docs.html",
    "download.html",
    "license.html",
    "_head.html",
    "_header.html",
    "_footer.html",
];

/// All page templates for one run, loaded up front so a missing template
/// fails the build before any output is written.
pub struct TemplateSet {
    env: Environment<'static>,
}

impl TemplateSet {
    /// Load the template set from a directory.
    pub fn load(dir: &Path) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir));

        let set = Self { env };
        for name in TEMPLATE_NAMES {
            set.env.get_template(name)?;
        }

        Ok(set)
    }

    /// Render one template with a flat name-to-string mapping.
    pub fn render(
        &self,
        name: &str,
        vars: &BTreeMap<&str, String>,
    ) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(vars)
    }
}
