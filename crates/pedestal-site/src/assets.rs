//! Library release artifacts: version substitution, CSS minification, and the
//! license banner.

use crate::composer::{read_text, write_text, BuildError, LibraryConfig, SiteConfig};

/// Token in the library source replaced with the configured version.
const VERSION_TOKEN: &str = "@VERSION";

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Replace the `@VERSION` token with the release version.
    pub fn substitute_version(text: &str, version: &str) -> String {
        text.replace(VERSION_TOKEN, version)
    }

    /// One-line license banner for release artifacts.
    pub fn banner(library: &LibraryConfig) -> String {
        format!(
            "/*! {} v{} | (c) {} | {} */\n",
            library.name, library.version, library.author, library.license
        )
    }
}

/// Write the versioned library artifacts into the dist directory:
/// `{name}-{version}.js`, `{name}-{version}.css`, and
/// `{name}-{version}.min.css` (banner plus minified stylesheet).
pub fn build_dist(config: &SiteConfig) -> Result<std::path::PathBuf, BuildError> {
    let library = &config.library;

    let js = AssetPipeline::substitute_version(&read_text(&library.js)?, &library.version);
    let css = AssetPipeline::substitute_version(&read_text(&library.css)?, &library.version);

    let min_css = AssetPipeline::minify_css(&css).map_err(|message| BuildError::Minify {
        path: library.css.display().to_string(),
        message,
    })?;

    std::fs::create_dir_all(&config.dist_dir).map_err(|e| BuildError::Write {
        path: config.dist_dir.display().to_string(),
        message: e.to_string(),
    })?;

    let stem = format!("{}-{}", library.name, library.version);
    let banner = AssetPipeline::banner(library);

    write_text(&config.dist_dir.join(format!("{stem}.js")), &format!("{banner}{js}"))?;
    write_text(&config.dist_dir.join(format!("{stem}.css")), &css)?;
    write_text(
        &config.dist_dir.join(format!("{stem}.min.css")),
        &format!("{banner}{min_css}"),
    )?;

    Ok(config.dist_dir.clone())
}
