//! The full in-memory record collection for one generation run.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::docs::DocRecords;
use crate::example::{parse_example, Example, ExampleError};

/// An ordered, named group of example ids. Groups come from the site
/// configuration; group order and member order are the display order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExampleGroup {
    pub name: String,

    /// Member ids in display order. An id with no matching example in the
    /// catalog is skipped wherever the group is rendered.
    pub examples: Vec<String>,
}

/// Errors from loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse documentation records: {0}")]
    Docs(String),

    #[error("Failed to parse example {path}: {message}")]
    Example { path: String, message: String },

    #[error("No example files found in {0}")]
    NoExamples(String),
}

/// All records for one run: documentation tables plus the example catalog.
/// Immutable after load; the generation pipeline only reads it.
#[derive(Debug, Default)]
pub struct Catalog {
    docs: DocRecords,
    examples: Vec<Example>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-loaded records. Example order is kept as
    /// given; it becomes the iteration order of the generated site.
    pub fn new(docs: DocRecords, examples: Vec<Example>) -> Self {
        let mut index = HashMap::with_capacity(examples.len());
        for (position, example) in examples.iter().enumerate() {
            if index.insert(example.id.clone(), position).is_some() {
                tracing::warn!("Duplicate example id {}; keeping the later file", example.id);
            }
        }

        Self {
            docs,
            examples,
            index,
        }
    }

    /// Load the catalog from disk: documentation records from a JSON file and
    /// examples from every `.example` file under `examples_dir`, in sorted
    /// file-name order.
    ///
    /// An empty example set is a fatal error; the generated site cross-links
    /// into the example catalog from every page.
    pub fn load(docs_path: &Path, examples_dir: &Path) -> Result<Self, CatalogError> {
        let docs_text = fs::read_to_string(docs_path).map_err(|e| CatalogError::Read {
            path: docs_path.display().to_string(),
            message: e.to_string(),
        })?;
        let docs = DocRecords::from_json(&docs_text).map_err(|e| CatalogError::Docs(e.to_string()))?;

        let mut paths = Vec::new();
        for entry in WalkDir::new(examples_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("example") {
                paths.push(path.to_path_buf());
            }
        }
        paths.sort();

        let mut examples = Vec::with_capacity(paths.len());
        for path in &paths {
            let text = fs::read_to_string(path).map_err(|e| CatalogError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            let example = parse_example(&text).map_err(|e: ExampleError| CatalogError::Example {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            examples.push(example);
        }

        if examples.is_empty() {
            return Err(CatalogError::NoExamples(examples_dir.display().to_string()));
        }

        tracing::debug!("Loaded {} examples from {}", examples.len(), examples_dir.display());

        Ok(Self::new(docs, examples))
    }

    pub fn docs(&self) -> &DocRecords {
        &self.docs
    }

    /// Examples in catalog iteration order.
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Look up an example by id.
    pub fn example(&self, id: &str) -> Option<&Example> {
        self.index.get(id).map(|&position| &self.examples[position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write_example(dir: &Path, file: &str, id: &str, name: &str) {
        let text = format!(
            "===== id\n{id}\n===== Name\n{name}\n===== Description\nD\n===== HTML\n<div></div>\n===== JS\nrun()\n"
        );
        fs::write(dir.join(file), text).unwrap();
    }

    #[test]
    fn loads_examples_in_sorted_file_order() {
        let temp = tempdir().unwrap();
        let docs_path = temp.path().join("docs.json");
        let examples_dir = temp.path().join("examples");

        fs::write(&docs_path, r#"{"config": [], "methods": [], "errors": []}"#).unwrap();
        fs::create_dir_all(&examples_dir).unwrap();
        write_example(&examples_dir, "2000.example", "2000", "Second");
        write_example(&examples_dir, "1000.example", "1000", "First");
        write_example(&examples_dir, "5000.example", "5000", "Integration");

        let catalog = Catalog::load(&docs_path, &examples_dir).unwrap();

        let ids: Vec<_> = catalog.examples().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1000", "2000", "5000"]);
        assert_eq!(catalog.example("2000").unwrap().name, "Second");
        assert!(catalog.example("9999").is_none());
    }

    #[test]
    fn ignores_files_without_the_example_extension() {
        let temp = tempdir().unwrap();
        let docs_path = temp.path().join("docs.json");
        let examples_dir = temp.path().join("examples");

        fs::write(&docs_path, "{}").unwrap();
        fs::create_dir_all(&examples_dir).unwrap();
        write_example(&examples_dir, "1000.example", "1000", "First");
        fs::write(examples_dir.join("notes.txt"), "not an example").unwrap();

        let catalog = Catalog::load(&docs_path, &examples_dir).unwrap();

        assert_eq!(catalog.examples().len(), 1);
    }

    #[test]
    fn empty_example_set_is_fatal() {
        let temp = tempdir().unwrap();
        let docs_path = temp.path().join("docs.json");
        let examples_dir = temp.path().join("examples");

        fs::write(&docs_path, "{}").unwrap();
        fs::create_dir_all(&examples_dir).unwrap();

        let result = Catalog::load(&docs_path, &examples_dir);

        assert!(matches!(result, Err(CatalogError::NoExamples(_))));
    }

    #[test]
    fn missing_docs_file_is_fatal() {
        let temp = tempdir().unwrap();
        let examples_dir = temp.path().join("examples");
        fs::create_dir_all(&examples_dir).unwrap();

        let result = Catalog::load(&temp.path().join("missing.json"), &examples_dir);

        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }

    #[test]
    fn malformed_example_reports_its_path() {
        let temp = tempdir().unwrap();
        let docs_path = temp.path().join("docs.json");
        let examples_dir = temp.path().join("examples");

        fs::write(&docs_path, "{}").unwrap();
        fs::create_dir_all(&examples_dir).unwrap();
        fs::write(examples_dir.join("bad.example"), "===== id\n1\n").unwrap();

        match Catalog::load(&docs_path, &examples_dir) {
            Err(CatalogError::Example { path, .. }) => assert!(path.contains("bad.example")),
            other => panic!("expected example error, got {other:?}"),
        }
    }
}
