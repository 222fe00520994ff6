//! Interactive example records and the sectioned `.example` file format.
//!
//! An example file is a sequence of sections. A line of five or more `=`
//! characters introduces a section; the rest of the line is the section title.
//! The body runs until the next marker line. Titles are matched
//! case-insensitively:
//!
//! ```text
//! ===== id
//! 1000
//!
//! ===== Name
//! Empty Board
//!
//! ===== Description
//! Create an empty board with no pieces.
//!
//! ===== HTML
//! <div id="board"></div>
//!
//! ===== JS
//! var board = Widget('board')
//! ```

use std::collections::HashMap;

use regex::Regex;

/// One interactive example: what to show, and what to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    /// Numeric-like identifier, e.g. `"1000"`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Prose description. Trusted HTML when embedded in a page body.
    pub description: String,

    /// HTML fragment the example renders into. Trusted input authored as HTML.
    pub markup: String,

    /// Executable source text.
    pub source: String,
}

impl Example {
    /// Integration examples demonstrate interop with an external library and
    /// need an extra script include on their detail page. The convention is an
    /// id whose leading digit is `5`.
    pub fn is_integration(&self) -> bool {
        self.id.starts_with('5')
    }
}

/// Errors from parsing a `.example` file.
#[derive(Debug, thiserror::Error)]
pub enum ExampleError {
    #[error("No sections found; expected '===== <title>' markers")]
    NoSections,

    #[error("Missing required section '{0}'")]
    MissingSection(&'static str),

    #[error("Section 'id' is empty")]
    EmptyId,
}

/// Parse one example file into an [`Example`] record.
pub fn parse_example(text: &str) -> Result<Example, ExampleError> {
    let marker = Regex::new(r"^\s*={5,}\s*(.+?)\s*$").expect("section marker pattern is valid");

    let mut sections: HashMap<String, Vec<&str>> = HashMap::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if let Some(captures) = marker.captures(line) {
            current = Some(captures[1].to_lowercase());
            sections.entry(captures[1].to_lowercase()).or_default();
        } else if let Some(ref title) = current {
            if let Some(body) = sections.get_mut(title) {
                body.push(line);
            }
        }
    }

    if sections.is_empty() {
        return Err(ExampleError::NoSections);
    }

    let mut section = |title: &'static str| -> Result<String, ExampleError> {
        sections
            .remove(title)
            .map(|body| body.join("\n").trim().to_string())
            .ok_or(ExampleError::MissingSection(title))
    };

    let id = section("id")?;
    if id.is_empty() {
        return Err(ExampleError::EmptyId);
    }

    Ok(Example {
        id,
        name: section("name")?,
        description: section("description")?,
        markup: section("html")?,
        source: section("js")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASIC: &str = "\
===== id
1000

===== Name
Empty Board

===== Description
Create an empty board with <code>no pieces</code>.

===== HTML
<div id=\"board\" style=\"width: 400px\"></div>

===== JS
var board = Widget('board')
";

    #[test]
    fn parses_all_sections() {
        let example = parse_example(BASIC).unwrap();

        assert_eq!(example.id, "1000");
        assert_eq!(example.name, "Empty Board");
        assert_eq!(
            example.description,
            "Create an empty board with <code>no pieces</code>."
        );
        assert_eq!(example.markup, "<div id=\"board\" style=\"width: 400px\"></div>");
        assert_eq!(example.source, "var board = Widget('board')");
    }

    #[test]
    fn section_titles_are_case_insensitive() {
        let text = "===== ID\n42\n===== name\nN\n===== DESCRIPTION\nD\n===== html\n<p></p>\n===== Js\nx()\n";

        let example = parse_example(text).unwrap();

        assert_eq!(example.id, "42");
        assert_eq!(example.source, "x()");
    }

    #[test]
    fn preserves_interior_blank_lines_in_source() {
        let text = "===== id\n1\n===== Name\nN\n===== Description\nD\n===== HTML\n<p></p>\n===== JS\nvar a = 1\n\nvar b = 2\n";

        let example = parse_example(text).unwrap();

        assert_eq!(example.source, "var a = 1\n\nvar b = 2");
    }

    #[test]
    fn missing_section_is_an_error() {
        let text = "===== id\n1000\n===== Name\nNo JS here\n";

        let result = parse_example(text);

        assert!(matches!(
            result,
            Err(ExampleError::MissingSection("description"))
        ));
    }

    #[test]
    fn file_without_markers_is_an_error() {
        assert!(matches!(
            parse_example("just some text\n"),
            Err(ExampleError::NoSections)
        ));
    }

    #[test]
    fn integration_examples_are_flagged_by_leading_digit() {
        let mut example = parse_example(BASIC).unwrap();
        assert!(!example.is_integration());

        example.id = "5000".to_string();
        assert!(example.is_integration());
    }
}
