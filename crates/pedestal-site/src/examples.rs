//! Example navigation markup and the embeddable runtime catalog.

use pedestal_records::{Catalog, Example, ExampleGroup};

use crate::html::escape;

/// Render the grouped example navigation.
///
/// Groups appear in configured order as a header plus an initially-collapsed
/// list; list items link to the example's detail anchor. Member ids with no
/// matching example are skipped.
pub fn navigation(groups: &[ExampleGroup], catalog: &Catalog) -> String {
    let mut html = String::new();

    for (position, group) in groups.iter().enumerate() {
        let number = position + 1;

        html.push_str(&format!(
            "<h4 id=\"groupHeader-{number}\">{}</h4>",
            escape(&group.name)
        ));
        html.push_str(&format!(
            "<ul id=\"groupContainer-{number}\" style=\"display:none\">"
        ));

        for id in &group.examples {
            match catalog.example(id) {
                Some(example) => html.push_str(&format!(
                    "<li id=\"exampleLink-{id}\"><a href=\"#{id}\">{}</a></li>",
                    escape(&example.name)
                )),
                None => tracing::warn!(
                    "Example group '{}' references unknown example id {id}",
                    group.name
                ),
            }
        }

        html.push_str("</ul>");
    }

    html
}

/// Serialize the example catalog into a script block assigned to
/// `window.{global}`.
///
/// Each entry carries the example's source twice, from one read of the record:
/// `jsStr` is a strict JSON string literal (decodes back to the exact source
/// bytes, for display), and `jsFn` re-embeds the same text verbatim as a
/// callable function body (for running it live on the page).
pub fn data_block(global: &str, examples: &[Example]) -> String {
    let mut script = format!("window.{global} = {{}}\n\n");

    for example in examples {
        let source = example.source.as_str();

        script.push_str(&format!(
            "{global}[\"{id}\"] = {{\n  description: {description},\n  markup: {markup},\n  name: {name},\n  jsStr: {js_str},\n  jsFn: function () {{\n{source}\n  }}\n}};\n\n",
            id = example.id,
            description = js_string(&example.description),
            markup = js_string(&example.markup),
            name = js_string(&example.name),
            js_str = js_string(source),
        ));
    }

    script
}

/// Encode text as a JSON string literal. JSON string encoding is lossless, so
/// decoding the literal reproduces the input byte-for-byte.
fn js_string(text: &str) -> String {
    serde_json::to_string(text).expect("string serialization is infallible")
}

/// Name of the window global the example catalog is assigned to, derived from
/// the library name: `my-widget` becomes `MY_WIDGET_EXAMPLES`.
pub fn global_name(library: &str) -> String {
    let mut name: String = library
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    name.push_str("_EXAMPLES");
    name
}
