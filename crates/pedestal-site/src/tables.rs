//! Documentation table rows.
//!
//! Each builder turns one record into exactly one `<tr>` string with a stable
//! `{namespace}:{identifier}` anchor, so documentation rows can be linked from
//! anywhere on the site. Free text is escaped here; the only trusted-HTML field
//! in the system (example markup) never flows through a table row.

use pedestal_records::{Catalog, ConfigProperty, ErrorRecord, Method, OneOrMany};

use crate::html::escape;

/// Build the row for one configuration property.
pub fn config_row(namespace: &str, prop: &ConfigProperty, catalog: &Catalog) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<tr id=\"{}:{}\">",
        escape(namespace),
        escape(&prop.name)
    ));
    html.push_str(&format!(
        "<td>{}</td>",
        name_and_type_cell(namespace, &prop.name, &prop.types)
    ));
    html.push_str(&format!(
        "<td class=\"center\"><p>{}</p></td>",
        default_html(prop.default.as_deref())
    ));
    html.push_str(&format!("<td>{}</td>", paragraphs(&prop.description)));
    html.push_str(&format!(
        "<td>{}</td>",
        examples_cell(&prop.examples, catalog)
    ));
    html.push_str("</tr>");

    html
}

/// Build the row for one method.
///
/// The anchor uses the method name with any parenthesized signature stripped,
/// so overloads share one canonical anchor; rows marked `noId` carry no id at
/// all and rely on the canonical row's anchor.
pub fn method_row(method: &Method, catalog: &Catalog) -> String {
    let anchor = method.anchor_name();
    let mut html = String::new();

    if method.no_id {
        html.push_str("<tr>");
    } else {
        html.push_str(&format!("<tr id=\"methods:{}\">", escape(anchor)));
    }

    html.push_str(&format!(
        "<td><p><a href=\"docs.html#methods:{}\"><code class=\"js plain\">{}</code></a></p></td>",
        escape(anchor),
        escape(&method.name)
    ));

    match &method.args {
        Some(args) => {
            html.push_str("<td>");
            for (arg_type, arg_desc) in args {
                html.push_str(&format!(
                    "<p><code class=\"js plain\">{}</code> {}</p>",
                    escape(arg_type),
                    escape(arg_desc)
                ));
            }
            html.push_str("</td>");
        }
        None => html.push_str("<td><small>none</small></td>"),
    }

    html.push_str(&format!("<td>{}</td>", paragraphs(&method.description)));
    html.push_str(&format!(
        "<td>{}</td>",
        examples_cell(&method.examples, catalog)
    ));
    html.push_str("</tr>");

    html
}

/// Build the row for one error code.
pub fn error_row(error: &ErrorRecord) -> String {
    let mut html = String::new();

    html.push_str(&format!("<tr id=\"errors:{}\">", escape(&error.id)));
    html.push_str(&format!(
        "<td class=\"center\"><p><a href=\"docs.html#errors:{}\">{}</a></p></td>",
        escape(&error.id),
        escape(&error.id)
    ));
    html.push_str(&format!("<td><p>{}</p></td>", escape(&error.description)));

    match &error.fix {
        Some(fix) => html.push_str(&format!("<td>{}</td>", paragraphs(fix))),
        None => html.push_str("<td><small>n/a</small></td>"),
    }

    html.push_str("</tr>");

    html
}

fn name_and_type_cell(namespace: &str, name: &str, types: &OneOrMany<String>) -> String {
    format!(
        "<p><a href=\"docs.html#{}:{}\"><code class=\"js plain\">{}</code></a></p><p class=\"property-type\">{}</p>",
        escape(namespace),
        escape(name),
        escape(name),
        types_html(types)
    )
}

/// Multiple allowed types are joined with a visible "or" separator.
fn types_html(types: &OneOrMany<String>) -> String {
    let mut html = String::new();
    for (position, name) in types.iter().enumerate() {
        if position != 0 {
            html.push_str(" <small>or</small><br />");
        }
        html.push_str(&escape(name));
    }
    html
}

fn default_html(default: Option<&str>) -> String {
    match default {
        Some(value) => escape(value),
        None => "<small>n/a</small>".to_string(),
    }
}

/// One paragraph per entry.
fn paragraphs(entries: &OneOrMany<String>) -> String {
    entries
        .iter()
        .map(|entry| format!("<p>{}</p>", escape(entry)))
        .collect()
}

/// One link per example id that resolves in the catalog. Unresolved ids are
/// dropped, matching the group-membership policy.
fn examples_cell(ids: &OneOrMany<String>, catalog: &Catalog) -> String {
    let mut html = String::new();
    for id in ids {
        match catalog.example(id) {
            Some(example) => html.push_str(&format!(
                "<p><a href=\"examples.html#{}\">{}</a></p>",
                escape(id),
                escape(&example.name)
            )),
            None => tracing::warn!("Documentation row references unknown example id {id}"),
        }
    }
    html
}
