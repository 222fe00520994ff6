//! Initialize a site in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing pedestal...");

    let scaffold: &[(&str, &str)] = &[
        ("site.toml", DEFAULT_CONFIG),
        ("data/docs.json", DEFAULT_DOCS),
        ("examples/1000.example", DEFAULT_EXAMPLE),
        ("examples/5000.example", DEFAULT_INTEGRATION_EXAMPLE),
        ("lib/widget.js", DEFAULT_LIBRARY_JS),
        ("lib/widget.css", DEFAULT_LIBRARY_CSS),
        ("templates/_head.html", HEAD_TEMPLATE),
        ("templates/_header.html", HEADER_TEMPLATE),
        ("templates/_footer.html", FOOTER_TEMPLATE),
        ("templates/homepage.html", HOMEPAGE_TEMPLATE),
        ("templates/examples.html", EXAMPLES_TEMPLATE),
        ("templates/single-example.html", SINGLE_EXAMPLE_TEMPLATE),
        ("templates/docs.html", DOCS_TEMPLATE),
        ("templates/download.html", DOWNLOAD_TEMPLATE),
        ("templates/license.html", LICENSE_TEMPLATE),
    ];

    for (relative, content) in scaffold {
        let path = Path::new(relative);

        if path.exists() && !yes {
            tracing::warn!("{} already exists, skipping (use --yes to overwrite)", relative);
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(path, content).with_context(|| format!("Failed to write {relative}"))?;
        tracing::info!("Created {relative}");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'pedestal build --local' to generate the site.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Pedestal Configuration

[site]
# Output directory for the generated site
output = "website"

# Directory holding the page templates
templates = "templates"

# Directory the .example files are loaded from
examples = "examples"

# Documentation records
docs_data = "data/docs.json"

# Reference the local library copy instead of the hosted artifact
local_script = false

[library]
name = "widget"
version = "0.1.0"
js = "lib/widget.js"
css = "lib/widget.css"
author = "Your Name"
license = "MIT"

[scripts]
# Hosted, versioned script tag; used unless local_script is set
cdn = '<script src="https://unpkg.com/widget@0.1.0/dist/widget-0.1.0.min.js"></script>'

# Extra include for integration examples (ids starting with 5)
integration = '<script src="https://unpkg.com/interop@1.0.0/interop.min.js"></script>'

[homepage]
snippet = '''
var board = Widget('board', {
  draggable: true
})
'''

[[groups]]
name = "Basic Usage"
examples = ["1000"]

[[groups]]
name = "Integration"
examples = ["5000"]
"#;

const DEFAULT_DOCS: &str = r#"{
  "config": [
    "Board options",
    {
      "name": "draggable",
      "type": "Boolean",
      "default": "false",
      "desc": "Allow pieces to be dragged off and onto the board.",
      "examples": ["1000"]
    }
  ],
  "methods": [
    {
      "name": "resize(useAnimation)",
      "args": [["Boolean", "animate the resize"]],
      "desc": "Recalculate the board size from its container.",
      "examples": ["1000"]
    }
  ],
  "errors": [
    {
      "id": 1001,
      "desc": "The container element was not found in the DOM.",
      "fix": "Check that the id passed to Widget() matches an element on the page."
    }
  ]
}
"#;

const DEFAULT_EXAMPLE: &str = r#"===== id
1000

===== Name
Empty Board

===== Description
Create an empty board with no pieces.

===== HTML
<div id="board" style="width: 400px"></div>

===== JS
var board = Widget('board')
"#;

const DEFAULT_INTEGRATION_EXAMPLE: &str = r#"===== id
5000

===== Name
Interop Basics

===== Description
Drive the board from an external rules engine.

===== HTML
<div id="board" style="width: 400px"></div>

===== JS
var engine = Interop()
var board = Widget('board', {
  position: engine.start()
})
"#;

const DEFAULT_LIBRARY_JS: &str = r#"/* widget @VERSION */
window.Widget = function (id, config) {
  var el = document.getElementById(id)
  return {
    el: el,
    config: config || {}
  }
}
"#;

const DEFAULT_LIBRARY_CSS: &str = r#"/* widget @VERSION */
.widget-board {
  border: 1px solid #404040;
  box-sizing: content-box;
}
"#;

const HEAD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ page_title }} &middot; widget</title>
  <link rel="stylesheet" href="/css/widget.css">
</head>
"#;

const HEADER_TEMPLATE: &str = r#"<header class="site-header">
  <nav>
    <a class="brand" href="/">widget</a>
    <a href="/examples.html"{% if active == "examples" %} class="active"{% endif %}>Examples</a>
    <a href="/docs.html"{% if active == "docs" %} class="active"{% endif %}>Documentation</a>
    <a href="/download.html"{% if active == "download" %} class="active"{% endif %}>Download</a>
  </nav>
</header>
"#;

const FOOTER_TEMPLATE: &str = r#"<footer class="site-footer">
  <p><a href="/license.html">License</a></p>
</footer>
"#;

const HOMEPAGE_TEMPLATE: &str = r#"{{ head | safe }}
<body>
<main class="homepage">
  <h1>widget</h1>
  <div id="board" style="width: 400px"></div>
  <pre><code>{{ snippet }}</code></pre>
</main>
{{ footer | safe }}
{{ script_tag | safe }}
</body>
</html>
"#;

const EXAMPLES_TEMPLATE: &str = r#"{{ head | safe }}
<body>
{{ header | safe }}
<main class="examples-page">
  <aside id="examplesNav">
    {{ nav | safe }}
  </aside>
  <section id="exampleTarget"></section>
</main>
{{ footer | safe }}
{{ script_tag | safe }}
<script>
{{ examples_js | safe }}
</script>
</body>
</html>
"#;

const SINGLE_EXAMPLE_TEMPLATE: &str = r#"{{ head | safe }}
<body>
<main class="single-example">
  <h1>{{ name }}</h1>
  <p>{{ description }}</p>
  {{ markup | safe }}
  <pre><code>{{ source }}</code></pre>
</main>
{{ footer | safe }}
{{ script_tag | safe }}
{{ integration_script | safe }}
<script>
{{ source | safe }}
</script>
</body>
</html>
"#;

const DOCS_TEMPLATE: &str = r#"{{ head | safe }}
<body>
{{ header | safe }}
<main class="docs-page">
  <h2 id="config">Configuration</h2>
  <table class="docs-table">
    <thead><tr><th>Name</th><th>Default</th><th>Description</th><th>Examples</th></tr></thead>
    <tbody>
      {{ config_rows | safe }}
    </tbody>
  </table>

  <h2 id="methods">Methods</h2>
  <table class="docs-table">
    <thead><tr><th>Method</th><th>Arguments</th><th>Description</th><th>Examples</th></tr></thead>
    <tbody>
      {{ method_rows | safe }}
    </tbody>
  </table>

  <h2 id="errors">Errors</h2>
  <table class="docs-table">
    <thead><tr><th>Id</th><th>Description</th><th>How to Fix</th></tr></thead>
    <tbody>
      {{ error_rows | safe }}
    </tbody>
  </table>
</main>
{{ footer | safe }}
</body>
</html>
"#;

const DOWNLOAD_TEMPLATE: &str = r#"{{ head | safe }}
<body>
{{ header | safe }}
<main class="download-page">
  <h1>Download</h1>
  <p>Grab the versioned artifacts from the dist directory of a release, or
  install from your package manager of choice.</p>
</main>
{{ footer | safe }}
</body>
</html>
"#;

const LICENSE_TEMPLATE: &str = r#"{{ head | safe }}
<body>
<main class="license-page">
  <h1>License</h1>
  <p>Released under the MIT License.</p>
</main>
{{ footer | safe }}
</body>
</html>
"#;
