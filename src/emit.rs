//! # Configuration Emitter
//!
//! Renders a [`SiteConfig`] in a form the site engine can load and writes
//! it to disk.
//!
//! - [`OutputFormat::Json`]: a plain JSON document.
//! - [`OutputFormat::JsModule`]: a CommonJS module exporting the same
//!   object, usable directly as the engine's config file. Module references
//!   become real `require` calls: code themes and content-transform plugins
//!   are loaded with `require(...)`, the sidebar and stylesheets are
//!   resolved with `require.resolve(...)`.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::info;

use serde_json::Value as JsonValue;

use crate::core::error::{DocsmithError, Result};
use crate::model::SiteConfig;

// Placeholders stand in for JS expressions until the JSON text exists.
const MARKER_PREFIX: &str = "__docsmith_js_";
const MARKER_SUFFIX: &str = "__";

/// Pointers to module references in the serialized config, and whether the
/// engine wants the module loaded or only its path resolved.
const MODULE_REFERENCES: [(&str, JsImport); 5] = [
    ("/presets/0/1/docs/sidebarPath", JsImport::Resolve),
    ("/presets/0/1/docs/rehypePlugins", JsImport::Require),
    ("/presets/0/1/theme/customCss", JsImport::Resolve),
    ("/themeConfig/prism/theme", JsImport::Require),
    ("/themeConfig/prism/darkTheme", JsImport::Require),
];

#[derive(Debug, Clone, Copy)]
enum JsImport {
    Require,
    Resolve,
}

impl JsImport {
    fn expression(self, specifier: &str) -> String {
        let quoted = specifier.replace('\\', "\\\\").replace('\'', "\\'");
        match self {
            JsImport::Require => format!("require('{quoted}')"),
            JsImport::Resolve => format!("require.resolve('{quoted}')"),
        }
    }
}

/// Output format of an emitted configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON document.
    #[default]
    Json,
    /// CommonJS module: `module.exports = {...};`.
    JsModule,
}

impl FromStr for OutputFormat {
    type Err = DocsmithError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "js" | "cjs" => Ok(OutputFormat::JsModule),
            other => Err(DocsmithError::config_error(
                format!("Unknown output format: {}", other),
                None,
            )),
        }
    }
}

/// Writes site configurations in one [`OutputFormat`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigEmitter {
    format: OutputFormat,
    pretty: bool,
}

impl ConfigEmitter {
    /// Creates an emitter producing pretty-printed output.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: true,
        }
    }

    /// Switches between pretty-printed and compact output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Renders `config` to a string.
    pub fn render(&self, config: &SiteConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = self.to_json(&serde_json::to_value(config)?)?;
                Ok(format!("{json}\n"))
            }
            OutputFormat::JsModule => {
                let mut value = serde_json::to_value(config)?;
                let expressions = mark_module_references(&mut value);
                let mut body = self.to_json(&value)?;
                for (index, expression) in expressions.iter().enumerate() {
                    body = body.replace(
                        &format!("\"{MARKER_PREFIX}{index}{MARKER_SUFFIX}\""),
                        expression,
                    );
                }
                Ok(format!(
                    "// @ts-check\n\n/** @type {{import('@docusaurus/types').Config}} */\nmodule.exports = {body};\n"
                ))
            }
        }
    }

    fn to_json(&self, value: &JsonValue) -> Result<String> {
        Ok(if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        })
    }

    /// Renders `config` and writes it to `path`, creating parent
    /// directories as needed.
    pub fn write(&self, config: &SiteConfig, path: &Path) -> Result<()> {
        let rendered = self.render(config)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    DocsmithError::io_error(parent.to_path_buf(), e)
                })?;
            }
        }

        fs::write(path, rendered)
            .map_err(|e| DocsmithError::io_error(path.to_path_buf(), e))?;

        info!("Wrote site configuration to {}", path.display());
        Ok(())
    }
}

// Replaces every module reference string with a placeholder and returns
// the JS expression for each placeholder index.
fn mark_module_references(value: &mut JsonValue) -> Vec<String> {
    let mut expressions = Vec::new();

    for (pointer, import) in MODULE_REFERENCES {
        let Some(slot) = value.pointer_mut(pointer) else {
            continue;
        };
        match slot {
            JsonValue::Array(items) => {
                for item in items {
                    mark(item, import, &mut expressions);
                }
            }
            other => mark(other, import, &mut expressions),
        }
    }

    expressions
}

fn mark(slot: &mut JsonValue, import: JsImport, expressions: &mut Vec<String>) {
    if let JsonValue::String(specifier) = slot {
        let expression = import.expression(specifier);
        *slot = JsonValue::String(format!(
            "{MARKER_PREFIX}{}{MARKER_SUFFIX}",
            expressions.len()
        ));
        expressions.push(expression);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ConfigBuilder;
    use crate::core::traits::FixedClock;
    use crate::params::SiteParams;
    use tempfile::TempDir;

    fn config() -> SiteConfig {
        let params =
            SiteParams::new("Site", "Tag", "https://site.example", "site")
                .with_seo_keywords("k")
                .with_google_tracking_id("g")
                .with_facebook_app_id("f");
        ConfigBuilder::new()
            .with_clock(FixedClock::from_year(2024).unwrap())
            .build(&params)
            .unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JS".parse::<OutputFormat>().unwrap(), OutputFormat::JsModule);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_json_parses_back() {
        let config = config();
        let rendered = ConfigEmitter::new(OutputFormat::Json)
            .render(&config)
            .unwrap();
        let parsed: SiteConfig = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_render_compact_is_single_line() {
        let rendered = ConfigEmitter::new(OutputFormat::Json)
            .with_pretty(false)
            .render(&config())
            .unwrap();
        assert_eq!(rendered.lines().count(), 1);
    }

    #[test]
    fn test_render_js_module() {
        let rendered = ConfigEmitter::new(OutputFormat::JsModule)
            .render(&config())
            .unwrap();
        assert!(rendered.contains("module.exports = {"));
        assert!(rendered.trim_end().ends_with("};"));
        assert!(!rendered.contains(MARKER_PREFIX));
    }

    #[test]
    fn test_js_module_loads_themes_and_plugins() {
        let rendered = ConfigEmitter::new(OutputFormat::JsModule)
            .render(&config())
            .unwrap();
        assert!(rendered.contains(
            "\"theme\": require('prism-react-renderer/themes/github')"
        ));
        assert!(rendered.contains(
            "\"darkTheme\": require('prism-react-renderer/themes/dracula')"
        ));
        assert!(rendered.contains("require('./components/lcp-fetchpriority')"));
        assert!(rendered
            .contains("\"sidebarPath\": require.resolve('./sidebars.js')"));
        assert!(rendered.contains("require.resolve('./src/css/global.css')"));
        assert!(
            rendered.contains("require.resolve('./src-local/css/custom.css')")
        );
    }

    #[test]
    fn test_js_module_compact_keeps_references() {
        let rendered = ConfigEmitter::new(OutputFormat::JsModule)
            .with_pretty(false)
            .render(&config())
            .unwrap();
        assert!(rendered.contains(
            "\"rehypePlugins\":[require('./components/lcp-fetchpriority')]"
        ));
    }

    #[test]
    fn test_json_keeps_module_references_as_strings() {
        let rendered = ConfigEmitter::new(OutputFormat::Json)
            .render(&config())
            .unwrap();
        assert!(!rendered.contains("require("));
        assert!(rendered
            .contains("\"theme\": \"prism-react-renderer/themes/github\""));
    }

    #[test]
    fn test_js_import_quotes_specifier() {
        assert_eq!(
            JsImport::Require.expression("it's"),
            "require('it\\'s')"
        );
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/out/docusaurus.config.json");

        ConfigEmitter::new(OutputFormat::Json)
            .write(&config(), &path)
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"projectName\": \"site\""));
    }
}
