//! Configuration templates for `refdex init`.
//!
//! Templates are stored as valid TOML files and returned as commented-out
//! example configurations.

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Comments out every setting in a TOML template so `init` writes an inert example.
///
/// Comment lines, indented or not, are kept verbatim. Whitespace-only lines collapse to
/// empty lines.
fn comment_template(template: &str) -> String {
    template
        .lines()
        .map(|line| match line.trim_start() {
            "" => "\n".to_string(),
            text if text.starts_with('#') => format!("{line}\n"),
            _ => format!("# {line}\n"),
        })
        .collect()
}
