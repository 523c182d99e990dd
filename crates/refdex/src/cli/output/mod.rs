//! Rendering and JSON serialization for CLI output.

use std::{path::Path, process::ExitCode};

use refdex_catalog::Record;
use refdex_config::home_dir;
use refdex_highlight::emphasize_terms;
pub use refdex_highlight::{
    Highlighter, dim, error, header, indent_content, rule, subheader, success, warning,
};
use refdex_index::{CollectionResults, Match, SearchResults};
use serde::Serialize;
use serde_json::Value;

/// JSON output for `refdex search`.
#[derive(Serialize)]
pub struct JsonSearchOutput<'a> {
    /// The query as typed.
    pub query: &'a str,
    /// The normalized query tokens.
    pub tokens: &'a [String],
    /// Total matches across catalogs, ignoring the cap.
    pub total_matches: usize,
    /// Results per catalog, in configured order.
    pub catalogs: Vec<JsonCatalogResults<'a>>,
}

/// JSON output for one catalog's results.
#[derive(Serialize)]
pub struct JsonCatalogResults<'a> {
    /// Catalog name.
    pub name: &'a str,
    /// Matches before the cap.
    pub total: usize,
    /// Ranked matches, at most the cap.
    pub results: Vec<JsonMatch<'a>>,
}

/// JSON output for one ranked match.
#[derive(Serialize)]
pub struct JsonMatch<'a> {
    /// Aggregate score.
    pub score: f32,
    /// Display group of the record.
    pub group: &'a str,
    /// The matched record, all source fields included.
    pub record: &'a Record,
}

/// JSON output for `refdex get`.
#[derive(Serialize)]
pub struct JsonRecord<'a> {
    /// Catalog holding the record.
    pub catalog: &'a str,
    /// Position of the record in its catalog.
    pub position: usize,
    /// The record itself.
    pub record: &'a Record,
}

impl<'a> JsonSearchOutput<'a> {
    /// Builds the JSON view of a set of search results.
    pub fn new(results: &'a SearchResults<'a>, catalogs: &[&'a CollectionResults<'a>]) -> Self {
        Self {
            query: &results.query.raw,
            tokens: &results.query.tokens,
            total_matches: catalogs.iter().map(|c| c.total).sum(),
            catalogs: catalogs
                .iter()
                .map(|c| JsonCatalogResults {
                    name: c.name,
                    total: c.total,
                    results: c.results.iter().map(JsonMatch::from).collect(),
                })
                .collect(),
        }
    }
}

impl<'a> From<&Match<'a>> for JsonMatch<'a> {
    fn from(m: &Match<'a>) -> Self {
        Self {
            score: m.score,
            group: m.group_key(),
            record: m.record,
        }
    }
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Formats a path relative to `base` when it lies beneath it, with `~` for the home directory.
pub fn format_path_for_display(path: &Path, base: Option<&Path>) -> String {
    if let Some(relative) = base.and_then(|b| path.strip_prefix(b).ok())
        && !relative.as_os_str().is_empty()
    {
        return relative.display().to_string();
    }
    if let Ok(home) = home_dir()
        && let Ok(relative) = path.strip_prefix(&home)
    {
        return format!("~/{}", relative.display());
    }
    path.display().to_string()
}

/// Renders one catalog's results as text.
///
/// Records are listed in display order with a blank line between display groups. At
/// verbosity 1 and above each line carries its score and group.
pub fn format_catalog_results(
    catalog: &CollectionResults<'_>,
    tokens: &[String],
    verbose: u8,
) -> String {
    let mut out = String::new();
    let shown = catalog.results.len();
    let count = if catalog.is_truncated() {
        format!("showing {shown} of {}", catalog.total)
    } else if shown == 1 {
        "1 match".to_string()
    } else {
        format!("{shown} matches")
    };
    out.push_str(&format!("{} {}\n", header(catalog.name), dim(&format!("({count})"))));

    let mut previous_group: Option<&str> = None;
    for m in &catalog.results {
        let group = m.group_key();
        if previous_group.is_some_and(|g| g != group) {
            out.push('\n');
        }
        previous_group = Some(group);
        out.push_str(&format_match(m, tokens, verbose));
        out.push('\n');
    }
    out
}

/// Renders one match line.
fn format_match(m: &Match<'_>, tokens: &[String], verbose: u8) -> String {
    let record = m.record;
    let mut line = format!(
        "  {} {}",
        subheader(&format!("{:<8}", record.code)),
        emphasize_terms(&record.name, tokens)
    );
    if let Some(subcategory) = &record.subcategory {
        line.push_str(&format!(" {}", dim(&format!("[{subcategory}]"))));
    }
    if verbose > 0 {
        line.push_str(&format!(
            " {}",
            dim(&format!("score={:.1} group={}", m.score, m.group_key()))
        ));
    }
    if verbose > 1 && !record.alias_terms.is_empty() {
        line.push_str(&format!(
            "\n           {}",
            dim(&format!("aliases: {}", record.alias_terms.join(", ")))
        ));
    }
    line
}

/// Formats a JSON field value for display, without quotes around strings.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Removes ANSI color sequences.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn groups_are_separated_by_blank_lines() {
        let a = Record::new("H131", "Weekday evening - minor assessment");
        let b = Record::new("H132", "Weekday evening - reassessment");
        let c = Record::new("H121", "Night - minor assessment");
        let catalog = CollectionResults {
            name: "billing",
            slot: 0,
            results: vec![
                Match {
                    record: &a,
                    score: 90.0,
                    position: 0,
                },
                Match {
                    record: &b,
                    score: 80.0,
                    position: 1,
                },
                Match {
                    record: &c,
                    score: 70.0,
                    position: 2,
                },
            ],
            total: 3,
        };

        let text = strip_ansi(&format_catalog_results(&catalog, &[], 0));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "billing (3 matches)");
        assert!(lines[1].contains("H131"));
        assert!(lines[2].contains("H132"));
        assert_eq!(lines[3], "");
        assert!(lines[4].contains("H121"));
    }

    #[test]
    fn truncated_header_shows_total() {
        let a = Record::new("813", "Fracture of radius and ulna");
        let catalog = CollectionResults {
            name: "diagnostic",
            slot: 1,
            results: vec![Match {
                record: &a,
                score: 50.0,
                position: 0,
            }],
            total: 4,
        };
        let text = strip_ansi(&format_catalog_results(&catalog, &[], 1));
        assert!(text.starts_with("diagnostic (showing 1 of 4)"));
        assert!(text.contains("score=50.0"));
    }

    #[test]
    fn path_relative_to_base() {
        let base = Path::new("/work/project");
        assert_eq!(
            format_path_for_display(Path::new("/work/project/codes/ohip.json"), Some(base)),
            "codes/ohip.json"
        );
        assert_eq!(
            format_path_for_display(Path::new("/elsewhere/icd.json"), Some(base)),
            "/elsewhere/icd.json"
        );
    }

    #[test]
    fn path_under_home_uses_tilde() {
        let home = home_dir().unwrap();
        let path = home.join("codes").join("ohip.json");
        assert_eq!(
            format_path_for_display(&path, Some(Path::new("/unrelated"))),
            "~/codes/ohip.json"
        );
    }

    #[test]
    fn value_formatting() {
        assert_eq!(format_value(&serde_json::json!("Emergency")), "Emergency");
        assert_eq!(format_value(&serde_json::json!(45.85)), "45.85");
        assert_eq!(format_value(&Value::Null), "");
    }
}
