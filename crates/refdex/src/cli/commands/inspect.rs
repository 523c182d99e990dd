//! Implementation of `refdex inspect`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use refdex_index::ScoringParams;
use refdex_query::Query;

use crate::cli::{
    args::InspectWhat,
    context::CommandContext,
    output::{dim, header, subheader},
};

/// Inspects query parsing or record scoring.
pub fn run(ctx: &mut CommandContext, what: InspectWhat) -> ExitCode {
    match what {
        InspectWhat::Query { query } => cmd_inspect_query(&query.join(" ")),
        InspectWhat::Score { code, query } => cmd_inspect_score(ctx, &code, &query.join(" ")),
    }
}

/// Implements `refdex inspect query` - show normalization and tokenization.
///
/// Eligibility uses the default thresholds since no configuration is loaded.
fn cmd_inspect_query(raw: &str) -> ExitCode {
    let query = Query::parse(raw);
    let params = ScoringParams::default();

    println!("{}", subheader("Raw:"));
    println!("   \"{}\"", query.raw);
    println!("{}", subheader("Normalized:"));
    println!("   \"{}\"", query.normalized);
    println!();

    if query.is_empty() {
        println!("{}", dim("No tokens: this query matches nothing."));
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Tokens ({}):", query.token_count())));
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Token", "Length", "Prefix", "Substring", "Fuzzy"]);
    for token in &query.tokens {
        let len = token.chars().count();
        table.add_row(vec![
            Cell::new(token),
            Cell::new(len.to_string()),
            Cell::new(yes_no(len >= params.min_prefix_length)),
            Cell::new(yes_no(len >= params.min_substring_length)),
            Cell::new(yes_no(
                params.max_edit_distance > 0 && len >= params.min_fuzzy_length,
            )),
        ]);
    }
    println!("{table}");

    if query.is_multi_token() {
        println!(
            "{}",
            dim(&format!(
                "Every token must match; summed scores are multiplied by {}.",
                params.multi_token_bonus
            ))
        );
    }

    ExitCode::SUCCESS
}

/// Implements `refdex inspect score` - show how one record scores against a query.
fn cmd_inspect_score(ctx: &mut CommandContext, code: &str, raw: &str) -> ExitCode {
    let searcher = match ctx.searcher(true) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let Some(explanation) = searcher.explain(raw, code) else {
        eprintln!("error: no record with code: {}", code.trim());
        return ExitCode::FAILURE;
    };

    let record = explanation.record;
    println!(
        "{} {} {}",
        header(&record.code),
        record.name,
        dim(&format!("({})", explanation.collection))
    );
    println!("{}", dim(&format!("query: {}", explanation.query)));
    println!();

    let breakdown = &explanation.breakdown;
    if breakdown.tokens.is_empty() {
        println!("{}", dim("No tokens: this query matches nothing."));
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Token", "Tier", "Score"]);
    for token in &breakdown.tokens {
        let tier = token
            .tier
            .map_or_else(|| "no match".to_string(), |t| t.to_string());
        table.add_row(vec![
            Cell::new(&token.token),
            Cell::new(tier),
            Cell::new(token.score.to_string()),
        ]);
    }
    println!("{table}");

    println!("   sum:        {}", breakdown.sum);
    println!("   multiplier: {}", breakdown.multiplier);
    println!("   score:      {:.1}", breakdown.score);
    if !breakdown.is_match() {
        println!();
        println!(
            "{}",
            dim("Not a match: every token must match at least one tier.")
        );
    }

    ExitCode::SUCCESS
}

/// Renders a flag as "yes" or "no".
fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
