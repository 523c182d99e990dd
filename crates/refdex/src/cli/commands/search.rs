//! Implementation of `refdex search`.

use std::process::ExitCode;

use refdex_index::{CollectionResults, ScoringParams, Searcher, explain_record};

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{JsonSearchOutput, dim, format_catalog_results, print_json, rule, subheader},
};

/// Runs a search across configured catalogs and prints ranked matches.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    for name in &cmd.catalogs {
        if ctx.config.catalog(name).is_none() {
            eprintln!("error: unknown catalog: {name}");
            let known: Vec<&str> = ctx.config.catalogs.iter().map(|c| c.name.as_str()).collect();
            if !known.is_empty() {
                eprintln!("Known catalogs: {}", known.join(", "));
            }
            return ExitCode::FAILURE;
        }
    }

    let searcher = match ctx.searcher(true) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let params = match cmd.limit {
        Some(limit) => searcher.params().clone().with_max_results(limit),
        None => searcher.params().clone(),
    };

    let query = cmd.query_text();
    let results = searcher.search_with_params(&query, &params);
    let shown: Vec<&CollectionResults<'_>> = results
        .collections
        .iter()
        .filter(|c| cmd.catalogs.is_empty() || cmd.catalogs.iter().any(|n| n == c.name))
        .collect();

    if cmd.json {
        return print_json(&JsonSearchOutput::new(&results, &shown));
    }

    if cmd.explain {
        print_query_summary(&results.query.normalized, &results.query.tokens, &shown);
    }

    if results.query.is_empty() || shown.iter().all(|c| c.results.is_empty()) {
        println!("{}", dim("No results found."));
        return ExitCode::SUCCESS;
    }

    let mut first = true;
    for catalog in shown.iter().filter(|c| !c.results.is_empty()) {
        if !first {
            println!();
        }
        first = false;
        print!(
            "{}",
            format_catalog_results(catalog, &results.query.tokens, cmd.verbose)
        );
        if cmd.explain {
            print_breakdowns(searcher, catalog, &results.query.tokens, &params);
        }
    }

    ExitCode::SUCCESS
}

/// Prints the normalized query, its tokens, and per-catalog totals.
fn print_query_summary(normalized: &str, tokens: &[String], catalogs: &[&CollectionResults<'_>]) {
    println!("{}", subheader("Query:"));
    println!("   normalized: \"{normalized}\"");
    println!("   tokens:     {}", format_tokens(tokens));
    for catalog in catalogs {
        println!(
            "   {}",
            dim(&format!(
                "{}: {} matched, {} shown",
                catalog.name,
                catalog.total,
                catalog.results.len()
            ))
        );
    }
    println!("{}", rule(40));
}

/// Prints the per-token tier breakdown of every shown result.
fn print_breakdowns(
    searcher: &Searcher,
    catalog: &CollectionResults<'_>,
    tokens: &[String],
    params: &ScoringParams,
) {
    let Some(collection) = searcher.index().collections().get(catalog.slot) else {
        return;
    };

    println!();
    println!("{}", subheader("Breakdown:"));
    for m in &catalog.results {
        let Some((_, derived)) = collection.get(m.position) else {
            continue;
        };
        let explanation = explain_record(derived, tokens, params);
        let parts: Vec<String> = explanation
            .tokens
            .iter()
            .map(|t| match t.tier {
                Some(tier) => format!("{} -> {tier} ({})", t.token, t.score),
                None => format!("{} -> no match", t.token),
            })
            .collect();
        println!(
            "   {:<8} {} {}",
            m.record.code,
            parts.join(", "),
            dim(&format!(
                "= {} x {} = {:.1}",
                explanation.sum, explanation.multiplier, explanation.score
            ))
        );
    }
}

/// Formats tokens as a quoted, comma-separated list.
fn format_tokens(tokens: &[String]) -> String {
    if tokens.is_empty() {
        return dim("(none)");
    }
    tokens
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
