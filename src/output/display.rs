//! Display functions for command results

use super::formatters::{chain_letter_count, format_numbered_chain, reduction_percent};
use crate::commands::{AnalysisReport, BuildReport, SolveReport};
use colored::Colorize;

/// Print the result of solving a board
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Board: {}   Mode: {}",
        report.puzzle.bright_yellow().bold(),
        report.mode
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        let before = report.dictionary_stats;
        let after = report.domain_stats;
        println!(
            "\n📖 Dictionary: {} words, {} nodes",
            before.word_count, before.node_count
        );
        println!(
            "   Playable:   {} words, {} nodes ({:.1}% pruned)",
            after.word_count,
            after.node_count,
            reduction_percent(before.word_count, after.word_count)
        );
        println!("   Time:       {:.3}s", report.duration.as_secs_f64());
    }

    if report.solutions.is_empty() {
        println!("\n{}", "❌ No solutions found".red().bold());
        return;
    }

    let letters = chain_letter_count(&report.solutions[0]);
    println!(
        "\n{}",
        format!(
            "✅ {} solutions of {} letters",
            report.solutions.len(),
            letters
        )
        .green()
        .bold()
    );
    for (i, solution) in report.solutions.iter().enumerate() {
        println!("   {}", format_numbered_chain(i + 1, solution));
    }
}

/// Print the result of board analysis
pub fn print_analysis_report(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BOARD ANALYSIS:".bright_cyan().bold(),
        report.puzzle.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} letters on {} edges",
        report.letter_count, report.edge_count
    );
    println!(
        "   Dictionary:    {} words, {} nodes, depth {}",
        report.dictionary_stats.word_count,
        report.dictionary_stats.node_count,
        report.dictionary_stats.max_depth
    );
    println!(
        "   Playable:      {} words, {} nodes, depth {} ({:.1}% pruned)",
        report.domain_stats.word_count,
        report.domain_stats.node_count,
        report.domain_stats.max_depth,
        reduction_percent(
            report.dictionary_stats.word_count,
            report.domain_stats.word_count
        )
    );

    println!("   Viable starts: {}", format_letters(&report.viable_starts));
    if report.dead_letters.is_empty() {
        println!("   Dead letters:  {}", "none".green());
    } else {
        println!(
            "   Dead letters:  {} {}",
            format_letters(&report.dead_letters).red().bold(),
            "(board is unsolvable)".red()
        );
    }

    if !report.sample_words.is_empty() {
        println!("\n📝 {}", "Sample playable words:".bright_cyan().bold());
        for word in &report.sample_words {
            println!("   {word}");
        }
    }
}

/// Print the result of a dictionary build
pub fn print_build_report(report: &BuildReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY BUILD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📖 Source: {}", report.source);
    println!(
        "   Words:   {}",
        format!("{}", report.words).bright_yellow().bold()
    );
    if report.skipped > 0 {
        println!(
            "   Skipped: {} ",
            format!("{} invalid lines", report.skipped).yellow()
        );
    }
    println!("   Nodes:   {}", report.stats.node_count);
    println!("   Depth:   {}", report.stats.max_depth);

    println!(
        "\n{}",
        format!("✅ Wrote {}", report.output.display())
            .green()
            .bold()
    );
}

fn format_letters(letters: &[char]) -> String {
    if letters.is_empty() {
        return "none".to_string();
    }
    letters
        .iter()
        .map(|letter| letter.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
