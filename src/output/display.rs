//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge, score_bar, spaced_letters};
use crate::commands::{SolutionsResult, SurveyStatistics};
use crate::engine::RoundState;
use colored::Colorize;

/// Print the words found so far in a round
pub fn print_round(state: &RoundState) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root: {}   Score: {}",
        spaced_letters(state.root_word()).bright_cyan().bold(),
        state.score().to_string().green().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("Found Words: {}", state.found_count());
    for word in state.accepted_words() {
        println!("  {} {}", length_badge(word).bright_black(), word);
    }
    println!();
}

/// Print every word findable from a root
pub fn print_solutions(result: &SolutionsResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        spaced_letters(&result.root).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📚 {} words, maximum score {}",
        result.count().to_string().bright_white().bold(),
        result.max_score.to_string().bright_yellow().bold()
    );

    let shown = limit.unwrap_or(result.count());
    let mut running = 0;
    for solution in result.solutions.iter().take(shown) {
        running += solution.points;
        println!(
            "   {} {:<12} {:>2} pts  [{}]",
            length_badge(&solution.word).bright_black(),
            solution.word,
            solution.points,
            score_bar(running, result.max_score, 20).green()
        );
    }

    if shown < result.count() {
        println!(
            "   {}",
            format!("… and {} more", result.count() - shown).bright_black()
        );
    }
}

/// Print statistics from surveying the root pool
pub fn print_survey(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT POOL SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Roots surveyed:   {}", stats.total_roots);
    println!(
        "   Average words:    {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("   Average max:      {:.1} pts", stats.average_max_score);
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    if let Some(richest) = &stats.richest {
        println!("\n✨ {}", "Richest Root".green().bold());
        println!(
            "   {} ({} words, {} pts)",
            richest.root.to_uppercase().bright_green(),
            richest.word_count,
            richest.max_score
        );
    }

    if !stats.poorest.is_empty() {
        let most = stats
            .poorest
            .iter()
            .map(|s| s.word_count)
            .max()
            .unwrap_or(1)
            .max(1);

        println!("\n😰 {}", "Poorest Roots".yellow().bold());
        for summary in &stats.poorest {
            println!(
                "   {:<10} {} {:4} words",
                summary.root.to_uppercase().yellow(),
                create_progress_bar(summary.word_count as f64, most as f64, 20).bright_black(),
                summary.word_count
            );
        }
    }
}
