//! Survey the root pool
//!
//! Runs the solutions finder against every root word and collects statistics
//! on how rich each round would be.

use super::solutions::find_solutions;
use crate::engine::WordListDictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Summary of one root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: String,
    pub word_count: usize,
    pub max_score: u32,
}

/// Statistics across the surveyed roots
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub average_words: f64,
    pub average_max_score: f64,
    pub richest: Option<RootSummary>,
    /// Roots with the fewest findable words, poorest first
    pub poorest: Vec<RootSummary>,
    pub total_time: Duration,
}

/// Survey the first `limit` roots of `pool` (all of them by default)
#[must_use]
pub fn run_survey(
    pool: &[String],
    dictionary: &WordListDictionary,
    locale: &str,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = pool.iter().take(limit.unwrap_or(pool.len())).collect();

    println!("🔎 Surveying {} root words...", roots.len());

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let summaries: Vec<RootSummary> = roots
        .par_iter()
        .filter_map(|root| {
            let summary = find_solutions(root, dictionary, locale)
                .ok()
                .map(|result| RootSummary {
                    word_count: result.count(),
                    max_score: result.max_score,
                    root: result.root,
                });
            pb.inc(1);
            summary
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(summaries, start.elapsed())
}

fn summarize(mut summaries: Vec<RootSummary>, total_time: Duration) -> SurveyStatistics {
    let total_roots = summaries.len();

    let (average_words, average_max_score) = if total_roots > 0 {
        let words: usize = summaries.iter().map(|s| s.word_count).sum();
        let score: u32 = summaries.iter().map(|s| s.max_score).sum();
        (
            words as f64 / total_roots as f64,
            f64::from(score) / total_roots as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let richest = summaries
        .iter()
        .max_by(|a, b| {
            a.max_score
                .cmp(&b.max_score)
                .then_with(|| b.root.cmp(&a.root))
        })
        .cloned();

    summaries.sort_by(|a, b| {
        a.word_count
            .cmp(&b.word_count)
            .then_with(|| a.root.cmp(&b.root))
    });
    summaries.truncate(5);

    SurveyStatistics {
        total_roots,
        average_words,
        average_max_score,
        richest,
        poorest: summaries,
        total_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(root: &str, word_count: usize, max_score: u32) -> RootSummary {
        RootSummary {
            root: root.to_string(),
            word_count,
            max_score,
        }
    }

    #[test]
    fn summarize_averages() {
        let stats = summarize(
            vec![summary("stone", 4, 20), summary("silkworm", 6, 30)],
            Duration::ZERO,
        );

        assert_eq!(stats.total_roots, 2);
        assert!((stats.average_words - 5.0).abs() < f64::EPSILON);
        assert!((stats.average_max_score - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summarize_picks_richest_and_poorest() {
        let stats = summarize(
            vec![
                summary("stone", 4, 20),
                summary("silkworm", 6, 30),
                summary("notebook", 2, 12),
            ],
            Duration::ZERO,
        );

        assert_eq!(stats.richest.unwrap().root, "silkworm");
        let poorest: Vec<&str> = stats.poorest.iter().map(|s| s.root.as_str()).collect();
        assert_eq!(poorest, vec!["notebook", "stone", "silkworm"]);
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(Vec::new(), Duration::ZERO);
        assert_eq!(stats.total_roots, 0);
        assert!(stats.richest.is_none());
        assert!(stats.poorest.is_empty());
    }

    #[test]
    fn survey_respects_limit() {
        let dictionary =
            WordListDictionary::from_words(["stone", "tones", "notes", "silk", "milk"]);
        let pool = vec![
            "stone".to_string(),
            "silkworm".to_string(),
            "notebook".to_string(),
        ];

        let stats = run_survey(&pool, &dictionary, "en", Some(2));
        assert_eq!(stats.total_roots, 2);
        assert_eq!(stats.richest.unwrap().root, "stone");
    }
}
