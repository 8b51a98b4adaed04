use crate::cli::ProfileArgs;
use crate::config::PartialProfileConfig;
use crate::error::Result;
use crate::io::{export, scores, sequences};
use crate::utils::progress::ScreeningProgress;
use ampscope::engine::progress::ProgressReporter;
use ampscope::workflows::screen::{self, Candidate};
use ampscope::workflows::{filter, summary};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::{debug, info, warn};

fn build_candidates(
    records: Vec<sequences::SequenceRecord>,
    score_records: HashMap<String, scores::ScoreRecord>,
    default_source: Option<&str>,
) -> Vec<Candidate> {
    let mut matched: HashSet<String> = HashSet::new();
    let candidates: Vec<Candidate> = records
        .into_iter()
        .map(|record| {
            let scored = score_records
                .get(&record.sequence)
                .cloned()
                .unwrap_or_default();
            if score_records.contains_key(&record.sequence)
                && !matched.insert(record.sequence.clone())
            {
                debug!(
                    "Sequence '{}' appears more than once; reusing its score row for '{}'.",
                    record.sequence, record.id
                );
            }
            let mut candidate =
                Candidate::new(record.id, record.sequence).with_scores(scored.scores);
            if let Some(source) = scored.source.as_deref().or(default_source) {
                candidate = candidate.with_source(source);
            }
            candidate
        })
        .collect();

    let unmatched = score_records
        .keys()
        .filter(|sequence| !matched.contains(*sequence))
        .count();
    if unmatched > 0 {
        warn!(
            "{} scored sequence(s) do not appear in the input and were ignored.",
            unmatched
        );
    }
    candidates
}

pub fn run(args: ProfileArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialProfileConfig::from_file(path)?,
        None => PartialProfileConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let settings = partial_config.merge_with_cli(&args)?;
    debug!("Resolved settings: {:?}", settings);

    info!("Loading sequences from {:?}", &args.input);
    let records = sequences::read_sequences(&args.input)?;

    let score_records = match &args.scores {
        Some(path) => {
            info!("Loading classifier scores from {:?}", path);
            scores::read_scores(path)?
        }
        None => HashMap::new(),
    };

    let candidates = build_candidates(records, score_records, args.source.as_deref());

    let progress = ScreeningProgress::new();
    let reporter = ProgressReporter::with_callback(progress.callback());

    eprintln!("Screening {} candidate(s)...", candidates.len());
    let reports = screen::run(&candidates, &settings.profiler, &reporter);
    let accepted = filter::apply(&reports, &settings.filter);

    info!(
        "{} of {} candidate(s) passed the filter.",
        accepted.len(),
        reports.len()
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            export::write_reports(&accepted, args.format, BufWriter::new(file))?;
            eprintln!(
                "✓ {} report(s) written to: {}",
                accepted.len(),
                path.display()
            );
        }
        None => {
            export::write_reports(&accepted, args.format, io::stdout().lock())?;
        }
    }

    if let Some(path) = &args.summary {
        let summaries = summary::summarize(accepted.iter().copied());
        export::write_summaries(&summaries, BufWriter::new(File::create(path)?))?;
        eprintln!(
            "✓ Summary of {} source group(s) written to: {}",
            summaries.len(),
            path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::io::scores::ScoreRecord;
    use crate::io::sequences::SequenceRecord;
    use ampscope::core::models::{ModelKind, ModelScoreSet};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn record(id: &str, sequence: &str) -> SequenceRecord {
        SequenceRecord {
            id: id.to_string(),
            sequence: sequence.to_string(),
        }
    }

    #[test]
    fn candidates_pick_up_scores_and_sources_by_sequence() {
        let mut score_records = HashMap::new();
        score_records.insert(
            "KK".to_string(),
            ScoreRecord {
                scores: ModelScoreSet::new()
                    .with_score(ModelKind::RandomForest, 40.0)
                    .unwrap(),
                source: Some("stability".to_string()),
            },
        );

        let candidates = build_candidates(
            vec![record("a", "KK"), record("b", "LL")],
            score_records,
            Some("batch-7"),
        );

        assert_eq!(candidates[0].source.as_deref(), Some("stability"));
        assert_eq!(
            candidates[0].scores.get(ModelKind::RandomForest),
            Some(40.0)
        );
        assert_eq!(candidates[1].source.as_deref(), Some("batch-7"));
        assert!(candidates[1].scores.is_empty());
    }

    #[test]
    fn duplicate_sequences_share_one_score_row() {
        let mut score_records = HashMap::new();
        score_records.insert(
            "KK".to_string(),
            ScoreRecord {
                scores: ModelScoreSet::new()
                    .with_score(ModelKind::RandomForest, 40.0)
                    .unwrap(),
                source: None,
            },
        );

        let candidates = build_candidates(
            vec![record("a", "KK"), record("b", "KK"), record("c", "KK")],
            score_records,
            None,
        );

        assert_eq!(candidates.len(), 3);
        for candidate in &candidates {
            assert_eq!(
                candidate.scores.get(ModelKind::RandomForest),
                Some(40.0),
                "candidate {} lost its scores",
                candidate.id
            );
        }
    }

    #[test]
    fn profile_command_writes_filtered_reports_and_summary() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("batch.fasta");
        let scores = dir.path().join("scores.csv");
        let output = dir.path().join("reports.json");
        let summary_path = dir.path().join("summary.json");
        fs::write(&input, ">keep\nKWKLFKK\n>low\nGLFDIVKK\n>cys\nKKCKK\n").unwrap();
        fs::write(
            &scores,
            "sequence,xgb,nn\nKWKLFKK,90,70\nGLFDIVKK,10,20\nKKCKK,95,95\n",
        )
        .unwrap();

        let cli = Cli::parse_from([
            "ampscope",
            "profile",
            "-i",
            input.to_str().unwrap(),
            "-s",
            scores.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--format",
            "json",
            "--threshold",
            "0.5",
            "--exclude",
            "C",
            "--summary",
            summary_path.to_str().unwrap(),
        ]);
        let Commands::Profile(args) = cli.command else {
            panic!("Expected 'profile' subcommand");
        };
        run(args).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let ids: Vec<&str> = written
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["keep"]);
        assert_eq!(written[0]["consensusScore"], 0.8);

        let summaries: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&summary_path).unwrap()).unwrap();
        assert_eq!(summaries[0]["count"], 1);
    }
}
