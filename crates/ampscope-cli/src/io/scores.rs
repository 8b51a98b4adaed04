use crate::error::{CliError, Result};
use ampscope::core::models::{ModelKind, ModelScoreSet};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

const SEQUENCE_COLUMNS: [&str; 3] = ["sequence", "peptide", "peptido"];
const SOURCE_COLUMNS: [&str; 2] = ["source", "fuente"];

/// Classifier output for one sequence, plus the source it was generated by if known.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreRecord {
    pub scores: ModelScoreSet,
    pub source: Option<String>,
}

struct ColumnLayout {
    sequence: usize,
    source: Option<usize>,
    models: Vec<(usize, ModelKind)>,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord) -> anyhow::Result<Self> {
        let find = |names: &[&'static str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|name| h.trim().eq_ignore_ascii_case(name)))
        };

        let sequence = find(&SEQUENCE_COLUMNS)
            .ok_or_else(|| anyhow::anyhow!("no 'sequence' column in header"))?;
        let source = find(&SOURCE_COLUMNS);

        let mut models: Vec<(usize, ModelKind)> = Vec::new();
        for (index, header) in headers.iter().enumerate() {
            match header.parse::<ModelKind>() {
                Ok(kind) if models.iter().any(|(_, k)| *k == kind) => {
                    warn!("Column '{}' repeats model {}; ignoring it.", header, kind);
                }
                Ok(kind) => models.push((index, kind)),
                Err(_) if index != sequence && Some(index) != source => {
                    debug!("Ignoring column '{}'.", header);
                }
                Err(_) => {}
            }
        }

        Ok(Self {
            sequence,
            source,
            models,
        })
    }
}

fn parse_score(cell: &str) -> anyhow::Result<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|_| anyhow::anyhow!("'{}' is not a number", cell))
}

/// Parses a scores table into records keyed by the uppercased sequence.
///
/// Empty score cells are absent scores. Present scores must lie in `[0, 100]`.
pub fn parse<R: Read>(reader: R) -> Result<HashMap<String, ScoreRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let layout = ColumnLayout::from_headers(csv_reader.headers()?)?;
    if layout.models.is_empty() {
        warn!("Scores table has no recognized model columns; every consensus will be unknown.");
    }

    let mut records = HashMap::new();
    for (row, result) in csv_reader.records().enumerate() {
        let record = result?;
        let Some(sequence) = record.get(layout.sequence) else {
            continue;
        };
        let sequence = sequence.to_ascii_uppercase();

        let mut scores = ModelScoreSet::new();
        for &(index, kind) in &layout.models {
            let value = parse_score(record.get(index).unwrap_or(""))
                .map_err(|e| anyhow::anyhow!("row {}, column {}: {}", row + 1, kind.key(), e))?;
            scores.set(kind, value)?;
        }

        let source = layout
            .source
            .and_then(|index| record.get(index))
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        if records
            .insert(sequence.clone(), ScoreRecord { scores, source })
            .is_some()
        {
            warn!("Sequence {} appears more than once; keeping the last row.", sequence);
        }
    }

    Ok(records)
}

pub fn read_scores(path: &Path) -> Result<HashMap<String, ScoreRecord>> {
    debug!("Reading classifier scores from {:?}", path);
    let file = File::open(path)?;
    let records = parse(file).map_err(|e| match e {
        CliError::Other(source) => CliError::FileParsing {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    debug!("Read scores for {} sequence(s).", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(content: &str) -> Result<HashMap<String, ScoreRecord>> {
        parse(content.as_bytes())
    }

    #[test]
    fn service_column_names_are_recognized() {
        let table = "Peptido,XGboost,Bosque Aleatorio,Red Neuronal,Arbol de Decisión,Regresión Lógistica,Clasificación XGboost\n\
                     KWKLFKK,80,70,90,60,50,AMP\n";
        let records = parse_str(table).unwrap();
        let record = &records["KWKLFKK"];
        assert_eq!(record.scores.present_count(), 5);
        assert_eq!(record.scores.get(ModelKind::GradientBoosted), Some(80.0));
        assert_eq!(record.scores.get(ModelKind::LogisticRegression), Some(50.0));
        assert_eq!(record.source, None);
    }

    #[test]
    fn empty_cells_are_absent_scores() {
        let records = parse_str("sequence,xgb,rf,nn\nkk,,42.5,\n").unwrap();
        let scores = records["KK"].scores;
        assert_eq!(scores.get(ModelKind::GradientBoosted), None);
        assert_eq!(scores.get(ModelKind::RandomForest), Some(42.5));
        assert_eq!(scores.present_count(), 1);
    }

    #[test]
    fn short_rows_leave_trailing_models_absent() {
        let records = parse_str("sequence,xgb,rf\nLL,10\n").unwrap();
        assert_eq!(records["LL"].scores.get(ModelKind::RandomForest), None);
    }

    #[test]
    fn source_column_is_read_when_present() {
        let records = parse_str("sequence,source,nn\nKK,stability,30\nLL,,40\n").unwrap();
        assert_eq!(records["KK"].source.as_deref(), Some("stability"));
        assert_eq!(records["LL"].source, None);
    }

    #[test]
    fn missing_sequence_column_is_a_parse_error() {
        let result = parse_str("id,xgb\n1,50\n");
        assert!(matches!(result, Err(CliError::Other(_))));
    }

    #[test]
    fn non_numeric_score_is_a_parse_error() {
        let result = parse_str("sequence,xgb\nKK,high\n");
        assert!(matches!(result, Err(CliError::Other(_))));
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let result = parse_str("sequence,xgb\nKK,120\n");
        assert!(matches!(result, Err(CliError::Score(_))));
    }

    #[test]
    fn read_scores_wraps_parse_failures_with_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        std::fs::write(&path, "id,xgb\n1,50\n").unwrap();
        let result = read_scores(&path);
        assert!(matches!(result, Err(CliError::FileParsing { path: p, .. }) if p == path));
    }
}
