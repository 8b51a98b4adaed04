use crate::cli::OutputFormat;
use crate::error::Result;
use ampscope::core::models::ModelKind;
use ampscope::workflows::screen::PeptideReport;
use ampscope::workflows::summary::GroupSummary;
use std::io::Write;

const PROFILE_HEADERS: [&str; 9] = [
    "id",
    "source",
    "sequence",
    "length",
    "molecularWeight",
    "hydrophobicity",
    "netCharge",
    "isoelectricPoint",
    "bomanIndex",
];

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_csv<W: Write>(reports: &[&PeptideReport], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let headers = PROFILE_HEADERS
        .iter()
        .copied()
        .chain(ModelKind::ALL.iter().map(|kind| kind.key()))
        .chain(std::iter::once("consensusScore"));
    csv_writer.write_record(headers)?;

    for report in reports {
        let profile = &report.profile;
        let mut row = vec![
            report.id.clone(),
            report.source.clone().unwrap_or_default(),
            profile.sequence.to_string(),
            profile.length.to_string(),
            profile.molecular_weight.to_string(),
            profile.hydrophobicity.to_string(),
            profile.net_charge.to_string(),
            profile.isoelectric_point.to_string(),
            profile.boman_index.to_string(),
        ];
        row.extend(
            report
                .consensus
                .per_model_scores
                .iter()
                .map(|(_, score)| optional(score)),
        );
        row.push(optional(report.consensus_score()));
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn write_fasta<W: Write>(reports: &[&PeptideReport], mut writer: W) -> Result<()> {
    for report in reports {
        let consensus = report
            .consensus_score()
            .map(|c| format!("{:.4}", c))
            .unwrap_or_else(|| "unknown".to_string());
        write!(writer, ">{}", report.id)?;
        if let Some(source) = &report.source {
            write!(writer, " | source={}", source)?;
        }
        writeln!(writer, " | consensus={}", consensus)?;
        writeln!(writer, "{}", report.profile.sequence)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `reports` in the requested format. Unknown values become empty CSV cells, JSON
/// `null`s, or `unknown` in FASTA headers.
pub fn write_reports<W: Write>(
    reports: &[&PeptideReport],
    format: OutputFormat,
    mut writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(reports, writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, reports)?;
            writeln!(writer)?;
            writer.flush()?;
            Ok(())
        }
        OutputFormat::Fasta => write_fasta(reports, writer),
    }
}

pub fn write_summaries<W: Write>(summaries: &[GroupSummary], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, summaries)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ampscope::core::models::ModelScoreSet;
    use ampscope::engine::config::ProfilerConfig;
    use ampscope::engine::progress::ProgressReporter;
    use ampscope::workflows::screen::{self, Candidate};
    use ampscope::workflows::summary;

    fn reports() -> Vec<PeptideReport> {
        let scores = ModelScoreSet::new()
            .with_score(ModelKind::GradientBoosted, 80.0)
            .unwrap()
            .with_score(ModelKind::NeuralNetwork, 60.0)
            .unwrap();
        let candidates = vec![
            Candidate::new("pep-1", "KWKLFKK")
                .with_source("prediction")
                .with_scores(scores),
            Candidate::new("pep-2", "GLFDIVKKVVGALGSL"),
        ];
        screen::run(
            &candidates,
            &ProfilerConfig::default(),
            &ProgressReporter::new(),
        )
    }

    fn render(format: OutputFormat) -> String {
        let reports = reports();
        let refs: Vec<&PeptideReport> = reports.iter().collect();
        let mut buffer = Vec::new();
        write_reports(&refs, format, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn csv_has_one_row_per_report_and_empty_cells_for_unknowns() {
        let output = render(OutputFormat::Csv);
        let mut reader = csv::Reader::from_reader(output.as_bytes());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 15);
        assert_eq!(&headers[9], "xgb");
        assert_eq!(&headers[14], "consensusScore");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "pep-1");
        assert_eq!(&rows[0][1], "prediction");
        assert_eq!(&rows[0][9], "80");
        assert_eq!(&rows[0][10], "");
        assert_eq!(&rows[0][14], "0.7");
        assert_eq!(&rows[1][1], "");
        assert_eq!(&rows[1][14], "");
    }

    #[test]
    fn json_uses_null_for_unknown_consensus() {
        let output = render(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["consensusScore"], 0.7);
        assert!(array[1]["consensusScore"].is_null());
        assert!(array[1]["source"].is_null());
    }

    #[test]
    fn fasta_headers_carry_source_and_consensus() {
        let output = render(OutputFormat::Fasta);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                ">pep-1 | source=prediction | consensus=0.7000",
                "KWKLFKK",
                ">pep-2 | consensus=unknown",
                "GLFDIVKKVVGALGSL",
            ]
        );
    }

    #[test]
    fn empty_report_list_still_writes_csv_headers() {
        let mut buffer = Vec::new();
        write_reports(&[], OutputFormat::Csv, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("id,source,sequence,length"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn summaries_serialize_composition_by_residue_code() {
        let reports = reports();
        let summaries = summary::summarize(&reports);
        let mut buffer = Vec::new();
        write_summaries(&summaries, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["source"], "prediction");
        assert!(value[0]["composition"]["K"].as_f64().unwrap() > 0.0);
        assert!(value[1]["source"].is_null());
    }
}
