use crate::cli::ProfileArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use ampscope::engine::config::{
    FilterCriteria, FilterCriteriaBuilder, ProfilerConfig, ProfilerConfigBuilder,
};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialProfilerConfig {
    #[serde(rename = "reference-ph")]
    reference_ph: Option<f64>,
    #[serde(rename = "pi-tolerance")]
    pi_tolerance: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialFilterConfig {
    #[serde(rename = "min-length")]
    min_length: Option<usize>,
    #[serde(rename = "max-length")]
    max_length: Option<usize>,
    threshold: Option<f64>,
    #[serde(rename = "excluded-residues")]
    excluded_residues: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialProfileConfig {
    profiler: Option<PartialProfilerConfig>,
    filter: Option<PartialFilterConfig>,
}

/// Fully resolved settings for one `profile` run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSettings {
    pub profiler: ProfilerConfig,
    pub filter: FilterCriteria,
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

impl PartialProfileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves every setting with precedence CLI flag > `--set` > file > built-in default.
    pub fn merge_with_cli(mut self, args: &ProfileArgs) -> Result<ProfileSettings> {
        self.apply_set_values(&args.set_values)?;

        let profiler_file = self.profiler.take().unwrap_or_default();
        let filter_file = self.filter.take().unwrap_or_default();

        let mut profiler = ProfilerConfigBuilder::new();
        if let Some(ph) = args.reference_ph.or(profiler_file.reference_ph) {
            profiler = profiler.reference_ph(ph);
        }
        if let Some(tolerance) = args.pi_tolerance.or(profiler_file.pi_tolerance) {
            profiler = profiler.pi_tolerance(tolerance);
        }

        let mut filter = FilterCriteriaBuilder::new();
        if let Some(min) = args.min_length.or(filter_file.min_length) {
            filter = filter.min_length(min);
        }
        if let Some(max) = args.max_length.or(filter_file.max_length) {
            filter = filter.max_length(max);
        }
        if let Some(threshold) = args.threshold.or(filter_file.threshold) {
            filter = filter.threshold(threshold);
        }
        if let Some(codes) = args.exclude.as_ref().or(filter_file.excluded_residues.as_ref()) {
            filter = filter.excluded_residues(parser::parse_residue_list(codes)?);
        }

        Ok(ProfileSettings {
            profiler: profiler.build()?,
            filter: filter.build()?,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = parser::parse_key_value(kv_pair)
                .map_err(|e| CliError::Config(e.to_string()))?;

            match key {
                "profiler.reference-ph" => {
                    self.profiler
                        .get_or_insert_with(Default::default)
                        .reference_ph = Some(parse_value(key, value_str, "float")?);
                }
                "profiler.pi-tolerance" => {
                    self.profiler
                        .get_or_insert_with(Default::default)
                        .pi_tolerance = Some(parse_value(key, value_str, "float")?);
                }
                "filter.min-length" => {
                    self.filter.get_or_insert_with(Default::default).min_length =
                        Some(parse_value(key, value_str, "integer")?);
                }
                "filter.max-length" => {
                    self.filter.get_or_insert_with(Default::default).max_length =
                        Some(parse_value(key, value_str, "integer")?);
                }
                "filter.threshold" => {
                    self.filter.get_or_insert_with(Default::default).threshold =
                        Some(parse_value(key, value_str, "float")?);
                }
                "filter.excluded-residues" => {
                    self.filter
                        .get_or_insert_with(Default::default)
                        .excluded_residues = Some(value_str.to_string());
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
