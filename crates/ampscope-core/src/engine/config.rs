use super::isoelectric::{DEFAULT_TOLERANCE, MAX_PH, MIN_PH};
use crate::core::residues::AminoAcid;
use thiserror::Error;

/// pH at which the reported net charge is evaluated unless configured otherwise.
pub const DEFAULT_REFERENCE_PH: f64 = 7.0;

pub const DEFAULT_MIN_LENGTH: usize = 0;
pub const DEFAULT_MAX_LENGTH: usize = 32;
pub const DEFAULT_THRESHOLD: f64 = 0.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilerConfig {
    pub reference_ph: f64,
    pub pi_tolerance: f64,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            reference_ph: DEFAULT_REFERENCE_PH,
            pi_tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[derive(Default)]
pub struct ProfilerConfigBuilder {
    reference_ph: Option<f64>,
    pi_tolerance: Option<f64>,
}

impl ProfilerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference_ph(mut self, ph: f64) -> Self {
        self.reference_ph = Some(ph);
        self
    }
    pub fn pi_tolerance(mut self, tolerance: f64) -> Self {
        self.pi_tolerance = Some(tolerance);
        self
    }

    pub fn build(self) -> Result<ProfilerConfig, ConfigError> {
        let reference_ph = self.reference_ph.unwrap_or(DEFAULT_REFERENCE_PH);
        if !reference_ph.is_finite() || !(MIN_PH..=MAX_PH).contains(&reference_ph) {
            return Err(ConfigError::InvalidParameter {
                name: "reference_ph",
                reason: format!("{reference_ph} is outside the pH range [{MIN_PH}, {MAX_PH}]"),
            });
        }

        let pi_tolerance = self.pi_tolerance.unwrap_or(DEFAULT_TOLERANCE);
        if !pi_tolerance.is_finite() || pi_tolerance <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "pi_tolerance",
                reason: format!("{pi_tolerance} must be a positive, finite pH width"),
            });
        }

        Ok(ProfilerConfig {
            reference_ph,
            pi_tolerance,
        })
    }
}

/// Acceptance criteria applied to screened peptides.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub min_length: usize,
    pub max_length: usize,
    /// Minimum consensus score in `[0, 1]`.
    pub threshold: f64,
    pub excluded_residues: Vec<AminoAcid>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            threshold: DEFAULT_THRESHOLD,
            excluded_residues: Vec::new(),
        }
    }
}

#[derive(Default)]
pub struct FilterCriteriaBuilder {
    min_length: Option<usize>,
    max_length: Option<usize>,
    threshold: Option<f64>,
    excluded_residues: Vec<AminoAcid>,
}

impl FilterCriteriaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
    pub fn exclude(mut self, residue: AminoAcid) -> Self {
        if !self.excluded_residues.contains(&residue) {
            self.excluded_residues.push(residue);
        }
        self
    }
    pub fn excluded_residues(mut self, residues: impl IntoIterator<Item = AminoAcid>) -> Self {
        for residue in residues {
            self = self.exclude(residue);
        }
        self
    }

    pub fn build(self) -> Result<FilterCriteria, ConfigError> {
        let min_length = self.min_length.unwrap_or(DEFAULT_MIN_LENGTH);
        let max_length = self.max_length.unwrap_or(DEFAULT_MAX_LENGTH);
        if min_length > max_length {
            return Err(ConfigError::InvalidParameter {
                name: "min_length",
                reason: format!("{min_length} exceeds max_length {max_length}"),
            });
        }

        let threshold = self.threshold.unwrap_or(DEFAULT_THRESHOLD);
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidParameter {
                name: "threshold",
                reason: format!("{threshold} is outside [0, 1]"),
            });
        }

        Ok(FilterCriteria {
            min_length,
            max_length,
            threshold,
            excluded_residues: self.excluded_residues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiler_builder_defaults_to_neutral_ph_and_default_tolerance() {
        let config = ProfilerConfigBuilder::new().build().unwrap();
        assert_eq!(config, ProfilerConfig::default());
        assert_eq!(config.reference_ph, 7.0);
        assert_eq!(config.pi_tolerance, 0.01);
    }

    #[test]
    fn profiler_builder_applies_overrides() {
        let config = ProfilerConfigBuilder::new()
            .reference_ph(7.4)
            .pi_tolerance(0.001)
            .build()
            .unwrap();
        assert_eq!(config.reference_ph, 7.4);
        assert_eq!(config.pi_tolerance, 0.001);
    }

    #[test]
    fn profiler_builder_rejects_non_positive_tolerance() {
        for bad in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let result = ProfilerConfigBuilder::new().pi_tolerance(bad).build();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidParameter {
                    name: "pi_tolerance",
                    ..
                })
            ));
        }
    }

    #[test]
    fn profiler_builder_rejects_ph_outside_range() {
        for bad in [-1.0, 14.5, f64::NAN] {
            let result = ProfilerConfigBuilder::new().reference_ph(bad).build();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidParameter {
                    name: "reference_ph",
                    ..
                })
            ));
        }
    }

    #[test]
    fn filter_builder_defaults_accept_up_to_thirty_two_residues() {
        let criteria = FilterCriteriaBuilder::new().build().unwrap();
        assert_eq!(criteria, FilterCriteria::default());
        assert_eq!(criteria.min_length, 0);
        assert_eq!(criteria.max_length, 32);
        assert_eq!(criteria.threshold, 0.0);
        assert!(criteria.excluded_residues.is_empty());
    }

    #[test]
    fn filter_builder_deduplicates_excluded_residues() {
        let criteria = FilterCriteriaBuilder::new()
            .exclude(AminoAcid::Cysteine)
            .excluded_residues([AminoAcid::Methionine, AminoAcid::Cysteine])
            .build()
            .unwrap();
        assert_eq!(
            criteria.excluded_residues,
            vec![AminoAcid::Cysteine, AminoAcid::Methionine]
        );
    }

    #[test]
    fn filter_builder_rejects_inverted_length_range() {
        let result = FilterCriteriaBuilder::new()
            .min_length(20)
            .max_length(10)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "min_length",
                ..
            })
        ));
    }

    #[test]
    fn filter_builder_rejects_threshold_outside_unit_interval() {
        for bad in [-0.1, 1.5, f64::NAN] {
            let result = FilterCriteriaBuilder::new().threshold(bad).build();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidParameter {
                    name: "threshold",
                    ..
                })
            ));
        }
    }
}
