use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound of a raw classifier score.
pub const MAX_SCORE: f64 = 100.0;

/// The fixed set of classifiers whose scores feed the consensus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModelKind {
    #[serde(rename = "xgb")]
    GradientBoosted,
    #[serde(rename = "rf")]
    RandomForest,
    #[serde(rename = "nn")]
    NeuralNetwork,
    #[serde(rename = "dt")]
    DecisionTree,
    #[serde(rename = "lr")]
    LogisticRegression,
}

impl ModelKind {
    pub const ALL: [ModelKind; 5] = [
        Self::GradientBoosted,
        Self::RandomForest,
        Self::NeuralNetwork,
        Self::DecisionTree,
        Self::LogisticRegression,
    ];

    fn slot(self) -> usize {
        match self {
            Self::GradientBoosted => 0,
            Self::RandomForest => 1,
            Self::NeuralNetwork => 2,
            Self::DecisionTree => 3,
            Self::LogisticRegression => 4,
        }
    }

    /// Short key used in serialized output and column headers.
    pub fn key(self) -> &'static str {
        match self {
            Self::GradientBoosted => "xgb",
            Self::RandomForest => "rf",
            Self::NeuralNetwork => "nn",
            Self::DecisionTree => "dt",
            Self::LogisticRegression => "lr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::GradientBoosted => "Gradient Boosted (XGBoost)",
            Self::RandomForest => "Random Forest",
            Self::NeuralNetwork => "Neural Network",
            Self::DecisionTree => "Decision Tree",
            Self::LogisticRegression => "Logistic Regression",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown classifier model: '{0}'")]
pub struct ParseModelKindError(pub String);

impl FromStr for ModelKind {
    type Err = ParseModelKindError;
    // Accepts the short key, the kebab-case name and the column names used by the
    // prediction service.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xgb" | "xgboost" | "gradient-boosted" => Ok(Self::GradientBoosted),
            "rf" | "random-forest" | "bosque aleatorio" => Ok(Self::RandomForest),
            "nn" | "neural-network" | "red neuronal" => Ok(Self::NeuralNetwork),
            "dt" | "decision-tree" | "arbol de decisión" | "arbol de decision" => {
                Ok(Self::DecisionTree)
            }
            "lr" | "logistic-regression" | "regresión lógistica" | "regresion logistica" => {
                Ok(Self::LogisticRegression)
            }
            _ => Err(ParseModelKindError(s.to_string())),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Score {value} for model {model:?} is outside the range [0, 100]")]
    OutOfRange { model: ModelKind, value: f64 },
}

/// Per-model classifier scores, each in `[0, 100]`.
///
/// A missing entry means the model produced no result. It is never the same thing as a
/// score of zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<ModelKind, Option<f64>>",
    try_from = "BTreeMap<ModelKind, Option<f64>>"
)]
pub struct ModelScoreSet {
    slots: [Option<f64>; 5],
}

impl ModelScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, model: ModelKind, score: f64) -> Result<Self, ScoreError> {
        self.set(model, Some(score))?;
        Ok(self)
    }

    pub fn set(&mut self, model: ModelKind, score: Option<f64>) -> Result<(), ScoreError> {
        if let Some(value) = score {
            if !value.is_finite() || !(0.0..=MAX_SCORE).contains(&value) {
                return Err(ScoreError::OutOfRange { model, value });
            }
        }
        self.slots[model.slot()] = score;
        Ok(())
    }

    pub fn get(&self, model: ModelKind) -> Option<f64> {
        self.slots[model.slot()]
    }

    /// All five slots in fixed model order, present or not.
    pub fn iter(&self) -> impl Iterator<Item = (ModelKind, Option<f64>)> + '_ {
        ModelKind::ALL.iter().map(|&model| (model, self.get(model)))
    }

    pub fn present(&self) -> impl Iterator<Item = (ModelKind, f64)> + '_ {
        self.iter()
            .filter_map(|(model, score)| score.map(|value| (model, value)))
    }

    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.present_count() == 0
    }
}

impl From<ModelScoreSet> for BTreeMap<ModelKind, Option<f64>> {
    fn from(set: ModelScoreSet) -> Self {
        set.iter().collect()
    }
}

impl TryFrom<BTreeMap<ModelKind, Option<f64>>> for ModelScoreSet {
    type Error = ScoreError;
    fn try_from(map: BTreeMap<ModelKind, Option<f64>>) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for (model, score) in map {
            set.set(model, score)?;
        }
        Ok(set)
    }
}

/// Aggregate of a [`ModelScoreSet`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusResult {
    /// The scores exactly as supplied.
    pub per_model_scores: ModelScoreSet,
    /// Mean of the present scores scaled to `[0, 1]`; absent when no model produced a score.
    pub consensus_score: Option<f64>,
}
