//! Ranking-weight configuration and validation.
//!
//! The scoring service blends six criterion sub-scores into an overall
//! score. The client owns the weights and must never send a set whose
//! values do not sum to 1.0 (within tolerance); [`ValidatedWeights`] is
//! the only form a rank request accepts, so an invalid set cannot reach
//! the wire.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::RankerError;

/// Allowed deviation of the weight total from 1.0.
pub const SUM_TOLERANCE: f64 = 0.01;

/// The six fixed ranking criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Criterion {
    Skills,
    Experience,
    Education,
    Assessment,
    Portfolio,
    CoverLetter,
}

impl Criterion {
    pub const ALL: [Criterion; 6] = [
        Criterion::Skills,
        Criterion::Experience,
        Criterion::Education,
        Criterion::Assessment,
        Criterion::Portfolio,
        Criterion::CoverLetter,
    ];

    /// Wire name of the criterion.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Skills => "skills",
            Criterion::Experience => "experience",
            Criterion::Education => "education",
            Criterion::Assessment => "assessment",
            Criterion::Portfolio => "portfolio",
            Criterion::CoverLetter => "cover_letter",
        }
    }
}

impl FromStr for Criterion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skills" => Ok(Criterion::Skills),
            "experience" => Ok(Criterion::Experience),
            "education" => Ok(Criterion::Education),
            "assessment" => Ok(Criterion::Assessment),
            "portfolio" => Ok(Criterion::Portfolio),
            "cover_letter" => Ok(Criterion::CoverLetter),
            _ => Err(()),
        }
    }
}

/// A candidate weight configuration, possibly invalid.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightSet {
    skills: f64,
    experience: f64,
    education: f64,
    assessment: f64,
    portfolio: f64,
    cover_letter: f64,
}

impl Default for WeightSet {
    /// The configuration surface's starting values; they sum to 1.0.
    fn default() -> Self {
        Self {
            skills: 0.25,
            experience: 0.2,
            education: 0.15,
            assessment: 0.25,
            portfolio: 0.1,
            cover_letter: 0.05,
        }
    }
}

impl WeightSet {
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Skills => self.skills,
            Criterion::Experience => self.experience,
            Criterion::Education => self.education,
            Criterion::Assessment => self.assessment,
            Criterion::Portfolio => self.portfolio,
            Criterion::CoverLetter => self.cover_letter,
        }
    }

    /// Sets one weight. Negative and NaN values clamp to 0; weights are
    /// non-negative.
    pub fn set(&mut self, criterion: Criterion, value: f64) {
        let value = value.max(0.0);
        let slot = match criterion {
            Criterion::Skills => &mut self.skills,
            Criterion::Experience => &mut self.experience,
            Criterion::Education => &mut self.education,
            Criterion::Assessment => &mut self.assessment,
            Criterion::Portfolio => &mut self.portfolio,
            Criterion::CoverLetter => &mut self.cover_letter,
        };
        *slot = value;
    }

    /// Sets one weight from raw user input. An unparseable value coerces
    /// to 0 rather than surfacing a parse failure.
    pub fn set_raw(&mut self, criterion: Criterion, raw: &str) {
        self.set(criterion, raw.trim().parse::<f64>().unwrap_or(0.0));
    }

    pub fn total(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// True iff the total is within [`SUM_TOLERANCE`] of 1.0.
    pub fn is_valid(&self) -> bool {
        (self.total() - 1.0).abs() <= SUM_TOLERANCE
    }

    /// Consumes the set, producing the only form a rank request accepts.
    /// The blocking message names the offending total.
    pub fn validate(self) -> Result<ValidatedWeights, RankerError> {
        if self.is_valid() {
            Ok(ValidatedWeights(self))
        } else {
            Err(RankerError::InvalidWeights(format!(
                "weights must sum to 1.0, got {:.2}",
                self.total()
            )))
        }
    }
}

/// A weight set that passed the sum-to-one check.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedWeights(WeightSet);

impl ValidatedWeights {
    pub fn get(&self, criterion: Criterion) -> f64 {
        self.0.get(criterion)
    }

    /// The criterion-name -> weight map the rank endpoint expects.
    pub fn to_wire(&self) -> BTreeMap<String, f64> {
        Criterion::ALL
            .iter()
            .map(|c| (c.as_str().to_string(), self.0.get(*c)))
            .collect()
    }
}
