use crate::reports::Measurement;
use chrono::{DateTime, Utc};

/// A benchmark run reported by CI for one commit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suite {
    pub id: Option<i64>,
    pub secret_id: Option<i64>,
    pub git_ref: Option<String>,
    pub name: Option<String>,
    pub ran_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub env: Option<SuiteEnv>,
    pub tests: Option<Vec<SuiteTest>>,
}

/// The environment a suite ran in, such as the CI provider and machine details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteEnv {
    pub source: Option<String>,
    pub info: Option<String>,
}

/// A single named result within a suite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteTest {
    pub name: Option<String>,
    pub value: Option<f64>,
}

impl Suite {
    /// The suite's tests, or an empty slice when none were reported.
    #[must_use]
    pub fn tests(&self) -> &[SuiteTest] {
        self.tests.as_deref().unwrap_or_default()
    }

    /// Find a test by name.
    #[must_use]
    pub fn test_named(&self, name: &str) -> Option<&SuiteTest> {
        self.tests().iter().find(|test| test.name.as_deref() == Some(name))
    }
}

impl SuiteTest {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value),
        }
    }

    /// The test as a measurement, if both its name and value are known.
    #[must_use]
    pub fn measurement(&self) -> Option<Measurement> {
        Some(Measurement::new(self.name.clone()?, self.value?))
    }
}
