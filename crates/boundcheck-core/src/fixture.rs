//! Declarative conformance fixtures.
//!
//! The test corpus is a language-neutral JSON asset in the layout of the
//! [JSON Schema Test Suite](https://github.com/json-schema-org/JSON-Schema-Test-Suite):
//! an ordered list of groups, each pairing one schema with an ordered list of
//! `data`/`valid` cases. Keeping the corpus as data, decoupled from this
//! implementation, lets the same files drive conformance suites in other
//! target languages.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::SchemaError;
use crate::schema::RangeSchema;
use crate::validate::validate;

/// A group of test cases sharing a schema.
#[derive(Debug, Deserialize)]
pub struct TestGroup {
    pub description: String,
    pub schema: Value,
    pub tests: Vec<TestCase>,
}

/// One `data`/`valid` expectation within a group.
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub description: String,
    pub data: Value,
    pub valid: bool,
}

/// A case whose computed result disagreed with the fixture's expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    /// `"{group description}: {case description}"`.
    pub label: String,
    pub expected: bool,
    pub actual: bool,
}

impl std::fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: expected {}, got {}",
            self.label,
            verdict(self.expected),
            verdict(self.actual)
        )
    }
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}

/// Parse a fixture file (a JSON array of groups).
pub fn load_groups(raw_json: &str) -> Result<Vec<TestGroup>, serde_json::Error> {
    serde_json::from_str(raw_json)
}

/// Run every case in every group, collecting mismatches.
///
/// Each group's schema is compiled once and applied to all of its cases. A
/// mismatch is recorded and the run continues; only a malformed group schema
/// aborts, since no case result would be meaningful under it.
pub fn run_groups(groups: &[TestGroup]) -> Result<Vec<CaseFailure>, SchemaError> {
    let mut failures = Vec::new();
    for group in groups {
        let schema = RangeSchema::compile(&group.schema)?;
        for case in &group.tests {
            let actual = validate(&schema, &case.data);
            if actual != case.valid {
                let failure = CaseFailure {
                    label: format!("{}: {}", group.description, case.description),
                    expected: case.valid,
                    actual,
                };
                debug!(%failure, "fixture mismatch");
                failures.push(failure);
            }
        }
    }
    Ok(failures)
}
