//! Test runner that executes cases sequentially against one shared client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use crate::check;
use crate::client::{ApiResponse, EmojiClient};
use crate::config::HarnessConfig;
use crate::emoji::EmojiRecord;
use crate::error::{E2eError, E2eResult};
use crate::server;
use crate::spec::{BodyCheck, TestCase};
use crate::suite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    /// The server answered, but not as expected
    Failed,
    /// The case could not be executed (server unreachable, transport error)
    Errored,
}

/// Result of running a single case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub name: String,
    pub outcome: Outcome,
    pub duration_ms: u64,
    /// Status code received, if a response arrived
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl TestResult {
    pub fn success(&self) -> bool {
        self.outcome == Outcome::Passed
    }
}

/// Result of running a set of cases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub duration_ms: u64,
    pub started_at: DateTime<Utc>,
    pub results: Vec<TestResult>,
}

impl TestSuiteResult {
    pub fn from_results(started_at: DateTime<Utc>, duration_ms: u64, results: Vec<TestResult>) -> Self {
        let count = |o: Outcome| results.iter().filter(|r| r.outcome == o).count();
        Self {
            total: results.len(),
            passed: count(Outcome::Passed),
            failed: count(Outcome::Failed),
            errored: count(Outcome::Errored),
            duration_ms,
            started_at,
            results,
        }
    }

    pub fn success(&self) -> bool {
        self.passed == self.total
    }

    pub fn get(&self, name: &str) -> Option<&TestResult> {
        self.results.iter().find(|r| r.name == name)
    }
}

/// Runs cases one at a time against the configured server
pub struct TestRunner {
    config: HarnessConfig,

    /// Built once, shared read-only by every case
    client: EmojiClient,
}

impl TestRunner {
    pub fn with_config(config: HarnessConfig) -> E2eResult<Self> {
        let config = config.validated()?;
        let client = EmojiClient::new(&config)?;
        Ok(Self { config, client })
    }

    pub fn client(&self) -> &EmojiClient {
        &self.client
    }

    /// Built-in cases followed by any YAML cases from `cases_dir`
    pub fn load_cases(&self) -> E2eResult<Vec<TestCase>> {
        let mut cases = suite::builtin();
        if let Some(dir) = &self.config.cases_dir {
            let extra = TestCase::load_all(dir)?;
            info!("Loaded {} case(s) from {}", extra.len(), dir.display());
            cases.extend(extra);
        }
        Ok(cases)
    }

    /// Wait for the server if `wait_ready` is configured, otherwise assume it is up
    pub async fn prepare(&self) -> E2eResult<()> {
        match self.config.wait_ready {
            Some(secs) => server::wait_until_ready(&self.client, Duration::from_secs(secs)).await,
            None => Ok(()),
        }
    }

    /// Run every loaded case
    pub async fn run_all(&self) -> E2eResult<TestSuiteResult> {
        let cases = self.load_cases()?;
        Ok(self.run_cases(&cases).await)
    }

    /// Run cases matching a tag
    pub async fn run_tagged(&self, tag: &str) -> E2eResult<TestSuiteResult> {
        let cases: Vec<TestCase> = self
            .load_cases()?
            .into_iter()
            .filter(|c| c.has_tag(tag))
            .collect();
        Ok(self.run_cases(&cases).await)
    }

    /// Run a specific case by name
    pub async fn run_named(&self, name: &str) -> E2eResult<TestResult> {
        let case = self
            .load_cases()?
            .into_iter()
            .find(|c| c.name == name)
            .ok_or_else(|| E2eError::SpecParse(format!("Test case not found: {}", name)))?;
        Ok(self.run_case(&case).await)
    }

    /// Run a specific case by name, reported as a one-case suite
    pub async fn run_named_suite(&self, name: &str) -> E2eResult<TestSuiteResult> {
        let started_at = Utc::now();
        let start = Instant::now();
        let result = self.run_named(name).await?;
        Ok(TestSuiteResult::from_results(
            started_at,
            start.elapsed().as_millis() as u64,
            vec![result],
        ))
    }

    /// Run cases in order. A failing case never stops the ones after it.
    pub async fn run_cases(&self, cases: &[TestCase]) -> TestSuiteResult {
        let started_at = Utc::now();
        let start = Instant::now();
        let mut results = Vec::with_capacity(cases.len());

        info!("Running {} case(s) against {}", cases.len(), self.client.base_url());

        for case in cases {
            let result = self.run_case(case).await;
            match result.outcome {
                Outcome::Passed => info!("✓ {} ({} ms)", result.name, result.duration_ms),
                Outcome::Failed => error!(
                    "✗ {} - {}",
                    result.name,
                    result.message.as_deref().unwrap_or("unknown failure")
                ),
                Outcome::Errored => warn!(
                    "! {} - {}",
                    result.name,
                    result.message.as_deref().unwrap_or("unknown error")
                ),
            }
            results.push(result);
        }

        let suite = TestSuiteResult::from_results(
            started_at,
            start.elapsed().as_millis() as u64,
            results,
        );

        info!(
            "Test Results: {} passed, {} failed, {} errored ({} ms)",
            suite.passed, suite.failed, suite.errored, suite.duration_ms
        );

        suite
    }

    /// Run a single case
    pub async fn run_case(&self, case: &TestCase) -> TestResult {
        let start = Instant::now();
        debug!("Running case: {}", case.name);

        let mut status = None;
        let verdict = self.execute(case, &mut status).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let (outcome, message) = match verdict {
            Ok(()) => (Outcome::Passed, None),
            Err(e) => {
                let outcome = if e.is_connectivity() || matches!(e, E2eError::Http(_)) {
                    Outcome::Errored
                } else {
                    Outcome::Failed
                };
                (outcome, Some(e.to_string()))
            }
        };

        TestResult {
            name: case.name.clone(),
            outcome,
            duration_ms,
            status,
            message,
        }
    }

    async fn execute(&self, case: &TestCase, status: &mut Option<u16>) -> E2eResult<()> {
        let response = self.client.get(&case.request.path).await?;
        *status = Some(response.status.as_u16());
        let response = response.expect_status(case.expect.status)?;

        match &case.expect.body {
            BodyCheck::None => Ok(()),
            BodyCheck::Record => check::record_complete(&response.json()?),
            BodyCheck::Records => check::records_complete(&records(&response)?),
            BodyCheck::RecordInCategory { category } => {
                check::record_in_category(&response.json()?, category)
            }
            BodyCheck::RecordInGroup { group } => check::record_in_group(&response.json()?, group),
            BodyCheck::RecordsInCategory { category } => {
                check::records_in_category(&records(&response)?, category)
            }
            BodyCheck::RecordsInGroup { group } => {
                check::records_in_group(&records(&response)?, group)
            }
            BodyCheck::Idempotent => {
                let first = records(&response)?;
                check::records_complete(&first)?;
                let second = self
                    .client
                    .get(&case.request.path)
                    .await?
                    .expect_status(case.expect.status)?;
                check::set_equal(&first, &records(&second)?)
            }
        }
    }

    /// Write results to `<output_dir>/test-results.json`
    pub fn write_results(&self, results: &TestSuiteResult) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(&self.config.output_dir)?;

        let path = self.config.output_dir.join("test-results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;

        info!("Results written to: {}", path.display());
        Ok(path)
    }
}

fn records(response: &ApiResponse) -> E2eResult<Vec<EmojiRecord>> {
    response.json()
}
