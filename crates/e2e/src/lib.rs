//! EmojiHub API E2E Test Harness
//!
//! Black-box tests for a running EmojiHub server. The harness:
//! - Builds one HTTP client for the configured base URL
//! - Runs declarative test cases (built-in or YAML) one at a time
//! - Decodes response bodies into typed emoji records
//! - Reports a pass/fail/error outcome per case
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     TestRunner                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  prepare()            optional readiness wait               │
//! │  run_cases(cases)  -> TestSuiteResult                       │
//! │    └── run_case(case) -> TestResult                         │
//! │          ├── EmojiClient::get(path) -> ApiResponse          │
//! │          ├── expect_status(expected)                        │
//! │          └── BodyCheck -> check::* over EmojiRecord         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TestCase (code or YAML)                                    │
//! │    ├── name, description, tags                              │
//! │    ├── request { path }                                     │
//! │    └── expect { status, body: BodyCheck }                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod check;
pub mod client;
pub mod config;
pub mod emoji;
pub mod error;
pub mod runner;
pub mod server;
pub mod spec;
pub mod suite;

pub use client::{ApiResponse, EmojiClient};
pub use config::HarnessConfig;
pub use emoji::{normalize, Category, EmojiRecord};
pub use error::{E2eError, E2eResult};
pub use runner::{Outcome, TestResult, TestRunner, TestSuiteResult};
pub use spec::{BodyCheck, TestCase};
