//! EmojiHub E2E runner
//!
//! Runs the built-in suite (plus optional YAML cases) against a running server.
//! Run with: cargo run --package emojihub-e2e -- --base-url http://localhost:4000/api

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use emojihub_e2e::{E2eResult, HarnessConfig, TestRunner};

#[derive(Parser, Debug)]
#[command(name = "emojihub-e2e")]
#[command(about = "Black-box test runner for the EmojiHub API")]
#[command(version)]
struct Args {
    /// Harness configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the API
    #[arg(long, env = "EMOJIHUB_BASE_URL")]
    base_url: Option<String>,

    /// Directory of extra YAML test cases
    #[arg(long)]
    cases: Option<PathBuf>,

    /// Run only cases matching this tag
    #[arg(short, long)]
    tag: Option<String>,

    /// Run only a specific case by name
    #[arg(short, long)]
    name: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Wait up to this many seconds for the server before running
    #[arg(long)]
    wait_ready: Option<u64>,

    /// Output directory for results
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print case names and exit
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Defaults, then the config file, then flags
    fn into_config(self) -> E2eResult<HarnessConfig> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::from_file(path)?,
            None => HarnessConfig::default(),
        };

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(dir) = self.cases {
            config.cases_dir = Some(dir);
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout = timeout;
        }
        if self.wait_ready.is_some() {
            config.wait_ready = self.wait_ready;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }

        config.validated()
    }
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            std::process::exit(2);
        }
    };

    match rt.block_on(async_main(args)) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

async fn async_main(args: Args) -> E2eResult<bool> {
    let list = args.list;
    let tag = args.tag.clone();
    let name = args.name.clone();

    let config = args.into_config()?;
    let runner = TestRunner::with_config(config)?;

    if list {
        for case in runner.load_cases()? {
            println!("{:<40} {}", case.name, case.tags.join(","));
        }
        return Ok(true);
    }

    runner.prepare().await?;

    let results = if let Some(name) = name {
        runner.run_named_suite(&name).await?
    } else if let Some(tag) = tag {
        runner.run_tagged(&tag).await?
    } else {
        runner.run_all().await?
    };

    runner.write_results(&results)?;

    Ok(results.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harness.yaml");
        std::fs::write(&path, "base_url: http://file:1/api\nrequest_timeout: 5\n").unwrap();

        let args = Args::parse_from([
            "emojihub-e2e",
            "--config",
            path.to_str().unwrap(),
            "--base-url",
            "http://flag:2/api/",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.base_url, "http://flag:2/api");
        assert_eq!(config.request_timeout, 5);
    }
}
