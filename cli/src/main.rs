//! Luma CLI - answer one chemistry question and print the result as JSON.
//!
//! ```text
//! main() -> Cli::parse() -> LumaConfig::load() -> Engine::answer() -> stdout
//! ```
//!
//! Precedence for the exam mode: `--mode`, then the context file's
//! `exam_mode`, then `[engine] default_exam_mode`, then BOARD.

mod args;

use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::Path,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::Cli;
use luma_config::LumaConfig;
use luma_engine::{AttemptContext, ContextExamMode, Engine, QuestionContext, Request};

fn init_tracing(config: Option<&LumaConfig>) {
    let fallback = config.and_then(LumaConfig::log_filter).unwrap_or("warn");
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the JSON packet; logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {what} file {}", path.display()))
}

fn read_question(cli: &Cli) -> Result<String> {
    let question = cli.question();
    if !question.trim().is_empty() {
        return Ok(question);
    }
    let mut question = String::new();
    io::stdin()
        .read_to_string(&mut question)
        .context("failed to read question from stdin")?;
    Ok(question.trim().to_string())
}

fn build_request(cli: &Cli) -> Result<Request> {
    let mut context: QuestionContext = match &cli.context {
        Some(path) => read_json(path, "context")?,
        None => QuestionContext::default(),
    };
    if let Some(mode) = cli.exam_mode() {
        context.exam_mode = Some(ContextExamMode::from(mode));
    }
    let mut request = Request::new(read_question(cli)?)
        .with_context(context)
        .with_syntax(cli.syntax_mode());
    if let Some(path) = &cli.attempt {
        let attempt: AttemptContext = read_json(path, "attempt")?;
        request = request.with_attempt(attempt);
    }
    Ok(request)
}

fn build_engine(config: Option<&LumaConfig>) -> Engine {
    let mut engine = Engine::new();
    if let Some(config) = config {
        engine = engine.with_fallback_enabled(config.fallback_enabled());
        if let Some(mode) = config.default_exam_mode() {
            engine = engine.with_default_exam_mode(mode);
        }
    }
    engine
}

fn run(cli: &Cli, config: Option<&LumaConfig>) -> Result<Value> {
    let request = build_request(cli)?;
    let engine = build_engine(config);

    let output = if cli.sections {
        serde_json::to_value(engine.render(&request)?)?
    } else {
        let packet = engine.answer(&request)?;
        tracing::info!(
            exam_mode = %packet.exam_mode,
            confidence = %packet.confidence,
            "answered question"
        );
        serde_json::to_value(packet)?
    };
    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = LumaConfig::load().ok().flatten();
    init_tracing(config.as_ref());

    if cli.question.is_empty() && io::stdin().is_terminal() {
        bail!("no question given; pass it as arguments or on stdin (see --help)");
    }

    let output = run(&cli, config.as_ref())?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
