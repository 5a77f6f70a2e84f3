//! `contactbot` 바이너리 진입점.

use std::io::{self, Read};

use anyhow::Context;

use contactbot::interface::cli::tools::{render_fibonacci, render_log_report, render_sum};
use contactbot::interface::cli::{AppComposition, Cli, CliAction};

fn main() {
    // 진단 로그는 REPL 응답과 섞이지 않도록 stderr로 보낸다.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let action = Cli::parse_action();
    let composition = AppComposition::default();

    let result = match action {
        CliAction::Interactive => contactbot::run_interactive(),
        CliAction::InspectConfig => composition
            .inspect_config_usecase()
            .execute()
            .map(|json| println!("{json}")),
        CliAction::AnalyzeLogs { file, level } => composition
            .analyze_logs_usecase()
            .execute(&file, level.as_deref())
            .map(|report| println!("{}", render_log_report(&report))),
        CliAction::SumNumbers(text) => read_text(text).map(|text| println!("{}", render_sum(&text))),
        CliAction::Fibonacci(indices) => render_fibonacci(&indices).map(|out| println!("{out}")),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn read_text(text: Option<String>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read text from stdin")?;
    Ok(buf)
}
