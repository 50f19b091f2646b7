// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use slog::{o, Drain};

mod check;
mod config;

use check::{Outcome, RecordKind};

fn parse_log_level(s: &str) -> anyhow::Result<slog::Level> {
    s.parse().map_err(|_| anyhow::anyhow!("Invalid log level: {s}"))
}

#[derive(Debug, Parser)]
#[clap(about, version)]
/// Decode internal VNIC attachment and VTAP payloads and report enum values
/// the service would reject.
struct Args {
    /// TOML file listing payloads to check.
    #[clap(short, long, action)]
    config: Option<PathBuf>,

    /// Record kind of the payload files given on the command line.
    #[clap(short, long, requires = "files")]
    kind: Option<RecordKind>,

    /// JSON payload files.
    #[clap(value_name = "FILE", requires = "kind", action)]
    files: Vec<PathBuf>,

    /// Emit bunyan JSON log records.
    #[clap(long, action)]
    json_log: bool,

    /// Logging level; overrides the config file.
    #[clap(long, value_parser = parse_log_level)]
    log_level: Option<slog::Level>,
}

fn build_log(
    level: slog::Level,
    json: bool,
) -> (slog::Logger, slog_async::AsyncGuard) {
    let (drain, guard) = if json {
        let drain = slog_bunyan::with_name("vnicaas-check", std::io::stdout())
            .build()
            .fuse();
        slog_async::Async::new(drain).build_with_guard()
    } else {
        let decorator = slog_term::TermDecorator::new().build();
        let drain = slog_term::CompactFormat::new(decorator).build().fuse();
        slog_async::Async::new(drain).build_with_guard()
    };
    let drain = slog::LevelFilter::new(drain, level).fuse();
    (slog::Logger::root(drain, o!()), guard)
}

fn main() -> anyhow::Result<ExitCode> {
    let Args { config, kind, files, json_log, log_level } = Args::parse();

    let config = match config {
        Some(path) => config::parse(&path)?,
        None => config::Config::default(),
    };
    let level = match log_level {
        Some(level) => level,
        None => config.log.level()?.unwrap_or(slog::Level::Info),
    };
    let (log, _log_async_guard) = build_log(level, json_log || config.log.json);

    let mut payloads: Vec<(RecordKind, PathBuf)> = config
        .payloads
        .into_iter()
        .map(|p| (p.kind, p.path))
        .collect();
    if let Some(kind) = kind {
        payloads.extend(files.into_iter().map(|path| (kind, path)));
    }
    if payloads.is_empty() {
        anyhow::bail!("no payloads given; pass --kind with files or --config");
    }

    let mut failed = 0;
    for (kind, path) in payloads.iter() {
        let log = log.new(o!(
            "file" => path.display().to_string(),
            "kind" => kind.to_string(),
        ));
        match check::check_file(*kind, path) {
            Ok(Outcome::Valid) => slog::info!(log, "payload is valid"),
            Ok(Outcome::Invalid(failures)) => {
                failed += 1;
                for failure in failures.iter() {
                    slog::warn!(log, "{}", failure; "field" => failure.field());
                }
            }
            Err(e) => {
                failed += 1;
                let e = anyhow::Error::from(e);
                slog::error!(log, "{:#}", e);
            }
        }
    }

    slog::info!(log, "checked {} payloads", payloads.len();
        "failed" => failed);
    if failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn args() {
        let args = Args::try_parse_from([
            "vnicaas-check",
            "--kind",
            "update-vtap",
            "a.json",
            "b.json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.kind, Some(RecordKind::UpdateVtap));
        assert_eq!(args.files.len(), 2);
        assert_eq!(args.log_level, Some(slog::Level::Debug));

        assert!(Args::try_parse_from(["vnicaas-check", "a.json"]).is_err());
        assert!(Args::try_parse_from([
            "vnicaas-check",
            "--kind",
            "vtap",
            "a.json"
        ])
        .is_err());
    }

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level("warn").unwrap(), slog::Level::Warning);
        assert!(parse_log_level("verbose").is_err());
    }
}
