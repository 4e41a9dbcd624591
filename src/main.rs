use std::{fs, path::PathBuf, process::ExitCode};

use pagesim::{
    config::{Config, RandomConfig, References, DEFAULT_RANDOM_PAGES},
    render::{render, summary},
    sim::{simulate, Report},
    Error, Result,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Simulate FIFO and LRU page replacement over a page reference string.

USAGE:
  pagesim -f <frames> (-r <refs> | -t <trace> | --random <len>) [options]
  pagesim (--config <json> | -p <path>) [options]

OPTIONS:
  -f <frames>       Number of memory frames
  -a <policy>       fifo or lru; repeat for both (default: both)
  -r <refs>         Reference string, e.g. \"1,2,3,4,1,2,5\"
  -t <path>         File holding a reference string (.xz is decompressed)
  --random <len>    Draw <len> random references
  --pages <n>       Distinct pages for --random (default: 10)
  --seed <u64>      Seed for --random
  --config <json>   Inline JSON configuration
  -p <path>         JSON configuration file
  --json <path>     Write a JSON report to <path>
  -q                Only print summaries
  -h, --help        Print this help
";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagesim=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Everything the command line asks for.
#[derive(Debug)]
struct Options {
    quiet: bool,
    stats_path: Option<PathBuf>,
    config: Config,
}

fn run() -> Result<()> {
    match parse_args(pico_args::Arguments::from_env())? {
        Some(options) => execute(options),
        None => {
            print!("{HELP}");
            Ok(())
        }
    }
}

/// Returns `None` when help was requested.
fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Options>> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let quiet = args.contains("-q");
    let stats_path: Option<PathBuf> = args.opt_value_from_str("--json")?;

    let config = if let Some(config_str) = args.opt_value_from_str::<_, String>("--config")? {
        Config::from_json(&config_str)?
    } else if let Some(config_path) = args.opt_value_from_str::<_, PathBuf>("-p")? {
        Config::from_path(&config_path)?
    } else {
        config_from_args(&mut args)?
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Config(format!(
            "unexpected arguments: {remaining:?}"
        )));
    }

    Ok(Some(Options {
        quiet,
        stats_path,
        config,
    }))
}

fn execute(options: Options) -> Result<()> {
    let workload = options.config.to_workload()?;
    tracing::info!(
        frames = workload.frames,
        references = workload.references.len(),
        "loaded workload"
    );

    let mut reports = Vec::with_capacity(workload.policies.len());
    for policy in workload.policies {
        let outcome = simulate(policy, &workload.references, workload.frames)?;
        if !options.quiet {
            println!("{}", render(policy, &outcome));
        }
        reports.push(Report::new(policy, outcome));
    }
    for report in &reports {
        println!("{}", summary(report.policy, &report.run));
    }

    if let Some(stats_path) = options.stats_path {
        let stats_file = fs::File::create(stats_path)?;
        serde_json::to_writer_pretty(stats_file, &reports)?;
    }
    Ok(())
}

fn config_from_args(args: &mut pico_args::Arguments) -> Result<Config> {
    let frames: i64 = args
        .opt_value_from_str("-f")?
        .ok_or_else(|| Error::Config("missing frame count (-f <frames>)".to_string()))?;
    let policies: Vec<String> = args.values_from_str("-a")?;
    let references: Option<String> = args.opt_value_from_str("-r")?;
    let trace: Option<PathBuf> = args.opt_value_from_str("-t")?;
    let random_len: Option<usize> = args.opt_value_from_str("--random")?;
    let pages: Option<u32> = args.opt_value_from_str("--pages")?;
    let seed: Option<u64> = args.opt_value_from_str("--seed")?;

    let random = match random_len {
        Some(length) => Some(RandomConfig {
            length,
            pages: pages.unwrap_or(DEFAULT_RANDOM_PAGES),
            seed,
        }),
        None if pages.is_some() || seed.is_some() => {
            return Err(Error::Config(
                "--pages and --seed only apply with --random".to_string(),
            ))
        }
        None => None,
    };

    Ok(Config {
        frames,
        policies,
        references: references.map(References::Text),
        trace,
        random,
    })
}
