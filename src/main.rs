mod cli;
mod config;
mod error;
mod procedures;
mod runner;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use runner::{Runner, report};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    fmt().with_env_filter(EnvFilter::new(filter)).init();

    // 1. Resolve global config path (overridable via --config)
    let global_cfg_path = cli.config.unwrap_or_else(config::global_config_path);

    // 2. Auto-create global config on first launch
    config::ensure_global_config(&global_cfg_path)?;

    // 3. Probe for project config in the working directory (optional, never auto-created)
    let project_cfg_path = std::env::current_dir()?.join("recurrences.toml");
    let project_cfg = project_cfg_path.exists().then_some(project_cfg_path.as_path());

    // 4. Load layered config
    let cfg = config::load(&global_cfg_path, project_cfg)?;

    let runner = Runner::new(&cfg);
    let format = cli.format;

    let output = match cli.command {
        Commands::Fact(args) => report::evaluations(&runner.fact(args.n, args.variant)?, format)?,
        Commands::Add(args) => {
            report::evaluations(&runner.add(args.a, args.b, args.variant)?, format)?
        }
        Commands::Ackermann(args) => {
            report::evaluations(&runner.ackermann(args.x, args.y, args.variant)?, format)?
        }
        Commands::Fib(args) => report::evaluations(&runner.fib(args.n, args.variant)?, format)?,
        Commands::Change(args) => report::evaluations(
            &runner.change(args.amount, args.coin_types, args.variant)?,
            format,
        )?,
        Commands::Fun(args) => report::evaluations(&runner.fun(args.n, args.variant)?, format)?,
        Commands::Pascal(args) => {
            report::evaluations(&runner.pascal(args.n, args.view)?, format)?
        }
        Commands::Demo => report::evaluations(&runner.demo()?, format)?,
        Commands::Check => {
            let reports = runner.check()?;
            let text = report::checks(&reports, format)?;
            if reports.iter().any(|r| !r.passed()) {
                print!("{text}");
                anyhow::bail!("variants disagree");
            }
            text
        }
        Commands::List => report::catalog(procedures::CATALOG, format)?,
        Commands::Config => serde_json::to_string_pretty(&cfg)? + "\n",
    };

    print!("{output}");
    Ok(())
}
