//! Batch front end: runs one Lotka-Volterra integration and writes the
//! trajectory to stdout.

use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use std::io::{BufWriter, Write};

mod config;
mod output;

use config::Config;
use output::{write_trajectory, Format};

fn command() -> Command {
    let number = |name: &'static str, help: &'static str| {
        Arg::new(name)
            .long(name)
            .help(help)
            .value_name("VALUE")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
    };

    Command::new("volterra")
        .about("Integrates the Lotka-Volterra predator-prey system with a fixed step.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path of a TOML scenario file")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("method")
                .long("method")
                .short('m')
                .help("Integration scheme: euler or rk4")
                .value_name("METHOD"),
        )
        .arg(number("alpha", "Prey growth rate"))
        .arg(number("beta", "Predation rate"))
        .arg(number("gamma", "Predator death rate"))
        .arg(number("delta", "Predator growth rate from predation"))
        .arg(number("final-time", "Final time of the run"))
        .arg(number("dt", "Fixed step size"))
        .arg(number("x0", "Initial prey population"))
        .arg(number("y0", "Initial predator population"))
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["csv", "json"])
                .default_value("csv"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Logging level (off, error, warn, info, debug, trace)")
                .value_name("LEVEL"),
        )
}

fn configure(matches: &ArgMatches) -> Result<Config> {
    let mut config = Config::load(matches)?;
    config.apply_overrides(matches)?;
    Ok(config)
}

fn main() -> Result<()> {
    let matches = command().get_matches();
    let config = configure(&matches)?;

    // Build environment logger.
    env_logger::builder()
        .filter_level(config.log_filter()?)
        .init();

    let scenario = config.scenario;
    log::info!(
        "Method: {} (order {})",
        scenario.method,
        scenario.method.order()
    );
    log::info!(
        "Parameters: alpha={} beta={} gamma={} delta={}",
        scenario.parameters.alpha,
        scenario.parameters.beta,
        scenario.parameters.gamma,
        scenario.parameters.delta
    );
    log::info!(
        "Grid: final_time={} dt={}, initial state ({}, {})",
        scenario.grid.final_time,
        scenario.grid.dt,
        scenario.initial.x,
        scenario.initial.y
    );

    let format = matches
        .get_one::<String>("format")
        .and_then(|name| Format::from_name(name))
        .ok_or(anyhow!("Failed to determine output format"))?;

    let trajectory = scenario.run().context("Integration failed")?;
    if trajectory.states().iter().any(|s| !s.is_finite()) {
        log::warn!("Trajectory contains non-finite values; try a smaller dt.");
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_trajectory(&trajectory, format, &mut out)?;
    out.flush()?;

    Ok(())
}
