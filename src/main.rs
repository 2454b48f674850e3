use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lastpage::browser::SystemBrowser;
use lastpage::cli::{self, commands, Cli};
use lastpage::config::Config;
use lastpage::fluidinfo::FluidinfoClient;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "lastpage=debug"
    } else {
        "lastpage=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();

    if let Some(shell) = cli.completions {
        commands::completions::generate_completions(&mut Cli::command(), shell, &mut io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let plan = match cli::plan(&cli, &config) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return Ok(ExitCode::FAILURE);
        }
    };

    let Some(task) = plan.task else {
        tracing::debug!("No action requested");
        return Ok(ExitCode::SUCCESS);
    };

    let mut client = FluidinfoClient::with_url(&plan.api_url);
    if let Some(login) = plan.login {
        client = client.with_login(login);
    }

    cli::execute(&client, &SystemBrowser::new(), &task, &mut io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}
