//! `alignchart` binary
//!
//! Drives the alignment commands from a shell. Each invocation plays the
//! part of one chat command: the invoking member and community come from
//! flags, the reply goes to stdout, and a refused command exits with status 1
//! after printing the same text a chat user would see.

mod cli;

use align_commands::{AlignmentService, CommandContext, CommandError, Member};
use align_model::{render_tally, AlignmentCategory};
use align_store::{CommunityId, FileChartStore, StoreConfig};
use anyhow::Context;
use clap::ArgMatches;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let matches = cli::build_cli().get_matches();
    let config = load_config(&matches)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "store configured");

    let service = AlignmentService::new(FileChartStore::new(config));

    let Some((name, args)) = matches.subcommand() else {
        anyhow::bail!("no command given");
    };
    let ctx = context_from(args)?;

    match run(&service, name, args, &ctx).await {
        Ok(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(Outcome::Command(e)) => {
            if !e.is_user_error() {
                tracing::error!(error = %e, command = name, "command failed");
            }
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
        Err(Outcome::Other(e)) => Err(e),
    }
}

enum Outcome {
    Command(CommandError),
    Other(anyhow::Error),
}

impl From<CommandError> for Outcome {
    fn from(e: CommandError) -> Self {
        Self::Command(e)
    }
}

async fn run(
    service: &AlignmentService<FileChartStore>,
    name: &str,
    args: &ArgMatches,
    ctx: &CommandContext,
) -> Result<String, Outcome> {
    match name {
        "show" if args.get_flag("json") => {
            let chart = service.chart(ctx).await?;
            serde_json::to_string_pretty(&chart)
                .context("encoding chart as JSON")
                .map_err(Outcome::Other)
        }
        "show" => Ok(service.show(ctx).await?.text),
        "tally" => {
            let chart = service.chart(ctx).await?;
            Ok(render_tally(&chart))
        }
        "set" => Ok(service.set(ctx, alignment(args)?).await?.text),
        "remove" => Ok(service.remove(ctx).await?.text),
        "set-other" => {
            let target = args.get_one::<String>("target-user").map(|id| {
                let name = cli::opt_string(args, "target-name").unwrap_or_else(|| id.clone());
                let member = Member::new(id.as_str(), name);
                match cli::opt_string(args, "target-avatar") {
                    Some(url) => member.with_avatar(url),
                    None => member,
                }
            });
            let reply = service
                .set_other(ctx, alignment(args)?, target.as_ref())
                .await?;
            Ok(reply.text)
        }
        other => Err(Outcome::Other(anyhow::anyhow!("unknown command: {other}"))),
    }
}

fn alignment(args: &ArgMatches) -> Result<AlignmentCategory, Outcome> {
    args.get_one::<AlignmentCategory>("alignment")
        .copied()
        .ok_or_else(|| Outcome::Other(anyhow::anyhow!("missing --alignment")))
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<StoreConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => StoreConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => StoreConfig::new(),
    };
    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config = config.with_data_dir(dir);
    }
    config.validate().context("invalid store configuration")?;
    Ok(config)
}

fn context_from(args: &ArgMatches) -> anyhow::Result<CommandContext> {
    let user = args
        .get_one::<String>("user")
        .context("missing --user")?;
    let name = args
        .get_one::<String>("name")
        .context("missing --name")?;

    let mut invoker = Member::new(user.as_str(), name.as_str());
    if let Some(url) = cli::opt_string(args, "avatar") {
        invoker = invoker.with_avatar(url);
    }

    match args.get_one::<String>("community") {
        Some(raw) => {
            let community = CommunityId::new(raw.as_str())
                .with_context(|| format!("invalid --community {raw:?}"))?;
            Ok(CommandContext::in_community(community, invoker))
        }
        None => Ok(CommandContext::direct(invoker)),
    }
}
