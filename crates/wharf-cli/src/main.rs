mod cmd_env;
mod cmd_git_status;
mod cmd_hash;
mod cmd_hostname;
mod cmd_running;
mod cmd_status;
mod cmd_validate;
mod config;
mod input;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wharf", version, about = "Project identity and state helpers for wharf workspaces")]
struct Cli {
    /// Enable debug logging (overridden by WHARF_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the build cache key of a project
    Hash {
        /// Project file (JSON, or YAML by extension)
        project: PathBuf,
    },
    /// Print the hostname for a project in a workspace
    Hostname {
        workspace_id: String,
        project_name: String,
    },
    /// Report whether a project is running (exit status 1 if not)
    IsRunning {
        /// Workspace snapshot file
        workspace: PathBuf,
        project_name: String,
    },
    /// Print the environment for a project's agent
    Env {
        /// Project file
        project: PathBuf,
        /// Config file (defaults to <config dir>/wharf/config.json)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Server api key handed to the agent
        #[arg(long, env = "WHARF_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        /// Enable agent telemetry
        #[arg(long)]
        telemetry: bool,
    },
    /// Show liveness and git state for every project in a workspace
    Status {
        /// Workspace snapshot file
        workspace: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the working-tree status of a repository as JSON
    GitStatus {
        /// Repository directory (defaults to the current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,
    },
    /// Validate a create-workspace request
    Validate {
        /// Request file
        request: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "wharf=debug,wharf_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("WHARF_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Hash { project } => cmd_hash::execute(&project),
        Command::Hostname {
            workspace_id,
            project_name,
        } => cmd_hostname::execute(&workspace_id, &project_name),
        Command::IsRunning {
            workspace,
            project_name,
        } => {
            if !cmd_running::execute(&workspace, &project_name)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Command::Env {
            project,
            config,
            api_key,
            telemetry,
        } => cmd_env::execute(cmd_env::EnvCliParams {
            project_file: &project,
            config_file: config.as_deref(),
            api_key,
            telemetry,
        }),
        Command::Status { workspace, json } => cmd_status::execute(&workspace, json),
        Command::GitStatus { cwd } => {
            let cwd = match cwd {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            cmd_git_status::execute(&cwd)
        }
        Command::Validate { request } => cmd_validate::execute(&request),
    }
}
