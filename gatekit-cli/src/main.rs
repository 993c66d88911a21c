//! Gatekit admin shell.
//!
//! A thin stand-in for the administration console: every subcommand builds
//! the data core from configuration, performs one operation and prints the
//! resulting notification.
//!
//! ```bash
//! gatekit roles list
//! gatekit perms add --name Export --description "Can export reports" --module Reports
//! gatekit matrix Admin
//! ```

mod commands;

use clap::{Parser, Subcommand};
use gatekit_core::app::AdminCore;
use gatekit_core::config::GatekitConfig;

#[derive(Parser)]
#[command(
    name = "gatekit",
    about = "RBAC administration shell",
    version,
    after_help = "Configuration is read from gatekit.toml and GK_* environment variables."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the role catalogue
    Roles {
        #[command(subcommand)]
        action: commands::roles::RoleAction,
    },

    /// Manage the permission catalogue
    Perms {
        #[command(subcommand)]
        action: commands::perms::PermAction,
    },

    /// Show a role's permission matrix, optionally toggling one grant
    Matrix {
        /// Role name
        role: String,

        /// Toggle this permission name before rendering
        #[arg(long)]
        toggle: Option<String>,
    },

    /// List the user roster
    Users,

    /// Show the audit trail for this invocation's mutations
    Audit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = GatekitConfig::load()?;
    gatekit_core::logging::init_logging(&config.logging)?;
    let core = AdminCore::from_config(&config);

    let outcome = match cli.command {
        Commands::Roles { action } => commands::roles::run(&core, action).await?,
        Commands::Perms { action } => commands::perms::run(&core, action).await?,
        Commands::Matrix { role, toggle } => {
            commands::matrix::run(&core, &role, toggle.as_deref()).await?
        }
        Commands::Users => commands::users::run(&core),
        Commands::Audit => commands::audit::run(&core),
    };

    if !outcome {
        std::process::exit(1);
    }
    Ok(())
}
