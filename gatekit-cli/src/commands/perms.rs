//! `gatekit perms` — permission catalogue management

use clap::Subcommand;
use gatekit_core::app::AdminCore;
use gatekit_core::assoc::group_by_module;
use gatekit_core::model::Permission;

#[derive(Subcommand)]
pub enum PermAction {
    /// List permissions grouped by module
    List,

    /// Add a permission
    Add {
        /// Permission name (unique, case-insensitively)
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        /// Grouping label, e.g. "Users" or "Reports"
        #[arg(long)]
        module: String,

        /// Explicit id; defaults to a random UUID
        #[arg(long)]
        id: Option<String>,
    },

    /// Remove a permission by id
    Rm {
        id: String,
    },
}

pub async fn run(core: &AdminCore, action: PermAction) -> anyhow::Result<bool> {
    match action {
        PermAction::List => {
            let permissions = core.permissions().list().await?;
            for (module, members) in group_by_module(&permissions) {
                let label = if module.is_empty() { "(no module)" } else { &module };
                println!("{label}:");
                for p in members {
                    println!("  {:<8} {:<12} {}", p.id, p.name, p.description);
                }
            }
            Ok(true)
        }
        PermAction::Add { name, description, module, id } => {
            let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let note = core.permissions().add(Permission::new(id, name, description, module)).await;
            println!("{}", note);
            Ok(note.is_ok())
        }
        PermAction::Rm { id } => {
            let note = core.permissions().delete(&id).await;
            println!("{}", note);
            Ok(note.is_ok())
        }
    }
}
