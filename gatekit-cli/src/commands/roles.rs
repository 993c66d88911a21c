//! `gatekit roles` — role catalogue management

use clap::Subcommand;
use gatekit_core::app::AdminCore;
use gatekit_core::model::Role;

#[derive(Subcommand)]
pub enum RoleAction {
    /// List every role and its grants
    List,

    /// Add a role
    Add {
        /// Role name (unique, case-insensitively)
        #[arg(long)]
        name: String,

        /// Permission names to grant, repeatable
        #[arg(long = "grant")]
        grants: Vec<String>,

        /// Explicit id; defaults to a random UUID
        #[arg(long)]
        id: Option<String>,
    },

    /// Remove a role by id
    Rm {
        id: String,
    },
}

pub async fn run(core: &AdminCore, action: RoleAction) -> anyhow::Result<bool> {
    match action {
        RoleAction::List => {
            for role in core.roles().list().await? {
                println!("{:<8} {:<12} {}", role.id, role.name, role.permissions.join(", "));
            }
            Ok(true)
        }
        RoleAction::Add { name, grants, id } => {
            let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let mut role = Role::new(id, name);
            for grant in grants {
                role = role.with_permission(grant);
            }
            let note = core.roles().add(role).await;
            println!("{}", note);
            Ok(note.is_ok())
        }
        RoleAction::Rm { id } => {
            let note = core.roles().delete(&id).await;
            println!("{}", note);
            Ok(note.is_ok())
        }
    }
}
