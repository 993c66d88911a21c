//! `gatekit matrix` — render a role's permission matrix

use gatekit_core::app::AdminCore;
use gatekit_core::assoc::{dangling_permissions, group_by_module, toggle_permission};

pub async fn run(core: &AdminCore, role_name: &str, toggle: Option<&str>) -> anyhow::Result<bool> {
    let Some(mut role) =
        core.roles().list().await?.into_iter().find(|r| r.name == role_name)
    else {
        eprintln!("no role named '{role_name}'");
        return Ok(false);
    };

    if let Some(permission_name) = toggle {
        let edited = toggle_permission(&role, permission_name);
        let note = core.roles().update(edited).await;
        println!("{}", note);
        if !note.is_ok() {
            return Ok(false);
        }
        // Re-fetch rather than trusting the local edit.
        role = core
            .roles()
            .list()
            .await?
            .into_iter()
            .find(|r| r.name == role_name)
            .expect("role still present after update");
    }

    let permissions = core.permissions().list().await?;
    println!("{} ({})", role.name, role.id);
    for (module, members) in group_by_module(&permissions) {
        let label = if module.is_empty() { "(no module)" } else { &module };
        println!("  {label}:");
        for p in members {
            let mark = if role.has_permission(&p.name) { "x" } else { " " };
            println!("    [{mark}] {}", p.name);
        }
    }

    let dangling = dangling_permissions(&role, &permissions);
    if !dangling.is_empty() {
        println!("  dangling grants: {}", dangling.join(", "));
    }
    Ok(true)
}
