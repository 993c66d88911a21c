//! `gatekit users` — user roster listing

use gatekit_core::app::AdminCore;

pub fn run(core: &AdminCore) -> bool {
    for user in core.users().all() {
        println!("{:<4} {:<16} {:<24} {:<10} {}", user.id, user.name, user.email, user.role, user.status);
    }
    true
}
