//! `gatekit audit` — print the in-memory audit trail

use gatekit_core::app::AdminCore;
use gatekit_core::events::ChangeEvent;

pub fn run(core: &AdminCore) -> bool {
    let events = core.audit().all();
    if events.is_empty() {
        println!("no recorded changes");
        return true;
    }
    for event in events {
        match event {
            ChangeEvent::Added { kind, id, name, timestamp } => {
                println!("{timestamp}  added   {kind} {id} '{name}'");
            }
            ChangeEvent::Updated { kind, id, name, timestamp } => {
                println!("{timestamp}  updated {kind} {id} '{name}'");
            }
            ChangeEvent::Deleted { kind, id, timestamp } => {
                println!("{timestamp}  deleted {kind} {id}");
            }
        }
    }
    true
}
