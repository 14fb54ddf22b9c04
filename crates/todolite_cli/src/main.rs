//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todolite_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use todolite_core::{TodoDraft, TodoStore};

fn main() -> Result<(), Box<dyn Error>> {
    println!("todolite_core version={}", todolite_core::core_version());

    let store = TodoStore::open_in_memory()?;
    let draft = TodoDraft::new("smoke check", None)?;
    let created = store.create_todo(&draft)?;
    let found = store.get_todo(created.id)?.is_some();

    println!("store smoke created_id={} found={found}", created.id);
    Ok(())
}
