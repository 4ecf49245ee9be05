use crate::support::load_registry_or_exit;
use serde_json::json;
use std::path::PathBuf;

pub fn run(repo_root: String, projects: Option<String>, json_output: bool) {
    let repo_root = PathBuf::from(repo_root);
    let registry = load_registry_or_exit(&repo_root, projects.as_deref());
    let entries: Vec<_> = registry.iter().collect();

    if json_output {
        let payload = json!({
            "schema": 1,
            "source": if projects.is_some() { "file" } else { "builtin" },
            "projects": entries,
        });
        let rendered = serde_json::to_string_pretty(&payload).unwrap_or_else(|err| {
            eprintln!("ERROR: failed to render projects payload: {err}");
            std::process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    println!("Known projects ({})", entries.len());
    for entry in entries {
        println!("  {}  {}", entry.key, entry.label);
    }
}
