use crate::support::{exit_fatal, load_registry_or_exit, resolve_path};
use folio_coherence::run_consistency_check;
use folio_kernel::Document;
use std::path::PathBuf;

pub struct Args {
    pub repo_root: String,
    pub readme: String,
    pub index: String,
    pub projects: Option<String>,
    pub json: bool,
}

pub fn run(args: Args) {
    let repo_root = PathBuf::from(&args.repo_root);
    let registry = load_registry_or_exit(&repo_root, args.projects.as_deref());

    let readme_path = resolve_path(&repo_root, &args.readme);
    let index_path = resolve_path(&repo_root, &args.index);
    let readme = Document::load(&readme_path).unwrap_or_else(|err| exit_fatal(&err));
    let index = Document::load(&index_path).unwrap_or_else(|err| exit_fatal(&err));

    let report = run_consistency_check(&readme, &index, &registry);
    let outcome = report.outcome();
    tracing::debug!(
        ?outcome,
        warnings = report.warnings().count(),
        errors = report.errors().count(),
        "consistency check finished"
    );

    if args.json {
        let rendered = serde_json::to_string_pretty(&report.payload()).unwrap_or_else(|err| {
            eprintln!("ERROR: failed to render consistency-check payload: {err}");
            std::process::exit(1);
        });
        println!("{rendered}");
    } else {
        print!("{}", report.render_text());
    }

    if !outcome.is_passed() {
        std::process::exit(1);
    }
}
