use folio_kernel::{FolioError, ProjectRegistry};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Diagnostics go to stderr so stdout carries only the report.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

pub fn resolve_path(repo_root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    repo_root.join(path)
}

/// Print a fatal error and exit before any check runs.
pub fn exit_fatal(err: &FolioError) -> ! {
    eprintln!("ERROR: {err}");
    std::process::exit(1);
}

pub fn load_registry_or_exit(repo_root: &Path, projects: Option<&str>) -> ProjectRegistry {
    let Some(projects) = projects else {
        return ProjectRegistry::builtin();
    };
    let path = resolve_path(repo_root, projects);
    tracing::debug!(path = %path.display(), "loading project registry");
    ProjectRegistry::load(&path).unwrap_or_else(|err| exit_fatal(&err))
}
