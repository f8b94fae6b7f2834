//! CLI command for CSV export

use std::path::{Path, PathBuf};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::services::{Command, ExportFile, LedgerStore, Outcome};
use crate::storage::file_io::write_atomic;

/// Export the ledger to CSV
///
/// Without `output` the file goes to the export directory under the dated
/// default name. An `output` naming an existing directory gets the default
/// name inside it.
pub fn handle_export(
    store: &mut LedgerStore,
    paths: &LedgerPaths,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let file = match store.dispatch(Command::Export)? {
        Outcome::Exported(file) => file,
        _ => return Ok(()),
    };

    let target = resolve_target(&file, paths, output.as_deref());
    write_atomic(&target, file.contents.as_bytes())?;

    tracing::info!(path = %target.display(), count = store.len(), "export written");
    println!("Exported {} expenses to {}", store.len(), target.display());

    Ok(())
}

fn resolve_target(file: &ExportFile, paths: &LedgerPaths, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(&file.filename),
        Some(path) => path.to_path_buf(),
        None => paths.export_dir().join(&file.filename),
    }
}
