//! Settings sources, in ascending precedence: global file, workspace files, environment.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use std::path::Path;

pub mod environment;
pub mod global_file;
pub mod workspace_file;

/// Add `path` as a settings file when it exists. Returns whether it was added.
fn add_existing_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> (ConfigBuilder<DefaultState>, bool) {
    if !path.exists() {
        return (builder, false);
    }
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    (builder.add_source(File::from(canonical).required(false)), true)
}
