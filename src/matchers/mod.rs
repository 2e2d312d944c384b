use std::fs::Metadata;
use std::os::unix::fs::PermissionsExt;

pub mod app;
pub mod command;
pub mod file;

/// Executable regular file: any exec permission bit set. Directories are
/// never executable in this sense.
pub(crate) fn is_executable(meta: &Metadata) -> bool {
    !meta.is_dir() && meta.permissions().mode() & 0o111 != 0
}
