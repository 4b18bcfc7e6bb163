use std::fs;

use tracing::{debug, info, warn};

use crate::models::directory_name::DirectoryName;
use crate::utils::error::{DatedirsError, Result};

/// Create every directory of a sequence, in order.
///
/// Missing parents are created as needed, but each entry itself must be new.
/// The first failure stops the run; directories created before it stay on
/// disk. Returns the number of directories created.
pub fn create_all(names: &[DirectoryName]) -> Result<usize> {
    for (index, name) in names.iter().enumerate() {
        if let Err(source) = create_one(name) {
            warn!(index, path = %name, error = %source, "directory creation failed");
            return Err(DatedirsError::DirectoryCreation {
                index,
                path: name.as_path().to_path_buf(),
                source,
            });
        }
        debug!(index, path = %name, "created directory");
    }

    info!(count = names.len(), "created directory sequence");
    Ok(names.len())
}

fn create_one(name: &DirectoryName) -> std::io::Result<()> {
    let path = name.as_path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::create_dir(path)
}
