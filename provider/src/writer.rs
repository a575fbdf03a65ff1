use std::{
    fs,
    path::{Path, PathBuf},
};

use models::Aggregate;
use scryfall::Category;

use crate::ImportError;

pub fn output_path(out_dir: &Path, category: Category) -> PathBuf {
    out_dir.join(format!("{category}.json"))
}

/// Writes `<out_dir>/<category>.json` in one go, replacing any previous run's file.
pub fn write_aggregate(
    out_dir: &Path,
    category: Category,
    aggregate: &Aggregate,
) -> Result<PathBuf, ImportError> {
    fs::create_dir_all(out_dir).map_err(|source| ImportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;
    let path = output_path(out_dir, category);
    let json = serde_json::to_vec(aggregate)?;
    fs::write(&path, json).map_err(|source| ImportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
