//! Writing rendered books to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{MemoriamError, Result};
use crate::render::Bucket;

/// File name prefix derived from the input file: its name up to the first
/// `.`, so `data/persons.yaml` gives `persons`.
pub fn output_prefix(input: &Path) -> String {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file_name,
    }
}

/// Path of the book for `label`: `<dir>/<prefix>-<label>.txt`.
pub fn output_path(dir: &Path, prefix: &str, label: &str) -> PathBuf {
    dir.join(format!("{prefix}-{label}.txt"))
}

/// Write every bucket to its own file under `dir`, creating `dir` as needed.
///
/// Returns the written paths in bucket order. Stops at the first failure.
pub fn write_buckets(dir: &Path, prefix: &str, buckets: &[Bucket]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| MemoriamError::SinkWrite {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(buckets.len());
    for bucket in buckets {
        let path = output_path(dir, prefix, bucket.label);
        fs::write(&path, &bucket.text).map_err(|source| MemoriamError::SinkWrite {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), persons = bucket.count, "wrote book");
        written.push(path);
    }
    Ok(written)
}
