use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use flate2::read::MultiGzDecoder;

use crate::input::{Dataset, LoadError, load_dataset};

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(MultiGzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read-once holder for the dataset behind one source file. The first
/// successful `get_or_load` parses the file; every later call hands out the
/// same `Arc` without touching the filesystem.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    cell: OnceLock<Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get_or_load(&self) -> Result<Arc<Dataset>, LoadError> {
        if let Some(dataset) = self.cell.get() {
            return Ok(Arc::clone(dataset));
        }
        tracing::debug!(path = %self.path().display(), "dataset not cached; loading");
        let loaded = Arc::new(load_dataset(&self.path)?);
        // A concurrent loader may have won the race; keep whichever landed first.
        let dataset = self.cell.get_or_init(|| loaded);
        Ok(Arc::clone(dataset))
    }
}
