//! Disk I/O for the catalog backing file

use crate::error::Result;
use crate::product::Product;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Disk-backed catalog storage
///
/// The backing file is a UTF-8, pretty-printed JSON array holding the whole
/// collection. It is read and rewritten wholesale; there is no partial or
/// incremental persistence.
pub struct BackingFile {
    path: PathBuf,
}

impl BackingFile {
    /// Create a handle for the backing file at `path`
    ///
    /// The file itself is not touched until the first load or save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        BackingFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole backing file
    ///
    /// Returns `Ok(None)` when the file does not exist. Any other read
    /// failure, and any parse failure, is surfaced to the caller.
    pub fn load(&self) -> Result<Option<Vec<Product>>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let products = serde_json::from_str(&data)?;
        Ok(Some(products))
    }

    /// Serialize the collection and overwrite the backing file in its entirety
    pub fn save(&self, products: &[Product]) -> Result<()> {
        let data = serde_json::to_string_pretty(products)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::product::ProductDraft;
    use tempfile::TempDir;

    fn sample() -> Vec<Product> {
        vec![
            ProductDraft::new("One", "First", 100.0, "1.jpg", "code1", 10).into_product(1),
            ProductDraft::new("Two", "Second", 200.0, "2.jpg", "code2", 5).into_product(2),
        ]
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let file = BackingFile::new(dir.path().join("products.json"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let file = BackingFile::new(dir.path().join("products.json"));
        let products = sample();
        file.save(&products).unwrap();
        assert_eq!(file.load().unwrap().unwrap(), products);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let file = BackingFile::new(dir.path().join("products.json"));
        file.save(&sample()).unwrap();
        file.save(&[]).unwrap();
        assert_eq!(file.load().unwrap().unwrap(), Vec::<Product>::new());
    }

    #[test]
    fn test_load_garbage_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        fs::write(&path, "not json at all").unwrap();
        let file = BackingFile::new(&path);
        assert!(matches!(file.load(), Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let file = BackingFile::new(dir.path().join("no-such-dir").join("products.json"));
        assert!(matches!(file.save(&sample()), Err(CatalogError::Io(_))));
    }
}
