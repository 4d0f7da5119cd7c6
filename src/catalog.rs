//! Main catalog API
//!
//! Provides the high-level CRUD operations over the flat-file catalog.
//! Every public operation is a self-contained round-trip to storage: it
//! reloads the whole collection from the backing file, answers or mutates
//! in memory, and (for mutations) rewrites the file in its entirety.

use crate::error::{CatalogError, Result};
use crate::io::BackingFile;
use crate::product::{Product, ProductDraft};
use std::path::Path;
use tracing::{debug, info, warn};

/// First identifier handed out by an empty catalog
const FIRST_ID: u64 = 1;

/// Flat-file product catalog
///
/// Owns the in-memory product collection and mirrors it to a single JSON
/// file. Identifiers are assigned in strictly increasing order starting at
/// 1; a retired id is never handed out again by the same instance. Product
/// codes are unique among currently-stored products, checked at creation
/// only.
///
/// The model assumes single-process, single-caller access. Two processes
/// working on the same path can interleave their reload/rewrite sequences
/// and silently drop one side's write; nothing here defends against that.
///
/// # Examples
///
/// ```rust,no_run
/// use stockroom::{Catalog, ProductDraft, Result};
///
/// # fn main() -> Result<()> {
/// let mut catalog = Catalog::open("products.json")?;
///
/// let product = catalog.add_product(ProductDraft::new(
///     "Desk Lamp", "Adjustable LED desk lamp", 34.9, "images/lamp.jpg", "LAMP-01", 25,
/// ))?;
///
/// let all = catalog.products()?;
/// let found = catalog.product_by_id(product.id)?;
/// catalog.delete_product(product.id)?;
/// # Ok(())
/// # }
/// ```
pub struct Catalog {
    /// Durable mirror of the collection
    file: BackingFile,

    /// In-memory collection, replaced wholesale on every reload
    products: Vec<Product>,

    /// Next id to assign; ratchets forward, never backward
    next_id: u64,

    /// Treat a malformed backing file as empty instead of failing
    tolerate_corrupt: bool,
}

impl Catalog {
    /// Open a catalog backed by the file at `path`
    ///
    /// A missing file is not an error: the catalog starts empty and the
    /// file is created by the first mutation. A file that exists but does
    /// not parse as a product collection is surfaced as
    /// [`CatalogError::Malformed`]; use
    /// [`CatalogBuilder::tolerate_corrupt`] to start empty instead.
    ///
    /// The id counter resumes at one past the highest stored id, so a
    /// reopened catalog never assigns an id that is already on disk.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use stockroom::Catalog;
    ///
    /// let catalog = Catalog::open("products.json")?;
    /// # Ok::<(), stockroom::CatalogError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        CatalogBuilder::new(path).build()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Number of products in the last-loaded snapshot
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the last-loaded snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Validate, assign the next id, append, and persist
    ///
    /// All six draft fields must be present and non-zero, and the draft's
    /// `code` must not collide with a currently-stored product. The file is
    /// reloaded before the uniqueness check, so records added to it by
    /// another writer since the last call are taken into account.
    ///
    /// Returns the stored record, id included.
    ///
    /// # Errors
    ///
    /// `MissingField` or `CodeInUse` on validation failure (the collection
    /// is left untouched), `Io` if the backing file cannot be rewritten.
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<Product> {
        self.reload()?;
        draft.validate()?;

        if self.products.iter().any(|p| p.code == draft.code) {
            return Err(CatalogError::CodeInUse(draft.code));
        }

        let id = self.next_id;
        self.next_id += 1;

        let product = draft.into_product(id);
        self.products.push(product.clone());
        self.persist()?;

        debug!("Added product {} with code '{}'", id, product.code);
        Ok(product)
    }

    /// Return the full collection as a snapshot, in insertion order
    pub fn products(&mut self) -> Result<Vec<Product>> {
        self.reload()?;
        Ok(self.products.clone())
    }

    /// Look up a product by id
    ///
    /// A missing id is a normal outcome, reported as `Ok(None)`.
    pub fn product_by_id(&mut self, id: u64) -> Result<Option<Product>> {
        self.reload()?;
        let found = self.products.iter().find(|p| p.id == id).cloned();
        if found.is_none() {
            debug!("Product {} not found", id);
        }
        Ok(found)
    }

    /// Replace every field of the product with the given id
    ///
    /// The stored id always wins: whatever the draft carries, the record
    /// keeps the id it was created with. The draft is not re-validated and
    /// its code is not re-checked for uniqueness; both are creation-time
    /// concerns.
    ///
    /// Returns `Ok(false)` without writing when no product has the id.
    pub fn update_product(&mut self, id: u64, draft: ProductDraft) -> Result<bool> {
        self.reload()?;

        let Some(slot) = self.products.iter_mut().find(|p| p.id == id) else {
            debug!("Update skipped, product {} not found", id);
            return Ok(false);
        };
        *slot = draft.into_product(id);
        self.persist()?;

        debug!("Updated product {}", id);
        Ok(true)
    }

    /// Remove the product with the given id
    ///
    /// Filter semantics: deleting an id that is not present is a no-op, not
    /// an error. The collection is persisted either way. Returns whether a
    /// record was actually removed.
    pub fn delete_product(&mut self, id: u64) -> Result<bool> {
        self.reload()?;

        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        let removed = self.products.len() < before;
        self.persist()?;

        if removed {
            debug!("Deleted product {}", id);
        } else {
            debug!("Delete skipped, product {} not found", id);
        }
        Ok(removed)
    }

    /// Replace the in-memory collection with the backing file contents
    ///
    /// A missing file yields an empty collection. The id counter advances
    /// to one past the highest id seen, and never moves backward, so ids
    /// picked up from the file are not reassigned and deletions do not
    /// free their ids for reuse.
    fn reload(&mut self) -> Result<()> {
        self.products = match self.file.load() {
            Ok(loaded) => loaded.unwrap_or_default(),
            Err(CatalogError::Malformed(err)) if self.tolerate_corrupt => {
                warn!(
                    "Discarding malformed catalog file {:?}: {}",
                    self.file.path(),
                    err
                );
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        let max_id = self.products.iter().map(|p| p.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
        Ok(())
    }

    /// Serialize the collection and overwrite the backing file
    fn persist(&self) -> Result<()> {
        self.file.save(&self.products)?;
        debug!(
            "Persisted {} products to {:?}",
            self.products.len(),
            self.file.path()
        );
        Ok(())
    }
}

/// Builder for customizing catalog opening
///
/// # Examples
///
/// ```rust,no_run
/// use stockroom::CatalogBuilder;
///
/// let catalog = CatalogBuilder::new("products.json")
///     .tolerate_corrupt()
///     .build()?;
/// # Ok::<(), stockroom::CatalogError>(())
/// ```
pub struct CatalogBuilder {
    file: BackingFile,
    tolerate_corrupt: bool,
}

impl CatalogBuilder {
    /// Start building a catalog backed by the file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        CatalogBuilder {
            file: BackingFile::new(path),
            tolerate_corrupt: false,
        }
    }

    /// Treat a malformed backing file as empty instead of failing
    ///
    /// The discarded contents are overwritten by the next mutation.
    pub fn tolerate_corrupt(mut self) -> Self {
        self.tolerate_corrupt = true;
        self
    }

    /// Open the catalog, loading existing state from the backing file
    pub fn build(self) -> Result<Catalog> {
        info!("Opening catalog at {:?}", self.file.path());
        let mut catalog = Catalog {
            file: self.file,
            products: Vec::new(),
            next_id: FIRST_ID,
            tolerate_corrupt: self.tolerate_corrupt,
        };
        catalog.reload()?;
        Ok(catalog)
    }
}
