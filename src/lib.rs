//! # Stockroom - Flat-File Product Catalog
//!
//! `stockroom` keeps a list of product records mirrored to a single JSON
//! file. It offers create/read/update/delete with auto-incrementing
//! identifiers and a uniqueness constraint on the product code:
//!
//! - **Self-contained operations**: every call reloads the collection from
//!   the backing file before answering, and mutations rewrite the file in
//!   its entirety
//! - **Typed outcomes**: a missing id is `None`/`false`, never an error
//! - **Presence-only validation**: all six product fields are required at
//!   creation; nothing else is checked
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stockroom::{Catalog, ProductDraft, Result};
//!
//! # fn main() -> Result<()> {
//! let mut catalog = Catalog::open("products.json")?;
//!
//! // Add a product; the store assigns the id
//! let product = catalog.add_product(ProductDraft::new(
//!     "Notebook", "A5 dotted notebook", 12.5, "images/notebook.jpg", "NB-A5", 40,
//! ))?;
//!
//! // Read back
//! let all = catalog.products()?;
//! let by_id = catalog.product_by_id(product.id)?;
//!
//! // Replace every field except the id
//! catalog.update_product(product.id, ProductDraft::new(
//!     "Notebook", "A5 dotted notebook, 120gsm", 13.5, "images/notebook.jpg", "NB-A5", 38,
//! ))?;
//!
//! // Remove; deleting a missing id is a silent no-op
//! catalog.delete_product(product.id)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Caveats
//!
//! The backing file is the only shared resource and nothing locks it: the
//! crate assumes a single process and a single caller. Durability is a
//! synchronous whole-file overwrite per mutation; there is no partial-write
//! recovery and no transactional semantics.

pub mod catalog;
pub mod error;
pub mod io;
pub mod product;

pub use catalog::{Catalog, CatalogBuilder};
pub use error::{CatalogError, Result};
pub use product::{Product, ProductDraft};
