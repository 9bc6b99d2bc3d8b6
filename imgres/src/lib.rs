//! # Overview
//!
//! Crate for generating typed static accessors for a directory tree of
//! image assets. Application code imports images by name instead of by
//! path string.
//!
//! Every directory under the scan root becomes one exported class and
//! every file inside it becomes one static member that loads the image as
//! a module. Before anything is collected, a sanitation pass renames files
//! whose names are not identifier-safe (transliterating non-Latin
//! characters and replacing illegal characters), so that every generated
//! member name is a valid identifier.
//!
//! ## Example:
//!
//! **Asset Directory:**
//!
//! ```text
//! assets/
//! ├─ photo.png
//! ├─ photo@2x.png
//! ├─ icons/
//! │  ├─ home.png
//! ```
//!
//! **Generated Document:**
//!
//! ```text
//! /* eslint:disable */
//! /* tslint:disable */
//!
//! export class IconsResources {
//!   static home = require("./icons/home.png");
//! }
//!
//! export class ImageResources {
//!   static photo = require("./photo.png");
//! }
//! ```
//!
//! Classes appear in post-order of the directory tree, so a subdirectory's
//! class always precedes its parent's. Files whose name contains `@` carry
//! a display-density suffix (e.g. `@2x`) that the image loader resolves
//! implicitly; they are never listed by name.
//!
//! The whole pipeline runs through [`generate`]: sanitize the tree, collect
//! the entries, render the document, write the output file.

mod codegen;
mod collector;
mod common;
mod identifier;
mod sanitizer;

use std::fs;

use log::info;

pub use codegen::generate_document;
pub use collector::{collect, ResourceCollection, ResourceEntry};
pub use common::{Error, Options, Result};
pub use identifier::{class_name, variable_name, ROOT_CLASS_NAME};
pub use sanitizer::{sanitize_file_name, sanitize_tree};

/// Runs the whole pipeline for one [`Options`] value: sanitizes the file
/// names under `dir`, collects the resource collections, renders the
/// document and writes it to `out`, overwriting any existing content.
///
/// Every failure is fatal to the run; nothing is retried and partially
/// renamed files are not rolled back.
pub fn generate(options: &Options) -> Result<()> {
    let renames = sanitize_tree(&options.dir)?;
    if renames > 0 {
        info!("Renamed {renames} files during sanitation");
    }

    let collections = collect(options)?;
    info!("Collected {} resource collections", collections.len());

    let document = generate_document(&collections, options.typescript)?;
    fs::write(&options.out, document)?;
    info!("Wrote generated resource accessors to {}", options.out.display());
    Ok(())
}
