use std::{fs, io, path::Path};

use deunicode::deunicode;
use log::{info, trace};
use walkdir::WalkDir;

use crate::common::{extract_file_name_from_path, Result};

/// Computes the identifier-safe form of a filename: non-Latin characters are
/// transliterated to their closest Latin representation, leading and
/// trailing whitespace is trimmed, commas become periods and every remaining
/// character outside `[A-Za-z0-9_@.]` becomes an underscore.
///
/// The function is a fixed point on already-sanitized names.
///
/// # Example
///
/// ```rust
/// use imgres::sanitize_file_name;
/// assert_eq!(sanitize_file_name("übermensch.png"), "ubermensch.png");
/// assert_eq!(sanitize_file_name("icon@2x.png"), "icon@2x.png");
/// ```
pub fn sanitize_file_name(file_name: &str) -> String {
    deunicode(file_name)
        .trim()
        .chars()
        .map(|ch| match ch {
            ',' => '.',
            'A'..='Z' | 'a'..='z' | '0'..='9' | '_' | '@' | '.' => ch,
            _ => '_',
        })
        .collect()
}

/// Renames every file under `root` whose name is not identifier-safe.
/// Directories are never renamed. Returns the number of renames performed;
/// a second pass over the same tree performs none.
///
/// This mutates the filesystem and must run before the tree is collected.
pub fn sanitize_tree(root: &Path) -> Result<usize> {
    info!("Sanitizing file names in {}", root.display());

    // Collect the paths first so that renames don't interfere with the walk.
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    let mut renames = 0;
    for path in files {
        let file_name = extract_file_name_from_path(&path)?;
        let sanitized = sanitize_file_name(&file_name);
        if sanitized != file_name {
            let new_path = path.with_file_name(&sanitized);
            trace!("Renaming '{}' to '{}'", path.display(), new_path.display());
            fs::rename(&path, &new_path)?;
            renames += 1;
        }
    }
    Ok(renames)
}
