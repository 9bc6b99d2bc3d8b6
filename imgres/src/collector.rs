use std::{
    collections::HashSet,
    fs,
    path::{Component, Path, PathBuf},
};

use log::trace;

use crate::{
    common::{extract_file_name_from_path, Error, Options, Result},
    identifier::{class_name, variable_name, ROOT_CLASS_NAME},
};

/// One physical file that will be referenced by the generated document.
/// Immutable after creation; owned by its [`ResourceCollection`].
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    directory: PathBuf,
    output_base: PathBuf,
    file_name: String,
}

impl ResourceEntry {
    pub(crate) fn new(directory: impl Into<PathBuf>, output_base: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            output_base: output_base.into(),
            file_name: file_name.into(),
        }
    }

    /// Name of the file inside its containing directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Identifier used as the static member name.
    pub fn variable_name(&self) -> String {
        variable_name(&self.file_name)
    }

    /// Path from the generated file's effective base directory to the asset,
    /// forward-slash separated and suitable as a module-load argument.
    pub fn relative_resource_path(&self) -> Result<String> {
        let relative = pathdiff::diff_paths(&self.directory, &self.output_base)
            .ok_or_else(|| Error::InvalidPath(self.directory.clone()))?;

        let mut segments = Vec::new();
        for component in relative.components() {
            let segment = component
                .as_os_str()
                .to_str()
                .ok_or_else(|| Error::InvalidPath(relative.clone()))?;
            segments.push(segment.to_owned());
        }
        segments.push(self.file_name.clone());

        let escapes_base = matches!(relative.components().next(), Some(Component::ParentDir));
        let joined = segments.join("/");
        if escapes_base {
            Ok(joined)
        } else {
            Ok(format!("./{joined}"))
        }
    }
}

/// One directory's worth of entries, rendered as one generated class.
#[derive(Debug)]
pub struct ResourceCollection {
    name: String,
    entries: Vec<ResourceEntry>,
}

impl ResourceCollection {
    pub(crate) fn new(name: impl Into<String>, entries: Vec<ResourceEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Class name under which the entries are exported.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in filesystem enumeration order.
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }
}

/// Recursively collects the resource collections under `options.dir` in
/// post-order: every subdirectory's collection precedes its parent's, and
/// empty directories still contribute a collection. Files whose name
/// contains `@` are density variants resolved implicitly by the image
/// loader and are not collected.
///
/// Two directories producing the same class name would not compile in the
/// generated document, so a collision is reported as an error before any
/// output is written.
pub fn collect(options: &Options) -> Result<Vec<ResourceCollection>> {
    let output_base = options.resource_base();
    let collections = collect_directory(&options.dir, &output_base, true)?;
    check_unique_class_names(&collections)?;
    Ok(collections)
}

fn collect_directory(dir: &Path, output_base: &Path, is_root: bool) -> Result<Vec<ResourceCollection>> {
    let name = if is_root {
        ROOT_CLASS_NAME.to_owned()
    } else {
        class_name(&extract_file_name_from_path(dir)?)
    };
    trace!("Collecting resources in {} as class '{name}'", dir.display());

    let mut collections = Vec::new();
    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();
        if dir_entry.file_type()?.is_dir() {
            collections.extend(collect_directory(&path, output_base, false)?);
        } else {
            let file_name = extract_file_name_from_path(&path)?;
            if file_name.contains('@') {
                trace!("Skipping density variant {}", path.display());
                continue;
            }
            entries.push(ResourceEntry::new(dir, output_base, file_name));
        }
    }
    collections.push(ResourceCollection::new(name, entries));
    Ok(collections)
}

fn check_unique_class_names(collections: &[ResourceCollection]) -> Result<()> {
    let mut seen = HashSet::new();
    for collection in collections {
        if !seen.insert(collection.name()) {
            return Err(Error::DuplicateClassName(collection.name().to_owned()));
        }
    }
    Ok(())
}
