use std::{
    io,
    path::{Component, Path, PathBuf},
    result,
};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),
    #[error("IoError: {0}")]
    IoError(#[from] io::Error),
    #[error("Class name '{0}' is generated by more than one directory")]
    DuplicateClassName(String),
}

/// Configuration for one generator run. Built once by the caller and passed
/// by reference into every component that needs it.
#[derive(Debug, Clone)]
pub struct Options {
    /// Root directory that is scanned for image resources.
    pub dir: PathBuf,
    /// Path of the generated source file. Overwritten on every run.
    pub out: PathBuf,
    /// Optional prefix applied to the output file's directory before the
    /// relative resource paths are computed. Allows the generated file to
    /// live somewhere other than the relative-path base.
    pub read: Option<PathBuf>,
    /// Emit `readonly` members with a type annotation and the matching type
    /// import instead of untyped module requires.
    pub typescript: bool,
}

impl Options {
    /// Base directory against which the relative resource paths are
    /// computed: the output file's directory, joined with `read` when set.
    pub fn resource_base(&self) -> PathBuf {
        let out_dir = self.out.parent().unwrap_or(Path::new(""));
        match &self.read {
            Some(read) => normalize_lexically(&out_dir.join(read)),
            None => out_dir.to_path_buf(),
        }
    }
}

/// Resolves `.` and `..` components without consulting the filesystem, so
/// that a `read` prefix like `../assets` diffs cleanly against asset paths.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(result.components().next_back(), Some(Component::Normal(_)));
                if !(can_pop && result.pop()) {
                    result.push("..");
                }
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}

pub(crate) fn extract_file_name_from_path(path: &Path) -> Result<String> {
    Ok(path
        .file_name()
        .and_then(|file_name| file_name.to_str())
        .ok_or(Error::InvalidPath(path.to_owned()))?
        .to_owned())
}
