//! Filesystem-backed metadata lookup.

use std::path::{Path, PathBuf};

use url::Url;

use flowbridge_plugin::metadata::{FileMeta, LookupError, MetadataLookup};

/// Resolves transfer sources against the local filesystem.
///
/// `file://` URLs resolve through their path component; anything else is
/// treated as a plain filesystem path, with relative paths resolving
/// under the metadata root.
pub struct FsMetadataLookup {
    root: PathBuf,
}

impl FsMetadataLookup {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, source: &str) -> Result<PathBuf, LookupError> {
        if let Ok(url) = Url::parse(source) {
            if url.scheme() == "file" {
                return url
                    .to_file_path()
                    .map_err(|_| LookupError::Backend(format!("not a local file URL: {source}")));
            }
        }

        let path = Path::new(source);
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(self.root.join(path))
        }
    }
}

impl MetadataLookup for FsMetadataLookup {
    fn stat(&self, source: &str) -> Result<FileMeta, LookupError> {
        let path = self.resolve(source)?;
        let meta = std::fs::metadata(&path)?;
        Ok(FileMeta { size: meta.len() })
    }
}
