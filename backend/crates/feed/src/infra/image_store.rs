//! Filesystem Image Store
//!
//! Image references are paths relative to a configured base directory; a
//! leading `/` is read as the base directory itself. References that would
//! escape the base directory are refused.

use std::io;
use std::path::{Component, Path, PathBuf};

use crate::domain::repository::ImageStore;
use crate::error::{FeedError, FeedResult};

#[derive(Debug, Clone)]
pub struct FsImageStore {
    base_path: PathBuf,
}

impl FsImageStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Resolve a reference under the base path
    ///
    /// A single leading `/` is taken as relative to the base path, the form
    /// `images/...` references are served under.
    pub fn resolve(&self, image_ref: &str) -> FeedResult<PathBuf> {
        let mut components = Path::new(image_ref).components().peekable();
        components.next_if_eq(&Component::RootDir);

        let mut relative = PathBuf::new();
        for component in components {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(outside_base(image_ref));
                }
            }
        }

        if relative.as_os_str().is_empty() {
            return Err(outside_base(image_ref));
        }

        Ok(self.base_path.join(relative))
    }
}

fn outside_base(image_ref: &str) -> FeedError {
    FeedError::Image(format!("image reference outside base path: {image_ref}"))
}

impl ImageStore for FsImageStore {
    async fn remove(&self, image_ref: &str) -> FeedResult<()> {
        let path = self.resolve(image_ref)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Image already absent");
                Ok(())
            }
            Err(e) => Err(FeedError::Image(format!("{}: {e}", path.display()))),
        }
    }
}
