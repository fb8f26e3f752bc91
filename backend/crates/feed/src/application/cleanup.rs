//! Image cleanup
//!
//! Removal of a post image runs on a background task after the operation
//! has completed. A failure is logged and never reaches the caller.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::repository::ImageStore;

pub fn schedule_image_removal<I>(images: Arc<I>, image_ref: String) -> JoinHandle<()>
where
    I: ImageStore + Send + Sync + 'static,
{
    tokio::spawn(async move {
        match images.remove(&image_ref).await {
            Ok(()) => tracing::debug!(%image_ref, "Post image removed"),
            Err(e) => tracing::warn!(%image_ref, error = %e, "Post image removal failed"),
        }
    })
}
