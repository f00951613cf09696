//! Mount-time collection loader.
//!
//! DESIGN
//! ======
//! One task per collection, spawned into a `JoinSet` with no ordering between
//! them and no retry. Each task owns its slice writer, so resolution order
//! cannot cause cross-collection races. Unmounting (or dropping the loader)
//! aborts whatever is still in flight; an aborted task drops its writer without
//! writing, so nothing lands in a store after its view is gone.

use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use crate::api::PortalApi;
use crate::api::types::ApiError;
use crate::store::{SliceWriter, StoreWriters};

pub struct Loader {
    tasks: JoinSet<()>,
}

impl Loader {
    /// Spawn the five collection fetches. Must be called inside a Tokio runtime.
    pub fn mount(api: Arc<dyn PortalApi>, writers: StoreWriters) -> Self {
        let StoreWriters { representatives, locations, users, posts, announcements } = writers;
        let mut tasks = JoinSet::new();

        let a = Arc::clone(&api);
        spawn_fetch(&mut tasks, representatives, async move { a.list_representatives().await });
        let a = Arc::clone(&api);
        spawn_fetch(&mut tasks, locations, async move { a.list_locations().await });
        let a = Arc::clone(&api);
        spawn_fetch(&mut tasks, users, async move { a.list_users().await });
        let a = Arc::clone(&api);
        spawn_fetch(&mut tasks, posts, async move { a.list_posts().await });
        spawn_fetch(&mut tasks, announcements, async move { api.list_announcements().await });

        debug!(tasks = tasks.len(), "portal loader mounted");
        Self { tasks }
    }

    /// Wait for every fetch task to finish (or be aborted).
    pub async fn join(&mut self) {
        while let Some(result) = self.tasks.join_next().await {
            if let Err(e) = result
                && e.is_panic()
            {
                error!(error = %e, "collection fetch task panicked");
            }
        }
    }

    /// Abort outstanding fetches. Slices that have not resolved stay `NotLoaded`.
    pub fn unmount(&mut self) {
        if !self.tasks.is_empty() {
            debug!(in_flight = self.tasks.len(), "portal loader unmounted with fetches in flight");
        }
        self.tasks.abort_all();
    }

    /// Tasks not yet joined.
    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        self.tasks.abort_all();
    }
}

fn spawn_fetch<T, F>(tasks: &mut JoinSet<()>, writer: SliceWriter<T>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<Vec<T>, ApiError>> + Send + 'static,
{
    tasks.spawn(async move {
        let collection = writer.collection();
        match fetch.await {
            Ok(items) => {
                debug!(%collection, count = items.len(), "collection loaded");
                writer.resolve(items);
            }
            Err(e) => {
                warn!(%collection, error = %e, "collection fetch failed");
                writer.fail();
            }
        }
    });
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
