//! Per-mount collection store.
//!
//! DESIGN
//! ======
//! Each collection is an independently owned slice backed by a
//! `tokio::sync::watch` channel. The write half (`SliceWriter`) is not `Clone`
//! and is consumed by its single write, so exactly one loader task can settle
//! a slice, exactly once. Readers take cheap snapshots or wait for the slice to
//! settle. A store lives only as long as one mount of the portal view.

use tokio::sync::watch;

use crate::api::types::{Announcement, Collection, Location, Post, Representative, User};

/// Load state of one collection slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SliceState<T> {
    NotLoaded,
    Loaded(Vec<T>),
    /// The fetch failed; the page renders the collection as empty.
    Failed,
}

impl<T> SliceState<T> {
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::NotLoaded)
    }

    /// Items to display. Unloaded and failed slices read as empty.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items,
            Self::NotLoaded | Self::Failed => &[],
        }
    }
}

/// Single-writer handle for one slice.
pub struct SliceWriter<T> {
    collection: Collection,
    tx: watch::Sender<SliceState<T>>,
}

impl<T> SliceWriter<T> {
    #[must_use]
    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn resolve(self, items: Vec<T>) {
        self.tx.send_replace(SliceState::Loaded(items));
    }

    pub fn fail(self) {
        self.tx.send_replace(SliceState::Failed);
    }
}

/// Read handle for one slice.
#[derive(Clone)]
pub struct SliceReader<T> {
    collection: Collection,
    rx: watch::Receiver<SliceState<T>>,
}

impl<T: Clone> SliceReader<T> {
    #[must_use]
    pub fn collection(&self) -> Collection {
        self.collection
    }

    #[cfg(test)]
    pub fn state(&self) -> SliceState<T> {
        self.rx.borrow().clone()
    }

    #[must_use]
    pub fn items(&self) -> Vec<T> {
        self.rx.borrow().items().to_vec()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.rx.borrow().is_settled()
    }

    /// True once the writer is gone, whether or not it wrote.
    #[cfg(test)]
    pub fn writer_closed(&self) -> bool {
        self.rx.has_changed().is_err()
    }

    /// Wait until the slice leaves `NotLoaded`.
    ///
    /// Returns `false` if the writer was dropped without writing (the fetch was
    /// cancelled).
    pub async fn settled(&self) -> bool {
        let mut rx = self.rx.clone();
        let settled = rx.wait_for(SliceState::is_settled).await;
        settled.is_ok()
    }
}

fn slice<T>(collection: Collection) -> (SliceWriter<T>, SliceReader<T>) {
    let (tx, rx) = watch::channel(SliceState::NotLoaded);
    (SliceWriter { collection, tx }, SliceReader { collection, rx })
}

/// Read side of the five collections, injected into the view.
#[derive(Clone)]
pub struct PortalStore {
    pub representatives: SliceReader<Representative>,
    pub locations: SliceReader<Location>,
    pub users: SliceReader<User>,
    pub posts: SliceReader<Post>,
    pub announcements: SliceReader<Announcement>,
}

/// Write side of the five collections, handed to the loader.
pub struct StoreWriters {
    pub representatives: SliceWriter<Representative>,
    pub locations: SliceWriter<Location>,
    pub users: SliceWriter<User>,
    pub posts: SliceWriter<Post>,
    pub announcements: SliceWriter<Announcement>,
}

/// Point-in-time copy of every collection, used for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collections {
    pub representatives: Vec<Representative>,
    pub locations: Vec<Location>,
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub announcements: Vec<Announcement>,
}

impl PortalStore {
    /// Create an empty store and the writer handles that feed it.
    #[must_use]
    pub fn new() -> (Self, StoreWriters) {
        let (representatives_tx, representatives) = slice(Collection::Representatives);
        let (locations_tx, locations) = slice(Collection::Locations);
        let (users_tx, users) = slice(Collection::Users);
        let (posts_tx, posts) = slice(Collection::Posts);
        let (announcements_tx, announcements) = slice(Collection::Announcements);

        let store = Self { representatives, locations, users, posts, announcements };
        let writers = StoreWriters {
            representatives: representatives_tx,
            locations: locations_tx,
            users: users_tx,
            posts: posts_tx,
            announcements: announcements_tx,
        };
        (store, writers)
    }

    /// Wait for all five slices to settle or lose their writer.
    pub async fn settled(&self) {
        tokio::join!(
            self.representatives.settled(),
            self.locations.settled(),
            self.users.settled(),
            self.posts.settled(),
            self.announcements.settled(),
        );
    }

    /// Collections that have not settled yet.
    #[must_use]
    pub fn pending(&self) -> Vec<Collection> {
        let states = [
            (self.representatives.collection(), self.representatives.is_settled()),
            (self.locations.collection(), self.locations.is_settled()),
            (self.users.collection(), self.users.is_settled()),
            (self.posts.collection(), self.posts.is_settled()),
            (self.announcements.collection(), self.announcements.is_settled()),
        ];
        states
            .into_iter()
            .filter(|(_, settled)| !settled)
            .map(|(collection, _)| collection)
            .collect()
    }

    #[must_use]
    pub fn snapshot(&self) -> Collections {
        Collections {
            representatives: self.representatives.items(),
            locations: self.locations.items(),
            users: self.users.items(),
            posts: self.posts.items(),
            announcements: self.announcements.items(),
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
