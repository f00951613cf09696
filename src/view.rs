//! The portal page view: store, loader, forms and notifications for one mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `PortalView` is built per page request. Submissions run first, then the
//! view mounts and fetches all five collections, so a rendered page always
//! reflects the backend after the submission. Created entities are never
//! appended locally; they appear only if the backend returns them.

use std::sync::Arc;

use tracing::warn;

use crate::api::PortalApi;
use crate::forms::{FormStatus, IssueForm, IssueFormInput, PostForm, PostFormInput};
use crate::loader::Loader;
use crate::notify::Notifications;
use crate::render::PageModel;
use crate::store::PortalStore;

/// Tabs of the portal page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Representatives,
    RaiseIssue,
    PostActivity,
    Announcements,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Self::Representatives, Self::RaiseIssue, Self::PostActivity, Self::Announcements];

    /// Query-string key (`?tab=`).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Representatives => "representatives",
            Self::RaiseIssue => "issue",
            Self::PostActivity => "post",
            Self::Announcements => "announcements",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Representatives => "Representatives",
            Self::RaiseIssue => "Raise Issue/Complaint",
            Self::PostActivity => "Post Activity",
            Self::Announcements => "Announcements",
        }
    }

    /// Parse a query key; unknown or missing keys fall back to the default tab.
    #[must_use]
    pub fn from_key(key: Option<&str>) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| Some(tab.key()) == key)
            .unwrap_or_default()
    }
}

struct Mounted {
    store: PortalStore,
    loader: Loader,
}

impl Mounted {
    fn new(api: Arc<dyn PortalApi>) -> Self {
        let (store, writers) = PortalStore::new();
        let loader = Loader::mount(api, writers);
        Self { store, loader }
    }
}

pub struct PortalView {
    api: Arc<dyn PortalApi>,
    pub tab: Tab,
    pub issue_form: IssueForm,
    pub post_form: PostForm,
    pub notifications: Notifications,
    mounted: Option<Mounted>,
}

impl PortalView {
    #[must_use]
    pub fn new(api: Arc<dyn PortalApi>, tab: Tab) -> Self {
        Self {
            api,
            tab,
            issue_form: IssueForm::default(),
            post_form: PostForm::default(),
            notifications: Notifications::default(),
            mounted: None,
        }
    }

    /// Start the five collection fetches. Re-mounting tears down the previous
    /// mount first, so its fetches can no longer write anywhere visible.
    pub fn mount(&mut self) {
        self.unmount();
        self.mounted = Some(Mounted::new(Arc::clone(&self.api)));
    }

    pub fn unmount(&mut self) {
        if let Some(mut mounted) = self.mounted.take() {
            mounted.loader.unmount();
        }
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Read side of the current mount's store.
    #[cfg(test)]
    pub fn store(&self) -> Option<&PortalStore> {
        self.mounted.as_ref().map(|m| &m.store)
    }

    pub async fn submit_issue(&mut self, input: IssueFormInput) -> FormStatus {
        self.tab = Tab::RaiseIssue;
        self.issue_form = IssueForm::with_values(input);
        self.issue_form
            .submit(self.api.as_ref(), &mut self.notifications)
            .await
    }

    pub async fn submit_post(&mut self, input: PostFormInput) -> FormStatus {
        self.tab = Tab::PostActivity;
        self.post_form = PostForm::with_values(input);
        self.post_form
            .submit(self.api.as_ref(), &mut self.notifications)
            .await
    }

    /// Mount if needed, wait for every fetch to finish, and take the render
    /// model. The view stays mounted until dropped or unmounted.
    pub async fn ready(&mut self) -> PageModel {
        let api = Arc::clone(&self.api);
        let mounted = self.mounted.get_or_insert_with(|| Mounted::new(api));
        mounted.loader.join().await;
        mounted.store.settled().await;
        let pending = mounted.store.pending();
        if !pending.is_empty() {
            warn!(?pending, "rendering before every collection settled");
        }
        let collections = mounted.store.snapshot();

        PageModel {
            tab: self.tab,
            collections,
            issue: self.issue_form.clone(),
            post: self.post_form.clone(),
            notifications: self.notifications.clone(),
        }
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
