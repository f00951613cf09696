//! Issue and post submission forms.
//!
//! DESIGN
//! ======
//! Raw form input arrives as plain strings (exactly what the browser posted).
//! `validate` is the boundary: it either yields the typed create request or the
//! list of missing required fields, and no request is attempted until it
//! succeeds. Per form: idle -> submitting -> cleared | failed.
//!
//! ERROR HANDLING
//! ==============
//! Every create failure collapses into one generic toast. The cause goes to the
//! service log only. Failed submissions keep the entered values so the user can
//! retry by hand; nothing is retried automatically.

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::api::PortalApi;
use crate::api::types::{NewIssue, NewPost};
use crate::notify::Notifications;

pub const ISSUE_SUBMITTED: &str = "Issue submitted successfully";
pub const ISSUE_FAILED: &str = "Failed to submit issue";
pub const POST_SUBMITTED: &str = "Post submitted successfully";
pub const POST_FAILED: &str = "Failed to submit post";

/// Required fields across both forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    User,
    Representative,
}

impl Field {
    /// Form field name as posted by the browser.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::User => "userId",
            Self::Representative => "representativeId",
        }
    }

    #[must_use]
    pub fn required_message(self) -> &'static str {
        match self {
            Self::Title => "Please enter a title",
            Self::Description => "Please enter a description",
            Self::User => "Please select your name",
            Self::Representative => "Please select a representative",
        }
    }
}

/// Missing required fields, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<Field>);

impl FieldErrors {
    fn check(&mut self, field: Field, value: &str) {
        if value.trim().is_empty() {
            self.0.push(field);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.0
    }

    /// Validation message for `field`, if it is missing.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.0
            .contains(&field)
            .then(|| field.required_message())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    /// Last submission succeeded and the fields were reset.
    Cleared,
    /// Last submission failed; fields keep their values.
    Failed,
}

// =============================================================================
// ISSUE FORM
// =============================================================================

/// Raw issue form fields, as posted (`application/x-www-form-urlencoded`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueFormInput {
    pub title: String,
    pub description: String,
    pub user_id: String,
    pub representative_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueForm {
    pub values: IssueFormInput,
    pub errors: FieldErrors,
    pub status: FormStatus,
}

impl IssueForm {
    #[must_use]
    pub fn with_values(values: IssueFormInput) -> Self {
        Self { values, ..Self::default() }
    }

    /// Required-field check only; no cross-field rules.
    ///
    /// # Errors
    ///
    /// Returns the missing fields when any required value is blank.
    pub fn validate(&self) -> Result<NewIssue, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(Field::Title, &self.values.title);
        errors.check(Field::Description, &self.values.description);
        errors.check(Field::User, &self.values.user_id);
        errors.check(Field::Representative, &self.values.representative_id);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewIssue {
            title: self.values.title.clone(),
            description: self.values.description.clone(),
            user_id: self.values.user_id.clone(),
            representative_id: self.values.representative_id.clone(),
        })
    }

    /// Validate and, if complete, create the issue. Pushes at most one notification.
    pub async fn submit(&mut self, api: &dyn PortalApi, notices: &mut Notifications) -> FormStatus {
        let request = match self.validate() {
            Ok(request) => request,
            Err(errors) => {
                debug!(missing = ?errors.fields(), "issue form incomplete");
                self.errors = errors;
                self.status = FormStatus::Idle;
                return self.status;
            }
        };

        self.errors = FieldErrors::default();
        self.status = FormStatus::Submitting;
        match api.create_issue(&request).await {
            Ok(()) => {
                info!(representative_id = %request.representative_id, "issue submitted");
                self.values = IssueFormInput::default();
                self.status = FormStatus::Cleared;
                notices.success(ISSUE_SUBMITTED);
            }
            Err(e) => {
                warn!(error = %e, "issue submission failed");
                self.status = FormStatus::Failed;
                notices.error(ISSUE_FAILED);
            }
        }
        self.status
    }
}

// =============================================================================
// POST FORM
// =============================================================================

/// Raw post form fields. `content` and `imageUrl` are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostFormInput {
    pub content: String,
    pub image_url: String,
    pub user_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostForm {
    pub values: PostFormInput,
    pub errors: FieldErrors,
    pub status: FormStatus,
}

impl PostForm {
    #[must_use]
    pub fn with_values(values: PostFormInput) -> Self {
        Self { values, ..Self::default() }
    }

    /// Only the submitting user is required. Blank optional fields are dropped
    /// from the request; the image reference is not checked for URL shape.
    ///
    /// # Errors
    ///
    /// Returns the missing fields when no user is selected.
    pub fn validate(&self) -> Result<NewPost, FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(Field::User, &self.values.user_id);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewPost {
            content: non_blank(&self.values.content),
            image_url: non_blank(&self.values.image_url),
            user_id: self.values.user_id.clone(),
        })
    }

    /// Validate and, if complete, create the post. Pushes at most one notification.
    pub async fn submit(&mut self, api: &dyn PortalApi, notices: &mut Notifications) -> FormStatus {
        let request = match self.validate() {
            Ok(request) => request,
            Err(errors) => {
                debug!(missing = ?errors.fields(), "post form incomplete");
                self.errors = errors;
                self.status = FormStatus::Idle;
                return self.status;
            }
        };

        self.errors = FieldErrors::default();
        self.status = FormStatus::Submitting;
        match api.create_post(&request).await {
            Ok(()) => {
                info!(user_id = %request.user_id, has_image = request.image_url.is_some(), "post submitted");
                self.values = PostFormInput::default();
                self.status = FormStatus::Cleared;
                notices.success(POST_SUBMITTED);
            }
            Err(e) => {
                warn!(error = %e, "post submission failed");
                self.status = FormStatus::Failed;
                notices.error(POST_FAILED);
            }
        }
        self.status
    }
}

fn non_blank(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
