use super::*;

use crate::api::test_helpers::MockApi;
use crate::notify::NoticeLevel;

fn pothole() -> IssueFormInput {
    IssueFormInput {
        title: "Pothole".into(),
        description: "Large pothole on Main St".into(),
        user_id: "u1".into(),
        representative_id: "r2".into(),
    }
}

// =========================================================================
// Issue form
// =========================================================================

#[test]
fn issue_validate_reports_every_missing_field() {
    let form = IssueForm::default();
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.fields(), &[Field::Title, Field::Description, Field::User, Field::Representative]);
    assert_eq!(errors.message(Field::Title), Some("Please enter a title"));
}

#[test]
fn issue_validate_treats_whitespace_as_missing() {
    let form = IssueForm::with_values(IssueFormInput { title: "   ".into(), ..pothole() });
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.fields(), &[Field::Title]);
    assert!(errors.message(Field::Description).is_none());
}

#[test]
fn issue_validate_has_no_cross_field_rules() {
    // Any representative is accepted for any user.
    let form = IssueForm::with_values(IssueFormInput { representative_id: "somewhere-else".into(), ..pothole() });
    assert!(form.validate().is_ok());
}

#[tokio::test]
async fn issue_submit_sends_exact_body_then_clears() {
    let api = MockApi::seeded();
    let mut notices = Notifications::default();
    let mut form = IssueForm::with_values(pothole());

    let status = form.submit(&api, &mut notices).await;

    assert_eq!(status, FormStatus::Cleared);
    assert_eq!(
        api.issues.lock().unwrap().as_slice(),
        &[NewIssue {
            title: "Pothole".into(),
            description: "Large pothole on Main St".into(),
            user_id: "u1".into(),
            representative_id: "r2".into(),
        }]
    );
    assert_eq!(form.values, IssueFormInput::default());
    assert_eq!(notices.len(), 1);
    assert_eq!(notices.count(NoticeLevel::Success), 1);
    assert_eq!(notices.iter().next().map(|n| n.message.as_str()), Some(ISSUE_SUBMITTED));
}

#[tokio::test]
async fn issue_submit_with_missing_field_sends_nothing() {
    let api = MockApi::seeded();
    let mut notices = Notifications::default();
    let mut form = IssueForm::with_values(IssueFormInput { user_id: String::new(), ..pothole() });

    let status = form.submit(&api, &mut notices).await;

    assert_eq!(status, FormStatus::Idle);
    assert!(api.issues.lock().unwrap().is_empty());
    assert!(notices.is_empty());
    assert_eq!(form.errors.fields(), &[Field::User]);
    assert_eq!(form.values.title, "Pothole");
}

#[tokio::test]
async fn issue_submit_failure_keeps_values_and_notifies_once() {
    let api = MockApi::seeded();
    api.set_fail_creates(true);
    let mut notices = Notifications::default();
    let mut form = IssueForm::with_values(pothole());

    let status = form.submit(&api, &mut notices).await;

    assert_eq!(status, FormStatus::Failed);
    assert_eq!(form.values, pothole());
    assert_eq!(notices.len(), 1);
    let notice = notices.iter().next().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, ISSUE_FAILED);
    assert!(!notice.message.contains("500"));
}

#[tokio::test]
async fn issue_resubmit_after_failure_is_not_deduplicated() {
    let api = MockApi::seeded();
    let mut notices = Notifications::default();
    let mut form = IssueForm::with_values(pothole());
    api.set_fail_creates(true);
    form.submit(&api, &mut notices).await;
    api.set_fail_creates(false);
    form.submit(&api, &mut notices).await;

    assert_eq!(api.issues.lock().unwrap().len(), 2);
    assert_eq!(form.status, FormStatus::Cleared);
    assert!(form.errors.is_empty());
}

// =========================================================================
// Post form
// =========================================================================

#[test]
fn post_validate_allows_empty_content_and_image() {
    let form = PostForm::with_values(PostFormInput { user_id: "u1".into(), ..PostFormInput::default() });
    assert_eq!(form.validate().unwrap(), NewPost { content: None, image_url: None, user_id: "u1".into() });
}

#[test]
fn post_validate_requires_user() {
    let form = PostForm::with_values(PostFormInput { content: "Hello".into(), ..PostFormInput::default() });
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.fields(), &[Field::User]);
    assert_eq!(errors.message(Field::User), Some("Please select your name"));
}

#[test]
fn post_validate_does_not_check_url_shape() {
    let form = PostForm::with_values(PostFormInput {
        content: String::new(),
        image_url: "not a url".into(),
        user_id: "u2".into(),
    });
    assert_eq!(form.validate().unwrap().image_url.as_deref(), Some("not a url"));
}

#[tokio::test]
async fn post_submit_success_clears_and_notifies() {
    let api = MockApi::seeded();
    let mut notices = Notifications::default();
    let mut form = PostForm::with_values(PostFormInput {
        content: "Park cleanup done".into(),
        image_url: "https://img.test/park.png".into(),
        user_id: "u2".into(),
    });

    assert_eq!(form.submit(&api, &mut notices).await, FormStatus::Cleared);
    assert_eq!(api.created_posts.lock().unwrap().len(), 1);
    assert_eq!(form.values, PostFormInput::default());
    assert_eq!(notices.count(NoticeLevel::Success), 1);
    // The created post is not echoed into the mock's collection.
    assert_eq!(api.posts.len(), 1);
}

#[tokio::test]
async fn post_submit_failure_notifies_once() {
    let api = MockApi::seeded();
    api.set_fail_creates(true);
    let mut notices = Notifications::default();
    let mut form = PostForm::with_values(PostFormInput { user_id: "u1".into(), ..PostFormInput::default() });

    assert_eq!(form.submit(&api, &mut notices).await, FormStatus::Failed);
    assert_eq!(form.values.user_id, "u1");
    assert_eq!(notices.len(), 1);
    assert_eq!(notices.iter().next().map(|n| n.message.as_str()), Some(POST_FAILED));
}

#[test]
fn form_input_deserializes_from_urlencoded_names() {
    let input: IssueFormInput = serde_json::from_value(serde_json::json!({
        "title": "Pothole",
        "userId": "u1",
        "representativeId": "r2"
    }))
    .unwrap();
    assert_eq!(input.user_id, "u1");
    assert_eq!(input.representative_id, "r2");
    assert!(input.description.is_empty());
}
