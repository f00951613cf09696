use super::*;

use crate::api::test_helpers::{MockApi, representative};
use crate::api::types::User;
use crate::forms::{FieldErrors, IssueFormInput, PostFormInput};

fn seeded_model(tab: Tab) -> PageModel {
    let api = MockApi::seeded();
    PageModel {
        tab,
        collections: Collections {
            representatives: api.representatives.clone(),
            locations: api.locations.clone(),
            users: api.users.clone(),
            posts: api.posts.clone(),
            announcements: api.announcements.clone(),
        },
        ..PageModel::default()
    }
}

#[test]
fn page_has_title_and_all_tabs() {
    let html = render_page(seeded_model(Tab::Representatives));
    assert!(html.contains(PAGE_TITLE));
    for tab in Tab::ALL {
        assert!(html.contains(tab.label()), "missing tab {}", tab.label());
        assert!(html.contains(&format!("/?tab={}", tab.key())));
    }
    assert!(html.contains("tabs__tab--active"));
}

#[test]
fn representatives_panel_shows_cards() {
    let html = render_page(seeded_model(Tab::Representatives));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("Roads and transit"));
    assert!(html.contains("Springfield"));
    assert!(html.contains("Grace Hopper"));
    assert!(html.contains("card-grid"));
}

#[test]
fn representative_without_location_omits_location_line() {
    let mut model = PageModel { tab: Tab::Representatives, ..PageModel::default() };
    model.collections.representatives = vec![representative("r9", "Solo Rep", "Everything", None)];

    let html = render_page(model);

    assert!(html.contains("Solo Rep"));
    assert!(html.contains("Responsibilities:"));
    assert!(!html.contains("Location:"));
    assert!(!html.contains("card__location"));
}

#[test]
fn issue_panel_lists_users_and_representatives() {
    let html = render_page(seeded_model(Tab::RaiseIssue));
    assert!(html.contains(r#"action="/issues""#));
    assert!(html.contains("Select your name"));
    assert!(html.contains("Select representative"));
    assert!(html.contains(r#"value="u2""#));
    assert!(html.contains(r#"value="r2""#));
    assert!(html.contains("Submit Issue"));
    assert!(!html.contains("Ada Lovelace</h3>"));
}

#[test]
fn issue_panel_shows_validation_messages_and_keeps_values() {
    let mut model = seeded_model(Tab::RaiseIssue);
    model.issue.values = IssueFormInput { title: "Streetlight out".into(), ..IssueFormInput::default() };
    model.issue.errors = IssueForm::with_values(model.issue.values.clone())
        .validate()
        .unwrap_err();

    let html = render_page(model);

    assert!(html.contains("Streetlight out"));
    assert!(!html.contains("Please enter a title"));
    assert!(html.contains("Please enter a description"));
    assert!(html.contains("Please select your name"));
    assert!(html.contains("Please select a representative"));
}

#[test]
fn clean_issue_panel_has_no_validation_messages() {
    let mut model = seeded_model(Tab::RaiseIssue);
    model.issue.errors = FieldErrors::default();
    let html = render_page(model);
    assert!(!html.contains("form__error"));
}

#[test]
fn post_panel_renders_form_and_cards() {
    let html = render_page(seeded_model(Tab::PostActivity));
    assert!(html.contains(r#"action="/posts""#));
    assert!(html.contains("Post by Dee"));
    assert!(html.contains("Cleanup on Saturday"));
    assert!(html.contains("https://img.test/cleanup.png"));
    assert!(html.contains("Submit Post"));
}

#[test]
fn post_without_image_renders_no_img() {
    let mut model = PageModel { tab: Tab::PostActivity, ..PageModel::default() };
    model.collections.posts = vec![Post {
        id: "p7".into(),
        content: Some("Text only".into()),
        image_url: None,
        user: Some(User { id: "u1".into(), name: "Dee".into() }),
    }];

    let html = render_page(model);

    assert!(html.contains("Text only"));
    assert!(!html.contains("<img"));
}

#[test]
fn post_form_keeps_entered_values() {
    let mut model = seeded_model(Tab::PostActivity);
    model.post.values = PostFormInput { content: "Draft".into(), image_url: "pic.png".into(), user_id: String::new() };
    let html = render_page(model);
    assert!(html.contains("Draft"));
    assert!(html.contains("pic.png"));
}

#[test]
fn announcements_panel_shows_author() {
    let html = render_page(seeded_model(Tab::Announcements));
    assert!(html.contains("Road works"));
    assert!(html.contains("Main St closed Monday"));
    assert!(html.contains("By:"));
    assert!(html.contains("Ada Lovelace"));
}

#[test]
fn notifications_render_as_toasts() {
    let mut model = seeded_model(Tab::RaiseIssue);
    model.notifications.success("Issue submitted successfully");
    let html = render_page(model);
    assert!(html.contains("toast--success"));
    assert!(html.contains("Issue submitted successfully"));
    assert!(!html.contains("toast--error"));
}

#[test]
fn user_content_is_escaped() {
    let mut model = PageModel { tab: Tab::Representatives, ..PageModel::default() };
    model.collections.representatives = vec![representative("r1", "<script>alert(1)</script>", "x", None)];
    let html = render_page(model);
    assert!(!html.contains("<script>alert(1)</script>"));
}

#[test]
fn no_toast_container_without_notifications() {
    let html = render_page(seeded_model(Tab::Representatives));
    assert!(!html.contains(r#"class="toasts""#));
}
