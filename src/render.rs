//! Server-side rendering of the portal page with Leptos components.
//!
//! ARCHITECTURE
//! ============
//! `PageModel` is a plain, owned snapshot of everything the page shows. The
//! components below only project it into markup; no component fetches or
//! mutates anything. Only the active tab's panel is rendered.

use leptos::prelude::*;

use crate::api::types::{Announcement, Post, Representative, User};
use crate::forms::{Field, IssueForm, PostForm};
use crate::notify::Notifications;
use crate::store::Collections;
use crate::view::Tab;

pub const PAGE_TITLE: &str = "Government Representatives Portal";

pub const STYLESHEET: &str = r"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f5f5; color: #1f1f1f; }
.portal { max-width: 80rem; margin: 0 auto; padding: 2rem; }
.portal__title { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
.tabs { display: flex; gap: 0.25rem; border-bottom: 1px solid #d9d9d9; margin-bottom: 1rem; }
.tabs__tab { padding: 0.5rem 1rem; border: 1px solid #d9d9d9; border-bottom: none; background: #fafafa; color: inherit; text-decoration: none; }
.tabs__tab--active { background: #fff; color: #1677ff; }
.card-grid { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 16px; }
.card { background: #fff; border: 1px solid #f0f0f0; border-radius: 8px; padding: 1rem; }
.card__title { margin: 0 0 0.75rem; font-size: 1rem; }
.card__image { max-width: 100%; }
.form { display: flex; flex-direction: column; gap: 1rem; max-width: 40rem; margin-bottom: 2rem; }
.form__field { display: flex; flex-direction: column; gap: 0.25rem; }
.form__error { color: #ff4d4f; margin: 0; font-size: 0.875rem; }
.btn-primary { align-self: flex-start; background: #1677ff; color: #fff; border: none; border-radius: 6px; padding: 0.5rem 1rem; }
.toasts { position: fixed; top: 1rem; left: 50%; transform: translateX(-50%); }
.toast { padding: 0.5rem 1rem; border-radius: 8px; background: #fff; margin-bottom: 0.5rem; }
.toast--success { border-left: 4px solid #52c41a; }
.toast--error { border-left: 4px solid #ff4d4f; }
";

/// Everything one render of the page needs.
#[derive(Clone, Debug, Default)]
pub struct PageModel {
    pub tab: Tab,
    pub collections: Collections,
    pub issue: IssueForm,
    pub post: PostForm,
    pub notifications: Notifications,
}

/// Render the full HTML document for `model`.
pub fn render_page(model: PageModel) -> String {
    let owner = Owner::new();
    owner.with(|| view! { <PortalDocument model=model/> }.to_html())
}

#[component]
fn PortalDocument(model: PageModel) -> impl IntoView {
    let PageModel { tab, collections, issue, post, notifications } = model;
    let Collections { representatives, users, posts, announcements, .. } = collections;

    let tab_key = tab.key();
    let panel = match tab {
        Tab::Representatives => view! { <RepresentativesPanel representatives=representatives/> }.into_any(),
        Tab::RaiseIssue => view! { <IssuePanel form=issue users=users representatives=representatives/> }.into_any(),
        Tab::PostActivity => view! { <PostPanel form=post users=users posts=posts/> }.into_any(),
        Tab::Announcements => view! { <AnnouncementsPanel announcements=announcements/> }.into_any(),
    };

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{PAGE_TITLE}</title>
                <link rel="stylesheet" href="/portal.css"/>
            </head>
            <body>
                <main class="portal">
                    <h1 class="portal__title">{PAGE_TITLE}</h1>
                    <Toasts notifications=notifications/>
                    <TabBar active=tab/>
                    <section class="tab-panel" data-tab=tab_key>
                        {panel}
                    </section>
                </main>
            </body>
        </html>
    }
}

#[component]
fn Toasts(notifications: Notifications) -> impl IntoView {
    (!notifications.is_empty()).then(|| view! {
        <div class="toasts" role="status">
            {notifications
                .into_iter()
                .map(|n| {
                    let class = n.level.css_class();
                    view! { <div class=class>{n.message}</div> }
                })
                .collect_view()}
        </div>
    })
}

#[component]
fn TabBar(active: Tab) -> impl IntoView {
    view! {
        <nav class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let class = if tab == active { "tabs__tab tabs__tab--active" } else { "tabs__tab" };
                    let href = format!("/?tab={}", tab.key());
                    view! {
                        <a class=class href=href>
                            {tab.label()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

// =============================================================================
// CARD GRIDS
// =============================================================================

#[component]
fn RepresentativesPanel(representatives: Vec<Representative>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {representatives
                .into_iter()
                .map(|rep| view! { <RepresentativeCard rep=rep/> })
                .collect_view()}
        </div>
    }
}

/// A missing location omits the line entirely.
#[component]
fn RepresentativeCard(rep: Representative) -> impl IntoView {
    let location = rep.location.map(|loc| {
        view! {
            <p class="card__location">
                <strong>"Location:"</strong>
                " "
                {loc.name}
            </p>
        }
    });

    view! {
        <article class="card">
            <h3 class="card__title">{rep.name}</h3>
            <p class="card__responsibilities">
                <strong>"Responsibilities:"</strong>
                " "
                {rep.responsibilities}
            </p>
            {location}
        </article>
    }
}

#[component]
fn PostCard(post: Post) -> impl IntoView {
    let author = post.user.map(|u| u.name).unwrap_or_default();
    // A broken image reference fails in the browser, not here.
    let image = post
        .image_url
        .filter(|url| !url.is_empty())
        .map(|url| view! { <img class="card__image" src=url alt="Post image"/> });

    view! {
        <article class="card">
            <h3 class="card__title">{format!("Post by {author}")}</h3>
            <p class="card__content">{post.content.unwrap_or_default()}</p>
            {image}
        </article>
    }
}

#[component]
fn AnnouncementsPanel(announcements: Vec<Announcement>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {announcements
                .into_iter()
                .map(|ann| {
                    let by = ann.representative.map(|r| r.name).unwrap_or_default();
                    view! {
                        <article class="card">
                            <h3 class="card__title">{ann.title}</h3>
                            <p class="card__content">{ann.content}</p>
                            <p class="card__author">
                                <strong>"By:"</strong>
                                " "
                                {by}
                            </p>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

// =============================================================================
// FORMS
// =============================================================================

#[component]
fn FieldError(message: Option<&'static str>) -> impl IntoView {
    message.map(|m| view! { <p class="form__error" role="alert">{m}</p> })
}

#[component]
fn UserSelect(users: Vec<User>, selected: String, error: Option<&'static str>) -> impl IntoView {
    let placeholder_selected = selected.is_empty();
    let name = Field::User.name();
    view! {
        <label class="form__field">
            "Your Name"
            <select name=name required=true>
                <option value="" selected=placeholder_selected>"Select your name"</option>
                {users
                    .into_iter()
                    .map(|u| {
                        let is_selected = u.id == selected;
                        view! { <option value=u.id selected=is_selected>{u.name}</option> }
                    })
                    .collect_view()}
            </select>
            <FieldError message=error/>
        </label>
    }
}

#[component]
fn IssuePanel(form: IssueForm, users: Vec<User>, representatives: Vec<Representative>) -> impl IntoView {
    let IssueForm { values, errors, .. } = form;
    let selected_rep = values.representative_id.clone();
    let rep_placeholder = selected_rep.is_empty();
    let title_error = errors.message(Field::Title);
    let description_error = errors.message(Field::Description);
    let user_error = errors.message(Field::User);
    let rep_error = errors.message(Field::Representative);

    view! {
        <form class="form" method="post" action="/issues">
            <label class="form__field">
                "Title"
                <input type="text" name="title" value=values.title required=true/>
                <FieldError message=title_error/>
            </label>
            <label class="form__field">
                "Description"
                <textarea name="description" rows="4" required=true>{values.description}</textarea>
                <FieldError message=description_error/>
            </label>
            <UserSelect users=users selected=values.user_id error=user_error/>
            <label class="form__field">
                "Responsible Representative"
                <select name="representativeId" required=true>
                    <option value="" selected=rep_placeholder>"Select representative"</option>
                    {representatives
                        .into_iter()
                        .map(|rep| {
                            let is_selected = rep.id == selected_rep;
                            view! { <option value=rep.id selected=is_selected>{rep.name}</option> }
                        })
                        .collect_view()}
                </select>
                <FieldError message=rep_error/>
            </label>
            <button class="btn-primary" type="submit">"Submit Issue"</button>
        </form>
    }
}

#[component]
fn PostPanel(form: PostForm, users: Vec<User>, posts: Vec<Post>) -> impl IntoView {
    let PostForm { values, errors, .. } = form;
    let user_error = errors.message(Field::User);

    view! {
        <form class="form" method="post" action="/posts">
            <label class="form__field">
                "Content"
                <textarea name="content" rows="4">{values.content}</textarea>
            </label>
            <label class="form__field">
                "Image URL"
                <input type="text" name="imageUrl" value=values.image_url/>
            </label>
            <UserSelect users=users selected=values.user_id error=user_error/>
            <button class="btn-primary" type="submit">"Submit Post"</button>
        </form>
        <div class="card-grid">
            {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
        </div>
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
