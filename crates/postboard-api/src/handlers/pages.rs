//! HTML pages
//!
//! Both pages are compiled into the binary.

use axum::response::Html;

use crate::extractors::OptionalSessionUser;

const LANDING_PAGE: &str = include_str!("../../templates/index.html");
const APP_PAGE: &str = include_str!("../../templates/app.html");

/// Placeholder in the app page replaced by the escaped username
const USERNAME_SLOT: &str = "{{username}}";

/// Landing page when signed out, the app page when signed in
///
/// GET /
pub async fn index(OptionalSessionUser(user): OptionalSessionUser) -> Html<String> {
    match user {
        Some(user) => Html(render_app_page(&user.session.username)),
        None => Html(LANDING_PAGE.to_string()),
    }
}

fn render_app_page(username: &str) -> String {
    APP_PAGE.replace(USERNAME_SLOT, &escape_html(username))
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    html_escape::encode_safe(input).into_owned()
}
