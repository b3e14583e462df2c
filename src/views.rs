use handlebars::Handlebars;
use serde_json::{Value, json};
use std::sync::LazyLock;

use crate::errors::ConfirmError;
use crate::invitation::PageState;

static HANDLEBARS: LazyLock<Handlebars<'static>> = LazyLock::new(|| {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars
});

const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}}</title>
<style>
body { margin: 0; font-family: system-ui, sans-serif; }
.page { display: flex; align-items: center; justify-content: center; min-height: 100vh; }
.card { text-align: center; max-width: 42rem; padding: 1.5rem; }
.spinner { width: 2.5rem; height: 2.5rem; margin: 0 auto; border-radius: 50%; border-bottom: 2px solid #111; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.error { color: #ef4444; }
.team { list-style: none; padding: 0; text-align: left; }
.team li { padding: 0.75rem; margin-bottom: 1rem; border: 1px solid #ddd; border-radius: 0.5rem; }
.member-name { font-weight: 600; }
.member-role { font-size: 0.875rem; color: #2563eb; }
.member-email { font-size: 0.75rem; color: #6b7280; }
.app-link { display: inline-block; margin-top: 1rem; padding: 0.5rem 1rem; border-radius: 0.5rem; background: #3b82f6; color: #fff; text-decoration: none; }
</style>
</head>
<body>
<div class="page">
<div class="card">
{{{body}}}
</div>
</div>
</body>
</html>
"#;

const LOADING: &str = r#"<h1>Confirming your invitation...</h1>
<div class="spinner" role="status" aria-label="Loading"></div>"#;

const ERROR: &str = r#"<h1>Error</h1>
<p class="error">{{message}}</p>"#;

const SUCCESS: &str = r#"<h1>Invitation Confirmed!</h1>
<h2>Project: {{project.projectName}}</h2>
<h3>Team Members:</h3>
<ul class="team">
{{#each project.userRoles}}
<li data-user-role-id="{{id}}">
<div class="member-name">{{user.fullname}}</div>
<div class="member-role">{{role.roleName}}</div>
<div class="member-email">{{user.email}}</div>
</li>
{{/each}}
</ul>
<a class="app-link" href="{{deep_link}}">Open in Mobile App</a>"#;

/// Render the full HTML document for a page state.
///
/// Every interpolated value is HTML-escaped; only the layout's `body` slot
/// takes pre-rendered markup.
pub fn render_page(state: &PageState, deep_link: &str) -> Result<String, ConfirmError> {
    let (title, body) = match state {
        PageState::Loading => ("Confirming invitation", render(LOADING, &json!({}))?),
        PageState::Error(message) => ("Error", render(ERROR, &json!({ "message": message }))?),
        PageState::Success(project) => (
            "Invitation confirmed",
            render(
                SUCCESS,
                &json!({ "project": project, "deep_link": deep_link }),
            )?,
        ),
    };

    render(LAYOUT, &json!({ "title": title, "body": body }))
}

fn render(template: &str, data: &Value) -> Result<String, ConfirmError> {
    Ok(HANDLEBARS.render_template(template, data)?)
}
