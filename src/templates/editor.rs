//! Post submission form

use crate::editor::PostForm;
use crate::helpers::{html_escape, Helpers};
use crate::store::Metrics;

use super::layout;

fn text_input(name: &str, label: &str, value: &str, required: bool) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input id="{name}" name="{name}" type="text" value="{value}"{required}>"#,
        name = name,
        label = label,
        value = html_escape(value),
        required = if required { " required" } else { "" },
    )
}

fn text_area(name: &str, label: &str, value: &str, rows: usize, required: bool) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<textarea id="{name}" name="{name}" rows="{rows}"{required}>{value}</textarea>"#,
        name = name,
        label = label,
        rows = rows,
        value = html_escape(value),
        required = if required { " required" } else { "" },
    )
}

/// Render the form, pre-filled with `form`; `notice` raises a blocking alert
pub fn render_editor(helpers: &Helpers, form: &PostForm, notice: Option<&str>) -> String {
    let alert = notice
        .map(|n| {
            format!(
                "<script>alert({});</script>\n<p class=\"notice\" role=\"alert\">{}</p>\n",
                serde_json::Value::String(n.to_string()),
                html_escape(n)
            )
        })
        .unwrap_or_default();

    format!(
        r#"{alert}<form id="post-form" method="post" action="{action}">
{title}
{excerpt}
{content}
{publisher}
{image}
<p><button type="submit">Publish</button></p>
</form>"#,
        alert = alert,
        action = helpers.url_for("editor.html"),
        title = text_input("title", "Title", &form.title, true),
        excerpt = text_area("excerpt", "Excerpt", &form.excerpt, 3, false),
        content = text_area("content", "Content", &form.content, 12, true),
        publisher = text_input("publisher", "Publisher", &form.publisher, false),
        image = text_input("cover-image", "Cover image URL", &form.image, false),
    )
}

/// Full editor page
pub fn editor_page(
    helpers: &Helpers,
    form: &PostForm,
    notice: Option<&str>,
    metrics: &Metrics,
) -> String {
    let body = format!("<h1>Write a post</h1>\n{}", render_editor(helpers, form, notice));
    layout(helpers, "Write a post", &body, metrics)
}
