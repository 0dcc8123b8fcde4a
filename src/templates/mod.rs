//! Page templates
//!
//! Views are produced by plain string templating. Each view module renders
//! its body fragment; [`layout`] wraps a fragment into a full page with the
//! site header, the metric counters and the live-update script.

pub mod editor;
pub mod feed;
pub mod post;

use crate::helpers::{html_escape, link_to, Helpers};
use crate::store::Metrics;

/// Element ids bound to the visitor counter
pub const VISITOR_ELEMENT_IDS: [&str; 2] = ["visitor-count", "hero-visitor-count"];

/// Element id bound to the likes counter
pub const LIKES_ELEMENT_ID: &str = "total-likes";

const STYLE: &str = r#"<style>
body { font-family: Georgia, serif; margin: 0; color: #333; background: #faf7f5; }
header.site, footer.site { background: #4a0e1c; color: #fff; padding: 1rem 2rem; display: flex; gap: 2rem; align-items: center; }
header.site a, footer.site a { color: #f4c95d; text-decoration: none; }
main { max-width: 1100px; margin: 2rem auto; padding: 0 1rem; }
#blog-feed { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; }
.card { background: #fff; border-radius: 1rem; overflow: hidden; box-shadow: 0 4px 12px rgba(0,0,0,.08); }
.card img { width: 100%; height: 12rem; object-fit: cover; }
.card .body { padding: 1.5rem; }
.meta { font-size: .8rem; color: #777; }
.cover { width: 100%; max-height: 24rem; object-fit: cover; border-radius: 1rem; }
.not-found { text-align: center; padding: 5rem 0; }
.likes { transition: transform .2s, color .2s; display: inline-block; }
.likes.pulse { transform: scale(1.1); color: #f4c95d; }
form label { display: block; margin-top: 1rem; font-weight: bold; }
form input, form textarea { width: 100%; padding: .5rem; }
</style>"#;

/// Live counter updates; `__PULSE_MS__` is replaced at render time.
/// Only this page's own like response pulses the counter.
const METRICS_SCRIPT: &str = r#"<script>
(function() {
    var pulseMs = __PULSE_MS__;
    function show(metrics, pulse) {
        ['visitor-count', 'hero-visitor-count'].forEach(function(id) {
            var el = document.getElementById(id);
            if (el) el.innerText = metrics.visitors.toLocaleString('en-US');
        });
        var likes = document.getElementById('total-likes');
        if (likes) {
            likes.innerText = metrics.likes.toLocaleString('en-US');
            if (pulse) {
                likes.classList.add('pulse');
                setTimeout(function() { likes.classList.remove('pulse'); }, pulseMs);
            }
        }
    }
    function connect() {
        var proto = location.protocol === 'https:' ? 'wss://' : 'ws://';
        var ws = new WebSocket(proto + location.host + '/__metrics');
        ws.onmessage = function(msg) {
            show(JSON.parse(msg.data).metrics, false);
        };
        ws.onclose = function() { setTimeout(connect, 1000); };
    }
    var button = document.getElementById('like-button');
    if (button) {
        button.addEventListener('click', function() {
            fetch('/api/like', { method: 'POST' })
                .then(function(r) { return r.json(); })
                .then(function(metrics) { show(metrics, true); });
        });
    }
    connect();
})();
</script>"#;

/// Wrap a rendered fragment into a complete page
pub fn layout(helpers: &Helpers, title: &str, body: &str, metrics: &Metrics) -> String {
    let config = helpers.config();
    let page_title = if title.is_empty() {
        html_escape(&config.title)
    } else {
        format!("{} | {}", html_escape(title), html_escape(&config.title))
    };
    let script = METRICS_SCRIPT.replace("__PULSE_MS__", &config.like_pulse_ms.to_string());

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{page_title}</title>
{style}
</head>
<body>
<header class="site">
    <strong>{home}</strong>
    <nav>{write}</nav>
    <span class="meta">Live readers: <span id="hero-visitor-count">{visitors}</span></span>
</header>
<main>
{body}
</main>
<footer class="site">
    <span>Visitors: <span id="visitor-count">{visitors}</span></span>
    <button id="like-button" type="button">&#10084; <span id="total-likes" class="likes">{likes}</span></button>
    <span>&copy; {author}</span>
</footer>
{script}
</body>
</html>
"#,
        lang = html_escape(&config.language),
        page_title = page_title,
        style = STYLE,
        home = link_to(&helpers.url_for("index.html"), &html_escape(&config.title), None),
        write = link_to(&helpers.url_for("editor.html"), "Write a post", None),
        visitors = helpers.count(metrics.visitors),
        likes = helpers.count(metrics.likes),
        body = body,
        author = html_escape(&config.author),
        script = script,
    )
}
