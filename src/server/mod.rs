//! Local page server
//!
//! Hosts the feed, single-post and editor views, the like action and the
//! visitor simulation timer. Metric changes are pushed to every open page
//! over a WebSocket so the bound counters refresh without a reload.

use anyhow::Result;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::editor::{self, EditorError, PostForm};
use crate::helpers::Helpers;
use crate::store::Metrics;
use crate::templates::{editor::editor_page, feed::feed_page, post::post_page, post::PostView};
use crate::Blog;

/// What caused a metrics change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    /// Sent once when a page connects
    Snapshot,
    Tick,
    Like,
}

/// Message pushed to connected pages
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricsUpdate {
    pub kind: UpdateKind,
    pub metrics: Metrics,
}

/// Server state
pub struct ServerState {
    blog: Blog,
    helpers: Helpers,
    metrics_tx: broadcast::Sender<MetricsUpdate>,
    /// Serializes every read-modify-write on the store
    write_lock: Mutex<()>,
}

impl ServerState {
    pub fn new(blog: Blog) -> Arc<Self> {
        let (metrics_tx, _) = broadcast::channel::<MetricsUpdate>(16);
        Arc::new(Self {
            helpers: blog.helpers(),
            blog,
            metrics_tx,
            write_lock: Mutex::new(()),
        })
    }

    /// Subscribe to metric updates
    pub fn subscribe(&self) -> broadcast::Receiver<MetricsUpdate> {
        self.metrics_tx.subscribe()
    }

    fn publish(&self, kind: UpdateKind, metrics: Metrics) {
        // No receivers simply means no page is open
        let _ = self.metrics_tx.send(MetricsUpdate { kind, metrics });
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PostQuery {
    pub id: Option<String>,
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(feed_handler))
        .route("/index.html", get(feed_handler))
        .route("/post.html", get(post_handler))
        .route("/editor.html", get(editor_handler).post(submit_handler))
        .route("/api/metrics", get(metrics_handler))
        .route("/api/like", post(like_handler))
        .route("/__metrics", get(metrics_socket_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the page server and the visitor timer
pub async fn start(blog: &Blog, ip: &str, port: u16, open: bool) -> Result<()> {
    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let state = ServerState::new(blog.clone());
    let timer = spawn_visitor_timer(state.clone());
    let app = router(state);

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let served = axum::serve(listener, app).await;
    timer.abort();
    served?;

    Ok(())
}

/// Run one visitor tick and notify open pages
pub async fn visitor_tick<R: Rng + ?Sized>(state: &ServerState, rng: &mut R) -> Result<Metrics> {
    let _guard = state.write_lock.lock().await;
    let metrics = state.blog.metrics().tick(rng)?;
    state.publish(UpdateKind::Tick, metrics);
    Ok(metrics)
}

/// Drive [`visitor_tick`] for the lifetime of the server
pub fn spawn_visitor_timer(state: Arc<ServerState>) -> JoinHandle<()> {
    let period = state.blog.config.visitor_interval();
    tracing::info!("Simulating visitors every {:?}", period);

    tokio::spawn(async move {
        let mut rng = StdRng::from_entropy();
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            if let Err(e) = visitor_tick(&state, &mut rng).await {
                tracing::error!("Visitor tick failed: {}", e);
            }
        }
    })
}

fn internal_error(e: impl Display) -> Response {
    tracing::error!("Request failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}

/// Feed page
async fn feed_handler(State(state): State<Arc<ServerState>>) -> Response {
    let page = state.blog.posts().list().and_then(|list| {
        let metrics = state.blog.metrics().load()?;
        Ok(feed_page(&state.helpers, &list, &metrics))
    });

    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => internal_error(e),
    }
}

/// Single-post page, selected by the `id` query parameter
async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<PostQuery>,
) -> Response {
    let page = PostView::resolve(&state.blog.posts(), query.id.as_deref()).and_then(|view| {
        let metrics = state.blog.metrics().load()?;
        Ok((view.is_found(), post_page(&state.helpers, &view, &metrics)))
    });

    match page {
        Ok((true, html)) => Html(html).into_response(),
        Ok((false, html)) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => internal_error(e),
    }
}

/// Empty submission form
async fn editor_handler(State(state): State<Arc<ServerState>>) -> Response {
    match state.blog.metrics().load() {
        Ok(metrics) => Html(editor_page(
            &state.helpers,
            &PostForm::default(),
            None,
            &metrics,
        ))
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// Form submission: redirect to the feed, or re-render with a notice
async fn submit_handler(
    State(state): State<Arc<ServerState>>,
    Form(form): Form<PostForm>,
) -> Response {
    let result = {
        let _guard = state.write_lock.lock().await;
        editor::submit(&state.blog.posts(), form.clone())
    };

    match result {
        Ok(post) => {
            tracing::info!("Published {:?}", post.title);
            Redirect::to(&state.helpers.url_for("index.html")).into_response()
        }
        Err(EditorError::MissingFields) => match state.blog.metrics().load() {
            Ok(metrics) => {
                let notice = EditorError::MissingFields.to_string();
                let html = editor_page(&state.helpers, &form, Some(&notice), &metrics);
                (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
            }
            Err(e) => internal_error(e),
        },
        Err(e) => internal_error(e),
    }
}

/// Current metrics
async fn metrics_handler(State(state): State<Arc<ServerState>>) -> Response {
    match state.blog.metrics().load() {
        Ok(metrics) => Json(metrics).into_response(),
        Err(e) => internal_error(e),
    }
}

/// Like action
async fn like_handler(State(state): State<Arc<ServerState>>) -> Response {
    let result = {
        let _guard = state.write_lock.lock().await;
        state.blog.metrics().like()
    };

    match result {
        Ok(metrics) => {
            state.publish(UpdateKind::Like, metrics);
            Json(metrics).into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// WebSocket handler for live metrics
async fn metrics_socket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let updates = state.subscribe();
    let snapshot = state.blog.metrics().load().ok();
    let feed = MetricsFeed::new(snapshot, updates);
    ws.on_upgrade(move |socket| handle_metrics_socket(socket, feed))
}

/// Updates owed to one connected page: a snapshot first, then published
/// updates. A feed that falls behind the channel jumps to the newest one.
pub struct MetricsFeed {
    snapshot: Option<Metrics>,
    updates: broadcast::Receiver<MetricsUpdate>,
}

impl MetricsFeed {
    pub fn new(snapshot: Option<Metrics>, updates: broadcast::Receiver<MetricsUpdate>) -> Self {
        Self { snapshot, updates }
    }

    /// Next update to send, or `None` once the channel is closed
    pub async fn next(&mut self) -> Option<MetricsUpdate> {
        if let Some(metrics) = self.snapshot.take() {
            return Some(MetricsUpdate {
                kind: UpdateKind::Snapshot,
                metrics,
            });
        }

        loop {
            match self.updates.recv().await {
                Ok(update) => return Some(update),
                Err(RecvError::Closed) => return None,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!("Metrics client lagged by {} updates", skipped);
                    if let Some(latest) = self.drain_to_latest() {
                        return Some(latest);
                    }
                }
            }
        }
    }

    /// Consume everything buffered and keep only the last update
    fn drain_to_latest(&mut self) -> Option<MetricsUpdate> {
        let mut latest = None;
        loop {
            match self.updates.try_recv() {
                Ok(update) => latest = Some(update),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return latest,
            }
        }
    }
}

fn encode_update(update: &MetricsUpdate) -> Option<Message> {
    match serde_json::to_string(update) {
        Ok(text) => Some(Message::Text(text)),
        Err(e) => {
            tracing::warn!("Failed to encode metrics update: {}", e);
            None
        }
    }
}

/// Forward metric updates to one connected page
async fn handle_metrics_socket(mut socket: WebSocket, mut feed: MetricsFeed) {
    tracing::debug!("Metrics client connected");

    loop {
        tokio::select! {
            update = feed.next() => {
                let Some(update) = update else { break };
                let Some(msg) = encode_update(&update) else { continue };
                if socket.send(msg).await.is_err() {
                    break;
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::debug!("Metrics client disconnected");
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
