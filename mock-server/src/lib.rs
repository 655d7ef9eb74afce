//! Mock PanIndex server: the nine public endpoints over a fixed file fixture.
//!
//! DTOs are defined independently from the client core; the core's
//! integration tests catch any schema drift between the two crates. Short
//! links are the only mutable state; everything else is served from the
//! fixture built in `app()`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileItem {
    pub file_name: String,
    pub file_size: u64,
    pub size_fmt: String,
    pub file_type: String,
    pub is_folder: bool,
    pub last_op_time: String,
    pub path: String,
    pub thumbnail: String,
    pub view_type: String,
    pub download_url: Option<String>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub path: String,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Deserialize)]
pub struct ShortInfoQuery {
    pub prefix: String,
    pub path: String,
    #[serde(rename = "isFile")]
    pub is_file: bool,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub key: String,
}

#[derive(Deserialize)]
pub struct ShortQuery {
    pub short_code: String,
}

#[derive(Deserialize)]
pub struct FilterQuery {
    pub path: String,
    #[serde(rename = "viewType")]
    pub view_type: String,
    #[serde(rename = "sortColumn")]
    pub sort_column: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

pub struct AppState {
    files: Vec<FileItem>,
    contents: HashMap<String, String>,
    short_links: RwLock<HashMap<String, String>>,
}

pub type SharedState = Arc<AppState>;

pub fn app() -> Router {
    let state: SharedState = Arc::new(AppState {
        files: fixture_files(),
        contents: fixture_contents(),
        short_links: RwLock::new(HashMap::new()),
    });
    Router::new()
        .route("/api/v3/public/info", get(program_info))
        .route("/api/v3/public/config.json", get(site_config))
        .route("/api/v3/public/index", post(list_directory))
        .route("/api/v3/public/raw/{path}", get(raw_content))
        .route("/api/v3/public/account/list", get(account_list))
        .route("/api/v3/public/shortInfo", post(create_short_link))
        .route("/api/v3/public/search", post(search))
        .route("/api/v3/public/short", post(resolve_short_code))
        .route("/api/v3/public/files", post(filter_files))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn ok(data: Value) -> Json<Value> {
    Json(json!({ "data": data, "msg": "success", "status": 200 }))
}

fn folder(parent_dir: &str, name: &str, last_op_time: &str) -> FileItem {
    FileItem {
        file_name: name.to_string(),
        file_size: 0,
        size_fmt: "-".to_string(),
        file_type: String::new(),
        is_folder: true,
        last_op_time: last_op_time.to_string(),
        path: join(parent_dir, name),
        thumbnail: String::new(),
        view_type: String::new(),
        download_url: None,
    }
}

fn file(
    parent_dir: &str,
    name: &str,
    size: u64,
    file_type: &str,
    view_type: &str,
    last_op_time: &str,
) -> FileItem {
    let path = join(parent_dir, name);
    FileItem {
        file_name: name.to_string(),
        file_size: size,
        size_fmt: size_fmt(size),
        file_type: file_type.to_string(),
        is_folder: false,
        last_op_time: last_op_time.to_string(),
        path: path.clone(),
        thumbnail: String::new(),
        view_type: view_type.to_string(),
        download_url: Some(format!("/d{path}")),
    }
}

fn join(parent_dir: &str, name: &str) -> String {
    if parent_dir == "/" {
        format!("/{name}")
    } else {
        format!("{parent_dir}/{name}")
    }
}

fn size_fmt(size: u64) -> String {
    if size >= 1 << 20 {
        format!("{:.1} MB", size as f64 / f64::from(1u32 << 20))
    } else if size >= 1 << 10 {
        format!("{:.1} KB", size as f64 / f64::from(1u32 << 10))
    } else {
        format!("{size} B")
    }
}

fn fixture_files() -> Vec<FileItem> {
    vec![
        folder("/", "docs", "2024-05-01 09:00:00"),
        folder("/", "movies", "2024-05-02 09:00:00"),
        folder("/", "music", "2024-05-03 09:00:00"),
        file("/docs", "a b.txt", 11, "txt", "text", "2024-05-01 10:00:00"),
        file("/docs", "readme.md", 15, "md", "text", "2024-05-01 11:00:00"),
        file("/movies", "trailer.mp4", 7 << 20, "mp4", "video", "2024-05-02 10:00:00"),
        file("/movies", "poster.jpg", 300 << 10, "jpg", "image", "2024-05-02 11:00:00"),
        file("/music", "track.flac", 24 << 20, "flac", "audio", "2024-05-03 10:00:00"),
    ]
}

fn fixture_contents() -> HashMap<String, String> {
    HashMap::from([
        ("/docs/a b.txt".to_string(), "hello world".to_string()),
        ("/docs/readme.md".to_string(), "# PanIndex mock".to_string()),
    ])
}

/// Strip a trailing slash so `/docs/` and `/docs` address the same folder.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        "/"
    }
}

fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(i) => &path[..i],
    }
}

fn within(path: &str, root: &str) -> bool {
    root == "/" || path.strip_prefix(root).is_some_and(|rest| rest.starts_with('/'))
}

fn sort_entries(entries: &mut [FileItem], column: Option<&str>, order: Option<&str>) {
    match column.unwrap_or("file_name") {
        "file_size" | "size" => entries.sort_by_key(|f| f.file_size),
        "last_op_time" | "time" => entries.sort_by(|a, b| a.last_op_time.cmp(&b.last_op_time)),
        _ => entries.sort_by(|a, b| a.file_name.cmp(&b.file_name)),
    }
    if order == Some("desc") {
        entries.reverse();
    }
}

async fn program_info() -> Json<Value> {
    ok(json!({
        "author": "px-org",
        "commit_sha": "0f3d1a2",
        "name": "PanIndex",
        "version": "3.1.3"
    }))
}

async fn site_config() -> Json<Value> {
    ok(json!({
        "account_choose": "default",
        "audio": ".mp3,.flac",
        "css": "",
        "doc": ".md,.txt",
        "favicon_url": "/static/img/favicon.ico",
        "footer": "",
        "head": "",
        "image": ".jpg,.png",
        "js": "",
        "path_prefix": "/",
        "readme": "readme.md",
        "s_column": "file_name",
        "s_order": "asc",
        "short_action": "0",
        "site_name": "PanIndex Mock",
        "theme": "mdui",
        "video": ".mp4,.mkv"
    }))
}

async fn list_directory(
    State(state): State<SharedState>,
    Form(query): Form<ListQuery>,
) -> Json<Value> {
    let path = normalize(&query.path);
    let mut entries: Vec<FileItem> = state
        .files
        .iter()
        .filter(|f| parent(&f.path) == path)
        .cloned()
        .collect();
    sort_entries(&mut entries, query.sort_by.as_deref(), query.order.as_deref());

    let page_size = query.page_size.unwrap_or(30).max(1);
    let page_no = query.page_no.unwrap_or(1).max(1);
    let total = entries.len();
    let pages = total.div_ceil(page_size as usize);
    let start = (page_no as usize - 1) * page_size as usize;
    let page: Vec<FileItem> = entries
        .iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect();
    let last_file = page.last().map(|f| f.file_name.clone()).unwrap_or_default();
    let next_file = entries
        .get(start + page.len())
        .map(|f| f.file_name.clone())
        .unwrap_or_default();

    ok(json!({
        "is_folder": true,
        "last_file": last_file,
        "next_file": next_file,
        "no_referrer": false,
        "page_no": page_no,
        "page_size": page_size,
        "pages": pages,
        "total_count": total,
        "content": page
    }))
}

async fn raw_content(
    State(state): State<SharedState>,
    Path(path): Path<String>,
) -> Result<String, StatusCode> {
    state.contents.get(&path).cloned().ok_or(StatusCode::NOT_FOUND)
}

async fn account_list() -> Json<Value> {
    ok(json!([
        { "mode": "native", "name": "local", "path": "/local" },
        { "mode": "s3", "name": "bucket", "path": "/s3" }
    ]))
}

async fn create_short_link(
    State(state): State<SharedState>,
    Form(input): Form<ShortInfoQuery>,
) -> Json<Value> {
    let code = Uuid::new_v4().simple().to_string()[..8].to_string();
    state
        .short_links
        .write()
        .await
        .insert(code.clone(), input.path.clone());
    ok(json!({
        "short_code": code,
        "short_url": format!("{}{}", input.prefix, code),
        "is_file": input.is_file
    }))
}

async fn search(State(state): State<SharedState>, Form(query): Form<SearchQuery>) -> Json<Value> {
    let matches: Vec<FileItem> = state
        .files
        .iter()
        .filter(|f| !f.is_folder && f.file_name.contains(&query.key))
        .cloned()
        .collect();
    let total = matches.len();
    let last_file = matches
        .last()
        .map(|f| f.file_name.clone())
        .unwrap_or_default();

    ok(json!({
        "is_folder": false,
        "last_file": last_file,
        "next_file": "",
        "no_referrer": false,
        "page_no": 1,
        "page_size": total.max(1),
        "pages": 1,
        "total_count": total,
        "content": matches
    }))
}

async fn resolve_short_code(
    State(state): State<SharedState>,
    Form(query): Form<ShortQuery>,
) -> Json<Value> {
    match state.short_links.read().await.get(&query.short_code) {
        Some(path) => ok(json!(path)),
        // Application-level failure: HTTP 200 with a failing envelope.
        None => Json(json!({ "data": null, "msg": "short code not found", "status": 500 })),
    }
}

async fn filter_files(
    State(state): State<SharedState>,
    Form(query): Form<FilterQuery>,
) -> Json<Value> {
    let root = normalize(&query.path);
    let mut matches: Vec<FileItem> = state
        .files
        .iter()
        .filter(|f| f.view_type == query.view_type && within(&f.path, root))
        .cloned()
        .collect();
    sort_entries(
        &mut matches,
        query.sort_column.as_deref(),
        query.sort_order.as_deref(),
    );
    ok(json!(matches))
}
