use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(body.to_string())
        .unwrap()
}

// --- info / config / accounts ---

#[tokio::test]
async fn info_returns_program_envelope() {
    let resp = app()
        .oneshot(get_request("/api/v3/public/info"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], 200);
    assert_eq!(body["msg"], "success");
    assert_eq!(body["data"]["name"], "PanIndex");
    assert_eq!(body["data"]["commit_sha"], "0f3d1a2");
}

#[tokio::test]
async fn config_has_full_field_set() {
    let resp = app()
        .oneshot(get_request("/api/v3/public/config.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["theme"], "mdui");
    assert_eq!(body["data"]["s_column"], "file_name");
    assert_eq!(body["data"]["s_order"], "asc");
    assert_eq!(body["data"]["site_name"], "PanIndex Mock");
}

#[tokio::test]
async fn account_list_returns_backends() {
    let resp = app()
        .oneshot(get_request("/api/v3/public/account/list"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let accounts = body["data"].as_array().unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[1]["mode"], "s3");
}

// --- index ---

#[tokio::test]
async fn index_lists_root_folders() {
    let resp = app()
        .oneshot(form_request("/api/v3/public/index", "path=%2F"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let content = body["data"]["content"].as_array().unwrap();
    assert_eq!(content.len(), 3);
    assert!(content.iter().all(|f| f["is_folder"] == true));
    assert_eq!(body["data"]["total_count"], 3);
}

#[tokio::test]
async fn index_paginates() {
    let resp = app()
        .oneshot(form_request(
            "/api/v3/public/index",
            "path=%2Fdocs&page_no=2&page_size=1",
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["data"]["pages"], 2);
    assert_eq!(body["data"]["page_no"], 2);
    let content = body["data"]["content"].as_array().unwrap();
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["file_name"], "readme.md");
    assert_eq!(body["data"]["next_file"], "");
}

#[tokio::test]
async fn index_sorts_descending() {
    let resp = app()
        .oneshot(form_request(
            "/api/v3/public/index",
            "path=%2Fdocs&sort_by=file_name&order=desc",
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    let content = body["data"]["content"].as_array().unwrap();
    assert_eq!(content[0]["file_name"], "readme.md");
    assert_eq!(content[1]["file_name"], "a b.txt");
}

// --- raw ---

#[tokio::test]
async fn raw_returns_file_content() {
    let resp = app()
        .oneshot(get_request("/api/v3/public/raw/%2Fdocs%2Fa%20b.txt"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"hello world");
}

#[tokio::test]
async fn raw_unknown_path_is_404() {
    let resp = app()
        .oneshot(get_request("/api/v3/public/raw/%2Fnope.txt"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- short links ---

#[tokio::test]
async fn short_link_roundtrip() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request(
            "/api/v3/public/shortInfo",
            "prefix=http%3A%2F%2Fh%2Fs%2F&path=%2Fdocs%2Freadme.md&isFile=true",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let code = body["data"]["short_code"].as_str().unwrap().to_string();
    assert_eq!(
        body["data"]["short_url"],
        format!("http://h/s/{code}")
    );

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request(
            "/api/v3/public/short",
            &format!("short_code={code}"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], 200);
    assert_eq!(body["data"], "/docs/readme.md");
}

#[tokio::test]
async fn short_unknown_code_fails_in_envelope() {
    let resp = app()
        .oneshot(form_request("/api/v3/public/short", "short_code=missing"))
        .await
        .unwrap();

    // Transport-level success, application-level failure.
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], 500);
    assert_eq!(body["data"], Value::Null);
}

// --- search / files ---

#[tokio::test]
async fn search_matches_file_name_substring() {
    let resp = app()
        .oneshot(form_request("/api/v3/public/search", "key=trailer"))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["data"]["total_count"], 1);
    assert_eq!(body["data"]["content"][0]["path"], "/movies/trailer.mp4");
}

#[tokio::test]
async fn files_filters_by_view_type() {
    let resp = app()
        .oneshot(form_request(
            "/api/v3/public/files",
            "path=%2F&viewType=video",
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["file_name"], "trailer.mp4");
}

#[tokio::test]
async fn files_scopes_to_requested_path() {
    let resp = app()
        .oneshot(form_request(
            "/api/v3/public/files",
            "path=%2Fdocs&viewType=video",
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}
