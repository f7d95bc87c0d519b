use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

use folio::assets::AssetStore;
use folio::config::Config;
use folio::web::{router, state::AppState};

const PROFILE: &str = r#"
[person]
name = "Ngoc Nguyen"
role = "Investment Analyst"

[home]
headline = "Turning numbers into decisions"
subline = "Equity research and financial modeling"

[[about.experiences]]
company = "Aura Capital"
timeframe = "2024 - 2025"
role = "Analyst Intern"
achievements = ["Screened 40 companies"]
images = [
  { src = "/images/about/desk.png", alt = "Desk" },
  { src = "/images/about/team.png", alt = "Team" },
]
"#;

const DOCUMENTS: &str = r#"
[[documents]]
title = "Credit Risk Report"
card_title = "Credit Risk"
href = "/documents/academic/report.pdf"
type = "pdf"
size_mb = 1.5
category = "Academic Report"

[[documents]]
title = "Valuation Model"
href = "/documents/modeling/model.xlsx"
type = "xlsx"
size_mb = 0.75
category = "Financial Modeling"
"#;

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Lays out a content tree in a temp dir and returns a config pointing at it.
fn fixture() -> (Config, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    write(
        &root.join("projects/older.mdx"),
        "---\ntitle: Older Project\npublishedAt: 2024-01-01\nsummary: First study\n---\nOlder body.\n",
    );
    write(
        &root.join("projects/newer.mdx"),
        "---\ntitle: Newer Project\npublishedAt: 2024-06-01\nsummary: Second study\nimages:\n  - /images/projects/one.png\n  - /images/projects/two.png\n  - /images/projects/three.png\n---\nNewer body.\n",
    );
    write(
        &root.join("projects/reports.md"),
        "---\ntitle: Academic Work\npublishedAt: 2023-09-01\ncategory: Academic Report\nimages:\n  - /images/projects/overview.png\n  - /images/projects/report.png\n---\n",
    );
    write(&root.join("projects/notes.txt"), "not content");
    write(&root.join("documents.toml"), DOCUMENTS);
    write(&root.join("profile.toml"), PROFILE);
    write(
        &root.join("public/images/previews/academic-reports/report.png"),
        "png",
    );
    write(&root.join("public/images/projects/one.png"), "one");
    write(&root.join("public/styles/site.css"), "body { margin: 0; }");

    let mut config = Config::default();
    config.content.projects_dir = root.join("projects");
    config.content.documents_file = root.join("documents.toml");
    config.content.profile_file = root.join("profile.toml");
    config.content.public_dir = root.join("public");

    (config, temp_dir)
}

async fn build_test_app(config: Config) -> (Router, AppState) {
    let assets = AssetStore::local(&config.content.public_dir).expect("Failed to open public dir");
    let state = AppState::new(config, assets)
        .await
        .expect("Failed to build app state");
    (router(state.clone()), state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = ServiceExt::<Request<Body>>::oneshot(app.clone(), request)
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn test_pages_render() {
    let (config, _temp_dir) = fixture();
    let (app, state) = build_test_app(config).await;

    for uri in ["/", "/about", "/work", "/work/newer"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("Ngoc Nguyen"), "{uri}");
    }

    assert_eq!(state.metrics.snapshot().pages_rendered, 4);
}

#[tokio::test]
async fn test_home_lists_newest_first() {
    let (config, _temp_dir) = fixture();
    let (app, _) = build_test_app(config).await;

    let (_, body) = get(&app, "/").await;
    let newer = body.find("Newer Project").unwrap();
    let older = body.find("Older Project").unwrap();
    assert!(newer < older);
    // Only the latest two projects appear on the home page.
    assert!(!body.contains("Academic Work"));
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    let (config, _temp_dir) = fixture();
    let (app, state) = build_test_app(config).await;

    let (status, body) = get(&app, "/work/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
    assert_eq!(state.metrics.snapshot().not_found, 1);

    let (status, _) = get(&app, "/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_projects_dir_is_not_found() {
    let (mut config, temp_dir) = fixture();
    config.content.projects_dir = temp_dir.path().join("absent");
    let (app, _) = build_test_app(config).await;

    let (status, _) = get(&app, "/work").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_carousel_navigation_through_query() {
    let (config, _temp_dir) = fixture();
    let (app, _) = build_test_app(config).await;

    let (_, first) = get(&app, "/work/newer").await;
    assert!(first.contains("href=\"?project-newer=1#project-newer\""));
    assert!(first.contains("href=\"?project-newer=2#project-newer\""));

    // At the last slide, next wraps to the first.
    let (status, last) = get(&app, "/work/newer?project-newer=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(last.contains("href=\"?project-newer=0#project-newer\""));
    assert!(last.contains("href=\"?project-newer=1#project-newer\""));
    assert_eq!(last.matches("aria-current=\"true\"").count(), 1);

    // Out-of-range positions fall back to the first slide.
    let (status, _) = get(&app, "/work/newer?project-newer=99").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_work_page_library() {
    let (config, _temp_dir) = fixture();
    let (app, _) = build_test_app(config).await;

    let (_, body) = get(&app, "/work").await;
    assert!(body.contains("Document Library"));
    assert!(body.contains("/images/previews/academic-reports/report.png"));
    assert!(body.contains("Credit Risk"));
    assert!(body.contains("XLSX · 0.75MB"));
    assert!(body.contains("Open File"));
    assert!(body.contains("Academic Reports Overview"));
    assert!(body.contains("1 file"));
}

#[tokio::test]
async fn test_static_and_image_routes() {
    let (config, _temp_dir) = fixture();
    let (app, _) = build_test_app(config).await;

    let request = Request::builder()
        .uri("/images/projects/one.png")
        .body(Body::empty())
        .unwrap();
    let response = ServiceExt::<Request<Body>>::oneshot(app.clone(), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

    let (status, css) = get(&app, "/styles/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(css.contains("margin"));

    let (status, _) = get(&app, "/images/projects/absent.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let (config, _temp_dir) = fixture();
    let (app, _) = build_test_app(config).await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["components"]["projects"], "healthy");
}

#[tokio::test]
async fn test_unparseable_date_does_not_break_listings() {
    let (config, temp_dir) = fixture();
    write(
        &temp_dir.path().join("projects/broken.mdx"),
        "---\ntitle: Broken Project\npublishedAt: June 2024\n---\n",
    );
    let (app, _) = build_test_app(config).await;

    for uri in ["/", "/work"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("Newer Project"), "{uri}");
        assert!(!body.contains("Broken Project"), "{uri}");
    }

    let (status, _) = get(&app, "/work/broken").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
