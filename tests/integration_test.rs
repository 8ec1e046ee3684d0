use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use catalog_viewer::config::ViewerConfig;
use catalog_viewer::lifecycle::CatalogSystem;
use catalog_viewer::model::{ProductId, Scalar, SyncState};
use catalog_viewer::service::{CatalogService, HttpCatalogService, ServiceError};
use catalog_viewer::store::RefreshOutcome;
use catalog_viewer::view::{CatalogView, EMPTY_MESSAGE, ERROR_MESSAGE};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// How the fake backend answers `GET /api/products`.
#[derive(Clone, Copy)]
enum ListMode {
    Ok,
    ServerError,
    Garbage,
}

struct Backend {
    products: Vec<Value>,
    list_mode: ListMode,
    posted: Vec<Value>,
}

type Shared = Arc<Mutex<Backend>>;

async fn list_products(State(backend): State<Shared>) -> Response {
    let backend = backend.lock().await;
    match backend.list_mode {
        ListMode::Ok => Json(Value::Array(backend.products.clone())).into_response(),
        ListMode::ServerError => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        ListMode::Garbage => "<html>not a catalog</html>".into_response(),
    }
}

async fn create_product(State(backend): State<Shared>, Json(body): Json<Value>) -> StatusCode {
    let mut backend = backend.lock().await;
    let id = backend.products.len() as i64 + 1;
    backend.products.push(json!({
        "id": id,
        "name": body["name"],
        "price": body["price"],
        "upc": body["upc"],
        "inventory": null,
        "image": null,
    }));
    backend.posted.push(body);
    StatusCode::CREATED
}

async fn spawn_backend(products: Vec<Value>) -> (ViewerConfig, Shared) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let backend = Arc::new(Mutex::new(Backend {
        products,
        list_mode: ListMode::Ok,
        posted: Vec::new(),
    }));
    let app = Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .with_state(backend.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let config = ViewerConfig::new(&format!("http://{addr}"), Duration::from_secs(5))
        .expect("valid config");
    (config, backend)
}

#[tokio::test]
async fn test_empty_catalog_renders_empty_state() {
    let (config, _backend) = spawn_backend(vec![]).await;
    let mut system = CatalogSystem::from_config(&config).expect("system");

    let outcome = system.mounted().await.unwrap().unwrap().unwrap();
    assert_eq!(outcome, RefreshOutcome::Applied);

    let state = system.controller.snapshot().await.unwrap();
    assert_eq!(state, SyncState::Loaded(vec![]));
    let text = CatalogView::from_state(&state).to_string();
    assert!(text.contains(EMPTY_MESSAGE));
    assert!(!text.contains(ERROR_MESSAGE));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rows_are_keyed_in_server_order() {
    let (config, _backend) = spawn_backend(vec![
        json!({"id": 9, "name": "Chair", "price": 49.0, "upc": 300, "inventory": 2, "image": "chair.png"}),
        json!({"id": "sku-1", "name": "Desk", "price": 250, "upc": 100, "inventory": null, "image": null}),
    ])
    .await;
    let mut system = CatalogSystem::from_config(&config).expect("system");
    system.mounted().await.unwrap().unwrap().unwrap();

    let view = CatalogView::from_state(&system.controller.snapshot().await.unwrap());
    assert_eq!(
        view.row_keys(),
        vec![&ProductId::Number(9), &ProductId::Text("sku-1".into())]
    );
    let text = view.to_string();
    assert!(text.contains("chair.png"));
    assert!(text.contains("Desk"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_server_error_keeps_previous_catalog() {
    let (config, backend) = spawn_backend(vec![
        json!({"id": 1, "name": "Lamp", "price": 19.5, "upc": 1}),
    ])
    .await;
    let mut system = CatalogSystem::from_config(&config).expect("system");
    system.mounted().await.unwrap().unwrap().unwrap();

    backend.lock().await.list_mode = ListMode::ServerError;
    let outcome = system.controller.refresh().await.unwrap();
    assert_eq!(outcome, RefreshOutcome::Failed);

    let state = system.controller.snapshot().await.unwrap();
    assert!(state.is_error());
    let text = CatalogView::from_state(&state).to_string();
    assert!(text.contains("Lamp"));
    assert!(text.contains(ERROR_MESSAGE));

    backend.lock().await.list_mode = ListMode::Ok;
    system.controller.refresh().await.unwrap();
    assert!(!system.controller.snapshot().await.unwrap().is_error());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_string_and_fractional_fields_still_render() {
    let (config, _backend) = spawn_backend(vec![
        json!({"id": 1, "name": "Lamp", "price": 19.5, "upc": 100000000001u64}),
        json!({"id": 2, "name": "Desk", "price": "250.00", "upc": "100000000002", "inventory": 2.5}),
    ])
    .await;
    let mut system = CatalogSystem::from_config(&config).expect("system");

    let outcome = system.mounted().await.unwrap().unwrap().unwrap();
    assert_eq!(outcome, RefreshOutcome::Applied);

    let state = system.controller.snapshot().await.unwrap();
    assert!(!state.is_error());
    let text = CatalogView::from_state(&state).to_string();
    assert!(text.contains("250.00"));
    assert!(text.contains("100000000002"));
    assert!(text.contains("2.5"));
    assert!(!text.contains(ERROR_MESSAGE));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let (config, backend) = spawn_backend(vec![]).await;
    backend.lock().await.list_mode = ListMode::ServerError;
    let service = HttpCatalogService::new(&config).expect("service");

    let result = service.list_products().await;
    assert!(matches!(
        result,
        Err(ServiceError::Status(status)) if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
}

#[tokio::test]
async fn test_undecodable_body_is_a_decode_error() {
    let (config, backend) = spawn_backend(vec![]).await;
    backend.lock().await.list_mode = ListMode::Garbage;
    let service = HttpCatalogService::new(&config).expect("service");

    let result = service.list_products().await;
    assert!(matches!(result, Err(ServiceError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_backend_shows_error_message() {
    // Bind and drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");

    let config = ViewerConfig::new(&format!("http://{addr}"), Duration::from_secs(2))
        .expect("valid config");
    let mut system = CatalogSystem::from_config(&config).expect("system");

    assert_eq!(
        system.mounted().await.unwrap().unwrap().unwrap(),
        RefreshOutcome::Failed
    );
    let state = system.controller.snapshot().await.unwrap();
    assert_eq!(state, SyncState::ErrorOccurred { stale: None });
    assert!(CatalogView::from_state(&state).to_string().contains(ERROR_MESSAGE));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_create_posts_placeholder_and_refreshes() {
    let (config, backend) = spawn_backend(vec![
        json!({"id": 1, "name": "Lamp", "price": 19.5, "upc": 1}),
        json!({"id": 2, "name": "Desk", "price": 250, "upc": 2}),
    ])
    .await;
    let mut system = CatalogSystem::from_config(&config).expect("system");
    system.mounted().await.unwrap().unwrap().unwrap();

    let outcome = system.controller.create_placeholder().await.unwrap();
    assert_eq!(outcome, RefreshOutcome::Applied);

    {
        let backend = backend.lock().await;
        assert_eq!(
            backend.posted,
            vec![json!({"name": "New Product", "price": 100.0, "upc": 100_000_000_003u64})]
        );
    }

    let state = system.controller.snapshot().await.unwrap();
    let catalog = state.catalog().unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog[2].name, "New Product");
    assert_eq!(catalog[2].upc, Scalar::from(100_000_000_003u64));
    assert_eq!(catalog[2].inventory, None);

    system.shutdown().await.unwrap();
}
