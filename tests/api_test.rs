use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use restaurant_orders::lifecycle::RestaurantSystem;
use restaurant_orders::routes::{router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn register(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/register",
        Some(json!({ "nombre": "Ana", "email": email, "contraseña": "s3creta" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_str().unwrap().to_string()
}

fn tickets() -> Value {
    json!([
        {
            "productos": [
                { "_id": "p-1", "nombre": "Tacos", "precio": 40.0, "cantidad": 2 },
                { "_id": "p-2", "Nombre": "Agua", "Precio": 15.0 }
            ],
            "tipo_entrega": "recoger"
        },
        {
            "productos": [{ "_id": "p-3", "nombre": "Pozole", "precio": 90.0, "cantidad": 1 }],
            "total": 90.0,
            "tipo_entrega": "domicilio",
            "ubicacion": {
                "coordenadas": { "latitud": 19.43, "longitud": -99.13 },
                "direccion": "Av. Juárez 10"
            }
        }
    ])
}

#[tokio::test]
async fn test_auth_endpoints() {
    let system = RestaurantSystem::new(16);
    let app = router(AppState::from(&system));

    let id = register(&app, "ana@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        Some(json!({ "email": "ana@example.com", "contraseña": "otra" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Usuario ya existe");

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "email": "ana@example.com", "contraseña": "s3creta" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["tipo"], "cliente");
    assert!(body.get("password_hash").is_none());

    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "email": "ana@example.com", "contraseña": "mala" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "email": "nadie@example.com", "contraseña": "s3creta" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Usuario no encontrado");

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let system = RestaurantSystem::new(16);
    let app = router(AppState::from(&system));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("JSON inválido"));

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_endpoints() {
    let system = RestaurantSystem::new(16);
    let app = router(AppState::from(&system));
    let user_id = register(&app, "ana@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/pedidos/multiples",
        Some(json!({ "usuarioId": user_id, "tickets": tickets() })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensaje"], "2 pedidos creados exitosamente");
    let ids: Vec<String> = serde_json::from_value(body["ids"].clone()).unwrap();
    assert_eq!(ids.len(), 2);

    let (status, body) = send(
        &app,
        Method::POST,
        "/pedidos/multiples",
        Some(json!({ "usuarioId": user_id, "tickets": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Se requiere un array de pedidos");

    let (status, _) = send(
        &app,
        Method::POST,
        "/pedidos/multiples",
        Some(json!({ "tickets": tickets() })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, &format!("/pedidos?usuarioId={user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    for order in orders {
        assert_eq!(order["estado"], "pendiente");
        assert_eq!(order["usuario_id"], user_id.as_str());
    }
    let pickup = orders.iter().find(|o| o["tipo_entrega"] == "recoger").unwrap();
    assert_eq!(pickup["total"], 95.0);
    assert!(pickup.get("ubicacion").is_none());

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/pedidos?usuarioId={user_id}&estado=perdido"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/pedidos/actualizar-estado",
        Some(json!({ "ids": [ids[0]], "nuevoEstado": "completado" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["actualizados"], 1);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/pedidos/actualizar-estado",
        Some(json!({ "ids": [ids[0]], "nuevoEstado": "entregado" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/pedidos?usuarioId={user_id}&estado=completado"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/pedidos/admin?page=1&limit=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["totalPedidos"], 2);
    assert_eq!(body["pedidos"].as_array().unwrap().len(), 1);

    // Empty body: admin delete
    let (status, body) = send(&app, Method::DELETE, &format!("/pedidos/{}", ids[0]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensaje"], "Pedido eliminado correctamente");

    let (status, _) = send(&app, Method::DELETE, &format!("/pedidos/{}", ids[0]), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/pedidos/no-es-un-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::DELETE, &format!("/pedidos/usuario/{user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eliminados"], 1);

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_review_endpoints() {
    let system = RestaurantSystem::new(16);
    let app = router(AppState::from(&system));
    let ana = register(&app, "ana@example.com").await;
    let luis = register(&app, "luis@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/resenas/restaurante",
        Some(json!({ "usuario_id": ana, "calificacion": 5, "comentario": "Excelente" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["mensaje"], "Reseña publicada con éxito");
    let review_id = body["_id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/resenas/restaurante",
        Some(json!({ "usuario_id": ana, "calificacion": 6, "comentario": "Demasiado" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Calificación inválida (debe ser 1-5)");

    let (status, body) = send(
        &app,
        Method::POST,
        "/resenas/producto",
        Some(json!({ "usuario_id": ana, "calificacion": 4, "comentario": "Rico" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ID de producto es requerido");

    let (status, _) = send(
        &app,
        Method::POST,
        "/resenas/producto",
        Some(json!({ "usuario_id": ana, "producto_id": "tacos", "calificacion": "4", "comentario": "Rico" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::GET, "/resenas/producto/tacos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["usuario"]["nombre"], "Ana");
    assert_eq!(body[0]["producto_id"], "tacos");

    let (status, body) = send(&app, Method::GET, "/resenas/restaurante?orden=calificacion_asc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/resenas/{review_id}"),
        Some(json!({ "usuario_id": luis })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/resenas/123",
        Some(json!({ "usuario_id": ana })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/resenas/{review_id}"),
        Some(json!({ "usuario_id": ana })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensaje"], "Reseña eliminada correctamente");

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_restaurant_endpoints() {
    let system = RestaurantSystem::new(16);
    let app = router(AppState::from(&system));

    let (status, body) = send(
        &app,
        Method::POST,
        "/restaurantes",
        Some(json!({
            "nombre": "La Cocina",
            "ubicacion": "Centro",
            "menu_resumido": [{ "nombre": "Tacos", "precio": 40.0 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["_id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::GET, "/restaurantes?ubicacion=centro", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/restaurantes/{id}"),
        Some(json!({ "ubicacion": "Norte" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ubicacion"], "Norte");
    assert_eq!(body["nombre"], "La Cocina");

    let (status, body) = send(&app, Method::GET, &format!("/restaurantes/{id}/menu"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["nombre"], "Tacos");

    let (status, _) = send(&app, Method::GET, "/restaurantes/abc/menu", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/productos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    drop(app);
    system.shutdown().await.unwrap();
}
