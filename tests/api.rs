mod support;

use axum::body::Body;
use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use support::{
    seed_detail, seed_employee, seed_order, seed_product, seed_restaurant, test_app,
};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// --- restaurants ---

#[tokio::test]
async fn create_restaurant_returns_201() {
    let (app, _store) = test_app(true);

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/restaurantes",
            r#"{"id_rest":1,"nombre":"La Trattoria","ciudad":"Madrid","direccion":"Calle Mayor 1"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Restaurante creado correctamente");
    assert_eq!(body["data"]["id_rest"], 1);
    assert_eq!(body["data"]["nombre"], "La Trattoria");
}

#[tokio::test]
async fn create_restaurant_missing_fields_returns_400() {
    let (app, _store) = test_app(true);

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/restaurantes",
            r#"{"nombre":"Solo nombre"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Nombre, ciudad y dirección son requeridos");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn list_restaurants_sorted_by_name() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "Zarzuela");
    seed_restaurant(&store, 2, "Asador Norte");

    let resp = app.oneshot(get_request("/api/restaurantes")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["nombre"], "Asador Norte");
    assert_eq!(body["data"][1]["nombre"], "Zarzuela");
}

#[tokio::test]
async fn update_restaurant_not_found_returns_404() {
    let (app, _store) = test_app(true);

    let resp = app
        .oneshot(json_request(
            "PUT",
            "/api/restaurantes/99",
            r#"{"nombre":"Nuevo"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Restaurante no encontrado");
}

#[tokio::test]
async fn delete_restaurant_returns_deleted_row() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 7, "Casa Paco");

    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/restaurantes/7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Restaurante eliminado");
    assert_eq!(body["data"]["id_rest"], 7);
    assert!(store.lock().unwrap().restaurants.is_empty());
}

// --- products ---

#[tokio::test]
async fn create_product_missing_fields_returns_400() {
    let (app, _store) = test_app(true);

    let resp = app
        .oneshot(json_request("POST", "/api/productos", r#"{"precio":9.5}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Nombre y precio son requeridos");
}

#[tokio::test]
async fn create_and_list_products() {
    let (app, _store) = test_app(true);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/productos",
            r#"{"id_prod":1,"nombre":"Pizza Margherita","precio":9.5}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.oneshot(get_request("/api/productos")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["precio"], 9.5);
}

// --- orders ---

#[tokio::test]
async fn create_order_unknown_restaurant_returns_400() {
    let (app, _store) = test_app(true);

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/pedidos",
            r#"{"fecha":"2024-05-01","total":42.5,"id_rest":99}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Restaurante no encontrado");
}

#[tokio::test]
async fn create_order_returns_201() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/pedidos",
            r#"{"id_pedido":10,"fecha":"2024-05-01","total":42.5,"id_rest":1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Pedido creado correctamente");
    assert_eq!(body["data"]["id_pedido"], 10);
}

#[tokio::test]
async fn list_orders_newest_first() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_order(&store, 1, "2024-01-10", 20.0, 1);
    seed_order(&store, 2, "2024-03-05", 35.0, 1);

    let resp = app.oneshot(get_request("/api/pedidos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["id_pedido"], 2);
}

#[tokio::test]
async fn get_order_returns_order_with_details() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_product(&store, 1, "Pizza Margherita", 9.5);
    seed_order(&store, 1, "2024-05-01", 19.0, 1);
    seed_detail(&store, 1, 2, 19.0, 1, 1);

    let resp = app.oneshot(get_request("/api/pedidos/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["pedido"]["id_pedido"], 1);
    assert_eq!(body["detalles"][0]["producto_nombre"], "Pizza Margherita");
}

#[tokio::test]
async fn get_order_not_found_returns_404() {
    let (app, _store) = test_app(true);

    let resp = app.oneshot(get_request("/api/pedidos/42")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Pedido no encontrado");
}

#[tokio::test]
async fn update_order_replaces_line_items() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_product(&store, 1, "Pizza Margherita", 9.5);
    seed_product(&store, 2, "Lasagna", 11.0);
    seed_order(&store, 1, "2024-05-01", 19.0, 1);
    seed_detail(&store, 1, 2, 19.0, 1, 1);

    let resp = app
        .oneshot(json_request(
            "PUT",
            "/api/pedidos/1",
            r#"{"fecha":"2024-05-02","total":22.0,"detalles":[{"id_prod":2,"cantidad":2,"subtotal":22.0}]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Pedido actualizado correctamente");
    assert_eq!(body["data"]["total"], 22.0);

    let state = store.lock().unwrap();
    assert_eq!(state.details.len(), 1);
    assert_eq!(state.details[0].id_prod, 2);
}

#[tokio::test]
async fn update_order_not_found_returns_404() {
    let (app, _store) = test_app(true);

    let resp = app
        .oneshot(json_request(
            "PUT",
            "/api/pedidos/42",
            r#"{"fecha":"2024-05-02","total":22.0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Pedido no encontrado");
}

#[tokio::test]
async fn delete_order_cascades_to_line_items() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_product(&store, 1, "Pizza Margherita", 9.5);
    seed_order(&store, 1, "2024-05-01", 19.0, 1);
    seed_detail(&store, 1, 2, 19.0, 1, 1);

    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/pedidos/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Pedido eliminado correctamente");

    let state = store.lock().unwrap();
    assert!(state.orders.is_empty());
    assert!(state.details.is_empty());
}

// --- order lines ---

#[tokio::test]
async fn create_order_detail_unknown_order_returns_400() {
    let (app, store) = test_app(true);
    seed_product(&store, 1, "Pizza Margherita", 9.5);

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/detalles-pedido",
            r#"{"cantidad":2,"subtotal":19.0,"id_pedido":42,"id_prod":1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Pedido no encontrado");
}

#[tokio::test]
async fn create_order_detail_unknown_product_returns_400() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_order(&store, 1, "2024-05-01", 19.0, 1);

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/detalles-pedido",
            r#"{"cantidad":2,"subtotal":19.0,"id_pedido":1,"id_prod":42}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Producto no encontrado");
}

#[tokio::test]
async fn create_order_detail_returns_201() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_product(&store, 1, "Pizza Margherita", 9.5);
    seed_order(&store, 1, "2024-05-01", 19.0, 1);

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/detalles-pedido",
            r#"{"cantidad":2,"subtotal":19.0,"id_pedido":1,"id_prod":1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Detalle del pedido agregado correctamente");
    assert_eq!(body["data"]["id_detalle"], 1);
}

#[tokio::test]
async fn list_order_details_includes_product_name() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_product(&store, 1, "Pizza Margherita", 9.5);
    seed_order(&store, 1, "2024-05-01", 19.0, 1);
    seed_detail(&store, 1, 2, 19.0, 1, 1);

    let resp = app
        .oneshot(get_request("/api/detalles-pedido/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["nombre"], "Pizza Margherita");
}

#[tokio::test]
async fn update_order_detail_not_found_returns_404() {
    let (app, _store) = test_app(true);

    let resp = app
        .oneshot(json_request(
            "PUT",
            "/api/detalles-pedido/42",
            r#"{"cantidad":3}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Detalle de pedido no encontrado");
}

#[tokio::test]
async fn delete_order_detail_returns_deleted_row() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_product(&store, 1, "Pizza Margherita", 9.5);
    seed_order(&store, 1, "2024-05-01", 19.0, 1);
    seed_detail(&store, 5, 2, 19.0, 1, 1);

    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/detalles-pedido/5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Detalle del pedido eliminado");
    assert_eq!(body["data"]["id_detalle"], 5);
}

// --- employees ---

#[tokio::test]
async fn create_employee_unknown_restaurant_returns_400() {
    let (app, _store) = test_app(true);

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/empleados",
            r#"{"nombre":"Ana García","rol":"Camarero","id_rest":99}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Restaurante no encontrado");
}

#[tokio::test]
async fn create_employee_returns_201() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/empleados",
            r#"{"id_empleado":1,"nombre":"Ana García","rol":"Camarero","id_rest":1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Empleado creado correctamente");
    assert_eq!(body["data"]["rol"], "Camarero");
}

#[tokio::test]
async fn update_employee_not_found_returns_404() {
    let (app, _store) = test_app(true);

    let resp = app
        .oneshot(json_request(
            "PUT",
            "/api/empleados/42",
            r#"{"nombre":"Nadie"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Empleado no encontrado");
}

#[tokio::test]
async fn delete_employee_returns_deleted_row() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_employee(&store, 3, "Ana García", "Camarero", 1);

    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/empleados/3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Empleado eliminado correctamente");
    assert_eq!(body["data"]["id_empleado"], 3);
}

// --- reports ---

#[tokio::test]
async fn order_products_report_returns_joined_rows() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_product(&store, 1, "Pizza Margherita", 9.5);
    seed_order(&store, 1, "2024-05-01", 19.0, 1);
    seed_detail(&store, 1, 2, 19.0, 1, 1);

    let resp = app
        .oneshot(get_request("/api/pedido-productos/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"][0]["producto"], "Pizza Margherita");
    assert_eq!(body["data"][0]["cantidad"], 2);
}

#[tokio::test]
async fn top_selling_threshold_is_strict() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_product(&store, 1, "Pizza Margherita", 9.5);
    seed_order(&store, 1, "2024-05-01", 95.0, 1);
    seed_detail(&store, 1, 10, 95.0, 1, 1);

    // Exactly 10 units sold: unidades=10 must not match.
    let resp = app
        .clone()
        .oneshot(get_request("/api/productos-mas-vendidos?unidades=10"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(
        body["message"],
        "No se encontraron productos con más de 10 unidades vendidas"
    );

    let resp = app
        .oneshot(get_request("/api/productos-mas-vendidos?unidades=9"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["unidades_vendidas"], 10);
}

#[tokio::test]
async fn top_selling_without_unidades_returns_400() {
    let (app, _store) = test_app(true);

    let resp = app
        .oneshot(get_request("/api/productos-mas-vendidos"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Se debe especificar el número de unidades");
}

#[tokio::test]
async fn sales_per_restaurant_sorted_descending() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_restaurant(&store, 2, "Asador Norte");
    seed_order(&store, 1, "2024-05-01", 20.0, 1);
    seed_order(&store, 2, "2024-05-02", 80.0, 2);

    let resp = app
        .oneshot(get_request("/api/ventas-por-restaurante"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["restaurante"], "Asador Norte");
    assert_eq!(body["data"][0]["total_ventas"], 80.0);
}

#[tokio::test]
async fn orders_by_date_matches_exact_day() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_order(&store, 1, "2024-05-01", 20.0, 1);
    seed_order(&store, 2, "2024-05-02", 35.0, 1);

    let resp = app
        .oneshot(get_request("/api/pedidos-por-fecha/2024-05-02"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["id_pedido"], 2);
}

#[tokio::test]
async fn employees_by_role_counts_per_role() {
    let (app, store) = test_app(true);
    seed_restaurant(&store, 1, "La Trattoria");
    seed_employee(&store, 1, "Ana García", "Camarero", 1);
    seed_employee(&store, 2, "Luis Pérez", "Camarero", 1);
    seed_employee(&store, 3, "Marta Ruiz", "Cocinero", 1);
    seed_employee(&store, 4, "Otro", "Camarero", 2);

    let resp = app
        .oneshot(get_request("/api/empleados-por-rol/1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"][0]["rol"], "Camarero");
    assert_eq!(body["data"][0]["cantidad_empleados"], 2);
    assert_eq!(body["data"][1]["rol"], "Cocinero");
    assert_eq!(body["data"][1]["cantidad_empleados"], 1);
}

// --- health and fallback ---

#[tokio::test]
async fn test_db_healthy_returns_200() {
    let (app, _store) = test_app(true);

    let resp = app.oneshot(get_request("/api/test-db")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert!(body["time"].is_string());
}

#[tokio::test]
async fn test_db_unhealthy_returns_500() {
    let (app, _store) = test_app(false);

    let resp = app.oneshot(get_request("/api/test-db")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Error de conexión a la base de datos");
}

#[tokio::test]
async fn unknown_route_returns_404_fallback() {
    let (app, _store) = test_app(true);

    let resp = app.oneshot(get_request("/api/no-existe")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Ruta no encontrada");
}
