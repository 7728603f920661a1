//! End-to-end test of the REST API and a list screen driven against it.
//!
//! Spins the router up on a random local port with an empty in-memory store,
//! creates records over HTTP, then pages and filters them.

use std::collections::HashMap;

use reqwest::{Client, StatusCode};
use rentdesk::config::AppConfig;
use rentdesk::models::pagination::{PaginationType, SearchParams};
use rentdesk::models::property::Property;
use rentdesk::services::lookup::LookupService;
use rentdesk::services::store::Store;
use rentdesk::state::list_page::{FetchPhase, ListPage};
use rentdesk::views::pagination::{DisplayOptions, PageItem, PaginationEvent};
use rentdesk::AppState;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Start the app on a random port, returning the base URL and shared state.
async fn start_server() -> (String, AppState, tokio::task::JoinHandle<()>) {
    let config = AppConfig {
        currency_symbol: "£".to_string(),
        ..AppConfig::default()
    };
    let state = AppState::new(Store::new(), LookupService::builtin(), config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let app = rentdesk::routes::router(state.clone(), cors);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (base_url, state, handle)
}

/// Helper: extract `data` from the API envelope, panic with message on error.
fn extract_data(body: &Value) -> &Value {
    if let Some(err) = body.get("error").filter(|e| !e.is_null()) {
        panic!(
            "API error: {} / {}",
            err["code"].as_str().unwrap_or("?"),
            err["message"].as_str().unwrap_or("?"),
        );
    }
    body.get("data").expect("missing 'data' field")
}

async fn post(client: &Client, url: String, body: Value) -> Value {
    let resp = client.post(url).json(&body).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    extract_data(&body).clone()
}

#[tokio::test]
async fn property_listing_pipeline() {
    let (base, state, _handle) = start_server().await;
    let client = Client::new();

    // Health
    let resp = client.get(format!("{base}/health/live")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Owner + 25 properties across two cities
    let owner = post(
        &client,
        format!("{base}/api/v1/owners"),
        json!({"fullName": "Hana Ito", "email": "hana@example.com"}),
    )
    .await;
    let owner_id = owner["id"].as_str().unwrap().to_string();

    for i in 1..=25 {
        let city = if i % 5 == 0 { "York" } else { "Leeds" };
        post(
            &client,
            format!("{base}/api/v1/properties"),
            json!({
                "ownerId": owner_id,
                "name": format!("Unit {i:02}"),
                "address": format!("{i} High Street"),
                "city": city,
                "propertyType": "Apartment",
            }),
        )
        .await;
    }

    // Search: page 3 of 10 per page
    let resp = client
        .get(format!(
            "{base}/api/v1/properties?pageNumber=3&pageSize=10&status=all"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    let page = extract_data(&body);
    assert_eq!(page["totalRecords"], 25);
    assert_eq!(page["totalPages"], 3);
    assert_eq!(page["hasNextPage"], false);
    assert_eq!(page["hasPreviousPage"], true);
    assert_eq!(page["data"].as_array().unwrap().len(), 5);

    // Oversized page requests are clamped, not rejected
    let body: Value = client
        .get(format!("{base}/api/v1/properties?pageSize=5000&pageNumber=0"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let page = extract_data(&body);
    assert_eq!(page["pageSize"], 100);
    assert_eq!(page["pageNumber"], 1);

    // A page far past the end is just empty
    let resp = client
        .get(format!("{base}/api/v1/properties?pageNumber={}", i64::MAX))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    let page = extract_data(&body);
    assert_eq!(page["pageNumber"], i64::MAX);
    assert_eq!(page["data"].as_array().unwrap().len(), 0);
    assert_eq!(page["hasNextPage"], false);

    // Filter by city
    let body: Value = client
        .get(format!("{base}/api/v1/properties?city=York"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["totalRecords"], 5);

    // Unknown filters are a 400 with the error envelope
    let resp = client
        .get(format!("{base}/api/v1/properties?colour=blue"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Cards use the grid profile and the configured currency
    let body: Value = client
        .get(format!("{base}/api/v1/properties/cards"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let cards = extract_data(&body);
    assert_eq!(cards["pageSize"], 12);
    assert_eq!(cards["data"][0]["badge"]["variant"], "default");

    // Owner with properties cannot be deleted
    let resp = client
        .delete(format!("{base}/api/v1/owners/{owner_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Drive a list screen against the same store
    let mut screen: ListPage<Property> = ListPage::new(PaginationType::Search);
    let ticket = screen.mount().unwrap();
    let result = rentdesk::services::search::SearchApi::search(&state.store.properties, &ticket.params).await;
    assert!(screen.apply(ticket, result));
    assert_eq!(screen.items().len(), 20);

    let view = screen
        .pagination_view(&DisplayOptions::for_type(PaginationType::Search))
        .unwrap();
    assert_eq!(view.info.as_deref(), Some("Showing 1 to 20 of 25 records"));
    assert_eq!(
        view.pages.iter().filter_map(PageItem::number).collect::<Vec<_>>(),
        vec![1, 2]
    );

    assert!(view.dispatch(PaginationEvent::Next, screen.pagination_mut()));
    assert!(screen.refresh(&state.store.properties).await);
    assert_eq!(screen.items().len(), 5);
    assert_eq!(screen.phase(), &FetchPhase::Success);

    screen.pagination_mut().handle_filter_change("city", "York");
    screen.pagination_mut().handle_search();
    screen.refresh(&state.store.properties).await;
    assert_eq!(screen.pagination().total_records(), 5);
    assert_eq!(screen.pagination().current_page(), 1);
}

#[tokio::test]
async fn rent_tracking_pipeline() {
    let (base, _state, _handle) = start_server().await;
    let client = Client::new();

    let owner = post(
        &client,
        format!("{base}/api/v1/owners"),
        json!({"fullName": "Jo Park", "email": "jo@example.com"}),
    )
    .await;
    let property = post(
        &client,
        format!("{base}/api/v1/properties"),
        json!({
            "ownerId": owner["id"],
            "name": "Willow House",
            "address": "3 Willow Way",
            "city": "Derby",
            "propertyType": "House",
        }),
    )
    .await;
    let room = post(
        &client,
        format!("{base}/api/v1/rooms"),
        json!({"propertyId": property["id"], "label": "Room 1", "monthlyRent": 55000}),
    )
    .await;
    let tenant = post(
        &client,
        format!("{base}/api/v1/tenants"),
        json!({
            "roomId": room["id"],
            "fullName": "Ola Berg",
            "email": "ola@example.com",
            "leaseStart": "2026-01-01",
        }),
    )
    .await;

    let room_id = room["id"].as_str().unwrap();
    let body: Value = client
        .get(format!("{base}/api/v1/rooms/{room_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["status"], "Occupied");

    let charge = post(
        &client,
        format!("{base}/api/v1/rents"),
        json!({
            "tenantId": tenant["id"],
            "roomId": room["id"],
            "period": "2099-05-01",
            "amountDue": 55000,
        }),
    )
    .await;
    assert_eq!(charge["status"], "Pending");
    assert_eq!(charge["dueDate"], "2099-05-05");

    let charge_id = charge["id"].as_str().unwrap();
    let paid = post(
        &client,
        format!("{base}/api/v1/rents/{charge_id}/payments"),
        json!({"amount": 20000}),
    )
    .await;
    assert_eq!(paid["status"], "Partial");
    assert_eq!(paid["amountPaid"], 20000);

    let resp = client
        .post(format!("{base}/api/v1/rents/{charge_id}/payments"))
        .json(&json!({"amount": -5}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Search rents through the same query shape a list screen sends
    let params = SearchParams::new(1, 10).with_filter("status", "Partial");
    let query: HashMap<String, String> = params.to_query_pairs().into_iter().collect();
    let body: Value = client
        .get(format!("{base}/api/v1/rents"))
        .query(&query)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["totalRecords"], 1);

    let body: Value = client
        .get(format!("{base}/api/v1/rents/cards"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let card = &extract_data(&body)["data"][0];
    assert_eq!(card["title"], "2099-05");
    assert_eq!(card["details"][2][1], "£350.00");

    let body: Value = client
        .get(format!("{base}/api/v1/lookups?category=rentStatus"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&body)["totalRecords"], 4);

    let resp = client
        .get(format!("{base}/api/v1/lookups?category=rentStatus&sortBy=label"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = client
        .get(format!("{base}/api/v1/tenants/{}", uuid::Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
