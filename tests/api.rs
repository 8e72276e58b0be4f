//! End-to-end tests exercising the full router over HTTP.

use axum::http::StatusCode;
use axum_test::TestServer;
use rusqlite::Connection;
use serde_json::{Value, json};

use fintrack::{
    AppState, build_router,
    endpoints::{self, format_endpoint},
};

fn new_test_server() -> TestServer {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    let state = AppState::new(connection).expect("Could not create app state");

    TestServer::new(build_router(state))
}

#[tokio::test]
async fn transaction_crud_lifecycle() {
    let server = new_test_server();

    let response = server
        .post(endpoints::TRANSACTIONS)
        .json(&json!({
            "amount": 42.50,
            "date": "2024-03-05",
            "description": "Groceries",
            "category": "Food",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    let id = created["id"].as_i64().expect("created id should be an integer");
    assert_eq!(created["amount"], 42.50);
    assert_eq!(created["date"], "2024-03-05");

    let response = server.get(&format_endpoint(endpoints::TRANSACTION, id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["description"], "Groceries");

    let response = server
        .put(&format_endpoint(endpoints::TRANSACTION, id))
        .json(&json!({
            "amount": 50.00,
            "date": "2024-03-06",
            "description": "Groceries and snacks",
            "category": "Food",
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["amount"], 50.00);

    let response = server
        .delete(&format_endpoint(endpoints::TRANSACTION, id))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["id"], id);

    let response = server.get(&format_endpoint(endpoints::TRANSACTION, id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn transaction_list_is_most_recent_first() {
    let server = new_test_server();
    for (amount, date) in [(10.0, "2024-03-01"), (20.0, "2024-03-10"), (30.0, "2024-03-05")] {
        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "amount": amount,
                "date": date,
                "description": "Expense",
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get(endpoints::TRANSACTIONS).await;
    response.assert_status_ok();

    let dates: Vec<String> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|transaction| transaction["date"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(dates, vec!["2024-03-10", "2024-03-05", "2024-03-01"]);
}

#[tokio::test]
async fn transaction_validation_reports_offending_field() {
    let server = new_test_server();

    let response = server
        .post(endpoints::TRANSACTIONS)
        .json(&json!({
            "amount": -5.0,
            "date": "2024-03-05",
            "description": "Refund",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["field"], "amount");
    assert!(body["error"].as_str().unwrap().contains("positive"));
}

#[tokio::test]
async fn first_category_listing_seeds_defaults() {
    let server = new_test_server();

    let response = server.get(endpoints::CATEGORIES).await;
    response.assert_status_ok();

    let names: Vec<String> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|category| category["name"].as_str().unwrap().to_owned())
        .collect();

    assert_eq!(names.len(), 10);
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted, "categories should be listed alphabetically");
    assert!(names.contains(&"Food".to_owned()));
    assert!(names.contains(&"Travel".to_owned()));
}

#[tokio::test]
async fn duplicate_category_name_is_rejected() {
    let server = new_test_server();
    server
        .post(endpoints::CATEGORIES)
        .json(&json!({"name": "Pets"}))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post(endpoints::CATEGORIES)
        .json(&json!({"name": "Pets"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn budget_create_overwrites_existing_pair() {
    let server = new_test_server();

    let response = server
        .post(endpoints::BUDGETS)
        .json(&json!({"category": "Food", "amount": 300.0, "month": "2024-03"}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let first_id = response.json::<Value>()["id"].as_i64().unwrap();

    let response = server
        .post(endpoints::BUDGETS)
        .json(&json!({"category": "Food", "amount": 450.0, "month": "2024-03"}))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["id"].as_i64().unwrap(), first_id);
    assert_eq!(updated["amount"], 450.0);

    let budgets: Vec<Value> = server.get(endpoints::BUDGETS).await.json();
    assert_eq!(budgets.len(), 1);
}

#[tokio::test]
async fn budget_comparison_reports_overspending() {
    let server = new_test_server();
    server
        .post(endpoints::BUDGETS)
        .json(&json!({"category": "Food", "amount": 120.0, "month": "2024-03"}))
        .await
        .assert_status(StatusCode::CREATED);
    for amount in [100.0, 50.0] {
        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "amount": amount,
                "date": "2024-03-15",
                "description": "Eating out",
                "category": "Food",
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server
        .get(endpoints::BUDGET_COMPARISON_REPORT)
        .add_query_param("month", "2024-03")
        .await;
    response.assert_status_ok();

    let rows: Vec<Value> = response.json();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["category"], "Food");
    assert_eq!(rows[0]["actual"], 150.0);
    assert_eq!(rows[0]["remaining"], 0.0);
    assert_eq!(rows[0]["overspent"], 30.0);
    assert_eq!(rows[0]["percentUsed"], 125.0);
}

#[tokio::test]
async fn budget_comparison_requires_month_parameter() {
    let server = new_test_server();

    let response = server.get(endpoints::BUDGET_COMPARISON_REPORT).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["field"], "month");
}

#[tokio::test]
async fn reports_on_empty_store_return_no_data() {
    let server = new_test_server();

    let response = server.get(endpoints::MONTHLY_TOTALS_REPORT).await;
    response.assert_status_ok();
    assert!(response.json::<Value>().is_null());

    let response = server.get(endpoints::CATEGORY_BREAKDOWN_REPORT).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 0);

    let response = server.get(endpoints::SUMMARY_REPORT).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["summary"].is_null());
    assert_eq!(body["recentTransactions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn summary_reports_totals_and_recent_transactions() {
    let server = new_test_server();
    for (amount, date) in [
        (10.0, "2024-03-01"),
        (20.0, "2024-03-02"),
        (30.0, "2024-03-03"),
        (40.0, "2024-03-04"),
        (50.0, "2024-03-05"),
        (60.0, "2024-03-06"),
    ] {
        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "amount": amount,
                "date": date,
                "description": "Expense",
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get(endpoints::SUMMARY_REPORT).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["summary"]["total"], 210.0);
    assert_eq!(body["summary"]["count"], 6);
    assert_eq!(body["summary"]["average"], 35.0);

    let recent = body["recentTransactions"].as_array().unwrap();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0]["date"], "2024-03-06");
    assert_eq!(recent[4]["date"], "2024-03-02");
}

#[tokio::test]
async fn deleted_category_keeps_its_name_in_reports() {
    let server = new_test_server();
    server
        .post(endpoints::TRANSACTIONS)
        .json(&json!({
            "amount": 25.0,
            "date": "2024-03-05",
            "description": "Groceries",
            "category": "Food",
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let categories: Vec<Value> = server.get(endpoints::CATEGORIES).await.json();
    let food_id = categories
        .iter()
        .find(|category| category["name"] == "Food")
        .expect("default Food category should exist")["id"]
        .as_i64()
        .unwrap();
    server
        .delete(&format_endpoint(endpoints::CATEGORY, food_id))
        .await
        .assert_status_ok();

    let breakdown: Vec<Value> = server.get(endpoints::CATEGORY_BREAKDOWN_REPORT).await.json();
    let food_row = breakdown
        .iter()
        .find(|row| row["category"] == "Food")
        .expect("spending should still report under the deleted category name");
    assert_eq!(food_row["total"], 25.0);
}

#[tokio::test]
async fn unknown_route_returns_json_not_found() {
    let server = new_test_server();

    let response = server.get("/api/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.json::<Value>()["error"].is_string());
}
