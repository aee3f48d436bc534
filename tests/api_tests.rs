//! API integration tests
//!
//! These run against a live server with a migrated database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

const EMPTY_UUID: &str = "00000000-0000-0000-0000-000000000000";

async fn create_book(client: &Client, title: &str) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": title, "publishDate": "2024-11-03" }))
        .send()
        .await
        .expect("Failed to send create book request");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse book response")
}

async fn create_member(client: &Client, given_name: &str, surname: &str) -> Value {
    let response = client
        .post(format!("{}/members", BASE_URL))
        .json(&json!({ "givenName": given_name, "surname": surname }))
        .send()
        .await
        .expect("Failed to send create member request");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse member response")
}

async fn checkout(client: &Client, member_id: &str, book_id: &str) -> reqwest::Response {
    client
        .post(format!("{}/book-loans", BASE_URL))
        .json(&json!({
            "memberId": member_id,
            "bookId": book_id,
            "dueDate": "2099-01-01T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send checkout request")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check_pings_database() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    // A running server with a reachable database reports ready; a lost
    // database connection would surface as 503 instead.
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_book() {
    let client = Client::new();

    let created = create_book(&client, "X").await;
    assert_eq!(created["title"], "X");
    assert_eq!(created["publishDate"], "2024-11-03");
    assert!(created["createdTime"].is_string());
    assert!(created["lastModifiedTime"].is_string());
    assert!(created["version"].is_string());

    let id = created["id"].as_str().expect("No id in response");
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_book_returns_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/{}", BASE_URL, EMPTY_UUID))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_list_books_envelope() {
    let client = Client::new();
    create_book(&client, "Envelope check").await;

    let response = client
        .get(format!("{}/books?page=1&pageSize=5", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["items"].is_array());
    assert!(body["totalItems"].as_i64().unwrap() >= 1);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["pageSize"], 5);
    assert!(body["items"].as_array().unwrap().len() <= 5);
}

#[tokio::test]
#[ignore]
async fn test_update_book_id_mismatch_returns_400() {
    let client = Client::new();
    let created = create_book(&client, "Mismatch").await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({
            "id": EMPTY_UUID,
            "title": "Changed",
            "version": created["version"]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_update_book_refreshes_version() {
    let client = Client::new();
    let created = create_book(&client, "Before").await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .put(format!("{}/books/{}", BASE_URL, id))
        .json(&json!({
            "id": id,
            "title": "After",
            "version": created["version"]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["title"], "After");
    assert_ne!(updated["version"], created["version"]);
}

#[tokio::test]
#[ignore]
async fn test_delete_book_is_idempotent() {
    let client = Client::new();
    let created = create_book(&client, "Doomed").await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // Deleting again (or any absent id) still succeeds
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_checkout_and_member_loans() {
    let client = Client::new();
    let member = create_member(&client, "Ada", "Lovelace").await;
    let book = create_book(&client, "On Computable Numbers").await;
    let member_id = member["id"].as_str().unwrap();
    let book_id = book["id"].as_str().unwrap();

    let response = checkout(&client, member_id, book_id).await;
    assert_eq!(response.status(), 201);
    let loan: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(loan["memberId"].as_str().unwrap(), member_id);
    assert!(loan["loanTime"].is_string());
    assert!(loan["returnedTime"].is_null());

    let response = client
        .get(format!(
            "{}/members/{}/loans?outstandingOnly=true",
            BASE_URL, member_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let loans: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(loans.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
async fn test_checkout_beyond_limit_returns_409() {
    // Assumes the default configured limit of 5 outstanding loans.
    let client = Client::new();
    let member = create_member(&client, "Greedy", "Reader").await;
    let member_id = member["id"].as_str().unwrap();

    for i in 0..5 {
        let book = create_book(&client, &format!("Volume {}", i)).await;
        let response = checkout(&client, member_id, book["id"].as_str().unwrap()).await;
        assert_eq!(response.status(), 201);
    }

    let permission: Value = client
        .get(format!(
            "{}/members/{}/check-out-permission",
            BASE_URL, member_id
        ))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(permission, "MaximumReached");

    let book = create_book(&client, "One Too Many").await;
    let response = checkout(&client, member_id, book["id"].as_str().unwrap()).await;
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_fresh_member_is_allowed() {
    let client = Client::new();
    let member = create_member(&client, "New", "Member").await;
    let member_id = member["id"].as_str().unwrap();

    let permission: Value = client
        .get(format!(
            "{}/members/{}/check-out-permission",
            BASE_URL, member_id
        ))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(permission, "Allowed");
}

#[tokio::test]
#[ignore]
async fn test_return_loan_exactly_once() {
    let client = Client::new();
    let member = create_member(&client, "One", "Return").await;
    let book = create_book(&client, "Borrowed Once").await;
    let member_id = member["id"].as_str().unwrap();
    let book_id = book["id"].as_str().unwrap();

    let loan: Value = checkout(&client, member_id, book_id)
        .await
        .json()
        .await
        .expect("Failed to parse response");
    let loan_id = loan["id"].as_str().unwrap();

    // Close the loan
    let response = client
        .put(format!("{}/book-loans/{}", BASE_URL, loan_id))
        .json(&json!({
            "id": loan_id,
            "memberId": member_id,
            "bookId": book_id,
            "dueDate": loan["dueDate"],
            "returnedTime": "2099-01-02T00:00:00Z",
            "version": loan["version"]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let returned: Value = response.json().await.expect("Failed to parse response");
    assert!(returned["returnedTime"].is_string());

    // Altering the returned time again is rejected
    let response = client
        .put(format!("{}/book-loans/{}", BASE_URL, loan_id))
        .json(&json!({
            "id": loan_id,
            "memberId": member_id,
            "bookId": book_id,
            "dueDate": loan["dueDate"],
            "returnedTime": "2099-06-01T00:00:00Z",
            "version": returned["version"]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    // The returned loan is no longer outstanding
    let outstanding: Value = client
        .get(format!(
            "{}/members/{}/loans?outstandingOnly=true",
            BASE_URL, member_id
        ))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(outstanding.as_array().unwrap().is_empty());

    // But still listed when return status is not filtered
    let all_loans: Value = client
        .get(format!("{}/members/{}/loans", BASE_URL, member_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let all_loans = all_loans.as_array().unwrap();
    assert_eq!(all_loans.len(), 1);
    assert_eq!(all_loans[0]["id"].as_str().unwrap(), loan_id);
    assert!(all_loans[0]["returnedTime"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_checkout_with_past_due_date_returns_400() {
    let client = Client::new();
    let member = create_member(&client, "Late", "Starter").await;
    let book = create_book(&client, "Already Late").await;

    let response = client
        .post(format!("{}/book-loans", BASE_URL))
        .json(&json!({
            "memberId": member["id"],
            "bookId": book["id"],
            "dueDate": "2000-01-01T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
