mod common;

use anyhow::{Context, Result};
use reqwest::{header::LOCATION, StatusCode};
use serde_json::{json, Value};

/// POST a district and return the path from `Location`
async fn add_district(server: &common::TestServer, token: &str, body: &Value) -> Result<String> {
    let res = server
        .client
        .post(server.url("/districts"))
        .bearer_auth(token)
        .json(body)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let location = res
        .headers()
        .get(LOCATION)
        .context("Location header missing")?
        .to_str()?
        .to_string();
    assert_eq!(res.text().await?, "District Successfully Added");
    Ok(location)
}

fn without_id(mut district: Value) -> Value {
    if let Some(fields) = district.as_object_mut() {
        fields.remove("districtId");
    }
    district
}

#[tokio::test]
async fn added_district_reads_back_with_same_fields() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token().await?;
    let body = common::district_body("Bagalkot", 2);

    let location = add_district(&server, &token, &body).await?;

    let res = server.get(&location, &token).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let stored = res.json::<Value>().await?;
    assert!(stored["districtId"].is_i64());
    assert_eq!(without_id(stored), body);
    Ok(())
}

#[tokio::test]
async fn update_overwrites_every_field() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token().await?;
    let location = add_district(&server, &token, &common::district_body("Bagalkot", 2)).await?;

    let replacement = json!({
        "districtName": "Nadia",
        "stateId": 3,
        "cases": 9628,
        "cured": 6524,
        "active": 3000,
        "deaths": 104
    });
    let res = server
        .client
        .put(server.url(&location))
        .bearer_auth(&token)
        .json(&replacement)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, "District Details Updated");

    let stored = server.get(&location, &token).await?.json::<Value>().await?;
    assert_eq!(without_id(stored), replacement);
    Ok(())
}

#[tokio::test]
async fn update_with_missing_field_is_rejected_and_leaves_row() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token().await?;
    let body = common::district_body("Bagalkot", 2);
    let location = add_district(&server, &token, &body).await?;

    let res = server
        .client
        .put(server.url(&location))
        .bearer_auth(&token)
        .json(&json!({ "districtName": "Partial" }))
        .send()
        .await?;
    assert!(res.status().is_client_error(), "got {}", res.status());

    let stored = server.get(&location, &token).await?.json::<Value>().await?;
    assert_eq!(without_id(stored), body);
    Ok(())
}

#[tokio::test]
async fn deleted_district_reads_back_as_null() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token().await?;
    let location = add_district(&server, &token, &common::district_body("Bagalkot", 2)).await?;

    let res = server
        .client
        .delete(server.url(&location))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, "District Removed");

    let res = server.get(&location, &token).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, Value::Null);
    Ok(())
}

#[tokio::test]
async fn deleting_unknown_district_still_succeeds() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token().await?;

    let res = server
        .client
        .delete(server.url("/districts/4242"))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, "District Removed");
    Ok(())
}

#[tokio::test]
async fn district_may_point_at_unknown_state() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token().await?;
    let body = common::district_body("Nowhere", 77);

    let location = add_district(&server, &token, &body).await?;
    let stored = server.get(&location, &token).await?.json::<Value>().await?;
    assert_eq!(stored["stateId"], 77);
    Ok(())
}

#[tokio::test]
async fn writes_require_a_token() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.token().await?;
    let location = add_district(&server, &token, &common::district_body("Bagalkot", 2)).await?;

    let res = server.client.delete(server.url(&location)).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = server
        .client
        .put(server.url(&location))
        .json(&common::district_body("Hijacked", 1))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let stored = server.get(&location, &token).await?.json::<Value>().await?;
    assert_eq!(stored["districtName"], "Bagalkot");
    Ok(())
}
