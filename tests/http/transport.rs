use reqwest::StatusCode;
use serde_json::{json, Value};

use fitscore::{ShoeId, ShoeRepository};

use crate::support::start_empty;

#[tokio::test]
async fn empty_list_is_an_empty_array() {
    let (_store, base) = start_empty().await;
    let client = reqwest::Client::new();

    for path in ["/shoes", "/"] {
        let resp = client.get(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.text().await.unwrap(), "[]");
    }
}

#[tokio::test]
async fn get_missing_shoe_is_404() {
    let (_store, base) = start_empty().await;
    let resp = reqwest::get(format!("{base}/shoes/11")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Shoe not found");
    assert_eq!(body["result"], "error");
}

#[tokio::test]
async fn post_creates_and_rates() {
    let (_store, base) = start_empty().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/shoes"))
        .json(&json!({ "shoe": "AJ 1 Mid Cool Blue", "trueToSizeVal": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "id": 1,
            "shoe": "AJ 1 Mid Cool Blue",
            "trueToSizeData": [5],
            "trueToSizeCalculation": 5.0,
        })
    );
}

#[tokio::test]
async fn posts_for_case_variants_share_a_record() {
    let (_store, base) = start_empty().await;
    let client = reqwest::Client::new();

    for (name, value) in [("Air Force 1", 2), ("AIR FORCE 1", 4), ("air force 1", 3)] {
        let resp = client
            .post(format!("{base}/shoes"))
            .json(&json!({ "shoe": name, "trueToSizeVal": value }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = client.get(format!("{base}/shoes/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["shoe"], "Air Force 1");
    assert_eq!(body["trueToSizeData"], json!([2, 4, 3]));
    assert_eq!(body["trueToSizeCalculation"], 3.0);
}

#[tokio::test]
async fn malformed_body_is_400() {
    let (store, base) = start_empty().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/shoes"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid request payload");
    assert!(store.list().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_values_are_422() {
    let (store, base) = start_empty().await;
    let client = reqwest::Client::new();

    let cases = [
        json!({ "shoe": "AJ 1 Mid Cool Blue", "trueToSizeVal": 6 }),
        json!({ "shoe": "AJ 1 Mid Cool Blue", "trueToSizeVal": 0 }),
        json!({ "shoe": "AJ 1 Mid Cool Blue" }),
        json!({ "shoe": "AJ", "trueToSizeVal": 3 }),
        json!({ "trueToSizeVal": 3 }),
    ];
    for payload in cases {
        let resp = client
            .post(format!("{base}/shoes"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{payload}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["result"], "error");
    }

    assert!(store.list().unwrap().is_empty());
}

#[tokio::test]
async fn get_existing_shoe() {
    let (store, base) = start_empty().await;
    store.rate("Shoe 0", 1).unwrap();

    let resp = reqwest::get(format!("{base}/shoes/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["shoe"], "Shoe 0");
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let (_store, base) = start_empty().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/shoes/abc")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = client.delete(format!("{base}/shoes/abc")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid shoe ID");
}

#[tokio::test]
async fn delete_one_of_five() {
    let (store, base) = start_empty().await;
    for i in 0..5 {
        store.rate(&format!("Shoe {i}"), 3).unwrap();
    }
    let client = reqwest::Client::new();

    let resp = client.delete(format!("{base}/shoes/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "result": "success" }));

    assert_eq!(store.list().unwrap().len(), 4);
    assert!(store.get(ShoeId::new(1)).is_err());

    let resp = client.delete(format!("{base}/shoes/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client.get(format!("{base}/shoes")).send().await.unwrap();
    let body: Value = resp.json().await.unwrap();
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|shoe| shoe["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3, 4, 5]);
}
