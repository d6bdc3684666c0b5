use crate::common;
use degiro_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

fn first_days_of_2026() -> AccountOverviewRequest {
    AccountOverviewRequest::new(
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_get_account_overview() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let mut query = common::session_params();
    query.push(Matcher::UrlEncoded("fromDate".into(), "01/01/2026".into()));
    query.push(Matcher::UrlEncoded("toDate".into(), "31/01/2026".into()));
    let overview_mock = server
        .mock("GET", "/portfolio-reports/secure/v6/accountoverview")
        .match_query(Matcher::AllOf(query))
        .with_status(200)
        .with_body(
            json!({"data": {"cashMovements": [
                {
                    "date": "2026-01-05T10:00:00+01:00",
                    "valueDate": "2026-01-05T10:00:00+01:00",
                    "productId": 71981,
                    "description": "Buy 1 Example",
                    "currency": "EUR",
                    "change": -10.5,
                    "type": "TRANSACTION"
                },
                {
                    "date": "2026-01-10T09:00:00+01:00",
                    "valueDate": "2026-01-09T09:00:00+01:00",
                    "description": "Deposit"
                }
            ]}})
            .to_string(),
        )
        .create_async()
        .await;

    let overview = client
        .get_account_overview(&first_days_of_2026())
        .await
        .unwrap();

    overview_mock.assert_async().await;
    assert_eq!(overview.len(), 2);
    assert_eq!(overview.cash_movements[0].product_id, Some(71981));
    assert_eq!(overview.cash_movements[0].change, Some(-10.5));
    assert!(overview.cash_movements[1].currency.is_none());

    let lines = cash_movement_lines(&overview.cash_movements[1]);
    assert!(lines.contains(&"currency: unknown".to_string()));
}

#[tokio::test]
async fn test_get_account_overview_empty() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;
    let _overview = server
        .mock("GET", "/portfolio-reports/secure/v6/accountoverview")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"data": {}}).to_string())
        .create_async()
        .await;

    let overview = client
        .get_account_overview(&first_days_of_2026())
        .await
        .unwrap();
    assert!(overview.is_empty());
}

#[tokio::test]
async fn test_get_account_overview_unauthorized() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;
    let _overview = server
        .mock("GET", "/portfolio-reports/secure/v6/accountoverview")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let result = client.get_account_overview(&first_days_of_2026()).await;
    assert!(matches!(result, Err(AppError::Unauthorized)));
}

#[tokio::test]
async fn test_get_client_details() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;
    let _details = server
        .mock("GET", "/pa/secure/client")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({"data": {"intAccount": common::INT_ACCOUNT, "id": 42, "username": "user"}})
                .to_string(),
        )
        .create_async()
        .await;

    let details = client.get_client_details().await.unwrap();
    assert_eq!(details.int_account, common::INT_ACCOUNT);
    assert_eq!(details.id, Some(42));
}
