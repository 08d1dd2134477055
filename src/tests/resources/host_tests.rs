use crate::{
    ApiConfig, DashboardError, IcingaApiClient, IcingaUrl, MonitoringDataSource, RawHostRecord,
    core::infrastructure::api_client::METHOD_OVERRIDE_HEADER,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn create_test_client(server_url: &str) -> IcingaApiClient {
    IcingaApiClient::new(ApiConfig::new(IcingaUrl::new_unchecked(server_url))).unwrap()
}

#[tokio::test]
async fn test_hosts_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/objects/hosts"))
        .and(header(METHOD_OVERRIDE_HEADER, "GET"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "attrs": ["name", "state", "state_type", "downtime_depth", "acknowledgement"],
            "joins": [],
            "filter": "host.state != 0 && host.downtime_depth == 0 && host.acknowledgement == 0 && host.state_type >= 1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {
                    "attrs": {
                        "acknowledgement": 0.0,
                        "downtime_depth": 0.0,
                        "name": "db02",
                        "state": 1.0,
                        "state_type": 1.0
                    },
                    "joins": {},
                    "meta": {},
                    "name": "db02",
                    "type": "Host"
                },
                {
                    "attrs": {
                        "acknowledgement": 0,
                        "downtime_depth": 0,
                        "name": "backup01",
                        "state": 1,
                        "state_type": 1
                    },
                    "joins": {},
                    "meta": {},
                    "name": "backup01",
                    "type": "Host"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let hosts = client.fetch_hosts(1).await.unwrap();
    assert_eq!(
        hosts,
        vec![
            RawHostRecord {
                name: "db02".to_string(),
                state: 1,
                state_type: 1,
            },
            RawHostRecord {
                name: "backup01".to_string(),
                state: 1,
                state_type: 1,
            },
        ]
    );
}

#[tokio::test]
async fn test_hosts_empty() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/objects/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let hosts = client.fetch_hosts(0).await.unwrap();
    assert!(hosts.is_empty());
}

#[tokio::test]
async fn test_hosts_malformed_record_fails_the_call() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/objects/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"name": "db02", "attrs": {"state": "down", "state_type": 1}}]
        })))
        .mount(&mock_server)
        .await;

    let result = client.fetch_hosts(0).await;
    assert!(matches!(result, Err(DashboardError::Parse(_))));
}

#[tokio::test]
async fn test_hosts_server_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v1/objects/hosts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let result = client.fetch_hosts(0).await;
    assert!(matches!(result, Err(DashboardError::Http { status: 500, .. })));
}
