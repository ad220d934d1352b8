//! Tests for the node executor

use super::*;
use crate::credentials::Credentials;
use crate::error::Error;
use crate::fetcher::{EvaluationOptions, EVALUATIONS_PATH, SUMMARY_PATH};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn node_for(server: &MockServer) -> WeValuNode {
    let credentials = Credentials::new("test-key", Some(&server.uri())).unwrap();
    WeValuNode::new(EvaluationFetcher::new(credentials).unwrap())
}

fn node_for_unreachable() -> WeValuNode {
    let credentials = Credentials::new("test-key", Some("http://127.0.0.1:1")).unwrap();
    WeValuNode::new(EvaluationFetcher::new(credentials).unwrap())
}

fn json_of(items: &[NodeItem]) -> Vec<Value> {
    items.iter().map(|i| Value::Object(i.json.clone())).collect()
}

/// A context with different parameters per item
struct PerItemContext {
    parameters: Vec<NodeParameters>,
    continue_on_fail: bool,
}

impl ExecuteContext for PerItemContext {
    fn item_count(&self) -> usize {
        self.parameters.len()
    }

    fn parameters(&self, item_index: usize) -> crate::error::Result<NodeParameters> {
        Ok(self.parameters[item_index].clone())
    }

    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }
}

// ============================================================================
// Parameter Tests
// ============================================================================

#[test_case("getAll", Some(Operation::GetAll) ; "get all")]
#[test_case("getSummary", Some(Operation::GetSummary) ; "get summary")]
#[test_case("delete", None ; "unknown")]
#[test_case("GETALL", None ; "case sensitive")]
fn test_operation_parse(raw: &str, expected: Option<Operation>) {
    assert_eq!(raw.parse::<Operation>().ok(), expected);
}

#[test]
fn test_resource_parse() {
    assert_eq!("evaluation".parse::<Resource>().unwrap(), Resource::Evaluation);
    assert!(matches!(
        "employee".parse::<Resource>(),
        Err(Error::UnknownResource { .. })
    ));
}

#[test]
fn test_parameters_defaults() {
    let params: NodeParameters = serde_json::from_value(json!({})).unwrap();
    assert_eq!(params, NodeParameters::default());
    assert_eq!(params.resource, "evaluation");
    assert_eq!(params.operation, "getAll");
    assert!(!params.return_all);
    assert_eq!(params.limit, 50);
}

#[test]
fn test_parameters_from_host_json() {
    let params: NodeParameters = serde_json::from_value(json!({
        "operation": "getAll",
        "returnAll": true,
        "options": {"departmentId": "d-1", "iteration": 3, "offset": 20}
    }))
    .unwrap();

    assert!(params.return_all);
    assert_eq!(
        params.options,
        EvaluationOptions::new().department("d-1").iteration(3).offset(20)
    );
}

#[test]
fn test_zero_limit_rejected() {
    let params = NodeParameters::get_all(false, 0, EvaluationOptions::new());
    assert!(matches!(
        params.validated_limit(),
        Err(Error::InvalidParameter { .. })
    ));
}

#[test]
fn test_error_item_shape() {
    let item = NodeItem::error(&Error::api("boom"), 2);
    assert!(item.is_error());
    assert_eq!(
        Value::Object(item.json),
        json!({"error": "WeValu API: boom", "itemIndex": 2})
    );
    assert_eq!(item.paired_item, Some(2));
}

// ============================================================================
// Execution Tests
// ============================================================================

#[tokio::test]
async fn test_get_all_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(EVALUATIONS_PATH))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"evaluations": [{"id": "1"}, {"id": "2"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = StaticContext::new(NodeParameters::get_all(false, 10, EvaluationOptions::new()));
    let items = node_for(&server).execute(&ctx).await.unwrap();

    assert_eq!(json_of(&items), vec![json!({"id": "1"}), json!({"id": "2"})]);
    assert!(items.iter().all(|i| i.paired_item == Some(0)));
}

#[tokio::test]
async fn test_get_all_return_all() {
    let server = MockServer::start().await;

    for (offset, count) in [(0usize, 100usize), (100, 100), (200, 30)] {
        let evaluations: Vec<Value> = (offset..offset + count)
            .map(|i| json!({"id": i.to_string()}))
            .collect();
        Mock::given(method("GET"))
            .and(path(EVALUATIONS_PATH))
            .and(query_param("offset", offset.to_string()))
            .and(query_param("limit", "100"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"evaluations": evaluations}})),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let ctx = StaticContext::new(NodeParameters::get_all(true, 5, EvaluationOptions::new()));
    let items = node_for(&server).execute(&ctx).await.unwrap();

    assert_eq!(items.len(), 230);
    assert_eq!(items[230 - 1].json["id"], json!("229"));
}

#[tokio::test]
async fn test_get_summary_emits_one_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SUMMARY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"summary": {"totalEvaluations": 5, "avgPerformance": "3.2"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = StaticContext::new(NodeParameters::get_summary());
    let items = node_for(&server).execute(&ctx).await.unwrap();

    assert_eq!(
        json_of(&items),
        vec![json!({"summary": {"totalEvaluations": 5, "avgPerformance": "3.2"}})]
    );
}

#[tokio::test]
async fn test_summary_with_evaluations_field_is_not_flattened() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SUMMARY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": {"totalEvaluations": 1}, "evaluations": [{"id": "1"}]
        })))
        .mount(&server)
        .await;

    let ctx = StaticContext::new(NodeParameters::get_summary());
    let items = node_for(&server).execute(&ctx).await.unwrap();

    assert_eq!(items.len(), 1);
    assert!(items[0].json.contains_key("summary"));
}

#[tokio::test]
async fn test_runs_once_per_item() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SUMMARY_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"summary": {"totalEvaluations": 1}})),
        )
        .expect(3)
        .mount(&server)
        .await;

    let ctx = StaticContext::new(NodeParameters::get_summary()).with_items(3);
    let items = node_for(&server).execute(&ctx).await.unwrap();

    let paired: Vec<Option<usize>> = items.iter().map(|i| i.paired_item).collect();
    assert_eq!(paired, vec![Some(0), Some(1), Some(2)]);
}

#[tokio::test]
async fn test_unknown_operation_fails_before_request() {
    let server = MockServer::start().await;

    let params = NodeParameters {
        operation: "delete".to_string(),
        ..Default::default()
    };
    let err = node_for(&server)
        .execute(&StaticContext::new(params))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "WeValu API: Unknown operation 'delete'");
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_zero_items_produce_nothing() {
    let ctx = StaticContext::new(NodeParameters::get_summary()).with_items(0);
    let items = node_for_unreachable().execute(&ctx).await.unwrap();
    assert!(items.is_empty());
}

// ============================================================================
// Failure Handling Tests
// ============================================================================

#[tokio::test]
async fn test_transport_failure_aborts() {
    let ctx = StaticContext::new(NodeParameters::get_summary()).with_items(2);
    let err = node_for_unreachable().execute(&ctx).await.unwrap_err();

    assert!(matches!(err, Error::Api { .. }));
}

#[tokio::test]
async fn test_transport_failure_continue_on_fail() {
    let ctx = StaticContext::new(NodeParameters::get_summary())
        .with_items(2)
        .with_continue_on_fail(true);
    let items = node_for_unreachable().execute(&ctx).await.unwrap();

    assert_eq!(items.len(), 2);
    for (index, item) in items.iter().enumerate() {
        assert!(item.is_error());
        assert_eq!(item.json["itemIndex"], json!(index));
        assert!(item.json["error"]
            .as_str()
            .unwrap()
            .starts_with("WeValu API: "));
    }
}

#[tokio::test]
async fn test_failing_middle_item() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(EVALUATIONS_PATH))
        .and(query_param("departmentId", "broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(EVALUATIONS_PATH))
        .and(query_param("departmentId", "ok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "a"}])))
        .mount(&server)
        .await;

    let params = |department: &str| {
        NodeParameters::get_all(false, 10, EvaluationOptions::new().department(department))
    };
    let parameters = vec![params("ok"), params("broken"), params("ok")];

    let ctx = PerItemContext {
        parameters: parameters.clone(),
        continue_on_fail: true,
    };
    let items = node_for(&server).execute(&ctx).await.unwrap();
    assert_eq!(
        json_of(&items),
        vec![
            json!({"id": "a"}),
            json!({"error": "WeValu API: HTTP 500: boom", "itemIndex": 1}),
            json!({"id": "a"}),
        ]
    );

    let ctx = PerItemContext {
        parameters,
        continue_on_fail: false,
    };
    let err = node_for(&server).execute(&ctx).await.unwrap_err();
    assert_eq!(err.to_string(), "WeValu API: HTTP 500: boom");
}

#[tokio::test]
async fn test_unknown_operation_continue_on_fail() {
    let params = NodeParameters {
        operation: "update".to_string(),
        ..Default::default()
    };
    let ctx = StaticContext::new(params).with_continue_on_fail(true);
    let items = node_for_unreachable().execute(&ctx).await.unwrap();

    assert_eq!(
        json_of(&items),
        vec![json!({"error": "WeValu API: Unknown operation 'update'", "itemIndex": 0})]
    );
}
