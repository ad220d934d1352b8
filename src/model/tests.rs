//! Tests for the typed payload views

use super::*;
use crate::types::into_object;
use serde_json::json;

#[test]
fn test_evaluation_from_record() {
    let record = into_object(json!({
        "id": "e-1",
        "evaluatorName": "Ada",
        "evaluatedName": "Grace",
        "year": 2025,
        "iteration": 2,
        "evaluationResponse": {
            "actWithCredibility": 4,
            "beingResilient": 3,
            "enforceSuccessfully": 5,
            "designNew": 2,
            "performance": 3.5,
            "potential": 4,
            "comment": {"personality": "steady"},
            "mboRating": [{"mboId": "m1", "name": "Ship it", "rating": 4}]
        },
        "createdAt": "2025-01-01T00:00:00Z"
    }));

    let evaluation = Evaluation::from_record(&record).unwrap();
    assert_eq!(evaluation.id.as_deref(), Some("e-1"));
    assert_eq!(evaluation.evaluated_name.as_deref(), Some("Grace"));
    assert_eq!(evaluation.year, Some(2025));
    assert_eq!(evaluation.performance(), Some(3.5));
    assert_eq!(evaluation.potential(), Some(4.0));

    let response = evaluation.evaluation_response.unwrap();
    assert_eq!(
        response.personality_interaction.act_with_credibility,
        Some(4.0)
    );
    assert_eq!(
        response.leadership_organization.enforce_successfully,
        Some(5.0)
    );
    assert_eq!(response.strategy_implementation.design_new, Some(2.0));
    assert_eq!(response.ratings(), vec![4.0, 3.0, 5.0, 2.0]);
    assert_eq!(response.average_rating(), Some(3.5));
    assert_eq!(
        response.comment.unwrap().personality.as_deref(),
        Some("steady")
    );
    assert_eq!(response.mbo_rating[0].mbo_id.as_deref(), Some("m1"));
}

#[test]
fn test_evaluation_from_sparse_record() {
    let evaluation = Evaluation::from_record(&into_object(json!({"id": "1"}))).unwrap();
    assert_eq!(evaluation.id.as_deref(), Some("1"));
    assert!(evaluation.performance().is_none());
}

#[test]
fn test_average_rating_without_answers() {
    assert!(EvaluationResponse::default().average_rating().is_none());
}

#[test]
fn test_summary_from_record() {
    let record = into_object(json!({
        "summary": {
            "totalEvaluations": 5,
            "avgPerformance": "3.40",
            "avgPotential": 3.8,
            "iterations": [
                {"iteration": 1, "count": 3, "avgPerformance": 3.2, "avgPotential": 3.5}
            ]
        }
    }));

    let data = SummaryData::from_record(&record).unwrap();
    assert_eq!(data.summary.total_evaluations, 5);
    assert_eq!(
        data.summary.avg_performance.as_ref().and_then(Average::as_f64),
        Some(3.4)
    );
    assert_eq!(
        data.summary.avg_potential.as_ref().and_then(Average::as_f64),
        Some(3.8)
    );
    assert_eq!(data.summary.iterations[0].count, 3);
    assert_eq!(
        data.summary.avg_performance.unwrap().to_string(),
        "3.40"
    );
}

#[test]
fn test_summary_requires_summary_field() {
    assert!(SummaryData::from_record(&into_object(json!({"id": "1"}))).is_err());
}
