//! Evaluation record

use crate::error::Result;
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One performance-review entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Evaluation {
    pub id: Option<String>,
    pub evaluator_name: Option<String>,
    pub evaluated_name: Option<String>,
    pub year: Option<i32>,
    pub iteration: Option<i64>,
    pub evaluation_response: Option<EvaluationResponse>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Evaluation {
    /// Parse an output record
    pub fn from_record(record: &JsonObject) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(record.clone()))?)
    }

    /// Overall performance rating
    pub fn performance(&self) -> Option<f64> {
        self.evaluation_response.as_ref()?.performance
    }

    /// Overall potential rating
    pub fn potential(&self) -> Option<f64> {
        self.evaluation_response.as_ref()?.potential
    }
}

/// Ratings and comments of an evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationResponse {
    #[serde(flatten)]
    pub personality_interaction: PersonalityInteraction,
    #[serde(flatten)]
    pub leadership_organization: LeadershipOrganization,
    #[serde(flatten)]
    pub strategy_implementation: StrategyImplementation,
    pub performance: Option<f64>,
    pub potential: Option<f64>,
    pub comment: Option<Comment>,
    pub mbo_rating: Vec<MboRating>,
}

impl EvaluationResponse {
    /// Every answered category rating, in category order
    pub fn ratings(&self) -> Vec<f64> {
        self.personality_interaction
            .values()
            .into_iter()
            .chain(self.leadership_organization.values())
            .chain(self.strategy_implementation.values())
            .flatten()
            .collect()
    }

    /// Mean of the answered category ratings
    pub fn average_rating(&self) -> Option<f64> {
        let ratings = self.ratings();
        if ratings.is_empty() {
            return None;
        }
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    }
}

/// "Personality & Interaction" ratings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalityInteraction {
    pub act_with_credibility: Option<f64>,
    pub being_resilient: Option<f64>,
    pub act_reliable: Option<f64>,
    pub taking_responsibility: Option<f64>,
    pub show_engagement: Option<f64>,
    pub being_open: Option<f64>,
    pub lead_authentically: Option<f64>,
    pub communicate_skillfully: Option<f64>,
    pub team_contribution: Option<f64>,
    pub solve_conflicts: Option<f64>,
    pub present_convincingly: Option<f64>,
    pub debate_confidently: Option<f64>,
}

impl PersonalityInteraction {
    fn values(&self) -> Vec<Option<f64>> {
        vec![
            self.act_with_credibility,
            self.being_resilient,
            self.act_reliable,
            self.taking_responsibility,
            self.show_engagement,
            self.being_open,
            self.lead_authentically,
            self.communicate_skillfully,
            self.team_contribution,
            self.solve_conflicts,
            self.present_convincingly,
            self.debate_confidently,
        ]
    }
}

/// "Leadership & Organization" ratings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadershipOrganization {
    pub enforce_successfully: Option<f64>,
    pub lead_appreciatively: Option<f64>,
    pub organize_independently: Option<f64>,
    pub planning_with_sense_of_confidence: Option<f64>,
    pub solving_problems: Option<f64>,
    pub proceed_analytically: Option<f64>,
}

impl LeadershipOrganization {
    fn values(&self) -> Vec<Option<f64>> {
        vec![
            self.enforce_successfully,
            self.lead_appreciatively,
            self.organize_independently,
            self.planning_with_sense_of_confidence,
            self.solving_problems,
            self.proceed_analytically,
        ]
    }
}

/// "Strategy & Implementation" ratings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategyImplementation {
    pub act_entrepreneurially: Option<f64>,
    pub design_new: Option<f64>,
    pub goal_oriented_leader: Option<f64>,
    pub follow_through_with_projects: Option<f64>,
    pub implement_efficiently: Option<f64>,
    pub solution_oriented_consulting: Option<f64>,
    pub making_decisions: Option<f64>,
    pub act_goal_oriented: Option<f64>,
    pub proceed_strategically: Option<f64>,
    pub lead_responsibly: Option<f64>,
}

impl StrategyImplementation {
    fn values(&self) -> Vec<Option<f64>> {
        vec![
            self.act_entrepreneurially,
            self.design_new,
            self.goal_oriented_leader,
            self.follow_through_with_projects,
            self.implement_efficiently,
            self.solution_oriented_consulting,
            self.making_decisions,
            self.act_goal_oriented,
            self.proceed_strategically,
            self.lead_responsibly,
        ]
    }
}

/// Free-text comments per area
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub personality: Option<String>,
    pub interaction: Option<String>,
    pub skill: Option<String>,
    pub implementation: Option<String>,
}

/// Management-by-objective rating
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MboRating {
    pub mbo_id: Option<String>,
    pub name: Option<String>,
    pub rating: Option<f64>,
}
