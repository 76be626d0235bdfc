//! Content wire types
//!
//! Record shapes for canned chatbot responses and timeline entries, plus the
//! request bodies accepted by the create endpoints.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A canned answer keyed by a trigger phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: u64,
    pub query: String,
    pub response: String,
    pub category: String,
}

/// One entry of the chatbot history timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRecord {
    pub id: u64,
    /// Display label, not necessarily numeric ("Now")
    pub year: String,
    pub title: String,
    pub description: String,
    pub order: i64,
}

/// Request body for creating a response record
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResponseRequest {
    pub query: String,
    pub response: String,
    pub category: String,
}

impl CreateResponseRequest {
    pub fn new(
        query: impl Into<String>,
        response: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            response: response.into(),
            category: category.into(),
        }
    }

    /// All three fields are required and must be non-empty
    pub fn validate(&self) -> Result<()> {
        require_non_empty("query", &self.query)?;
        require_non_empty("response", &self.response)?;
        require_non_empty("category", &self.category)
    }
}

/// Request body for creating a timeline record
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTimelineRequest {
    pub year: String,
    pub title: String,
    pub description: String,
    pub order: i64,
}

impl CreateTimelineRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_empty("year", &self.year)?;
        require_non_empty("title", &self.title)?;
        require_non_empty("description", &self.description)
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_record_serialization() {
        let record = ResponseRecord {
            id: 3,
            query: "what is nlp".to_string(),
            response: "Natural Language Processing...".to_string(),
            category: "technology".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["query"], "what is nlp");
        assert_eq!(json["category"], "technology");
    }

    #[test]
    fn test_timeline_record_keeps_order_field_name() {
        let record = TimelineRecord {
            id: 5,
            year: "Now".to_string(),
            title: "2020s: Advanced AI Chatbots".to_string(),
            description: "LLMs".to_string(),
            order: 5,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"order\":5"));
        assert!(json.contains("\"year\":\"Now\""));
    }

    #[test]
    fn test_create_response_validation() {
        assert!(CreateResponseRequest::new("q", "r", "general").validate().is_ok());

        let err = CreateResponseRequest::new("", "r", "general")
            .validate()
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("query"));

        let err = CreateResponseRequest::new("q", "r", "").validate().unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_create_response_missing_field_fails_to_parse() {
        let result: std::result::Result<CreateResponseRequest, _> =
            serde_json::from_str(r#"{"query": "q", "response": "r"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_timeline_validation() {
        let req: CreateTimelineRequest = serde_json::from_str(
            r#"{"year": "1972", "title": "PARRY", "description": "", "order": 2}"#,
        )
        .unwrap();
        assert!(req.validate().unwrap_err().to_string().contains("description"));
    }
}
