use serde::Deserialize;

use crate::configuration::ApplicationSettings;
use crate::db::{Answer, QuestionFields};

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub emoji: String,
}

/// Body of both create and update; `answer` is checked here before reaching the store.
#[derive(Debug, Deserialize)]
pub struct QuestionPayload {
    pub question: String,
    pub a_var: String,
    pub b_var: String,
    pub c_var: String,
    pub d_var: String,
    pub answer: String,
    pub category_id: i32,
}

impl TryFrom<QuestionPayload> for QuestionFields {
    type Error = ApiError;

    fn try_from(payload: QuestionPayload) -> Result<Self, Self::Error> {
        let answer: Answer = payload.answer.parse().map_err(|_| ApiError::InvalidAnswer)?;
        Ok(QuestionFields {
            question: payload.question,
            a_var: payload.a_var,
            b_var: payload.b_var,
            c_var: payload.c_var,
            d_var: payload.d_var,
            answer,
            category_id: payload.category_id,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Copy)]
pub struct ListLimits {
    pub default: i64,
    pub max: i64,
}

impl ListLimits {
    pub fn resolve(&self, requested: Option<i64>) -> i64 {
        requested.unwrap_or(self.default).clamp(0, self.max)
    }
}

impl From<&ApplicationSettings> for ListLimits {
    fn from(settings: &ApplicationSettings) -> Self {
        Self {
            default: settings.default_list_limit,
            max: settings.max_list_limit.max(0),
        }
    }
}
