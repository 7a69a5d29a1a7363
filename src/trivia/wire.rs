//! Provider JSON shapes and their conversion into model values.

use crate::quiz::model::{Category, Question};
use crate::trivia::entities;
use crate::trivia::error::FetchError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CategoryList {
    #[serde(alias = "trivia_categories")]
    categories: Vec<CategoryRecord>,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct QuestionBatch {
    #[serde(default)]
    response_code: u32,
    #[serde(default)]
    results: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
}

impl From<CategoryRecord> for Category {
    fn from(r: CategoryRecord) -> Self {
        Category {
            id: r.id,
            name: entities::decode(&r.name),
        }
    }
}

impl From<QuestionRecord> for Question {
    fn from(r: QuestionRecord) -> Self {
        Question {
            text: entities::decode(&r.question),
            correct_answer: entities::decode(&r.correct_answer),
            incorrect_answers: r
                .incorrect_answers
                .iter()
                .map(|a| entities::decode(a))
                .collect(),
            category: r.category.as_deref().map(entities::decode),
            difficulty: r.difficulty,
        }
    }
}

pub fn decode_categories(body: &str) -> Result<Vec<Category>, FetchError> {
    let list: CategoryList = serde_json::from_str(body)?;
    Ok(list.categories.into_iter().map(Category::from).collect())
}

/// Decode a question batch. A non-zero `response_code` is the provider
/// refusing the query, even when the body is otherwise well formed.
pub fn decode_questions(body: &str) -> Result<Vec<Question>, FetchError> {
    let batch: QuestionBatch = serde_json::from_str(body)?;
    if batch.response_code != 0 {
        return Err(FetchError::Rejected {
            code: batch.response_code,
        });
    }
    Ok(batch.results.into_iter().map(Question::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_categories_opentdb_envelope() {
        let body = r#"{"trivia_categories":[{"id":9,"name":"General Knowledge"},{"id":10,"name":"Entertainment: Books"}]}"#;
        let categories = decode_categories(body).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(
            categories[0],
            Category {
                id: 9,
                name: "General Knowledge".into()
            }
        );
    }

    #[test]
    fn test_decode_categories_plain_envelope() {
        let body = r#"{"categories":[{"id":21,"name":"Sports"}]}"#;
        let categories = decode_categories(body).unwrap();
        assert_eq!(categories[0].id, 21);
    }

    #[test]
    fn test_decode_categories_malformed() {
        assert!(matches!(
            decode_categories(r#"{"trivia_categories":[{"id":"nine"}]}"#),
            Err(FetchError::Malformed(_))
        ));
        assert!(matches!(
            decode_categories("<html>"),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_questions_decodes_entities() {
        let body = r#"{
            "response_code": 0,
            "results": [{
                "type": "multiple",
                "difficulty": "easy",
                "category": "Science &amp; Nature",
                "question": "What is the chemical formula for &quot;ozone&quot;?",
                "correct_answer": "O3",
                "incorrect_answers": ["O2", "CO2", "H2O"]
            }]
        }"#;
        let questions = decode_questions(body).unwrap();
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.text, "What is the chemical formula for \"ozone\"?");
        assert_eq!(q.correct_answer, "O3");
        assert_eq!(q.incorrect_answers, vec!["O2", "CO2", "H2O"]);
        assert_eq!(q.category.as_deref(), Some("Science & Nature"));
        assert_eq!(q.difficulty.as_deref(), Some("easy"));
    }

    #[test]
    fn test_decode_questions_without_response_code() {
        let body = r#"{"results":[{"question":"Q","correct_answer":"A","incorrect_answers":["B"]}]}"#;
        let questions = decode_questions(body).unwrap();
        assert_eq!(questions[0].category, None);
    }

    #[test]
    fn test_decode_questions_rejected() {
        let body = r#"{"response_code":5,"results":[]}"#;
        assert_eq!(
            decode_questions(body),
            Err(FetchError::Rejected { code: 5 })
        );
    }

    #[test]
    fn test_decode_questions_missing_field() {
        let body = r#"{"results":[{"question":"Q","incorrect_answers":[]}]}"#;
        assert!(matches!(
            decode_questions(body),
            Err(FetchError::Malformed(_))
        ));
    }
}
