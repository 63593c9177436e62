use trivia_api::database::Database;
use trivia_api::models::CreateQuestionRequest;

/// Test data generator for creating consistent test fixtures
pub struct TestDataGenerator;

#[allow(dead_code)]
impl TestDataGenerator {
    /// Seed a small category set; returns the generated ids in insertion
    /// order (Science, Art, Geography).
    pub fn seed_categories(database: &Database) -> Vec<i64> {
        ["Science", "Art", "Geography"]
            .iter()
            .map(|kind| database.create_category(kind).unwrap())
            .collect()
    }

    /// Build a complete create-question body
    pub fn create_question_request(
        question: &str,
        answer: &str,
        category: i64,
        difficulty: i64,
    ) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
            difficulty: Some(difficulty),
            category: Some(category),
        }
    }

    /// Insert a single question and return its generated id
    pub fn insert_question(
        database: &Database,
        category: i64,
        question: &str,
        answer: &str,
    ) -> i64 {
        let request = Self::create_question_request(question, answer, category, 2);
        database.create_question(&request).unwrap()
    }

    /// Insert `count` generated questions into a category; returns their ids
    pub fn insert_questions(database: &Database, category: i64, count: usize) -> Vec<i64> {
        (0..count)
            .map(|i| {
                Self::insert_question(
                    database,
                    category,
                    &format!("Generated question {i}?"),
                    &format!("Generated answer {i}"),
                )
            })
            .collect()
    }
}
