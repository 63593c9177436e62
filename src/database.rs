use crate::error::{AppError, AppResult};
use crate::models::{Category, CreateQuestionRequest, Question};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// The six categories the original deployment ships with.
const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub type DbConnection = Arc<Mutex<Connection>>;

pub struct Database {
    connection: DbConnection,
}

impl Database {
    pub fn new(db_path: &Path) -> AppResult<Self> {
        // Ensure the database directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;

        let database = Database {
            connection: Arc::new(Mutex::new(conn)),
        };

        database.run_migrations()?;

        Ok(database)
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|e| AppError::Internal(format!("Failed to acquire database lock: {e}")))
    }

    fn run_migrations(&self) -> AppResult<()> {
        let conn = self.lock()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL
            )",
            [],
        )?;

        // questions.category is a plain integer column: the application does
        // not enforce that it references an existing category row.
        conn.execute(
            "CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                category INTEGER NOT NULL,
                difficulty INTEGER NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)",
            [],
        )?;

        tracing::debug!("Database migrations completed");
        Ok(())
    }

    /// Inserts the stock category set when the table is empty. Returns the
    /// number of categories inserted.
    pub fn seed_default_categories(&self) -> AppResult<usize> {
        let conn = self.lock()?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(0);
        }

        for kind in DEFAULT_CATEGORIES {
            conn.execute("INSERT INTO categories (type) VALUES (?)", [kind])?;
        }

        Ok(DEFAULT_CATEGORIES.len())
    }

    pub fn all_categories(&self) -> AppResult<Vec<Category>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id")?;
        let category_iter = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                kind: row.get(1)?,
            })
        })?;

        let mut categories = Vec::new();
        for category in category_iter {
            categories.push(category?);
        }

        Ok(categories)
    }

    pub fn create_category(&self, kind: &str) -> AppResult<i64> {
        let conn = self.lock()?;

        conn.execute("INSERT INTO categories (type) VALUES (?)", [kind])?;
        Ok(conn.last_insert_rowid())
    }

    pub fn all_questions(&self) -> AppResult<Vec<Question>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )?;
        let question_iter = stmt.query_map([], Self::question_from_row)?;

        let mut questions = Vec::new();
        for question in question_iter {
            questions.push(question?);
        }

        Ok(questions)
    }

    pub fn question_by_id(&self, id: i64) -> AppResult<Question> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
        )?;

        let question = stmt
            .query_row([id], Self::question_from_row)
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => AppError::NotFound,
                _ => AppError::Database(e),
            })?;

        Ok(question)
    }

    pub fn questions_by_category(&self, category_id: i64) -> AppResult<Vec<Question>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT id, question, answer, category, difficulty FROM questions
             WHERE category = ? ORDER BY id",
        )?;
        let question_iter = stmt.query_map([category_id], Self::question_from_row)?;

        let mut questions = Vec::new();
        for question in question_iter {
            questions.push(question?);
        }

        Ok(questions)
    }

    /// Case-insensitive substring match against the question text only.
    /// SQLite's LIKE is case-insensitive for ASCII, matching the original
    /// service's ILIKE semantics.
    pub fn search_questions(&self, term: &str) -> AppResult<Vec<Question>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare(
            "SELECT id, question, answer, category, difficulty FROM questions
             WHERE question LIKE '%' || ? || '%' ORDER BY id",
        )?;
        let question_iter = stmt.query_map([term], Self::question_from_row)?;

        let mut questions = Vec::new();
        for question in question_iter {
            questions.push(question?);
        }

        Ok(questions)
    }

    pub fn create_question(&self, request: &CreateQuestionRequest) -> AppResult<i64> {
        let conn = self.lock()?;

        // Absent fields insert as NULL and fail the NOT NULL constraints.
        conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES (?, ?, ?, ?)",
            params![
                request.question,
                request.answer,
                request.category,
                request.difficulty,
            ],
        )?;

        let id = conn.last_insert_rowid();
        tracing::info!("Created question {id}");
        Ok(id)
    }

    pub fn delete_question(&self, id: i64) -> AppResult<()> {
        let conn = self.lock()?;

        let rows_affected = conn.execute("DELETE FROM questions WHERE id = ?", [id])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        tracing::info!("Deleted question {id}");
        Ok(())
    }

    fn question_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Question> {
        Ok(Question {
            id: row.get(0)?,
            question: row.get(1)?,
            answer: row.get(2)?,
            category: row.get(3)?,
            difficulty: row.get(4)?,
        })
    }
}
