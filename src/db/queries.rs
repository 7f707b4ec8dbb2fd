// Prepared query statements for ScyllaDB operations

// questions queries
pub const SELECT_ALL_QUESTIONS: &str = r#"
    SELECT id, question, answer, category, difficulty
    FROM questions
"#;

pub const SELECT_QUESTION: &str = r#"
    SELECT id, question, answer, category, difficulty
    FROM questions
    WHERE id = ?
"#;

pub const SELECT_QUESTIONS_BY_CATEGORY: &str = r#"
    SELECT id, question, answer, category, difficulty
    FROM questions
    WHERE category = ?
    ALLOW FILTERING
"#;

pub const SELECT_MAX_QUESTION_ID: &str = r#"
    SELECT MAX(id) FROM questions
"#;

pub const INSERT_QUESTION: &str = r#"
    INSERT INTO questions (id, question, answer, category, difficulty)
    VALUES (?, ?, ?, ?, ?)
"#;

pub const DELETE_QUESTION: &str = r#"
    DELETE FROM questions WHERE id = ?
"#;

// categories queries
pub const SELECT_ALL_CATEGORIES: &str = r#"
    SELECT id, kind FROM categories
"#;

pub const SELECT_CATEGORY: &str = r#"
    SELECT id, kind FROM categories WHERE id = ?
"#;
