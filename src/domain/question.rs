use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// A question as submitted by a client, before the store has assigned an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

impl Question {
    /// Case-insensitive substring match against the question text.
    pub fn matches(&self, term: &str) -> bool {
        self.question.to_lowercase().contains(&term.to_lowercase())
    }
}
