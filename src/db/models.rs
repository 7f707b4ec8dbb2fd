use scylla::FromRow;

use crate::domain::{Category, Question};

// Database row model for the questions table
#[derive(Debug, Clone, FromRow)]
pub struct QuestionRow {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl QuestionRow {
    pub fn from_question(question: &Question) -> Self {
        QuestionRow {
            id: question.id,
            question: Some(question.question.clone()),
            answer: Some(question.answer.clone()),
            category: Some(question.category),
            difficulty: Some(question.difficulty),
        }
    }

    pub fn to_question(self) -> Question {
        Question {
            id: self.id,
            question: self.question.unwrap_or_default(),
            answer: self.answer.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            difficulty: self.difficulty.unwrap_or_default(),
        }
    }
}

// Database row model for the categories table
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: i32,
    pub kind: Option<String>,
}

impl CategoryRow {
    pub fn to_category(self) -> Category {
        Category {
            id: self.id,
            kind: self.kind.unwrap_or_default(),
        }
    }
}
