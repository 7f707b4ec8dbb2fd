use rand::seq::SliceRandom;
use std::sync::Arc;

use crate::db::DbError;
use crate::domain::Question;
use crate::repositories::QuestionStore;

/// Category id meaning "draw from every category".
pub const ANY_CATEGORY: i32 = 0;

pub struct QuizService {
    questions: Arc<dyn QuestionStore>,
}

impl QuizService {
    pub fn new(questions: Arc<dyn QuestionStore>) -> Self {
        Self { questions }
    }

    /// Pick an unseen question uniformly at random from the requested
    /// category (`ANY_CATEGORY` draws from all of them). An exhausted pool
    /// yields `None`, the terminal state of a quiz round.
    pub async fn next_question(
        &self,
        previous_questions: &[i32],
        category_id: i32,
    ) -> Result<Option<Question>, DbError> {
        let pool = if category_id == ANY_CATEGORY {
            self.questions.all().await?
        } else {
            self.questions.by_category(category_id).await?
        };

        let candidates: Vec<Question> = pool
            .into_iter()
            .filter(|q| !previous_questions.contains(&q.id))
            .collect();

        Ok(candidates.choose(&mut rand::thread_rng()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewQuestion;
    use crate::repositories::MemoryStore;

    async fn seeded_service(question_count: usize) -> QuizService {
        let store = Arc::new(MemoryStore::new());

        for n in 0..question_count {
            store
                .insert(NewQuestion {
                    question: format!("Question {}", n),
                    answer: format!("Answer {}", n),
                    category: (n % 2) as i32 + 1,
                    difficulty: 1,
                })
                .await
                .unwrap();
        }

        QuizService::new(store)
    }

    #[tokio::test]
    async fn test_never_returns_a_seen_question() {
        let service = seeded_service(4).await;

        for _ in 0..20 {
            let question = service
                .next_question(&[1, 2], ANY_CATEGORY)
                .await
                .unwrap()
                .expect("two candidates remain");
            assert!(question.id == 3 || question.id == 4);
        }
    }

    #[tokio::test]
    async fn test_category_filter_applies() {
        let service = seeded_service(6).await;

        for _ in 0..20 {
            let question = service
                .next_question(&[], 2)
                .await
                .unwrap()
                .expect("category has candidates");
            assert_eq!(question.category, 2);
        }
    }

    #[tokio::test]
    async fn test_exhausted_pool_yields_none() {
        let service = seeded_service(3).await;

        let question = service.next_question(&[1, 2, 3], ANY_CATEGORY).await.unwrap();

        assert!(question.is_none());
    }

    #[tokio::test]
    async fn test_empty_store_yields_none() {
        let service = seeded_service(0).await;

        let question = service.next_question(&[], ANY_CATEGORY).await.unwrap();

        assert!(question.is_none());
    }
}
