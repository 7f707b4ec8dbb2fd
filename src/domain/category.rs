use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Category {
            id,
            kind: kind.into(),
        }
    }
}
