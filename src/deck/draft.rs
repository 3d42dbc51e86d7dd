/// Text of a card being composed in the add form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub question: String,
    pub answer: String,
}

impl Draft {
    pub fn clear(&mut self) {
        self.question.clear();
        self.answer.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.question.is_empty() && self.answer.is_empty()
    }

    /// Both fields contain something other than whitespace
    pub fn is_submittable(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }
}
