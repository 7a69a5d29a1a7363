use std::collections::BTreeMap;

/// A topic grouping offered by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// A single multiple-choice prompt. Text fields are already entity-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

impl Question {
    /// All selectable answers: distractors plus the correct answer, in
    /// lexicographic order so the correct one has no fixed position.
    pub fn options(&self) -> Vec<&str> {
        let mut options: Vec<&str> = self
            .incorrect_answers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.correct_answer.as_str()))
            .collect();
        options.sort_unstable();
        options.dedup();
        options
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

pub type QuestionSet = Vec<Question>;

/// Selected answer per question index. Re-selecting overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord {
    entries: BTreeMap<usize, String>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: usize, answer: impl Into<String>) {
        self.entries.insert(index, answer.into());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of questions whose recorded answer equals the correct answer.
    /// Questions without a recorded answer count as incorrect.
    pub fn score(&self, questions: &[Question]) -> usize {
        questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.get(*i).is_some_and(|a| q.is_correct(a)))
            .count()
    }
}

#[cfg(test)]
pub(crate) fn question(text: &str, correct: &str, incorrect: &[&str]) -> Question {
    Question {
        text: text.to_string(),
        correct_answer: correct.to_string(),
        incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
        category: None,
        difficulty: None,
    }
}
