//! # Career quiz
//!
//! [`QuizEngine`] walks a fixed list of [`QuizQuestion`]s one at a time. Each
//! question holds at most one answer; the engine only moves forward once the
//! current question is answered, and answering the last one completes the quiz.
//!
//! ```text
//! answering ──advance() on last question──▶ completed
//!     ▲                                         │
//!     └──────────────── reset() ────────────────┘
//! ```
//!
//! The matches shown on completion are the fixed [`CAREER_MATCHES`]. They do
//! not depend on the recorded answers.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub category: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CareerMatch {
    pub career: &'static str,
    /// Match strength in percent.
    pub score: u8,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub salary: &'static str,
    pub growth: &'static str,
}

pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: 1,
        question: "What type of work environment do you prefer?",
        options: &["Office setting", "Outdoor fieldwork", "Laboratory", "Remote/Home", "Creative studio"],
        category: "work_environment",
    },
    QuizQuestion {
        id: 2,
        question: "Which activity interests you most?",
        options: &["Solving complex problems", "Helping people", "Creating art/content", "Analyzing data", "Leading teams"],
        category: "interests",
    },
    QuizQuestion {
        id: 3,
        question: "What motivates you most in a career?",
        options: &["High salary", "Job security", "Making a difference", "Creative freedom", "Recognition"],
        category: "motivation",
    },
    QuizQuestion {
        id: 4,
        question: "How do you prefer to work?",
        options: &["Independently", "In small teams", "In large groups", "With mentorship", "Leading others"],
        category: "work_style",
    },
    QuizQuestion {
        id: 5,
        question: "Which subject did you enjoy most in school?",
        options: &["Mathematics", "Science", "Literature", "History", "Arts", "Physical Education"],
        category: "academic_preference",
    },
];

pub const CAREER_MATCHES: &[CareerMatch] = &[
    CareerMatch {
        career: "Software Engineer",
        score: 85,
        description: "Design and develop software applications and systems",
        skills: &["Programming", "Problem Solving", "Logical Thinking"],
        salary: "₹6-15 LPA",
        growth: "High",
    },
    CareerMatch {
        career: "Data Scientist",
        score: 78,
        description: "Analyze complex data to help organizations make decisions",
        skills: &["Statistics", "Programming", "Data Analysis"],
        salary: "₹8-20 LPA",
        growth: "Very High",
    },
    CareerMatch {
        career: "Product Manager",
        score: 72,
        description: "Lead product development and strategy",
        skills: &["Leadership", "Communication", "Strategic Thinking"],
        salary: "₹10-25 LPA",
        growth: "High",
    },
];

/// Outcome of [`QuizEngine::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this index.
    Moved(usize),
    /// The last question was answered; results are available.
    Completed,
    /// The current question has no answer yet (or the quiz is already complete).
    Blocked,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizEngine {
    questions: &'static [QuizQuestion],
    current_index: usize,
    answers: BTreeMap<u32, String>,
    completed: bool,
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizEngine {
    pub fn new() -> Self {
        Self {
            questions: QUESTIONS,
            current_index: 0,
            answers: BTreeMap::new(),
            completed: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current_index]
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn answers(&self) -> &BTreeMap<u32, String> {
        &self.answers
    }

    /// The recorded answer for the current question, if any.
    pub fn current_answer(&self) -> Option<&str> {
        self.answers
            .get(&self.current_question().id)
            .map(String::as_str)
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Progress through the quiz, counting the current question, rounded to a whole percent.
    pub fn progress_percent(&self) -> u32 {
        let done = (self.current_index + 1) as f64;
        (done / self.questions.len() as f64 * 100.0).round() as u32
    }

    /// Record `answer` for the current question, replacing any earlier choice.
    ///
    /// Ignored once the quiz is completed.
    pub fn select_answer(&mut self, answer: impl Into<String>) {
        if self.completed {
            return;
        }
        let id = self.current_question().id;
        self.answers.insert(id, answer.into());
    }

    pub fn advance(&mut self) -> Advance {
        if self.completed || self.current_answer().is_none() {
            return Advance::Blocked;
        }
        if self.is_last() {
            self.completed = true;
            tracing::info!(answered = self.answers.len(), "career quiz completed");
            Advance::Completed
        } else {
            self.current_index += 1;
            Advance::Moved(self.current_index)
        }
    }

    /// Step back one question. No-op on the first question.
    pub fn retreat(&mut self) {
        if self.completed {
            return;
        }
        self.current_index = self.current_index.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
        self.answers.clear();
        self.completed = false;
    }

    /// The career matches, once the quiz is completed.
    pub fn results(&self) -> Option<&'static [CareerMatch]> {
        self.completed.then_some(CAREER_MATCHES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(quiz: &mut QuizEngine) {
        loop {
            let first = quiz.current_question().options[0];
            quiz.select_answer(first);
            if quiz.advance() == Advance::Completed {
                break;
            }
        }
    }

    #[test]
    fn test_starts_at_first_question() {
        let quiz = QuizEngine::new();
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.len(), 5);
        assert_eq!(quiz.current_question().id, 1);
        assert!(quiz.answers().is_empty());
        assert!(!quiz.is_completed());
        assert!(quiz.results().is_none());
    }

    #[test]
    fn test_advance_blocked_without_answer() {
        let mut quiz = QuizEngine::new();
        assert_eq!(quiz.advance(), Advance::Blocked);
        assert_eq!(quiz.current_index(), 0);

        quiz.select_answer("Laboratory");
        assert_eq!(quiz.advance(), Advance::Moved(1));
        assert_eq!(quiz.advance(), Advance::Blocked);
        assert_eq!(quiz.current_index(), 1);
    }

    #[test]
    fn test_select_answer_replaces() {
        let mut quiz = QuizEngine::new();
        quiz.select_answer("Laboratory");
        quiz.select_answer("Laboratory");
        assert_eq!(quiz.answers().len(), 1);

        quiz.select_answer("Creative studio");
        assert_eq!(quiz.answers().len(), 1);
        assert_eq!(quiz.current_answer(), Some("Creative studio"));
    }

    #[test]
    fn test_retreat_keeps_answers() {
        let mut quiz = QuizEngine::new();
        quiz.retreat();
        assert_eq!(quiz.current_index(), 0);

        quiz.select_answer("Office setting");
        quiz.advance();
        quiz.select_answer("Helping people");
        quiz.retreat();

        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.current_answer(), Some("Office setting"));
        assert_eq!(quiz.answers().len(), 2);
        // Going forward again is allowed since question 1 is still answered.
        assert_eq!(quiz.advance(), Advance::Moved(1));
        assert_eq!(quiz.current_answer(), Some("Helping people"));
    }

    #[test]
    fn test_completion_yields_fixed_results() {
        let mut quiz = QuizEngine::new();
        answer_all(&mut quiz);

        assert!(quiz.is_completed());
        let results = quiz.results().unwrap();
        let careers: Vec<_> = results.iter().map(|m| (m.career, m.score)).collect();
        assert_eq!(
            careers,
            vec![("Software Engineer", 85), ("Data Scientist", 78), ("Product Manager", 72)]
        );

        // Different answers give the same matches.
        let mut other = QuizEngine::new();
        loop {
            let last = *other.current_question().options.last().unwrap();
            other.select_answer(last);
            if other.advance() == Advance::Completed {
                break;
            }
        }
        assert_eq!(other.results(), quiz.results());
    }

    #[test]
    fn test_completed_is_terminal_until_reset() {
        let mut quiz = QuizEngine::new();
        answer_all(&mut quiz);

        assert_eq!(quiz.advance(), Advance::Blocked);
        quiz.retreat();
        assert_eq!(quiz.current_index(), 4);
        quiz.select_answer("Arts");
        assert_eq!(quiz.answers()[&5], "Mathematics");
    }

    #[test]
    fn test_reset_after_completion() {
        let mut quiz = QuizEngine::new();
        answer_all(&mut quiz);
        quiz.reset();

        assert_eq!(quiz.current_index(), 0);
        assert!(quiz.answers().is_empty());
        assert!(!quiz.is_completed());
        assert!(quiz.results().is_none());
    }

    #[test]
    fn test_progress() {
        let mut quiz = QuizEngine::new();
        assert_eq!(quiz.progress_percent(), 20);
        assert!(!quiz.is_last());

        for _ in 0..4 {
            quiz.select_answer("x");
            quiz.advance();
        }
        assert_eq!(quiz.progress_percent(), 100);
        assert!(quiz.is_last());
    }
}
