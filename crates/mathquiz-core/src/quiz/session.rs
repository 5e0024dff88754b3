use mathquiz_model::question::QuizQuestion;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Setup,
    InProgress,
    Completed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a quiz needs at least one question")]
    EmptyQuiz,
    #[error("no quiz is in progress")]
    NotInProgress,
    #[error("the current question was already answered")]
    AlreadyAnswered,
    #[error("the current question has not been answered yet")]
    NotAnswered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: usize,
    pub total: usize,
    /// Pattern (or topic) labels of missed questions, in the order they were first missed
    pub weak_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Next,
    Completed(SessionSummary),
}

/// A quiz as played by one client. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct QuizSession {
    state: SessionState,
    questions: Vec<QuizQuestion>,
    index: usize,
    score: usize,
    missed: Vec<QuizQuestion>,
    answered: bool,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SessionState::Setup,
            questions: Vec::new(),
            index: 0,
            score: 0,
            missed: Vec::new(),
            answered: false,
        }
    }

    /// Starts over with a new set of questions. An empty set leaves the session untouched.
    pub fn start(&mut self, questions: Vec<QuizQuestion>) -> Result<(), SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }
        *self = Self {
            state: SessionState::InProgress,
            questions,
            ..Self::new()
        };
        Ok(())
    }

    pub fn answer(&mut self, choice: &str) -> Result<AnswerOutcome, SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::NotInProgress);
        }
        if self.answered {
            return Err(SessionError::AlreadyAnswered);
        }
        let current = self.questions.get(self.index).ok_or(SessionError::NotInProgress)?;
        let correct_answer = current.question.correct_answer.clone();
        let correct = correct_answer
            .as_deref()
            .is_some_and(|answer| answer.trim() == choice.trim());

        if correct {
            self.score += 1;
        } else {
            self.missed.push(current.clone());
        }
        self.answered = true;
        Ok(AnswerOutcome { correct, correct_answer })
    }

    /// Queues a practice question directly after the current one.
    pub fn insert_follow_up(&mut self, question: QuizQuestion) -> Result<(), SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::NotInProgress);
        }
        self.questions.insert(self.index + 1, question);
        Ok(())
    }

    pub fn advance(&mut self) -> Result<Progress, SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::NotInProgress);
        }
        if !self.answered {
            return Err(SessionError::NotAnswered);
        }
        self.answered = false;
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            return Ok(Progress::Next);
        }
        self.state = SessionState::Completed;
        Ok(Progress::Completed(self.build_summary()))
    }

    /// Available once the last question was answered and advanced past.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        (self.state == SessionState::Completed).then(|| self.build_summary())
    }

    fn build_summary(&self) -> SessionSummary {
        let mut weak_areas: Vec<String> = Vec::new();
        for question in &self.missed {
            let label = question.question.label();
            if !weak_areas.iter().any(|area| area == label) {
                weak_areas.push(label.to_owned());
            }
        }
        SessionSummary {
            score: self.score,
            total: self.questions.len(),
            weak_areas,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn current(&self) -> Option<&QuizQuestion> {
        match self.state {
            SessionState::InProgress => self.questions.get(self.index),
            _ => None,
        }
    }

    /// Zero based position of the current question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn missed(&self) -> &[QuizQuestion] {
        &self.missed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathquiz_model::difficulty::Difficulty;
    use mathquiz_model::question::Question;

    fn quiz_question(id: i32, answer: &str, pattern: Option<&str>) -> QuizQuestion {
        QuizQuestion {
            question: Question {
                id,
                topic: "Algebra".to_string(),
                question: format!("question {id}"),
                correct_answer: Some(answer.to_string()),
                wrong_options: vec!["wrong".to_string()],
                difficulty: Difficulty::Easy,
                pattern: pattern.map(ToOwned::to_owned),
                created_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            },
            options: vec![answer.to_string(), "wrong".to_string()],
        }
    }

    #[test]
    fn test_full_run() {
        let mut session = QuizSession::new();
        assert_eq!(session.state(), SessionState::Setup);
        session
            .start(vec![
                quiz_question(1, "1", Some("equations")),
                quiz_question(2, "2", None),
            ])
            .unwrap();

        let outcome = session.answer("wrong").unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_answer.as_deref(), Some("1"));
        assert_eq!(session.answer("1"), Err(SessionError::AlreadyAnswered));

        session.insert_follow_up(quiz_question(3, "3", Some("equations"))).unwrap();
        assert_eq!(session.advance().unwrap(), Progress::Next);
        assert_eq!(session.current().unwrap().question.id, 3);

        assert!(session.answer(" 3 ").unwrap().correct);
        assert_eq!(session.advance().unwrap(), Progress::Next);
        assert_eq!(session.current().unwrap().question.id, 2);
        assert!(!session.answer("nope").unwrap().correct);

        let Progress::Completed(summary) = session.advance().unwrap() else {
            panic!("expected the quiz to be completed");
        };
        assert_eq!(
            summary,
            SessionSummary {
                score: 1,
                total: 3,
                weak_areas: vec!["equations".to_string(), "Algebra".to_string()],
            }
        );
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.summary(), Some(summary));
        assert!(session.current().is_none());
        assert_eq!(session.answer("1"), Err(SessionError::NotInProgress));
    }

    #[test]
    fn test_advance_requires_answer() {
        let mut session = QuizSession::new();
        assert_eq!(session.advance(), Err(SessionError::NotInProgress));
        session.start(vec![quiz_question(1, "1", None)]).unwrap();
        assert_eq!(session.advance(), Err(SessionError::NotAnswered));
        assert!(session.summary().is_none());
    }

    #[test]
    fn test_empty_start_keeps_state() {
        let mut session = QuizSession::new();
        session.start(vec![quiz_question(1, "1", None)]).unwrap();
        session.answer("1").unwrap();

        assert_eq!(session.start(Vec::new()), Err(SessionError::EmptyQuiz));
        assert_eq!(session.score(), 1);
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn test_restart_resets() {
        let mut session = QuizSession::new();
        session.start(vec![quiz_question(1, "1", None)]).unwrap();
        session.answer("x").unwrap();
        session.advance().unwrap();

        session.start(vec![quiz_question(2, "2", None)]).unwrap();
        assert_eq!(session.score(), 0);
        assert!(session.missed().is_empty());
        assert_eq!(session.position(), 0);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_repeated_misses_of_same_pattern() {
        let mut session = QuizSession::new();
        session
            .start(vec![quiz_question(1, "1", Some("p")), quiz_question(2, "2", Some("p"))])
            .unwrap();
        session.answer("x").unwrap();
        session.advance().unwrap();
        session.answer("x").unwrap();
        let Progress::Completed(summary) = session.advance().unwrap() else {
            panic!("expected completion");
        };
        assert_eq!(summary.weak_areas, vec!["p"]);
        assert_eq!(session.missed().len(), 2);
    }
}
