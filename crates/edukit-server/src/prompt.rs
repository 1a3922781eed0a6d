//! Prompt templates sent to the generative model.
//!
//! Grade and difficulty are interpolated verbatim; nothing here escapes them.

use std::fmt;

/// Quiz category. Unknown names resolve to [`QuizMode::Quiz`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    Alphabet,
    Numbers,
    Math,
    Tables,
    Quiz,
}

impl QuizMode {
    pub const ALL: [QuizMode; 5] = [
        QuizMode::Alphabet,
        QuizMode::Numbers,
        QuizMode::Math,
        QuizMode::Tables,
        QuizMode::Quiz,
    ];

    /// Case-insensitive lookup, never fails.
    pub fn parse(mode: &str) -> Self {
        match mode.to_lowercase().as_str() {
            "alphabet" => QuizMode::Alphabet,
            "numbers" => QuizMode::Numbers,
            "math" => QuizMode::Math,
            "tables" => QuizMode::Tables,
            _ => QuizMode::Quiz,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizMode::Alphabet => "alphabet",
            QuizMode::Numbers => "numbers",
            QuizMode::Math => "math",
            QuizMode::Tables => "tables",
            QuizMode::Quiz => "quiz",
        }
    }

    pub fn prompt(&self, grade: &str, difficulty: &str) -> String {
        match self {
            QuizMode::Alphabet => format!(
                "Generate a simple alphabet learning question not exceeding 5 words for Grade {grade} children, difficulty: {difficulty}. \
                 Each question must include a 'question', 'options' (4 choices), and 'correct' (index of correct answer). \
                 Focus on letter identification and phonics. Return only JSON."
            ),
            QuizMode::Numbers => format!(
                "Generate a number learning question not exceeding 5 words for Grade {grade} children, difficulty: {difficulty}. \
                 Each question must have a 'question', 'options' (4 numbers), and 'correct' (index). Return JSON."
            ),
            QuizMode::Math => format!(
                "Generate a arithmetic question not exceeding 5 words (addition/subtraction/multiplication) for Grade {grade} children, difficulty: {difficulty}. \
                 Each item must include 'question', 'options' (4 choices), and 'correct'. Output JSON."
            ),
            QuizMode::Tables => format!(
                "Generate a multiplication table question not exceeding 5 words for Grade {grade} students, difficulty: {difficulty}. \
                 Each should include 'question', 'options' (4), and 'correct'. Output JSON."
            ),
            QuizMode::Quiz => format!(
                "Generate a mixed quiz question not exceeding 5 words for Grade {grade}, difficulty: {difficulty}, across alphabets, numbers, and math. \
                 Each question must include 'question', 'options', and 'correct'. Output only JSON."
            ),
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the instruction for `mode` at the given grade and difficulty.
pub fn build_prompt(mode: &str, grade: &str, difficulty: &str) -> String {
    QuizMode::parse(mode).prompt(grade, difficulty)
}
