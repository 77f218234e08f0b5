//! # Prompt
//!
//! Builds the text prompts sent to the LLM from a user's stored notes.
//!
//! ## Quiz modes
//!
//! - **Exam** (`/quiz`): first [`EXAM_CONTEXT_CHARS`] of the notes; one exam-style question
//!   plus a verbatim `Context hint:` quote.
//! - **Random** (`/quiz random`): a random [`RANDOM_WINDOW_CHARS`] window of the notes; one
//!   question strictly from that excerpt.
//! - **Topic** (`/quiz <topic>`): first [`TOPIC_CONTEXT_CHARS`] of the notes plus the topic.
//!
//! ## Chat
//!
//! [`chat_prompt`] hands the notes, the last question asked and the student's message to the
//! model and lets it decide whether the message is an answer, a question or small talk.
//!
//! All lengths and offsets are counted in chars, so slicing never splits a UTF-8 sequence.

use rand::Rng;

/// Notes prefix used by the exam prompt.
pub const EXAM_CONTEXT_CHARS: usize = 40_000;

/// Notes prefix used by the topic prompt.
pub const TOPIC_CONTEXT_CHARS: usize = 40_000;

/// Size of the random excerpt window.
pub const RANDOM_WINDOW_CHARS: usize = 4_000;

/// Notes prefix used by the chat prompt.
pub const CHAT_CONTEXT_CHARS: usize = 30_000;

/// Appended to exam questions after the model's text; never sent to the model.
pub const EXAM_DISCLAIMER: &str =
    "⚠️ AI-generated from your notes. Check the context hint against your PDF before trusting it.";

/// How a quiz question is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizMode {
    Exam,
    Random,
    Topic(String),
}

impl QuizMode {
    /// Picks the mode from `/quiz` arguments: none → Exam, `random` (any case) → Random,
    /// anything else → Topic with the arguments joined by single spaces.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        match args.first() {
            None => QuizMode::Exam,
            Some(first) if first.as_ref().eq_ignore_ascii_case("random") => QuizMode::Random,
            Some(_) => QuizMode::Topic(
                args.iter()
                    .map(|a| a.as_ref())
                    .collect::<Vec<&str>>()
                    .join(" "),
            ),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            QuizMode::Exam => "🔥",
            QuizMode::Random => "🎲",
            QuizMode::Topic(_) => "🔍",
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            QuizMode::Exam => "exam",
            QuizMode::Random => "random",
            QuizMode::Topic(_) => "topic",
        }
    }
}

/// Returns `count` chars of `text` starting at char `start`, clamped to the end of the text.
fn char_slice(text: &str, start: usize, count: usize) -> &str {
    let byte_at = |n: usize| {
        text.char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    };
    let begin = byte_at(start);
    let end = byte_at(start.saturating_add(count));
    &text[begin..end]
}

/// First `max` chars of `text` (the whole text when shorter).
pub fn truncate_chars(text: &str, max: usize) -> &str {
    char_slice(text, 0, max)
}

/// Picks a contiguous window of `window` chars at a uniformly random offset in
/// `[0, len - window]`. Texts of at most `window` chars are returned unchanged.
pub fn random_snippet<'a, R: Rng>(text: &'a str, window: usize, rng: &mut R) -> &'a str {
    let len = text.chars().count();
    if len <= window {
        return text;
    }
    let start = rng.gen_range(0..=len - window);
    char_slice(text, start, window)
}

/// Exam mode: one standard exam question with a verbatim context hint.
pub fn exam_prompt(notes: &str) -> String {
    let notes = truncate_chars(notes, EXAM_CONTEXT_CHARS);
    format!(
        "Act as a strict Professor. Scan these notes for likely Exam Questions.\n\
         NOTES: {notes}\n\n\
         TASK: Generate ONE standard exam question.\n\
         PRIORITIZE: 'Differentiate', 'Discuss process', 'List factors'.\n\
         CONSTRAINT: Max 2 sentences. Difficult.\n\
         After the question, add a line starting with 'Context hint:' that quotes, word for word, \
         the sentence from the NOTES the question is based on."
    )
}

/// Random mode: one question based only on the given excerpt.
pub fn random_prompt(excerpt: &str) -> String {
    format!(
        "Act as a ruthless Professor. Read this random excerpt:\n---\n{excerpt}\n---\n\
         TASK: Ask ONE specific question based ONLY on this excerpt.\n\
         CONSTRAINT: Max 2 sentences. Direct."
    )
}

/// Topic mode: one tough question about `topic`.
pub fn topic_prompt(notes: &str, topic: &str) -> String {
    let notes = truncate_chars(notes, TOPIC_CONTEXT_CHARS);
    format!(
        "Act as a ruthless Professor. Ask ONE tough question about '{topic}' based on these notes.\n\
         NOTES: {notes}\n\
         CONSTRAINT: Max 2 sentences."
    )
}

/// Builds the quiz prompt for `mode`. `rng` is only used by [`QuizMode::Random`].
pub fn quiz_prompt<R: Rng>(notes: &str, mode: &QuizMode, rng: &mut R) -> String {
    match mode {
        QuizMode::Exam => exam_prompt(notes),
        QuizMode::Random => random_prompt(random_snippet(notes, RANDOM_WINDOW_CHARS, rng)),
        QuizMode::Topic(topic) => topic_prompt(notes, topic),
    }
}

/// Chat: grade an answer, reveal the answer on give-up, answer a question, or handle small talk.
/// The model decides which; this function only assembles the text.
pub fn chat_prompt(notes: &str, last_question: &str, message: &str) -> String {
    let notes = truncate_chars(notes, CHAT_CONTEXT_CHARS);
    format!(
        "You are a strict but intelligent Professor. The student just sent a message.\n\
         Context Notes: {notes}\n\n\
         Last Question Asked: '{last_question}'\n\
         Student Message: '{message}'\n\n\
         INSTRUCTIONS:\n\
         1. IF IT'S AN ANSWER to the last question: Grade it 0/10 based on the notes. Correct errors ruthlessly.\n\
         2. IF THE STUDENT GIVES UP (e.g. 'I give up', 'tell me', 'idk'): Reveal the correct answer to the last question using the notes.\n\
         3. IF IT'S A QUESTION: Answer it briefly using facts from the notes.\n\
         4. IF IT'S CASUAL CHAT (e.g. 'Hi', 'Thanks', 'Bye'): Reply briefly and professionally. Remind them to study."
    )
}

/// Formats a generated question for the user. Exam questions get [`EXAM_DISCLAIMER`].
pub fn format_question(mode: &QuizMode, question: &str) -> String {
    let mut out = format!("{} Question:\n{}", mode.icon(), question.trim());
    if *mode == QuizMode::Exam {
        out.push_str("\n\n");
        out.push_str(EXAM_DISCLAIMER);
    }
    out
}
