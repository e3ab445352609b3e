//! Prompt text for the three tutoring tasks. Each builder returns the
//! `(system, user)` pair sent upstream as a two-message conversation.

pub const DOUBT_SYSTEM_PROMPT: &str = "You are an expert AI tutor specializing in academic subjects. Your goal is to provide accurate, clear, and educational answers.

IMPORTANT RULES:
1. Always verify facts before stating them - never guess or make up information
2. Use proper terminology for the subject
3. Break down complex concepts into simple, digestible steps
4. Provide relevant examples when helpful
5. If you're uncertain about something, say so
6. Keep explanations concise but thorough
7. Format your response with clear sections using headings and bullet points
8. For math/science: show formulas in plain text (e.g., \"Area = length × width\")
9. Always explain WHY something works, not just HOW";

const DOUBT_DETAILED_INSTRUCTION: &str =
    "Provide a clear, accurate explanation with step-by-step breakdown where applicable.";

const DOUBT_SIMPLIFY_INSTRUCTION: &str = "IMPORTANT: Explain this in the SIMPLEST possible terms, as if teaching a complete beginner. Use everyday analogies and avoid jargon.";

/// The simplify flag swaps the trailing instruction of the user prompt; the
/// system prompt is the same either way.
pub fn doubt_prompts(
    question: &str,
    subject: &str,
    level: &str,
    simplify: bool,
) -> (String, String) {
    let instruction = if simplify {
        DOUBT_SIMPLIFY_INSTRUCTION
    } else {
        DOUBT_DETAILED_INSTRUCTION
    };

    let user_prompt = format!(
        "Subject: {}\nLevel: {}\nQuestion: {}\n\n{}",
        subject, level, question, instruction
    );

    (DOUBT_SYSTEM_PROMPT.to_string(), user_prompt)
}

pub fn puzzle_prompts(difficulty: &str) -> (String, String) {
    let system_prompt = format!(
        "You are a puzzle master creating engaging educational puzzles for students.
Generate a {difficulty} difficulty logical/mathematical/reasoning puzzle.
Format your response as JSON with this exact structure:
{{
  \"puzzle\": \"The puzzle question text\",
  \"hint\": \"A helpful hint without giving away the answer\",
  \"solution\": \"The answer\",
  \"explanation\": \"Step-by-step explanation of how to solve it\"
}}
Make it engaging, educational, and appropriate for students."
    );

    let user_prompt = format!("Generate a new {difficulty} difficulty puzzle.");

    (system_prompt, user_prompt)
}

pub fn quiz_prompts(subject: &str, question_count: u32) -> (String, String) {
    let system_prompt = format!(
        "You are an educational quiz creator. Generate engaging multiple-choice questions for students.
Subject: {subject}
Format your response as JSON with this exact structure:
{{
  \"questions\": [
    {{
      \"question\": \"The question text\",
      \"options\": [\"Option A\", \"Option B\", \"Option C\", \"Option D\"],
      \"correctIndex\": 0,
      \"explanation\": \"Brief explanation of why this is correct\"
    }}
  ]
}}
Create {question_count} questions that are educational and progressively challenging."
    );

    let user_prompt =
        format!("Generate a {subject} quiz with {question_count} multiple choice questions.");

    (system_prompt, user_prompt)
}
