//! Prompt templates for question generation and answer evaluation

use crate::interview::QuestionKind;

/// Fixed templates rendered by placeholder substitution.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub hr_questions: String,
    pub technical_questions: String,
    pub evaluation: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            hr_questions: HR_QUESTIONS_TEMPLATE.to_string(),
            technical_questions: TECHNICAL_QUESTIONS_TEMPLATE.to_string(),
            evaluation: EVALUATION_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Render the question-generation prompt for one round.
    pub fn render_question_prompt(
        &self,
        kind: QuestionKind,
        resume_text: &str,
        count: usize,
    ) -> String {
        let template = match kind {
            QuestionKind::Hr => &self.hr_questions,
            QuestionKind::Technical => &self.technical_questions,
        };

        template
            .replace("{num_questions}", &count.to_string())
            .replace("{resume_text}", resume_text)
    }

    /// Render the per-answer evaluation prompt.
    pub fn render_evaluation_prompt(
        &self,
        question: &str,
        answer: &str,
        kind: QuestionKind,
    ) -> String {
        self.evaluation
            .replace("{question}", question)
            .replace("{answer}", answer)
            .replace("{question_type}", kind.label())
    }
}

const HR_QUESTIONS_TEMPLATE: &str = r#"Based on the following resume information, generate {num_questions} HR interview questions that would be appropriate for this candidate.

Resume Information:
{resume_text}

The questions should cover:
1. Behavioral questions about past experiences
2. Motivation and career goals
3. Teamwork and leadership
4. Problem-solving abilities
5. Cultural fit and values

Generate questions that are:
- Relevant to the candidate's background
- Open-ended to encourage detailed responses
- Professional and appropriate
- Varied in difficulty and topic

Return only the questions, one per line, numbered 1-{num_questions}."#;

const TECHNICAL_QUESTIONS_TEMPLATE: &str = r#"Based on the following resume information, generate {num_questions} technical interview questions that would be appropriate for this candidate.

Resume Information:
{resume_text}

The questions should cover:
1. Technical skills mentioned in the resume
2. Programming languages and frameworks
3. Problem-solving and coding challenges
4. System design concepts (if applicable)
5. Industry-specific knowledge

Generate questions that are:
- Relevant to the candidate's technical background
- Appropriate for their experience level
- Mix of conceptual and practical questions
- Varied in difficulty

Return only the questions, one per line, numbered 1-{num_questions}."#;

const EVALUATION_TEMPLATE: &str = r#"Evaluate the following interview answer and provide a detailed assessment.

Question: {question}
Answer: {answer}
Question Type: {question_type}

Please provide:
1. A score from 1-10 (where 10 is excellent)
2. Strengths of the answer
3. Areas for improvement
4. Specific feedback
5. Overall assessment

Format your response as:
Score: X/10
Strengths: [list strengths]
Areas for Improvement: [list areas for improvement]
Feedback: [detailed feedback]
Overall Assessment: [summary assessment]"#;
