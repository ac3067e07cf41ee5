use tracing::info;

use crate::errors::AppError;
use crate::models::{AnswerSubmission, EvaluationResult, TutorQuestion, TutorReply};
use crate::services::llm_service::LlmService;
use crate::services::{normalizer, prompts, require};

/// Answer a free-form student question; markup is stripped for plain display
pub async fn answer_question(
    llm_service: &LlmService,
    request: TutorQuestion,
) -> Result<TutorReply, AppError> {
    let question = require(request.question, "question")?;
    info!("Answering tutor question ({} chars)", question.len());

    let prompt = prompts::tutor_prompt(&question);
    let completion = llm_service.generate_completion(prompt).await?;

    Ok(TutorReply {
        response: normalizer::strip_markup(&completion),
    })
}

/// Grade a student answer. A completion that is not the requested JSON fails the request.
pub async fn evaluate_answer(
    llm_service: &LlmService,
    submission: AnswerSubmission,
) -> Result<EvaluationResult, AppError> {
    let question = require(submission.question, "question")?;
    let answer = require(submission.answer, "answer")?;
    let difficulty = require(submission.difficulty, "difficulty")?;
    info!("Evaluating answer at difficulty {}", difficulty);

    let prompt = prompts::evaluation_prompt(&question, &answer, &difficulty);
    let completion = llm_service.generate_completion(prompt).await?;

    normalizer::parse_evaluation(&completion)
}
