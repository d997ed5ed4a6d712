use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;

use picture_core::{ResolutionOrder, ResolvedQuestion};
use picture_types::{Question, QuestionId};

use crate::api::QuestionProvider;

/// Fetch every question concurrently and keep the ones that arrive.
///
/// Each fetch settles independently; failures are logged and dropped without retry.
pub async fn resolve_questions(
    provider: &dyn QuestionProvider,
    question_ids: &[QuestionId],
    order: ResolutionOrder,
) -> Vec<Question> {
    let mut pending: FuturesUnordered<_> = question_ids
        .iter()
        .enumerate()
        .map(|(position, question_id)| async move {
            (position, question_id, provider.fetch_question(question_id).await)
        })
        .collect();

    let mut settled = Vec::with_capacity(question_ids.len());
    while let Some((position, question_id, result)) = pending.next().await {
        match result {
            Ok(question) => settled.push(ResolvedQuestion { position, question }),
            Err(e) => tracing::warn!("Failed to load question {}: {}", question_id, e),
        }
    }

    if settled.len() < question_ids.len() {
        tracing::info!(
            "Resolved {} of {} questions",
            settled.len(),
            question_ids.len()
        );
    }

    order.arrange(settled)
}
