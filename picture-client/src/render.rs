use picture_types::{Game, GuessFeedback, PlayView, Question};

/// Plain-text rendering of a play view for the terminal.
pub fn render_view(view: &PlayView) -> String {
    match view {
        PlayView::Empty { game_name } => format!(
            "{}\nNo Questions Found\nWe couldn't find any questions for this game.",
            game_name
        ),
        PlayView::Ready {
            game_name,
            question_count,
        } => format!(
            "Welcome to {}\n{} questions await you!\nLook at the images and guess the word they represent.",
            game_name, question_count
        ),
        PlayView::Playing {
            game_name,
            question_number,
            question_count,
            image_urls,
            feedback,
            progress_percent,
            has_next,
        } => {
            let mut out = format!(
                "{} - Question {} of {} ({}%)\nWhat word do these images represent?",
                game_name, question_number, question_count, progress_percent
            );
            for (i, url) in image_urls.iter().enumerate() {
                out.push_str(&format!("\n  Hint {}: {}", i + 1, url));
            }
            if feedback.is_pending() {
                out.push('\n');
                out.push_str(&render_feedback(*feedback, *has_next));
            }
            out
        }
        PlayView::Completed { game_name, result } => format!(
            "Game Complete!\n{} / {}\n{}% Correct\n{}\nYou completed {}!",
            result.score,
            result.total,
            result.percentage,
            result.tier.message(),
            game_name
        ),
    }
}

pub fn render_feedback(feedback: GuessFeedback, has_next: bool) -> String {
    match feedback {
        GuessFeedback::Correct if has_next => "Correct! Moving to next question...".to_string(),
        GuessFeedback::Correct => "Correct!".to_string(),
        GuessFeedback::Wrong => "Wrong! Try again.".to_string(),
        GuessFeedback::None => String::new(),
    }
}

pub fn render_games(games: &[Game], player_name: &str) -> String {
    let mut out = format!("Welcome back, {}\n{} games", player_name, games.len());
    if games.is_empty() {
        out.push_str("\nNo games yet. Create one with `create-game`.");
    }
    for game in games {
        out.push_str(&format!(
            "\n  {}  {} ({} questions)",
            game.id,
            game.name,
            game.question_count()
        ));
    }
    out
}

pub fn render_questions(questions: &[Question]) -> String {
    let mut out = format!("{} questions", questions.len());
    if questions.is_empty() {
        out.push_str("\nNo questions yet. Create one with `create-question`.");
    }
    for question in questions {
        out.push_str(&format!(
            "\n  {}  {} ({} images)",
            question.id,
            question.word,
            question.clue_count()
        ));
    }
    out
}
