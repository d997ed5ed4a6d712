use picture_types::{MAX_CLUE_IMAGES, MIN_CLUE_IMAGES, NewQuestion, Question, QuestionId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Please enter your name to continue")]
    MissingName,
    #[error("Please enter a valid word.")]
    MissingWord,
    #[error("Please select at least {min} images ({selected} selected).", min = MIN_CLUE_IMAGES)]
    TooFewImages { selected: usize },
    #[error("Select at most {max} images ({selected} selected).", max = MAX_CLUE_IMAGES)]
    TooManyImages { selected: usize },
    #[error("Please enter a game name.")]
    MissingGameName,
    #[error("Please select at least one question.")]
    NoQuestionsSelected,
}

/// Trimmed display name for registration.
pub fn validate_display_name(name: &str) -> Result<String, DraftError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DraftError::MissingName);
    }
    Ok(name.to_string())
}

/// A question being assembled from image search results.
#[derive(Debug, Clone, Default)]
pub struct QuestionDraft {
    pub word: String,
    selected_images: Vec<String>,
}

impl QuestionDraft {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            selected_images: Vec::new(),
        }
    }

    pub fn selected_images(&self) -> &[String] {
        &self.selected_images
    }

    pub fn is_selected(&self, url: &str) -> bool {
        self.selected_images.iter().any(|selected| selected == url)
    }

    /// Deselect a selected image, or select it if there is room. Returns whether it is now selected.
    pub fn toggle_image(&mut self, url: &str) -> bool {
        if self.is_selected(url) {
            self.selected_images.retain(|selected| selected != url);
            false
        } else if self.selected_images.len() < MAX_CLUE_IMAGES {
            self.selected_images.push(url.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_images(&mut self) {
        self.selected_images.clear();
    }

    pub fn validate(&self) -> Result<NewQuestion, DraftError> {
        let word = self.word.trim();
        if word.is_empty() {
            return Err(DraftError::MissingWord);
        }

        let selected = self.selected_images.len();
        if selected < MIN_CLUE_IMAGES {
            return Err(DraftError::TooFewImages { selected });
        }
        if selected > MAX_CLUE_IMAGES {
            return Err(DraftError::TooManyImages { selected });
        }

        Ok(NewQuestion {
            word: word.to_string(),
            image_urls: self.selected_images.clone(),
        })
    }
}

/// A game being assembled from the pool of existing questions.
#[derive(Debug, Clone, Default)]
pub struct GameDraft {
    pub name: String,
    questions: Vec<Question>,
}

/// A draft that passed validation, ready to be published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidGameDraft {
    pub name: String,
    pub question_ids: Vec<QuestionId>,
}

impl GameDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.questions.iter().any(|q| q.id == question_id)
    }

    /// Append a question; already selected questions are ignored. Returns whether it was added.
    pub fn add(&mut self, question: Question) -> bool {
        if self.contains(&question.id) {
            return false;
        }
        self.questions.push(question);
        true
    }

    pub fn remove(&mut self, question_id: &str) {
        self.questions.retain(|q| q.id != question_id);
    }

    pub fn validate(&self) -> Result<ValidGameDraft, DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingGameName);
        }
        if self.questions.is_empty() {
            return Err(DraftError::NoQuestionsSelected);
        }

        Ok(ValidGameDraft {
            name: self.name.clone(),
            question_ids: self.questions.iter().map(|q| q.id.clone()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            word: format!("word-{}", id),
            image_urls: vec!["a".to_string(), "b".to_string()],
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(validate_display_name("  Ada "), Ok("Ada".to_string()));
        assert_eq!(validate_display_name("   "), Err(DraftError::MissingName));
        assert_eq!(validate_display_name(""), Err(DraftError::MissingName));
    }

    #[test]
    fn test_toggle_image_limits_selection() {
        let mut draft = QuestionDraft::new("cat");
        for i in 0..4 {
            assert!(draft.toggle_image(&format!("img{}", i)));
        }
        // Fifth image is refused
        assert!(!draft.toggle_image("img4"));
        assert_eq!(draft.selected_images().len(), 4);

        // Toggling a selected image removes it
        assert!(!draft.toggle_image("img1"));
        assert_eq!(draft.selected_images(), &["img0", "img2", "img3"]);
        assert!(draft.toggle_image("img4"));
    }

    #[test]
    fn test_question_draft_validation() {
        let mut draft = QuestionDraft::new("  ");
        draft.toggle_image("a");
        draft.toggle_image("b");
        assert_eq!(draft.validate(), Err(DraftError::MissingWord));

        let mut draft = QuestionDraft::new("cat");
        assert_eq!(draft.validate(), Err(DraftError::TooFewImages { selected: 0 }));
        draft.toggle_image("a");
        assert_eq!(draft.validate(), Err(DraftError::TooFewImages { selected: 1 }));
        draft.toggle_image("b");

        let valid = draft.validate().unwrap();
        assert_eq!(valid.word, "cat");
        assert_eq!(valid.image_urls, vec!["a", "b"]);
    }

    #[test]
    fn test_question_draft_trims_word() {
        let mut draft = QuestionDraft::new(" ice cream ");
        draft.toggle_image("a");
        draft.toggle_image("b");
        assert_eq!(draft.validate().unwrap().word, "ice cream");

        draft.clear_images();
        assert!(draft.selected_images().is_empty());
    }

    #[test]
    fn test_game_draft_selection() {
        let mut draft = GameDraft::new("Animals");
        assert!(draft.add(question("1")));
        assert!(draft.add(question("2")));
        assert!(!draft.add(question("1")));
        assert_eq!(draft.questions().len(), 2);
        assert!(draft.contains("2"));

        draft.remove("1");
        assert!(!draft.contains("1"));
        assert_eq!(draft.questions().len(), 1);
    }

    #[test]
    fn test_game_draft_validation() {
        let mut draft = GameDraft::new("");
        draft.add(question("1"));
        assert_eq!(draft.validate(), Err(DraftError::MissingGameName));

        let mut draft = GameDraft::new("Animals");
        assert_eq!(draft.validate(), Err(DraftError::NoQuestionsSelected));

        draft.add(question("b"));
        draft.add(question("a"));
        let valid = draft.validate().unwrap();
        assert_eq!(valid.name, "Animals");
        // Selection order is preserved
        assert_eq!(valid.question_ids, vec!["b", "a"]);
    }
}
