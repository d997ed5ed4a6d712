use std::io::Write;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;

use picture_core::{PlayEventBus, QuestionDraft, TracingPlayEvents};
use picture_persistence::{connection::connect_and_migrate, repositories::IdentityRepository};
use picture_types::PlayView;

use crate::api::{ApiClient, QuestionProvider};
use crate::authoring::{self, Registration};
use crate::config::Config;
use crate::error::ClientError;
use crate::play_controller::{PlayController, PlaySettings};
use crate::render::{render_feedback, render_games, render_questions, render_view};
use crate::session_context::SessionContext;

/// Guess the word behind a set of pictures
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// register a display name and remember it on this machine
    Register { name: String },
    /// show the signed-in player
    Whoami,
    /// forget the signed-in player
    Logout,
    /// list the games available to play
    Games {
        /// print raw JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// list every question in the pool
    Questions {
        /// print raw JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// search for clue images
    SearchImages { query: String },
    /// create a question from a word and 2 to 4 image urls
    CreateQuestion {
        #[arg(short, long)]
        word: String,
        #[arg(short, long = "image", required = true)]
        images: Vec<String>,
    },
    /// create a game from existing question ids, in play order
    CreateGame {
        #[arg(short, long)]
        name: String,
        #[arg(short = 'q', long = "question", required = true)]
        questions: Vec<String>,
    },
    /// play a game
    Play { game_id: String },
}

pub struct App {
    config: Config,
    api: ApiClient,
    context: SessionContext,
}

impl App {
    pub async fn connect(config: Config) -> Result<Self, ClientError> {
        let api = ApiClient::new(config.api_base_url.clone(), config.request_timeout)?;
        let db = connect_and_migrate(&config.identity_database_url)
            .await
            .map_err(anyhow::Error::from)?;
        let context = SessionContext::load(IdentityRepository::new(db)).await?;

        Ok(Self {
            config,
            api,
            context,
        })
    }

    pub async fn run(&mut self, command: Command) -> Result<(), ClientError> {
        match command {
            Command::Register { name } => {
                match authoring::register(&self.api, &mut self.context, &name).await? {
                    Registration::Created(identity) => println!("Welcome, {}!", identity.name),
                    Registration::AlreadySignedIn(identity) => println!(
                        "Already signed in as {}. Use `logout` to switch players.",
                        identity.name
                    ),
                }
            }
            Command::Whoami => match self.context.identity() {
                Some(identity) => println!("{} ({})", identity.name, identity.user_id),
                None => println!("Not signed in"),
            },
            Command::Logout => {
                self.context.clear().await?;
                println!("Signed out");
            }
            Command::Games { json } => {
                let name = self.context.require_identity()?.name.clone();
                let games = self.api.list_games().await?;
                if json {
                    println!("{}", to_json(&games)?);
                } else {
                    println!("{}", render_games(&games, &name));
                }
            }
            Command::Questions { json } => {
                let questions = self.api.list_questions().await?;
                if json {
                    println!("{}", to_json(&questions)?);
                } else {
                    println!("{}", render_questions(&questions));
                }
            }
            Command::SearchImages { query } => {
                let urls = self.api.search_images(&query).await?;
                if urls.is_empty() {
                    println!("No images found for '{}'", query);
                }
                for (i, url) in urls.iter().enumerate() {
                    println!("{:>3}. {}", i + 1, url);
                }
            }
            Command::CreateQuestion { word, images } => {
                let mut draft = QuestionDraft::new(word);
                for url in &images {
                    if draft.is_selected(url) {
                        continue;
                    }
                    if !draft.toggle_image(url) {
                        println!("Ignoring {}: a question holds at most 4 images", url);
                    }
                }
                let question = authoring::publish_question(&self.api, &draft).await?;
                println!("Created question {} ({})", question.id, question.word);
            }
            Command::CreateGame { name, questions } => {
                let available = self.api.list_questions().await?;
                let draft = authoring::draft_game_from_ids(&name, &questions, &available)?;
                let published = authoring::publish_game(
                    &self.api,
                    &self.context,
                    &draft,
                    &self.config.app_base_url,
                )
                .await?;
                println!("Game created successfully!");
                println!("Share this link: {}", published.invite_link);
            }
            Command::Play { game_id } => self.play(&game_id).await?,
        }
        Ok(())
    }

    async fn play(&self, game_id: &str) -> Result<(), ClientError> {
        let mut events = PlayEventBus::new();
        events.add_handler(Arc::new(TracingPlayEvents));

        let provider: Arc<dyn QuestionProvider> = Arc::new(self.api.clone());
        println!("Loading your game...");
        let mut controller =
            PlayController::load(provider, game_id, PlaySettings::from(&self.config), events)
                .await;

        println!("{}", render_view(&controller.view().await));
        if controller.question_count() == 0 {
            return Ok(());
        }

        let mut prompt = Prompt::new();
        if !prompt.confirm("Start game? [Y/n]", true).await? {
            return Ok(());
        }
        controller.start()?;

        loop {
            let view = controller.view().await;
            println!("\n{}", render_view(&view));

            if let PlayView::Completed { .. } = view {
                if !prompt.confirm("Play again? [y/N]", false).await? {
                    break;
                }
                if let Err(e) = controller.restart().await {
                    println!("{}", render_view(&controller.view().await));
                    info!("Restart of game {} stopped: {}", game_id, e);
                    break;
                }
                continue;
            }

            let has_next = matches!(view, PlayView::Playing { has_next: true, .. });
            let Some(guess) = prompt.read_line("Type your answer:").await? else {
                break;
            };

            match controller.submit_guess(&guess).await {
                Ok(feedback) => {
                    println!("{}", render_feedback(feedback, has_next));
                    controller.wait_for_feedback().await;
                }
                Err(e) => println!("{}", e),
            }
        }

        controller.teardown();
        Ok(())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ClientError> {
    serde_json::to_string_pretty(value).map_err(|e| ClientError::Store(e.into()))
}

/// Line-oriented stdin reader. Ctrl+C ends input like end-of-file.
struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ClientError> {
        print!("{} ", prompt);
        std::io::stdout().flush()?;

        tokio::select! {
            line = self.lines.next_line() => Ok(line?),
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, leaving the game");
                Ok(None)
            }
        }
    }

    async fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, ClientError> {
        let Some(answer) = self.read_line(prompt).await? else {
            return Ok(false);
        };
        Ok(match answer.trim().to_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }
}
