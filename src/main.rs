//! Terminal front end: assessment, results and coaching chat over stdin/stdout.

use std::error::Error;
use std::sync::Arc;

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use readiness_coach::adapters::{
    FileAssessmentStore, HttpChatClient, InMemoryAssessmentStore,
};
use readiness_coach::application::{
    AskAssistantCommand, AskAssistantHandler, CompleteAssessmentCommand,
    CompleteAssessmentHandler, LoadAssessmentHandler, LoadAssessmentQuery,
    SendCoachingMessageCommand, SendCoachingMessageHandler,
};
use readiness_coach::config::{AppConfig, LoggingConfig, StorageBackend};
use readiness_coach::domain::assessment::{AssessmentPhase, MotivationScore, QuestionBank};
use readiness_coach::domain::coaching::DialogueEngine;
use readiness_coach::domain::foundation::{PatientName, UserId};
use readiness_coach::domain::module::{ModuleStage, MotivationModule};
use readiness_coach::ports::AssessmentStore;

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    config.validate()?;

    let store: Arc<dyn AssessmentStore> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryAssessmentStore::new()),
        StorageBackend::File => Arc::new(FileAssessmentStore::new(&config.storage.directory)),
    };
    let assistant = AskAssistantHandler::new(Arc::new(HttpChatClient::new(
        config.chat.http_client_config(),
    )?));
    let complete = CompleteAssessmentHandler::new(Arc::clone(&store));
    let load = LoadAssessmentHandler::new(Arc::clone(&store));
    let chat = SendCoachingMessageHandler::new(config.coach.typing_delay()?);

    let mut input = BufReader::new(io::stdin()).lines();

    let Some(patient) = ask_patient(&mut input).await? else {
        return Ok(());
    };
    let user_id = UserId::new(patient.as_str())?;

    let engine = match config.coach.rng_seed {
        Some(seed) => DialogueEngine::seeded(seed),
        None => DialogueEngine::from_entropy(),
    };
    let bank = QuestionBank::standard();
    let physician = config.coach.physician_name.clone();
    let saved = match load.handle(LoadAssessmentQuery { patient: patient.clone() }).await {
        Ok(saved) => saved,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable saved assessment");
            None
        }
    };
    let mut module = match saved {
        Some(score) => MotivationModule::resume(bank, physician, engine, score),
        None => MotivationModule::new(bank, physician, engine),
    };
    info!(patient = %patient, stage = %module.stage(), "session started");

    loop {
        let keep_going = match module.stage() {
            ModuleStage::Assessment => {
                run_assessment(&mut module, &complete, &patient, &mut input).await?
            }
            ModuleStage::Results => run_results(&mut module, &mut input).await?,
            ModuleStage::Chat => {
                run_chat(&mut module, &chat, &assistant, &user_id, &mut input).await?
            }
        };
        if !keep_going {
            break;
        }
    }

    say("Take care!").await?;
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

async fn say(text: impl AsRef<str>) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_ref().as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}

/// Prompts and reads one trimmed line; `None` on end of input.
async fn prompt(input: &mut Input, text: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}

async fn ask_patient(input: &mut Input) -> Result<Option<PatientName>, Box<dyn Error>> {
    loop {
        let Some(line) = prompt(input, "What is your name? ").await? else {
            return Ok(None);
        };
        match PatientName::new(line) {
            Ok(name) => return Ok(Some(name)),
            Err(err) => say(format!("{}", err)).await?,
        }
    }
}

/// Returns false when the patient quits.
async fn run_assessment(
    module: &mut MotivationModule,
    complete: &CompleteAssessmentHandler,
    patient: &PatientName,
    input: &mut Input,
) -> Result<bool, Box<dyn Error>> {
    let session = module.session_mut()?;

    match session.phase() {
        AssessmentPhase::Question(_) => {
            let (Some(question), Some(position)) = (session.current_question(), session.position())
            else {
                return Ok(true);
            };
            let mut text = format!(
                "\nQuestion {} of {} ({} complete)\n{}\n",
                position,
                session.bank().len(),
                session.progress(),
                question.prompt
            );
            for option in &question.options {
                text.push_str(&format!("  {}. {}\n", option.value, option.label));
            }
            say(text.trim_end()).await?;

            let Some(line) = prompt(input, "Your answer (b = back, q = quit): ").await? else {
                return Ok(false);
            };
            match line.as_str() {
                "q" => return Ok(false),
                "b" => {
                    session.retreat();
                }
                _ => match line.parse::<u8>() {
                    Ok(value) => {
                        if let Err(err) = session.answer_current(value) {
                            say(err.to_string()).await?;
                        } else {
                            session.advance()?;
                        }
                    }
                    Err(_) => say("Please enter one of the option numbers.").await?,
                },
            }
        }
        AssessmentPhase::Ratings => {
            if session.importance().is_none() {
                let Some(value) = ask_rating(
                    input,
                    "On a scale of 1-10, how important is it for you to prevent diabetes? ",
                )
                .await?
                else {
                    return Ok(false);
                };
                if let Err(err) = session.set_importance(value) {
                    say(err.to_string()).await?;
                }
            } else if session.confidence().is_none() {
                let Some(value) = ask_rating(
                    input,
                    "On a scale of 1-10, how confident are you that you could make changes? ",
                )
                .await?
                else {
                    return Ok(false);
                };
                if let Err(err) = session.set_confidence(value) {
                    say(err.to_string()).await?;
                }
            } else {
                let result = complete
                    .handle(module, CompleteAssessmentCommand { patient: patient.clone() })
                    .await?;
                if !result.persisted {
                    say("Your results could not be saved, but you can still continue.").await?;
                }
            }
        }
        AssessmentPhase::Completed => {}
    }
    Ok(true)
}

async fn ask_rating(input: &mut Input, text: &str) -> Result<Option<u8>, Box<dyn Error>> {
    loop {
        let Some(line) = prompt(input, text).await? else {
            return Ok(None);
        };
        match line.parse::<u8>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => say("Please enter a whole number from 1 to 10.").await?,
        }
    }
}

fn results_text(score: &MotivationScore) -> String {
    let profile = score.stage().profile();
    let action = score.call_to_action();
    let mut text = format!(
        "\n{} ({})\n{}\nReadiness: {}\nImportance: {} ({})\nConfidence: {} ({})\n\n{}\n\nNext steps:\n",
        profile.title,
        score.stage().display_name(),
        profile.description,
        profile.readiness,
        score.importance_rating(),
        score.importance_rating().level().label(),
        score.confidence_rating(),
        score.confidence_rating().level().label(),
        profile.motivational_message,
    );
    for step in profile.next_steps {
        text.push_str(&format!("  - {}\n", step));
    }
    text.push_str(&format!("\n{}: {}", action.title, action.subtitle));
    text
}

async fn run_results(
    module: &mut MotivationModule,
    input: &mut Input,
) -> Result<bool, Box<dyn Error>> {
    if let Some(score) = module.score() {
        say(results_text(score)).await?;
    }
    loop {
        let Some(line) = prompt(input, "\n[c]hat with the coach, [r]etake, or [q]uit: ").await?
        else {
            return Ok(false);
        };
        match line.to_lowercase().as_str() {
            "c" | "chat" => {
                let transcript = module.start_chat()?;
                if let Some(opening) = transcript.last() {
                    say(format!(
                        "\nCoach [{}]: {}",
                        opening.timestamp().clock_label(),
                        opening.content()
                    ))
                    .await?;
                }
                say("(Type /ask <question> for the assistant, /retake to start over, /quit to leave.)")
                    .await?;
                return Ok(true);
            }
            "r" | "retake" => {
                module.retake()?;
                return Ok(true);
            }
            "q" | "quit" => return Ok(false),
            _ => {}
        }
    }
}

async fn run_chat(
    module: &mut MotivationModule,
    chat: &SendCoachingMessageHandler,
    assistant: &AskAssistantHandler,
    user_id: &UserId,
    input: &mut Input,
) -> Result<bool, Box<dyn Error>> {
    let Some(line) = prompt(input, "You: ").await? else {
        return Ok(false);
    };
    match ChatInput::parse(&line) {
        ChatInput::Empty => {}
        ChatInput::Quit => return Ok(false),
        ChatInput::Retake => module.retake()?,
        ChatInput::AskUsage => say("Usage: /ask <question>").await?,
        ChatInput::Ask(question) => {
            let cmd = AskAssistantCommand {
                user_id: user_id.clone(),
                user_input: question.to_string(),
            };
            match assistant.handle(cmd).await {
                Ok(result) => say(format!("Assistant: {}", result.response)).await?,
                Err(err) => say(err.to_string()).await?,
            }
        }
        ChatInput::Message(text) => {
            say("Coach is typing...").await?;
            let cmd = SendCoachingMessageCommand {
                text: text.to_string(),
            };
            let result = chat.handle(module, cmd).await?;
            say(format!(
                "Coach [{}]: {}",
                result.reply.timestamp().clock_label(),
                result.reply.content()
            ))
            .await?;
        }
    }
    Ok(true)
}

/// One trimmed line typed on the chat screen.
#[derive(Debug, PartialEq, Eq)]
enum ChatInput<'a> {
    Empty,
    Quit,
    Retake,
    /// `/ask` with nothing to ask.
    AskUsage,
    Ask(&'a str),
    Message(&'a str),
}

impl<'a> ChatInput<'a> {
    fn parse(line: &'a str) -> Self {
        match line {
            "" => ChatInput::Empty,
            "/quit" => ChatInput::Quit,
            "/retake" => ChatInput::Retake,
            "/ask" => ChatInput::AskUsage,
            _ => match line.strip_prefix("/ask ").map(str::trim) {
                Some("") => ChatInput::AskUsage,
                Some(question) => ChatInput::Ask(question),
                None => ChatInput::Message(line),
            },
        }
    }
}
