//! CLI interface for Charthouse.
//!
//! The default invocation opens the interactive course. The subcommands
//! are non-interactive: arguments in, plain text out.

use clap::{Parser, Subcommand};

use crate::chat::client::{self, ChatRequest};
use crate::config::Config;
use crate::markdown;
use crate::model::LessonId;
use crate::tui;

/// Charthouse — learn Kubernetes from your terminal.
#[derive(Debug, Parser)]
#[command(name = "charthouse")]
pub struct Cli {
    /// Lesson to open first (e.g. `pods`, `kubernetes-intro`).
    #[arg(long, value_parser = parse_lesson)]
    start: Option<LessonId>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the course outline.
    Lessons,

    /// Ask the assistant one question and print the reply.
    Ask {
        /// The question, as one or more words.
        #[arg(required = true)]
        question: Vec<String>,
    },
}

fn parse_lesson(value: &str) -> Result<LessonId, String> {
    LessonId::from_slug(value).ok_or_else(|| {
        let known: Vec<&str> = LessonId::ALL.iter().map(|l| l.slug()).collect();
        format!("unknown lesson `{value}` (expected one of: {})", known.join(", "))
    })
}

/// Parse arguments and dispatch.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = Config::load()?;
            let start = cli.start.unwrap_or(LessonId::Intro);
            tui::run(&config, start).map_err(|e| format!("terminal error: {e}"))
        }
        Some(Command::Lessons) => {
            print_lessons();
            Ok(())
        }
        Some(Command::Ask { question }) => ask(&question.join(" ")),
    }
}

fn print_lessons() {
    for (i, lesson) in LessonId::ALL.into_iter().enumerate() {
        println!("{}. {}", i + 1, lesson.slug());
    }
}

/// One-shot question with no conversation history.
fn ask(question: &str) -> Result<(), String> {
    if question.trim().is_empty() {
        return Err("nothing to ask".to_string());
    }

    let config = Config::load()?;
    let request = ChatRequest {
        message: question.trim().to_string(),
        provider: config.provider,
        conversation_history: Vec::new(),
    };

    let reply = client::post(&config.chat_url, &request).map_err(|e| e.to_string())?;
    print!("{}", markdown::flatten(&markdown::parse(&reply)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_slugs_parse() {
        assert_eq!(parse_lesson("pods"), Ok(LessonId::Pods));
        assert_eq!(
            parse_lesson("kubernetes-intro"),
            Ok(LessonId::KubernetesIntro)
        );
        assert!(parse_lesson("bridge").is_err());
    }

    #[test]
    fn cli_accepts_a_start_lesson() {
        let cli = Cli::try_parse_from(["charthouse", "--start", "nodes"]).unwrap();
        assert_eq!(cli.start, Some(LessonId::Nodes));
    }

    #[test]
    fn ask_requires_words() {
        assert!(Cli::try_parse_from(["charthouse", "ask"]).is_err());
        let cli = Cli::try_parse_from(["charthouse", "ask", "what", "is", "etcd"]).unwrap();
        match cli.command {
            Some(Command::Ask { question }) => assert_eq!(question.join(" "), "what is etcd"),
            _ => panic!("expected ask"),
        }
    }
}
