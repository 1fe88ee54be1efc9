// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;

use crate::commands::{CommandHandler, Reply};
use crate::questions::{Category, QuestionConfig, QuestionService};

/// truthbot CLI
#[derive(Parser, Debug)]
#[command(name = "truthbot-cli")]
#[command(version)]
#[command(about = "Fetch truth, dare and would-you-rather questions from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one random question
    Ask {
        /// truth, dare or would_you_rather (random when omitted)
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Print every question currently available for a category
    List {
        category: Category,
    },

    /// Load every category, then print cache status
    Stats,

    /// Run a chat command such as "!truth"
    Command {
        /// Message text
        text: Vec<String>,

        /// Author name used in reply footers
        #[arg(long, default_value = "cli")]
        author: String,
    },
}

impl clap::ValueEnum for Category {
    fn value_variants<'a>() -> &'a [Self] {
        &Category::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let config = QuestionConfig::from_env();
    let service = Arc::new(QuestionService::new(config).context("invalid question configuration")?);

    let result = run(&cli.command, service.clone()).await;
    service.close();
    result
}

async fn run(command: &Commands, service: Arc<QuestionService>) -> Result<()> {
    match command {
        Commands::Ask { category } => match service.get_random_question(*category).await {
            Some(picked) => println!("[{}] {}", picked.category, picked.question),
            None => println!("Sorry, I couldn't get a question right now. Try again later!"),
        },
        Commands::List { category } => {
            let questions = service.get_all_questions(*category).await;
            for (i, question) in questions.iter().enumerate() {
                println!("{:>3}. {}", i + 1, question);
            }
        }
        Commands::Stats => {
            for category in Category::ALL {
                service.get_all_questions(category).await;
            }
            for (category, info) in service.get_cache_info() {
                println!(
                    "{}: {} questions (age: {} min, fresh: {})",
                    category, info.question_count, info.cache_age_minutes, info.is_fresh
                );
            }
        }
        Commands::Command { text, author } => {
            let handler = CommandHandler::new(service);
            match handler.handle_message(&text.join(" "), author).await {
                Some(reply) => print_reply(&reply),
                None => println!("(not a command)"),
            }
        }
    }
    Ok(())
}

fn print_reply(reply: &Reply) {
    match reply {
        Reply::Text { content } => println!("{}", content),
        Reply::Embed(embed) => {
            println!("{}", embed.title);
            if let Some(description) = &embed.description {
                println!("{}", description);
            }
            for field in &embed.fields {
                println!("\n{}\n{}", field.name, field.value);
            }
            if let Some(footer) = &embed.footer {
                println!("\n-- {}", footer);
            }
        }
    }
}
