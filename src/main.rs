use std::path::PathBuf;

use clap::Parser;
use dev_quiz::{AnswerPolicy, AppOptions, QuizApp};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON catalog to load instead of the bundled one
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Allow moving past a question without answering it
    #[arg(long)]
    allow_skip: bool,
}

impl Args {
    fn options(&self) -> AppOptions {
        let answer_policy = if self.allow_skip {
            AnswerPolicy::Optional
        } else {
            AnswerPolicy::Required
        };

        AppOptions {
            answer_policy,
            ..AppOptions::default()
        }
    }
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let loaded = match &args.catalog {
        Some(path) => QuizApp::from_json(path, args.options()),
        None => QuizApp::bundled(args.options()),
    };
    let quiz = match loaded {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
