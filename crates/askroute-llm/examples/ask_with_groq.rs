//! Example: Route questions through Groq
//!
//! Classifies each question and answers it with the prompt for its category.
//!
//! Prerequisites:
//! - Set the GROQ_API_KEY environment variable
//!
//! Run with:
//! ```bash
//! export GROQ_API_KEY=your-api-key
//! cargo run -p askroute-llm --example ask_with_groq
//! ```

use askroute_llm::{GroqProvider, LLMError, QuestionRouter};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== askroute with Groq ===\n");

    let provider = match GroqProvider::from_env() {
        Ok(provider) => Arc::new(provider),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Please set it with: export GROQ_API_KEY=your-api-key");
            std::process::exit(1);
        }
    };

    let router = QuestionRouter::with_defaults(provider);

    let questions = [
        "What are the legal implications of a contract?",
        "How should I record revenue from a long-term contract?",
        "What dietary changes can help with high cholesterol?",
        "What's the weather today?",
    ];

    for (i, question) in questions.iter().enumerate() {
        println!("Question {}: {}\n", i + 1, question);

        match router.ask(question).await {
            Ok(routed) => {
                println!("Category: {}", routed.category);
                println!("{}", routed.answer);
            }
            Err(LLMError::Unclassified(label)) => {
                println!("The question cannot be classified (model said: {})", label);
            }
            Err(e) => {
                eprintln!("Error answering question {}: {}", i + 1, e);
            }
        }
        println!("\n{}\n", "-".repeat(80));
    }

    Ok(())
}
