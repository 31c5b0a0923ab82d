//! Prompt templates for classification and category-specific answering

/// Placeholder substituted with the user's question
pub const QUESTION_SLOT: &str = "{question}";

/// A static prompt with a single `{question}` slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    text: &'static str,
}

impl PromptTemplate {
    /// Wrap a static template string
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }

    /// Raw template text, slot included
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Render the template with the question text.
    ///
    /// Substitution is a single literal pass over the template, so braces or
    /// a literal `{question}` inside the question are inserted verbatim.
    pub fn render(&self, question: &str) -> String {
        self.text.replacen(QUESTION_SLOT, question, 1)
    }
}

/// Prompt asking the model to label a question's subject matter
pub const CLASSIFIER_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"
    As a language model, you are tasked with categorizing questions based on their subject matter.
    Below is a question that requires classification. Analyze the content and context of the question
    and determine which of the following categories it best fits: Legal, Accounting, Medical, or Other.
    If the question does not clearly align with Legal, Accounting, or Medical categories, classify it
    as Other and provide a brief explanation as to why it does not fit the other categories.

    Question: "{question}"

    Please provide the classification and your reasoning for this categorization:

    Classification:
    Reasoning (if applicable):
    "#,
);

/// Prompt for legal questions
pub const LEGAL_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"
    Imagine you are a seasoned lawyer with expertise in intellectual property, criminal defense,
    contract law, etc. A client has approached you with the following question: "{question}".
    Please provide a detailed, legally-informed response that addresses the client's concerns
    and outlines potential legal strategies or considerations.
    "#,
);

/// Prompt for accounting questions
pub const ACCOUNTING_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"
    You are an expert accountant with extensive knowledge in financial accounting, tax laws,
    and corporate finance. Your expertise includes but is not limited to bookkeeping, financial
    reporting, auditing, tax preparation, and financial planning. Please provide detailed,
    accurate, and professional answers to the user's question: "{question}".
    Act as their personal accountant.
    "#,
);

/// Prompt for medical questions
pub const MEDICAL_PROMPT: PromptTemplate = PromptTemplate::new(
    r#"
    Imagine you are an expert medical doctor with extensive knowledge and experience
    in various fields of medicine. A patient has come to you with a question regarding
    their health: "{question}". Please provide a detailed, informative,
    and empathetic response to the patient's inquiry, drawing upon your medical expertise.
    "#,
);
