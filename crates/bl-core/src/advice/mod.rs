//! Prompt construction and fallback copy for the generative advice boundary.
//!
//! The generator itself is an external collaborator (see
//! [`crate::ports::AdviceGeneratorPort`]); this module only owns the prompt
//! text and the strings substituted when the collaborator fails.

/// Broker persona prompt wrapped around a free-text user question.
pub fn advice_prompt(query: &str) -> String {
    format!(
        "You are a professional Kenyan Insurance Broker. Provide a short, helpful response \
         to this query: {query}. Focus on local context (Kenyan Shillings, local providers \
         like Britam, Jubilee, APA). Keep it under 100 words."
    )
}

/// Prompt asking for a two-sentence snippet of an insurance news article.
pub fn summary_prompt(content: &str) -> String {
    format!("Summarize this insurance news into a 2-sentence snippet: {content}")
}

/// Substituted when advice generation fails or produces nothing.
pub const ADVICE_FALLBACK: &str = "I'm currently offline, but generally, it's best to compare \
     at least 3 quotes before deciding on an insurance policy in Kenya.";

/// Fallback snippet when summarization fails: the leading 100 characters of
/// the article, on a char boundary, always with a trailing ellipsis.
pub fn fallback_summary(content: &str) -> String {
    const SNIPPET_CHARS: usize = 100;
    let snippet: String = content.chars().take(SNIPPET_CHARS).collect();
    format!("{snippet}...")
}
