//! Advisory system prompt

/// System instruction for a delegated question
///
/// `lang` and `topic` are free-form and embedded verbatim.
pub fn advisory_prompt(lang: &str, topic: &str) -> String {
    format!(
        "You are a farming advisory assistant.\n\
         Answer in clear, step-by-step format.\n\
         Make sure the response is in the requested language: {lang}.\n\
         The topic is {topic}. Keep answers practical for farmers."
    )
}
