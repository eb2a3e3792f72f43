//! Prompt text used by the conversation engine.

use std::fmt::Write as _;

use growthbot_config::Catalog;

/// Built-in assistant preamble, filled in from the catalog.
pub fn default_system_prompt(catalog: &Catalog) -> String {
    let company = catalog
        .company()
        .name
        .as_deref()
        .unwrap_or("our company");

    let mut prompt = format!(
        "You are \"GrowthBot\", a friendly and upbeat lead-generation assistant for {company}. \
         Keep the conversation engaging; emojis are welcome where they fit.\n\n\
         Demo notice: this is a demonstration. No data is stored and no emails are sent.\n\n\
         Your goal is to help visitors learn about the company's services and to gather \
         enough project details for a follow-up.\n\n\
         1. Greet the visitor and offer information about the company and its services.\n"
    );

    let services = catalog.services();
    if !services.is_empty() {
        prompt.push_str("   When asked what is on offer, list the services as bullets:\n");
        for service in services {
            match service.short_description.as_deref() {
                Some(d) => {
                    let _ = writeln!(prompt, "   * {}: {d}", service.name);
                }
                None => {
                    let _ = writeln!(prompt, "   * {}", service.name);
                }
            }
        }
    }

    prompt.push_str(
        "2. When the visitor shows interest in a service, call `get_service_detail` and \
            present the steps as a formatted list.\n\
         3. Then run a short questionnaire, one question at a time:\n\
            * which services they are interested in (or which others, if they already said),\n\
            * how soon they want to get started,\n\
            * whether they prefer a live demo or more information by email.\n\
         4. If they pick a live demo, say it will be scheduled and ask what else you can help with.\n\
         5. If they pick email, call `store_client_info` and then \
            `send_detailed_questionnaire_email`, show the simulated email, and ask if there is \
            anything else.\n\
         6. When they are done, thank them and remind them this was a demo.\n\n\
         Use the tools for company, pricing and process questions instead of guessing. \
         Format answers clearly.",
    );
    prompt
}

/// Preamble with the running summary framed as prior context.
pub fn with_summary(preamble: &str, summary: &str) -> String {
    format!("{preamble}\n\n# Summary of Prior Conversation:\n{summary}\n\n# Recent Messages:")
}

/// Instruction for one compaction pass over `transcript`.
pub fn summary_request(previous_summary: &str, transcript: &str) -> String {
    if previous_summary.is_empty() {
        format!("Please create a concise summary of the following conversation:\n{transcript}")
    } else {
        format!(
            "Current summary:\n{previous_summary}\n\n\
             Please concisely extend this summary with the following new messages:\n{transcript}"
        )
    }
}

/// User-visible reply when the model call fails.
pub fn apology(error: &impl std::fmt::Display) -> String {
    format!("Sorry, an error occurred: {error}")
}

/// Reply when a message needs more tool round-trips than allowed.
pub fn tool_limit_reached() -> String {
    "Sorry, I couldn't finish that request. Could you rephrase or ask about one thing at a time?"
        .to_string()
}
