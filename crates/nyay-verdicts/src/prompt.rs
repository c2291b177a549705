//! Fixed request for the recent-verdicts feed

use nyay_domain::GenerationRequest;

/// User query sent to the generator
pub const RECENT_VERDICTS_QUERY: &str = "Find 5 recent significant court verdicts in India.";

/// System instruction asking for one of the layouts the parser understands
pub const RECENT_VERDICTS_SYSTEM_PROMPT: &str = r#"You are a legal news AI for Indian citizens.
Report recent significant verdicts from Indian courts (Supreme Court and High Courts).
For each verdict give the case name, the court, the date of judgment and a short plain-language summary.
Format the answer as a numbered list where every item looks like:

1. **Case Name:** <parties>
**Court:** <court>
**Date:** <date>
**Summary:** <two or three sentences>

Do not add commentary before or after the list."#;

/// Build the grounded recent-verdicts request
pub fn recent_verdicts_request() -> GenerationRequest {
    GenerationRequest::new(RECENT_VERDICTS_QUERY, RECENT_VERDICTS_SYSTEM_PROMPT).with_grounding(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_grounded() {
        let request = recent_verdicts_request();
        assert!(request.use_grounding);
        assert_eq!(request.user_query, RECENT_VERDICTS_QUERY);
    }

    #[test]
    fn test_prompt_names_every_label() {
        for label in ["**Case Name:**", "**Court:**", "**Date:**", "**Summary:**"] {
            assert!(RECENT_VERDICTS_SYSTEM_PROMPT.contains(label), "missing {}", label);
        }
    }
}
