//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::Formatter;
use nyay_domain::VerdictsResponse;
use nyay_verdicts::VerdictParser;
use tracing::debug;

/// Parse input text into a verdicts response.
pub fn parse_input(text: &str, as_document: bool, parser: &VerdictParser) -> Result<VerdictsResponse> {
    if as_document {
        return Ok(parser.parse_document(text)?);
    }

    Ok(VerdictsResponse {
        verdicts: parser.parse(text),
        sources: Vec::new(),
    })
}

/// Non-blank input that yielded nothing, e.g. a table header with no rows.
fn came_up_empty(text: &str, response: &VerdictsResponse) -> bool {
    response.verdicts.is_empty() && !text.trim().is_empty()
}

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, parser: &VerdictParser, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args.input)?;
    debug!(bytes = text.len(), document = args.json, "Parsing input");

    let response = parse_input(&text, args.json, parser)?;
    if came_up_empty(&text, &response) {
        eprintln!("{}", formatter.warning("Input was not blank but produced no verdicts"));
    }
    println!("{}", formatter.format_response(&response)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_parse_plain_text() {
        let parser = VerdictParser::default();
        let response = parse_input("First case.\n\nSecond case.", false, &parser).unwrap();
        assert_eq!(response.verdicts.len(), 2);
        assert!(response.sources.is_empty());
    }

    #[test]
    fn test_parse_document_with_sources() {
        let parser = VerdictParser::default();
        let json = r#"{"text": "**Case Name:** A vs. B\n**Court:** SC", "sources": [{"uri": "https://example.org", "title": "Ex"}]}"#;
        let response = parse_input(json, true, &parser).unwrap();
        assert_eq!(response.verdicts.len(), 1);
        assert_eq!(response.verdicts[0].court, "SC");
        assert_eq!(response.sources.len(), 1);
    }

    #[test]
    fn test_empty_table_is_flagged() {
        let parser = VerdictParser::default();
        let text = "| Case Name | Date | Court | Summary |\n|---|---|---|---|";
        let response = parse_input(text, false, &parser).unwrap();
        assert!(came_up_empty(text, &response));

        let blank = parse_input("  ", false, &parser).unwrap();
        assert!(!came_up_empty("  ", &blank));
    }

    #[test]
    fn test_parse_malformed_document() {
        let parser = VerdictParser::default();
        let result = parse_input("not json", true, &parser);
        assert!(matches!(result, Err(CliError::Verdict(_))));
    }
}
