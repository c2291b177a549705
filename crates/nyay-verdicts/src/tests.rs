//! Pipeline tests for the verdict parser

#[cfg(test)]
mod tests {
    use crate::{
        parse_verdicts, sanitize, ParserConfig, StrategyKind, VerdictError, VerdictFeed,
        VerdictParser, RECENT_VERDICTS_QUERY,
    };
    use nyay_domain::{Source, NOT_AVAILABLE, SINGLETON_CASE_NAME};
    use nyay_llm::{GeneratorError, MockGenerator};

    const BOLD_RESPONSE: &str = "Here are five recent verdicts:\n\n\
        1. **Case Name:** Justice K.S. Puttaswamy vs. Union of India\n\
        **Court:** Supreme Court of India\n\
        **Date:** 2017-08-24\n\
        **Summary:** The right to privacy is a fundamental right.\n\n\
        2. **Case Name:** Navtej Singh Johar vs. Union of India\n\
        **Court:** Supreme Court of India\n\
        **Date:** 2018-09-06\n\
        **Summary:** Section 377 read down.";

    #[test]
    fn test_table_wins_over_bold_markers() {
        let text = "| Case Name | Date | Court | Summary |\n\
                    |---|---|---|---|\n\
                    | A vs. B | 2024 | SC | Mentions **Case Name:** inline |";
        let records = parse_verdicts(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].case_name, "A vs. B");
        assert_eq!(records[0].summary, "Mentions Case Name: inline");
    }

    #[test]
    fn test_bold_wins_over_paragraphs() {
        let records = parse_verdicts(BOLD_RESPONSE);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].summary, "Here are five recent verdicts:");
        assert_eq!(records[1].case_name, "Justice K.S. Puttaswamy vs. Union of India");
        assert_eq!(records[1].date, "2017-08-24");
        assert_eq!(records[2].court, "Supreme Court of India");
        assert_eq!(records[2].summary, "Section 377 read down.");
    }

    #[test]
    fn test_empty_table_does_not_fall_through() {
        let text = "| Case Name | Date | Court | Summary |\n|---|---|---|---|\n\nNo verdicts found.";
        assert!(parse_verdicts(text).is_empty());
    }

    #[test]
    fn test_sanitizer_runs_before_detection() {
        let text = "\u{FEFF}First verdict text.\r\n\r\n----,,,,Second verdict text.";
        let records = parse_verdicts(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].case_name, "Second verdict text.");
    }

    #[test]
    fn test_ids_are_positions() {
        let records = parse_verdicts("a\n\nb\n\nc");
        let ids: Vec<usize> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_structured_only_skips_paragraph_split() {
        let parser = VerdictParser::new(ParserConfig::structured_only()).unwrap();
        let records = parser.parse("First case.\n\nSecond case.");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].case_name, SINGLETON_CASE_NAME);
        assert_eq!(records[0].summary, "First case.\n\nSecond case.");
    }

    #[test]
    fn test_reordered_strategies() {
        let config = ParserConfig {
            strategies: vec![StrategyKind::Paragraphs, StrategyKind::Table],
            ..ParserConfig::default()
        };
        let parser = VerdictParser::new(config).unwrap();
        let text = "Intro line.\n\n| Case Name | Date | Court | Summary |\n|---|---|---|---|\n| A | 1 | X | s |";
        let records = parser.parse(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].case_name, "Intro line.");
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse_verdicts(BOLD_RESPONSE), parse_verdicts(BOLD_RESPONSE));
    }

    #[test]
    fn test_parser_shared_across_threads() {
        let parser = std::sync::Arc::new(VerdictParser::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let parser = parser.clone();
                std::thread::spawn(move || parser.parse(BOLD_RESPONSE).len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 3);
        }
    }

    #[test]
    fn test_feed_parses_generator_output() {
        let mut generator = MockGenerator::default();
        let sources = vec![
            Source::new("https://main.sci.gov.in/", "Supreme Court of India"),
            Source::new("https://example.org/news", ""),
        ];
        generator.add_response_with_sources(RECENT_VERDICTS_QUERY, BOLD_RESPONSE, sources.clone());

        // Clones share the reply table and the call counter
        let feed = VerdictFeed::new(generator.clone(), VerdictParser::default());
        let response = feed.fetch_recent().unwrap();

        assert_eq!(response.verdicts.len(), 3);
        assert_eq!(response.sources, sources);
        assert_eq!(generator.call_count(), 1);
    }

    #[test]
    fn test_feed_surfaces_generator_errors() {
        let mut generator = MockGenerator::default();
        generator.add_error(
            RECENT_VERDICTS_QUERY,
            GeneratorError::Communication("connection reset".to_string()),
        );

        let feed = VerdictFeed::new(generator, VerdictParser::default());
        match feed.fetch_recent() {
            Err(VerdictError::Generation(msg)) => assert!(msg.contains("connection reset")),
            other => panic!("Expected generation error, got {:?}", other.map(|r| r.verdicts)),
        }
    }

    #[test]
    fn test_feed_error_text_becomes_singleton() {
        let generator = MockGenerator::new("Error: API request failed after 5 attempts.");
        let feed = VerdictFeed::new(generator, VerdictParser::default());
        let response = feed.fetch_recent().unwrap();
        assert_eq!(response.verdicts.len(), 1);
        assert_eq!(response.verdicts[0].court, NOT_AVAILABLE);
        assert_eq!(response.verdicts[0].summary, "Error: API request failed after 5 attempts.");
    }

    #[test]
    fn test_sanitized_text_reparses_identically() {
        let once = sanitize(BOLD_RESPONSE);
        assert_eq!(parse_verdicts(&once), parse_verdicts(BOLD_RESPONSE));
    }
}

#[cfg(test)]
mod proptests {
    use crate::{parse_verdicts, sanitize};
    use proptest::prelude::*;

    /// Text biased towards the characters the pipeline cares about
    fn verdict_like_text() -> impl Strategy<Value = String> {
        let tokens = prop::sample::select(vec![
            "|", "-", ",", ".", "_", "*", "\n", "\r\n", "  ", "\u{200B}",
            "**Case Name:**", "**Summary:**", "1. ", "Case Name",
        ])
        .prop_map(str::to_string);

        prop::collection::vec(prop_oneof![tokens, "[a-zA-Z0-9 ]{0,8}"], 0..40)
            .prop_map(|parts| parts.concat())
    }

    proptest! {
        /// Property: sanitizing twice equals sanitizing once
        #[test]
        fn test_sanitize_idempotent(text in verdict_like_text()) {
            let once = sanitize(&text);
            prop_assert_eq!(sanitize(&once), once);
        }

        /// Property: sanitizing arbitrary unicode is idempotent too
        #[test]
        fn test_sanitize_idempotent_any(text in "\\PC*") {
            let once = sanitize(&text);
            prop_assert_eq!(sanitize(&once), once);
        }

        /// Property: every record has a non-empty case name, court and date
        #[test]
        fn test_fields_complete(text in verdict_like_text()) {
            for record in parse_verdicts(&text) {
                prop_assert!(!record.case_name.is_empty());
                prop_assert!(!record.court.is_empty());
                prop_assert!(!record.date.is_empty());
                prop_assert!(!record.case_name.contains('*'));
                prop_assert!(!record.summary.contains('*'));
            }
        }

        /// Property: blank-after-sanitizing input gives nothing, anything else
        /// gives at least one record unless an empty table matched
        #[test]
        fn test_totality(text in verdict_like_text()) {
            let records = parse_verdicts(&text);
            let cleaned = sanitize(&text);
            if cleaned.is_empty() {
                prop_assert!(records.is_empty());
            } else if !cleaned.lines().any(|l| l.trim_start().starts_with('|')) {
                prop_assert!(!records.is_empty());
            }
        }
    }
}
