//! Recent-verdicts feed: generator call followed by parsing

use crate::error::VerdictError;
use crate::parser::VerdictParser;
use crate::prompt::recent_verdicts_request;
use nyay_domain::{TextGenerator, VerdictsResponse};
use std::time::Instant;
use tracing::{info, warn};

/// Fetches recent verdicts from a text generator and structures them
pub struct VerdictFeed<G: TextGenerator> {
    generator: G,
    parser: VerdictParser,
}

impl<G: TextGenerator> VerdictFeed<G> {
    /// Create a feed with the given generator and parser
    pub fn new(generator: G, parser: VerdictParser) -> Self {
        Self { generator, parser }
    }

    /// Request recent verdicts and parse the answer
    ///
    /// Sources come back exactly as the generator returned them.
    pub fn fetch_recent(&self) -> Result<VerdictsResponse, VerdictError> {
        let start = Instant::now();
        let request = recent_verdicts_request();
        info!(query = %request.user_query, "Requesting recent verdicts");

        let output = self.generator.generate(&request).map_err(|e| {
            warn!("Verdict generation failed: {}", e);
            VerdictError::Generation(e.to_string())
        })?;

        let response = self.parser.parse_output(output);
        info!(
            verdicts = response.verdicts.len(),
            sources = response.sources.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Recent verdicts ready"
        );
        Ok(response)
    }
}
