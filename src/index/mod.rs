pub mod encode;
pub mod enrich;
pub mod trim;

use anyhow::Result;

use crate::diag::Diagnostics;
use enrich::EnrichedFunctionBlock;

/// Full index pipeline: strip the generator wrapper off a raw index.js
/// artifact, then flatten the package hierarchy into enriched blocks.
pub fn extract_index(raw: &str, diags: &mut Diagnostics) -> Result<Vec<EnrichedFunctionBlock>> {
    let body = trim::trim(raw)?;
    enrich::enrich(&body, diags)
}

// ── Tests ──
