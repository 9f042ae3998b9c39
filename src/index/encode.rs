use super::enrich::EnrichedFunctionBlock;

/// Serialize one enriched block as a compact JSON line: declared field
/// order, absent fields as null, no extraneous whitespace.
pub fn encode(block: &EnrichedFunctionBlock) -> String {
    serde_json::to_string(block).unwrap_or_default()
}

// ── Tests ──
