use thiserror::Error;

/// Literal prefix the doc generator writes in front of the index JSON.
const MARKER: &str = "Index.PACKAGES = ";

/// The marker literal appeared more than once, so the JSON body cannot be
/// recovered unambiguously. The only fatal condition in either pipeline;
/// the binary maps it to exit status 1.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("found '{MARKER}' inside the index body; cannot trim unambiguously")]
pub struct AmbiguousMarker;

/// Strip the `Index.PACKAGES = { ... };` wrapper off a raw index artifact,
/// yielding the JSON document text. Tolerates surrounding whitespace and a
/// missing marker; strips exactly one trailing `;` if present.
pub fn trim(raw: &str) -> Result<String, AmbiguousMarker> {
    let stripped = raw.trim();
    let parts: Vec<&str> = stripped.split(MARKER).collect();
    if parts.len() > 2 {
        return Err(AmbiguousMarker);
    }
    // Concatenating the split pieces reconstitutes the text when the marker
    // never occurred, so the zero-occurrence case falls through gracefully.
    let body = parts.concat();
    Ok(body.strip_suffix(';').unwrap_or(&body).to_string())
}

// ── Tests ──
