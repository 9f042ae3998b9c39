use std::fmt;

/// Non-fatal data-quality signals collected during extraction.
/// None of these alter the extracted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No hyperlink in a member item matched its anchor marker (or no
    /// marker was present at all). The item keeps an empty link.
    UnresolvedLink { marker: Option<String> },
    /// Item text carries a literal `@deprecated` but no structured
    /// deprecation rationale was recorded.
    DeprecatedMarkerWithoutComment { link: String },
    /// Descriptor `kind` outside the known Scala type kinds.
    UnexpectedKind {
        package: String,
        file: Option<String>,
        kind: Option<String>,
    },
    /// Descriptor held a list under a key that is not a known member
    /// category; its entries were skipped.
    UnrecognizedCategory { package: String, key: String },
    /// Package value was not a list of type descriptors.
    MalformedPackage { package: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedLink { marker: Some(m) } => {
                write!(f, "no hyperlink matched anchor marker {:?}", m)
            }
            Diagnostic::UnresolvedLink { marker: None } => {
                write!(f, "member item has no anchor marker")
            }
            Diagnostic::DeprecatedMarkerWithoutComment { link } => {
                write!(f, "@deprecated marker without rationale ({})", link)
            }
            Diagnostic::UnexpectedKind { package, file, kind } => write!(
                f,
                "unexpected Scala type kind {:?} for {}/{}",
                kind,
                package,
                file.as_deref().unwrap_or("?")
            ),
            Diagnostic::UnrecognizedCategory { package, key } => write!(
                f,
                "list under unrecognized key {:?} in {} may hold missed functions",
                key, package
            ),
            Diagnostic::MalformedPackage { package } => {
                write!(f, "package {:?} is not a descriptor list", package)
            }
        }
    }
}

/// Collector the extraction functions write warnings into. The caller owns
/// it, so drivers can forward to tracing while tests assert on the contents.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, d: Diagnostic) {
        self.items.push(d);
    }

    pub fn merge(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn items(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Forward everything collected to the tracing subscriber.
    pub fn emit(&self) {
        for d in &self.items {
            tracing::warn!("{}", d);
        }
    }
}
