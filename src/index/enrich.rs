use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::diag::{Diagnostic, Diagnostics};

/// Descriptor keys whose lists hold function entries.
const MEMBER_CATEGORIES: [&str; 4] = [
    "members_object",
    "members_trait",
    "members_class",
    "members_case class",
];

/// Scala type kinds the generator is known to emit.
const EXPECTED_KINDS: [&str; 4] = ["case class", "class", "object", "trait"];

/// One function entry from a descriptor's member list, verbatim. Accepted
/// only when the source object carries exactly these five string fields;
/// anything else (e.g. error stubs shaped `{member, error}`) is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionBlock {
    pub label: String,
    pub tail: String,
    pub member: String,
    pub link: String,
    pub kind: String,
}

/// A function denormalized with its enclosing Scala type descriptor. Every
/// block from the same descriptor carries identical descriptor fields; the
/// four link fields are sparse by construction (normally one is set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedFunctionBlock {
    pub package_name: String,
    pub file_name: Option<String>,
    pub short_description: Option<String>,
    pub kind: Option<String>,
    pub case_class_link: Option<String>,
    pub class_link: Option<String>,
    pub object_link: Option<String>,
    pub trait_link: Option<String>,
    pub function_block: FunctionBlock,
}

/// Walk the package → descriptor → member-category hierarchy of a trimmed
/// index document and flatten it into enriched blocks, preserving document
/// order throughout.
pub fn enrich(json_text: &str, diags: &mut Diagnostics) -> Result<Vec<EnrichedFunctionBlock>> {
    let doc: Value = serde_json::from_str(json_text)?;
    let Value::Object(packages) = doc else {
        bail!("index body is not a JSON object");
    };

    let mut blocks = Vec::new();
    for (package_name, descriptors) in &packages {
        let Some(descriptors) = descriptors.as_array() else {
            diags.warn(Diagnostic::MalformedPackage {
                package: package_name.clone(),
            });
            continue;
        };
        for descriptor in descriptors {
            if let Some(descriptor) = descriptor.as_object() {
                blocks.extend(enrich_descriptor(package_name, descriptor, diags));
            }
        }
    }
    Ok(blocks)
}

/// Flatten one type descriptor. List values under recognized category keys
/// contribute function blocks; lists under any other key are skipped with a
/// diagnostic, non-list values are ignored.
pub fn enrich_descriptor(
    package_name: &str,
    descriptor: &Map<String, Value>,
    diags: &mut Diagnostics,
) -> Vec<EnrichedFunctionBlock> {
    let mut blocks = Vec::new();
    for (key, value) in descriptor {
        let Some(candidates) = value.as_array() else {
            continue;
        };
        if MEMBER_CATEGORIES.contains(&key.as_str()) {
            blocks.extend(enrich_category(package_name, descriptor, candidates, diags));
        } else {
            diags.warn(Diagnostic::UnrecognizedCategory {
                package: package_name.to_string(),
                key: key.clone(),
            });
        }
    }
    blocks
}

fn enrich_category(
    package_name: &str,
    descriptor: &Map<String, Value>,
    candidates: &[Value],
    diags: &mut Diagnostics,
) -> Vec<EnrichedFunctionBlock> {
    let kind = str_field(descriptor, "kind");
    if !matches!(kind.as_deref(), Some(k) if EXPECTED_KINDS.contains(&k)) {
        diags.warn(Diagnostic::UnexpectedKind {
            package: package_name.to_string(),
            file: str_field(descriptor, "name"),
            kind: kind.clone(),
        });
    }

    candidates
        .iter()
        .filter_map(accept)
        .map(|function_block| EnrichedFunctionBlock {
            package_name: package_name.to_string(),
            file_name: str_field(descriptor, "name"),
            short_description: str_field(descriptor, "shortDescription"),
            kind: kind.clone(),
            case_class_link: str_field(descriptor, "case class"),
            class_link: str_field(descriptor, "class"),
            object_link: str_field(descriptor, "object"),
            trait_link: str_field(descriptor, "trait"),
            function_block,
        })
        .collect()
}

/// Acceptance rule: the candidate deserializes iff its key set is exactly
/// the five function-block fields. Rejections are expected noise, dropped
/// without a diagnostic.
fn accept(candidate: &Value) -> Option<FunctionBlock> {
    serde_json::from_value(candidate.clone()).ok()
}

fn str_field(descriptor: &Map<String, Value>, key: &str) -> Option<String> {
    descriptor.get(key).and_then(Value::as_str).map(str::to_string)
}

// ── Tests ──
