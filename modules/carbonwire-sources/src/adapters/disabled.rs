//! Identifiers known to the registry's static metadata but intentionally
//! excluded from the default source list. `registry::lookup` still resolves
//! them, so an operator can opt one in explicitly; `default_sources()` never
//! includes them.

/// `(id, reason)`.
pub const DISABLED_SOURCES: &[(&str, &str)] = &[
    (
        "montel-carbon",
        "listing page is behind a JavaScript proof-of-work challenge this client cannot pass",
    ),
    (
        "argus-carbon",
        "full articles require an authenticated subscription; only a teaser is public",
    ),
    (
        "refinitiv-carbon-points",
        "upstream markup regression broke title extraction; tracked for a selector fix",
    ),
];
