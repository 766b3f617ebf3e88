use std::sync::OnceLock;

static CLEANUP_REQUEST_ID: OnceLock<Vec<(&'static str, &'static str)>> = OnceLock::new();

/// Insta filters replacing generated request ids, so snapshots of response
/// headers stay stable.
///
/// ```rust,ignore
/// let mut settings = insta::Settings::clone_current();
/// for (pattern, replacement) in cleanup_request_id() {
///     settings.add_filter(pattern, *replacement);
/// }
/// ```
#[must_use]
pub fn cleanup_request_id() -> &'static Vec<(&'static str, &'static str)> {
    CLEANUP_REQUEST_ID.get_or_init(|| {
        vec![(
            r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
            "REQUEST_ID",
        )]
    })
}
