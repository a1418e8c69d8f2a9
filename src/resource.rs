use serde::de::DeserializeOwned;
use serde::Serialize;

/// Integer identifier assigned by the backend. The field name differs per
/// resource (`dept_id`, `employee_id`, `access_id`, `id`) but identity
/// semantics are the same everywhere: two records are the same entity iff
/// their identifiers match.
pub type EntityId = u64;

/// A record type managed through one REST collection.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Singular name used in messages ("department", "threat", ...).
    const NAME: &'static str;
    /// Collection path under the API root, without leading or trailing
    /// slashes, e.g. "api/access/departments".
    const COLLECTION: &'static str;

    fn id(&self) -> EntityId;

    /// Fields considered by client-side search, in display order.
    fn search_fields(&self) -> Vec<&str>;
}

/// Extension for resources that can be created and edited through a form
/// draft. Read-only resources (log entries) implement only [`Resource`].
pub trait Editable: Resource {
    /// The write shape: what a create or full-update request carries.
    /// Server-assigned fields (the identifier, timestamps) never appear.
    type Draft: Default + Clone + Serialize + DeserializeOwned + Send + Sync;

    /// Copy this record's editable fields into a draft.
    fn draft_from(&self) -> Self::Draft;

    /// Apply one field edit to a draft by wire field name. Returns false
    /// when the field is unknown or the value is unusable for it; the
    /// draft is left unchanged in that case.
    fn set_field(draft: &mut Self::Draft, field: &str, value: &str) -> bool;

    /// Check that every required field is filled in.
    fn validate(draft: &Self::Draft) -> Result<(), MissingField>;
}

/// A required field that is still empty at submit time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required field: {0}")]
pub struct MissingField(pub &'static str);

/// Numeric form coercion: parse, defaulting to zero on anything else.
pub fn coerce_number<N>(value: &str) -> N
where
    N: std::str::FromStr + Default,
{
    value.trim().parse().unwrap_or_default()
}

/// Case-insensitive substring match across a resource's search fields.
/// An empty or whitespace-only term matches everything.
pub fn matches_term<R: Resource>(item: &R, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields().iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Filter a list view by search term. Purely a view over `items`; the
/// slice itself is never reordered or mutated.
pub fn filter_items<'a, R: Resource>(items: &'a [R], term: &str) -> Vec<&'a R> {
    items.iter().filter(|item| matches_term(*item, term)).collect()
}
