use tracing::debug;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resource::{filter_items, Editable, EntityId, MissingField};

/// What the screen is currently doing with its draft form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Creating,
    Editing(EntityId),
}

/// Errors surfaced on a screen. Causes are flattened to text so states
/// stay comparable and cheap to keep around for re-display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManagerError {
    #[error("could not load {0}s: {1}")]
    FetchFailed(&'static str, String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    MutationFailed(String),
    #[error("no {0} with id {1}")]
    NotFound(&'static str, EntityId),
    #[error("authentication required")]
    AuthRequired,
}

impl From<MissingField> for ManagerError {
    fn from(err: MissingField) -> Self {
        ManagerError::Validation(err.to_string())
    }
}

/// One screen's worth of state: the cached remote list plus the draft
/// form being edited, if any. The server stays the source of truth; the
/// list is re-fetched after every successful mutation.
pub struct ResourceManager<R: Editable> {
    items: Vec<R>,
    draft: Option<R::Draft>,
    mode: Mode,
    pending: bool,
    last_error: Option<ManagerError>,
    filter: Vec<(String, String)>,
    load_seq: u64,
}

impl<R: Editable> Default for ResourceManager<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Editable> ResourceManager<R> {
    pub fn new() -> Self {
        ResourceManager {
            items: Vec::new(),
            draft: None,
            mode: Mode::Idle,
            pending: false,
            last_error: None,
            filter: Vec::new(),
            load_seq: 0,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn draft(&self) -> Option<&R::Draft> {
        self.draft.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn last_error(&self) -> Option<&ManagerError> {
        self.last_error.as_ref()
    }

    pub fn find(&self, id: EntityId) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Case-insensitive substring filter over the resource's search
    /// fields. A view only; `items` is never reordered or touched.
    pub fn search(&self, term: &str) -> Vec<&R> {
        filter_items(&self.items, term)
    }

    /// Query parameters sent with every load, e.g. a category filter.
    /// Takes effect on the next `load`.
    pub fn set_filter(&mut self, params: Vec<(String, String)>) {
        self.filter = params;
    }

    /// Start a reload, superseding any load already in flight. Returns
    /// the sequence number to hand back to [`finish_load`].
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.pending = true;
        self.load_seq
    }

    /// Apply a finished load. A response from a superseded load is
    /// dropped on the floor: the newest request owns the list.
    pub fn finish_load(
        &mut self,
        seq: u64,
        outcome: Result<Vec<R>, ApiError>,
    ) -> Result<(), ManagerError> {
        if seq != self.load_seq {
            debug!("dropping superseded {} load (seq {seq})", R::NAME);
            return Ok(());
        }
        self.pending = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                if matches!(self.last_error, Some(ManagerError::FetchFailed(..))) {
                    self.last_error = None;
                }
                Ok(())
            }
            // Keep the stale list; a failed refresh should not blank a
            // screen that still has usable rows.
            Err(err) => Err(self.fail(Self::fetch_error(err))),
        }
    }

    pub async fn load(&mut self, client: &ApiClient) -> Result<(), ManagerError> {
        let seq = self.begin_load();
        let params: Vec<(&str, &str)> = self
            .filter
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let outcome = client.list_where::<R>(&params).await;
        self.finish_load(seq, outcome)
    }

    pub fn begin_create(&mut self) {
        self.draft = Some(R::Draft::default());
        self.mode = Mode::Creating;
        self.clear_form_error();
    }

    pub fn begin_edit(&mut self, id: EntityId) -> Result<(), ManagerError> {
        let draft = match self.find(id) {
            Some(item) => item.draft_from(),
            None => return Err(self.fail(ManagerError::NotFound(R::NAME, id))),
        };
        self.draft = Some(draft);
        self.mode = Mode::Editing(id);
        self.clear_form_error();
        Ok(())
    }

    /// Local edit of one draft field. No network, no validation beyond
    /// the field's own coercion rules. Returns false for an unknown
    /// field, an unparseable value, or when no form is open.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let Some(draft) = self.draft.as_mut() else {
            debug!("ignoring {} field edit with no form open", R::NAME);
            return false;
        };
        R::set_field(draft, field, value)
    }

    /// Swap in a complete draft, e.g. one read from a file. Ignored
    /// unless a form is open.
    pub fn replace_draft(&mut self, draft: R::Draft) -> bool {
        if self.mode == Mode::Idle {
            return false;
        }
        self.draft = Some(draft);
        true
    }

    /// Send the open draft: POST when creating, PUT when editing. The
    /// draft is validated locally first and nothing goes on the wire if
    /// a required field is missing. On success the form closes and the
    /// list is re-fetched; on rejection the form stays open for another
    /// try.
    pub async fn submit(&mut self, client: &ApiClient) -> Result<(), ManagerError> {
        let draft = match self.draft.clone() {
            Some(draft) if self.mode != Mode::Idle => draft,
            _ => {
                let err = ManagerError::Validation("no draft in progress".to_string());
                return Err(self.fail(err));
            }
        };
        if let Err(missing) = R::validate(&draft) {
            return Err(self.fail(missing.into()));
        }

        self.pending = true;
        let outcome = match self.mode {
            Mode::Editing(id) => client.update::<R>(id, &draft).await.map(|_| ()),
            _ => client.create::<R>(&draft).await.map(|_| ()),
        };
        self.pending = false;

        match outcome {
            Ok(()) => {
                self.draft = None;
                self.mode = Mode::Idle;
                self.last_error = None;
                self.load(client).await
            }
            Err(err) => Err(self.fail(Self::mutation_error(err))),
        }
    }

    /// Delete by id. Confirmation is the caller's business; this only
    /// refuses ids that are not in the cached list.
    pub async fn remove(&mut self, client: &ApiClient, id: EntityId) -> Result<(), ManagerError> {
        if self.find(id).is_none() {
            return Err(self.fail(ManagerError::NotFound(R::NAME, id)));
        }

        self.pending = true;
        let outcome = client.delete::<R>(id).await;
        self.pending = false;

        match outcome {
            Ok(()) => {
                if self.mode == Mode::Editing(id) {
                    self.draft = None;
                    self.mode = Mode::Idle;
                }
                self.last_error = None;
                self.load(client).await
            }
            Err(err) => Err(self.fail(Self::mutation_error(err))),
        }
    }

    /// Drop the open form. Form errors go with it; a fetch error stays,
    /// since the list is still the stale one it describes.
    pub fn cancel(&mut self) {
        self.draft = None;
        self.mode = Mode::Idle;
        self.clear_form_error();
    }

    fn clear_form_error(&mut self) {
        if !matches!(self.last_error, Some(ManagerError::FetchFailed(..))) {
            self.last_error = None;
        }
    }

    fn fail(&mut self, err: ManagerError) -> ManagerError {
        self.last_error = Some(err.clone());
        err
    }

    fn fetch_error(err: ApiError) -> ManagerError {
        match err {
            ApiError::AuthRequired => ManagerError::AuthRequired,
            other => ManagerError::FetchFailed(R::NAME, other.to_string()),
        }
    }

    fn mutation_error(err: ApiError) -> ManagerError {
        match err {
            ApiError::AuthRequired => ManagerError::AuthRequired,
            // Server messages pass through word for word.
            ApiError::Rejected { message, .. } => ManagerError::MutationFailed(message),
            other => ManagerError::MutationFailed(other.to_string()),
        }
    }
}
