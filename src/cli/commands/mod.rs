pub mod access_level;
pub mod auth;
pub mod compliance;
pub mod department;
pub mod employee;
pub mod logs;
pub mod paths;
pub mod threat;

use std::path::PathBuf;

use anyhow::{Context, Result};
use url::Url;

use crate::cli::utils::{draft_from_file, parse_set_pair};
use crate::client::ApiClient;
use crate::config::settings;
use crate::manager::ResourceManager;
use crate::resource::Editable;
use crate::session::Auth;

fn base_url() -> Result<Url> {
    let raw = &settings().api.base_url;
    Url::parse(raw).with_context(|| format!("invalid API base url '{raw}'"))
}

/// Client carrying whatever `AEGIS_TOKEN` holds. Endpoints that need
/// auth will answer 401 if it is missing or stale.
pub fn authed_client() -> Result<ApiClient> {
    Ok(ApiClient::new(base_url()?, Auth::from_env())?)
}

/// Client with no credentials, for login and registration.
pub fn anon_client() -> Result<ApiClient> {
    Ok(ApiClient::new(base_url()?, Auth::Anonymous)?)
}

/// Fill the open draft from `--file` and `--set` arguments. The file
/// loads first so explicit pairs win over it.
pub fn apply_draft_inputs<R: Editable>(
    manager: &mut ResourceManager<R>,
    file: Option<PathBuf>,
    sets: Vec<String>,
) -> Result<()> {
    if let Some(path) = file {
        let draft: R::Draft = draft_from_file(&path)?;
        manager.replace_draft(draft);
    }
    for pair in sets {
        let (field, value) = parse_set_pair(&pair)?;
        if !manager.set_field(&field, &value) {
            anyhow::bail!("unknown field or invalid value: {pair}");
        }
    }
    Ok(())
}
