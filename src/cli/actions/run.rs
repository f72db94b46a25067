use super::{Action, account, catalog, output::report, route};
use crate::{
    api::{ApiConfig, JoblyApi},
    auth::AuthFlow,
    cli::globals::GlobalArgs,
    session::SessionStore,
};
use anyhow::{Context, Result};
use tracing::debug;

/// Builds the gateway and auth flow for one invocation. The session is
/// restored from the supplied token only when `restore` is set.
///
/// # Errors
/// Returns an error if the base url is invalid or the token is rejected.
pub async fn connect(globals: &GlobalArgs, restore: bool) -> Result<AuthFlow> {
    let config = ApiConfig::parse(&globals.base_url).context("invalid JOBLY_BASE_URL")?;
    let api = JoblyApi::new(&config, SessionStore::new())?;
    let auth = AuthFlow::new(api);

    if let Some(token) = globals.token.as_ref().filter(|_| restore) {
        debug!("restoring session from token");
        auth.restore(token.clone()).await.map_err(report)?;
    }

    Ok(auth)
}

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
// To add a new action, add a new `Action::*` variant and a corresponding call here.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action, globals: &GlobalArgs) -> Result<()> {
    // A saved token must not stand in the way of getting a new one.
    let restore = !matches!(action, Action::Login(_) | Action::Signup(_));
    let auth = connect(globals, restore).await?;

    let output = match action {
        Action::Companies(search) => catalog::companies(&auth, &search).await?,
        Action::Company { handle } => catalog::company(&auth, &handle).await?,
        Action::Jobs(search) => catalog::jobs(&auth, &search).await?,
        Action::Login(request) => account::login(&auth, request).await?,
        Action::Signup(request) => account::signup(&auth, request).await?,
        Action::Profile => account::profile(&auth)?,
        Action::UpdateProfile(changes) => account::update_profile(&auth, changes).await?,
        Action::Apply { job_id } => account::apply(&auth, job_id).await?,
        Action::Route { path } => route::describe(&auth, &path),
    };

    println!("{output}");
    Ok(())
}
