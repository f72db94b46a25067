pub mod account;
pub mod catalog;
pub mod route;

mod output;

// Internal "interpreter" for `Action`.
// The match lives in a separate module so `mod.rs` stays small as actions are added.
mod run;

use crate::api::types::{CompanySearch, JobSearch, LoginRequest, RegisterRequest};
use crate::cli::globals::GlobalArgs;

#[derive(Debug)]
pub enum Action {
    Companies(CompanySearch),
    Company { handle: String },
    Jobs(JobSearch),
    Login(LoginRequest),
    Signup(RegisterRequest),
    Profile,
    UpdateProfile(account::ProfileChanges),
    Apply { job_id: u64 },
    Route { path: String },
}

impl Action {
    /// Execute the action against the backend described by `globals`.
    /// # Errors
    /// Returns an error if the action fails; backend failures carry every message.
    pub async fn execute(self, globals: &GlobalArgs) -> anyhow::Result<()> {
        run::execute(self, globals).await
    }
}
