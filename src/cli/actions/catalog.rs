//! Browsing: company list, company detail and job list. Each is a protected
//! screen, so the session must reach it before the backend is asked.

use super::output::{render, report, screen};
use crate::{
    api::types::{CompanySearch, JobSearch},
    auth::AuthFlow,
};
use anyhow::Result;

/// # Errors
/// Returns an error when anonymous or when the backend rejects the call.
pub async fn companies(auth: &AuthFlow, search: &CompanySearch) -> Result<String> {
    screen(auth, "/companies")?;
    let companies = auth.api().get_companies(search).await.map_err(report)?;
    render(&companies)
}

/// # Errors
/// Returns an error when anonymous or when the company does not exist.
pub async fn company(auth: &AuthFlow, handle: &str) -> Result<String> {
    screen(auth, &format!("/companies/{}", handle.trim()))?;
    let company = auth.api().get_company(handle).await.map_err(report)?;
    render(&company)
}

/// # Errors
/// Returns an error when anonymous or when the backend rejects the call.
pub async fn jobs(auth: &AuthFlow, search: &JobSearch) -> Result<String> {
    screen(auth, "/jobs")?;
    let jobs = auth.api().get_jobs(search).await.map_err(report)?;
    render(&jobs)
}
