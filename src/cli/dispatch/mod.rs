//! Maps parsed CLI arguments to an action and the connection settings it runs with.

use crate::api::types::{CompanySearch, JobSearch, LoginRequest, RegisterRequest};
use crate::cli::actions::{Action, account::ProfileChanges};
use crate::cli::commands::{self, api};
use crate::cli::globals::GlobalArgs;
use anyhow::{Context, Result, anyhow};

fn text(matches: &clap::ArgMatches, name: &str) -> Option<String> {
    matches
        .get_one::<String>(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(matches: &clap::ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

/// Map CLI matches to an action and its global settings.
///
/// # Errors
/// Returns an error if required arguments are missing or no subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<(Action, GlobalArgs)> {
    let api_opts = api::Options::parse(matches)?;
    let globals = GlobalArgs::new(api_opts.base_url, api_opts.token);

    let action = match matches.subcommand() {
        Some((commands::CMD_COMPANIES, sub_m)) => Action::Companies(CompanySearch {
            name_like: text(sub_m, "name"),
            min_employees: sub_m.get_one::<u32>("min-employees").copied(),
            max_employees: sub_m.get_one::<u32>("max-employees").copied(),
        }),
        Some((commands::CMD_COMPANY, sub_m)) => Action::Company {
            handle: required(sub_m, "handle")?,
        },
        Some((commands::CMD_JOBS, sub_m)) => Action::Jobs(JobSearch {
            title: text(sub_m, "title"),
            min_salary: sub_m.get_one::<u64>("min-salary").copied(),
            has_equity: sub_m.get_flag("has-equity").then_some(true),
        }),
        Some((commands::CMD_LOGIN, sub_m)) => Action::Login(LoginRequest {
            username: required(sub_m, "username")?,
            password: required(sub_m, "password")?,
        }),
        Some((commands::CMD_SIGNUP, sub_m)) => Action::Signup(RegisterRequest {
            username: required(sub_m, "username")?,
            password: required(sub_m, "password")?,
            first_name: required(sub_m, "first-name")?,
            last_name: required(sub_m, "last-name")?,
            email: required(sub_m, "email")?,
        }),
        Some((commands::CMD_PROFILE, _)) => Action::Profile,
        Some((commands::CMD_UPDATE_PROFILE, sub_m)) => Action::UpdateProfile(ProfileChanges {
            first_name: text(sub_m, "first-name"),
            last_name: text(sub_m, "last-name"),
            email: text(sub_m, "email"),
        }),
        Some((commands::CMD_APPLY, sub_m)) => Action::Apply {
            job_id: sub_m
                .get_one::<u64>("job-id")
                .copied()
                .context("missing required argument: <job-id>")?,
        },
        Some((commands::CMD_ROUTE, sub_m)) => Action::Route {
            path: required(sub_m, "path")?,
        },
        Some((other, _)) => return Err(anyhow!("unknown command: {other}")),
        None => return Err(anyhow!("missing command")),
    };

    Ok((action, globals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn dispatch(args: &[&str]) -> Result<(Action, GlobalArgs)> {
        temp_env::with_vars(
            [
                ("JOBLY_BASE_URL", None::<&str>),
                ("JOBLY_TOKEN", None::<&str>),
                ("JOBLY_LOG_LEVEL", None::<&str>),
            ],
            || {
                let matches = commands::new().get_matches_from(args.iter().copied());
                handler(&matches)
            },
        )
    }

    #[test]
    fn companies_filter_is_built_from_flags() {
        let (action, globals) =
            dispatch(&["jobly", "companies", "--name", " net ", "--min-employees", "10"]).unwrap();
        assert_eq!(globals.base_url, "http://localhost:3001");
        assert!(globals.token.is_none());
        match action {
            Action::Companies(search) => {
                assert_eq!(search.name_like.as_deref(), Some("net"));
                assert_eq!(search.min_employees, Some(10));
                assert_eq!(search.max_employees, None);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn has_equity_flag_is_only_sent_when_set() {
        let (action, _) = dispatch(&["jobly", "jobs"]).unwrap();
        assert!(matches!(action, Action::Jobs(JobSearch { has_equity: None, .. })));

        let (action, _) = dispatch(&["jobly", "jobs", "--has-equity"]).unwrap();
        assert!(matches!(
            action,
            Action::Jobs(JobSearch {
                has_equity: Some(true),
                ..
            })
        ));
    }

    #[test]
    fn token_flag_is_kept_secret() {
        let (action, globals) =
            dispatch(&["jobly", "--token", "abc", "apply", "5"]).unwrap();
        assert!(matches!(action, Action::Apply { job_id: 5 }));
        assert_eq!(
            globals.token.as_ref().map(|t| t.expose_secret().to_string()),
            Some("abc".to_string())
        );
    }

    #[test]
    fn update_profile_ignores_blank_fields() {
        let (action, _) =
            dispatch(&["jobly", "update-profile", "--first-name", "Al", "--email", " "]).unwrap();
        match action {
            Action::UpdateProfile(changes) => {
                assert_eq!(changes.first_name.as_deref(), Some("Al"));
                assert_eq!(changes.last_name, None);
                assert_eq!(changes.email, None);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn route_carries_the_path() {
        let (action, _) = dispatch(&["jobly", "route", "/companies"]).unwrap();
        assert!(matches!(action, Action::Route { path } if path == "/companies"));
    }
}
