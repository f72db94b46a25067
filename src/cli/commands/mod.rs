pub mod api;
pub mod logging;

use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const CMD_COMPANIES: &str = "companies";
pub const CMD_COMPANY: &str = "company";
pub const CMD_JOBS: &str = "jobs";
pub const CMD_LOGIN: &str = "login";
pub const CMD_SIGNUP: &str = "signup";
pub const CMD_PROFILE: &str = "profile";
pub const CMD_UPDATE_PROFILE: &str = "update-profile";
pub const CMD_APPLY: &str = "apply";
pub const CMD_ROUTE: &str = "route";

fn text_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

fn companies() -> Command {
    Command::new(CMD_COMPANIES)
        .about("List companies")
        .arg(text_arg("name", "Only companies whose name contains this text"))
        .arg(
            text_arg("min-employees", "Minimum number of employees")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            text_arg("max-employees", "Maximum number of employees")
                .value_parser(clap::value_parser!(u32)),
        )
}

fn company() -> Command {
    Command::new(CMD_COMPANY)
        .about("Show a company and its jobs")
        .arg(Arg::new("handle").help("Company handle").required(true))
}

fn jobs() -> Command {
    Command::new(CMD_JOBS)
        .about("List jobs")
        .arg(text_arg("title", "Only jobs whose title contains this text"))
        .arg(
            text_arg("min-salary", "Minimum salary")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("has-equity")
                .long("has-equity")
                .help("Only jobs that offer equity")
                .action(ArgAction::SetTrue),
        )
}

fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Log in and print the session token")
        .arg(text_arg("username", "Username").required(true))
        .arg(text_arg("password", "Password").required(true))
}

fn signup() -> Command {
    Command::new(CMD_SIGNUP)
        .about("Create an account and print the session token")
        .arg(text_arg("username", "Username").required(true))
        .arg(text_arg("password", "Password").required(true))
        .arg(text_arg("first-name", "First name").required(true))
        .arg(text_arg("last-name", "Last name").required(true))
        .arg(text_arg("email", "Email address").required(true))
}

fn profile() -> Command {
    Command::new(CMD_PROFILE).about("Show the signed-in user's profile")
}

fn update_profile() -> Command {
    Command::new(CMD_UPDATE_PROFILE)
        .about("Change the signed-in user's name or email")
        .arg(text_arg("first-name", "New first name"))
        .arg(text_arg("last-name", "New last name"))
        .arg(text_arg("email", "New email address"))
}

fn apply() -> Command {
    Command::new(CMD_APPLY)
        .about("Apply the signed-in user to a job")
        .arg(
            Arg::new("job-id")
                .help("Job id")
                .required(true)
                .value_parser(clap::value_parser!(u64)),
        )
}

fn route() -> Command {
    Command::new(CMD_ROUTE)
        .about("Show which screen a path leads to for the current session")
        .arg(Arg::new("path").help("Path such as /companies").required(true))
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("jobly")
        .about("Browse companies and jobs, apply, and manage your Jobly profile")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommands([
            companies(),
            company(),
            jobs(),
            login(),
            signup(),
            profile(),
            update_profile(),
            apply(),
            route(),
        ]);

    let command = api::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "jobly");
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_base_url_default() {
        temp_env::with_vars(
            [("JOBLY_BASE_URL", None::<&str>), ("JOBLY_TOKEN", None::<&str>)],
            || {
                let matches = new().get_matches_from(vec!["jobly", "jobs"]);
                assert_eq!(
                    matches.get_one::<String>(api::ARG_BASE_URL).cloned(),
                    Some("http://localhost:3001".to_string())
                );
                assert_eq!(matches.get_one::<String>(api::ARG_TOKEN), None);
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("JOBLY_BASE_URL", Some("https://api.jobly.dev")),
                ("JOBLY_TOKEN", Some("abc")),
                ("JOBLY_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["jobly", "profile"]);
                assert_eq!(
                    matches.get_one::<String>(api::ARG_BASE_URL).cloned(),
                    Some("https://api.jobly.dev".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(api::ARG_TOKEN).cloned(),
                    Some("abc".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("JOBLY_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["jobly", "jobs"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("JOBLY_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["jobly".to_string(), "jobs".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_subcommand_required() {
        let result = new().try_get_matches_from(vec!["jobly"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_requires_numeric_job_id() {
        let result = new().try_get_matches_from(vec!["jobly", "apply", "five"]);
        assert_eq!(
            result.map_err(|e| e.kind()).err(),
            Some(clap::error::ErrorKind::ValueValidation)
        );
    }

    #[test]
    fn test_login_requires_credentials() {
        let result = new().try_get_matches_from(vec!["jobly", "login", "--username", "alice"]);
        assert_eq!(
            result.map_err(|e| e.kind()).err(),
            Some(clap::error::ErrorKind::MissingRequiredArgument)
        );
    }
}
