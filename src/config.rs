use std::env;
use tracing::info;

use crate::cli::route::Route;
use crate::error::{PortalError, PortalResult};
use crate::model::Role;

pub const ROLE_ENV: &str = "PORTAL_ROLE";
pub const SEED_ENV: &str = "PORTAL_AVATAR_SEED";
pub const ROUTE_ENV: &str = "PORTAL_ROUTE";

/// Startup settings. Flags win over environment, environment over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub role: Role,
    /// Fixed avatar seed; random per switch when unset.
    pub avatar_seed: Option<String>,
    pub start_route: Route,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            role: Role::Guest,
            avatar_seed: None,
            start_route: Route::Home,
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    pub fn load() -> PortalResult<Invocation> {
        Self::resolve(env::args().skip(1), |key| env::var(key).ok())
    }

    pub fn resolve<I, F>(args: I, lookup: F) -> PortalResult<Invocation>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut role: Option<String> = None;
        let mut seed: Option<String> = None;
        let mut route: Option<String> = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--role" | "-r" => role = Some(value_for(&arg, args.next())?),
                "--seed" => seed = Some(value_for(&arg, args.next())?),
                "--route" => route = Some(value_for(&arg, args.next())?),
                "--help" | "-h" => return Ok(Invocation::Help),
                other => {
                    return Err(PortalError::Config(format!("unknown argument: {}", other)));
                }
            }
        }

        let role = role.or_else(|| from_env(&lookup, ROLE_ENV));
        let seed = seed.or_else(|| from_env(&lookup, SEED_ENV));
        let route = route.or_else(|| from_env(&lookup, ROUTE_ENV));

        let defaults = Config::default();
        Ok(Invocation::Run(Config {
            role: match role {
                Some(r) => r.parse()?,
                None => defaults.role,
            },
            avatar_seed: seed.filter(|s| !s.trim().is_empty()),
            start_route: match route {
                Some(r) => Route::parse(&r)?,
                None => defaults.start_route,
            },
        }))
    }
}

fn value_for(flag: &str, value: Option<String>) -> PortalResult<String> {
    value
        .filter(|v| !v.starts_with("--"))
        .ok_or_else(|| PortalError::Config(format!("{} requires a value", flag)))
}

fn from_env<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str) -> Option<String> {
    let value = lookup(key)?;
    info!("{key} set to {value}");
    Some(value)
}

pub fn print_help() {
    println!("PEC Portal - campus events and clubs");
    println!();
    println!("Usage: portal [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -r, --role <ROLE>   Start as this role (guest, student, faculty, club-lead, admin)");
    println!("      --seed <TOKEN>  Use a fixed avatar seed instead of a random one");
    println!("      --route <PATH>  Open this page first (default: /)");
    println!("  -h, --help          Show this help");
    println!();
    println!("Environment: {}, {}, {}, PORTAL_LOG", ROLE_ENV, SEED_ENV, ROUTE_ENV);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run(invocation: Invocation) -> Config {
        match invocation {
            Invocation::Run(config) => config,
            Invocation::Help => panic!("expected a run configuration"),
        }
    }

    #[test]
    fn defaults_without_flags() {
        let config = run(Config::resolve(args(&[]), no_env).unwrap());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flags_are_parsed() {
        let config = run(Config::resolve(
            args(&["--role", "club-lead", "--seed", "abc", "--route", "/club/ieee"]),
            no_env,
        )
        .unwrap());
        assert_eq!(config.role, Role::ClubLead);
        assert_eq!(config.avatar_seed.as_deref(), Some("abc"));
        assert_eq!(config.start_route, Route::Club("ieee".into()));
    }

    #[test]
    fn env_fills_missing_flags() {
        let lookup = |key: &str| match key {
            ROLE_ENV => Some("faculty".to_string()),
            ROUTE_ENV => Some("/events".to_string()),
            _ => None,
        };
        let config = run(Config::resolve(args(&[]), lookup).unwrap());
        assert_eq!(config.role, Role::Faculty);
        assert_eq!(config.start_route, Route::Events);
    }

    #[test]
    fn flag_beats_env() {
        let lookup = |key: &str| (key == ROLE_ENV).then(|| "faculty".to_string());
        let config = run(Config::resolve(args(&["--role", "admin"]), lookup).unwrap());
        assert_eq!(config.role, Role::Admin);
    }

    #[test]
    fn help_flag() {
        assert_eq!(
            Config::resolve(args(&["--help"]), no_env).unwrap(),
            Invocation::Help
        );
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(matches!(
            Config::resolve(args(&["--role"]), no_env),
            Err(PortalError::Config(_))
        ));
    }

    #[test]
    fn unknown_argument_is_an_error() {
        assert!(Config::resolve(args(&["--verbose"]), no_env).is_err());
    }

    #[test]
    fn bad_role_is_an_error() {
        assert!(matches!(
            Config::resolve(args(&["--role", "dean"]), no_env),
            Err(PortalError::UnknownRole(_))
        ));
    }
}
