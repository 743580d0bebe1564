use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

/// One year.
const MAX_JWT_TTL_HOURS: i64 = 24 * 366;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub auth_rps: u32,
    pub api_rps: u32,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = get_env(&lookup, "JWT_SECRET")?;
        if jwt_secret.trim().is_empty() {
            return Err(Error::Config("JWT_SECRET must not be empty".to_string()));
        }

        let jwt_ttl_hours = get_env_parse_or(&lookup, "JWT_TTL_HOURS", 24)?;
        if !(1..=MAX_JWT_TTL_HOURS).contains(&jwt_ttl_hours) {
            return Err(Error::Config(format!(
                "JWT_TTL_HOURS must be between 1 and {}",
                MAX_JWT_TTL_HOURS
            )));
        }

        Ok(Self {
            server_address: get_env(&lookup, "SERVER_ADDRESS")?,
            database_url: get_env(&lookup, "DATABASE_URL")?,
            database_max_connections: get_env_parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 20)?,
            jwt_secret,
            jwt_ttl_hours,
            auth_rps: get_env_parse_or(&lookup, "AUTH_RPS", 10)?,
            api_rps: get_env_parse_or(&lookup, "API_RPS", 200)?,
            seed_demo_data: get_env_parse_or(&lookup, "SEED_DEMO_DATA", false)?,
        })
    }
}

fn get_env<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}
