use anyhow::{Context, Result};
use clap::Parser;
use std::env;

#[derive(Parser, Debug)]
#[command(name = "linkboard")]
#[command(about = "Runs the linkboard service", long_about = None)]
pub struct Cli {
    /// Listen port, takes precedence over the PORT environment variable
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,
}

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the link store. Remote (`libsql://`, `http://`,
    /// `https://`) or a local file path.
    pub database_url: String,
    pub auth_token: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let auth_token = env::var("DATABASE_AUTH_TOKEN").ok();
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Config {
            database_url,
            auth_token,
            port,
        })
    }
}
