//! CLI module for Authgate
//!
//! Provides subcommands:
//! - `serve`: run the authentication API
//! - `hash-password`: produce a password hash for seeding users

pub mod hash_password;
pub mod serve;

use clap::{Parser, Subcommand};

/// Authgate - stateless bearer-token authentication service
#[derive(Parser)]
#[command(name = "authgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Print an Argon2 hash for a `users[].password_hash` config entry
    HashPassword(hash_password::HashPasswordArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["authgate", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_hash_password() {
        let cli = Cli::try_parse_from(["authgate", "hash-password", "Secret123"]).unwrap();

        match cli.command {
            Command::HashPassword(args) => assert_eq!(args.password, "Secret123"),
            Command::Serve => panic!("expected hash-password"),
        }
    }

    #[test]
    fn test_hash_password_requires_argument() {
        assert!(Cli::try_parse_from(["authgate", "hash-password"]).is_err());
    }
}
