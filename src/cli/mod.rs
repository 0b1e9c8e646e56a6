//! CLI module for the token issuer
//!
//! - `serve`: run the HTTP service
//! - `hash-secret`: produce a `secretHash` value for the key registry
//! - `verify-token`: decode a token with the secret it was signed with

pub mod serve;
pub mod tools;

use clap::{Parser, Subcommand};

/// Token Issuer - signed tokens for registered API keys
#[derive(Parser)]
#[command(name = "token-issuer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Hash a secret for the API key registry
    HashSecret(tools::HashSecretArgs),

    /// Verify a token and print its claims
    VerifyToken(tools::VerifyTokenArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["token-issuer", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_verify_token() {
        let cli = Cli::try_parse_from([
            "token-issuer",
            "verify-token",
            "abc.def.ghi",
            "--secret",
            "front-login-secret",
        ])
        .unwrap();

        let Command::VerifyToken(args) = cli.command else {
            panic!("expected verify-token");
        };
        assert_eq!(args.token, "abc.def.ghi");
        assert_eq!(args.secret, "front-login-secret");
    }

    #[test]
    fn test_parse_hash_secret_scheme() {
        let cli = Cli::try_parse_from(["token-issuer", "hash-secret", "s3cret"]).unwrap();
        let Command::HashSecret(args) = cli.command else {
            panic!("expected hash-secret");
        };
        assert_eq!(args.scheme, tools::SchemeArg::Argon2);

        let cli = Cli::try_parse_from([
            "token-issuer",
            "hash-secret",
            "s3cret",
            "--scheme",
            "bcrypt",
        ])
        .unwrap();
        let Command::HashSecret(args) = cli.command else {
            panic!("expected hash-secret");
        };
        assert_eq!(args.scheme, tools::SchemeArg::Bcrypt);
    }

    #[test]
    fn test_verify_token_requires_secret() {
        assert!(Cli::try_parse_from(["token-issuer", "verify-token", "abc"]).is_err());
    }
}
