use clap::Parser;
use token_issuer::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::HashSecret(args) => cli::tools::hash_secret(args),
        Command::VerifyToken(args) => cli::tools::verify_token(args),
    }
}
