//! Offline helpers for provisioning and debugging

use clap::{Args, ValueEnum};

use crate::infrastructure::auth::{HashScheme, JwtTokenSigner, SaltedHasher, SecretHasher};

#[derive(Args, Debug)]
pub struct HashSecretArgs {
    /// Secret to hash
    pub secret: String,

    /// Hash scheme to produce
    #[arg(long, value_enum, default_value_t = SchemeArg::Argon2)]
    pub scheme: SchemeArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemeArg {
    Argon2,
    Bcrypt,
}

impl From<SchemeArg> for HashScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Argon2 => HashScheme::Argon2,
            SchemeArg::Bcrypt => HashScheme::Bcrypt,
        }
    }
}

#[derive(Args, Debug)]
pub struct VerifyTokenArgs {
    /// Token to verify
    pub token: String,

    /// Secret the token was signed with
    #[arg(long)]
    pub secret: String,
}

/// Print a PHC hash suitable for a registry `secretHash` field
pub fn hash_secret(args: HashSecretArgs) -> anyhow::Result<()> {
    println!("{}", render_hash(&args.secret, args.scheme.into())?);
    Ok(())
}

/// Print the decoded claims of a valid, unexpired token
pub fn verify_token(args: VerifyTokenArgs) -> anyhow::Result<()> {
    println!("{}", render_claims(&args.token, &args.secret)?);
    Ok(())
}

fn render_hash(secret: &str, scheme: HashScheme) -> anyhow::Result<String> {
    Ok(SaltedHasher::new().with_scheme(scheme).hash(secret)?)
}

fn render_claims(token: &str, secret: &str) -> anyhow::Result<String> {
    let claims = JwtTokenSigner::new().verify(token, secret)?;
    Ok(serde_json::to_string_pretty(&claims)?)
}
