//! Hash-password command - prints a PHC hash for config seeding

use clap::Args;

use crate::infrastructure::user::{Argon2Hasher, PasswordHasher};

#[derive(Args, Debug)]
pub struct HashPasswordArgs {
    /// Plaintext password to hash
    pub password: String,
}

pub fn run(args: HashPasswordArgs) -> anyhow::Result<()> {
    println!("{}", hash(&args.password)?);
    Ok(())
}

fn hash(password: &str) -> anyhow::Result<String> {
    Ok(Argon2Hasher::new().hash(password)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies() {
        let hashed = hash("Secret123").unwrap();

        assert!(hashed.starts_with("$argon2"));
        assert!(Argon2Hasher::new().verify("Secret123", &hashed));
    }
}
