use crate::cli::actions::Action;
use anyhow::Result;
use secrecy::SecretString;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        secret: matches
            .get_one("password")
            .map(|s: &String| SecretString::from(s.clone()))
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --password"))?,
    })
}
