//! Credential commands for the back-office API token.

use std::io::{self, BufRead, Write};

use baydesk_connect::TokenProvider;

use crate::cli::AuthCommands;
use crate::token_store::FileTokenStore;

pub fn run(command: AuthCommands, store: &FileTokenStore) -> anyhow::Result<()> {
    match command {
        AuthCommands::Login { token } => {
            let token = match token {
                Some(value) => value,
                None => prompt_token()?,
            };
            if token.trim().is_empty() {
                anyhow::bail!("empty token");
            }
            store.save(&token)?;
            println!("token saved to {}", store.path().display());
            Ok(())
        }
        AuthCommands::Logout => {
            store.clear()?;
            println!("token removed");
            Ok(())
        }
        AuthCommands::Show => {
            match store.access_token() {
                Ok(token) => {
                    let head: String = token.chars().take(8).collect();
                    println!("token file: {}", store.path().display());
                    println!("token: {}… ({} chars)", head, token.len());
                }
                Err(_) => {
                    println!("token file: {}", store.path().display());
                    println!("no token stored");
                }
            }
            Ok(())
        }
    }
}

fn prompt_token() -> anyhow::Result<String> {
    print!("API token: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
