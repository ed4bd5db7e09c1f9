use clap::ArgMatches;
use colored::*;

use crate::config::{load_config, save_config};

pub async fn handle_configure(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config();
    let mut changed = false;

    if let Some(url) = matches.get_one::<String>("resource-url") {
        config.resource_server_url = Some(url.clone());
        changed = true;
    }
    if let Some(url) = matches.get_one::<String>("issuer-url") {
        config.issuer_url = Some(url.clone());
        changed = true;
    }
    if let Some(id) = matches.get_one::<String>("client-id") {
        config.client_id = Some(id.clone());
        changed = true;
    }
    if let Some(port) = matches.get_one::<String>("redirect-port") {
        config.redirect_port = Some(port.parse()?);
        changed = true;
    }

    if changed {
        save_config(&config)?;
        println!("{} Configuration saved.", "✅".green());
    }

    println!("{}: {}", "Resource server".bold(), config.resource_server_url());
    println!("{}: {}", "Issuer".bold(), config.issuer_url());
    println!("{}: {}", "Client id".bold(), config.client_id());
    println!("{}: {}", "Redirect URI".bold(), config.redirect_uri());
    Ok(())
}
