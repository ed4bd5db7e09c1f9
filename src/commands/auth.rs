use clap::ArgMatches;
use colored::*;

use crate::context::AppContext;

pub async fn handle_login(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();

    if let Some(profile) = ctx.session.principal() {
        println!(
            "Already logged in as {}. Run 'orgadmin logout' to switch accounts.",
            profile.label().green()
        );
        return Ok(());
    }

    println!("Opening your browser to complete the login...");
    let profile = ctx
        .session
        .login(|url| println!("If the browser does not open, visit:\n  {}", url.bright_blue()))
        .await?;

    println!("{} Logged in as {}", "✅".green(), profile.label().bold());

    // Make sure the operator exists on the resource server too.
    let token = ctx.token()?;
    match ctx.client.sync_current_user(&token).await {
        Ok(user) => println!(
            "Synced resource-server record: {} ({})",
            user.username, user.email
        ),
        Err(e) => println!(
            "{} Could not sync your resource-server record: {}",
            "⚠".yellow(),
            e
        ),
    }

    Ok(())
}

pub async fn handle_logout(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();

    if !ctx.session.is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }

    ctx.session.logout().await;
    println!("{} Logged out.", "✅".green());
    Ok(())
}

pub async fn handle_whoami(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    if let Some(profile) = ctx.session.principal() {
        println!("Logged in as: {}", profile.label().bold());
        println!("Subject: {}", profile.sub);
        if let Some(username) = &profile.preferred_username {
            println!("Username: {}", username);
        }
    }

    match ctx.client.current_user(&token).await {
        Ok(me) => match me.user {
            Some(user) => {
                println!(
                    "Resource server record: #{} {} ({})",
                    user.id, user.username, user.email
                );
            }
            None => {
                let hint = me
                    .message
                    .unwrap_or_else(|| "Run 'orgadmin sync' to create it.".to_string());
                println!("No resource server record yet. {}", hint);
            }
        },
        Err(e) => return Err(ctx.check(e).into()),
    }

    Ok(())
}

pub async fn handle_sync(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    let user = ctx
        .client
        .sync_current_user(&token)
        .await
        .map_err(|e| ctx.check(e))?;

    println!("{} Synced user record", "✅".green());
    println!("{}: {}", "ID".bold(), user.id.to_string().bright_blue().bold());
    println!("{}: {}", "Username".bold(), user.username);
    println!("{}: {}", "Email".bold(), user.email);
    Ok(())
}
