use std::io::{self, Write};

use clap::ArgMatches;
use colored::*;

use crate::context::AppContext;
use crate::error::{AdminError, ErrorContext};
use crate::formatting::tables::{print_single_user, print_users};
use crate::models::UserPayload;
use crate::search::{filter_collection, partition_companies};

pub async fn handle_users(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("table");

    let users = if let Some(company_id) = matches.get_one::<String>("company") {
        let company_id: u64 = company_id
            .parse()
            .map_err(|_| AdminError::InvalidInput("Company id must be a number".to_string()))?;
        ctx.client.users_by_company(&token, company_id).await
    } else {
        ctx.client.list_users(&token).await
    }
    .map_err(|e| ctx.check(e))?;

    // Search is applied client-side over the fetched snapshot.
    let users = match matches.get_one::<String>("search") {
        Some(term) => filter_collection(&users, term),
        None => users,
    };

    if users.is_empty() {
        println!("No users found.");
    } else {
        println!("Found {} users:", users.len());
        print_users(&users, format);
    }

    Ok(())
}

pub async fn handle_user(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    // The entity and the full company collection are fetched together; the
    // membership split needs both.
    let joined = if let Some(username) = matches.get_one::<String>("username") {
        tokio::try_join!(
            ctx.client.get_user_by_username(&token, username),
            ctx.client.list_companies(&token)
        )
    } else {
        let id = parse_id(matches, "User")?;
        tokio::try_join!(
            ctx.client.get_user(&token, id),
            ctx.client.list_companies(&token)
        )
    };
    let (user, companies) = joined.map_err(|e| ctx.check(e))?;
    let (related, available) = partition_companies(&user, &companies);

    print_single_user(&user, &related, &available);
    Ok(())
}

pub async fn handle_create_user(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    let payload = UserPayload {
        username: matches
            .get_one::<String>("username")
            .context("Username is required")?
            .clone(),
        email: matches
            .get_one::<String>("email")
            .context("Email is required")?
            .clone(),
        first_name: matches.get_one::<String>("first-name").cloned(),
        last_name: matches.get_one::<String>("last-name").cloned(),
    };

    let user = ctx
        .client
        .create_user(&token, &payload)
        .await
        .map_err(|e| ctx.check(e))?;

    println!("{} {}", "✅".green(), "User created successfully!".green().bold());
    println!("{}: {}", "ID".bold(), user.id.to_string().bright_blue().bold());
    println!("{}: {}", "Username".bold(), user.username);
    println!("{}: {}", "Email".bold(), user.email);
    Ok(())
}

pub async fn handle_update_user(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;
    let id = parse_id(matches, "User")?;

    let username = matches.get_one::<String>("username");
    let email = matches.get_one::<String>("email");
    let first_name = matches.get_one::<String>("first-name");
    let last_name = matches.get_one::<String>("last-name");

    if username.is_none() && email.is_none() && first_name.is_none() && last_name.is_none() {
        return Err("No fields to update. Provide at least one field to update.".into());
    }

    // The update endpoint expects the full shape, so start from the current
    // record and overlay the provided fields.
    let current = ctx.client.get_user(&token, id).await.map_err(|e| ctx.check(e))?;
    let mut payload = UserPayload::from_user(&current);

    if let Some(username) = username {
        payload.username = username.clone();
    }
    if let Some(email) = email {
        payload.email = email.clone();
    }
    if let Some(first_name) = first_name {
        payload.first_name = Some(first_name.clone());
    }
    if let Some(last_name) = last_name {
        payload.last_name = Some(last_name.clone());
    }

    let user = ctx
        .client
        .update_user(&token, id, &payload)
        .await
        .map_err(|e| ctx.check(e))?;

    println!("{} {}", "✅".green(), "User updated successfully!".green().bold());
    println!("{}: {}", "ID".bold(), user.id.to_string().bright_blue().bold());
    println!("{}: {}", "Username".bold(), user.username);
    println!("{}: {}", "Email".bold(), user.email);
    Ok(())
}

pub async fn handle_delete_user(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;
    let id = parse_id(matches, "User")?;

    if !matches.get_flag("yes") && !confirm(&format!("Delete user {}?", id))? {
        println!("Aborted.");
        return Ok(());
    }

    ctx.client
        .delete_user(&token, id)
        .await
        .map_err(|e| ctx.check(e))?;

    println!("{} User {} deleted.", "✅".green(), id);
    Ok(())
}

pub async fn handle_user_join(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    let user_id = parse_named_id(matches, "user-id")?;
    let company_id = parse_named_id(matches, "company-id")?;

    let user = ctx
        .client
        .add_user_to_company(&token, user_id, company_id)
        .await
        .map_err(|e| ctx.check(e))?;

    println!(
        "{} Added {} to company {} ({} memberships total)",
        "✅".green(),
        user.username.bold(),
        company_id,
        user.company_ids.len()
    );
    Ok(())
}

pub async fn handle_user_leave(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    let user_id = parse_named_id(matches, "user-id")?;
    let company_id = parse_named_id(matches, "company-id")?;

    let user = ctx
        .client
        .remove_user_from_company(&token, user_id, company_id)
        .await
        .map_err(|e| ctx.check(e))?;

    println!(
        "{} Removed {} from company {} ({} memberships left)",
        "✅".green(),
        user.username.bold(),
        company_id,
        user.company_ids.len()
    );
    Ok(())
}

fn parse_id(matches: &ArgMatches, what: &str) -> Result<u64, AdminError> {
    let raw = matches
        .get_one::<String>("id")
        .ok_or_else(|| AdminError::InvalidInput(format!("{} ID is required", what)))?;
    raw.parse()
        .map_err(|_| AdminError::InvalidInput(format!("{} ID must be a number", what)))
}

fn parse_named_id(matches: &ArgMatches, name: &str) -> Result<u64, AdminError> {
    let raw = matches
        .get_one::<String>(name)
        .ok_or_else(|| AdminError::InvalidInput(format!("{} is required", name)))?;
    raw.parse()
        .map_err(|_| AdminError::InvalidInput(format!("{} must be a number", name)))
}

pub(crate) fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
