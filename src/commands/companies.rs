use clap::ArgMatches;
use colored::*;

use crate::context::AppContext;
use crate::error::{AdminError, ErrorContext};
use crate::formatting::tables::{print_companies, print_single_company};
use crate::models::{CompanyPayload, COMPANY_SIZES};
use crate::search::{filter_collection, partition_users};

use super::users::confirm;

pub async fn handle_companies(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("table");

    let companies = if let Some(industry) = matches.get_one::<String>("industry") {
        ctx.client.companies_by_industry(&token, industry).await
    } else if let Some(user_id) = matches.get_one::<String>("user") {
        let user_id: u64 = user_id
            .parse()
            .map_err(|_| AdminError::InvalidInput("User id must be a number".to_string()))?;
        ctx.client.companies_by_user(&token, user_id).await
    } else {
        ctx.client.list_companies(&token).await
    }
    .map_err(|e| ctx.check(e))?;

    let companies = match matches.get_one::<String>("search") {
        Some(term) => filter_collection(&companies, term),
        None => companies,
    };

    if companies.is_empty() {
        println!("No companies found.");
    } else {
        println!("Found {} companies:", companies.len());
        print_companies(&companies, format);
    }

    Ok(())
}

pub async fn handle_company(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    let joined = if let Some(name) = matches.get_one::<String>("name") {
        tokio::try_join!(
            ctx.client.get_company_by_name(&token, name),
            ctx.client.list_users(&token)
        )
    } else {
        let id = parse_id(matches, "Company")?;
        tokio::try_join!(
            ctx.client.get_company(&token, id),
            ctx.client.list_users(&token)
        )
    };
    let (company, users) = joined.map_err(|e| ctx.check(e))?;
    let (members, available) = partition_users(&company, &users);

    print_single_company(&company, &members, &available);
    Ok(())
}

pub async fn handle_create_company(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    if let Some(size) = matches.get_one::<String>("size") {
        if !COMPANY_SIZES.contains(&size.as_str()) {
            return Err(AdminError::InvalidInput(format!(
                "Invalid company size '{}'. Expected one of: {}",
                size,
                COMPANY_SIZES.join(", ")
            ))
            .into());
        }
    }

    let payload = CompanyPayload {
        name: matches
            .get_one::<String>("name")
            .context("Company name is required")?
            .clone(),
        address: matches.get_one::<String>("address").cloned(),
        industry: matches.get_one::<String>("industry").cloned(),
        company_size: matches.get_one::<String>("size").cloned(),
    };

    let company = ctx
        .client
        .create_company(&token, &payload)
        .await
        .map_err(|e| ctx.check(e))?;

    println!(
        "{} {}",
        "✅".green(),
        "Company created successfully!".green().bold()
    );
    println!(
        "{}: {}",
        "ID".bold(),
        company.id.to_string().bright_blue().bold()
    );
    println!("{}: {}", "Name".bold(), company.name);
    if let Some(industry) = &company.industry {
        println!("{}: {}", "Industry".bold(), industry);
    }
    Ok(())
}

pub async fn handle_update_company(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;
    let id = parse_id(matches, "Company")?;

    let name = matches.get_one::<String>("name");
    let address = matches.get_one::<String>("address");
    let industry = matches.get_one::<String>("industry");
    let size = matches.get_one::<String>("size");

    if name.is_none() && address.is_none() && industry.is_none() && size.is_none() {
        return Err("No fields to update. Provide at least one field to update.".into());
    }

    if let Some(size) = size {
        if !COMPANY_SIZES.contains(&size.as_str()) {
            return Err(AdminError::InvalidInput(format!(
                "Invalid company size '{}'. Expected one of: {}",
                size,
                COMPANY_SIZES.join(", ")
            ))
            .into());
        }
    }

    let current = ctx
        .client
        .get_company(&token, id)
        .await
        .map_err(|e| ctx.check(e))?;
    let mut payload = CompanyPayload::from_company(&current);

    if let Some(name) = name {
        payload.name = name.clone();
    }
    if let Some(address) = address {
        payload.address = Some(address.clone());
    }
    if let Some(industry) = industry {
        payload.industry = Some(industry.clone());
    }
    if let Some(size) = size {
        payload.company_size = Some(size.clone());
    }

    let company = ctx
        .client
        .update_company(&token, id, &payload)
        .await
        .map_err(|e| ctx.check(e))?;

    println!(
        "{} {}",
        "✅".green(),
        "Company updated successfully!".green().bold()
    );
    println!(
        "{}: {}",
        "ID".bold(),
        company.id.to_string().bright_blue().bold()
    );
    println!("{}: {}", "Name".bold(), company.name);
    Ok(())
}

pub async fn handle_delete_company(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;
    let id = parse_id(matches, "Company")?;

    if !matches.get_flag("yes") && !confirm(&format!("Delete company {}?", id))? {
        println!("Aborted.");
        return Ok(());
    }

    ctx.client
        .delete_company(&token, id)
        .await
        .map_err(|e| ctx.check(e))?;

    println!("{} Company {} deleted.", "✅".green(), id);
    Ok(())
}

pub async fn handle_company_join(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    let company_id = parse_named_id(matches, "company-id")?;
    let user_id = parse_named_id(matches, "user-id")?;

    let company = ctx
        .client
        .add_company_member(&token, company_id, user_id)
        .await
        .map_err(|e| ctx.check(e))?;

    println!(
        "{} Added user {} to {} ({} members total)",
        "✅".green(),
        user_id,
        company.name.bold(),
        company.user_ids.len()
    );
    Ok(())
}

pub async fn handle_company_leave(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    let company_id = parse_named_id(matches, "company-id")?;
    let user_id = parse_named_id(matches, "user-id")?;

    let company = ctx
        .client
        .remove_company_member(&token, company_id, user_id)
        .await
        .map_err(|e| ctx.check(e))?;

    println!(
        "{} Removed user {} from {} ({} members left)",
        "✅".green(),
        user_id,
        company.name.bold(),
        company.user_ids.len()
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
