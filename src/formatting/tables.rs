use colored::*;

use crate::models::{Company, User};
use crate::stats::DashboardStats;

use super::utils::{format_date, truncate};

pub fn print_users(users: &[User], format: &str) {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(users).unwrap());
        }
        _ => {
            println!(
                "{:<6} {:<20} {:<30} {:<25} {:<10} {:<17}",
                "ID".bold(),
                "Username".bold(),
                "Email".bold(),
                "Name".bold(),
                "Companies".bold(),
                "Created".bold()
            );
            println!("{}", "-".repeat(110));
            for user in users {
                println!(
                    "{:<6} {:<20} {:<30} {:<25} {:<10} {:<17}",
                    user.id.to_string().bright_blue().bold(),
                    truncate(&user.username, 18),
                    truncate(&user.email, 28),
                    truncate(&user.display_name(), 23),
                    user.company_ids.len(),
                    format_date(user.created_at.as_ref()).bright_black()
                );
            }
        }
    }
}

pub fn print_companies(companies: &[Company], format: &str) {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(companies).unwrap());
        }
        _ => {
            println!(
                "{:<6} {:<25} {:<25} {:<15} {:<10} {:<8} {:<17}",
                "ID".bold(),
                "Name".bold(),
                "Address".bold(),
                "Industry".bold(),
                "Size".bold(),
                "Users".bold(),
                "Created".bold()
            );
            println!("{}", "-".repeat(112));
            for company in companies {
                println!(
                    "{:<6} {:<25} {:<25} {:<15} {:<10} {:<8} {:<17}",
                    company.id.to_string().bright_blue().bold(),
                    truncate(&company.name, 23).bold(),
                    truncate(company.address.as_deref().unwrap_or("-"), 23),
                    truncate(company.industry.as_deref().unwrap_or("-"), 13).cyan(),
                    company.company_size.as_deref().unwrap_or("-"),
                    company.user_ids.len(),
                    format_date(company.created_at.as_ref()).bright_black()
                );
            }
        }
    }
}

pub fn print_single_user(user: &User, related: &[Company], available: &[Company]) {
    println!("\n{}", "─".repeat(70).bright_black());
    println!(
        "{} {} {}",
        format!("#{}", user.id).bright_blue().bold(),
        "│".bright_black(),
        user.username.bold()
    );
    println!("{}", "─".repeat(70).bright_black());

    println!("{}: {}", "Email".bold(), user.email);
    let name = user.display_name();
    if !name.is_empty() {
        println!("{}: {}", "Name".bold(), name);
    }
    println!(
        "{}: {}",
        "Created".bold(),
        format_date(user.created_at.as_ref()).bright_black()
    );
    println!(
        "{}: {}",
        "Updated".bold(),
        format_date(user.updated_at.as_ref()).bright_black()
    );

    println!("\n{}", format!("Companies ({})", related.len()).bold());
    if related.is_empty() {
        println!("  {}", "none".bright_black());
    }
    for company in related {
        println!(
            "  {} {} {}",
            "•".green(),
            company.name,
            company
                .industry
                .as_deref()
                .map(|i| format!("({})", i))
                .unwrap_or_default()
                .bright_black()
        );
    }

    if !available.is_empty() {
        println!(
            "\n{}",
            format!("Available companies ({})", available.len()).bold()
        );
        for company in available {
            println!("  {} {} [id {}]", "◦".bright_black(), company.name, company.id);
        }
    }
    println!("{}", "─".repeat(70).bright_black());
}

pub fn print_single_company(company: &Company, members: &[User], available: &[User]) {
    println!("\n{}", "─".repeat(70).bright_black());
    println!(
        "{} {} {}",
        format!("#{}", company.id).bright_blue().bold(),
        "│".bright_black(),
        company.name.bold()
    );
    println!("{}", "─".repeat(70).bright_black());

    if let Some(address) = &company.address {
        println!("{}: {}", "Address".bold(), address);
    }
    if let Some(industry) = &company.industry {
        println!("{}: {}", "Industry".bold(), industry.cyan());
    }
    if let Some(size) = &company.company_size {
        println!("{}: {} employees", "Size".bold(), size);
    }
    println!(
        "{}: {}",
        "Created".bold(),
        format_date(company.created_at.as_ref()).bright_black()
    );
    println!(
        "{}: {}",
        "Updated".bold(),
        format_date(company.updated_at.as_ref()).bright_black()
    );

    println!("\n{}", format!("Members ({})", members.len()).bold());
    if members.is_empty() {
        println!("  {}", "none".bright_black());
    }
    for user in members {
        println!(
            "  {} {} {}",
            "•".green(),
            user.username,
            format!("<{}>", user.email).bright_black()
        );
    }

    if !available.is_empty() {
        println!("\n{}", format!("Available users ({})", available.len()).bold());
        for user in available {
            println!("  {} {} [id {}]", "◦".bright_black(), user.username, user.id);
        }
    }
    println!("{}", "─".repeat(70).bright_black());
}

pub fn print_dashboard(stats: &DashboardStats, operator: Option<&User>) {
    println!("\n{}", "Dashboard".bold().underline());

    if let Some(me) = operator {
        println!(
            "Signed in as {} {}",
            me.username.green().bold(),
            format!("<{}>", me.email).bright_black()
        );
    }

    println!(
        "\n{}: {}    {}: {}",
        "Total users".bold(),
        stats.total_users.to_string().bright_blue().bold(),
        "Total companies".bold(),
        stats.total_companies.to_string().bright_blue().bold()
    );

    if !stats.recent_users.is_empty() {
        println!("\n{}", "Recent users".bold());
        for user in &stats.recent_users {
            println!(
                "  {} {} {}",
                "•".green(),
                user.username,
                format_date(user.created_at.as_ref()).bright_black()
            );
        }
    }

    if !stats.recent_companies.is_empty() {
        println!("\n{}", "Recent companies".bold());
        for company in &stats.recent_companies {
            println!(
                "  {} {} {}",
                "•".green(),
                company.name,
                format_date(company.created_at.as_ref()).bright_black()
            );
        }
    }
}
