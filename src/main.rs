use std::process;

use clap::{Arg, Command};

use orgadmin_cli::commands;
use orgadmin_cli::interactive::run_interactive_mode;

fn users_command() -> Command {
    Command::new("users")
        .about("Manage users")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .about("List users")
                .arg(
                    Arg::new("search")
                        .long("search")
                        .short('s')
                        .value_name("TERM")
                        .help("Client-side search across username, email and name"),
                )
                .arg(
                    Arg::new("company")
                        .long("company")
                        .value_name("COMPANY_ID")
                        .help("Only users belonging to this company"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: table, json")
                        .default_value("table"),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Show one user with company memberships")
                .arg(
                    Arg::new("id")
                        .value_name("USER_ID")
                        .help("User id")
                        .index(1),
                )
                .arg(
                    Arg::new("username")
                        .long("username")
                        .short('u')
                        .value_name("USERNAME")
                        .help("Look the user up by username instead of id"),
                ),
        )
        .subcommand(
            Command::new("create")
                .about("Create a new user")
                .arg(
                    Arg::new("username")
                        .long("username")
                        .short('u')
                        .value_name("USERNAME")
                        .required(true),
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .short('e')
                        .value_name("EMAIL")
                        .required(true),
                )
                .arg(
                    Arg::new("first-name")
                        .long("first-name")
                        .value_name("NAME"),
                )
                .arg(Arg::new("last-name").long("last-name").value_name("NAME")),
        )
        .subcommand(
            Command::new("update")
                .about("Update an existing user")
                .arg(
                    Arg::new("id")
                        .value_name("USER_ID")
                        .help("User id to update")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("username")
                        .long("username")
                        .short('u')
                        .value_name("USERNAME"),
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .short('e')
                        .value_name("EMAIL"),
                )
                .arg(
                    Arg::new("first-name")
                        .long("first-name")
                        .value_name("NAME"),
                )
                .arg(Arg::new("last-name").long("last-name").value_name("NAME")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a user")
                .arg(
                    Arg::new("id")
                        .value_name("USER_ID")
                        .help("User id to delete")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation prompt")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("join")
                .about("Add a user to a company")
                .arg(
                    Arg::new("user-id")
                        .value_name("USER_ID")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("company-id")
                        .value_name("COMPANY_ID")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("leave")
                .about("Remove a user from a company")
                .arg(
                    Arg::new("user-id")
                        .value_name("USER_ID")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("company-id")
                        .value_name("COMPANY_ID")
                        .required(true)
                        .index(2),
                ),
        )
}

fn companies_command() -> Command {
    Command::new("companies")
        .about("Manage companies")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .about("List companies")
                .arg(
                    Arg::new("search")
                        .long("search")
                        .short('s')
                        .value_name("TERM")
                        .help("Client-side search across name, address and industry"),
                )
                .arg(
                    Arg::new("industry")
                        .long("industry")
                        .value_name("INDUSTRY")
                        .help("Only companies in this industry"),
                )
                .arg(
                    Arg::new("user")
                        .long("user")
                        .value_name("USER_ID")
                        .help("Only companies this user belongs to"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: table, json")
                        .default_value("table"),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Show one company with its members")
                .arg(
                    Arg::new("id")
                        .value_name("COMPANY_ID")
                        .help("Company id")
                        .index(1),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .value_name("NAME")
                        .help("Look the company up by name instead of id"),
                ),
        )
        .subcommand(
            Command::new("create")
                .about("Create a new company")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .value_name("NAME")
                        .required(true),
                )
                .arg(Arg::new("address").long("address").value_name("ADDRESS"))
                .arg(
                    Arg::new("industry")
                        .long("industry")
                        .value_name("INDUSTRY"),
                )
                .arg(
                    Arg::new("size")
                        .long("size")
                        .value_name("SIZE")
                        .help("Company size bucket: 1-10, 11-50, 51-200, 201-500, 501+"),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Update an existing company")
                .arg(
                    Arg::new("id")
                        .value_name("COMPANY_ID")
                        .help("Company id to update")
                        .required(true)
                        .index(1),
                )
                .arg(Arg::new("name").long("name").short('n').value_name("NAME"))
                .arg(Arg::new("address").long("address").value_name("ADDRESS"))
                .arg(
                    Arg::new("industry")
                        .long("industry")
                        .value_name("INDUSTRY"),
                )
                .arg(
                    Arg::new("size")
                        .long("size")
                        .value_name("SIZE")
                        .help("Company size bucket: 1-10, 11-50, 51-200, 201-500, 501+"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a company")
                .arg(
                    Arg::new("id")
                        .value_name("COMPANY_ID")
                        .help("Company id to delete")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation prompt")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("join")
                .about("Add a user to a company")
                .arg(
                    Arg::new("company-id")
                        .value_name("COMPANY_ID")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("user-id")
                        .value_name("USER_ID")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("leave")
                .about("Remove a user from a company")
                .arg(
                    Arg::new("company-id")
                        .value_name("COMPANY_ID")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("user-id")
                        .value_name("USER_ID")
                        .required(true)
                        .index(2),
                ),
        )
}

#[tokio::main]
async fn main() {
    let app = Command::new("orgadmin")
        .about("Admin console for the users & companies resource server")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("login").about("Log in via the authorization server"))
        .subcommand(Command::new("logout").about("Log out and clear the stored session"))
        .subcommand(Command::new("whoami").about("Show the current operator"))
        .subcommand(
            Command::new("sync").about("Sync your own user record on the resource server"),
        )
        .subcommand(Command::new("dashboard").about("Show totals and recent entities"))
        .subcommand(Command::new("ui").about("Open the interactive console"))
        .subcommand(
            Command::new("config")
                .about("Show or change server settings")
                .arg(
                    Arg::new("resource-url")
                        .long("resource-url")
                        .value_name("URL")
                        .help("Resource server base URL"),
                )
                .arg(
                    Arg::new("issuer-url")
                        .long("issuer-url")
                        .value_name("URL")
                        .help("Authorization server URL"),
                )
                .arg(
                    Arg::new("client-id")
                        .long("client-id")
                        .value_name("ID")
                        .help("OAuth client id"),
                )
                .arg(
                    Arg::new("redirect-port")
                        .long("redirect-port")
                        .value_name("PORT")
                        .help("Loopback port for the login callback"),
                ),
        )
        .subcommand(users_command())
        .subcommand(companies_command());

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("login", sub_matches)) => commands::auth::handle_login(sub_matches).await,
        Some(("logout", sub_matches)) => commands::auth::handle_logout(sub_matches).await,
        Some(("whoami", sub_matches)) => commands::auth::handle_whoami(sub_matches).await,
        Some(("sync", sub_matches)) => commands::auth::handle_sync(sub_matches).await,
        Some(("dashboard", sub_matches)) => {
            commands::dashboard::handle_dashboard(sub_matches).await
        }
        Some(("config", sub_matches)) => commands::configure::handle_configure(sub_matches).await,
        Some(("ui", _)) => run_interactive_mode().await,
        Some(("users", sub_matches)) => match sub_matches.subcommand() {
            Some(("list", m)) => commands::users::handle_users(m).await,
            Some(("get", m)) => commands::users::handle_user(m).await,
            Some(("create", m)) => commands::users::handle_create_user(m).await,
            Some(("update", m)) => commands::users::handle_update_user(m).await,
            Some(("delete", m)) => commands::users::handle_delete_user(m).await,
            Some(("join", m)) => commands::users::handle_user_join(m).await,
            Some(("leave", m)) => commands::users::handle_user_leave(m).await,
            _ => {
                eprintln!("Unknown users subcommand. Use 'orgadmin users --help'.");
                process::exit(1);
            }
        },
        Some(("companies", sub_matches)) => match sub_matches.subcommand() {
            Some(("list", m)) => commands::companies::handle_companies(m).await,
            Some(("get", m)) => commands::companies::handle_company(m).await,
            Some(("create", m)) => commands::companies::handle_create_company(m).await,
            Some(("update", m)) => commands::companies::handle_update_company(m).await,
            Some(("delete", m)) => commands::companies::handle_delete_company(m).await,
            Some(("join", m)) => commands::companies::handle_company_join(m).await,
            Some(("leave", m)) => commands::companies::handle_company_leave(m).await,
            _ => {
                eprintln!("Unknown companies subcommand. Use 'orgadmin companies --help'.");
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Unknown command. Use 'orgadmin --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
