use clap::ArgMatches;

use crate::context::AppContext;
use crate::formatting::tables::print_dashboard;
use crate::stats::DashboardStats;

pub async fn handle_dashboard(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = AppContext::load();
    let token = ctx.token()?;

    // All-or-nothing join for the two collections; the operator's own record
    // is allowed to be missing.
    let joined = tokio::try_join!(
        ctx.client.list_users(&token),
        ctx.client.list_companies(&token)
    );
    let (users, companies) = joined.map_err(|e| ctx.check(e))?;

    let operator = ctx
        .client
        .current_user(&token)
        .await
        .ok()
        .and_then(|me| me.user);

    let stats = DashboardStats::compute(&users, &companies);
    print_dashboard(&stats, operator.as_ref());
    Ok(())
}
