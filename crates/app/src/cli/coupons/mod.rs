use std::path::PathBuf;

use clap::{Args, Subcommand};
use storefront::coupons::CouponBook;

mod list;
mod resolve;

#[derive(Debug, Args)]
pub(crate) struct CouponsCommand {
    /// Coupon configuration file
    #[arg(long, env = "STOREFRONT_COUPONS_FILE", default_value = "config/coupons.yaml")]
    file: PathBuf,

    #[command(subcommand)]
    command: CouponsSubcommand,
}

#[derive(Debug, Subcommand)]
enum CouponsSubcommand {
    /// Show every configured coupon
    List,

    /// Show the coupon and price a visitor from a country would get
    Resolve(resolve::ResolveArgs),
}

pub(crate) fn run(command: &CouponsCommand) -> Result<(), String> {
    let book = CouponBook::load(&command.file).map_err(|error| {
        format!(
            "failed to load coupons from {}: {error}",
            command.file.display()
        )
    })?;

    match &command.command {
        CouponsSubcommand::List => list::run(&book),
        CouponsSubcommand::Resolve(args) => resolve::run(&book, args),
    }
}
