use clap::{Parser, Subcommand};

mod coupons;
mod db;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Coupons(coupons::CouponsCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Coupons(command) => coupons::run(&command),
            Commands::Db(command) => db::run(command).await,
        }
    }
}
