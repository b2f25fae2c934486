use clap::Args;
use rust_decimal::Decimal;
use rusty_money::iso;
use storefront::{
    countries::CountryCode, coupons::CouponBook, discounts::price_with_coupon,
    formatters::format_price,
};

#[derive(Debug, Args)]
pub(crate) struct ResolveArgs {
    /// ISO 3166-1 alpha-2 country code
    #[arg(long)]
    country: String,

    /// Product price in major units
    #[arg(long, default_value = "100")]
    price: Decimal,

    /// ISO 4217 currency code
    #[arg(long, env = "STOREFRONT_CURRENCY", default_value = "USD")]
    currency: String,
}

#[expect(clippy::print_stdout, reason = "CLI output to user")]
pub(crate) fn run(book: &CouponBook, args: &ResolveArgs) -> Result<(), String> {
    let country = CountryCode::parse(&args.country)
        .ok_or_else(|| format!("invalid country code: {}", args.country))?;

    let currency = iso::find(&args.currency.to_uppercase())
        .ok_or_else(|| format!("unknown currency: {}", args.currency))?;

    let coupon = book.resolve_coupon(Some(country));
    let price = price_with_coupon(args.price, coupon);

    println!(
        "coupon: {}",
        coupon.map_or("none", |coupon| coupon.stripe_coupon_id())
    );
    println!("price: {}", format_price(price.original, currency, "Free"));
    println!("payable: {}", format_price(price.payable(), currency, "Free"));

    Ok(())
}
