use rust_decimal::Decimal;
use storefront::{countries::CountryCode, coupons::CouponBook};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

#[expect(clippy::print_stdout, reason = "CLI output to user")]
pub(crate) fn run(book: &CouponBook) -> Result<(), String> {
    if book.is_empty() {
        println!("no coupons configured");
        return Ok(());
    }

    println!("{}", render(book));

    Ok(())
}

fn render(book: &CouponBook) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Coupon", "Discount", "Countries", "Usable"]);

    for coupon in book.iter() {
        let countries = coupon
            .country_codes()
            .iter()
            .map(CountryCode::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        let discount = (coupon.discount_fraction() * Decimal::ONE_HUNDRED).normalize();

        builder.push_record([
            coupon.stripe_coupon_id().to_string(),
            format!("{discount}%"),
            countries,
            if coupon.is_usable() { "yes" } else { "no" }.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(1..2), Alignment::right());

    table.to_string()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn render_lists_each_coupon_with_its_countries() -> TestResult {
        let book = CouponBook::from_yaml(
            "
coupons:
  - stripe_coupon_id: ppp_10
    discount_percentage: 0.1
    country_codes: [EG, MA]
  - stripe_coupon_id: ppp_40
    discount_percentage: 0.4
    country_codes: [IN]
",
        )?;

        let table = render(&book);

        assert!(table.contains("ppp_10"), "missing first coupon:\n{table}");
        assert!(table.contains("EG, MA"), "missing countries:\n{table}");
        assert!(table.contains("40%"), "missing discount:\n{table}");

        Ok(())
    }
}
