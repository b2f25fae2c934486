pub(crate) mod checkout;
pub(crate) mod get;
