//! Resource handlers.

pub mod companies;
pub mod industries;
pub mod invoices;

#[cfg(test)]
mod companies_test;
