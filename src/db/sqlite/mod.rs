//! SQLite implementation of the database traits.

mod company;
mod connection;
mod helpers;
mod industry;
mod invoice;

#[cfg(test)]
mod invoice_test;

pub use company::SqliteCompanyRepository;
pub use connection::SqliteDatabase;
pub use industry::SqliteIndustryRepository;
pub use invoice::SqliteInvoiceRepository;
