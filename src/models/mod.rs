mod transaction;
mod user;

pub use transaction::{NewTransaction, Transaction, UpdateTransaction};
pub use user::{NewUser, UpdateUser, User};
