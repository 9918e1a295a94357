//! Data Transfer Objects shared between the wallet frontend and the backend.

pub mod account;
pub mod wallet;

pub use account::{Account, AccountBlockchain, AccountNetwork};
pub use wallet::{AuthenticatedWallet, CreatedWallet, DeleteResult};
