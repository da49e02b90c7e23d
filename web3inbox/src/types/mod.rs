pub mod account;
pub mod config_param;
pub mod rpc;
pub mod signing;

pub use account::*;
pub use config_param::*;
pub use rpc::*;
pub use signing::*;
