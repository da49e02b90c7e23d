pub mod client;
pub mod subscriber;

pub use client::{ClientProxy, InboxClient, REGISTER_METHOD};
pub use subscriber::ClientSubscriber;
