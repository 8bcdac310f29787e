mod client;
pub use client::HttpTransport;
