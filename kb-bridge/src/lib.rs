pub mod bootstrap;
pub mod bridge;
pub mod cli;
pub mod error;
pub mod logger;
pub mod publish;

pub use bootstrap::prepare;
pub use bridge::run;
pub use cli::{BridgeCli, ProducerCli};
pub use error::{BridgeError, Result};
pub use publish::publish;

#[cfg(test)]
mod tests;
