//! One module per subcommand, each exposing `execute`.

pub mod breach;
pub mod delete;
pub mod generate;
pub mod keygen;
pub mod list;
pub mod reveal;
pub mod score;
pub mod store;
pub mod strength;
pub mod update;
