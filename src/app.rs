pub mod message;
pub mod model;
pub mod update;

pub use message::{Command, FetchRequest, FetchResult, Message};
pub use model::{App, Status};
pub use update::update;
