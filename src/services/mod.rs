pub mod completion;
pub mod curator;
pub mod prompts;
pub mod recovery;

pub use completion::{ChatCompletionClient, CompletionClient};
pub use curator::CuratorSettings;
pub use recovery::{recover, Recovered, Shape};
