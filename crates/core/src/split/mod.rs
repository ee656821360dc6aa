pub mod extract;
pub mod prompt;
pub mod types;

pub use extract::{derive_filename, split_response, strip_reasoning, SplitError};
pub use prompt::{build_prompt, SYSTEM_MESSAGE};
pub use types::{SourceFile, SplitFile};
