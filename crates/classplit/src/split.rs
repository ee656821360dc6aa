use crate::prelude::{eprintln, println, *};
use std::path::{Path, PathBuf};

use classplit_core::completion::{
    build_request, RequestOptions, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};
use classplit_core::split::{build_prompt, split_response, SYSTEM_MESSAGE};

use crate::client::CompletionClient;
use crate::input::load_pair;
use crate::output::write_split_files;

#[derive(Debug, Clone, clap::Args)]
#[group(id = "SplitApp")]
pub struct App {
    /// Header file declaring several classes (e.g. widgets.hh)
    pub header: String,

    /// Implementation file defining them (e.g. widgets.cc)
    pub implementation: String,

    /// Model identifier sent to the completion endpoint
    #[arg(long, env = "CLASSPLIT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// OpenAI-compatible chat-completions URL
    #[arg(long, env = "CLASSPLIT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Directory the split files are written to
    #[arg(long, env = "CLASSPLIT_OUTPUT_DIR", default_value = "split_files")]
    pub output_dir: PathBuf,

    /// Sampling temperature
    #[arg(long, env = "CLASSPLIT_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// Upper bound on generated tokens
    #[arg(long, env = "CLASSPLIT_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// API key sent as a bearer token
    #[arg(long, env = "GROQ_TOKEN", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl App {
    fn request_options(&self) -> RequestOptions {
        RequestOptions {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// Load the pair, ask the model to split it and write what comes back.
///
/// A non-200 answer is reported and ends the run without touching the
/// output directory.
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let (header, implementation) = load_pair(&app.header, &app.implementation).await?;

    let prompt = build_prompt(&header, &implementation);
    let request = build_request(&prompt, SYSTEM_MESSAGE, &app.request_options());

    if global.verbose {
        eprintln!("Endpoint: {}", app.endpoint);
        eprintln!("Model: {}", request.model);
        eprintln!("Prompt length: {} chars", prompt.len());
    }

    log::debug!(
        "requesting split of {} and {} from {}",
        header.file_name(),
        implementation.file_name(),
        app.endpoint
    );

    let client = CompletionClient::new(&app.endpoint, app.api_key.clone());
    let content = match client.complete(&request).await {
        Ok(content) => content,
        Err(err @ Error::Status(_)) => {
            println!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let files =
        split_response(&content).context("Model response is not in the expected format")?;

    for file in &files {
        println!("{}", file.content);
    }

    let written = write_split_files(&app.output_dir, &files).await?;

    for line in summary(&written, &app.output_dir) {
        println!("{line}");
    }

    Ok(())
}

/// Lines printed once the files are on disk.
fn summary(written: &[PathBuf], dir: &Path) -> Vec<String> {
    written
        .iter()
        .map(|path| f!("Created {}", path.display()))
        .chain(std::iter::once(f!(
            "Files have been created in {}",
            dir.display()
        )))
        .collect()
}
