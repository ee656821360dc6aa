use crate::prelude::*;
use clap::Parser;

mod client;
mod error;
mod input;
mod output;
mod prelude;
mod split;

#[cfg(test)]
mod test_support;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Split a multi-class C++ header/implementation pair into one file pair per class using an LLM"
)]
pub struct App {
    #[clap(flatten)]
    split: crate::split::App,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "CLASSPLIT_VERBOSE", default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    crate::split::run(app.split, app.global).await
}
