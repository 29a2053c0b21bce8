use anyhow::Result;
use clap::Parser;
use textmap::cli::{Cli, Commands};
use textmap::commands::count::{handle_count, CountConfig};
use textmap::commands::mask::{handle_mask, MaskConfig};
use textmap::config::{ErrorPolicy, WordSplit};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Count {
            path,
            mode,
            format,
            output,
            exclude,
            skip_errors,
            real_words,
            quiet,
        } => {
            let config = CountConfig {
                root: path,
                mode,
                exclude,
                error_policy: error_policy(skip_errors),
                word_split: word_split(real_words),
                format: format.into(),
                output,
                quiet,
            };
            handle_count(config)
        }
        Commands::Mask { input, output } => handle_mask(MaskConfig { input, output }),
    }
}

// Pure function to map the skip flag onto a policy
fn error_policy(skip_errors: bool) -> ErrorPolicy {
    if skip_errors {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Abort
    }
}

// Pure function to select the word tokenizer
fn word_split(real_words: bool) -> WordSplit {
    if real_words {
        WordSplit::NonWordRuns
    } else {
        WordSplit::SlashWRuns
    }
}
