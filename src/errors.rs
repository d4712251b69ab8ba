//! Errors reported by shardview commands.

/// A command was invoked without one of the inputs it needs.
#[derive(Debug, thiserror::Error)]
#[error("CLI option --{option} is required by this command")]
pub struct InputRequired {
    option: &'static str,
}

impl InputRequired {
    /// The `--shards` input is required.
    pub fn shards() -> Self {
        InputRequired { option: "shards" }
    }

    /// The `--settings` input is required.
    pub fn settings() -> Self {
        InputRequired { option: "settings" }
    }

    /// Cluster API endpoint that returns the expected input.
    pub fn endpoint(&self) -> &'static str {
        match self.option {
            "settings" => "_cluster/settings?include_defaults=true",
            _ => "_cat/shards?format=json&bytes=b",
        }
    }

    /// Name of the missing CLI option.
    pub fn option(&self) -> &'static str {
        self.option
    }
}

/// Unable to load an input document.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Unable to decode the input document at the given path.
    #[error("unable to decode input from '{0}'")]
    // (path,)
    Decode(String),

    /// Unable to read the input document at the given path.
    #[error("unable to read input from '{0}'")]
    // (path,)
    Read(String),

    /// Only one input can be read from standard input.
    #[error("only one input can be read from standard input (found --{0} and --{1})")]
    // (option, option)
    StdinReused(&'static str, &'static str),
}
