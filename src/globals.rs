//! Container for data to made accessible to all `shardview` commands.
use anyhow::Result;
use slog::debug;
use slog::Logger;

use shardview_conf::Conf;

use crate::formatter::FormatterStrategy;
use crate::Cli;

/// Container for data to made accessible to all `shardview` commands.
pub struct Globals {
    /// Parse CLI arguments.
    pub cli: Cli,

    /// Process configuration loaded from `--config`, or the defaults.
    pub conf: Conf,

    /// Configured process formatter for all output.
    pub formatter: Box<dyn FormatterStrategy>,

    /// Configured process logger for advanced users feedback/debugging.
    pub logger: Logger,
}

impl Globals {
    /// Initialise `shardview` process [`Globals`].
    pub fn initialise(cli: Cli) -> Result<Self> {
        let logger = crate::logging::configure(&cli.log)?;
        let conf = match &cli.config {
            None => Conf::default(),
            Some(path) => {
                let path = crate::utils::resolve_home(path)?;
                let conf = shardview_conf::load(&path)?;
                debug!(logger, "Loaded configuration file"; "path" => path);
                conf
            }
        };
        let formatter = crate::formatter::select(&cli.format);
        Ok(Globals {
            cli,
            conf,
            formatter,
            logger,
        })
    }
}
