//! Show disk watermark thresholds resolved from cluster settings.
use anyhow::Result;
use clap::Args;

use crate::errors::InputRequired;
use crate::Globals;

/// Show disk watermark thresholds resolved from cluster settings.
#[derive(Args, Debug)]
pub struct WatermarksCli {}

/// Execute the `shardview watermarks` command.
pub fn run(globals: &Globals, _: &WatermarksCli) -> Result<i32> {
    if globals.cli.input.settings.is_none() {
        anyhow::bail!(InputRequired::settings());
    }
    let watermarks = crate::input::watermarks(globals)?;
    println!("{}", globals.formatter.watermarks(&watermarks)?);
    Ok(0)
}
