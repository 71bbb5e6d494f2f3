use anyhow::Result;

use crate::config::Config;

pub fn run(config: &Config) -> Result<()> {
    crate::tui_shell::run(config)
}
