use anyhow::Result;

mod app;

pub(crate) fn run(config: &crate::config::Config) -> Result<()> {
    app::run(config)
}
