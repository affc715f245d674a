use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = photo_tool::cli::parse();
    app::run(args)
}
