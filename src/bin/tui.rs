use anyhow::Result;

fn main() -> Result<()> {
    tickbox::tui::run()
}
