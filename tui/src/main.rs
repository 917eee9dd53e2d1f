use color_eyre::eyre::Result;
use wortschatz::App;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::new()?;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
