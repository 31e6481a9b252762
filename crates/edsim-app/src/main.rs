use edsim_app::command::Command;
use edsim_app::config;
use edsim_app::state::{AppState, Outcome};
use edsim_render::Renderer;
use eyre::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = config::load_settings()?;

    let filter = EnvFilter::try_from_env("EDSIM_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if settings.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let mut app = AppState::new(Renderer::new(settings.render_style())?);
    println!("{}", app.render()?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("error: {e}");
                continue;
            }
        };

        match app.handle(command) {
            Ok(Outcome::Redraw) => println!("{}", app.render()?),
            Ok(Outcome::Print(text)) => println!("{text}"),
            Ok(Outcome::Quit) => break,
            Err(e) => println!("error: {e}"),
        }
    }

    tracing::debug!("input closed, exiting");
    Ok(())
}
