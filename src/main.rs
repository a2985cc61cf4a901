use life_recorder::{
    Session, Settings,
    config::{SCREEN_HEIGHT, WINDOW_SIZE, WINDOW_TITLE},
};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_SIZE as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run() -> life_recorder::Result<()> {
    let settings = Settings::from_env()?;
    let animation = Session::start(settings).await?.run().await?;
    log::info!("Animation saved to {}", animation.display());
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{e}");
        std::process::exit(1);
    }
}
