use anyhow::{anyhow, bail, Result};
use autorenamer::config::{home_dir, Args};
use autorenamer::dispatch::{dispatch, Action, Effect};
use autorenamer::fs::LocalFs;
use autorenamer::logging;
use autorenamer::state::AppState;
use autorenamer::ui::build_ui;
use clap::Parser;
use druid::{AppLauncher, Env, WindowDesc};
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init()?;

    let start = args.start_dir()?;
    let home = home_dir(&start);
    info!(dir = %start.display(), home = %home.display(), "starting");

    let mut state = AppState::new(home.to_string_lossy());
    for action in [
        Action::SetOnlySelected(args.only_selected),
        Action::SetExcludeDirectories(args.exclude_directories),
        Action::Load(start.to_string_lossy().to_string()),
    ] {
        let transition = dispatch(&LocalFs, &state, action);
        if let Some(Effect::Inform { message, .. }) = transition.effect {
            bail!(message);
        }
        state = transition.state;
    }

    let main_window = WindowDesc::new(build_ui())
        .title(|data: &AppState, _env: &Env| data.title())
        .window_size((650.0, 400.0));
    AppLauncher::with_window(main_window)
        .launch(state)
        .map_err(|e| anyhow!("Failed to launch application: {}", e))
}
