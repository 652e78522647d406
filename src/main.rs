//! `arcview [OPTIONS.toml]` - open the arcball viewer window.

use std::path::Path;

use arcview::{Options, Viewer};

fn load_options(arg: Option<&str>) -> Result<Options, arcview::ArcviewError> {
    let Some(path) = arg else {
        return Ok(Options::default());
    };
    let options = Options::load(Path::new(path))?;
    log::info!("Loaded options from {path}");
    Ok(options)
}

fn main() {
    env_logger::init();

    let options = match load_options(std::env::args().nth(1).as_deref()) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
