use anyhow::Context;
use log::info;
use ppmspin::config::ViewerConfig;
use ppmspin::ppm::decode_ppm_file;
use ppmspin::viewer;
use std::path::Path;

const USAGE: &str = "usage: ppmspin <image.ppm> [config.json]";

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(ppm_path) = args.next() else {
        anyhow::bail!(USAGE);
    };
    let config_path = args.next();

    let config = ViewerConfig::load_or_default(config_path.as_deref().map(Path::new))
        .context("loading viewer config")?;

    let im = decode_ppm_file(&ppm_path).with_context(|| format!("decoding {ppm_path}"))?;
    info!("decoded {ppm_path}: {}x{} after square crop", im.w, im.h);

    // Handy for checking the crop without a display.
    #[cfg(feature = "im-io")]
    if let Ok(png_path) = std::env::var("PPMSPIN_PNG") {
        im.save_png(&png_path)
            .with_context(|| format!("writing {png_path}"))?;
        info!("wrote {png_path}");
    }

    viewer::show(&im, &config)
        .map_err(anyhow::Error::msg)
        .context("running viewer")?;

    Ok(())
}
