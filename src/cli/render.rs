//! Single-icon commands: `grid`, `dots` and `hash`.

use super::args::{DotsArgs, GridArgs};
use super::common::write_output;
use anyhow::{Context, Result, bail};
use sigil::config::SigilConfig;
use sigil::kind::DotsFormat;
use sigil::utils::preview;
use sigil::{PublicKey, dots, grid, hash};

/// Render one grid identicon, CLI flags taking precedence over the config.
pub fn run_grid(args: &GridArgs, config: &SigilConfig) -> Result<()> {
    let size = args.size.unwrap_or(config.grid.size);
    let mut style = config.grid.style();
    if let Some(padding) = args.padding {
        style = style.with_padding(padding);
    }
    if let Some(background) = &args.background {
        style = style.with_background(background.as_str());
    }

    let svg = grid::to_svg_with_style(&args.seed, size, &style)
        .with_context(|| format!("failed to render grid identicon for `{}`", preview(&args.seed, 32)))?;
    write_output(args.output.as_deref(), svg.as_bytes(), "grid")
}

/// Render one circular identicon. PNG needs an output file.
pub fn run_dots(args: &DotsArgs, config: &SigilConfig) -> Result<()> {
    let size = args.size.unwrap_or(config.dots.size);
    let format = args.format.unwrap_or(config.dots.format);
    if format == DotsFormat::Png && args.output.is_none() {
        bail!("png output needs --output FILE; use --format svg to print to stdout");
    }

    let key = PublicKey::decode(&args.key, args.encoding)
        .with_context(|| format!("invalid public key `{}`", preview(&args.key, 32)))?;
    sigil::debug!("dots"; "key {} ({} bytes)", key, key.as_bytes().len());

    let bytes = match format {
        DotsFormat::Png => dots::to_png(&key, size)?,
        DotsFormat::Svg => dots::to_svg(&key, size)?.into_bytes(),
    };
    write_output(args.output.as_deref(), &bytes, "dots")
}

/// Print the normalized hash of `value`.
pub fn run_hash(value: &str) -> Result<()> {
    println!("{}", hash::normalize(value).as_str());
    Ok(())
}
