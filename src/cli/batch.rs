//! `batch` command: render a seed list into a directory.

use super::args::BatchArgs;
use super::common::read_seed_list;
use anyhow::{Result, bail};
use sigil::batch::{render_all_with, write_outputs};
use sigil::cache::IconCache;
use sigil::config::SigilConfig;
use sigil::logger::ProgressLine;
use sigil::utils::plural_count;
use sigil::{debug, log};

pub fn run_batch(args: &BatchArgs, config: &SigilConfig) -> Result<()> {
    let seeds = read_seed_list(&args.list)?;
    if seeds.is_empty() {
        log!("batch"; "no seeds in {}", args.list.display());
        return Ok(());
    }

    let options = config.batch_options(args.kind, args.encoding);
    let cache = IconCache::new();

    let progress = ProgressLine::new("batch", &[(args.kind.as_str(), seeds.len())]);
    let outcomes = render_all_with(&seeds, &options, &cache, Some(&progress));
    progress.finish();
    debug!("cache"; "{} hits, {} misses", cache.hits(), cache.misses());

    let dir = args.output.as_deref().unwrap_or(&config.output.dir);
    let manifest = config.output.manifest && !args.no_manifest;
    let summary = write_outputs(&outcomes, args.kind, dir, manifest)?;

    log!(
        "batch";
        "wrote {} to {}",
        plural_count(summary.written, "icon"),
        dir.display()
    );
    if summary.failed > 0 {
        bail!("{} could not be rendered", plural_count(summary.failed, "seed"));
    }
    Ok(())
}
