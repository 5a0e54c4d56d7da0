use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "flyerkit", version)]
struct Cli {
    /// Log verbosity (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value_t = tracing::Level::INFO)]
    log_level: tracing::Level,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single flyer as a PNG.
    Render(RenderArgs),
    /// Render every item of a campaign file into a directory.
    Campaign(CampaignArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Flyer parameters JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override the template named in the parameters.
    #[arg(long)]
    template: Option<String>,
}

#[derive(Parser, Debug)]
struct CampaignArgs {
    /// Campaign JSON: a list of `{ "id", "params" }` items or an object mapping ids to params.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Render items in parallel.
    #[arg(long)]
    parallel: bool,

    /// Output file name prefix.
    #[arg(long, default_value = "flyer")]
    prefix: String,
}

#[derive(serde::Deserialize, Debug)]
struct CampaignItem {
    id: String,
    #[serde(default)]
    params: flyerkit::FlyerParams,
}

#[derive(serde::Deserialize, Debug)]
#[serde(untagged)]
enum CampaignFile {
    Items(Vec<CampaignItem>),
    ById(BTreeMap<String, flyerkit::FlyerParams>),
}

impl CampaignFile {
    fn into_items(self) -> Vec<CampaignItem> {
        match self {
            Self::Items(items) => items,
            Self::ById(map) => map
                .into_iter()
                .map(|(id, params)| CampaignItem { id, params })
                .collect(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Campaign(args) => cmd_campaign(args),
    }
}

fn base_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("."))
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn render_to_file(params: &flyerkit::FlyerParams, base: &Path, out: &Path) -> anyhow::Result<()> {
    let mut params = params.clone();
    params.rebase_paths(base);
    let cfg = flyerkit::resolve(&params);
    let png = flyerkit::render_flyer_png(&cfg)?;
    ensure_parent(out)?;
    std::fs::write(out, png).with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut params = flyerkit::FlyerParams::from_path(&args.config)?;
    if let Some(t) = args.template {
        params.template_id = Some(t);
    }
    render_to_file(&params, base_dir(&args.config), &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// `<prefix>_<id>.png`, refusing ids that would leave the output directory.
fn output_name(prefix: &str, id: &str) -> anyhow::Result<String> {
    let name = format!("{prefix}_{id}.png");
    if id.is_empty() || name.contains(['/', '\\']) || id.contains("..") {
        anyhow::bail!("campaign id '{id}' is not a plain file name");
    }
    Ok(name)
}

fn read_campaign(path: &Path) -> anyhow::Result<Vec<CampaignItem>> {
    let f = File::open(path).with_context(|| format!("open campaign '{}'", path.display()))?;
    let file: CampaignFile =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse campaign JSON")?;
    Ok(file.into_items())
}

fn cmd_campaign(args: CampaignArgs) -> anyhow::Result<()> {
    let items = read_campaign(&args.in_path)?;
    let base = base_dir(&args.in_path);
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let render_one = |item: &CampaignItem| -> anyhow::Result<PathBuf> {
        let out = args.out_dir.join(output_name(&args.prefix, &item.id)?);
        tracing::info!(id = item.id.as_str(), "rendering campaign item");
        render_to_file(&item.params, base, &out)
            .with_context(|| format!("render campaign item '{}'", item.id))?;
        Ok(out)
    };
    let results: Vec<anyhow::Result<PathBuf>> = if args.parallel {
        items.par_iter().map(render_one).collect()
    } else {
        items.iter().map(render_one).collect()
    };

    let mut failed = 0usize;
    for result in results {
        match result {
            Ok(path) => eprintln!("wrote {}", path.display()),
            Err(e) => {
                tracing::error!("{e:#}");
                failed += 1;
            }
        }
    }

    let bodies: BTreeMap<&str, &flyerkit::FlyerParams> = items
        .iter()
        .map(|item| (item.id.as_str(), &item.params))
        .collect();
    let bodies_path = args.out_dir.join("api_bodies.json");
    write_pretty_json(&bodies_path, &bodies)?;
    eprintln!("wrote {}", bodies_path.display());

    if failed > 0 {
        anyhow::bail!("{failed} of {} campaign items failed", items.len());
    }
    Ok(())
}

fn write_pretty_json(path: &Path, value: &impl serde::Serialize) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    value
        .serialize(&mut ser)
        .with_context(|| "serialize api bodies")?;
    buf.push(b'\n');
    let mut f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    f.write_all(&buf)
        .with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}
