use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::{fs, path::PathBuf};

use locator_core::{
    gateways::LogDiagnostics,
    nearby::{NearbyLocations, NearbyView},
    usecases,
};
use locator_gateways::LiveApiGeoSearch;

use crate::{
    config::Config,
    document::{self, Overrides},
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the nearby locations section of a page
    Nearby(NearbyArgs),
}

#[derive(Args)]
struct NearbyArgs {
    /// JSON document of the entity the page is rendered for
    #[arg(short, long, value_name = "FILE")]
    document: Option<PathBuf>,

    /// Entity id (overrides the document)
    #[arg(long)]
    id: Option<String>,

    /// Latitude (overrides the document)
    #[arg(long, allow_negative_numbers = true, requires = "lng")]
    lat: Option<f64>,

    /// Longitude (overrides the document)
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lng: Option<f64>,

    #[arg(long)]
    title: Option<String>,

    /// Do not link to the locator
    #[arg(long)]
    no_locator_link: bool,

    #[arg(long)]
    button_text: Option<String>,

    #[arg(long)]
    button_link: Option<String>,

    /// Relative path from the page to the site root, e.g. "../"
    #[arg(long)]
    prefix: Option<String>,

    /// Write into a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Wrap the section into a complete HTML document
    #[arg(long)]
    standalone: bool,
}

impl NearbyArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            id: self.id.clone(),
            lat: self.lat,
            lng: self.lng,
            title: self.title.clone(),
            no_locator_link: self.no_locator_link,
            button_text: self.button_text.clone(),
            button_link: self.button_link.clone(),
            relative_prefix_to_root: self.prefix.clone(),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(cli.config.as_ref())?;
    match cli.command {
        Command::Nearby(args) => render_nearby(&cfg, &args),
    }
}

fn render_nearby(cfg: &Config, args: &NearbyArgs) -> Result<()> {
    let doc = args
        .document
        .as_deref()
        .map(document::read_document)
        .transpose()?;
    let overrides = args.overrides();
    let props = document::nearby_props(doc.as_ref(), &overrides)?;
    let ctx = document::template_context(doc.as_ref(), &overrides, &cfg.site);

    let mut widget = NearbyLocations::new();
    let gateway = LiveApiGeoSearch::new();
    if let Some(completion) = usecases::refresh_nearby_locations(
        &mut widget,
        &cfg.nearby,
        &props,
        &gateway,
        &LogDiagnostics,
    ) {
        log::debug!("Nearby query finished: {completion:?}");
    }

    let view = NearbyView::new(&props, widget.results(), &ctx, &cfg.maps);
    let section = locator_webpages::nearby_locations(&view, &ctx.relative_prefix_to_root);
    let markup = if args.standalone {
        locator_webpages::page(&props.title, &ctx.relative_prefix_to_root, section)
    } else {
        section
    };
    let html = markup.into_string();

    if let Some(path) = &args.output {
        fs::write(path, html)?;
        log::info!("Wrote nearby locations of {} to {}", props.id, path.display());
    } else {
        println!("{html}");
    }
    Ok(())
}
