use nvdb_osm::{config::ConvertConfiguration, convert::convert, model::CliError, segment_reader::read_segments};

use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct NvdbOsmArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    Convert {
        #[arg(long, help = "path to NDJSON or CSV file with NVDB segments")]
        input: String,
        #[arg(long, help = "path to file with conversion parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "override the configured simplify method")]
        simplify_method: Option<String>,
        #[arg(long, help = "override the configured first node id")]
        node_id_start: Option<i64>,
        #[arg(long, help = "override the configured first way id")]
        way_id_start: Option<i64>,
        #[arg(long, help = "output path for the .osm.pbf file")]
        output: String,
    },
}

pub fn run(app: &App) -> Result<(), CliError> {
    env_logger::init();
    match app {
        App::Convert {
            input,
            configuration_file,
            simplify_method,
            node_id_start,
            way_id_start,
            output,
        } => {
            let mut conf = match configuration_file {
                None => Ok(ConvertConfiguration::default()),
                Some(f) => {
                    log::info!("reading conversion configuration from {f}");
                    ConvertConfiguration::try_from(f)
                }
            }?;
            if let Some(m) = simplify_method {
                conf.simplify_method = m.clone();
            }
            if let Some(n) = node_id_start {
                conf.node_id_start = *n;
            }
            if let Some(w) = way_id_start {
                conf.way_id_start = *w;
            }

            let method = conf.parsed_simplify_method()?;
            let segments = read_segments(Path::new(input))?;
            let out_path = Path::new(output);

            let summary = convert(segments, out_path, method, conf.node_id_start, conf.way_id_start)?;
            log::info!(
                "finished: {} segments read, {} dropped, {} nodes, {} ways",
                summary.segments_read,
                summary.segments_dropped,
                summary.nodes_written,
                summary.ways_written
            );
            Ok(())
        }
    }
}

fn main() {
    let args = NvdbOsmArguments::parse();
    match run(&args.app) {
        Ok(_) => {}
        Err(e) => {
            log::error!("nvdb-osm failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
