//! Connected Textures CLI
//!
//! Pack content manifests and inspect connected-texture tile selection.

use clap::{Parser, Subcommand, ValueEnum};
use connected_textures::ctm::blob::BLOB_MASKS;
use connected_textures::{
    load_content_from_paths, AdjacencyMask, ConnectionMethod, Dir, LoadedContent,
    VariantDescriptor,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ctm-pack")]
#[command(author, version, about = "Pack block variations and inspect connected textures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a content manifest and show the packed blocks
    Pack {
        /// Content manifest (JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Load config (JSON); defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which tile a method picks for an adjacency mask
    Resolve {
        /// Mask in hex, e.g. "0x55" or "ff"
        #[arg(long, value_parser = parse_mask)]
        mask: AdjacencyMask,

        /// Connection method
        #[arg(long, value_enum, default_value = "full")]
        method: MethodArg,
    },

    /// Print the 47-entry blob table
    Table,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    /// 2x2 submap, edges only
    Simple,
    /// 8x6 blob submap
    Full,
    /// 2x2 submap, horizontal and vertical runs
    HorizontalVertical,
}

impl From<MethodArg> for ConnectionMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Simple => ConnectionMethod::Simple,
            MethodArg::Full => ConnectionMethod::Full,
            MethodArg::HorizontalVertical => ConnectionMethod::HorizontalVertical,
        }
    }
}

fn parse_mask(s: &str) -> Result<AdjacencyMask, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u8::from_str_radix(digits, 16)
        .map(AdjacencyMask::from_bits)
        .map_err(|e| format!("Invalid mask '{}': {}", s, e))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pack { manifest, config, json } => {
            let loaded = load_content_from_paths(&manifest, config.as_ref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&pack_summary(&loaded))?);
            } else {
                print_pack(&loaded);
            }
        }
        Commands::Resolve { mask, method } => {
            show_resolution(mask, method.into());
        }
        Commands::Table => {
            print_table();
        }
    }

    Ok(())
}

fn print_pack(loaded: &LoadedContent) {
    println!("Features:");
    for (name, status) in &loaded.features {
        println!("  {:<24} {:?}", name, status);
    }

    let registry = &loaded.registry;
    println!("\nBlocks ({}):", registry.block_count());
    for block in registry.blocks() {
        println!("  {}", block.full_name());
        for (meta, variant) in block.definition.slot_set.iter().enumerate() {
            println!(
                "    {:>2}: {:<20} texture={} group={}",
                meta,
                variant.name,
                variant.texture_location,
                variant.group.as_deref().unwrap_or("-")
            );
        }
    }

    let carving = registry.carving();
    println!("\nCarving groups ({}):", carving.len());
    for group in carving.groups() {
        let members: Vec<String> = carving.group(group).iter().map(|e| e.value.to_string()).collect();
        println!("  {}: {}", group, members.join(", "));
    }
}

fn pack_summary(loaded: &LoadedContent) -> serde_json::Value {
    let registry = &loaded.registry;
    let features: Vec<_> = loaded
        .features
        .iter()
        .map(|(name, status)| serde_json::json!({ "name": name, "status": format!("{:?}", status) }))
        .collect();
    let blocks: Vec<_> = registry
        .blocks()
        .map(|block| {
            let variants: Vec<&VariantDescriptor> = block.definition.slot_set.iter().map(|v| v.as_ref()).collect();
            serde_json::json!({
                "name": block.full_name(),
                "translation_key": block.definition.translation_key,
                "variants": variants,
            })
        })
        .collect();

    serde_json::json!({
        "features": features,
        "blocks": blocks,
        "carving": registry.carving(),
    })
}

fn show_resolution(mask: AdjacencyMask, method: ConnectionMethod) {
    let folded = mask.fold();
    let connected: Vec<String> = Dir::ALL
        .iter()
        .filter(|&&dir| mask.is_connected(dir))
        .map(|dir| format!("{:?}", dir))
        .collect();

    println!("Mask:      {} [{}]", mask, connected.join(", "));
    println!("Folded:    {}", folded);
    println!("Method:    {}", method);
    println!("Tile:      {}", method.resolve(mask));
}

fn print_table() {
    println!("{:>5}  {:>6}  tile", "index", "mask");
    for (index, &bits) in BLOB_MASKS.iter().enumerate() {
        let tile = ConnectionMethod::Full.resolve(AdjacencyMask::from_bits(bits));
        println!("{:>5}  {:>6}  {}", index, AdjacencyMask::from_bits(bits), tile);
    }
}
