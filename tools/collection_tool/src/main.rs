use nubes_core::error::CoreResult;
use nubes_core::normalized::render::render_collection_csv;
use nubes_core::normalized::{sort_ids_by_keys, strip_empty_fields, NormalizedCollection, Record, SortOrder};
use std::path::Path;

const USAGE: &str =
    "usage: collection_tool <ASC|DESC> <key[,key...]> <path/to/collection.json> [--csv] [--strip]";

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }
    let order: SortOrder = match args[1].parse() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };
    let keys: Vec<&str> = args[2].split(',').filter(|k| !k.is_empty()).collect();
    let path = Path::new(&args[3]);

    let mut csv = false;
    let mut strip = false;
    for flag in &args[4..] {
        match flag.as_str() {
            "--csv" => csv = true,
            "--strip" => strip = true,
            other => {
                eprintln!("unknown flag: {}", other);
                eprintln!("{}", USAGE);
                std::process::exit(2);
            }
        }
    }

    match run(path, order, &keys, csv, strip) {
        Ok(out) => println!("{}", out.trim_end()),
        Err(e) => {
            eprintln!("collection_tool error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(path: &Path, order: SortOrder, keys: &[&str], csv: bool, strip: bool) -> CoreResult<String> {
    let text = std::fs::read_to_string(path)?;
    let mut collection: NormalizedCollection<Record> = serde_json::from_str(&text)?;
    if let Err(e) = collection.validate() {
        log::warn!("{}: {}", path.display(), e);
    }
    if strip {
        for item in collection.items.values_mut() {
            *item = strip_empty_fields(item);
        }
    }

    let ids = sort_ids_by_keys(&collection, keys, order);
    log::info!("sorted {} ids by {:?} {:?}", ids.len(), keys, order);
    let sorted = collection.with_ids(ids);

    if csv {
        render_collection_csv(&sorted, &[])
    } else {
        Ok(serde_json::to_string_pretty(&sorted)?)
    }
}
