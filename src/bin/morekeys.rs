// Morekeys CLI
// Inspects more key spec strings the way a keyboard layout builder would
// consume them: split, extract options, merge additional specs, decode.

use anyhow::{Context, Result};
use clap::Parser;

use morekeys_core::{
    extract_bool_value, extract_int_value, insert_additional_specs, Locale, MoreKeySpec,
};

/// More key spec inspector
#[derive(Parser, Debug)]
#[command(name = "morekeys")]
#[command(version)]
#[command(about = "Parse keyboard more-key spec strings", long_about = None)]
struct Args {
    /// Comma separated key specs (the static template)
    specs: String,

    /// Additional key specs merged over the '%' placeholders
    #[arg(short, long, value_name = "SPECS")]
    additional: Option<String>,

    /// Apply locale uppercasing to labels and codes
    #[arg(short, long)]
    uppercase: bool,

    /// Locale tag directing case transformation (e.g. tr_TR)
    #[arg(short, long, default_value = "")]
    locale: String,

    /// Extract an integer option with this prefix before merging (repeatable)
    #[arg(long, value_name = "PREFIX")]
    int_option: Vec<String>,

    /// Extract a boolean option with this marker before merging (repeatable)
    #[arg(long, value_name = "MARKER")]
    bool_option: Vec<String>,

    /// Print the decoded keys as a JSON array
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let mut specs = morekeys_core::split_key_specs(&args.specs).unwrap_or_default();
    let additional = args
        .additional
        .as_deref()
        .and_then(morekeys_core::split_key_specs);

    for prefix in &args.int_option {
        let (value, residual) = extract_int_value(&specs, prefix, -1)
            .with_context(|| format!("extracting integer option '{prefix}'"))?;
        println!("option {prefix} = {value}");
        specs = residual;
    }
    for marker in &args.bool_option {
        let (value, residual) = extract_bool_value(&specs, marker);
        println!("option {marker} = {value}");
        specs = residual;
    }

    let locale = Locale::new(args.locale.as_str());
    let merged = insert_additional_specs(Some(&specs), additional.as_deref()).unwrap_or_default();
    let keys = merged
        .iter()
        .map(|spec| {
            MoreKeySpec::parse(spec, args.uppercase, &locale)
                .with_context(|| format!("decoding key spec '{spec}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&keys)?);
    } else {
        for key in &keys {
            println!("{key}");
        }
    }
    Ok(())
}
