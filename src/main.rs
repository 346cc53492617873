use clap::{Parser, Subcommand};
use iso2955::config::Config;
use iso2955::registry::{self, Category, Form};
use iso2955::{logging, table};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "iso2955")]
#[command(about = "ISO 2955 unit and prefix reference table", long_about = None)]
struct Cli {
    /// Config file (default: iso2955.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List units with one encoding each
    List {
        /// Only list one group (base, supplementary, derived, other)
        #[arg(long)]
        category: Option<Category>,

        /// Encoding to show (form-i, form-ii-lower, form-ii-upper)
        #[arg(short, long)]
        form: Option<Form>,
    },

    /// List SI prefixes with their factors
    Prefixes {
        /// Encoding to show (form-i, form-ii-lower, form-ii-upper)
        #[arg(short, long)]
        form: Option<Form>,
    },

    /// Show every field of a unit (e.g., "degree Celsius")
    Show {
        /// Unit name, or prefix name with --prefix
        name: String,

        /// Look the name up among prefixes instead of units
        #[arg(long)]
        prefix: bool,
    },

    /// Export the table as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::List { category, form } => {
            list_units(category, form.unwrap_or(config.output.form))
        }
        Commands::Prefixes { form } => list_prefixes(form.unwrap_or(config.output.form)),
        Commands::Show { name, prefix } => show(&name, prefix),
        Commands::Export { output } => export_table(output.as_deref()),
    }
}

fn list_units(category: Option<Category>, form: Form) -> Result<(), Box<dyn std::error::Error>> {
    let categories = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        println!("{} ({}):", category, form);
        for unit in registry::units_in(category) {
            println!("  {}", table::format_unit_line(unit, form));
        }
    }

    Ok(())
}

fn list_prefixes(form: Form) -> Result<(), Box<dyn std::error::Error>> {
    println!("Prefixes ({}):", form);
    for prefix in registry::PREFIXES {
        println!("  {}", table::format_prefix_line(prefix, form));
    }

    Ok(())
}

fn show(name: &str, prefix: bool) -> Result<(), Box<dyn std::error::Error>> {
    let details = if prefix {
        table::format_prefix_details(registry::find_prefix(name)?)
    } else {
        table::format_unit_details(registry::find_unit(name)?)
    };
    println!("{}", details);

    Ok(())
}

fn export_table(output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let json = table::TableExport::full().to_json_pretty()?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        log::debug!("Wrote {} bytes", std::fs::metadata(output_path)?.len());
        println!("Table exported to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}
