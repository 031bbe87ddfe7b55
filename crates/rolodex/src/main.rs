//! `rolo` - CLI for the rolodex customer registry
//!
//! This binary is the presentation layer: it renders records and validation
//! reports, and enforces UI-level policies like the minimum search query
//! length. All record semantics live in the `rolodex` library.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use rolodex::cli::{Cli, Command, ConfigCommand, OutputFormat, SearchCommand};
use rolodex::{highlight, init_logging, Config, Customer, CustomerDraft, Error, JsonStore, Registry};

/// ANSI reverse video, used to mark query matches in search output.
const HIGHLIGHT_START: &str = "\x1b[7m";
const HIGHLIGHT_END: &str = "\x1b[0m";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Add(cmd) => {
            let mut registry = open_registry(&config)?;
            let draft = CustomerDraft {
                name: cmd.name,
                address: cmd.address,
                phone: cmd.phone,
                national_id: cmd.national_id,
            };
            handle_add(&mut registry, &draft)
        }
        Command::List(cmd) => {
            let registry = open_registry(&config)?;
            handle_list(&registry, cmd.format)
        }
        Command::Search(cmd) => {
            let registry = open_registry(&config)?;
            handle_search(&registry, &config, &cmd)
        }
        Command::Remove(cmd) => {
            let mut registry = open_registry(&config)?;
            handle_remove(&mut registry, &cmd.id)
        }
        Command::Count => {
            let registry = open_registry(&config)?;
            println!("{}", registry.len());
            Ok(())
        }
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn open_registry(config: &Config) -> anyhow::Result<Registry> {
    let store = JsonStore::open(config.data_path())?;
    Ok(Registry::open(store))
}

fn handle_add(registry: &mut Registry, draft: &CustomerDraft) -> anyhow::Result<()> {
    match registry.add(draft) {
        Ok(customer) => {
            println!("Registered customer {}", customer.id);
            print_customer_plain(customer, None);
            Ok(())
        }
        Err(Error::InvalidCustomer(report)) => {
            eprintln!("Customer not added; fix the following field(s):");
            for (field, message) in report.iter() {
                eprintln!("  {field}: {message}");
            }
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn handle_list(registry: &Registry, format: OutputFormat) -> anyhow::Result<()> {
    let customers: Vec<&Customer> = registry.all().iter().collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&customers)?);
        }
        OutputFormat::Table => print_table(&customers),
        OutputFormat::Plain => {
            if customers.is_empty() {
                println!("No customers registered.");
            }
            for customer in &customers {
                print_customer_plain(customer, None);
            }
        }
    }
    Ok(())
}

fn handle_search(
    registry: &Registry,
    config: &Config,
    cmd: &SearchCommand,
) -> anyhow::Result<()> {
    let query = cmd.query.trim();

    // UI-level policy: the engine itself accepts any query.
    let min_len = config.search.min_query_length;
    if query.chars().count() < min_len {
        eprintln!("Query must have at least {min_len} character(s).");
        std::process::exit(1);
    }

    let matches = registry.search(query, cmd.field.into());

    match cmd.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        OutputFormat::Table => print_table(&matches),
        OutputFormat::Plain => {
            if matches.is_empty() {
                println!("No customers match: {query}");
                return Ok(());
            }
            let marker = if cmd.no_color { None } else { Some(query) };
            for customer in &matches {
                print_customer_plain(customer, marker);
            }
        }
    }
    Ok(())
}

fn handle_remove(registry: &mut Registry, id: &str) -> anyhow::Result<()> {
    if registry.remove(id)? {
        println!("Removed customer {id}");
        Ok(())
    } else {
        eprintln!("No customer with ID: {id}");
        std::process::exit(1);
    }
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data path:        {}", config.data_path().display());
                println!();
                println!("[Search]");
                println!("  Min query length: {}", config.search.min_query_length);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => {
                    eprintln!("Configuration error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}

/// Print one customer in the indented plain format, optionally highlighting
/// query matches in the name.
fn print_customer_plain(customer: &Customer, highlight_query: Option<&str>) {
    let name = match highlight_query {
        Some(query) => highlight::highlight(&customer.name, query, HIGHLIGHT_START, HIGHLIGHT_END),
        None => customer.name.clone(),
    };

    println!("{}  {}", customer.id, name);
    println!("    phone:   {}", customer.phone);
    if let Some(national_id) = &customer.national_id {
        println!("    ID:      {national_id}");
    }
    println!("    address: {}", customer.address);
    println!("    added:   {}", customer.created_at_local_date());
}

/// Print customers as an aligned table.
fn print_table(customers: &[&Customer]) {
    if customers.is_empty() {
        println!("No customers registered.");
        return;
    }

    let id_w = column_width(customers.iter().map(|c| c.id.as_str()), "ID");
    let name_w = column_width(customers.iter().map(|c| c.name.as_str()), "NAME");
    let phone_w = column_width(customers.iter().map(|c| c.phone.as_str()), "PHONE");
    let nid_w = column_width(
        customers.iter().map(|c| c.national_id.as_deref().unwrap_or("-")),
        "NATIONAL ID",
    );

    println!(
        "{:id_w$}  {:name_w$}  {:phone_w$}  {:nid_w$}  ADDED",
        "ID", "NAME", "PHONE", "NATIONAL ID"
    );
    for customer in customers {
        println!(
            "{:id_w$}  {:name_w$}  {:phone_w$}  {:nid_w$}  {}",
            customer.id,
            customer.name,
            customer.phone,
            customer.national_id.as_deref().unwrap_or("-"),
            customer.created_at_local_date()
        );
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain([header.len()])
        .max()
        .unwrap_or(header.len())
}
