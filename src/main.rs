use clap::{Args, Parser, Subcommand};
use xenum_logging::{LogCategory, LogLevel, Logger, log_error, log_info, log_verbose, set_logger};

mod demo;
mod registry;

use registry::{Query, Registry, ToolError};

pub const LOG_CAT : LogCategory = LogCategory::new("xenum");

static LOGGER : Logger = Logger::new();

#[derive(Parser)]
#[command(name = "xenum")]
#[command(about = "Inspect the enums described with xenum that ship with this tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Maximum log level: Severe, Error, Warning, Info, Verbose or Debug
    #[arg(long, global = true, default_value = "Warning")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all known enums
    List,
    /// Print the descriptor of an enum
    Show {
        /// Name of the enum
        enum_name: String,
    },
    /// Look up an enumerator by name, index or value
    Lookup {
        /// Name of the enum
        enum_name: String,
        #[command(flatten)]
        query: QueryArgs,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct QueryArgs {
    /// Declared name of the enumerator (case-sensitive)
    #[arg(long)]
    name: Option<String>,
    /// Position of the enumerator in declaration order
    #[arg(long)]
    index: Option<usize>,
    /// Underlying value of the enumerator
    #[arg(long)]
    value: Option<String>,
}

impl QueryArgs {
    fn as_query(&self) -> Query<'_> {
        match (&self.name, self.index, &self.value) {
            (Some(name), _, _) => Query::Name(name),
            (_, Some(index), _) => Query::Index(index),
            (_, _, Some(value)) => Query::Value(value),
            // clap requires exactly one of the arguments
            (None, None, None) => unreachable!(),
        }
    }
}

fn create_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(registry::info::<demo::Color>());
    registry.register(registry::info::<demo::Weekday>());
    registry.register(registry::info::<demo::HttpStatus>());
    registry.register(registry::info::<demo::Ordering>());
    registry.register(registry::info::<LogLevel>());
    registry
}

fn run(cli: &Cli, registry: &Registry) -> Result<(), ToolError> {
    match &cli.command {
        Commands::List => {
            for info in registry.iter() {
                println!("{} ({})", info.name(), info.names().len());
            }
        },
        Commands::Show { enum_name } => {
            let info = registry.get(enum_name)?;
            println!("{}", info.name());
            for (idx, (name, value)) in info.names().iter().zip(info.values()).enumerate() {
                println!("{idx:>4}  {name:<24} {value}");
            }
        },
        Commands::Lookup { enum_name, query } => {
            let info = registry.get(enum_name)?;
            let idx = info.lookup(&query.as_query())?;
            log_verbose!(LOG_CAT, "'{}' resolved to index {idx}", info.name());
            println!("{}::{} (index {idx}, value {})", info.name(), info.names()[idx], info.values()[idx]);
        },
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    set_logger(&LOGGER);
    LOGGER.set_max_level(cli.log_level);
    LOGGER.set_always_flush(true);

    let registry = create_registry();
    log_info!(LOG_CAT, "{} enums registered", registry.iter().count());

    let res = run(&cli, &registry);
    LOGGER.flush();
    if let Err(err) = res {
        log_error!(LOG_CAT, "{err}");
        LOGGER.flush();
        std::process::exit(1);
    }
}
