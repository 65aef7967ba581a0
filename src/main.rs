//! vibeql - render typed SQL expressions and inspect result cell parsing

use anyhow::{bail, Result};
use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use vibeql::{
    max, parameter, sum, to_sql, AnsiContext, Boolean, CheckedConnector, Column, Connector,
    Context, ExpressionOperators, FloatingPoint, Integral, LenientConnector, MySqlContext,
    PostgresContext, ResultEntry, Serialize, SqliteContext, Text, TrustedConnector, ValueKind,
};

/// vibeql - typed SQL expression toolkit
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render sample expressions over an integral column
    Render {
        /// SQL dialect
        #[arg(short = 'D', long, value_enum, default_value = "ansi")]
        dialect: DialectArg,

        /// Column name
        #[arg(short, long, default_value = "age")]
        column: String,

        /// Integral operand combined with the column
        #[arg(short, long, default_value = "5", allow_hyphen_values = true)]
        operand: i64,
    },

    /// Parse a textual result cell
    Parse {
        /// Value kind of the cell
        #[arg(short, long, value_enum, default_value = "integral")]
        kind: KindArg,

        /// Null access policy of the connector
        #[arg(short, long, value_enum, default_value = "checked")]
        policy: PolicyArg,

        /// Treat the cell as SQL NULL
        #[arg(short, long)]
        null: bool,

        /// Cell text
        value: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DialectArg {
    Ansi,
    Postgres,
    Mysql,
    Sqlite,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Integral,
    FloatingPoint,
    Text,
    Boolean,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Checked,
    Trusted,
    Lenient,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match args.command {
        Command::Render {
            dialect,
            column,
            operand,
        } => {
            log::debug!("Rendering samples for column {} in {:?}", column, dialect);
            match dialect {
                DialectArg::Ansi => render::<AnsiContext>(&column, operand),
                DialectArg::Postgres => render::<PostgresContext>(&column, operand),
                DialectArg::Mysql => render::<MySqlContext>(&column, operand),
                DialectArg::Sqlite => render::<SqliteContext>(&column, operand),
            }
        }
        Command::Parse {
            kind,
            policy,
            null,
            value,
        } => {
            let cell = match (null, value.as_deref()) {
                (true, Some(_)) => bail!("A NULL cell cannot also have a value"),
                (true, None) => None,
                (false, Some(text)) => Some(text.as_bytes()),
                (false, None) => bail!("Missing cell value (pass --null for SQL NULL)"),
            };
            match policy {
                PolicyArg::Checked => parse::<CheckedConnector>(kind, cell),
                PolicyArg::Trusted => parse::<TrustedConnector>(kind, cell),
                PolicyArg::Lenient => parse::<LenientConnector>(kind, cell),
            }
        }
    }

    Ok(())
}

fn render<C: Context + Default>(column: &str, operand: i64) {
    let target = Column::<Integral>::new(column);
    let ratio = Column::<FloatingPoint>::new("ratio");
    let label = Column::<Text>::new("label");

    print_sample::<C, _>("arithmetic", &(target.clone() + operand));
    print_sample::<C, _>("scaled", &((target.clone() - operand) * ratio.clone()));
    print_sample::<C, _>("aggregate", &max(target.clone()));
    print_sample::<C, _>("aggregate sum", &(sum(target.clone()) / 2));
    print_sample::<C, _>(
        "filter",
        &target
            .clone()
            .ge(parameter(&target))
            .and(label.clone().like(parameter(&label))),
    );
    print_sample::<C, _>("concat", &(label.clone() + ": " + label));
    print_sample::<C, _>("update", &target.assign_add(operand));
}

fn print_sample<C, E>(title: &str, expr: &E)
where
    C: Context + Default,
    E: Serialize<C>,
{
    println!("{:<14} {}", title, to_sql::<C, _>(expr));
}

fn parse<Db: Connector>(kind: KindArg, cell: Option<&[u8]>) {
    match kind {
        KindArg::Integral => report::<Integral, Db>(cell),
        KindArg::FloatingPoint => report::<FloatingPoint, Db>(cell),
        KindArg::Text => report::<Text, Db>(cell),
        KindArg::Boolean => report::<Boolean, Db>(cell),
    }
}

fn report<K: ValueKind, Db: Connector>(cell: Option<&[u8]>) {
    let entry = ResultEntry::<K, Db>::from_cell(cell);
    println!("kind:    {}", K::NAME);
    match entry.is_null() {
        Ok(is_null) => println!("is_null: {}", is_null),
        Err(e) => println!("is_null: error: {}", e),
    }
    // A trusted connector asserts instead of reporting errors.
    if Db::ASSERT_RESULT_VALIDITY && !entry.is_readable() {
        println!("value:   not read (NULL under a trusted connector)");
        return;
    }
    match entry.value() {
        Ok(value) => println!("value:   {:?}", value),
        Err(e) => println!("value:   error: {}", e),
    }
}
