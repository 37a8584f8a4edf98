//! Herald CLI entry point.
//!
//! Starts an interactive console over a demo command set.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use herald_command::{CommandBuilder, DefaultValue, ParamSpec};
use herald_engine::Dispatcher;
use herald_foundation::Value;
use herald_runtime::{Console, TextChannel, help_command};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    prefix: Option<String>,
    no_banner: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-banner" => config.no_banner = true,
            "--prefix" => {
                i += 1;
                if i >= args.len() {
                    return Err("--prefix requires a value".into());
                }
                config.prefix = Some(args[i].clone());
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("herald {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let dispatcher = Arc::new(demo_dispatcher()?);

    let mut channel = TextChannel::new(dispatcher);
    if let Some(prefix) = config.prefix {
        channel = channel.with_prefix(prefix);
    }

    let mut console = Console::new(channel)?;
    if config.no_banner {
        console = console.without_banner();
    }
    console.run()?;
    Ok(())
}

/// Registers the demo command set: echo, sum, greet, help.
fn demo_dispatcher() -> Result<Dispatcher, Box<dyn std::error::Error>> {
    let dispatcher = Dispatcher::new();

    dispatcher.register(help_command(dispatcher.router_handle()))?;

    dispatcher.register(
        CommandBuilder::new("echo")
            .summary("Repeats its arguments")
            .param(ParamSpec::new("words", "text").list())
            .handler(|_, _, args| {
                let words: Vec<&str> = args
                    .list("words")
                    .into_iter()
                    .flatten()
                    .filter_map(Value::as_str)
                    .collect();
                Ok(Value::from(words.join(" ")))
            }),
    )?;

    dispatcher.register(
        CommandBuilder::new("sum")
            .summary("Adds integers")
            .param(ParamSpec::new("values", "integer").list())
            .handler(|_, _, args| {
                let total: i64 = args
                    .list("values")
                    .into_iter()
                    .flatten()
                    .filter_map(Value::as_int)
                    .sum();
                Ok(Value::Int(total))
            }),
    )?;

    dispatcher.register(
        CommandBuilder::new("greet")
            .summary("Greets someone")
            .param(ParamSpec::new("name", "text").default(DefaultValue::of("world")))
            .param(ParamSpec::new("shout", "boolean").default(DefaultValue::of("false")))
            .handler(|_, _, args| {
                let name = args.str("name").unwrap_or("world");
                let greeting = format!("Hello, {name}!");
                Ok(Value::from(if args.bool("shout") == Some(true) {
                    greeting.to_uppercase()
                } else {
                    greeting
                }))
            }),
    )?;

    Ok(dispatcher)
}

fn print_help() {
    println!(
        "\x1b[1mHerald\x1b[0m - Command-dispatch console

\x1b[1mUSAGE:\x1b[0m
    herald [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --prefix <p>       Only handle lines starting with the prefix
    --no-banner        Suppress the welcome banner

\x1b[1mCONSOLE:\x1b[0m
    help               List registered commands
    echo <words...>    Repeat the arguments
    sum <values...>    Add integers
    greet [name] [-s]  Greet someone
    Ctrl+D             Exit
    Ctrl+C             Cancel current input

For more information, visit https://github.com/herald-rs/herald"
    );
}
