use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use log::info;
use seahorse::{App, Command, Context, Flag, FlagType};

use speedtype_sheet::input::{Config, ConfigBuilder};
use speedtype_sheet::{
    generate_time_sheet, render_time_sheet, write_sample_config, write_time_sheet,
    AllocationSummary, OutputFormat,
};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

mod seahorse_exts {
    use core::fmt;
    use std::path::PathBuf;
    use std::str::FromStr;

    use anyhow::Context as _;
    use log::error;
    use seahorse::Context;

    /// Logs the error and exits the process, seahorse actions can not return one.
    pub fn exit_on_error<E: fmt::Debug>(result: Result<(), E>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn optional_string_flag(&self, name: &str) -> Option<String> {
            self.context().string_flag(name).ok()
        }

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.optional_string_flag(name)
                .with_context(|| format!("missing required flag \"--{}\"", name))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name).map(PathBuf::from)
        }

        fn parsed_flag<T>(&self, name: &str) -> Result<Option<T>, anyhow::Error>
        where
            T: FromStr,
            T::Err: std::error::Error + Send + Sync + 'static,
        {
            self.optional_string_flag(name)
                .map(|value| {
                    value
                        .parse()
                        .with_context(|| format!("invalid value `{}` for flag \"--{}\"", value, name))
                })
                .transpose()
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let path = context.required_path_flag("config")?;
    let mut builder: ConfigBuilder = Config::try_from_file(&path)?;

    if let Some(weeks) = context.parsed_flag::<usize>("weeks")? {
        builder.weeks(weeks);
    }

    if let Some(paid_time_off) = context.parsed_flag::<f64>("pto")? {
        builder.paid_time_off(paid_time_off);
    }

    let config = builder
        .build()
        .with_context(|| format!("invalid config `{}`", path.display()))?;

    info!("finished building config");

    Ok(config)
}

fn make(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let format = context
        .parsed_flag::<OutputFormat>("format")?
        .unwrap_or_default();

    let time_sheet = generate_time_sheet(&config)?;

    match context.optional_string_flag("output") {
        Some(output) => write_time_sheet(&time_sheet, format, Path::new(&output)),
        None => {
            println!("{}", render_time_sheet(&time_sheet, format)?);
            Ok(())
        }
    }
}

fn summary(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;

    print!("{}", AllocationSummary::new(&config)?);

    Ok(())
}

fn init(context: &Context) -> anyhow::Result<()> {
    let output = context
        .optional_string_flag("output")
        .map_or_else(|| PathBuf::from("config.json"), PathBuf::from);

    write_sample_config(output, context.bool_flag("force"))
}

fn config_flags(command: Command) -> Command {
    command
        .flag(
            Flag::new("config", FlagType::String)
                .alias("c")
                .description("Path to the config file (`.json` or `.toml`)."),
        )
        .flag(
            Flag::new("weeks", FlagType::String)
                .description("[optional] Overrides the number of weeks from the config."),
        )
        .flag(
            Flag::new("pto", FlagType::String)
                .description("[optional] Overrides the paid time off (in hours) from the config."),
        )
}

fn run() {
    let args: Vec<String> = env::args().collect();

    let make_command = config_flags(
        Command::new("make")
            .usage(format!("{} make --config <path> [args]", args[0]))
            .description("Makes a time sheet from the given config."),
    )
    .flag(
        Flag::new("output", FlagType::String)
            .alias("o")
            .description("[optional] Path to the output file. Default: prints to stdout"),
    )
    .flag(
        Flag::new("format", FlagType::String)
            .alias("f")
            .description("[optional] The output format, `text` or `json`. Default: text"),
    )
    .action(|context: &Context| exit_on_error(make(context)));

    let summary_command = config_flags(
        Command::new("summary")
            .usage(format!("{} summary --config <path>", args[0]))
            .description("Prints how the hours of every project are distributed."),
    )
    .action(|context: &Context| exit_on_error(summary(context)));

    let init_command = Command::new("init")
        .usage(format!("{} init [args]", args[0]))
        .description("Writes an example config.")
        .flag(
            Flag::new("output", FlagType::String)
                .alias("o")
                .description("[optional] Path to the config file. Default: config.json"),
        )
        .flag(
            Flag::new("force", FlagType::Bool)
                .description("[optional] Overwrites an existing file. Default: false"),
        )
        .action(|context: &Context| exit_on_error(init(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [command] [args]", args[0]))
        .command(make_command)
        .command(summary_command)
        .command(init_command);

    app.run(args);
}
