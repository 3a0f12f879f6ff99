// std imports
use std::{
    fs::OpenOptions,
    io::{IsTerminal, stderr, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use bruteout::{
    Login, Printer, Reporter, Settings, Theme,
    cli::{self, Command},
    config,
    error::*,
};

const BRUTEOUT_DEBUG_LOG: &str = "BRUTEOUT_DEBUG_LOG";
const BRUTEOUT_DEBUG_LOG_STYLE: &str = "BRUTEOUT_DEBUG_LOG_STYLE";

// ---

fn bootstrap(opt: &cli::Opt) -> Result<Settings> {
    if std::env::var(BRUTEOUT_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(BRUTEOUT_DEBUG_LOG)
                .write_style(BRUTEOUT_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let (offset, no_default) = opt
        .config
        .iter()
        .rposition(|x| x.is_empty() || x == "-")
        .map(|x| (x + 1, true))
        .unwrap_or_default();
    let configs = &opt.config[offset..];

    let mut settings = config::at(configs).no_default(no_default).load()?;

    opt.apply(&mut settings);
    log::debug!("settings: {:?}", settings);

    Ok(settings)
}

fn run(opt: &cli::Opt, reporter: &Reporter) -> Result<()> {
    let printer = reporter.printer();

    match &opt.command {
        Command::Emit { level, message } => {
            printer.print(*level, &mut stderr(), format_args!("{}", message));
        }
        Command::Log { message } => {
            printer.log_line(&mut stdout(), format_args!("{}\n", message));
        }
        Command::Login {
            host,
            port,
            user,
            password,
            output,
        } => {
            let login = Login {
                hostname: host,
                port: *port,
                username: user,
                password,
            };
            match output {
                Some(path) => {
                    let mut file = match OpenOptions::new().create(true).append(true).open(path) {
                        Ok(file) => file,
                        Err(err) => {
                            printer.error(
                                &mut stderr(),
                                format_args!("failed to open {}: {}", path.display(), err),
                            );
                            return Err(err.into());
                        }
                    };
                    reporter.log_successful_login(&mut stderr(), &mut file, &login)?;
                }
                None => reporter.log_successful_login(&mut stderr(), &mut stdout(), &login)?,
            }
        }
    }

    Ok(())
}

fn main() {
    let opt = cli::Opt::parse();

    let settings = match bootstrap(&opt) {
        Ok(settings) => settings,
        Err(err) => {
            Printer::new(Default::default())
                .with_theme(Theme::with_colors(stderr().is_terminal()))
                .error(&mut stderr(), format_args!("{}", err));
            process::exit(1);
        }
    };

    let reporter = Reporter::new(&settings);
    if run(&opt, &reporter).is_err() {
        process::exit(1);
    }
}
