use ipv4_toolkit::batch::run_batch;
use ipv4_toolkit::cli::{parse_args, Command, USAGE};
use ipv4_toolkit::config;
use ipv4_toolkit::output::{print_json, print_report, Report};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

fn init_logging() -> Result<(), Box<dyn Error>> {
    let log_config = config::log_config_file();
    if Path::new(&log_config).exists() {
        log4rs::init_file(&log_config, Default::default())?;
        return Ok(());
    }
    // No config file, warnings to stderr so stdout stays clean
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let log_config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(log_config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;
    log::info!("#Start main()");

    let args = parse_args(std::env::args().skip(1)).map_err(|e| format!("{e}\n\n{USAGE}"))?;
    let formats = args.formats.clone().unwrap_or_else(config::report_formats);

    let reports = match args.command {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Query {
            address,
            mask,
            contains,
        } => vec![Report::build(&address, mask.as_deref(), &contains, &formats)],
        Command::Batch { path } => run_batch(&path, &formats)?,
    };

    if args.json {
        print_json(&reports)?;
    } else {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_report(report);
        }
    }

    log::info!("#End main() {} reports", reports.len());
    Ok(())
}
