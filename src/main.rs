use ptr_generate::cli::parse_args_from;
use ptr_generate::logging::init_logging;
use ptr_generate::output::{done_message, error_prefix, usage_message};
use ptr_generate::{run, RunConfig};
use std::error::Error;
use std::process::exit;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;

    let cli = match parse_args_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(_) => {
            print!("{}", usage_message(env!("CARGO_PKG_NAME")));
            exit(1);
        }
    };

    let config = RunConfig::new(cli.workbook);
    match run(&config) {
        Ok(_) => {
            println!("{}", done_message(&config.outfile));
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {e}", error_prefix());
            exit(1);
        }
    }
}
