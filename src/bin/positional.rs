//! Plots `caminhominimo.txt` over `cidades.txt`, both in the positional layout
//! (`x y` city lines, period decimals).

use std::process::ExitCode;

use tour_plot::logging::{init_logger, log_error_chain};
use tour_plot::{Config, Layout, run};

fn main() -> ExitCode {
    let config = Config::new(Layout::Positional);
    if let Err(e) = init_logger(config.log_level) {
        eprintln!("{e}");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error_chain(&e);
            ExitCode::FAILURE
        }
    }
}
