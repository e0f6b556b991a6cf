//! Plots `caminhominimo.txt` over `cidades.txt`, both in the labeled layout
//! (`Cidade N: (x, y)` city lines, comma decimals).

use std::process::ExitCode;

use tour_plot::logging::{init_logger, log_error_chain};
use tour_plot::{Config, Layout, run};

fn main() -> ExitCode {
    let config = Config::new(Layout::Labeled);
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
