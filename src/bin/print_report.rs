use std::env;
use std::sync::Arc;

use log::error;
use qualifying_report::modules::helpers::config::Config;
use qualifying_report::modules::helpers::logging::setup_logging;
use qualifying_report::modules::log_processor::LogProcessor;
use qualifying_report::modules::ranking_service::{RankingService, SortOrder};

// drivers below this position drop out after Q1
const Q1_CUTOFF: usize = 15;

fn main() {
    let config = Config::init();
    setup_logging(&config).expect("failed to setup logging");

    let order = if env::args().any(|arg| arg == "--desc") {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };

    let processor = match LogProcessor::open(&config) {
        Ok(processor) => processor,
        Err(error) => {
            error!(target: "print_report", "could not load {}: {}", config.data_dir.display(), error);
            std::process::exit(1);
        }
    };
    let service = RankingService::new(Arc::new(processor));

    let report = service.full_report(order);
    let total = report.len();
    for row in report {
        println!(
            "{:>2}. {:<20} | {:<28} | {}",
            row.position, row.name, row.team, row.lap_time
        );

        let last_qualifier = match order {
            SortOrder::Ascending => row.position == Q1_CUTOFF,
            SortOrder::Descending => row.position == total.saturating_sub(Q1_CUTOFF),
        };
        if last_qualifier && row.position != total {
            println!("{}", "-".repeat(64));
        }
    }
}
