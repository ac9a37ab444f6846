use log::info;
use wordfreq::cli::{self, ParallelCli};
use wordfreq::ParallelCounter;

fn main() {
    cli::init_logging();

    let args: ParallelCli = cli::parse_or_exit();
    let result = args.config().and_then(|config| {
        info!(
            "parallel: {} workers, batch size {}",
            config.workers(),
            config.batch_size()
        );
        cli::run(&ParallelCounter::new(config), &args.input)
    });
    cli::exit_on_error(result);
}
