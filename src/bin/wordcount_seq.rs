use wordfreq::cli::{self, SequentialCli};
use wordfreq::SequentialCounter;

fn main() {
    cli::init_logging();

    let args: SequentialCli = cli::parse_or_exit();
    cli::exit_on_error(cli::run(&SequentialCounter::new(), &args.input));
}
