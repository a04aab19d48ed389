//! create-halo-plugin entry point.

use create_halo_plugin::{
    cli::get_args, error::default_error_handler, logger::init_logger, prompt::DialoguerPrompter,
    runner::run,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    println!("🚀 Welcome to Halo Plugin Creator!\n");
    let prompter = DialoguerPrompter::new();
    if let Err(err) = run(&args, &prompter) {
        default_error_handler(err);
    }
}
