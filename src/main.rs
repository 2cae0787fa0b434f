use std::process;

use log::error;

use assetbook::file_store::FileStore;
use assetbook::menu::CommandLoop;

fn main() {
    pretty_env_logger::init();

    // the one unrecoverable startup failure
    let files = match FileStore::new("Assets") {
        Ok(files) => files,
        Err(err) => {
            error!("cannot prepare working directory: {}", err);
            eprintln!("cannot prepare working directory Assets: {}", err);
            process::exit(1);
        }
    };

    CommandLoop::new(files).run();
}
