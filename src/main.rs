mod args;
mod config;
mod entry;
mod error;
mod http;
mod logger;
mod payload;
mod runner;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
