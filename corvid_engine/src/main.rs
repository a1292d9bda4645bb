extern crate corvid_engine;
extern crate env_logger;

use env_logger::Env;

use corvid_engine::engine::CorvidSearcher;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut searcher = CorvidSearcher::init(true);
    searcher.uci();
}
