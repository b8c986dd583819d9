use std::process;

fn main() {
    if let Err(e) = site_mapper::cli::run() {
        println!("{}", e);
        process::exit(1);
    }
}
