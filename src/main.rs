//! rFarmlog main entrypoint.

use rfarmlog::run;
use rfarmlog::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
