//! wap-render main entrypoint.

use wap_render::run;
use wap_render::ui::messages::error;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
