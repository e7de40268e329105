// Window handling follows the pixels conway example
//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

#![deny(clippy::all)]
#![forbid(unsafe_code)]

use clap::Parser;
use log::error;

use tri_state_life::auxiliary::Config;
use tri_state_life::projects::run_decay_life;

fn main() {
    env_logger::init();
    let config = Config::parse();

    println!("\nControls:\nSPACE: pause\nENTER: single generation\nBACKSPACE/C: clear\nR: randomize\nMouse left/right/middle: paint on/off/dying\nESC: close");

    if let Err(e) = run_decay_life(&config) {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
