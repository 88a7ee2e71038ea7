// generate-font-atlas/src/main.rs
//
// Copyright © 2026 The Font Atlas Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Build-time atlas generator. Takes no arguments: the family list is static,
//! one monospaced and one proportional variant. Each run writes one PNG per
//! family into the working directory and prints the descriptor tables to
//! stdout.

use generate_font_atlas::atlas::{self, FontConfig};
use std::path::Path;
use std::process;

const FONT_CONFIGS: [FontConfig; 2] = [
    FontConfig {
        family: "Roboto Mono",
        bold: false,
        icons: true,
        output: "font-mono.png",
    },
    FontConfig {
        family: "Roboto Condensed",
        bold: false,
        icons: false,
        output: "font-default.png",
    },
];

fn main() {
    env_logger::init();

    for config in &FONT_CONFIGS {
        match atlas::generate(config, Path::new(".")) {
            Ok(descriptor) => println!("{}", descriptor),
            Err(err) => {
                eprintln!("{}: {}", config.output, err);
                process::exit(1);
            }
        }
    }
}
