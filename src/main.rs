// Copyright (C) 2025 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

use mk_mysql::setup;

fn main() {
    let code = match setup::init(std::env::args_os()) {
        Ok((config, _environment, _logger)) => match setup::run(&config) {
            Ok(output) => {
                print!("{output}");
                log::info!("Success");
                0
            }
            Err(e) => {
                display_and_log(e);
                1
            }
        },
        Err(e) => {
            display_and_log(e);
            1
        }
    };
    std::process::exit(code);
}

fn display_and_log(e: impl std::fmt::Display) {
    log::error!("{e}");
    eprintln!("Stop on error: `{e}`");
}
