// SPDX-License-Identifier: MPL-2.0
use kefka::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        marquee_velocity: args.opt_value_from_str("--marquee-velocity").unwrap_or(None),
    };

    app::run(flags)
}
