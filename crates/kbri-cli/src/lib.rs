//! kbri-cli
//! ========
//!
//! Command-line interface for `kbri-core`: find the nearest Indonesian
//! embassy (KBRI) or consulate (KJRI) to a city, region or country.
//!
//! Basic usage:
//!
//! ```text
//! kbri stats
//! kbri nearest Paris
//! kbri nearest "New Jersey" -k 5
//! kbri nearest Lyon --json
//! kbri --cities my_cities.csv.gz resolve bavaria
//! ```
//!
//! The library target holds the presentation layer so it can be tested;
//! the wording of answers lives here, never in the core.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod render;

/// Log level used when `RUST_LOG` is unset, from the `-v` count.
pub fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::CliArgs;
    use clap::Parser;

    #[test]
    fn verbosity_steps_through_levels() {
        assert_eq!(default_log_level(0), "warn");
        assert_eq!(default_log_level(1), "info");
        assert_eq!(default_log_level(2), "debug");
        assert_eq!(default_log_level(7), "debug");
    }

    #[test]
    fn repeated_v_flags_are_counted() {
        let args = CliArgs::try_parse_from(["kbri", "-vv", "stats"]).unwrap();
        assert_eq!(default_log_level(args.verbose), "debug");
        let args = CliArgs::try_parse_from(["kbri", "stats", "-v"]).unwrap();
        assert_eq!(default_log_level(args.verbose), "info");
    }
}
