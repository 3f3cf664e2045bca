#![allow(clippy::module_name_repetitions, clippy::default_trait_access)]

use clap::Parser;
use eyre::{Result, WrapErr};

use s3mirror_core::config::RawConfig;
use s3mirror_core::credentials::Credentials;
use s3mirror_core::logging::{init_color_eyre, init_logger};

use crate::opts::Opts;
use crate::report::report;

mod opts;
mod report;

fn main() -> Result<()> {
    init_color_eyre()?;
    drop(dotenvy::dotenv());

    let opts = Opts::parse();
    init_logger(opts.log_format, opts.verbose);

    let raw = RawConfig::from(&opts);
    let credentials = Credentials::from(&opts);

    let derived = raw
        .derive_now()
        .wrap_err("invalid mirror configuration")?;
    report(&derived, &credentials);

    Ok(())
}
