use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod example;
pub mod import;
pub mod solve;

use ibfs_core::utils::GenericResult;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> GenericResult<File> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'").into())
}

fn create_file(path: &str, description: &str) -> GenericResult<File> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'").into())
}

fn get_out_file(matches: &ArgMatches, arg_name: &str) -> GenericResult<Option<File>> {
    matches.get_one::<String>(arg_name).map(|path| create_file(path, "out result")).transpose()
}

fn get_required_value<'a>(matches: &'a ArgMatches, arg_name: &str) -> GenericResult<&'a str> {
    matches.get_one::<String>(arg_name).map(String::as_str).ok_or_else(|| format!("'{arg_name}' is not set").into())
}
