use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};

use crate::error::{Error, Result};
use crate::pipeline::{ALBUMS_URL, PHOTOS_URL};

static VERSION: &str = "0.1.0";
static AUTHOR: &str = "apmaros";
static DESCRIPTION: &str = "Downloads every photo from the photo API into per-album folders";
pub(crate) const PHOTOS: &str = "photos-url";
pub(crate) const ALBUMS: &str = "albums-url";
pub(crate) const OUTPUT: &str = "output";
const OUTPUT_SHORT: &str = "o";
pub(crate) const WORKERS_ARG: &str = "workers";
const WORKERS_SHORT: &str = "w";
const WORKERS_DEFAULT: &str = "100";

pub(crate) fn build_cli<'a>() -> ArgMatches<'a> {
    build_app().get_matches()
}

pub(crate) fn build_app<'a, 'b>() -> App<'a, 'b> {
    App::new("photo-grabber")
        .version(VERSION)
        .author(AUTHOR)
        .about(DESCRIPTION)
        .arg(Arg::with_name(PHOTOS)
            .long(PHOTOS)
            .takes_value(true)
            .default_value(PHOTOS_URL)
            .help("Endpoint listing photos"))
        .arg(Arg::with_name(ALBUMS)
            .long(ALBUMS)
            .takes_value(true)
            .default_value(ALBUMS_URL)
            .help("Endpoint listing albums"))
        .arg(Arg::with_name(OUTPUT)
            .short(OUTPUT_SHORT)
            .long(OUTPUT)
            .takes_value(true)
            .default_value(".")
            .help("Folder the album directories are created in"))
        .arg(Arg::with_name(WORKERS_ARG)
            .short(WORKERS_SHORT)
            .long(WORKERS_ARG)
            .takes_value(true)
            .default_value(WORKERS_DEFAULT)
            .help("How many fetches and writes may run at the same time"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) photos_url: String,
    pub(crate) albums_url: String,
    pub(crate) output: PathBuf,
    pub(crate) workers: usize,
}

impl Config {
    pub(crate) fn from_matches(matches: &ArgMatches) -> Result<Self> {
        // safe to unwrap, every arg has a default
        let photos_url = matches.value_of(PHOTOS).unwrap().to_owned();
        let albums_url = matches.value_of(ALBUMS).unwrap().to_owned();
        let output = PathBuf::from(matches.value_of(OUTPUT).unwrap());
        let raw_workers = matches.value_of(WORKERS_ARG).unwrap();

        let workers = match raw_workers.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return Err(Error::InvalidArgument { name: WORKERS_ARG, value: raw_workers.to_owned() }),
        };

        Ok(Config { photos_url, albums_url, output, workers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config> {
        let matches = build_app()
            .get_matches_from_safe(std::iter::once("photo-grabber").chain(args.iter().copied()))
            .unwrap();
        Config::from_matches(&matches)
    }

    #[test]
    fn no_arguments_gives_fixed_defaults() {
        let config = parse(&[]).unwrap();

        assert_eq!(config, Config {
            photos_url: PHOTOS_URL.to_string(),
            albums_url: ALBUMS_URL.to_string(),
            output: PathBuf::from("."),
            workers: 100,
        });
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--photos-url", "http://localhost/p",
            "--albums-url", "http://localhost/a",
            "-o", "/tmp/photos",
            "-w", "8",
        ]).unwrap();

        assert_eq!(config.photos_url, "http://localhost/p");
        assert_eq!(config.albums_url, "http://localhost/a");
        assert_eq!(config.output, PathBuf::from("/tmp/photos"));
        assert_eq!(config.workers, 8);
    }

    #[test]
    fn worker_count_must_be_positive_integer() {
        for bad in &["0", "many", "1.5"] {
            match parse(&["--workers", bad]) {
                Err(Error::InvalidArgument { name, value }) => {
                    assert_eq!(name, WORKERS_ARG);
                    assert_eq!(value, *bad);
                }
                other => panic!("expected invalid argument for {}, got {:?}", bad, other),
            }
        }
    }
}
