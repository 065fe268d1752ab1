use std::net::SocketAddr;
use std::process;

use getopts::Options;

use crate::feeds::FeedUrls;

pub struct Args {
    pub address: SocketAddr,
    pub feeds: FeedUrls,
    pub geocoder_token: Option<String>,
}

fn opts() -> Options {
    let mut opts = Options::new();

    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );

    opts.optopt(
        "a",
        "address",
        "Socket address (IP and port) to listen on [Default: 127.0.0.1:8080]",
        "SOCKET_ADDRESS",
    );

    opts.optopt("", "main-feed", "Override the main schedule feed URL", "URL");
    opts.optopt("", "path1-feed", "Override the path 1 schedule feed URL", "URL");
    opts.optopt("", "path2-feed", "Override the path 2 schedule feed URL", "URL");

    opts.optopt(
        "g",
        "geocoder-token",
        "Access token for the geocoding provider [Default: geocoding disabled]",
        "TOKEN",
    );

    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!(
            "{}",
            opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME")))
        );
        process::exit(0);
    }

    let address = match matches.opt_get_default("address", SocketAddr::from(([127, 0, 0, 1], 8080)))
    {
        Ok(address) => address,
        Err(err) => {
            eprintln!("Provided value for option 'address' is invalid: {err}");
            process::exit(1);
        }
    };

    let mut feeds = FeedUrls::default();

    if let Some(url) = matches.opt_str("main-feed") {
        feeds.main = url;
    }

    if let Some(url) = matches.opt_str("path1-feed") {
        feeds.path1 = url;
    }

    if let Some(url) = matches.opt_str("path2-feed") {
        feeds.path2 = url;
    }

    Args {
        address,
        feeds,
        geocoder_token: matches.opt_str("geocoder-token"),
    }
}
