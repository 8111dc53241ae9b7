//! `coinlinks host <url>...` – show the hostname label for each URL.

use coinlinks_core::links::{hostname, normalize};

pub fn run_host(urls: &[String]) {
    for url in urls {
        match normalize(url) {
            Some(link) => println!("{}\t{}", hostname(link.as_str()), link),
            None => println!("(dropped)"),
        }
    }
}
