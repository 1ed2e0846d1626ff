#[macro_use]
extern crate log;

use m68k_gen::Language;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    let args = env::args().collect::<Vec<_>>();
    if args.len() < 2 || args.len() > 3 {
        let program = args.get(0).map_or("m68k-gen", String::as_str);
        eprintln!("Usage: {} <python|java|rust> [output]", program);
        process::exit(1);
    }

    let language = match args[1].parse::<Language>() {
        Ok(language) => language,
        Err(e) => {
            eprintln!("error parsing language: {}", e);
            process::exit(1);
        }
    };

    let result = match args.get(2) {
        Some(path) => {
            let mut path = PathBuf::from(path);
            if path.is_dir() {
                path.push(language.file_name());
            }
            info!("writing {} constants to {}", language, path.display());

            File::create(&path)
                .map_err(m68k_gen::Error::from)
                .and_then(|file| m68k_gen::render(language, &mut BufWriter::new(file)))
        }
        None => {
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            m68k_gen::render(language, &mut stdout)
        }
    };

    if let Err(e) = result {
        eprintln!("error writing constants: {}", e);
        process::exit(1);
    }
}
