use std::path::Path;

use nlmaps_mrl::{Dialect, io};

pub fn resolve_dialect(name: &str) -> Dialect {
    Dialect::from_name(name).unwrap_or_else(|| {
        eprintln!("error: unknown dialect: {}", name);
        std::process::exit(1);
    })
}

pub fn read_lines_or_exit(path: &Path) -> Vec<String> {
    io::read_lines(path).unwrap_or_else(|err| {
        eprintln!("error: cannot read {}: {}", path.display(), err);
        std::process::exit(1);
    })
}

pub fn write_lines_or_exit(path: &Path, lines: &[String]) {
    if let Err(err) = io::write_lines(path, lines) {
        eprintln!("error: cannot write {}: {}", path.display(), err);
        std::process::exit(1);
    }
}
