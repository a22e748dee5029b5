use std::{ffi::OsString, io::BufReader, path::Path};

use otter_ssat::{context::Context, types::err::ErrorKind};

pub(super) enum ReadError {
    ParseError(ErrorKind),
    UnknownExtension(OsString),
    FailedToOpen,
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::ParseError(err) => write!(f, "Parse error: '{err}'."),
            Self::UnknownExtension(ex) => write!(f, "Unsupported extension '{ex:?}'."),
            Self::FailedToOpen => write!(f, "Failed to open SDIMACS file."),
        }
    }
}

/// Reads the SDIMACS file at `path` to `context`, decompressing gzip and xz files by extension.
pub(super) fn read_sdimacs(path: &Path, context: &mut Context, verbose: bool) -> Result<(), ReadError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    let parse_report = match path.extension() {
        Some(extension) if extension == "xz" => {
            context.read_sdimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        Some(extension) if extension == "gz" => {
            context.read_sdimacs(BufReader::new(flate2::read::GzDecoder::new(&file)))
        }

        Some(extension) if extension == "sdimacs" || extension == "ssat" || extension == "cnf" => {
            context.read_sdimacs(BufReader::new(&file))
        }

        Some(unknown) => return Err(ReadError::UnknownExtension(unknown.to_owned())),

        None => context.read_sdimacs(BufReader::new(&file)),
    };

    match parse_report {
        Ok(info) => {
            if verbose {
                match info.expected_atoms {
                    Some(count) => println!("c Expected atoms:   {count}"),
                    None => println!("c No preamble was found."),
                }
                println!("c Atom count:       {}", info.added_atoms);
                if let Some(count) = info.expected_clauses {
                    println!("c Expected clauses: {count}")
                }
                println!("c Clause count:     {}", info.added_clauses);
                println!("c Quantified atoms: {}", info.quantified_atoms);
            }
            Ok(())
        }

        Err(e) => Err(ReadError::ParseError(e)),
    }
}
