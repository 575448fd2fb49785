use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// First two bytes of every gzip member.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Path value that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Line source returned by the `get_*reader` functions.
pub type DynamicReader = BufReader<Box<dyn Read>>;

///
/// Wrap any reader in a line-oriented reader, transparently decompressing
/// gzip (and bgzip, which is multi-member gzip) input.
///
/// The format is detected from the magic bytes rather than the file
/// extension, so `clusters.clstr` that is actually gzipped still reads.
///
/// # Arguments
///
/// - inner: the raw byte source
///
pub fn get_decompressing_reader<R: Read + 'static>(inner: R) -> io::Result<BufReader<Box<dyn Read>>> {
    let mut buffered = BufReader::new(inner);
    let is_gzipped = buffered.fill_buf()?.starts_with(&GZIP_MAGIC);

    let reader: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(buffered)),
        false => Box::new(buffered),
    };

    Ok(BufReader::new(reader))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to open file {}: {}", path.display(), e))
    })?;
    get_decompressing_reader(file)
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - path: path to the file to read, or '-' for stdin
///
/// # Returns
///
/// A `BufReader` object for a given file path or stdin.
pub fn get_dynamic_reader_w_stdin(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    if path.as_os_str() == STDIN_PATH {
        get_decompressing_reader(io::stdin())
    } else {
        get_dynamic_reader(path)
    }
}
