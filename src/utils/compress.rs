use std::io::{self, Read, Write};

use flate2::write::GzEncoder;
use flate2::Compression;

/// Gzip-compress everything readable from `reader` into memory.
///
/// The whole input is buffered before encoding, then the encoder output is
/// returned as a second buffer. Memory use is therefore roughly the input
/// size plus the compressed size.
///
/// # Arguments
///
/// * `reader` - Source of the uncompressed bytes, usually an open file
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - A complete gzip stream
/// * `Err` - If reading the source or finishing the encoder fails
pub fn gzip_reader<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut contents = Vec::new();
    reader.read_to_end(&mut contents)?;
    gzip_bytes(&contents)
}

/// Gzip-compress a byte slice using the default compression level.
pub fn gzip_bytes(contents: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(
        Vec::with_capacity(contents.len() / 2 + 64),
        Compression::default(),
    );
    encoder.write_all(contents)?;
    encoder.finish()
}
