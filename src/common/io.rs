use std::fs::File;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::Path;

use memmap2::{Mmap, MmapOptions};

/// Whole input for one codec call: a read-only mapping or an owned buffer.
/// Dereferences to `&[u8]`.
pub enum InputData {
    Mmap(Mmap),
    Owned(Vec<u8>),
}

impl Deref for InputData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            InputData::Mmap(m) => m,
            InputData::Owned(v) => v,
        }
    }
}

/// Below this size a plain read() beats the mmap setup/teardown cost.
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Read all of `name`, where `-` means standard input.
pub fn read_input(name: &str) -> io::Result<InputData> {
    if name == "-" {
        return read_stdin().map(InputData::Owned);
    }
    read_file(Path::new(name))
}

/// Read a file: mmap for large regular files, read() for everything else.
pub fn read_file(path: &Path) -> io::Result<InputData> {
    let file = File::open(path)?;
    let metadata = file.metadata()?;
    let len = metadata.len();

    // Pipes, character devices and procfs entries report no usable size.
    if !metadata.file_type().is_file() || len == 0 {
        let mut buf = Vec::new();
        (&file).read_to_end(&mut buf)?;
        return Ok(InputData::Owned(buf));
    }

    if len < MMAP_THRESHOLD {
        let mut buf = vec![0u8; len as usize];
        let n = read_full(&mut &file, &mut buf)?;
        buf.truncate(n);
        return Ok(InputData::Owned(buf));
    }

    // SAFETY: read-only private mapping; the file is not modified through it.
    match unsafe { MmapOptions::new().map(&file) } {
        Ok(mmap) => {
            #[cfg(target_os = "linux")]
            {
                let _ = mmap.advise(memmap2::Advice::Sequential);
                let _ = mmap.advise(memmap2::Advice::WillNeed);
            }
            Ok(InputData::Mmap(mmap))
        }
        Err(_) => {
            let mut buf = Vec::with_capacity(len as usize);
            (&file).read_to_end(&mut buf)?;
            Ok(InputData::Owned(buf))
        }
    }
}

/// Read standard input to EOF.
pub fn read_stdin() -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin().lock().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Read as many bytes as possible into buf, retrying on partial reads.
fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match reader.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}
