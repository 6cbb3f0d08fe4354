//! Per-algorithm hash dump files: one encoded hash per line, in the same
//! order as the sample source. These are the inputs handed to the external
//! cracking tool.

use primitives::{Primitive, PrimitiveImpl};

use errors::*;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// File name for a primitive's dump, derived from its name and parameters,
/// e.g. `bcrypt_cost12.txt` or `argon2_m16384_t2_p1.txt`.
pub fn dump_file_name(prim: &Primitive) -> String {
    let mut name = prim.name().to_string();
    for (key, value) in prim.params_as_vec() {
        name.push('_');
        name.push_str(key);
        name.push_str(&value);
    }
    name.push_str(".txt");
    name
}

/// Hash every sample with `prim` and write one encoded hash per line.
pub fn write_hash_file<P: AsRef<Path>>(
    path: P,
    prim: &Primitive,
    samples: &[String],
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    for sample in samples {
        let hash = prim.hash(sample)?;
        writeln!(writer, "{}", hash)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the normalized wordlist (one sample per line, file order).
pub fn write_wordlist<P: AsRef<Path>>(path: P, samples: &[String]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    for sample in samples {
        writeln!(writer, "{}", sample)?;
    }
    writer.flush()?;
    Ok(())
}
