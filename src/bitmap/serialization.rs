use bytemuck::cast_slice_mut;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;

use crate::bitmap::merge;
use crate::RleBitmap;

impl RleBitmap {
    /// Return the size in bytes of the serialized output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// let rb1 = RleBitmap::try_from_runs(vec![10, 2])?;
    /// let mut bytes = Vec::with_capacity(rb1.serialized_size());
    /// rb1.serialize_into(&mut bytes).unwrap();
    /// let rb2 = RleBitmap::deserialize_from(&bytes[..]).unwrap();
    ///
    /// assert_eq!(rb1, rb2);
    /// # Ok::<(), rle_bitmap::UniverseOverflow>(())
    /// ```
    pub fn serialized_size(&self) -> usize {
        8 + self.runs.len() * 8
    }

    /// Serialize this bitmap as its ordered run lengths: a little-endian
    /// `u64` count followed by each run as a little-endian `u64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// let rb1 = RleBitmap::try_from_runs(vec![10, 2])?;
    /// let mut bytes = vec![];
    /// rb1.serialize_into(&mut bytes).unwrap();
    /// let rb2 = RleBitmap::deserialize_from(&bytes[..]).unwrap();
    ///
    /// assert_eq!(rb1, rb2);
    /// # Ok::<(), rle_bitmap::UniverseOverflow>(())
    /// ```
    pub fn serialize_into<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_u64::<LittleEndian>(self.runs.len() as u64)?;
        for &run in &self.runs {
            writer.write_u64::<LittleEndian>(run)?;
        }
        Ok(())
    }

    /// Deserialize a bitmap from the run-length byte format written by
    /// [`RleBitmap::serialize_into`]. This method checks that the runs stay
    /// within the universe. If deserializing from a trusted source consider
    /// [`RleBitmap::deserialize_unchecked_from`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rle_bitmap::RleBitmap;
    ///
    /// let rb1 = RleBitmap::try_from_runs(vec![10, 2])?;
    /// let mut bytes = vec![];
    /// rb1.serialize_into(&mut bytes).unwrap();
    /// let rb2 = RleBitmap::deserialize_from(&bytes[..]).unwrap();
    ///
    /// assert_eq!(rb1, rb2);
    /// # Ok::<(), rle_bitmap::UniverseOverflow>(())
    /// ```
    pub fn deserialize_from<R: io::Read>(reader: R) -> io::Result<RleBitmap> {
        let runs = read_runs(reader)?;
        RleBitmap::try_from_runs(runs)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Deserialize a bitmap without checking the runs against the universe
    /// bound. The sequence is still normalized into canonical form. A bitmap
    /// read past the bound breaks the complement operations; only use this
    /// with data from a trusted source.
    pub fn deserialize_unchecked_from<R: io::Read>(reader: R) -> io::Result<RleBitmap> {
        let runs = read_runs(reader)?;
        Ok(RleBitmap { runs: merge::canonicalize(&runs) })
    }
}

fn read_runs<R: io::Read>(mut reader: R) -> io::Result<Vec<u64>> {
    let len = reader.read_u64::<LittleEndian>()?;
    let len = usize::try_from(len)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "run count overflows memory"))?;

    // read in bounded chunks, the count is untrusted
    const CHUNK: usize = 4096;
    let mut runs = Vec::with_capacity(len.min(CHUNK));
    let mut left = len;
    while left > 0 {
        let take = left.min(CHUNK);
        let mut values = vec![0u64; take];
        reader.read_exact(cast_slice_mut(&mut values))?;
        values.iter_mut().for_each(|n| *n = u64::from_le(*n));
        runs.extend_from_slice(&values);
        left -= take;
    }
    Ok(runs)
}
