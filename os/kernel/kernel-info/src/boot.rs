//! # Boot Information
//!
//! Machine identification and the ATAG boot parameter list.
//!
//! An ATAG list is a sequence of little-endian 32-bit words. Every tag starts
//! with a two-word header, `size` (in words, including the header) followed
//! by the tag code. The list must begin with `ATAG_CORE` and ends with an
//! `ATAG_NONE` header whose size is zero.
//!
//! ```rust
//! # use kernel_info::boot::*;
//! let words: [u32; 9] = [
//!     2, ATAG_CORE,
//!     4, ATAG_MEM, 0x0400_0000, 0x3000_0000,
//!     0, ATAG_NONE, 0,
//! ];
//! let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
//! let tags: Vec<_> = AtagList::new(&bytes).collect::<Result<_, _>>().unwrap();
//! assert_eq!(tags.len(), 2);
//! assert!(matches!(tags[1], Atag::Mem { size: 0x0400_0000, .. }));
//! ```

use core::fmt;
use kernel_memory_addresses::PhysicalAddress;

/// Machine type code passed by the bootloader in `r1`.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MachineId(u32);

impl MachineId {
    #[inline]
    #[must_use]
    pub const fn new(v: u32) -> Self {
        Self(v)
    }

    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MachineId({})", self.0)
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

pub const ATAG_NONE: u32 = 0x0000_0000;
pub const ATAG_CORE: u32 = 0x5441_0001;
pub const ATAG_MEM: u32 = 0x5441_0002;
pub const ATAG_SERIAL: u32 = 0x5441_0006;
pub const ATAG_REVISION: u32 = 0x5441_0007;
pub const ATAG_CMDLINE: u32 = 0x5441_0009;
pub const ATAG_INITRD2: u32 = 0x5442_0005;

/// Largest command line accepted from the bootloader, in bytes.
pub const COMMAND_LINE_SIZE: usize = 1024;

/// One decoded boot tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Atag<'a> {
    /// `ATAG_CORE`. The payload is optional; a bare header carries no data.
    Core {
        flags: u32,
        page_size: u32,
        root_dev: u32,
    },
    /// `ATAG_MEM`: one bank of physical RAM.
    Mem { size: u32, start: PhysicalAddress },
    /// `ATAG_INITRD2`: physical location of the initial ramdisk.
    Initrd2 { start: PhysicalAddress, size: u32 },
    /// `ATAG_SERIAL`: 64-bit board serial number.
    Serial { low: u32, high: u32 },
    /// `ATAG_REVISION`: board revision.
    Revision(u32),
    /// `ATAG_CMDLINE`: kernel command line, without the NUL terminator.
    Cmdline(&'a str),
    /// Any tag this parser does not interpret; kept so callers can log it.
    Unknown { tag: u32, words: usize },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum AtagError {
    #[error("ATAG list does not start with ATAG_CORE (found {0:#010x})")]
    MissingCore(u32),
    #[error("ATAG list truncated at byte offset {0}")]
    Truncated(usize),
    #[error("tag {tag:#010x} declares {words} words, fewer than its payload needs")]
    BadSize { tag: u32, words: u32 },
    #[error("command line is not valid UTF-8")]
    CmdlineEncoding,
    #[error("command line exceeds {} bytes", COMMAND_LINE_SIZE)]
    CmdlineTooLong,
}

/// Iterator over the tags of an ATAG list.
///
/// Yields tags up to (not including) `ATAG_NONE`. After the first error the
/// iterator is fused and yields `None`.
pub struct AtagList<'a> {
    bytes: &'a [u8],
    pos: usize,
    first: bool,
    done: bool,
}

impl<'a> AtagList<'a> {
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            first: true,
            done: false,
        }
    }

    fn word(&self, at: usize) -> Result<u32, AtagError> {
        let end = at.checked_add(4).ok_or(AtagError::Truncated(at))?;
        let chunk = self.bytes.get(at..end).ok_or(AtagError::Truncated(at))?;
        let mut raw = [0u8; 4];
        raw.copy_from_slice(chunk);
        Ok(u32::from_le_bytes(raw))
    }

    /// Find the command line, if any.
    ///
    /// # Errors
    /// Propagates the first malformed tag.
    pub fn cmdline(self) -> Result<Option<&'a str>, AtagError> {
        for tag in self {
            if let Atag::Cmdline(line) = tag? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Sum of all `ATAG_MEM` banks in bytes.
    ///
    /// # Errors
    /// Propagates the first malformed tag.
    pub fn total_memory(self) -> Result<u64, AtagError> {
        let mut total = 0u64;
        for tag in self {
            if let Atag::Mem { size, .. } = tag? {
                total += u64::from(size);
            }
        }
        Ok(total)
    }

    fn parse_next(&mut self) -> Result<Option<Atag<'a>>, AtagError> {
        let size = self.word(self.pos)?;
        let tag = self.word(self.pos + 4)?;

        if self.first {
            self.first = false;
            if tag != ATAG_CORE {
                return Err(AtagError::MissingCore(tag));
            }
        }

        if tag == ATAG_NONE {
            return Ok(None);
        }

        if size < 2 {
            return Err(AtagError::BadSize { tag, words: size });
        }

        let words = size as usize;
        let payload_start = self.pos + 8;
        let next = words
            .checked_mul(4)
            .and_then(|len| self.pos.checked_add(len))
            .filter(|end| *end <= self.bytes.len())
            .ok_or(AtagError::Truncated(self.pos))?;
        let payload_words = words - 2;

        let need = |n: usize| {
            if payload_words < n {
                Err(AtagError::BadSize { tag, words: size })
            } else {
                Ok(())
            }
        };
        let arg = |i: usize| self.word(payload_start + i * 4);

        let decoded = match tag {
            ATAG_CORE if payload_words == 0 => Atag::Core {
                flags: 0,
                page_size: 0,
                root_dev: 0,
            },
            ATAG_CORE => {
                need(3)?;
                Atag::Core {
                    flags: arg(0)?,
                    page_size: arg(1)?,
                    root_dev: arg(2)?,
                }
            }
            ATAG_MEM => {
                need(2)?;
                Atag::Mem {
                    size: arg(0)?,
                    start: PhysicalAddress::new(arg(1)?),
                }
            }
            ATAG_INITRD2 => {
                need(2)?;
                Atag::Initrd2 {
                    start: PhysicalAddress::new(arg(0)?),
                    size: arg(1)?,
                }
            }
            ATAG_SERIAL => {
                need(2)?;
                Atag::Serial {
                    low: arg(0)?,
                    high: arg(1)?,
                }
            }
            ATAG_REVISION => {
                need(1)?;
                Atag::Revision(arg(0)?)
            }
            ATAG_CMDLINE => {
                let bytes: &'a [u8] = self.bytes;
                let raw = &bytes[payload_start..next];
                let len = raw.iter().position(|b| *b == 0).unwrap_or(raw.len());
                if len > COMMAND_LINE_SIZE {
                    return Err(AtagError::CmdlineTooLong);
                }
                let line =
                    core::str::from_utf8(&raw[..len]).map_err(|_| AtagError::CmdlineEncoding)?;
                Atag::Cmdline(line)
            }
            _ => Atag::Unknown {
                tag,
                words: payload_words,
            },
        };

        self.pos = next;
        Ok(Some(decoded))
    }
}

impl<'a> Iterator for AtagList<'a> {
    type Item = Result<Atag<'a>, AtagError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.parse_next() {
            Ok(Some(tag)) => Some(Ok(tag)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl core::iter::FusedIterator for AtagList<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_bytes(words: &[u32]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    fn cmdline_words(line: &str) -> Vec<u32> {
        let mut raw = line.as_bytes().to_vec();
        raw.push(0);
        while raw.len() % 4 != 0 {
            raw.push(0);
        }
        let mut words = vec![2 + (raw.len() / 4) as u32, ATAG_CMDLINE];
        words.extend(
            raw.chunks(4)
                .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]])),
        );
        words
    }

    #[test]
    fn full_list_as_passed_by_uboot() {
        let mut words = vec![5, ATAG_CORE, 1, 4096, 0xFF];
        words.extend([4, ATAG_MEM, 0x0400_0000, 0x3000_0000]);
        words.extend(cmdline_words("console=ttySAC0,115200 root=/dev/mtdblock2"));
        words.extend([0, ATAG_NONE]);
        let bytes = to_bytes(&words);

        let tags: Vec<_> = AtagList::new(&bytes)
            .collect::<Result<_, _>>()
            .expect("well-formed list");
        assert_eq!(
            tags[0],
            Atag::Core {
                flags: 1,
                page_size: 4096,
                root_dev: 0xFF
            }
        );
        assert_eq!(
            tags[1],
            Atag::Mem {
                size: 0x0400_0000,
                start: PhysicalAddress::new(0x3000_0000)
            }
        );
        assert_eq!(
            tags[2],
            Atag::Cmdline("console=ttySAC0,115200 root=/dev/mtdblock2")
        );
        assert_eq!(tags.len(), 3);
    }

    #[test]
    fn cmdline_and_memory_helpers() {
        let mut words = vec![2, ATAG_CORE];
        words.extend([4, ATAG_MEM, 0x0200_0000, 0x3000_0000]);
        words.extend([4, ATAG_MEM, 0x0200_0000, 0x3200_0000]);
        words.extend(cmdline_words("noinitrd"));
        words.extend([0, ATAG_NONE]);
        let bytes = to_bytes(&words);

        assert_eq!(AtagList::new(&bytes).cmdline(), Ok(Some("noinitrd")));
        assert_eq!(AtagList::new(&bytes).total_memory(), Ok(0x0400_0000));
    }

    #[test]
    fn rejects_list_without_core() {
        let bytes = to_bytes(&[4, ATAG_MEM, 0x0400_0000, 0x3000_0000, 0, ATAG_NONE]);
        let mut list = AtagList::new(&bytes);
        assert_eq!(list.next(), Some(Err(AtagError::MissingCore(ATAG_MEM))));
        assert_eq!(list.next(), None);
    }

    #[test]
    fn rejects_truncated_tag() {
        let bytes = to_bytes(&[2, ATAG_CORE, 4, ATAG_MEM, 0x0400_0000]);
        let result: Result<Vec<_>, _> = AtagList::new(&bytes).collect();
        assert_eq!(result, Err(AtagError::Truncated(8)));
    }

    #[test]
    fn rejects_oversized_tag() {
        for size in [0x4000_0001, u32::MAX] {
            let mut words = vec![2, ATAG_CORE, size, ATAG_CMDLINE];
            words.extend(cmdline_words("console=ttySAC0").into_iter().skip(2));
            words.extend([0, ATAG_NONE]);
            let bytes = to_bytes(&words);
            let result: Result<Vec<_>, _> = AtagList::new(&bytes).collect();
            assert_eq!(result, Err(AtagError::Truncated(8)));
        }
    }

    #[test]
    fn rejects_undersized_mem_tag() {
        let bytes = to_bytes(&[2, ATAG_CORE, 3, ATAG_MEM, 0x0400_0000, 0, ATAG_NONE]);
        let result: Result<Vec<_>, _> = AtagList::new(&bytes).collect();
        assert_eq!(
            result,
            Err(AtagError::BadSize {
                tag: ATAG_MEM,
                words: 3
            })
        );
    }

    #[test]
    fn unknown_tags_are_skipped_over() {
        let bytes = to_bytes(&[2, ATAG_CORE, 3, 0x5441_0008, 0xDEAD, 0, ATAG_NONE]);
        let tags: Vec<_> = AtagList::new(&bytes).collect::<Result<_, _>>().unwrap();
        assert_eq!(
            tags[1],
            Atag::Unknown {
                tag: 0x5441_0008,
                words: 1
            }
        );
    }
}
