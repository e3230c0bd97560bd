//! Seeding a grid from a dotted IPv4 address.
//!
//! The 32 address bits, most significant first, fill a 4x4x2 block: bit
//! `i*16 + j*4 + k` lands on cell `(1 + j, 1 + k, 3 + i)`.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::automaton::{create_grid, import_region, Region};
use crate::error::{AddressError, ConfigError};
use crate::state::Grid;

/// Side length of the grid produced by `seed`.
pub const SEED_GRID_SIZE: i16 = 8;

/// Lowest corner of the seed block, as (x, y, z).
pub const SEED_ORIGIN: [i16; 3] = [1, 1, 3];

/// Extent of the seed block, as (x, y, z).
pub const SEED_EXTENT: [i16; 3] = [4, 4, 2];

/// Smallest grid that can hold the seed block.
pub const SEED_MIN_SIZE: i16 = 5;

/// Four address octets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; 4]);

impl Address {
    pub fn octets(&self) -> [u8; 4] {
        self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split('.').collect();
        if fields.len() != 4 {
            return Err(AddressError::OctetCount {
                found: fields.len(),
            });
        }

        let mut octets = [0u8; 4];
        for (slot, field) in octets.iter_mut().zip(&fields) {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AddressError::NotNumeric {
                    octet: field.to_string(),
                });
            }
            // All digits, so the only possible failure is overflow
            *slot = field.parse().map_err(|_| AddressError::OutOfRange {
                octet: field.to_string(),
            })?;
        }

        Ok(Address(octets))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address(ip.octets())
    }
}

impl From<Address> for Ipv4Addr {
    fn from(address: Address) -> Self {
        Ipv4Addr::from(address.0)
    }
}

/// The 32 address bits as 0/1 bytes, most significant first.
pub fn address_bits(address: &Address) -> [u8; 32] {
    let word = u32::from_be_bytes(address.0);
    let mut bits = [0u8; 32];
    for (n, bit) in bits.iter_mut().enumerate() {
        *bit = ((word >> (31 - n)) & 1) as u8;
    }
    bits
}

/// Seed block contents as a z,y,x buffer for `import_region`.
fn seed_block(address: &Address) -> [u8; 32] {
    let bits = address_bits(address);
    let mut block = [0u8; 32];

    // Bit (i, j, k) goes to (x, y, z) = (1 + j, 1 + k, 3 + i)
    for i in 0..2 {
        for j in 0..4 {
            for k in 0..4 {
                let (x, y, z) = (j, k, i);
                block[z * 16 + y * 4 + x] = bits[i * 16 + j * 4 + k];
            }
        }
    }

    block
}

fn write_seed(grid: &mut Grid, address: &Address) {
    let max = [0, 1, 2].map(|axis| SEED_ORIGIN[axis] + SEED_EXTENT[axis]);
    import_region(grid, &seed_block(address), Region::new(SEED_ORIGIN, max));
}

/// Write the address into a fresh all-dead grid of the given size.
pub fn seed_grid(address: &Address, size: i16) -> Result<Grid, ConfigError> {
    if size <= 0 {
        return Err(ConfigError::InvalidSize(size));
    }
    if size < SEED_MIN_SIZE {
        return Err(ConfigError::GridTooSmall {
            size,
            min: SEED_MIN_SIZE,
        });
    }

    let mut grid = create_grid(size);
    write_seed(&mut grid, address);
    Ok(grid)
}

/// Write the address into a fresh 8x8x8 grid.
pub fn seed(address: &Address) -> Grid {
    let mut grid = create_grid(SEED_GRID_SIZE);
    write_seed(&mut grid, address);
    grid
}
