/// Uncompressed 24-bit bitmap encoding
use nom::{
    bytes::complete::tag,
    number::complete::{le_i32, le_u16, le_u32},
    IResult,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::raster::{Canvas, BYTES_PER_PIXEL};

const MAGIC: &[u8] = b"BM";

/// Size of the file header
pub const FILE_HEADER_SIZE: u32 = 14;

/// Size of the info header
pub const INFO_HEADER_SIZE: u32 = 40;

/// Offset of the first pixel byte
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// Vertical order in which buffer rows are written to the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Buffer rows verbatim, top row first. Viewers that follow the
    /// bottom-up convention show the image upside down.
    #[default]
    TopDown,
    /// Last buffer row first, as the format's positive height expects
    BottomUp,
}

/// The fields of a 24-bit bitmap header that matter to this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub data_offset: u32,
    pub width: i32,
    pub height: i32,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
}

impl BmpHeader {
    /// Header for a `width`x`height` image with 3 bytes per pixel and no row
    /// padding
    pub fn for_image(width: u32, height: u32) -> Result<Self> {
        let invalid = || Error::InvalidDimensions { width, height };

        let image_size = u64::from(width) * u64::from(height) * BYTES_PER_PIXEL as u64;
        let file_size = image_size + u64::from(PIXEL_DATA_OFFSET);

        Ok(Self {
            file_size: u32::try_from(file_size).map_err(|_| invalid())?,
            data_offset: PIXEL_DATA_OFFSET,
            width: i32::try_from(width).map_err(|_| invalid())?,
            height: i32::try_from(height).map_err(|_| invalid())?,
            bits_per_pixel: 24,
            compression: 0,
            image_size: u32::try_from(image_size).map_err(|_| invalid())?,
        })
    }

    /// Serialize both headers field by field, little-endian, no padding
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut bytes = Vec::with_capacity(PIXEL_DATA_OFFSET as usize);

        // File header
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&self.file_size.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes()); // reserved
        bytes.extend_from_slice(&self.data_offset.to_le_bytes());

        // Info header
        bytes.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
        bytes.extend_from_slice(&self.width.to_le_bytes());
        bytes.extend_from_slice(&self.height.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // planes
        bytes.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        bytes.extend_from_slice(&self.compression.to_le_bytes());
        bytes.extend_from_slice(&self.image_size.to_le_bytes());
        bytes.extend_from_slice(&0i32.to_le_bytes()); // horizontal resolution
        bytes.extend_from_slice(&0i32.to_le_bytes()); // vertical resolution
        bytes.extend_from_slice(&0u32.to_le_bytes()); // palette colors
        bytes.extend_from_slice(&0u32.to_le_bytes()); // important colors

        writer.write_all(&bytes)?;
        Ok(())
    }
}

/// Write headers followed by `pixels` (row-major, 3 bytes per pixel).
pub fn encode<W: Write>(
    writer: &mut W,
    pixels: &[u8],
    width: u32,
    height: u32,
    row_order: RowOrder,
) -> Result<()> {
    let header = BmpHeader::for_image(width, height)?;
    if pixels.len() as u64 != u64::from(header.image_size) {
        return Err(Error::InvalidDimensions { width, height });
    }

    header.write_to(writer)?;

    match row_order {
        RowOrder::TopDown => writer.write_all(pixels)?,
        RowOrder::BottomUp => {
            let stride = width as usize * BYTES_PER_PIXEL;
            if stride > 0 {
                for row in pixels.chunks_exact(stride).rev() {
                    writer.write_all(row)?;
                }
            }
        }
    }

    Ok(())
}

/// Encode a canvas into an in-memory bitmap file
pub fn encode_to_vec(canvas: &Canvas, row_order: RowOrder) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(PIXEL_DATA_OFFSET as usize + canvas.as_bytes().len());
    encode(
        &mut bytes,
        canvas.as_bytes(),
        canvas.width(),
        canvas.height(),
        row_order,
    )?;
    Ok(bytes)
}

/// Encode a canvas into the file at `path`, replacing it if present
pub fn save<P: AsRef<Path>>(path: P, canvas: &Canvas, row_order: RowOrder) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    encode(
        &mut writer,
        canvas.as_bytes(),
        canvas.width(),
        canvas.height(),
        row_order,
    )?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        bytes = PIXEL_DATA_OFFSET as usize + canvas.as_bytes().len(),
        "bitmap written"
    );
    Ok(())
}

/// Read back the headers of a 24-bit uncompressed bitmap
pub fn parse_header(data: &[u8]) -> Result<BmpHeader> {
    let header = match parse_header_impl(data) {
        Ok((_, header)) => header,
        Err(e) => return Err(Error::InvalidHeader(format!("{:?}", e))),
    };

    if header.bits_per_pixel != 24 {
        return Err(Error::InvalidHeader(format!(
            "expected 24 bits per pixel, found {}",
            header.bits_per_pixel
        )));
    }
    if header.compression != 0 {
        return Err(Error::InvalidHeader(format!(
            "unsupported compression method {}",
            header.compression
        )));
    }

    Ok(header)
}

fn parse_header_impl(input: &[u8]) -> IResult<&[u8], BmpHeader> {
    let (input, _) = tag(MAGIC)(input)?;
    let (input, file_size) = le_u32(input)?;
    let (input, _reserved) = le_u32(input)?;
    let (input, data_offset) = le_u32(input)?;

    let (input, _info_size) = le_u32(input)?;
    let (input, width) = le_i32(input)?;
    let (input, height) = le_i32(input)?;
    let (input, _planes) = le_u16(input)?;
    let (input, bits_per_pixel) = le_u16(input)?;
    let (input, compression) = le_u32(input)?;
    let (input, image_size) = le_u32(input)?;
    let (input, _x_resolution) = le_i32(input)?;
    let (input, _y_resolution) = le_i32(input)?;
    let (input, _colors_used) = le_u32(input)?;
    let (input, _colors_important) = le_u32(input)?;

    Ok((
        input,
        BmpHeader {
            file_size,
            data_offset,
            width,
            height,
            bits_per_pixel,
            compression,
            image_size,
        },
    ))
}
