//! Output raster of packed `0x00RRGGBB` pixels.

use glint_math::color::{pack_rgb, unpack_rgb};
use glint_math::Color;
use thiserror::Error;

/// Bytes per packed pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Errors from building a frame buffer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrameBufferError {
    #[error("Pitch of {pitch} bytes is smaller than a {width}-pixel row")]
    PitchTooSmall { pitch: usize, width: u32 },

    #[error("Pitch of {0} bytes is not a multiple of the pixel size")]
    UnalignedPitch(usize),
}

pub type FrameBufferResult<T> = Result<T, FrameBufferError>;

/// A top-down, row-major pixel buffer.
///
/// Rows are `pitch` bytes apart, which may be more than `width * 4`. Each
/// pixel is the native-endian `u32` `red << 16 | green << 8 | blue`.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pitch: usize,
    memory: Vec<u8>,
}

impl FrameBuffer {
    /// Create a tightly packed buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        let pitch = width as usize * BYTES_PER_PIXEL;
        Self {
            width,
            height,
            pitch,
            memory: vec![0; pitch * height as usize],
        }
    }

    /// Create a buffer whose rows are `pitch` bytes apart.
    pub fn with_pitch(width: u32, height: u32, pitch: usize) -> FrameBufferResult<Self> {
        if pitch < width as usize * BYTES_PER_PIXEL {
            return Err(FrameBufferError::PitchTooSmall { pitch, width });
        }
        if pitch % BYTES_PER_PIXEL != 0 {
            return Err(FrameBufferError::UnalignedPitch(pitch));
        }

        Ok(Self {
            width,
            height,
            pitch,
            memory: vec![0; pitch * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes from the start of one row to the next.
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// Raw bytes, `height * pitch` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.memory
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.pitch + x as usize * BYTES_PER_PIXEL)
    }

    /// Write an already packed pixel. Out-of-range coordinates are ignored
    /// and return false.
    pub fn put_packed(&mut self, x: u32, y: u32, packed: u32) -> bool {
        let Some(offset) = self.offset(x, y) else {
            return false;
        };
        self.memory[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&packed.to_ne_bytes());
        true
    }

    /// Pack and write a color.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color) -> bool {
        self.put_packed(x, y, pack_rgb(color))
    }

    /// Read back the packed pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        let offset = self.offset(x, y)?;
        let mut bytes = [0u8; BYTES_PER_PIXEL];
        bytes.copy_from_slice(&self.memory[offset..offset + BYTES_PER_PIXEL]);
        Some(u32::from_ne_bytes(bytes))
    }

    /// Reset every pixel (and row padding) to black.
    pub fn clear(&mut self) {
        self.memory.fill(0);
    }

    /// Tightly packed RGBA8 copy with opaque alpha, for presentation.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for y in 0..self.height {
            for x in 0..self.width {
                let [r, g, b] = unpack_rgb(self.pixel(x, y).unwrap_or(0));
                bytes.extend_from_slice(&[r, g, b, 255]);
            }
        }
        bytes
    }
}
