//! Headless slice cursor.
//!
//! Mirrors what an interactive viewer does with a volume: pick an axis, pick
//! an index along it, redraw. Each state change triggers exactly one redraw,
//! delivered to an observer callback. The volume is only ever read.

use std::ops::Range;

use image::GrayImage;

use crate::volume::{SliceAxis, Volume, VolumeError};

/// Cursor over a volume that notifies an observer on every redraw.
pub struct SliceCursor<'v, F>
where
    F: FnMut(SliceAxis, u32, &GrayImage),
{
    volume: &'v Volume,
    axis: SliceAxis,
    index: u32,
    on_redraw: F,
    redraws: usize,
}

impl<'v, F> SliceCursor<'v, F>
where
    F: FnMut(SliceAxis, u32, &GrayImage),
{
    /// Create a cursor on the first axial slice. No redraw happens until the
    /// first selection.
    pub fn new(volume: &'v Volume, on_redraw: F) -> Self {
        Self {
            volume,
            axis: SliceAxis::Axial,
            index: 0,
            on_redraw,
            redraws: 0,
        }
    }

    /// Current axis.
    pub fn axis(&self) -> SliceAxis {
        self.axis
    }

    /// Current index along the axis.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Valid indices for the current axis.
    pub fn index_range(&self) -> Range<u32> {
        0..self.volume.extent(self.axis)
    }

    /// Number of redraws delivered so far.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    /// Switch axis. Resets the index to zero and redraws.
    pub fn select_axis(&mut self, axis: SliceAxis) -> Result<(), VolumeError> {
        self.axis = axis;
        self.index = 0;
        self.redraw()
    }

    /// Move to `index` along the current axis and redraw.
    ///
    /// Out-of-range indices leave the cursor where it was.
    pub fn set_index(&mut self, index: u32) -> Result<(), VolumeError> {
        let extent = self.volume.extent(self.axis);
        if index >= extent {
            return Err(VolumeError::IndexOutOfRange {
                axis: self.axis,
                index,
                extent,
            });
        }
        self.index = index;
        self.redraw()
    }

    fn redraw(&mut self) -> Result<(), VolumeError> {
        let section = self.volume.section(self.axis, self.index)?;
        self.redraws += 1;
        (self.on_redraw)(self.axis, self.index, &section);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_volume() -> Volume {
        Volume::from_raw(4, 3, 2, (0..24).collect()).unwrap()
    }

    #[test]
    fn test_new_cursor_does_not_redraw() {
        let volume = small_volume();
        let cursor = SliceCursor::new(&volume, |_, _, _| panic!("unexpected redraw"));
        assert_eq!(cursor.axis(), SliceAxis::Axial);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.index_range(), 0..4);
        assert_eq!(cursor.redraws(), 0);
    }

    #[test]
    fn test_select_axis_resets_index_and_redraws_once() {
        let volume = small_volume();
        let mut seen = Vec::new();
        {
            let mut cursor = SliceCursor::new(&volume, |axis, index, img: &GrayImage| {
                seen.push((axis, index, img.dimensions()));
            });
            cursor.set_index(3).unwrap();
            cursor.select_axis(SliceAxis::Sagittal).unwrap();
            assert_eq!(cursor.index(), 0);
            assert_eq!(cursor.index_range(), 0..2);
            assert_eq!(cursor.redraws(), 2);
        }
        assert_eq!(
            seen,
            vec![
                (SliceAxis::Axial, 3, (2, 3)),
                (SliceAxis::Sagittal, 0, (3, 4)),
            ]
        );
    }

    #[test]
    fn test_out_of_range_index_keeps_position() {
        let volume = small_volume();
        let mut cursor = SliceCursor::new(&volume, |_, _, _| {});
        cursor.select_axis(SliceAxis::Coronal).unwrap();
        cursor.set_index(2).unwrap();

        let err = cursor.set_index(3).unwrap_err();
        assert!(matches!(err, VolumeError::IndexOutOfRange { extent: 3, .. }));
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.redraws(), 2);
    }
}
