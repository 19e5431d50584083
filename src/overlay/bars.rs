use std::collections::VecDeque;

/// One continuous hold, rendered as a rectangle that grows while the
/// key stays down and scrolls toward the top of the window afterwards.
///
/// `top_offset` is the segment's top edge relative to the owning
/// square's top edge; it starts at 0 and decreases as the segment
/// scrolls upward. The segment occupies `[top_offset, top_offset + length]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSegment {
    pub length: f32,
    pub top_offset: f32,
    pub growing: bool,
}

/// Ordered bar segments for a single tracked input, oldest first.
///
/// Segments are appended on a rising edge and removed only from the
/// head, once they scroll fully past `ceiling` (the visible top
/// boundary expressed in square-relative coordinates: 0 for the pure
/// engine, `-square_top_y` when driven by the app layout).
#[derive(Debug, Clone, Default)]
pub struct BarTrack {
    segments: VecDeque<BarSegment>,
    ceiling: f32,
}

impl BarTrack {
    pub fn new(ceiling: f32) -> Self {
        Self {
            segments: VecDeque::new(),
            ceiling,
        }
    }

    /// Begin a new segment at the square's top edge. Any segment still
    /// marked growing is closed first so at most one grows at a time.
    pub fn start(&mut self) {
        self.finish();
        self.segments.push_back(BarSegment {
            length: 0.0,
            top_offset: 0.0,
            growing: true,
        });
    }

    /// Stop growth of the newest segment (falling edge).
    pub fn finish(&mut self) {
        if let Some(last) = self.segments.back_mut() {
            last.growing = false;
        }
    }

    /// Advance one frame: grow the newest segment by `distance` if the
    /// input is held this frame, scroll every segment up by the same
    /// distance, then prune fully-hidden segments from the head.
    pub fn advance(&mut self, distance: f32, held: bool) {
        if held {
            if let Some(last) = self.segments.back_mut() {
                if last.growing {
                    last.length += distance;
                }
            }
        }

        for segment in &mut self.segments {
            segment.top_offset -= distance;
        }

        // Large time steps can push more than one segment past the
        // boundary in a single frame.
        while let Some(front) = self.segments.front() {
            if front.top_offset + front.length < self.ceiling {
                self.segments.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &BarSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[cfg(test)]
    fn newest(&self) -> Option<&BarSegment> {
        self.segments.back()
    }
}
