//! Staggered entrance of the title glyphs.
//!
//! Each glyph tweens from an offset pose to rest. Glyph `i` starts at
//! `delay + i * stagger` seconds after page ready and runs for `duration`.

use crate::config::TitleConfig;
use crate::ease::power4_out;

/// Transform and opacity of one glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPose {
    /// Vertical offset in pixels.
    pub y: f64,
    pub opacity: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl GlyphPose {
    pub const REST: GlyphPose = GlyphPose {
        y: 0.0,
        opacity: 1.0,
        rotation: 0.0,
    };

    pub fn lerp(self, to: GlyphPose, t: f64) -> GlyphPose {
        GlyphPose {
            y: self.y + (to.y - self.y) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            rotation: self.rotation + (to.rotation - self.rotation) * t,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleSchedule {
    pub glyphs: usize,
    pub delay: f64,
    pub stagger: f64,
    pub duration: f64,
    pub from: GlyphPose,
}

impl TitleSchedule {
    pub fn new(glyphs: usize, config: &TitleConfig) -> Self {
        Self {
            glyphs,
            delay: config.delay,
            stagger: config.stagger,
            duration: config.duration,
            from: GlyphPose {
                y: config.offset_y,
                opacity: 0.0,
                rotation: config.rotation,
            },
        }
    }

    pub fn start(&self, index: usize) -> f64 {
        self.delay + index as f64 * self.stagger
    }

    pub fn end(&self, index: usize) -> f64 {
        self.start(index) + self.duration
    }

    /// End of the last glyph; `delay` alone when there are no glyphs.
    pub fn finish(&self) -> f64 {
        match self.glyphs {
            0 => self.delay,
            n => self.end(n - 1),
        }
    }

    pub fn is_finished(&self, t: f64) -> bool {
        t >= self.finish()
    }

    /// Pose of glyph `index` at `t` seconds after page ready. Glyphs that
    /// have not started yet hold the `from` pose.
    pub fn pose(&self, index: usize, t: f64) -> GlyphPose {
        let local = if self.duration > 0.0 {
            (t - self.start(index)) / self.duration
        } else if t >= self.start(index) {
            1.0
        } else {
            0.0
        };
        self.from.lerp(GlyphPose::REST, power4_out(local))
    }
}
