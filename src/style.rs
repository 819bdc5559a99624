//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
use thiserror::Error;

/// Default width of a scrollbar track, in pixels.
pub const DEFAULT_THICKNESS: i32 = 12;
/// Default minimum slider length, in pixels.
pub const DEFAULT_MIN_SLIDER_SIZE: i32 = 25;
/// Default line step used by keyboard scrolling, in pixels.
pub const DEFAULT_LINE_STEP: i32 = 16;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
/// Visual constants that drive scrollbar geometry.
pub struct ScrollStyle {
    /// Width of a vertical track (height of a horizontal one).
    pub thickness: i32,
    /// Lower bound for the slider length so it stays draggable.
    pub min_slider_size: i32,
    /// Distance scrolled by a single line step (arrow keys).
    pub line_step: i32,
}

impl Default for ScrollStyle {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            min_slider_size: DEFAULT_MIN_SLIDER_SIZE,
            line_step: DEFAULT_LINE_STEP,
        }
    }
}

impl ScrollStyle {
    /// Starts a builder seeded with the default style.
    pub fn builder() -> ScrollStyleBuilder { ScrollStyleBuilder::default() }

    /// Checks the style for values the geometry code cannot work with.
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.thickness < 0 {
            return Err(StyleError::NegativeThickness(self.thickness));
        }
        if self.min_slider_size < 1 {
            return Err(StyleError::MinSliderSize(self.min_slider_size));
        }
        if self.line_step < 1 {
            return Err(StyleError::LineStep(self.line_step));
        }
        Ok(())
    }
}

/// Reasons a [`ScrollStyle`] is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    /// The track thickness was below zero.
    #[error("scrollbar thickness must not be negative (got {0})")]
    NegativeThickness(i32),
    /// The minimum slider size would allow a zero-length slider.
    #[error("minimum slider size must be at least 1px (got {0})")]
    MinSliderSize(i32),
    /// The line step would make keyboard scrolling a no-op.
    #[error("line step must be at least 1px (got {0})")]
    LineStep(i32),
}

/// Builder for [`ScrollStyle`] that validates on [`build`](Self::build).
#[derive(Default)]
pub struct ScrollStyleBuilder {
    style: ScrollStyle,
}

impl ScrollStyleBuilder {
    /// Sets the track thickness.
    pub fn thickness(mut self, thickness: i32) -> Self {
        self.style.thickness = thickness;
        self
    }

    /// Sets the minimum slider length.
    pub fn min_slider_size(mut self, size: i32) -> Self {
        self.style.min_slider_size = size;
        self
    }

    /// Sets the keyboard line step.
    pub fn line_step(mut self, step: i32) -> Self {
        self.style.line_step = step;
        self
    }

    /// Validates and returns the style.
    pub fn build(self) -> Result<ScrollStyle, StyleError> {
        self.style.validate()?;
        Ok(self.style)
    }
}
