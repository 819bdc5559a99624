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
//! Capability exposed by content hosted inside a scroll view.

use std::{
    cell::{RefCell, RefMut},
    rc::{Rc, Weak},
};

use crate::{ModifierKeys, Recti, ScrollAxis, Vec2i};

/// Wheel units reported for one notch of a standard mouse wheel.
pub const WHEEL_DELTA: i32 = 120;

/// Content that can be scrolled by a [`ScrollView`](crate::ScrollView) or a
/// standalone [`Scrollbar`](crate::Scrollbar).
///
/// Content sizes are logical and independent of the viewport. Offsets are only
/// read from the content when it reports [`can_scroll_content`](Self::can_scroll_content);
/// otherwise the view keeps them and moves the content instead.
pub trait Scrollable {
    /// Total logical width of the content.
    fn content_width(&self) -> i32;
    /// Total logical height of the content.
    fn content_height(&self) -> i32;

    /// `true` if the content clips and offsets itself.
    fn can_scroll_content(&self) -> bool { false }

    /// Horizontal offset of the visible window into the content.
    fn scroll_offset_x(&self) -> i32 { 0 }
    /// Vertical offset of the visible window into the content.
    fn scroll_offset_y(&self) -> i32 { 0 }
    /// Stores a new horizontal offset.
    fn set_scroll_offset_x(&mut self, _x: i32) {}
    /// Stores a new vertical offset.
    fn set_scroll_offset_y(&mut self, _y: i32) {}

    /// Maps wheel rotation to a pixel delta. Positive wheel rotation scrolls
    /// toward the leading edge.
    fn scroll_offset_for_wheel(&self, delta: i32) -> i32 { delta.saturating_mul(-3 * 16) / WHEEL_DELTA }

    /// Receives the rectangle the content occupies after a layout pass.
    fn update(&mut self, _rect: Recti) {}

    /// Receives wheel input the view did not consume.
    fn on_mouse_wheel(&mut self, _delta: i32, _pos: Vec2i, _modifiers: ModifierKeys) -> bool { false }

    /// Content extent along `axis`.
    fn content_extent(&self, axis: ScrollAxis) -> i32 {
        match axis {
            ScrollAxis::Vertical => self.content_height(),
            ScrollAxis::Horizontal => self.content_width(),
        }
    }

    /// Offset along `axis`.
    fn scroll_offset(&self, axis: ScrollAxis) -> i32 {
        match axis {
            ScrollAxis::Vertical => self.scroll_offset_y(),
            ScrollAxis::Horizontal => self.scroll_offset_x(),
        }
    }

    /// Stores an offset along `axis`.
    fn set_scroll_offset(&mut self, axis: ScrollAxis, value: i32) {
        match axis {
            ScrollAxis::Vertical => self.set_scroll_offset_y(value),
            ScrollAxis::Horizontal => self.set_scroll_offset_x(value),
        }
    }
}

/// Shared, interiorly mutable content handle.
pub type ScrollableRef = Rc<RefCell<dyn Scrollable>>;

/// How a view holds on to its content.
#[derive(Clone)]
pub enum ScrollItem {
    /// The view keeps the content alive.
    Owned(ScrollableRef),
    /// The embedder owns the content; the view checks liveness on every access.
    Borrowed(Weak<RefCell<dyn Scrollable>>),
}

impl ScrollItem {
    /// Binds content the view should keep alive.
    pub fn owned<S: Scrollable + 'static>(item: &Rc<RefCell<S>>) -> Self {
        let item: ScrollableRef = item.clone();
        Self::Owned(item)
    }

    /// Binds content owned elsewhere.
    pub fn borrowed<S: Scrollable + 'static>(item: &Rc<RefCell<S>>) -> Self {
        let item: ScrollableRef = item.clone();
        Self::Borrowed(Rc::downgrade(&item))
    }

    /// Returns a strong handle if the content is still alive.
    pub fn upgrade(&self) -> Option<ScrollableRef> {
        match self {
            Self::Owned(item) => Some(item.clone()),
            Self::Borrowed(weak) => weak.upgrade(),
        }
    }

    /// Returns `true` if the content is still alive.
    pub fn is_alive(&self) -> bool {
        match self {
            Self::Owned(_) => true,
            Self::Borrowed(weak) => weak.strong_count() > 0,
        }
    }
}

/// Borrows a content handle mutably, or `None` when it is already borrowed.
///
/// Re-entrant notifications from inside a content callback land here.
pub(crate) fn borrow_item(item: &ScrollableRef) -> Option<RefMut<'_, dyn Scrollable + 'static>> { item.try_borrow_mut().ok() }
