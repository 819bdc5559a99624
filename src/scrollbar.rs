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
use crate::{CaptureGrant, Id, MouseCapture, Recti, ScrollAxis, ScrollStyle, Scrollable};

/// Returns the track rectangle sitting right after `body` along `axis`.
pub(crate) fn scrollbar_base(axis: ScrollAxis, body: Recti, scrollbar_size: i32) -> Recti {
    let mut base = body;
    match axis {
        ScrollAxis::Vertical => {
            base.x = body.x + body.width;
            base.width = scrollbar_size;
        }
        ScrollAxis::Horizontal => {
            base.y = body.y + body.height;
            base.height = scrollbar_size;
        }
    }
    base
}

pub(crate) fn scrollbar_max_scroll(content_len: i32, view_len: i32) -> i32 { (content_len - view_len).max(0) }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Region of a track under a pointer position.
pub enum ScrollbarPart {
    /// Outside the track.
    None,
    /// Track area before the slider (page up / page left).
    TrackBefore,
    /// The slider itself.
    Slider,
    /// Track area after the slider (page down / page right).
    TrackAfter,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Color roles a scrollbar asks its painter for.
pub enum ScrollColor {
    /// Track of a scrollbar with scrollable content.
    Base,
    /// Track of a scrollbar with nothing to scroll.
    Inert,
    /// Idle slider.
    Thumb,
    /// Slider under the pointer.
    ThumbHover,
    /// Slider being dragged.
    ThumbActive,
}

/// Paints scrollbar frames; implemented by render backends.
pub trait ScrollbarPainter {
    /// Fills `rect` with the color assigned to `color`.
    fn draw_frame(&mut self, rect: Recti, color: ScrollColor);
}

struct DragSession {
    anchor: i32,
    grant: CaptureGrant,
}

/// Slider geometry for a single scrollbar track.
///
/// The track length doubles as the viewport extent along the axis, so the
/// owner sizes the track to the visible extent of the content. The content is
/// never stored; every operation that reads or moves the offset receives it.
pub struct Scrollbar {
    id: Id,
    axis: ScrollAxis,
    track: Recti,
    min_slider_size: i32,
    overflow: i32,
    slider_size: i32,
    slider_offset: i32,
    scroll_step: f64,
    scrollable: bool,
    attached: bool,
    visible: bool,
    hovered: bool,
    capture: MouseCapture,
    drag: Option<DragSession>,
}

impl Scrollbar {
    /// Creates a detached, hidden scrollbar.
    pub fn new(id: Id, axis: ScrollAxis, style: &ScrollStyle, capture: MouseCapture) -> Self {
        Self {
            id,
            axis,
            track: Recti::default(),
            min_slider_size: style.min_slider_size.max(1),
            overflow: 0,
            slider_size: 0,
            slider_offset: 0,
            scroll_step: 1.0,
            scrollable: false,
            attached: false,
            visible: false,
            hovered: false,
            capture,
            drag: None,
        }
    }

    /// Identifier used as the capture owner.
    pub fn id(&self) -> Id { self.id }
    /// Orientation of the track.
    pub fn axis(&self) -> ScrollAxis { self.axis }
    /// Track rectangle in the owner's coordinates.
    pub fn track(&self) -> Recti { self.track }
    /// Track length along the axis.
    pub fn track_len(&self) -> i32 { self.axis.extent(self.track) }
    /// Length of the slider along the axis.
    pub fn slider_size(&self) -> i32 { self.slider_size }
    /// Slider position from the start of the track.
    pub fn slider_offset(&self) -> i32 { self.slider_offset }
    /// Content pixels per slider pixel.
    pub fn scroll_step(&self) -> f64 { self.scroll_step }
    /// Largest content offset along the axis.
    pub fn overflow(&self) -> i32 { self.overflow }
    /// `true` when the content overflows the track and the bar is interactive.
    pub fn has_scrollable_content(&self) -> bool { self.scrollable }
    /// `true` while the owner shows the bar.
    pub fn is_visible(&self) -> bool { self.visible }
    /// `true` while content is attached.
    pub fn is_attached(&self) -> bool { self.attached }
    /// `true` while a slider drag holds pointer capture.
    pub fn is_dragging(&self) -> bool { self.drag.is_some() }
    /// `true` while the pointer rests on the slider.
    pub fn is_hovered(&self) -> bool { self.hovered }

    /// Slider rectangle in the owner's coordinates.
    pub fn slider_rect(&self) -> Recti {
        let mut thumb = self.track;
        match self.axis {
            ScrollAxis::Vertical => {
                thumb.y += self.slider_offset;
                thumb.height = self.slider_size;
            }
            ScrollAxis::Horizontal => {
                thumb.x += self.slider_offset;
                thumb.width = self.slider_size;
            }
        }
        thumb
    }

    /// Moves the track. Call [`on_scroll_content_changed`](Self::on_scroll_content_changed) afterwards.
    pub fn set_track(&mut self, track: Recti) { self.track = track; }

    /// Shows or hides the bar. Hiding ends any drag in progress.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.hovered = false;
            self.end_drag();
        }
    }

    /// Changes the minimum slider length. Takes effect on the next geometry pass.
    pub fn set_min_slider_size(&mut self, size: i32) { self.min_slider_size = size.max(1); }

    /// Attaches (or detaches with `None`) the content and recomputes geometry.
    pub fn set_scroll_item(&mut self, content: Option<&mut dyn Scrollable>) {
        match content {
            Some(content) => {
                self.attached = true;
                self.on_scroll_content_changed(content);
            }
            None => {
                self.attached = false;
                self.make_inert();
            }
        }
    }

    /// Recomputes slider geometry after the content extent or the track changed.
    ///
    /// Also pulls the content offset back into `[0, overflow]`, so content that
    /// shrank never leaves a gap at the trailing edge.
    pub fn on_scroll_content_changed(&mut self, content: &mut dyn Scrollable) {
        if !self.attached {
            self.make_inert();
            return;
        }

        let track_len = self.track_len();
        let content_len = content.content_extent(self.axis).max(0);
        let overflow = scrollbar_max_scroll(content_len, track_len);

        let offset = content.scroll_offset(self.axis);
        let corrected = offset.clamp(0, overflow);
        if corrected != offset {
            log::trace!("{:?} scrollbar: offset {} corrected to {}", self.axis, offset, corrected);
            content.set_scroll_offset(self.axis, corrected);
        }

        if track_len <= 0 || overflow <= 0 {
            self.make_inert();
            self.slider_size = track_len.max(0);
            return;
        }

        let ratio = track_len as f64 * track_len as f64 / content_len as f64;
        let min_size = self.min_slider_size.min(track_len);
        self.slider_size = (ratio.round() as i32).clamp(min_size, track_len);
        self.overflow = overflow;
        self.scroll_step = (overflow as f64 / self.travel().max(1) as f64).max(1.0);
        self.scrollable = true;
        self.slider_offset = self.slider_offset_for(content.scroll_offset(self.axis));

        log::trace!(
            "{:?} scrollbar: track {} content {} slider {}@{} step {:.3}",
            self.axis,
            track_len,
            content_len,
            self.slider_size,
            self.slider_offset,
            self.scroll_step
        );
    }

    /// Scrolls by `delta` content pixels. Returns `true` if the offset moved.
    pub fn scroll_content(&mut self, content: &mut dyn Scrollable, delta: i32) -> bool {
        if !self.scrollable {
            return false;
        }
        let current = content.scroll_offset(self.axis);
        self.scroll_to(content, current.saturating_add(delta))
    }

    /// Scrolls to an absolute content offset, clamped to the valid range.
    pub fn scroll_to(&mut self, content: &mut dyn Scrollable, offset: i32) -> bool {
        if !self.scrollable {
            return false;
        }
        let current = content.scroll_offset(self.axis);
        let target = offset.clamp(0, self.overflow);
        if target == current {
            return false;
        }
        content.set_scroll_offset(self.axis, target);
        self.slider_offset = self.slider_offset_for(content.scroll_offset(self.axis));
        true
    }

    /// Classifies a track-relative pixel along the axis.
    pub fn hit_test(&self, pixel: i32) -> ScrollbarPart {
        if pixel < 0 || pixel >= self.track_len() {
            ScrollbarPart::None
        } else if pixel < self.slider_offset {
            ScrollbarPart::TrackBefore
        } else if pixel < self.slider_offset + self.slider_size {
            ScrollbarPart::Slider
        } else {
            ScrollbarPart::TrackAfter
        }
    }

    /// Handles a press at a track-relative pixel. Returns `true` if consumed.
    pub fn on_mouse_down(&mut self, content: &mut dyn Scrollable, pixel: i32) -> bool {
        if !self.visible || !self.scrollable {
            return false;
        }
        let page = self.track_len();
        match self.hit_test(pixel) {
            ScrollbarPart::None => false,
            ScrollbarPart::TrackBefore => {
                self.scroll_content(content, -page);
                true
            }
            ScrollbarPart::TrackAfter => {
                self.scroll_content(content, page);
                true
            }
            ScrollbarPart::Slider => {
                match self.capture.acquire(self.id) {
                    Some(grant) => {
                        log::trace!("{:?} scrollbar: drag start at {}", self.axis, pixel);
                        self.drag = Some(DragSession { anchor: pixel, grant });
                    }
                    None => log::debug!("{:?} scrollbar: capture held by {:?}", self.axis, self.capture.owner()),
                }
                true
            }
        }
    }

    /// Handles pointer movement at a track-relative pixel.
    ///
    /// While dragging, moves the slider by the distance travelled since the
    /// last event and returns `true` if the content offset changed.
    pub fn on_mouse_move(&mut self, content: &mut dyn Scrollable, pixel: i32) -> bool {
        let Some(session) = self.drag.as_mut() else {
            self.hovered = self.visible && self.scrollable && self.hit_test(pixel) == ScrollbarPart::Slider;
            return false;
        };
        if !session.grant.is_held() {
            self.on_capture_lost(content);
            return false;
        }

        let delta = pixel.saturating_sub(session.anchor);
        session.anchor = pixel;
        if delta == 0 {
            return false;
        }
        let travel = self.travel();
        if travel == 0 {
            return false;
        }

        let slider = self.slider_offset.saturating_add(delta).clamp(0, travel);
        self.slider_offset = slider;
        let target = self.offset_for_slider(slider);
        if target == content.scroll_offset(self.axis) {
            return false;
        }
        content.set_scroll_offset(self.axis, target);
        true
    }

    /// Ends a drag. Geometry is re-derived from the final content offset.
    pub fn on_mouse_up(&mut self, content: &mut dyn Scrollable) {
        if self.end_drag() {
            self.on_scroll_content_changed(content);
        }
    }

    /// Capture was taken away; the drag ends unconditionally.
    pub fn on_capture_lost(&mut self, content: &mut dyn Scrollable) {
        self.hovered = false;
        if self.end_drag() {
            log::debug!("{:?} scrollbar: capture lost during drag", self.axis);
            self.on_scroll_content_changed(content);
        }
    }

    /// Ends a drag without touching the content, for when it cannot be reached.
    ///
    /// Geometry stays as it is until the next content change.
    pub fn cancel_drag(&mut self) {
        self.hovered = false;
        if self.end_drag() {
            log::debug!("{:?} scrollbar: drag cancelled", self.axis);
        }
    }

    /// Clears the hover flag when the pointer leaves the track.
    pub fn clear_hover(&mut self) { self.hovered = false; }

    /// Paints the track and, when scrollable, the slider.
    pub fn draw(&self, painter: &mut impl ScrollbarPainter) {
        if !self.visible {
            return;
        }
        if !self.scrollable {
            painter.draw_frame(self.track, ScrollColor::Inert);
            return;
        }
        painter.draw_frame(self.track, ScrollColor::Base);
        let color = if self.drag.is_some() {
            ScrollColor::ThumbActive
        } else if self.hovered {
            ScrollColor::ThumbHover
        } else {
            ScrollColor::Thumb
        };
        painter.draw_frame(self.slider_rect(), color);
    }

    fn travel(&self) -> i32 { (self.track_len() - self.slider_size).max(0) }

    fn slider_offset_for(&self, offset: i32) -> i32 { ((offset as f64 / self.scroll_step).round() as i32).clamp(0, self.travel()) }

    fn offset_for_slider(&self, slider: i32) -> i32 {
        let travel = self.travel();
        if slider <= 0 {
            0
        } else if slider >= travel {
            self.overflow
        } else {
            ((slider as f64 * self.scroll_step).round() as i32).clamp(0, self.overflow)
        }
    }

    fn end_drag(&mut self) -> bool {
        match self.drag.take() {
            Some(session) => {
                log::trace!("{:?} scrollbar: drag end at {}", self.axis, session.anchor);
                true
            }
            None => false,
        }
    }

    fn make_inert(&mut self) {
        self.scrollable = false;
        self.overflow = 0;
        self.slider_size = 0;
        self.slider_offset = 0;
        self.scroll_step = 1.0;
        self.hovered = false;
        self.end_drag();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vec2i, rect};

    struct Page {
        size: Vec2i,
        offset: Vec2i,
    }

    impl Page {
        fn tall(height: i32) -> Self {
            Self {
                size: Vec2i::new(100, height),
                offset: Vec2i::new(0, 0),
            }
        }
    }

    impl Scrollable for Page {
        fn content_width(&self) -> i32 { self.size.x }
        fn content_height(&self) -> i32 { self.size.y }
        fn can_scroll_content(&self) -> bool { true }
        fn scroll_offset_x(&self) -> i32 { self.offset.x }
        fn scroll_offset_y(&self) -> i32 { self.offset.y }
        fn set_scroll_offset_x(&mut self, x: i32) { self.offset.x = x; }
        fn set_scroll_offset_y(&mut self, y: i32) { self.offset.y = y; }
    }

    #[derive(Default)]
    struct Frames(Vec<(i32, i32, i32, i32, ScrollColor)>);

    impl ScrollbarPainter for Frames {
        fn draw_frame(&mut self, rect: Recti, color: ScrollColor) { self.0.push((rect.x, rect.y, rect.width, rect.height, color)); }
    }

    fn vertical_bar(track_len: i32) -> Scrollbar {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut bar = Scrollbar::new(Id::from_str("!scrollbary"), ScrollAxis::Vertical, &ScrollStyle::default(), MouseCapture::new());
        bar.set_track(rect(88, 0, 12, track_len));
        bar.set_visible(true);
        bar
    }

    fn attached(track_len: i32, page: &mut Page) -> Scrollbar {
        let mut bar = vertical_bar(track_len);
        bar.set_scroll_item(Some(page));
        bar
    }

    fn assert_invariants(bar: &Scrollbar, page: &Page) {
        let offset = page.offset.y;
        assert!(offset >= 0 && offset <= bar.overflow(), "offset {} outside [0, {}]", offset, bar.overflow());
        if bar.has_scrollable_content() {
            assert!(bar.slider_offset() >= 0);
            assert!(bar.slider_offset() + bar.slider_size() <= bar.track_len());
            assert!(bar.slider_size() >= 25 && bar.slider_size() <= bar.track_len());
        }
    }

    #[test]
    fn proportional_slider() {
        let mut page = Page::tall(1000);
        let bar = attached(400, &mut page);
        assert!(bar.has_scrollable_content());
        assert_eq!(bar.overflow(), 600);
        assert_eq!(bar.slider_size(), 160);
        assert_eq!(bar.scroll_step(), 2.5);
        assert_eq!(bar.slider_offset(), 0);
    }

    #[test]
    fn scroll_content_moves_slider() {
        let mut page = Page::tall(1000);
        let mut bar = attached(400, &mut page);
        assert!(bar.scroll_content(&mut page, 50));
        assert_eq!(page.offset.y, 50);
        assert_eq!(bar.slider_offset(), 20);
    }

    #[test]
    fn scroll_content_clamps_at_both_ends() {
        let mut page = Page::tall(1000);
        let mut bar = attached(400, &mut page);
        bar.scroll_content(&mut page, 10_000);
        assert_eq!(page.offset.y, 600);
        assert_eq!(bar.slider_offset(), 240);
        bar.scroll_content(&mut page, i32::MIN);
        assert_eq!(page.offset.y, 0);
        assert!(!bar.scroll_content(&mut page, -1));
    }

    #[test]
    fn exact_fit_is_not_scrollable() {
        let mut page = Page::tall(400);
        page.offset.y = 30;
        let bar = attached(400, &mut page);
        assert!(!bar.has_scrollable_content());
        assert_eq!(page.offset.y, 0);
    }

    #[test]
    fn drag_to_start_yields_zero() {
        let mut page = Page::tall(1000);
        let mut bar = attached(400, &mut page);
        bar.scroll_content(&mut page, 50);
        assert_eq!(bar.slider_offset(), 20);

        assert!(bar.on_mouse_down(&mut page, 25));
        assert!(bar.is_dragging());
        assert!(bar.on_mouse_move(&mut page, 5));
        assert_eq!(bar.slider_offset(), 0);
        assert_eq!(page.offset.y, 0);
        bar.on_mouse_up(&mut page);
        assert!(!bar.is_dragging());
        assert_eq!(bar.slider_offset(), 0);
    }

    #[test]
    fn drag_to_end_yields_overflow() {
        let mut page = Page::tall(1003);
        let mut bar = attached(400, &mut page);
        bar.on_mouse_down(&mut page, 10);
        bar.on_mouse_move(&mut page, 10 + bar.track_len());
        assert_eq!(bar.slider_offset(), bar.track_len() - bar.slider_size());
        assert_eq!(page.offset.y, bar.overflow());
        assert_eq!(page.offset.y, 603);
    }

    #[test]
    fn drag_is_incremental() {
        let mut page = Page::tall(1000);
        let mut bar = attached(400, &mut page);
        bar.on_mouse_down(&mut page, 100);
        for pixel in [101, 102, 103, 104] {
            bar.on_mouse_move(&mut page, pixel);
        }
        assert_eq!(bar.slider_offset(), 4);
        assert_eq!(page.offset.y, 10);
        assert!(!bar.on_mouse_move(&mut page, 104));
        assert_invariants(&bar, &page);
    }

    #[test]
    fn clicks_on_track_page() {
        let mut page = Page::tall(1000);
        let mut bar = attached(400, &mut page);
        assert!(bar.on_mouse_down(&mut page, 300));
        assert_eq!(page.offset.y, 400);
        assert!(!bar.is_dragging());
        assert!(bar.on_mouse_down(&mut page, 399));
        assert_eq!(page.offset.y, 600);
        assert!(bar.on_mouse_down(&mut page, 0));
        assert_eq!(page.offset.y, 200);
        assert!(!bar.on_mouse_down(&mut page, 400));
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let mut page = Page::tall(1000);
        let mut bar = attached(400, &mut page);
        bar.scroll_content(&mut page, 600);

        page.size.y = 700;
        bar.on_scroll_content_changed(&mut page);
        assert_eq!(page.offset.y, 300);
        assert_invariants(&bar, &page);

        page.size.y = 300;
        bar.on_scroll_content_changed(&mut page);
        assert_eq!(page.offset.y, 0);
        assert!(!bar.has_scrollable_content());
    }

    #[test]
    fn geometry_pass_is_idempotent() {
        let mut page = Page::tall(2345);
        let mut bar = attached(321, &mut page);
        bar.scroll_content(&mut page, 777);
        bar.on_scroll_content_changed(&mut page);
        let first = (bar.slider_size(), bar.slider_offset(), bar.scroll_step(), page.offset.y);
        bar.on_scroll_content_changed(&mut page);
        let second = (bar.slider_size(), bar.slider_offset(), bar.scroll_step(), page.offset.y);
        assert_eq!(first, second);
    }

    #[test]
    fn offset_survives_slider_round_trip() {
        let mut page = Page::tall(5000);
        let mut bar = attached(300, &mut page);
        let tolerance = bar.scroll_step().ceil() as i32;
        for offset in [0, 1, 17, 333, 2500, 4699, 4700] {
            bar.scroll_to(&mut page, offset);
            let slider = bar.slider_offset();
            let back = bar.offset_for_slider(slider);
            assert!((back - page.offset.y).abs() <= tolerance, "{} -> {} -> {}", offset, slider, back);
        }
    }

    #[test]
    fn minimum_slider_size_applies() {
        let mut page = Page::tall(100_000);
        let bar = attached(400, &mut page);
        assert_eq!(bar.slider_size(), 25);
        assert!(bar.scroll_step() > 1.0);
        assert_eq!(bar.scroll_step(), (100_000.0 - 400.0) / 375.0);
    }

    #[test]
    fn tiny_track_is_covered_by_slider() {
        let mut page = Page::tall(1000);
        let mut bar = attached(10, &mut page);
        assert_eq!(bar.slider_size(), 10);
        assert_eq!(bar.scroll_step(), 990.0);
        bar.on_mouse_down(&mut page, 5);
        assert!(!bar.on_mouse_move(&mut page, 9));
        assert_eq!(page.offset.y, 0);
        bar.on_mouse_up(&mut page);

        assert!(bar.scroll_content(&mut page, 990));
        assert_eq!(page.offset.y, 990);
        assert!(bar.on_mouse_down(&mut page, 2));
        assert!(bar.is_dragging());
        assert!(!bar.on_mouse_move(&mut page, 8));
        assert!(!bar.on_mouse_move(&mut page, 0));
        assert_eq!(page.offset.y, 990);
    }

    #[test]
    fn cancelled_drag_keeps_geometry() {
        let mut page = Page::tall(1000);
        let mut bar = attached(400, &mut page);
        assert!(bar.on_mouse_down(&mut page, 10));
        assert!(bar.is_dragging());
        bar.cancel_drag();
        assert!(!bar.is_dragging());
        assert!(bar.is_attached());
        assert!(bar.has_scrollable_content());
        assert_eq!(bar.slider_size(), 160);
        assert!(bar.scroll_content(&mut page, 50));
    }

    #[test]
    fn empty_track_is_inert() {
        let mut page = Page::tall(1000);
        page.offset.y = 40;
        let mut bar = attached(0, &mut page);
        assert!(!bar.has_scrollable_content());
        assert!(!bar.scroll_content(&mut page, 10));
        assert!(!bar.on_mouse_down(&mut page, 0));
        assert_eq!(page.offset.y, 40);
    }

    #[test]
    fn detached_bar_ignores_everything() {
        let mut page = Page::tall(1000);
        let mut bar = vertical_bar(400);
        bar.on_scroll_content_changed(&mut page);
        assert!(!bar.has_scrollable_content());
        assert!(!bar.scroll_content(&mut page, 10));
        assert!(!bar.on_mouse_down(&mut page, 10));
        assert_eq!(page.offset.y, 0);

        let mut bar = attached(400, &mut page);
        assert!(bar.has_scrollable_content());
        bar.set_scroll_item(None);
        assert!(!bar.has_scrollable_content());
        assert!(!bar.is_attached());
    }

    #[test]
    fn capture_loss_ends_drag() {
        let mut page = Page::tall(1000);
        let mut bar = attached(400, &mut page);
        bar.on_mouse_down(&mut page, 10);
        bar.on_mouse_move(&mut page, 30);
        bar.on_capture_lost(&mut page);
        assert!(!bar.is_dragging());
        assert!(!bar.on_mouse_move(&mut page, 200));
        assert_eq!(page.offset.y, 50);
        assert_eq!(bar.slider_offset(), 20);
    }

    #[test]
    fn revoked_capture_is_noticed_on_move() {
        let mut page = Page::tall(1000);
        let capture = MouseCapture::new();
        let mut bar = Scrollbar::new(Id::from_str("bar"), ScrollAxis::Vertical, &ScrollStyle::default(), capture.clone());
        bar.set_track(rect(0, 0, 12, 400));
        bar.set_visible(true);
        bar.set_scroll_item(Some(&mut page));

        bar.on_mouse_down(&mut page, 10);
        assert_eq!(capture.owner(), Some(bar.id()));
        capture.release();
        assert!(!bar.on_mouse_move(&mut page, 100));
        assert!(!bar.is_dragging());
        assert_eq!(page.offset.y, 0);
    }

    #[test]
    fn only_one_bar_drags_at_a_time() {
        let mut page = Page::tall(1000);
        let capture = MouseCapture::new();
        let style = ScrollStyle::default();
        let mut first = Scrollbar::new(Id::from_str("first"), ScrollAxis::Vertical, &style, capture.clone());
        let mut second = Scrollbar::new(Id::from_str("second"), ScrollAxis::Vertical, &style, capture.clone());
        for bar in [&mut first, &mut second] {
            bar.set_track(rect(0, 0, 12, 400));
            bar.set_visible(true);
            bar.set_scroll_item(Some(&mut page));
        }

        first.on_mouse_down(&mut page, 10);
        second.on_mouse_down(&mut page, 10);
        assert!(first.is_dragging());
        assert!(!second.is_dragging());

        first.on_mouse_up(&mut page);
        assert!(!capture.is_captured());
        second.on_mouse_down(&mut page, 10);
        assert!(second.is_dragging());
    }

    #[test]
    fn hiding_releases_capture() {
        let mut page = Page::tall(1000);
        let capture = MouseCapture::new();
        let mut bar = Scrollbar::new(Id::from_str("bar"), ScrollAxis::Vertical, &ScrollStyle::default(), capture.clone());
        bar.set_track(rect(0, 0, 12, 400));
        bar.set_visible(true);
        bar.set_scroll_item(Some(&mut page));
        bar.on_mouse_down(&mut page, 10);
        bar.set_visible(false);
        assert!(!bar.is_dragging());
        assert!(!capture.is_captured());
    }

    #[test]
    fn invariants_hold_while_content_changes() {
        let mut page = Page::tall(1000);
        let mut bar = attached(400, &mut page);
        for (height, delta) in [(1000, 250), (450, 90), (5000, 4000), (401, 7), (399, 3), (12_000, -50)] {
            page.size.y = height;
            bar.on_scroll_content_changed(&mut page);
            bar.scroll_content(&mut page, delta);
            assert_invariants(&bar, &page);
        }
    }

    #[test]
    fn horizontal_geometry() {
        let mut page = Page {
            size: Vec2i::new(600, 50),
            offset: Vec2i::new(0, 0),
        };
        let mut bar = Scrollbar::new(Id::from_str("!scrollbarx"), ScrollAxis::Horizontal, &ScrollStyle::default(), MouseCapture::new());
        bar.set_track(rect(10, 90, 300, 12));
        bar.set_visible(true);
        bar.set_scroll_item(Some(&mut page));
        assert_eq!(bar.slider_size(), 150);
        bar.scroll_content(&mut page, 150);
        let thumb = bar.slider_rect();
        assert_eq!((thumb.x, thumb.y, thumb.width, thumb.height), (85, 90, 150, 12));
        assert_eq!((page.offset.x, page.offset.y), (150, 0));
    }

    #[test]
    fn draw_uses_interaction_colors() {
        let mut page = Page::tall(1000);
        let mut bar = attached(400, &mut page);
        let mut frames = Frames::default();
        bar.draw(&mut frames);
        assert_eq!(frames.0, vec![(88, 0, 12, 400, ScrollColor::Base), (88, 0, 12, 160, ScrollColor::Thumb)]);

        bar.on_mouse_move(&mut page, 50);
        assert!(bar.is_hovered());
        bar.on_mouse_down(&mut page, 50);
        let mut frames = Frames::default();
        bar.draw(&mut frames);
        assert_eq!(frames.0[1].4, ScrollColor::ThumbActive);

        page.size.y = 10;
        bar.on_scroll_content_changed(&mut page);
        let mut frames = Frames::default();
        bar.draw(&mut frames);
        assert_eq!(frames.0, vec![(88, 0, 12, 400, ScrollColor::Inert)]);

        bar.set_visible(false);
        let mut frames = Frames::default();
        bar.draw(&mut frames);
        assert!(frames.0.is_empty());
    }
}
