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
//! Viewport with one scrollable child and up to two scrollbars.

use crate::scrollable::borrow_item;
use crate::scrollbar::scrollbar_base;
use crate::{
    Id, ModifierKeys, MouseButton, MouseCapture, Recti, ScrollAxis, ScrollHost, ScrollItem, ScrollKey, ScrollStyle, Scrollable, ScrollableRef, Scrollbar,
    ScrollbarPainter, ScrollbarPolicy, Vec2i, rect, vec2,
};

/// Decides which scrollbars to show for `content` inside a viewport of `size`.
///
/// Vertical is decided first against the full height. Horizontal is decided
/// against the width left over by the vertical bar, and if that shows the
/// horizontal bar, vertical gets exactly one more look with the reduced height.
/// Showing a bar never hides the other one, so two passes settle.
pub fn negotiate_scrollbars(policy_x: ScrollbarPolicy, policy_y: ScrollbarPolicy, content: Vec2i, size: Vec2i, thickness: i32) -> (bool, bool) {
    fn overflows(content: i32, available: i32) -> bool { content > 0 && content > available }
    fn decide(policy: ScrollbarPolicy, content: i32, available: i32) -> bool {
        match policy {
            ScrollbarPolicy::Always => true,
            ScrollbarPolicy::Never => false,
            ScrollbarPolicy::Auto => overflows(content, available),
        }
    }

    let mut show_y = decide(policy_y, content.y, size.y);
    let show_x = decide(policy_x, content.x, size.x - if show_y { thickness } else { 0 });
    if show_x && !show_y && policy_y == ScrollbarPolicy::Auto {
        show_y = overflows(content.y, size.y - thickness);
    }
    (show_x, show_y)
}

#[derive(Copy, Clone, Debug)]
/// Who stores the scroll offsets, resolved when content is bound.
pub enum OffsetOwner {
    /// The content scrolls itself; offsets are read from and written to it.
    Content,
    /// The view keeps the offsets and moves the content by their negation.
    View(Vec2i),
}

struct Bars {
    v: Scrollbar,
    h: Scrollbar,
}

impl Bars {
    fn get(&self, axis: ScrollAxis) -> &Scrollbar {
        match axis {
            ScrollAxis::Vertical => &self.v,
            ScrollAxis::Horizontal => &self.h,
        }
    }

    fn get_mut(&mut self, axis: ScrollAxis) -> &mut Scrollbar {
        match axis {
            ScrollAxis::Vertical => &mut self.v,
            ScrollAxis::Horizontal => &mut self.h,
        }
    }
}

/// The content as seen by the scrollbars: extents come from the child,
/// offsets from whoever the [`OffsetOwner`] says.
struct Target<'a> {
    item: &'a mut dyn Scrollable,
    owner: &'a mut OffsetOwner,
    host: &'a mut dyn ScrollHost,
    body: Recti,
    child_size: Vec2i,
    live: bool,
}

impl Target<'_> {
    fn child_rect(&self) -> Recti {
        match *self.owner {
            OffsetOwner::Content => self.body,
            OffsetOwner::View(offset) => rect(self.body.x - offset.x, self.body.y - offset.y, self.child_size.x, self.child_size.y),
        }
    }

    fn offset_changed(&mut self) {
        if !self.live {
            return;
        }
        if let OffsetOwner::View(_) = self.owner {
            let child = self.child_rect();
            self.item.update(child);
            self.host.place_content(child);
        }
        self.host.invalidate(self.body);
    }
}

impl Scrollable for Target<'_> {
    fn content_width(&self) -> i32 { self.item.content_width() }
    fn content_height(&self) -> i32 { self.item.content_height() }
    fn can_scroll_content(&self) -> bool { self.item.can_scroll_content() }

    fn scroll_offset_x(&self) -> i32 {
        match *self.owner {
            OffsetOwner::Content => self.item.scroll_offset_x(),
            OffsetOwner::View(offset) => offset.x,
        }
    }

    fn scroll_offset_y(&self) -> i32 {
        match *self.owner {
            OffsetOwner::Content => self.item.scroll_offset_y(),
            OffsetOwner::View(offset) => offset.y,
        }
    }

    fn set_scroll_offset_x(&mut self, x: i32) {
        if self.scroll_offset_x() == x {
            return;
        }
        match self.owner {
            OffsetOwner::Content => self.item.set_scroll_offset_x(x),
            OffsetOwner::View(offset) => offset.x = x,
        }
        self.offset_changed();
    }

    fn set_scroll_offset_y(&mut self, y: i32) {
        if self.scroll_offset_y() == y {
            return;
        }
        match self.owner {
            OffsetOwner::Content => self.item.set_scroll_offset_y(y),
            OffsetOwner::View(offset) => offset.y = y,
        }
        self.offset_changed();
    }

    fn scroll_offset_for_wheel(&self, delta: i32) -> i32 { self.item.scroll_offset_for_wheel(delta) }
}

/// Coordinates one scrollable child with a vertical and a horizontal scrollbar.
///
/// The embedder calls [`update_scroll_view`](Self::update_scroll_view) whenever
/// the viewport moves or the child's content size changes, and relays pointer
/// and keyboard input. `H` receives placement notifications; the same type
/// serves window-hosted and item-hosted views.
pub struct ScrollView<H: ScrollHost = ()> {
    name: String,
    style: ScrollStyle,
    host: H,
    viewport: Recti,
    body: Recti,
    child_size: Vec2i,
    policy_x: ScrollbarPolicy,
    policy_y: ScrollbarPolicy,
    item: Option<ScrollItem>,
    owner: OffsetOwner,
    bars: Bars,
}

impl<H: ScrollHost> ScrollView<H> {
    /// Creates a view with its own capture slot.
    pub fn new(name: &str, style: ScrollStyle, host: H) -> Self { Self::with_capture(name, style, host, MouseCapture::new()) }

    /// Creates a view whose scrollbars share `capture` with other widgets of the window.
    pub fn with_capture(name: &str, style: ScrollStyle, host: H, capture: MouseCapture) -> Self {
        let v = Scrollbar::new(Id::from_str(&format!("{}!scrollbary", name)), ScrollAxis::Vertical, &style, capture.clone());
        let h = Scrollbar::new(Id::from_str(&format!("{}!scrollbarx", name)), ScrollAxis::Horizontal, &style, capture);
        Self {
            name: name.to_string(),
            style,
            host,
            viewport: Recti::default(),
            body: Recti::default(),
            child_size: Vec2i::default(),
            policy_x: ScrollbarPolicy::Auto,
            policy_y: ScrollbarPolicy::Auto,
            item: None,
            owner: OffsetOwner::View(Vec2i::default()),
            bars: Bars { v, h },
        }
    }

    /// Name the scrollbar ids are derived from.
    pub fn name(&self) -> &str { &self.name }
    /// Current style.
    pub fn style(&self) -> &ScrollStyle { &self.style }
    /// The host receiving placement notifications.
    pub fn host(&self) -> &H { &self.host }
    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H { &mut self.host }
    /// Outer rectangle of the view.
    pub fn viewport(&self) -> Recti { self.viewport }
    /// Viewport minus the room taken by visible scrollbars.
    pub fn content_rect(&self) -> Recti { self.body }
    /// Who owns the offsets of the bound content.
    pub fn offset_owner(&self) -> OffsetOwner { self.owner }
    /// The scrollbar of `axis`.
    pub fn scrollbar(&self, axis: ScrollAxis) -> &Scrollbar { self.bars.get(axis) }
    /// Visibility policy of `axis`.
    pub fn policy(&self, axis: ScrollAxis) -> ScrollbarPolicy {
        match axis {
            ScrollAxis::Vertical => self.policy_y,
            ScrollAxis::Horizontal => self.policy_x,
        }
    }

    /// `true` while live content is bound.
    pub fn has_scroll_item(&self) -> bool { self.item.as_ref().is_some_and(ScrollItem::is_alive) }

    /// Changes the visibility policy of `axis` and lays the view out again.
    pub fn set_policy(&mut self, axis: ScrollAxis, policy: ScrollbarPolicy) {
        match axis {
            ScrollAxis::Vertical => self.policy_y = policy,
            ScrollAxis::Horizontal => self.policy_x = policy,
        }
        self.layout();
    }

    /// Replaces the style and lays the view out again.
    pub fn set_style(&mut self, style: ScrollStyle) {
        self.bars.v.set_min_slider_size(style.min_slider_size);
        self.bars.h.set_min_slider_size(style.min_slider_size);
        self.style = style;
        self.layout();
    }

    /// Binds new content. Offsets start at 0 for view-owned content.
    pub fn set_scroll_item(&mut self, item: ScrollItem) {
        let Some(content) = item.upgrade() else {
            log::warn!("{}: binding dead scroll item, releasing instead", self.name);
            self.release_scroll_item();
            return;
        };
        self.owner = match content.try_borrow() {
            Ok(content) if content.can_scroll_content() => OffsetOwner::Content,
            _ => OffsetOwner::View(Vec2i::default()),
        };
        log::debug!("{}: bound scroll item, offsets owned by {:?}", self.name, self.owner);
        self.item = Some(item);
        self.layout();
    }

    /// Unbinds the content, hides both bars and resets offsets.
    pub fn release_scroll_item(&mut self) -> Option<ScrollItem> {
        let item = self.item.take();
        if item.is_some() {
            log::debug!("{}: released scroll item", self.name);
        }
        self.layout();
        item
    }

    /// Moves the view to `(x, y, width, height)` and lays it out.
    pub fn update_scroll_view(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.viewport = rect(x, y, width.max(0), height.max(0));
        self.layout();
    }

    /// Current horizontal offset.
    pub fn scroll_offset_x(&self) -> i32 { self.scroll_offset().x }
    /// Current vertical offset.
    pub fn scroll_offset_y(&self) -> i32 { self.scroll_offset().y }

    /// Current offsets of both axes; zero when nothing is bound.
    pub fn scroll_offset(&self) -> Vec2i {
        match self.owner {
            OffsetOwner::View(offset) => offset,
            OffsetOwner::Content => {
                let Some(item) = self.item.as_ref().and_then(ScrollItem::upgrade) else {
                    return Vec2i::default();
                };
                let offset = match item.try_borrow() {
                    Ok(content) => vec2(content.scroll_offset_x(), content.scroll_offset_y()),
                    Err(_) => Vec2i::default(),
                };
                offset
            }
        }
    }

    /// Sets the horizontal offset, clamped to the scrollable range.
    pub fn set_scroll_offset_x(&mut self, x: i32) -> bool { self.with_target(|bars, target| bars.h.scroll_to(target, x)).unwrap_or(false) }

    /// Sets the vertical offset, clamped to the scrollable range.
    pub fn set_scroll_offset_y(&mut self, y: i32) -> bool { self.with_target(|bars, target| bars.v.scroll_to(target, y)).unwrap_or(false) }

    /// Scrolls to absolute offsets. Returns `true` if either axis moved.
    pub fn scroll_to(&mut self, x: i32, y: i32) -> bool {
        self.with_target(|bars, target| {
            let moved_x = bars.h.scroll_to(target, x);
            let moved_y = bars.v.scroll_to(target, y);
            moved_x || moved_y
        })
        .unwrap_or(false)
    }

    /// Scrolls by a relative amount. Returns `true` if either axis moved.
    pub fn scroll_content(&mut self, dx: i32, dy: i32) -> bool {
        self.with_target(|bars, target| {
            let moved_x = bars.h.scroll_content(target, dx);
            let moved_y = bars.v.scroll_content(target, dy);
            moved_x || moved_y
        })
        .unwrap_or(false)
    }

    /// Scrolls as little as possible so `area` (content coordinates) is visible.
    ///
    /// When `area` is larger than the visible extent, its leading edge wins.
    pub fn ensure_visible(&mut self, area: Recti) -> bool {
        let offset = self.scroll_offset();
        let body = self.body;
        let target_for = |axis: ScrollAxis| {
            let current = axis.coord(offset);
            let view = axis.extent(body);
            let start = axis.start(area);
            let end = start + axis.extent(area);
            if start < current || end - start > view {
                start
            } else if end > current + view {
                end - view
            } else {
                current
            }
        };
        let (x, y) = (target_for(ScrollAxis::Horizontal), target_for(ScrollAxis::Vertical));
        self.scroll_to(x, y)
    }

    /// Applies a keyboard scrolling command. Returns `true` if the offset moved.
    pub fn on_key(&mut self, key: ScrollKey) -> bool {
        let line = self.style.line_step;
        self.with_target(|bars, target| {
            let page = bars.v.track_len();
            match key {
                ScrollKey::LineUp => bars.v.scroll_content(target, -line),
                ScrollKey::LineDown => bars.v.scroll_content(target, line),
                ScrollKey::LineLeft => bars.h.scroll_content(target, -line),
                ScrollKey::LineRight => bars.h.scroll_content(target, line),
                ScrollKey::PageUp => bars.v.scroll_content(target, -page),
                ScrollKey::PageDown => bars.v.scroll_content(target, page),
                ScrollKey::Home => bars.v.scroll_to(target, 0),
                ScrollKey::End => bars.v.scroll_to(target, i32::MAX),
            }
        })
        .unwrap_or(false)
    }

    /// Handles wheel rotation. Returns `true` if the view or the child consumed it.
    ///
    /// The child's wheel policy converts `delta` into pixels for the vertical
    /// bar (horizontal with Shift held). When that bar is hidden the event goes
    /// to the child untouched.
    pub fn on_mouse_wheel(&mut self, delta: i32, pos: Vec2i, modifiers: ModifierKeys) -> bool {
        let Some(item) = self.live_item() else {
            return false;
        };
        let axis = if modifiers.is_shift() { ScrollAxis::Horizontal } else { ScrollAxis::Vertical };
        if self.bars.get(axis).is_visible() {
            return self
                .with_target(|bars, target| {
                    let pixels = target.scroll_offset_for_wheel(delta);
                    bars.get_mut(axis).scroll_content(target, pixels);
                })
                .is_some();
        }
        match borrow_item(&item) {
            Some(mut content) => content.on_mouse_wheel(delta, pos, modifiers),
            None => false,
        }
    }

    /// Handles a button press. Returns `true` if a scrollbar consumed it.
    pub fn on_mouse_down(&mut self, pos: Vec2i, button: MouseButton) -> bool {
        if !button.is_left() {
            return false;
        }
        let Some(axis) = self.bar_at(pos) else {
            return false;
        };
        let pixel = self.track_pixel(axis, pos);
        self.with_target(|bars, target| bars.get_mut(axis).on_mouse_down(target, pixel)).unwrap_or(false)
    }

    /// Handles pointer movement. Returns `true` if a drag moved the content.
    pub fn on_mouse_move(&mut self, pos: Vec2i) -> bool {
        let hovered = self.bar_at(pos);
        let pixels = (self.track_pixel(ScrollAxis::Vertical, pos), self.track_pixel(ScrollAxis::Horizontal, pos));
        self.with_target(|bars, target| {
            let mut moved = false;
            for (axis, pixel) in [(ScrollAxis::Vertical, pixels.0), (ScrollAxis::Horizontal, pixels.1)] {
                let bar = bars.get_mut(axis);
                if bar.is_dragging() || hovered == Some(axis) {
                    moved |= bar.on_mouse_move(target, pixel);
                } else {
                    bar.clear_hover();
                }
            }
            moved
        })
        .unwrap_or(false)
    }

    /// Handles a button release, ending any slider drag.
    pub fn on_mouse_up(&mut self, _pos: Vec2i, button: MouseButton) {
        if !button.is_left() {
            return;
        }
        self.with_target(|bars, target| {
            bars.v.on_mouse_up(target);
            bars.h.on_mouse_up(target);
        });
    }

    /// Pointer capture went elsewhere; any drag ends.
    pub fn on_capture_lost(&mut self) {
        let handled = self.with_target(|bars, target| {
            bars.v.on_capture_lost(target);
            bars.h.on_capture_lost(target);
        });
        if handled.is_none() {
            self.bars.v.cancel_drag();
            self.bars.h.cancel_drag();
        }
    }

    /// Paints both scrollbars.
    pub fn draw(&self, painter: &mut impl ScrollbarPainter) {
        self.bars.v.draw(painter);
        self.bars.h.draw(painter);
    }

    fn bar_at(&self, pos: Vec2i) -> Option<ScrollAxis> {
        [ScrollAxis::Vertical, ScrollAxis::Horizontal]
            .into_iter()
            .find(|axis| self.bars.get(*axis).is_visible() && self.bars.get(*axis).track().contains(&pos))
    }

    fn track_pixel(&self, axis: ScrollAxis, pos: Vec2i) -> i32 { axis.coord(pos).saturating_sub(axis.start(self.bars.get(axis).track())) }

    fn live_item(&mut self) -> Option<ScrollableRef> {
        let item = self.item.as_ref()?.upgrade();
        if item.is_none() {
            log::warn!("{}: scroll item dropped while bound, detaching", self.name);
            self.item = None;
            self.layout_detached();
        }
        item
    }

    fn with_target<R>(&mut self, f: impl FnOnce(&mut Bars, &mut Target<'_>) -> R) -> Option<R> {
        let item = self.live_item()?;
        let Some(mut content) = borrow_item(&item) else {
            log::debug!("{}: scroll item busy, skipping re-entrant call", self.name);
            return None;
        };
        let mut target = Target {
            item: &mut *content,
            owner: &mut self.owner,
            host: &mut self.host,
            body: self.body,
            child_size: self.child_size,
            live: true,
        };
        Some(f(&mut self.bars, &mut target))
    }

    fn layout(&mut self) {
        let Some(item) = self.live_item() else {
            self.layout_detached();
            return;
        };
        let Some(mut content) = borrow_item(&item) else {
            log::debug!("{}: scroll item busy, skipping layout", self.name);
            return;
        };

        let viewport = self.viewport;
        let thickness = self.style.thickness;
        let extent = vec2(content.content_width().max(0), content.content_height().max(0));
        let (show_x, show_y) = negotiate_scrollbars(self.policy_x, self.policy_y, extent, vec2(viewport.width, viewport.height), thickness);

        let was_shown = (self.bars.h.is_visible(), self.bars.v.is_visible());
        if was_shown != (show_x, show_y) {
            log::debug!("{}: scrollbars x {} -> {}, y {} -> {}", self.name, was_shown.0, show_x, was_shown.1, show_y);
        }

        let body = rect(
            viewport.x,
            viewport.y,
            (viewport.width - if show_y { thickness } else { 0 }).max(0),
            (viewport.height - if show_x { thickness } else { 0 }).max(0),
        );
        self.body = body;
        self.child_size = vec2(
            if show_x && extent.x > body.width { extent.x } else { body.width },
            if show_y && extent.y > body.height { extent.y } else { body.height },
        );

        for (axis, shown) in [(ScrollAxis::Vertical, show_y), (ScrollAxis::Horizontal, show_x)] {
            let bar = self.bars.get_mut(axis);
            if shown {
                let track = scrollbar_base(axis, body, thickness);
                bar.set_track(track);
                bar.set_visible(true);
                self.host.place_scrollbar(axis, Some(track));
            } else {
                bar.set_track(Recti::default());
                bar.set_visible(false);
                self.host.place_scrollbar(axis, None);
            }
        }

        let mut target = Target {
            item: &mut *content,
            owner: &mut self.owner,
            host: &mut self.host,
            body,
            child_size: self.child_size,
            live: false,
        };
        for axis in [ScrollAxis::Vertical, ScrollAxis::Horizontal] {
            let bar = self.bars.get_mut(axis);
            bar.set_scroll_item(Some(&mut target));
            if !bar.is_visible() {
                target.set_scroll_offset(axis, 0);
            }
        }
        let child = target.child_rect();
        drop(target);

        content.update(child);
        self.host.place_content(child);
        self.host.invalidate(viewport);
    }

    fn layout_detached(&mut self) {
        self.owner = OffsetOwner::View(Vec2i::default());
        self.body = self.viewport;
        self.child_size = vec2(self.viewport.width, self.viewport.height);
        for axis in [ScrollAxis::Vertical, ScrollAxis::Horizontal] {
            let bar = self.bars.get_mut(axis);
            bar.set_scroll_item(None);
            bar.set_track(Recti::default());
            bar.set_visible(false);
            self.host.place_scrollbar(axis, None);
        }
        self.host.invalidate(self.viewport);
    }
}
