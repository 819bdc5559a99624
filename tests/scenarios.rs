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
use std::{cell::RefCell, rc::Rc};

use microui_scroll::*;

struct Column {
    height: i32,
    offset: i32,
}

impl Scrollable for Column {
    fn content_width(&self) -> i32 { 100 }
    fn content_height(&self) -> i32 { self.height }
    fn can_scroll_content(&self) -> bool { true }
    fn scroll_offset_y(&self) -> i32 { self.offset }
    fn set_scroll_offset_y(&mut self, y: i32) { self.offset = y; }
}

fn column_view(height: i32) -> (Rc<RefCell<Column>>, ScrollView) {
    let _ = env_logger::builder().is_test(true).try_init();
    let column = Rc::new(RefCell::new(Column { height, offset: 0 }));
    let mut view = ScrollView::new("column", ScrollStyle::default(), ());
    view.set_policy(ScrollAxis::Horizontal, ScrollbarPolicy::Never);
    view.update_scroll_view(0, 0, 100, 400);
    view.set_scroll_item(ScrollItem::borrowed(&column));
    (column, view)
}

#[test]
fn overflowing_column_gets_vertical_bar() {
    let (_column, view) = column_view(1000);
    let bar = view.scrollbar(ScrollAxis::Vertical);
    assert!(bar.is_visible());
    assert!(bar.has_scrollable_content());
    assert_eq!(bar.overflow(), 600);
    assert_eq!(bar.slider_size(), 160);
    assert_eq!(bar.scroll_step(), 2.5);
}

#[test]
fn scrolling_moves_slider() {
    let (column, mut view) = column_view(1000);
    assert!(view.scroll_content(0, 50));
    assert_eq!(column.borrow().offset, 50);
    assert_eq!(view.scrollbar(ScrollAxis::Vertical).slider_offset(), 20);
}

#[test]
fn fitting_column_hides_bar() {
    let (column, view) = column_view(400);
    let bar = view.scrollbar(ScrollAxis::Vertical);
    assert!(!bar.has_scrollable_content());
    assert!(!bar.is_visible());
    assert_eq!(column.borrow().offset, 0);
}

#[test]
fn dragging_slider_home_lands_on_zero() {
    let (column, mut view) = column_view(1000);
    view.scroll_content(0, 50);
    let track = view.scrollbar(ScrollAxis::Vertical).track();
    let grab = vec2(track.x + 4, track.y + 30);

    assert!(view.on_mouse_down(grab, MouseButton::LEFT));
    assert!(view.on_mouse_move(vec2(grab.x, grab.y - 20)));
    view.on_mouse_up(vec2(grab.x, grab.y - 20), MouseButton::LEFT);
    assert_eq!(column.borrow().offset, 0);
    assert_eq!(view.scrollbar(ScrollAxis::Vertical).slider_offset(), 0);
}

#[test]
fn dragging_slider_to_end_lands_on_overflow() {
    let (column, mut view) = column_view(1000);
    let grab = vec2(94, 10);
    assert!(view.on_mouse_down(grab, MouseButton::LEFT));
    assert!(view.on_mouse_move(vec2(94, 390)));
    view.on_mouse_up(vec2(94, 390), MouseButton::LEFT);
    assert_eq!(column.borrow().offset, 600);
}

#[test]
fn shrinking_content_resets_offset() {
    let (column, mut view) = column_view(1000);
    view.scroll_content(0, 600);
    assert_eq!(column.borrow().offset, 600);

    column.borrow_mut().height = 300;
    view.update_scroll_view(0, 0, 100, 400);
    assert_eq!(column.borrow().offset, 0);
    assert!(!view.scrollbar(ScrollAxis::Vertical).is_visible());
}

#[test]
fn slider_stays_inside_track_for_every_offset() {
    let (column, mut view) = column_view(1337);
    for offset in (0..=1000).step_by(7) {
        view.set_scroll_offset_y(offset);
        let bar = view.scrollbar(ScrollAxis::Vertical);
        assert!(bar.slider_offset() >= 0);
        assert!(bar.slider_offset() + bar.slider_size() <= bar.track_len());
        let current = column.borrow().offset;
        assert!((0..=bar.overflow()).contains(&current));
        let back = (bar.slider_offset() as f64 * bar.scroll_step()).round() as i32;
        assert!((back - current).abs() <= bar.scroll_step().ceil() as i32);
    }
}
